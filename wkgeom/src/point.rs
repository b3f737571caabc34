//! Points in 2d and 3d space, with an optional measure.

use std::fmt::{Debug, Display, Formatter, Write};

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::bbox::{Box2d, Box3d};
use crate::coord::{coord_eq, CoordNum, Dimension};
use crate::envelope::BoundingBox;
use crate::error::Result;
use crate::geometry::Geometry;
use crate::wkt::{write_position, WktTag};

/// Coordinate access common to [`Point2d`] and [`Point3d`].
///
/// Line strings, rings and polygons are generic over this trait, which fixes the coordinate space they live in.
pub trait GeomPoint: Geometry + Clone + PartialEq + Debug {
    /// Coordinate number type.
    type Num: CoordNum;
    /// Box type that can bound points of this type.
    type Bounds: BoundingBox<Point = Self>;

    /// Coordinate space of the point.
    const DIMENSION: Dimension;

    /// X coordinate.
    fn x(&self) -> Self::Num;

    /// Y coordinate.
    fn y(&self) -> Self::Num;

    /// Measure value, or zero if the point has no measure.
    fn m(&self) -> Self::Num;

    /// Iterates over the position coordinates (`x, y` or `x, y, z`), not including the measure.
    fn coords(&self) -> impl Iterator<Item = Self::Num>;
}

/// A point in 2d space with an optional measure.
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize)]
pub struct Point2d<N = f64> {
    x: N,
    y: N,
    m: N,
    has_m: bool,
    srid: i32,
}

impl<N: CoordNum> Point2d<N> {
    /// Creates a point without a measure.
    pub fn new(x: N, y: N) -> Self {
        Self {
            x,
            y,
            m: N::zero(),
            has_m: false,
            srid: 0,
        }
    }

    /// Creates a point with a measure.
    pub fn new_measured(x: N, y: N, m: N) -> Self {
        Self {
            x,
            y,
            m,
            has_m: true,
            srid: 0,
        }
    }

    /// Updates x coordinate.
    pub fn set_x(&mut self, x: N) {
        self.x = x;
    }

    /// Updates y coordinate.
    pub fn set_y(&mut self, y: N) {
        self.y = y;
    }

    /// Sets the measure. The point has a measure afterwards.
    pub fn set_m(&mut self, m: N) {
        self.m = m;
        self.has_m = true;
    }

    /// Moves the point to `(x, y)`.
    ///
    /// After the call the point has no measure and its SRID is `0`.
    pub fn set_xy(&mut self, x: N, y: N) {
        *self = Self::new(x, y);
    }

    /// Moves the point to `(x, y)` with measure `m`.
    ///
    /// After the call the point has a measure and its SRID is `0`.
    pub fn set_xym(&mut self, x: N, y: N, m: N) {
        *self = Self::new_measured(x, y, m);
    }
}

impl<N: CoordNum> GeomPoint for Point2d<N> {
    type Num = N;
    type Bounds = Box2d<N>;

    const DIMENSION: Dimension = Dimension::Xy;

    fn x(&self) -> N {
        self.x
    }

    fn y(&self) -> N {
        self.y
    }

    fn m(&self) -> N {
        if self.has_m {
            self.m
        } else {
            N::zero()
        }
    }

    fn coords(&self) -> impl Iterator<Item = N> {
        [self.x, self.y].into_iter()
    }
}

impl<N: CoordNum> Geometry for Point2d<N> {
    type Envelope = Box2d<N>;

    fn srid(&self) -> i32 {
        self.srid
    }

    fn set_srid(&mut self, srid: i32) {
        self.srid = srid;
    }

    fn has_m(&self) -> bool {
        self.has_m
    }

    fn is_empty(&self) -> bool {
        false
    }

    fn envelope(&self) -> Result<Box2d<N>> {
        Ok(Box2d::from_point(self))
    }
}

impl<N: CoordNum> Display for Point2d<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        WktTag::new("POINT", Dimension::Xy, self.has_m).write_head(f)?;
        f.write_char('(')?;
        write_position(f, self, self.has_m)?;
        f.write_char(')')
    }
}

/// Positions and measures are compared with [`coord_eq`]. SRID is ignored.
impl<N: CoordNum> PartialEq for Point2d<N> {
    fn eq(&self, other: &Self) -> bool {
        coord_eq(self.x, other.x) && coord_eq(self.y, other.y) && coord_eq(self.m(), other.m())
    }
}

impl<N: CoordNum> AbsDiffEq for Point2d<N> {
    type Epsilon = N;

    fn default_epsilon() -> Self::Epsilon {
        N::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.m().abs_diff_eq(&other.m(), epsilon)
    }
}

/// A point in 3d space with an optional measure.
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize)]
pub struct Point3d<N = f64> {
    x: N,
    y: N,
    z: N,
    m: N,
    has_m: bool,
    srid: i32,
}

impl<N: CoordNum> Point3d<N> {
    /// Creates a point without a measure.
    pub fn new(x: N, y: N, z: N) -> Self {
        Self {
            x,
            y,
            z,
            m: N::zero(),
            has_m: false,
            srid: 0,
        }
    }

    /// Creates a point with a measure.
    pub fn new_measured(x: N, y: N, z: N, m: N) -> Self {
        Self {
            x,
            y,
            z,
            m,
            has_m: true,
            srid: 0,
        }
    }

    /// Z coordinate.
    pub fn z(&self) -> N {
        self.z
    }

    /// Updates x coordinate.
    pub fn set_x(&mut self, x: N) {
        self.x = x;
    }

    /// Updates y coordinate.
    pub fn set_y(&mut self, y: N) {
        self.y = y;
    }

    /// Updates z coordinate.
    pub fn set_z(&mut self, z: N) {
        self.z = z;
    }

    /// Sets the measure. The point has a measure afterwards.
    pub fn set_m(&mut self, m: N) {
        self.m = m;
        self.has_m = true;
    }

    /// Moves the point to `(x, y, z)`.
    ///
    /// After the call the point has no measure and its SRID is `0`.
    pub fn set_xyz(&mut self, x: N, y: N, z: N) {
        *self = Self::new(x, y, z);
    }

    /// Moves the point to `(x, y, z)` with measure `m`.
    ///
    /// After the call the point has a measure and its SRID is `0`.
    pub fn set_xyzm(&mut self, x: N, y: N, z: N, m: N) {
        *self = Self::new_measured(x, y, z, m);
    }
}

impl<N: CoordNum> GeomPoint for Point3d<N> {
    type Num = N;
    type Bounds = Box3d<N>;

    const DIMENSION: Dimension = Dimension::Xyz;

    fn x(&self) -> N {
        self.x
    }

    fn y(&self) -> N {
        self.y
    }

    fn m(&self) -> N {
        if self.has_m {
            self.m
        } else {
            N::zero()
        }
    }

    fn coords(&self) -> impl Iterator<Item = N> {
        [self.x, self.y, self.z].into_iter()
    }
}

impl<N: CoordNum> Geometry for Point3d<N> {
    type Envelope = Box3d<N>;

    fn srid(&self) -> i32 {
        self.srid
    }

    fn set_srid(&mut self, srid: i32) {
        self.srid = srid;
    }

    fn has_m(&self) -> bool {
        self.has_m
    }

    fn is_empty(&self) -> bool {
        false
    }

    fn envelope(&self) -> Result<Box3d<N>> {
        Ok(Box3d::from_point(self))
    }
}

impl<N: CoordNum> Display for Point3d<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        WktTag::new("POINT", Dimension::Xyz, self.has_m).write_head(f)?;
        f.write_char('(')?;
        write_position(f, self, self.has_m)?;
        f.write_char(')')
    }
}

/// Positions and measures are compared with [`coord_eq`], and both points must agree on having a measure. SRID is
/// ignored.
impl<N: CoordNum> PartialEq for Point3d<N> {
    fn eq(&self, other: &Self) -> bool {
        self.has_m == other.has_m
            && coord_eq(self.x, other.x)
            && coord_eq(self.y, other.y)
            && coord_eq(self.z, other.z)
            && coord_eq(self.m(), other.m())
    }
}

impl<N: CoordNum> AbsDiffEq for Point3d<N> {
    type Epsilon = N;

    fn default_epsilon() -> Self::Epsilon {
        N::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.has_m == other.has_m
            && self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
            && self.m().abs_diff_eq(&other.m(), epsilon)
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_abs_diff_ne};

    use super::*;

    #[test]
    fn point_init() {
        let mut p = Point2d::new_measured(1.0, 2.0, 3.0);
        p.set_srid(4326);
        assert_eq!(p.x(), 1.0);
        assert_eq!(p.y(), 2.0);
        assert_eq!(p.m(), 3.0);
        assert!(p.has_m());
        assert_eq!(p.srid(), 4326);
        assert!(!p.is_empty());
    }

    #[test]
    fn measure_defaults_to_zero() {
        let p = Point3d::new(1.0, 2.0, 3.0);
        assert!(!p.has_m());
        assert_eq!(p.m(), 0.0);
        assert_eq!(p.z(), 3.0);
    }

    #[test]
    fn setters_reset_srid() {
        let mut p = Point2d::new_measured(1.0, 2.0, 3.0);
        p.set_srid(4326);
        p.set_xy(5.0, 6.0);
        assert_eq!(p.srid(), 0);
        assert!(!p.has_m());
        assert_eq!(p.m(), 0.0);

        p.set_srid(4326);
        p.set_xym(0.0, 1.0, 2.0);
        assert_eq!(p.srid(), 0);
        assert!(p.has_m());
        assert_eq!(p.m(), 2.0);

        let mut p = Point3d::new(1.0, 2.0, 3.0);
        p.set_srid(3857);
        p.set_xyzm(4.0, 5.0, 6.0, 7.0);
        assert_eq!(p.srid(), 0);
        assert_eq!(p.m(), 7.0);
        p.set_srid(3857);
        p.set_xyz(4.0, 5.0, 6.0);
        assert_eq!(p.srid(), 0);
        assert!(!p.has_m());
    }

    #[test]
    fn single_axis_setters_keep_srid() {
        let mut p = Point3d::new(1.0, 2.0, 3.0);
        p.set_srid(4326);
        p.set_x(10.0);
        p.set_y(20.0);
        p.set_z(30.0);
        assert_eq!(p.srid(), 4326);
        assert_eq!(p.coords().collect::<Vec<_>>(), vec![10.0, 20.0, 30.0]);

        p.set_m(5.0);
        assert!(p.has_m());
        assert_eq!(p.m(), 5.0);
    }

    #[test]
    fn point_compare() {
        let p1 = Point2d::new_measured(1.0, 2.0, 3.0);
        let p2 = Point2d::new_measured(1.0, 2.0, 3.0);
        let p3 = Point2d::new_measured(4.0, 5.0, 6.0);
        assert_eq!(p1, p2);
        assert_eq!(p2, p1);
        assert_ne!(p1, p3);
        assert_ne!(p3, p1);

        let a = Point3d::new(1.0, 2.0, 3.0);
        let b = Point3d::new(1.0 + 1e-16, 2.0, 3.0);
        let c = Point3d::new(4.0, 5.0, 6.0);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_ne!(a, c);
        assert_ne!(c, a);
    }

    #[test]
    fn compare_ignores_srid() {
        let mut p1 = Point2d::new(1.0, 2.0);
        p1.set_srid(4326);
        assert_eq!(p1, Point2d::new(1.0, 2.0));
    }

    #[test]
    fn measure_flag_in_compare() {
        // 2d points only compare measure values.
        assert_eq!(Point2d::new(1.0, 2.0), Point2d::new_measured(1.0, 2.0, 0.0));
        assert_ne!(
            Point3d::new(1.0, 2.0, 3.0),
            Point3d::new_measured(1.0, 2.0, 3.0, 0.0)
        );
    }

    #[test]
    fn abs_diff_eq() {
        assert_abs_diff_eq!(
            Point2d::new(1.0, 2.0),
            Point2d::new(1.001, 2.0),
            epsilon = 0.01
        );
        assert_abs_diff_ne!(Point2d::new(1.0, 2.0), Point2d::new(1.001, 2.0));
        assert_abs_diff_eq!(
            Point3d::new_measured(1.0, 2.0, 3.0, 4.0),
            Point3d::new_measured(1.0, 2.0, 3.0, 4.005),
            epsilon = 0.01
        );
    }

    #[test]
    fn point_envelope() {
        let mut p = Point2d::new(117.0, 32.0);
        p.set_srid(4326);
        let envelope = p.envelope().expect("points are never empty");
        assert_eq!(envelope, Box2d::new(117.0, 32.0, 117.0, 32.0));
        assert_eq!(envelope.srid(), 4326);

        let p = Point3d::new(1.0, 2.0, 3.0);
        assert_eq!(p.envelope(), Ok(Box3d::new(1.0, 2.0, 3.0, 1.0, 2.0, 3.0)));
    }

    #[test]
    fn point_wkt() {
        assert_eq!(Point2d::new(1.0, 2.0).to_wkt(), "POINT(1 2)");
        assert_eq!(Point2d::new_measured(1.0, 2.0, 3.0).to_wkt(), "POINT M(1 2 3)");
        assert_eq!(Point3d::new(1.5, 2.0, -3.0).to_wkt(), "POINT Z(1.5 2 -3)");
        assert_eq!(
            Point3d::new_measured(1.0, 2.0, 3.0, 0.1).to_wkt(),
            "POINT ZM(1 2 3 0.1)"
        );
        assert_eq!(Point2d::new(0.5f32, 2.0).to_wkt(), "POINT(0.5 2)");
    }

    #[test]
    fn serde_keeps_measure_and_srid() {
        let mut p = Point3d::new_measured(1.0, 2.0, 3.0, 4.0);
        p.set_srid(4326);
        let json = serde_json::to_string(&p).expect("serialization");
        let restored: Point3d = serde_json::from_str(&json).expect("deserialization");
        assert_eq!(restored, p);
        assert_eq!(restored.srid(), 4326);
        assert!(restored.has_m());
    }
}
