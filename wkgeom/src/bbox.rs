//! Axis-aligned boxes: [`Box2d`] rectangles and [`Box3d`] cuboids.
//!
//! Both types assume `min <= max` on every axis. The constructors do not check or reorder the values.

use std::fmt::{Display, Formatter, Write};

use serde::{Deserialize, Serialize};

use crate::coord::{coord_eq, CoordNum, Dimension};
use crate::envelope::BoundingBox;
use crate::error::Result;
use crate::geometry::Geometry;
use crate::line_ring::LineRing;
use crate::point::{GeomPoint, Point2d, Point3d};
use crate::polygon::Polygon;
use crate::wkt::{write_point_list, WktTag};

/// Axis-aligned rectangle.
///
/// A `Box2d` is a polygon without holes whose exterior ring goes
/// `(x_min, y_min) -> (x_min, y_max) -> (x_max, y_max) -> (x_max, y_min) -> (x_min, y_min)`.
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize)]
pub struct Box2d<N = f64> {
    x_min: N,
    y_min: N,
    x_max: N,
    y_max: N,
    srid: i32,
}

impl<N: CoordNum> Box2d<N> {
    /// Creates a new rectangle.
    pub fn new(x_min: N, y_min: N, x_max: N, y_max: N) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
            srid: 0,
        }
    }

    /// Minimum x.
    pub fn x_min(&self) -> N {
        self.x_min
    }

    /// Minimum y.
    pub fn y_min(&self) -> N {
        self.y_min
    }

    /// Maximum x.
    pub fn x_max(&self) -> N {
        self.x_max
    }

    /// Maximum y.
    pub fn y_max(&self) -> N {
        self.y_max
    }

    /// Size along the x axis.
    pub fn width(&self) -> N {
        self.x_max - self.x_min
    }

    /// Size along the y axis.
    pub fn height(&self) -> N {
        self.y_max - self.y_min
    }

    /// Center of the rectangle.
    pub fn center(&self) -> Point2d<N> {
        let two = N::one() + N::one();
        Point2d::new(
            (self.x_min + self.x_max) / two,
            (self.y_min + self.y_max) / two,
        )
    }

    /// Smallest rectangle containing both `self` and `other`. Keeps the SRID of `self`.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            x_min: self.x_min.min(other.x_min),
            y_min: self.y_min.min(other.y_min),
            x_max: self.x_max.max(other.x_max),
            y_max: self.y_max.max(other.y_max),
            srid: self.srid,
        }
    }

    fn corners(&self) -> [Point2d<N>; 5] {
        [
            Point2d::new(self.x_min, self.y_min),
            Point2d::new(self.x_min, self.y_max),
            Point2d::new(self.x_max, self.y_max),
            Point2d::new(self.x_max, self.y_min),
            Point2d::new(self.x_min, self.y_min),
        ]
    }

    /// The closed 5-point exterior ring of the rectangle.
    pub fn exterior(&self) -> LineRing<Point2d<N>> {
        let mut ring = LineRing::new(Vec::from(self.corners()));
        ring.set_srid(self.srid);
        ring
    }

    /// Holes of the rectangle, always empty.
    pub fn holes(&self) -> &[LineRing<Point2d<N>>] {
        &[]
    }

    /// Converts the rectangle into a polygon with the same exterior and SRID.
    pub fn to_polygon(&self) -> Polygon<Point2d<N>> {
        let mut polygon = Polygon::new(self.exterior(), vec![]);
        polygon.set_srid(self.srid);
        polygon
    }
}

impl<N: CoordNum> BoundingBox for Box2d<N> {
    type Point = Point2d<N>;

    fn from_point(point: &Point2d<N>) -> Self {
        Self {
            x_min: point.x(),
            y_min: point.y(),
            x_max: point.x(),
            y_max: point.y(),
            srid: point.srid(),
        }
    }

    fn expand_to_point(&mut self, point: &Point2d<N>) {
        let (x, y) = (point.x(), point.y());
        if x < self.x_min {
            self.x_min = x;
        }
        if x > self.x_max {
            self.x_max = x;
        }
        if y < self.y_min {
            self.y_min = y;
        }
        if y > self.y_max {
            self.y_max = y;
        }
    }
}

impl<N: CoordNum> Geometry for Box2d<N> {
    type Envelope = Self;

    fn srid(&self) -> i32 {
        self.srid
    }

    fn set_srid(&mut self, srid: i32) {
        self.srid = srid;
    }

    fn has_m(&self) -> bool {
        false
    }

    fn is_empty(&self) -> bool {
        false
    }

    fn envelope(&self) -> Result<Self> {
        Ok(*self)
    }
}

impl<N: CoordNum> Display for Box2d<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        WktTag::new("POLYGON", Dimension::Xy, false).write_head(f)?;
        f.write_char('(')?;
        write_point_list(f, &self.corners(), false)?;
        f.write_char(')')
    }
}

/// Extremes are compared with [`coord_eq`]. SRID is ignored.
impl<N: CoordNum> PartialEq for Box2d<N> {
    fn eq(&self, other: &Self) -> bool {
        coord_eq(self.x_min, other.x_min)
            && coord_eq(self.y_min, other.y_min)
            && coord_eq(self.x_max, other.x_max)
            && coord_eq(self.y_max, other.y_max)
    }
}

impl<N: CoordNum> From<Box2d<N>> for Polygon<Point2d<N>> {
    fn from(value: Box2d<N>) -> Self {
        value.to_polygon()
    }
}

/// Axis-aligned cuboid.
///
/// Unlike [`Box2d`], a cuboid is not a polygon. Its WKT is a `POLYHEDRALSURFACE Z` made of the six faces.
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize)]
pub struct Box3d<N = f64> {
    x_min: N,
    y_min: N,
    z_min: N,
    x_max: N,
    y_max: N,
    z_max: N,
    srid: i32,
}

impl<N: CoordNum> Box3d<N> {
    /// Creates a new cuboid.
    pub fn new(x_min: N, y_min: N, z_min: N, x_max: N, y_max: N, z_max: N) -> Self {
        Self {
            x_min,
            y_min,
            z_min,
            x_max,
            y_max,
            z_max,
            srid: 0,
        }
    }

    /// Minimum x.
    pub fn x_min(&self) -> N {
        self.x_min
    }

    /// Minimum y.
    pub fn y_min(&self) -> N {
        self.y_min
    }

    /// Minimum z.
    pub fn z_min(&self) -> N {
        self.z_min
    }

    /// Maximum x.
    pub fn x_max(&self) -> N {
        self.x_max
    }

    /// Maximum y.
    pub fn y_max(&self) -> N {
        self.y_max
    }

    /// Maximum z.
    pub fn z_max(&self) -> N {
        self.z_max
    }

    /// Size along the x axis.
    pub fn width(&self) -> N {
        self.x_max - self.x_min
    }

    /// Size along the y axis.
    pub fn height(&self) -> N {
        self.y_max - self.y_min
    }

    /// Size along the z axis.
    pub fn depth(&self) -> N {
        self.z_max - self.z_min
    }

    /// Center of the cuboid.
    pub fn center(&self) -> Point3d<N> {
        let two = N::one() + N::one();
        Point3d::new(
            (self.x_min + self.x_max) / two,
            (self.y_min + self.y_max) / two,
            (self.z_min + self.z_max) / two,
        )
    }

    /// Smallest cuboid containing both `self` and `other`. Keeps the SRID of `self`.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            x_min: self.x_min.min(other.x_min),
            y_min: self.y_min.min(other.y_min),
            z_min: self.z_min.min(other.z_min),
            x_max: self.x_max.max(other.x_max),
            y_max: self.y_max.max(other.y_max),
            z_max: self.z_max.max(other.z_max),
            srid: self.srid,
        }
    }

    /// Closed rings of the six faces: bottom, top, then the sides at `y_min`, `y_max`, `x_min` and `x_max`.
    fn faces(&self) -> [[Point3d<N>; 5]; 6] {
        let (x0, y0, z0) = (self.x_min, self.y_min, self.z_min);
        let (x1, y1, z1) = (self.x_max, self.y_max, self.z_max);
        let face = |a: (N, N, N), b: (N, N, N), c: (N, N, N), d: (N, N, N)| {
            [a, b, c, d, a].map(|(x, y, z)| Point3d::new(x, y, z))
        };

        [
            face((x0, y0, z0), (x0, y1, z0), (x1, y1, z0), (x1, y0, z0)),
            face((x0, y0, z1), (x1, y0, z1), (x1, y1, z1), (x0, y1, z1)),
            face((x0, y0, z0), (x1, y0, z0), (x1, y0, z1), (x0, y0, z1)),
            face((x0, y1, z0), (x0, y1, z1), (x1, y1, z1), (x1, y1, z0)),
            face((x0, y0, z0), (x0, y0, z1), (x0, y1, z1), (x0, y1, z0)),
            face((x1, y0, z0), (x1, y1, z0), (x1, y1, z1), (x1, y0, z1)),
        ]
    }
}

impl<N: CoordNum> BoundingBox for Box3d<N> {
    type Point = Point3d<N>;

    fn from_point(point: &Point3d<N>) -> Self {
        Self {
            x_min: point.x(),
            y_min: point.y(),
            z_min: point.z(),
            x_max: point.x(),
            y_max: point.y(),
            z_max: point.z(),
            srid: point.srid(),
        }
    }

    fn expand_to_point(&mut self, point: &Point3d<N>) {
        let (x, y, z) = (point.x(), point.y(), point.z());
        if x < self.x_min {
            self.x_min = x;
        }
        if x > self.x_max {
            self.x_max = x;
        }
        if y < self.y_min {
            self.y_min = y;
        }
        if y > self.y_max {
            self.y_max = y;
        }
        if z < self.z_min {
            self.z_min = z;
        }
        if z > self.z_max {
            self.z_max = z;
        }
    }
}

impl<N: CoordNum> Geometry for Box3d<N> {
    type Envelope = Self;

    fn srid(&self) -> i32 {
        self.srid
    }

    fn set_srid(&mut self, srid: i32) {
        self.srid = srid;
    }

    fn has_m(&self) -> bool {
        false
    }

    fn is_empty(&self) -> bool {
        false
    }

    fn envelope(&self) -> Result<Self> {
        Ok(*self)
    }
}

impl<N: CoordNum> Display for Box3d<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        WktTag::new("POLYHEDRALSURFACE", Dimension::Xyz, false).write_head(f)?;
        f.write_char('(')?;
        for (i, face) in self.faces().iter().enumerate() {
            if i > 0 {
                f.write_char(',')?;
            }
            f.write_char('(')?;
            write_point_list(f, face, false)?;
            f.write_char(')')?;
        }
        f.write_char(')')
    }
}

/// Extremes are compared with [`coord_eq`]. SRID is ignored.
impl<N: CoordNum> PartialEq for Box3d<N> {
    fn eq(&self, other: &Self) -> bool {
        coord_eq(self.x_min, other.x_min)
            && coord_eq(self.y_min, other.y_min)
            && coord_eq(self.z_min, other.z_min)
            && coord_eq(self.x_max, other.x_max)
            && coord_eq(self.y_max, other.y_max)
            && coord_eq(self.z_max, other.z_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_exterior() {
        let exterior = Box2d::new(117.0, 32.0, 118.0, 33.0).exterior();

        assert_eq!(exterior.npoints(), 5);
        assert_eq!(
            exterior.points(),
            &[
                Point2d::new(117.0, 32.0),
                Point2d::new(117.0, 33.0),
                Point2d::new(118.0, 33.0),
                Point2d::new(118.0, 32.0),
                Point2d::new(117.0, 32.0),
            ]
        );
        assert_eq!(exterior.first_point(), exterior.last_point());
        assert_eq!(
            exterior.to_wkt(),
            "LINEARRING(117 32, 117 33, 118 33, 118 32, 117 32)"
        );
    }

    #[test]
    fn box_as_polygon() {
        let mut b = Box2d::new(117.0, 32.0, 118.0, 33.0);
        b.set_srid(4326);
        assert!(b.holes().is_empty());
        assert!(!b.is_empty());
        assert!(!b.has_m());

        let polygon = Polygon::from(b);
        assert_eq!(polygon.srid(), 4326);
        assert!(polygon.holes().is_empty());
        assert_eq!(polygon.to_wkt(), b.to_wkt());
        assert_eq!(
            b.to_wkt(),
            "POLYGON((117 32, 117 33, 118 33, 118 32, 117 32))"
        );
    }

    #[test]
    fn envelope_is_idempotent() {
        let mut b = Box2d::new(117.0, 32.0, 118.0, 33.0);
        b.set_srid(4326);
        let envelope = b.envelope().expect("boxes are never empty");
        assert_eq!(envelope, b);
        assert_eq!(envelope.srid(), 4326);

        let b = Box3d::new(0.0, 1.0, 2.0, 5.0, 6.0, 7.0);
        assert_eq!(b.envelope(), Ok(b));
    }

    #[test]
    fn box_compare() {
        assert_eq!(
            Box2d::new(117.0, 32.0, 118.0, 33.0),
            Box2d::new(117.0, 32.0 + 1e-15, 118.0, 33.0)
        );
        assert_ne!(
            Box2d::new(117.0, 32.0, 118.0, 33.0),
            Box2d::new(117.0, 32.0, 118.0, 34.0)
        );
        assert_ne!(
            Box3d::new(0.0, 0.0, 0.0, 1.0, 1.0, 1.0),
            Box3d::new(0.0, 0.0, 0.0, 1.0, 1.0, 2.0)
        );
    }

    #[test]
    fn box_sizes() {
        let b = Box2d::new(-1.0, 2.0, 3.0, 8.0);
        assert_eq!(b.width(), 4.0);
        assert_eq!(b.height(), 6.0);
        assert_eq!(b.center(), Point2d::new(1.0, 5.0));

        let b = Box3d::new(0.0, 1.0, 2.0, 5.0, 6.0, 7.0);
        assert_eq!(b.depth(), 5.0);
        assert_eq!(b.center(), Point3d::new(2.5, 3.5, 4.5));
    }

    #[test]
    fn merge() {
        let a = Box2d::new(0.0, 0.0, 1.0, 1.0);
        let b = Box2d::new(-1.0, 0.5, 0.5, 3.0);
        assert_eq!(a.merge(b), Box2d::new(-1.0, 0.0, 1.0, 3.0));

        let a = Box3d::new(0.0, 0.0, 0.0, 1.0, 1.0, 1.0);
        let b = Box3d::new(2.0, 2.0, -2.0, 3.0, 3.0, 0.0);
        assert_eq!(a.merge(b), Box3d::new(0.0, 0.0, -2.0, 3.0, 3.0, 1.0));
    }

    #[test]
    fn box_3d_wkt() {
        let b = Box3d::new(0.0, 0.0, 0.0, 1.0, 2.0, 3.0);
        assert_eq!(
            b.to_wkt(),
            "POLYHEDRALSURFACE Z(\
             ((0 0 0, 0 2 0, 1 2 0, 1 0 0, 0 0 0)),\
             ((0 0 3, 1 0 3, 1 2 3, 0 2 3, 0 0 3)),\
             ((0 0 0, 1 0 0, 1 0 3, 0 0 3, 0 0 0)),\
             ((0 2 0, 0 2 3, 1 2 3, 1 2 0, 0 2 0)),\
             ((0 0 0, 0 0 3, 0 2 3, 0 2 0, 0 0 0)),\
             ((1 0 0, 1 2 0, 1 2 3, 1 0 3, 1 0 0)))"
        );
    }
}
