//! Bounding box contract and the envelope computation over point sequences.

use std::fmt::Debug;

use crate::geometry::Geometry;
use crate::point::GeomPoint;

/// Axis-aligned box of one coordinate space. A box is its own envelope.
pub trait BoundingBox: Geometry<Envelope = Self> + Clone + PartialEq + Debug {
    /// Type of the points this box can bound.
    type Point: GeomPoint;

    /// Creates a degenerate box containing only the given point. The box takes the SRID of the point.
    fn from_point(point: &Self::Point) -> Self;

    /// Grows the box on every axis where the point lies outside of it.
    fn expand_to_point(&mut self, point: &Self::Point);
}

/// Computes the bounding box of the points in a single pass.
///
/// The box starts at the first point and is then expanded with every following point. Returns `None` if there are no
/// points.
pub fn envelope_of<'a, P: GeomPoint + 'a>(
    points: impl IntoIterator<Item = &'a P>,
) -> Option<P::Bounds> {
    let mut points = points.into_iter();
    let first = points.next()?;
    let mut bounds = P::Bounds::from_point(first);
    for p in points {
        bounds.expand_to_point(p);
    }

    Some(bounds)
}

#[cfg(test)]
mod tests {
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::{Box2d, Box3d, Point2d, Point3d};

    #[test]
    fn no_points() {
        assert_eq!(envelope_of::<Point2d>(&[]), None);
    }

    #[test]
    fn spanning_3d_points() {
        let points = [
            Point3d::new(3.0, 6.0, 2.0),
            Point3d::new(0.0, 4.0, 7.0),
            Point3d::new(5.0, 1.0, 5.0),
        ];
        assert_eq!(
            envelope_of(&points),
            Some(Box3d::new(0.0, 1.0, 2.0, 5.0, 6.0, 7.0))
        );
    }

    #[test]
    fn measures_are_not_bounded() {
        let points = [
            Point2d::new_measured(0.0, 0.0, -100.0),
            Point2d::new_measured(1.0, 1.0, 100.0),
        ];
        assert_eq!(envelope_of(&points), Some(Box2d::new(0.0, 0.0, 1.0, 1.0)));
    }

    #[quickcheck]
    fn matches_naive_min_max(coords: Vec<(f64, f64, f64)>) -> TestResult {
        let coords: Vec<_> = coords
            .into_iter()
            .filter(|(x, y, z)| x.is_finite() && y.is_finite() && z.is_finite())
            .collect();
        if coords.is_empty() {
            return TestResult::discard();
        }

        let points: Vec<Point3d> = coords
            .iter()
            .map(|&(x, y, z)| Point3d::new(x, y, z))
            .collect();

        let min = |f: fn(&(f64, f64, f64)) -> f64| {
            coords.iter().map(f).fold(f64::INFINITY, f64::min)
        };
        let max = |f: fn(&(f64, f64, f64)) -> f64| {
            coords.iter().map(f).fold(f64::NEG_INFINITY, f64::max)
        };
        let expected = Box3d::new(
            min(|c| c.0),
            min(|c| c.1),
            min(|c| c.2),
            max(|c| c.0),
            max(|c| c.1),
            max(|c| c.2),
        );

        TestResult::from_bool(envelope_of(&points) == Some(expected))
    }
}
