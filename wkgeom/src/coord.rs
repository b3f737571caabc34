//! Coordinate number type, tolerant comparison and dimension of a coordinate space.

use std::fmt::{Debug, Display};

use approx::AbsDiffEq;
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Numeric type that can be used for geometry coordinates and measures.
///
/// Implemented automatically for `f32` and `f64`.
pub trait CoordNum:
    Float + AbsDiffEq<Epsilon = Self> + Debug + Display + Default + 'static
{
}

impl<T> CoordNum for T where
    T: Float + AbsDiffEq<Epsilon = T> + Debug + Display + Default + 'static
{
}

/// Returns true if `|a - b|` is less than the machine epsilon of `N`.
///
/// This is the equality used by points and boxes. It is an absolute tolerance, so it is only meaningful for
/// coordinates close to the unit range; large coordinates effectively compare exactly.
pub fn coord_eq<N: CoordNum>(a: N, b: N) -> bool {
    (a - b).abs() < N::epsilon()
}

/// Number of spatial axes of a coordinate space. The measure is not an axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// `x, y`
    Xy,
    /// `x, y, z`
    Xyz,
}

impl Dimension {
    /// Whether positions carry a `z` coordinate.
    pub const fn has_z(self) -> bool {
        matches!(self, Dimension::Xyz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_within_epsilon() {
        assert!(coord_eq(1.0, 1.0 + 1e-16));
        assert!(coord_eq(0.0f32, f32::EPSILON / 2.0));
        assert!(!coord_eq(1.0, 1.0 + 1e-10));
        assert!(!coord_eq(1.0, 4.0));
    }

    #[test]
    fn non_finite_values_are_not_equal() {
        assert!(!coord_eq(f64::NAN, f64::NAN));
        assert!(!coord_eq(f64::INFINITY, f64::INFINITY));
    }

    #[test]
    fn dimension_z_axis() {
        assert!(!Dimension::Xy.has_z());
        assert!(Dimension::Xyz.has_z());
    }
}
