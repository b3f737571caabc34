//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WkGeomError {
    /// The operation needs at least one point, but the geometry has none.
    #[error("{geometry} is empty")]
    EmptyGeometry {
        /// Name of the geometry type the operation was called on.
        geometry: &'static str,
    },
    /// Point index is outside of `0..npoints`.
    #[error("point index {index} is out of range for {len} points")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of points in the geometry.
        len: usize,
    },
}

/// Result alias with [`WkGeomError`] as the error type.
pub type Result<T> = std::result::Result<T, WkGeomError>;
