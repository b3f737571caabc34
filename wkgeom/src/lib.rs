//! Geometry primitives in 2d and 3d space with optional measures.
//!
//! Every geometry implements the [`Geometry`] trait, which gives access to its SRID, measure flag and emptiness, and
//! provides the two operations of the crate: [`Geometry::envelope`] (axis-aligned bounding box) and
//! [`Geometry::to_wkt`] (Well-Known Text).
//!
//! Line strings, rings and polygons are generic over the point type, which is either [`Point2d`] or [`Point3d`].
//! The point type decides the coordinate space and the type of the envelope ([`Box2d`] or [`Box3d`]).
//!
//! ```
//! use wkgeom::{Box2d, Geometry, LineString, Point2d};
//!
//! let line = LineString::new(vec![Point2d::new(117.0, 32.0), Point2d::new(118.0, 33.0)]);
//! assert_eq!(line.envelope(), Ok(Box2d::new(117.0, 32.0, 118.0, 33.0)));
//! assert_eq!(line.to_wkt(), "LINESTRING(117 32, 118 33)");
//! ```

pub mod bbox;
pub mod coord;
pub mod envelope;
mod error;
pub mod geometry;
pub mod line_ring;
pub mod line_string;
pub mod point;
pub mod polygon;
mod wkt;

pub use bbox::{Box2d, Box3d};
pub use coord::{coord_eq, CoordNum, Dimension};
pub use envelope::{envelope_of, BoundingBox};
pub use error::{Result, WkGeomError};
pub use geometry::{Geom, Geometry};
pub use line_ring::LineRing;
pub use line_string::LineString;
pub use point::{GeomPoint, Point2d, Point3d};
pub use polygon::Polygon;
