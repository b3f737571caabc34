//! The [`Geometry`] contract shared by all geometry types, and the [`Geom`] enum over them.

use std::fmt::{Display, Formatter};

use crate::envelope::BoundingBox;
use crate::error::Result;
use crate::line_ring::LineRing;
use crate::line_string::LineString;
use crate::point::GeomPoint;
use crate::polygon::Polygon;

/// Attributes and operations every geometry has.
///
/// The `Display` implementation of a geometry renders its WKT.
pub trait Geometry: Display {
    /// Axis-aligned box type returned by [`Geometry::envelope`].
    type Envelope;

    /// Spatial reference identifier. `0` means unspecified.
    fn srid(&self) -> i32;

    /// Sets the spatial reference identifier.
    fn set_srid(&mut self, srid: i32);

    /// Whether the geometry carries measure values.
    fn has_m(&self) -> bool;

    /// True if the geometry has no points.
    fn is_empty(&self) -> bool;

    /// Returns the smallest axis-aligned box containing the geometry.
    ///
    /// The returned box has the same SRID as the geometry. Fails with
    /// [`WkGeomError::EmptyGeometry`](crate::WkGeomError::EmptyGeometry) for empty geometries.
    fn envelope(&self) -> Result<Self::Envelope>;

    /// Renders the geometry as Well-Known Text.
    fn to_wkt(&self) -> String {
        self.to_string()
    }
}

/// Any of the geometries of one coordinate space.
#[derive(Debug, Clone, PartialEq)]
pub enum Geom<P: GeomPoint> {
    /// Point.
    Point(P),
    /// Open sequence of points.
    LineString(LineString<P>),
    /// Closed sequence of points.
    LineRing(LineRing<P>),
    /// Polygon with optional holes.
    Polygon(Polygon<P>),
    /// Axis-aligned box.
    Box(P::Bounds),
}

impl<P: GeomPoint> Geometry for Geom<P> {
    type Envelope = P::Bounds;

    fn srid(&self) -> i32 {
        match self {
            Geom::Point(v) => v.srid(),
            Geom::LineString(v) => v.srid(),
            Geom::LineRing(v) => v.srid(),
            Geom::Polygon(v) => v.srid(),
            Geom::Box(v) => v.srid(),
        }
    }

    fn set_srid(&mut self, srid: i32) {
        match self {
            Geom::Point(v) => v.set_srid(srid),
            Geom::LineString(v) => v.set_srid(srid),
            Geom::LineRing(v) => v.set_srid(srid),
            Geom::Polygon(v) => v.set_srid(srid),
            Geom::Box(v) => v.set_srid(srid),
        }
    }

    fn has_m(&self) -> bool {
        match self {
            Geom::Point(v) => v.has_m(),
            Geom::LineString(v) => v.has_m(),
            Geom::LineRing(v) => v.has_m(),
            Geom::Polygon(v) => v.has_m(),
            Geom::Box(v) => v.has_m(),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            Geom::Point(v) => v.is_empty(),
            Geom::LineString(v) => v.is_empty(),
            Geom::LineRing(v) => v.is_empty(),
            Geom::Polygon(v) => v.is_empty(),
            Geom::Box(v) => v.is_empty(),
        }
    }

    fn envelope(&self) -> Result<P::Bounds> {
        match self {
            Geom::Point(v) => Ok(P::Bounds::from_point(v)),
            Geom::LineString(v) => v.envelope(),
            Geom::LineRing(v) => v.envelope(),
            Geom::Polygon(v) => v.envelope(),
            Geom::Box(v) => v.envelope(),
        }
    }
}

impl<P: GeomPoint> Display for Geom<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Geom::Point(v) => Display::fmt(v, f),
            Geom::LineString(v) => Display::fmt(v, f),
            Geom::LineRing(v) => Display::fmt(v, f),
            Geom::Polygon(v) => Display::fmt(v, f),
            Geom::Box(v) => Display::fmt(v, f),
        }
    }
}

impl<P: GeomPoint> From<LineString<P>> for Geom<P> {
    fn from(value: LineString<P>) -> Self {
        Self::LineString(value)
    }
}

impl<P: GeomPoint> From<LineRing<P>> for Geom<P> {
    fn from(value: LineRing<P>) -> Self {
        Self::LineRing(value)
    }
}

impl<P: GeomPoint> From<Polygon<P>> for Geom<P> {
    fn from(value: Polygon<P>) -> Self {
        Self::Polygon(value)
    }
}
