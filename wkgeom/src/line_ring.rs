//! Closed sequence of points.

use std::fmt::{Display, Formatter};

use log::debug;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, WkGeomError};
use crate::geometry::Geometry;
use crate::line_string::LineString;
use crate::point::GeomPoint;

/// Line string whose first point is equal to its last point.
///
/// A ring is used as the boundary of a [`Polygon`](crate::Polygon). The points of a ring cannot be changed in place,
/// so a non-empty ring always stays closed.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LineRing<P> {
    line: LineString<P>,
}

impl<P: GeomPoint> LineRing<P> {
    /// Creates a ring from the points.
    ///
    /// If the last point is not equal to the first one, a copy of the first point is appended to close the ring.
    /// An empty vector gives an empty ring.
    pub fn new(mut points: Vec<P>) -> Self {
        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            if first != last {
                debug!("Closing ring of {} points", points.len());
                let closing = first.clone();
                points.push(closing);
            }
        }

        Self {
            line: LineString::new(points),
        }
    }

    /// Number of points, including the closing one.
    pub fn npoints(&self) -> usize {
        self.line.npoints()
    }

    /// Points of the ring, including the closing one.
    pub fn points(&self) -> &[P] {
        self.line.points()
    }

    /// Iterates over the points of the ring, including the closing one.
    pub fn iter_points(&self) -> impl Iterator<Item = &'_ P> {
        self.line.iter_points()
    }

    /// Returns the point at `index`. See [`LineString::point_at`].
    pub fn point_at(&self, index: usize) -> Result<&P> {
        ring_error(self.line.point_at(index))
    }

    /// First point.
    pub fn first_point(&self) -> Result<&P> {
        ring_error(self.line.first_point())
    }

    /// Last point. Equal to the first point.
    pub fn last_point(&self) -> Result<&P> {
        ring_error(self.line.last_point())
    }

    /// True for all non-empty rings.
    pub fn is_closed(&self) -> bool {
        self.line.is_closed()
    }

    /// The ring as a line string.
    pub fn as_line_string(&self) -> &LineString<P> {
        &self.line
    }

    /// Takes the points out of the ring, including the closing one.
    pub fn into_points(self) -> Vec<P> {
        self.line.into_points()
    }
}

fn ring_error<T>(result: Result<T>) -> Result<T> {
    result.map_err(|err| match err {
        WkGeomError::EmptyGeometry { .. } => WkGeomError::EmptyGeometry {
            geometry: "LineRing",
        },
        other => other,
    })
}

impl<P: GeomPoint> Geometry for LineRing<P> {
    type Envelope = P::Bounds;

    fn srid(&self) -> i32 {
        self.line.srid()
    }

    fn set_srid(&mut self, srid: i32) {
        self.line.set_srid(srid);
    }

    fn has_m(&self) -> bool {
        self.line.has_m()
    }

    fn is_empty(&self) -> bool {
        self.line.is_empty()
    }

    fn envelope(&self) -> Result<P::Bounds> {
        ring_error(self.line.envelope())
    }
}

impl<P: GeomPoint> Display for LineRing<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.line.write_wkt(f, "LINEARRING")
    }
}

/// Closes the line string if needed. The SRID is kept.
impl<P: GeomPoint> From<LineString<P>> for LineRing<P> {
    fn from(value: LineString<P>) -> Self {
        let srid = value.srid();
        let mut ring = Self::new(value.into_points());
        ring.set_srid(srid);
        ring
    }
}

impl<P> From<LineRing<P>> for LineString<P> {
    fn from(value: LineRing<P>) -> Self {
        value.line
    }
}

impl<'de, P> Deserialize<'de> for LineRing<P>
where
    P: GeomPoint + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        LineString::<P>::deserialize(deserializer).map(Self::from)
    }
}
