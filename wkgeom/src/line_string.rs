//! Open sequence of points.

use std::fmt::{Display, Formatter};

use log::trace;
use serde::{Deserialize, Deserializer, Serialize};

use crate::envelope::envelope_of;
use crate::error::{Result, WkGeomError};
use crate::geometry::Geometry;
use crate::point::GeomPoint;
use crate::wkt::write_curve;

/// Ordered sequence of points. The order of the points is the order they were given in.
///
/// Whether the line string has measures is decided by its first point when it is created, including when it is
/// deserialized.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct LineString<P> {
    points: Vec<P>,
    has_m: bool,
    srid: i32,
}

impl<P> LineString<P> {
    /// Number of points.
    pub fn npoints(&self) -> usize {
        self.points.len()
    }

    /// Points of the line string.
    pub fn points(&self) -> &[P] {
        &self.points
    }

    /// Iterates over the points of the line string.
    pub fn iter_points(&self) -> impl Iterator<Item = &'_ P> {
        self.points.iter()
    }

    /// Takes the points out of the line string.
    pub fn into_points(self) -> Vec<P> {
        self.points
    }
}

impl<P: GeomPoint> LineString<P> {
    /// Creates a new line string with SRID `0`.
    pub fn new(points: Vec<P>) -> Self {
        let has_m = points.first().is_some_and(|p| p.has_m());
        Self {
            points,
            has_m,
            srid: 0,
        }
    }

    /// Returns the point at `index`.
    ///
    /// Fails with [`WkGeomError::EmptyGeometry`] if there are no points, or with [`WkGeomError::IndexOutOfRange`]
    /// if `index >= npoints()`.
    pub fn point_at(&self, index: usize) -> Result<&P> {
        let len = self.checked_len()?;
        self.points
            .get(index)
            .ok_or(WkGeomError::IndexOutOfRange { index, len })
    }

    /// Mutable version of [`LineString::point_at`].
    ///
    /// Changing the measure of the first point does not change [`Geometry::has_m`] of the line string.
    pub fn point_at_mut(&mut self, index: usize) -> Result<&mut P> {
        let len = self.checked_len()?;
        self.points
            .get_mut(index)
            .ok_or(WkGeomError::IndexOutOfRange { index, len })
    }

    /// First point.
    pub fn first_point(&self) -> Result<&P> {
        self.points.first().ok_or_else(Self::empty_error)
    }

    /// Last point.
    pub fn last_point(&self) -> Result<&P> {
        self.points.last().ok_or_else(Self::empty_error)
    }

    /// Whether the first and the last points are equal. Empty line strings are not closed.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    pub(crate) fn write_wkt(
        &self,
        f: &mut Formatter<'_>,
        keyword: &'static str,
    ) -> std::fmt::Result {
        write_curve(f, keyword, &self.points, self.has_m)
    }

    fn checked_len(&self) -> Result<usize> {
        match self.points.len() {
            0 => Err(Self::empty_error()),
            len => Ok(len),
        }
    }

    fn empty_error() -> WkGeomError {
        trace!("point access on an empty line string");
        WkGeomError::EmptyGeometry {
            geometry: "LineString",
        }
    }
}

impl<P: GeomPoint> Geometry for LineString<P> {
    type Envelope = P::Bounds;

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
        self.points.is_empty()
    }

    fn envelope(&self) -> Result<P::Bounds> {
        let mut bounds = envelope_of(&self.points).ok_or_else(Self::empty_error)?;
        bounds.set_srid(self.srid);
        Ok(bounds)
    }
}

impl<P: GeomPoint> Display for LineString<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.write_wkt(f, "LINESTRING")
    }
}

impl<P: GeomPoint> From<&[P]> for LineString<P> {
    fn from(value: &[P]) -> Self {
        Self::new(value.to_vec())
    }
}

impl<P: GeomPoint> FromIterator<P> for LineString<P> {
    fn from_iter<T: IntoIterator<Item = P>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[derive(Deserialize)]
struct LineStringFields<P> {
    points: Vec<P>,
    #[serde(default)]
    srid: i32,
}

impl<'de, P> Deserialize<'de> for LineString<P>
where
    P: GeomPoint + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let fields = LineStringFields::<P>::deserialize(deserializer)?;
        let mut line = Self::new(fields.points);
        line.srid = fields.srid;
        Ok(line)
    }
}
