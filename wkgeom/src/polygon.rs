//! Polygon with an exterior ring and holes.

use std::fmt::{Display, Formatter, Write};

use serde::{Deserialize, Serialize};

use crate::error::{Result, WkGeomError};
use crate::geometry::Geometry;
use crate::line_ring::LineRing;
use crate::point::GeomPoint;
use crate::wkt::{write_point_list, WktTag};

/// Polygon geometry. Polygon consists of one exterior ring and zero or more holes.
///
/// Holes are not checked to lie inside the exterior ring. The polygon is empty when its exterior ring is empty, and
/// has measures when its exterior ring has them.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "P: Serialize",
    deserialize = "P: GeomPoint + Deserialize<'de>"
))]
pub struct Polygon<P> {
    exterior: LineRing<P>,
    holes: Vec<LineRing<P>>,
    srid: i32,
}

impl<P: GeomPoint> Polygon<P> {
    /// Creates a new polygon with SRID `0`.
    pub fn new(exterior: LineRing<P>, holes: Vec<LineRing<P>>) -> Self {
        Self {
            exterior,
            holes,
            srid: 0,
        }
    }

    /// Exterior ring.
    pub fn exterior(&self) -> &LineRing<P> {
        &self.exterior
    }

    /// Holes in storage order.
    pub fn holes(&self) -> &[LineRing<P>] {
        &self.holes
    }

    /// Iterates over all rings of the polygon starting with the exterior one.
    pub fn iter_rings(&self) -> impl Iterator<Item = &'_ LineRing<P>> {
        std::iter::once(&self.exterior).chain(self.holes.iter())
    }
}

impl<P: GeomPoint> Geometry for Polygon<P> {
    type Envelope = P::Bounds;

    fn srid(&self) -> i32 {
        self.srid
    }

    fn set_srid(&mut self, srid: i32) {
        self.srid = srid;
    }

    fn has_m(&self) -> bool {
        !self.exterior.is_empty() && self.exterior.has_m()
    }

    fn is_empty(&self) -> bool {
        self.exterior.is_empty()
    }

    /// Envelope of the exterior ring. Holes cannot extend it.
    fn envelope(&self) -> Result<P::Bounds> {
        let mut bounds = self.exterior.envelope().map_err(|err| match err {
            WkGeomError::EmptyGeometry { .. } => WkGeomError::EmptyGeometry {
                geometry: "Polygon",
            },
            other => other,
        })?;
        bounds.set_srid(self.srid);
        Ok(bounds)
    }
}

/// Empty holes are left out of the WKT. An empty polygon is `POLYGON EMPTY` in both 2d and 3d.
impl<P: GeomPoint> Display for Polygon<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str("POLYGON EMPTY");
        }

        let has_m = self.has_m();
        WktTag::new("POLYGON", P::DIMENSION, has_m).write_head(f)?;
        f.write_char('(')?;
        for (i, ring) in self.iter_rings().filter(|r| !r.is_empty()).enumerate() {
            if i > 0 {
                f.write_char(',')?;
            }
            write_point_list(f, ring.points(), has_m)?;
        }
        f.write_char(')')
    }
}

impl<P: GeomPoint> From<LineRing<P>> for Polygon<P> {
    fn from(value: LineRing<P>) -> Self {
        Self::new(value, vec![])
    }
}
