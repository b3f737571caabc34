//! Well-Known Text writer shared by all geometry types.
//!
//! Numbers are written with their `Display` implementation, which for floats is the shortest decimal
//! representation that parses back into the same value (`117` for `117.0`, `0.1` for `0.1`). Points of a list are
//! separated by `", "`, rings of a polygon by `","`.

use std::fmt::{self, Write};

use crate::coord::Dimension;
use crate::point::GeomPoint;

/// Geometry keyword together with its dimension suffix (`Z`, `M` or `ZM`).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct WktTag {
    keyword: &'static str,
    dimension: Dimension,
    has_m: bool,
}

impl WktTag {
    pub(crate) fn new(keyword: &'static str, dimension: Dimension, has_m: bool) -> Self {
        Self {
            keyword,
            dimension,
            has_m,
        }
    }

    fn suffix(&self) -> &'static str {
        match (self.dimension, self.has_m) {
            (Dimension::Xy, false) => "",
            (Dimension::Xy, true) => " M",
            (Dimension::Xyz, false) => " Z",
            (Dimension::Xyz, true) => " ZM",
        }
    }

    /// Writes `KEYWORD[ Z|M|ZM]`, to be followed by the coordinate text.
    pub(crate) fn write_head(&self, w: &mut impl Write) -> fmt::Result {
        w.write_str(self.keyword)?;
        w.write_str(self.suffix())
    }

    /// Writes `KEYWORD[ Z] EMPTY`.
    ///
    /// Empty geometries have no measure values, so only the `Z` suffix is kept.
    pub(crate) fn write_empty(&self, w: &mut impl Write) -> fmt::Result {
        w.write_str(self.keyword)?;
        if self.dimension.has_z() {
            w.write_str(" Z")?;
        }
        w.write_str(" EMPTY")
    }
}

/// Writes the coordinates of one point separated by spaces, followed by its measure if `with_m` is set.
pub(crate) fn write_position<P: GeomPoint>(
    w: &mut impl Write,
    point: &P,
    with_m: bool,
) -> fmt::Result {
    for (i, coord) in point.coords().enumerate() {
        if i > 0 {
            w.write_char(' ')?;
        }
        write!(w, "{coord}")?;
    }

    if with_m {
        write!(w, " {}", point.m())?;
    }

    Ok(())
}

/// Writes `(p1, p2, ...)`.
pub(crate) fn write_point_list<'a, P: GeomPoint + 'a>(
    w: &mut impl Write,
    points: impl IntoIterator<Item = &'a P>,
    with_m: bool,
) -> fmt::Result {
    w.write_char('(')?;
    for (i, point) in points.into_iter().enumerate() {
        if i > 0 {
            w.write_str(", ")?;
        }
        write_position(w, point, with_m)?;
    }
    w.write_char(')')
}

/// Writes a line string like geometry: `KEYWORD[ suffix](p1, p2, ...)` or `KEYWORD[ Z] EMPTY`.
pub(crate) fn write_curve<P: GeomPoint>(
    w: &mut impl Write,
    keyword: &'static str,
    points: &[P],
    has_m: bool,
) -> fmt::Result {
    let tag = WktTag::new(keyword, P::DIMENSION, has_m);
    if points.is_empty() {
        return tag.write_empty(w);
    }

    tag.write_head(w)?;
    write_point_list(w, points, has_m)
}
