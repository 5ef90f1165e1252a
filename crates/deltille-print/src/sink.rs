//! Output-agnostic drawing interface.

use geo::{MultiPolygon, Polygon};

/// Fill colour of a region. Boards are strictly black and white.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// 8-bit grey level.
    #[inline]
    pub fn luma(self) -> u8 {
        match self {
            Color::Black => 0,
            Color::White => 255,
        }
    }

    /// CSS/SVG colour literal.
    #[inline]
    pub fn hex(self) -> &'static str {
        match self {
            Color::Black => "#000000",
            Color::White => "#ffffff",
        }
    }
}

/// Something that can paint filled regions (an SVG page, a raster image, ...).
pub trait RegionSink {
    /// Paint every polygon of `region` with `fill`, then its holes with `hole`
    /// when given. Holes are left untouched when `hole` is `None`.
    fn fill_region(&mut self, region: &MultiPolygon<f64>, fill: Color, hole: Option<Color>);
}

/// Polygons of `region` that have an exterior ring; empty ones are logged and skipped.
pub(crate) fn drawable_parts(region: &MultiPolygon<f64>) -> impl Iterator<Item = &Polygon<f64>> {
    region.0.iter().filter(|poly| {
        if poly.exterior().0.is_empty() {
            log::warn!("skipping polygon with an empty exterior");
            false
        } else {
            true
        }
    })
}
