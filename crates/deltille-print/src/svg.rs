//! SVG page writer.

use std::fmt::Write as _;

use geo::{LineString, MultiPolygon};

use crate::sink::{drawable_parts, Color, RegionSink};
use crate::PageLayout;

/// One SVG document in millimetre units.
///
/// SVG's y axis points down, so page y is flipped on output.
#[derive(Clone, Debug)]
pub struct SvgPage {
    layout: PageLayout,
    body: String,
}

impl SvgPage {
    pub fn new(layout: PageLayout) -> Self {
        Self {
            layout,
            body: String::new(),
        }
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    fn push_ring(&self, d: &mut String, ring: &LineString<f64>) {
        for (idx, c) in ring.0.iter().enumerate() {
            let (x, y) = self.layout.to_page(c.x, c.y);
            let cmd = if idx == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{cmd}{:.4} {:.4} ", x, self.layout.height_mm - y);
        }
        d.push('Z');
    }

    fn push_path(&mut self, d: &str, fill: Color, even_odd: bool) {
        let rule = if even_odd { " fill-rule=\"evenodd\"" } else { "" };
        let _ = writeln!(
            self.body,
            "  <path d=\"{}\" fill=\"{}\"{rule}/>",
            d.trim_end(),
            fill.hex()
        );
    }

    /// Close the document.
    pub fn finish(self) -> String {
        let (w, h) = (self.layout.width_mm, self.layout.height_mm);
        let mut out = String::with_capacity(self.body.len() + 256);
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        let _ = writeln!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}mm\" height=\"{h}mm\" viewBox=\"0 0 {w} {h}\">"
        );
        let _ = writeln!(
            out,
            "  <rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\" fill=\"{}\"/>",
            Color::White.hex()
        );
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

impl RegionSink for SvgPage {
    fn fill_region(&mut self, region: &MultiPolygon<f64>, fill: Color, hole: Option<Color>) {
        for poly in drawable_parts(region) {
            let mut d = String::new();
            self.push_ring(&mut d, poly.exterior());
            match hole {
                Some(hole) => {
                    self.push_path(&d, fill, false);
                    for interior in poly.interiors() {
                        let mut h = String::new();
                        self.push_ring(&mut h, interior);
                        self.push_path(&h, hole, false);
                    }
                }
                None => {
                    for interior in poly.interiors() {
                        d.push(' ');
                        self.push_ring(&mut d, interior);
                    }
                    self.push_path(&d, fill, true);
                }
            }
        }
    }
}
