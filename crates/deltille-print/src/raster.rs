//! Grayscale raster preview of a page.

use geo::{LineString, MultiPolygon};

use crate::sink::{drawable_parts, Color, RegionSink};
use crate::PageLayout;

const MM_PER_INCH: f64 = 25.4;

/// Lowest accepted preview resolution, in dots per inch.
pub const MIN_DPI: f64 = 1.0;
/// Highest accepted preview resolution; an A0 page at this setting is about 560 MB.
pub const MAX_DPI: f64 = 600.0;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
#[error("PNG resolution {dpi} dpi is outside {MIN_DPI}..={MAX_DPI} dpi")]
pub struct InvalidDpi {
    pub dpi: f64,
}

/// Accept `dpi` only within [`MIN_DPI`]..=[`MAX_DPI`]; NaN is rejected.
pub fn check_dpi(dpi: f64) -> Result<f64, InvalidDpi> {
    if (MIN_DPI..=MAX_DPI).contains(&dpi) {
        Ok(dpi)
    } else {
        Err(InvalidDpi { dpi })
    }
}

/// An 8-bit grayscale page, initially white.
#[derive(Clone, Debug)]
pub struct RasterPage {
    layout: PageLayout,
    px_per_mm: f64,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterPage {
    pub fn new(layout: PageLayout, dpi: f64) -> Result<Self, InvalidDpi> {
        let px_per_mm = check_dpi(dpi)? / MM_PER_INCH;
        let width = (layout.width_mm * px_per_mm).round().max(1.0) as u32;
        let height = (layout.height_mm * px_per_mm).round().max(1.0) as u32;
        Ok(Self {
            layout,
            px_per_mm,
            width,
            height,
            pixels: vec![Color::White.luma(); width as usize * height as usize],
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Grey level at pixel `(x, y)`, row 0 at the top of the page.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Rings in pixel coordinates (x right, y down).
    fn to_pixels(&self, ring: &LineString<f64>) -> Vec<(f64, f64)> {
        ring.0
            .iter()
            .map(|c| {
                let (x, y) = self.layout.to_page(c.x, c.y);
                (x * self.px_per_mm, (self.layout.height_mm - y) * self.px_per_mm)
            })
            .collect()
    }

    /// Even-odd fill of `rings`, sampling at pixel centres.
    fn fill_rings(&mut self, rings: &[Vec<(f64, f64)>], luma: u8) {
        let (min_y, max_y) = rings
            .iter()
            .flatten()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, y)| {
                (lo.min(y), hi.max(y))
            });
        if !min_y.is_finite() || !max_y.is_finite() {
            return;
        }
        let first_row = (min_y - 0.5).ceil().max(0.0) as u32;
        let last_row = ((max_y - 0.5).floor() as i64).min(self.height as i64 - 1);

        let mut crossings: Vec<f64> = Vec::new();
        for row in first_row as i64..=last_row {
            let yc = row as f64 + 0.5;
            crossings.clear();
            for ring in rings {
                for (a, b) in ring.iter().zip(ring.iter().cycle().skip(1)) {
                    let ((x0, y0), (x1, y1)) = (*a, *b);
                    if (y0 <= yc) != (y1 <= yc) {
                        crossings.push(x0 + (yc - y0) * (x1 - x0) / (y1 - y0));
                    }
                }
            }
            crossings.sort_by(f64::total_cmp);

            let offset = row as usize * self.width as usize;
            for span in crossings.chunks_exact(2) {
                let start = (span[0] - 0.5).ceil().max(0.0) as u32;
                let end = ((span[1] - 0.5).floor() as i64).min(self.width as i64 - 1);
                for x in start as i64..=end {
                    self.pixels[offset + x as usize] = luma;
                }
            }
        }
    }

    /// Encode as an 8-bit grayscale PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, png::EncodingError> {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, self.width, self.height);
            encoder.set_color(png::ColorType::Grayscale);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.pixels)?;
            writer.finish()?;
        }
        Ok(out)
    }
}

impl RegionSink for RasterPage {
    fn fill_region(&mut self, region: &MultiPolygon<f64>, fill: Color, hole: Option<Color>) {
        for poly in drawable_parts(region) {
            let exterior = self.to_pixels(poly.exterior());
            match hole {
                Some(hole) => {
                    self.fill_rings(&[exterior], fill.luma());
                    for interior in poly.interiors() {
                        let ring = self.to_pixels(interior);
                        self.fill_rings(&[ring], hole.luma());
                    }
                }
                None => {
                    let mut rings = vec![exterior];
                    rings.extend(poly.interiors().iter().map(|r| self.to_pixels(r)));
                    self.fill_rings(&rings, fill.luma());
                }
            }
        }
    }
}
