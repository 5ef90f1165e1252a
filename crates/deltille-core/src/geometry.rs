//! Polygon primitives and region union.
//!
//! All primitives snap their coordinates to 7 fractional digits so that
//! shapes sharing an edge produce bit-identical vertices and merge cleanly.

use geo::{BooleanOps, LineString, MultiPolygon, Polygon};

/// `cos(60°)`.
pub const C60: f64 = 0.5;
/// `sin(60°)`.
pub const S60: f64 = 0.866_025_403_784_438_6;

/// Round to 7 fractional digits.
#[inline]
pub fn round7(v: f64) -> f64 {
    (v * 1e7).round() / 1e7
}

fn polygon(points: &[(f64, f64)]) -> Polygon<f64> {
    let ring: Vec<(f64, f64)> = points.iter().map(|&(x, y)| (round7(x), round7(y))).collect();
    Polygon::new(LineString::from(ring), Vec::new())
}

/// Axis-aligned square with its lower-left corner at `(x, y)`.
pub fn square(x: f64, y: f64, w: f64) -> Polygon<f64> {
    polygon(&[(x, y), (x + w, y), (x + w, y + w), (x, y + w)])
}

/// Upright equilateral triangle with its base-left corner at `(x, y)`.
pub fn triangle(x: f64, y: f64, w: f64) -> Polygon<f64> {
    polygon(&[(x, y), (x + w, y), (x + w * C60, y + w * S60)])
}

/// Apex-down equilateral triangle with its bottom vertex at `(x, y)`.
pub fn inverted_triangle(x: f64, y: f64, w: f64) -> Polygon<f64> {
    polygon(&[
        (x, y),
        (x + w * C60, y + w * S60),
        (x - w * C60, y + w * S60),
    ])
}

/// A growing collection of polygons that is merged into one region on demand.
#[derive(Clone, Debug, Default)]
pub struct Region {
    parts: Vec<Polygon<f64>>,
}

impl Region {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, polygon: Polygon<f64>) {
        self.parts.push(polygon);
    }

    /// Number of polygons added so far (before merging).
    #[inline]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Union of every polygon added so far.
    ///
    /// Merging is done as a balanced pairwise reduction, which keeps the
    /// intermediate polygons small compared to folding one shape at a time.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self), fields(parts = self.parts.len()))
    )]
    pub fn merge(&self) -> MultiPolygon<f64> {
        let mut level: Vec<MultiPolygon<f64>> = self
            .parts
            .iter()
            .cloned()
            .map(|p| MultiPolygon::new(vec![p]))
            .collect();
        if level.is_empty() {
            return MultiPolygon::new(Vec::new());
        }
        while level.len() > 1 {
            let mut next = Vec::with_capacity(level.len().div_ceil(2));
            let mut iter = level.into_iter();
            while let Some(a) = iter.next() {
                match iter.next() {
                    Some(b) => next.push(a.union(&b)),
                    None => next.push(a),
                }
            }
            level = next;
        }
        let merged = level.pop().unwrap_or_else(|| MultiPolygon::new(Vec::new()));
        log::trace!(
            "merged {} polygons into {} parts",
            self.parts.len(),
            merged.0.len()
        );
        merged
    }
}

impl Extend<Polygon<f64>> for Region {
    fn extend<I: IntoIterator<Item = Polygon<f64>>>(&mut self, iter: I) {
        self.parts.extend(iter);
    }
}
