//! Square lattice: checkerboard cells with AprilTag-style markers.
//!
//! ```text
//! +-------------+
//! | black border|
//! |   +-----+   |
//! |   |3210 |   |   first row (lowest y) holds bits k-1..0 left to right,
//! |   |7654 |   |   each following row is k bits higher
//! |   +-----+   |
//! +-------------+
//! ```

use deltille_core::{square, LatticeKind};
use geo::Polygon;

use super::{bit_is_set, Tiling};

#[derive(Clone, Copy, Debug, Default)]
pub struct SquareTiling;

impl Tiling for SquareTiling {
    const KIND: LatticeKind = LatticeKind::Square;

    fn cell(x: f64, y: f64, edge: f64) -> Polygon<f64> {
        square(x, y, edge)
    }

    fn one_bit_length(edge: f64, side_bits: usize, tag_border: f64) -> f64 {
        edge / (side_bits as f64 + 2.0 * tag_border)
    }

    fn marker_bits(
        x: f64,
        y: f64,
        edge: f64,
        side_bits: usize,
        tag_border: f64,
        code: u64,
    ) -> Vec<Polygon<f64>> {
        let k = side_bits;
        let bit_len = Self::one_bit_length(edge, k, tag_border);
        let border = tag_border * bit_len;

        let mut bits = Vec::new();
        for r in 0..k {
            for c in 0..k {
                let bit = k - 1 + r * k - c;
                if bit_is_set(code, bit) {
                    bits.push(square(
                        x + border + c as f64 * bit_len,
                        y + border + r as f64 * bit_len,
                        bit_len,
                    ));
                }
            }
        }
        bits
    }
}
