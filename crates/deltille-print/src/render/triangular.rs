//! Triangular (deltille) lattice: upright triangles with DelTag markers.
//!
//! ```text
//!            /\
//!           /  \
//!          / /\ \          row k-1: 1 sub-triangle
//!         / /__\ \
//!        / /\  /\ \        row r: 2(k-1-r)+1 sub-triangles,
//!       / /__\/__\ \       upright at even c, inverted at odd c
//!      /____________\
//! ```
//!
//! The border takes 1.5 bit widths along the base and the slanted sides,
//! which is why one bit is `L / (k + 3·border)` instead of the square
//! lattice's `L / (k + 2·border)`.

use deltille_core::{inverted_triangle, triangle, LatticeKind, C60, S60};
use geo::Polygon;

use super::{bit_is_set, Tiling};

#[derive(Clone, Copy, Debug, Default)]
pub struct TriangularTiling;

/// Bit index of sub-triangle `(r, c)` in a marker with `k` bits per side.
///
/// Row 0 (nearest the base) holds the highest-numbered block of bits after
/// the apex rows; within a row bits decrease from left to right.
fn bit_index(r: usize, c: usize, k: usize) -> usize {
    let (r, c, k) = (r as i64, c as i64, k as i64);
    let bit = -c - r * r + 2 * r * k - 2 * r + 2 * k - 2;
    bit as usize
}

impl Tiling for TriangularTiling {
    const KIND: LatticeKind = LatticeKind::Triangular;

    fn cell(x: f64, y: f64, edge: f64) -> Polygon<f64> {
        triangle(x, y, edge)
    }

    fn one_bit_length(edge: f64, side_bits: usize, tag_border: f64) -> f64 {
        edge / (side_bits as f64 + 3.0 * tag_border)
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
            for c in 0..(2 * (k - 1 - r) + 1) {
                if !bit_is_set(code, bit_index(r, c, k)) {
                    continue;
                }
                let bx = x + 1.5 * border + bit_len * (r as f64 * C60 + ((c + 1) / 2) as f64);
                let by = y + S60 * border + S60 * bit_len * r as f64;
                if c % 2 == 0 {
                    bits.push(triangle(bx, by, bit_len));
                } else {
                    bits.push(inverted_triangle(bx, by, bit_len));
                }
            }
        }
        bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use deltille_core::round7;

    fn first_vertex(p: &Polygon<f64>) -> (f64, f64) {
        let c = p.exterior().0[0];
        (c.x, c.y)
    }

    #[test]
    fn bit_indices_cover_every_sub_triangle_once() {
        for k in 2..=6 {
            let mut seen: Vec<usize> = Vec::new();
            for r in 0..k {
                for c in 0..(2 * (k - 1 - r) + 1) {
                    seen.push(bit_index(r, c, k));
                }
            }
            seen.sort_unstable();
            assert_eq!(seen, (0..k * k).collect::<Vec<_>>(), "k = {k}");
        }
    }

    #[test]
    fn base_row_bits_decrease_left_to_right() {
        // k = 5: base row holds bits 8..=0.
        assert_eq!(bit_index(0, 0, 5), 8);
        assert_eq!(bit_index(0, 8, 5), 0);
        // Apex holds the highest bit.
        assert_eq!(bit_index(4, 0, 5), 24);
    }

    #[test]
    fn one_bit_length_reserves_three_borders() {
        assert_relative_eq!(TriangularTiling::one_bit_length(9.0, 3, 2.0), 1.0);
    }

    #[test]
    fn sub_triangles_alternate_orientation() {
        // edge 9, k 3, border 2 => one bit is 1.0, border is 2.0.
        let base_left = TriangularTiling::marker_bits(0.0, 0.0, 9.0, 3, 2.0, 1 << 4);
        assert_eq!(base_left.len(), 1);
        assert_eq!(first_vertex(&base_left[0]), (3.0, round7(2.0 * S60)));
        // Upright: second vertex shares the base line.
        assert_eq!(base_left[0].exterior().0[1].y, round7(2.0 * S60));

        let inverted = TriangularTiling::marker_bits(0.0, 0.0, 9.0, 3, 2.0, 1 << 3);
        assert_eq!(first_vertex(&inverted[0]), (4.0, round7(2.0 * S60)));
        // Inverted: the other two vertices sit one row higher.
        assert!(inverted[0].exterior().0[1].y > inverted[0].exterior().0[0].y);
    }

    #[test]
    fn apex_bit_is_centered() {
        let apex = TriangularTiling::marker_bits(0.0, 0.0, 9.0, 3, 2.0, 1 << 8);
        let (x, y) = first_vertex(&apex[0]);
        assert_relative_eq!(x, 4.0, epsilon = 1e-6);
        assert_relative_eq!(y, 4.0 * S60, epsilon = 1e-6);
    }

    #[test]
    fn one_shape_per_set_bit() {
        let code = 0x1f0_5a3;
        let bits = TriangularTiling::marker_bits(0.0, 0.0, 20.0, 5, 1.5, code);
        assert_eq!(bits.len(), code.count_ones() as usize);
    }
}
