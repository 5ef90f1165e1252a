//! Square and triangular lattice conventions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{C60, S60};

/// Tiling used by a board.
///
/// Serialized as `square` / `triangular`; the historical board type names
/// `checkerboard` and `deltille` are accepted as aliases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LatticeKind {
    /// Unit squares, cell `(i, j)` at `(j·L, i·L)`.
    #[serde(alias = "checkerboard")]
    Square,
    /// Upright equilateral triangles on a 60° sheared lattice.
    #[serde(alias = "deltille")]
    Triangular,
}

impl LatticeKind {
    /// Number of filled cells that must touch a vertex for it to be a valid corner.
    #[inline]
    pub fn corner_multiplicity(self) -> u32 {
        match self {
            LatticeKind::Square => 2,
            LatticeKind::Triangular => 3,
        }
    }

    /// Offsets `(di, dj)` of the vertices a filled cell `(i, j)` votes for.
    ///
    /// The first entry is always the cell's own vertex `(i, j)`, which is the
    /// one that receives a marker id. Triangular cells skip `(i + 1, j + 1)`.
    pub fn cell_corner_offsets(self) -> &'static [(i32, i32)] {
        const SQUARE: [(i32, i32); 4] = [(0, 0), (0, 1), (1, 0), (1, 1)];
        const TRIANGULAR: [(i32, i32); 3] = [(0, 0), (0, 1), (1, 0)];
        match self {
            LatticeKind::Square => &SQUARE,
            LatticeKind::Triangular => &TRIANGULAR,
        }
    }

    /// Board-frame position (mm) of vertex `(i, j)` for edge length `edge`.
    pub fn vertex_to_xy(self, i: i32, j: i32, edge: f64) -> (f64, f64) {
        let (i, j) = (f64::from(i), f64::from(j));
        match self {
            LatticeKind::Square => (j * edge, i * edge),
            LatticeKind::Triangular => ((i * C60 + j) * edge, i * S60 * edge),
        }
    }

    /// Lowercase name used in messages and serialized files.
    pub fn as_str(self) -> &'static str {
        match self {
            LatticeKind::Square => "square",
            LatticeKind::Triangular => "triangular",
        }
    }
}

impl fmt::Display for LatticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn square_vertices_follow_rows_and_cols() {
        let (x, y) = LatticeKind::Square.vertex_to_xy(2, 3, 10.0);
        assert_relative_eq!(x, 30.0);
        assert_relative_eq!(y, 20.0);
    }

    #[test]
    fn triangular_rows_shear_right() {
        let (x, y) = LatticeKind::Triangular.vertex_to_xy(1, 0, 10.0);
        assert_relative_eq!(x, 5.0);
        assert_relative_eq!(y, 10.0 * 3f64.sqrt() / 2.0, epsilon = 1e-12);

        let (x, y) = LatticeKind::Triangular.vertex_to_xy(-1, 2, 4.0);
        assert_relative_eq!(x, 6.0);
        assert_relative_eq!(y, -4.0 * 3f64.sqrt() / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn triangular_cells_vote_three_corners() {
        assert_eq!(LatticeKind::Triangular.cell_corner_offsets().len(), 3);
        assert_eq!(LatticeKind::Square.cell_corner_offsets().len(), 4);
        assert!(!LatticeKind::Triangular
            .cell_corner_offsets()
            .contains(&(1, 1)));
        assert_eq!(LatticeKind::Triangular.cell_corner_offsets()[0], (0, 0));
    }

    #[test]
    fn serde_accepts_legacy_names() {
        let kind: LatticeKind = serde_json::from_str("\"deltille\"").expect("alias");
        assert_eq!(kind, LatticeKind::Triangular);
        let kind: LatticeKind = serde_json::from_str("\"checkerboard\"").expect("alias");
        assert_eq!(kind, LatticeKind::Square);
        assert_eq!(
            serde_json::to_string(&LatticeKind::Square).expect("json"),
            "\"square\""
        );
    }
}
