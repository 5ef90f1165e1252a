//! Built-in board designs.
//!
//! Every design returns its boards with tag-id offsets already assigned.

use deltille_core::{CellCode, CellGrid, GridError, LatticeKind};

use crate::{adjust_tag_id_offsets, BoardSpec};

/// Names accepted by [`design_by_name`].
pub const DESIGN_NAMES: [&str; 3] = ["a4_checkerboard", "a4_deltille", "ico_deltille"];

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DesignError {
    #[error("unknown design '{name}'; use one of: {}", DESIGN_NAMES.join(", "))]
    UnknownDesign { name: String },
    #[error(transparent)]
    Grid(#[from] GridError),
}

pub fn design_names() -> &'static [&'static str] {
    &DESIGN_NAMES
}

/// Boards of the named design.
pub fn design_by_name(name: &str) -> Result<Vec<BoardSpec>, DesignError> {
    match name {
        "a4_checkerboard" => a4_checkerboard(),
        "a4_deltille" => a4_deltille(),
        "ico_deltille" => ico_deltille(),
        _ => Err(DesignError::UnknownDesign {
            name: name.to_string(),
        }),
    }
}

fn grid_with_markers(
    rows: usize,
    cols: usize,
    filled: impl Fn(usize, usize) -> bool,
    markers: &[(usize, usize)],
) -> Result<CellGrid, GridError> {
    let mut grid = CellGrid::from_fn(rows, cols, |i, j| {
        if filled(i, j) {
            CellCode::Filled
        } else {
            CellCode::Empty
        }
    })?;
    for &(i, j) in markers {
        let placed = grid.set(i, j, CellCode::Marker);
        debug_assert!(placed, "marker ({i}, {j}) outside a {rows} x {cols} grid");
    }
    Ok(grid)
}

fn repeated(board: BoardSpec, count: usize) -> Vec<BoardSpec> {
    let mut boards = vec![board; count];
    adjust_tag_id_offsets(&mut boards);
    boards
}

/// Three 9 x 13 checkerboards of 20 mm squares with eight AprilTags each.
pub fn a4_checkerboard() -> Result<Vec<BoardSpec>, DesignError> {
    const MARKERS: [(usize, usize); 8] = [
        (2, 2),
        (2, 6),
        (2, 10),
        (4, 4),
        (4, 8),
        (6, 2),
        (6, 6),
        (6, 10),
    ];
    let grid = grid_with_markers(9, 13, |i, j| (i + j) % 2 == 0, &MARKERS)?;
    let board = BoardSpec::new(LatticeKind::Square, "aprilTag25h9", grid, 20.0);
    Ok(repeated(board, 3))
}

/// Three deltille boards: 11 rows of 13 or 14 triangles, sheared so the
/// band forms a rectangle on paper, with ten DelTags each.
pub fn a4_deltille() -> Result<Vec<BoardSpec>, DesignError> {
    const ROWS: usize = 11;
    const COLS: usize = 19;
    const PER_ROW: usize = 13;
    const MARKERS: [(usize, usize); 10] = [
        (2, 7),
        (2, 10),
        (2, 13),
        (5, 4),
        (5, 7),
        (5, 10),
        (5, 13),
        (8, 4),
        (8, 7),
        (8, 10),
    ];
    let grid = grid_with_markers(
        ROWS,
        COLS,
        |i, j| j >= (ROWS - i - 1) / 2 && j < (ROWS - i) / 2 + PER_ROW,
        &MARKERS,
    )?;
    let board = BoardSpec::new(LatticeKind::Triangular, "delTag25h9", grid, 20.0)
        .with_tag_border(1.5);
    Ok(repeated(board, 3))
}

/// Twenty triangular faces for folding an icosahedron, two DelTags per face.
pub fn ico_deltille() -> Result<Vec<BoardSpec>, DesignError> {
    const SIDE: usize = 13;
    let grid = grid_with_markers(SIDE, SIDE, |i, j| i + j < SIDE, &[(1, 4), (4, 1)])?;
    let board = BoardSpec::new(LatticeKind::Triangular, "delTag25h9", grid, 10.0)
        .with_tag_border(1.5);
    Ok(repeated(board, 20))
}
