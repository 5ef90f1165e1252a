//! Rectangular grids of cell codes.

use serde::{Deserialize, Serialize};

/// What a single grid cell holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CellCode {
    /// Nothing is drawn and no corner votes are cast.
    #[default]
    Empty,
    /// A plain black cell.
    Filled,
    /// A black cell carrying the next marker id.
    Marker,
}

impl CellCode {
    /// Numeric code used in serialized grids (`0`, `1`, `2`).
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            CellCode::Empty => 0,
            CellCode::Filled => 1,
            CellCode::Marker => 2,
        }
    }

    #[inline]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(CellCode::Empty),
            1 => Some(CellCode::Filled),
            2 => Some(CellCode::Marker),
            _ => None,
        }
    }

    #[inline]
    pub fn is_filled(self) -> bool {
        !matches!(self, CellCode::Empty)
    }
}

/// Grid construction errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must have at least one row and one column")]
    Empty,
    #[error("row {row} has {actual} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("cell ({row}, {col}) has code {code}; expected 0 (empty), 1 (filled) or 2 (marker)")]
    InvalidCode { row: usize, col: usize, code: u8 },
}

/// Row-major rectangular grid of [`CellCode`]s.
///
/// Serialized as nested arrays of integers, one inner array per row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct CellGrid {
    rows: usize,
    cols: usize,
    cells: Vec<CellCode>,
}

impl CellGrid {
    /// Grid of `rows × cols` empty cells.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![CellCode::Empty; rows * cols],
        })
    }

    /// Grid of `rows × cols` cells initialized from `f(i, j)`.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> CellCode,
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(rows, cols)?;
        for i in 0..rows {
            for j in 0..cols {
                grid.cells[i * cols + j] = f(i, j);
            }
        }
        Ok(grid)
    }

    /// Build a grid from nested numeric codes.
    pub fn from_codes<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut grid = Self::new(rows.len(), cols)?;
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: i,
                    expected: cols,
                    actual: row.len(),
                });
            }
            for (j, &code) in row.iter().enumerate() {
                grid.cells[i * cols + j] = CellCode::from_code(code).ok_or(GridError::InvalidCode {
                    row: i,
                    col: j,
                    code,
                })?;
            }
        }
        Ok(grid)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at `(i, j)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<CellCode> {
        if i < self.rows && j < self.cols {
            Some(self.cells[i * self.cols + j])
        } else {
            None
        }
    }

    /// Overwrite cell `(i, j)`. Out-of-range writes are ignored and return `false`.
    pub fn set(&mut self, i: usize, j: usize, cell: CellCode) -> bool {
        if i < self.rows && j < self.cols {
            self.cells[i * self.cols + j] = cell;
            true
        } else {
            false
        }
    }

    /// Row-major iterator over `(i, j, cell)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, CellCode)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (idx / cols, idx % cols, cell))
    }

    /// Number of cells carrying a marker.
    pub fn marker_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == CellCode::Marker).count()
    }

    /// Nested numeric codes, one inner vector per row.
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|c| c.code()).collect())
            .collect()
    }
}

impl TryFrom<Vec<Vec<u8>>> for CellGrid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Self::from_codes(&rows)
    }
}

impl From<CellGrid> for Vec<Vec<u8>> {
    fn from(grid: CellGrid) -> Self {
        grid.to_codes()
    }
}
