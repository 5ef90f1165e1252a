//! Core types and utilities for printable calibration boards.
//!
//! This crate is intentionally small and purely geometric. It knows about
//! square and triangular (deltille) lattices, the polygons drawn on them and
//! the per-vertex bookkeeping used to decide which vertices are usable
//! calibration corners. It does *not* know about tag families or output
//! formats.

mod corners;
mod geometry;
mod grid;
mod lattice;
mod logger;

pub use corners::{CornerRegistry, CornerVotes, ValidCorner};
pub use geometry::{inverted_triangle, round7, square, triangle, Region, C60, S60};
pub use grid::{CellCode, CellGrid, GridError};
pub use lattice::LatticeKind;

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::{init_with_level, level_from_verbosity};
