//! High-level facade crate for the `deltille-*` workspace.
//!
//! This crate provides stable re-exports of the underlying crates and ships
//! the `deltille-targets` command-line generator (feature `cli`).
//!
//! ## Quickstart
//!
//! ```no_run
//! use deltille_targets::print::{designs, write_design_outputs, OutputOptions};
//! use deltille_targets::tags::CodeTable;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let boards = designs::a4_deltille()?;
//! let written = write_design_outputs(
//!     &CodeTable::builtin(),
//!     &boards,
//!     "pattern.svg",
//!     &OutputOptions::default(),
//! )?;
//! println!("description: {}", written.description.display());
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `deltille_targets::core`: lattices, cell grids, polygons, corner registry, logging.
//! - `deltille_targets::tags`: AprilTag and DelTag code tables.
//! - `deltille_targets::print`: board renderers, description files, pages, designs.

pub use deltille_core as core;
pub use deltille_print as print;
pub use deltille_tags as tags;

pub use deltille_core::{CellCode, CellGrid, LatticeKind};
pub use deltille_print::{
    render_board, write_design_outputs, BoardDescription, BoardSpec, OutputOptions, PaperFormat,
    RenderedBoard,
};
pub use deltille_tags::{CodeTable, TagFamily};
