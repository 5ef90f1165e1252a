//! Printable calibration boards: square checkerboards with AprilTags and
//! triangular deltille boards with DelTags.
//!
//! The pipeline for one design:
//! 1. build [`BoardSpec`]s (from the [`designs`] catalog or a [`DesignConfig`]),
//! 2. run [`adjust_tag_id_offsets`] once so boards sharing a family never reuse ids,
//! 3. render each board with [`render_board`] (or all at once with [`render_design`]),
//! 4. draw the [`RenderedBoard`]s into a [`RegionSink`] ([`SvgPage`], [`RasterPage`])
//!    and concatenate their [`BoardDescription`]s into the `.dsc` file.
//!
//! [`write_design_outputs`] runs steps 3–4 and only touches the filesystem once
//! every board rendered successfully.

mod board;
mod description;
pub mod designs;
mod error;
mod io;
mod page;
mod raster;
mod render;
mod sink;
mod svg;

pub use board::{adjust_tag_id_offsets, BoardSpec, DEFAULT_TAG_BORDER};
pub use description::{
    format_real, parse_descriptions, BoardDescription, CornerRecord, DescriptionError,
};
pub use error::{ConfigurationError, RenderError};
pub use io::{
    write_design_outputs, DesignConfig, DesignReport, OutputError, OutputOptions, WrittenFiles,
};
pub use page::{PageLayout, PaperFormat, UnknownPaperFormat};
pub use raster::{check_dpi, InvalidDpi, RasterPage, MAX_DPI, MIN_DPI};
pub use render::{
    render_board, render_design, BoardRenderer, RenderedBoard, SquareBoardRenderer,
    SquareTiling, Tiling, TriangularBoardRenderer, TriangularTiling,
};
pub use sink::{Color, RegionSink};
pub use svg::SvgPage;

pub use deltille_core::{CellCode, CellGrid, LatticeKind};
pub use deltille_tags::{CodeTable, TagFamily};
