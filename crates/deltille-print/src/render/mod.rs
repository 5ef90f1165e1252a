//! Board renderers.
//!
//! Both renderers share one grid walk; the lattice-specific parts (cell shape,
//! marker bit layout) live behind the [`Tiling`] trait.

mod square;
mod triangular;

use std::marker::PhantomData;

use deltille_core::{CellCode, CornerRegistry, LatticeKind, Region};
use deltille_tags::{CodeTable, TagFamily};
use geo::{BoundingRect, MultiPolygon, Polygon, Rect};

use crate::description::{BoardDescription, CornerRecord};
use crate::sink::{Color, RegionSink};
use crate::{BoardSpec, ConfigurationError, RenderError};

#[cfg(feature = "tracing")]
use tracing::instrument;

pub use square::SquareTiling;
pub use triangular::TriangularTiling;

/// Lattice-specific geometry used by [`BoardRenderer`].
pub trait Tiling {
    /// Board type this tiling renders.
    const KIND: LatticeKind;

    /// Filled cell with its lattice origin at `(x, y)`.
    fn cell(x: f64, y: f64, edge: f64) -> Polygon<f64>;

    /// Size of one marker bit for a cell of side `edge`.
    fn one_bit_length(edge: f64, side_bits: usize, tag_border: f64) -> f64;

    /// White bit shapes of marker `code` drawn in the cell at `(x, y)`.
    fn marker_bits(
        x: f64,
        y: f64,
        edge: f64,
        side_bits: usize,
        tag_border: f64,
        code: u64,
    ) -> Vec<Polygon<f64>>;
}

#[inline]
pub(crate) fn bit_is_set(code: u64, bit: usize) -> bool {
    (code >> bit) & 1 == 1
}

/// Renders [`BoardSpec`]s of one lattice type against a code table.
#[derive(Clone, Copy, Debug)]
pub struct BoardRenderer<'a, T> {
    table: &'a CodeTable,
    tiling: PhantomData<T>,
}

/// Renderer for square checkerboards with AprilTag markers.
pub type SquareBoardRenderer<'a> = BoardRenderer<'a, SquareTiling>;
/// Renderer for triangular deltille boards with DelTag markers.
pub type TriangularBoardRenderer<'a> = BoardRenderer<'a, TriangularTiling>;

impl<'a, T: Tiling> BoardRenderer<'a, T> {
    pub fn new(table: &'a CodeTable) -> Self {
        Self {
            table,
            tiling: PhantomData,
        }
    }

    fn family(&self, spec: &BoardSpec) -> Result<&'a TagFamily, ConfigurationError> {
        self.table
            .lookup_for(&spec.tag_family, T::KIND)
            .ok_or_else(|| ConfigurationError::UnknownFamily {
                family: spec.tag_family.clone(),
                lattice: T::KIND,
                available: self
                    .table
                    .families_for(T::KIND)
                    .map(|f| f.name.to_string())
                    .collect(),
            })
    }

    /// Render one board.
    ///
    /// Marker ids start at `spec.tag_id_offset + extra_tag_offset` and advance
    /// in row-major order over marker cells. Nothing is returned unless the
    /// whole board rendered.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, spec), fields(lattice = %T::KIND, family = %spec.tag_family))
    )]
    pub fn render(
        &self,
        board_id: usize,
        spec: &BoardSpec,
        extra_tag_offset: u32,
    ) -> Result<RenderedBoard, RenderError> {
        if spec.board_type != T::KIND {
            return Err(ConfigurationError::WrongBoardType {
                expected: T::KIND,
                actual: spec.board_type,
            }
            .into());
        }
        spec.validate()?;
        let family = self.family(spec)?;
        let side_bits = family.side_bits();
        let edge = spec.edge_length;

        let mut background = Region::new();
        let mut foreground = Region::new();
        let mut corners = CornerRegistry::new();
        let mut tag_id = spec.tag_id_offset.saturating_add(extra_tag_offset);
        let mut markers = 0usize;

        for (i, j, cell) in spec.grid.iter() {
            let (i, j) = (i as i32, j as i32);
            let (x, y) = T::KIND.vertex_to_xy(i, j, edge);
            let owner = match cell {
                CellCode::Empty => continue,
                CellCode::Filled => None,
                CellCode::Marker => {
                    let code = family
                        .code(tag_id)
                        .ok_or_else(|| RenderError::TagIdOutOfRange {
                            family: family.name.to_string(),
                            id: tag_id,
                            available: family.len(),
                        })?;
                    foreground.extend(T::marker_bits(
                        x,
                        y,
                        edge,
                        side_bits,
                        spec.tag_border,
                        code,
                    ));
                    Some(tag_id)
                }
            };
            background.push(T::cell(x, y, edge));

            for (k, &(di, dj)) in T::KIND.cell_corner_offsets().iter().enumerate() {
                let vote = if k == 0 { owner } else { None };
                corners.vote(i + di, j + dj, vote);
            }

            if owner.is_some() {
                markers += 1;
                tag_id += 1;
            }
        }

        let description = describe(board_id, spec, &corners);
        log::debug!(
            "board {board_id}: {} {} markers, {} of {} vertices are corners",
            markers,
            family.name,
            description.corners.len(),
            corners.len()
        );

        Ok(RenderedBoard {
            board_id,
            lattice: T::KIND,
            marker_count: markers,
            background: background.merge(),
            foreground: foreground.merge(),
            corners,
            description,
        })
    }
}

fn describe(board_id: usize, spec: &BoardSpec, corners: &CornerRegistry) -> BoardDescription {
    // Vertex (1, 1) is the origin of the description frame.
    const ORIGIN: (i32, i32) = (1, 1);
    let lattice = spec.board_type;
    let corners = corners
        .valid_corners(lattice.corner_multiplicity())
        .map(|c| {
            let (i, j) = (c.i - ORIGIN.0, c.j - ORIGIN.1);
            let (x, y) = lattice.vertex_to_xy(i, j, spec.edge_length);
            CornerRecord {
                tag_id: c.tag_id,
                x_index: j,
                y_index: i,
                x,
                y,
                z: 0.0,
            }
        })
        .collect();

    BoardDescription {
        board_id,
        max_x_index: spec.grid.cols() - 1,
        max_y_index: spec.grid.rows() - 1,
        edge_length: spec.edge_length,
        tag_family: spec.tag_family.clone(),
        tag_border: spec.tag_border,
        corners,
    }
}

/// Render a board with the renderer matching its board type.
pub fn render_board(
    table: &CodeTable,
    board_id: usize,
    spec: &BoardSpec,
    extra_tag_offset: u32,
) -> Result<RenderedBoard, RenderError> {
    match spec.board_type {
        LatticeKind::Square => {
            SquareBoardRenderer::new(table).render(board_id, spec, extra_tag_offset)
        }
        LatticeKind::Triangular => {
            TriangularBoardRenderer::new(table).render(board_id, spec, extra_tag_offset)
        }
    }
}

/// Render every board of a design, numbering them by position.
///
/// Fails on the first board that cannot be rendered; no partial result is returned.
pub fn render_design(
    table: &CodeTable,
    boards: &[BoardSpec],
    extra_tag_offset: u32,
) -> Result<Vec<RenderedBoard>, RenderError> {
    boards
        .iter()
        .enumerate()
        .map(|(board_id, spec)| render_board(table, board_id, spec, extra_tag_offset))
        .collect()
}

/// Geometry and description of one rendered board.
#[derive(Clone, Debug)]
pub struct RenderedBoard {
    pub board_id: usize,
    pub lattice: LatticeKind,
    pub marker_count: usize,
    /// Union of all black cells (including marker cells).
    pub background: MultiPolygon<f64>,
    /// Union of all white marker bits.
    pub foreground: MultiPolygon<f64>,
    pub corners: CornerRegistry,
    pub description: BoardDescription,
}

impl RenderedBoard {
    /// Paint the board: black cells with white holes, then white bits with black holes.
    pub fn draw<S: RegionSink + ?Sized>(&self, sink: &mut S) {
        sink.fill_region(&self.background, Color::Black, Some(Color::White));
        sink.fill_region(&self.foreground, Color::White, Some(Color::Black));
    }

    /// Bounding box of everything drawn, in board millimetres.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.background.bounding_rect()
    }

    /// Description text (`.dsc` lines) for this board.
    pub fn description_text(&self) -> String {
        self.description.to_string()
    }
}
