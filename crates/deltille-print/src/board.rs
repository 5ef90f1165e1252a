//! Board specification and tag-id offset assignment.

use std::collections::HashMap;

use deltille_core::{CellGrid, LatticeKind};
use serde::{Deserialize, Serialize};

use crate::ConfigurationError;

/// Default marker border thickness, in units of one bit.
pub const DEFAULT_TAG_BORDER: f64 = 2.0;

fn default_tag_border() -> f64 {
    DEFAULT_TAG_BORDER
}

/// One physical board: lattice, tag family, cell grid and dimensions.
///
/// `edge_length` is the side of one cell in millimetres. `tag_border` is the
/// black border around the marker bits, as a multiple of one bit's size.
/// `tag_id_offset` is the first marker id used on this board; it is normally
/// assigned by [`adjust_tag_id_offsets`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSpec {
    pub board_type: LatticeKind,
    pub tag_family: String,
    pub grid: CellGrid,
    pub edge_length: f64,
    #[serde(default = "default_tag_border")]
    pub tag_border: f64,
    #[serde(default)]
    pub tag_id_offset: u32,
}

impl BoardSpec {
    pub fn new(
        board_type: LatticeKind,
        tag_family: impl Into<String>,
        grid: CellGrid,
        edge_length: f64,
    ) -> Self {
        Self {
            board_type,
            tag_family: tag_family.into(),
            grid,
            edge_length,
            tag_border: DEFAULT_TAG_BORDER,
            tag_id_offset: 0,
        }
    }

    pub fn with_tag_border(mut self, tag_border: f64) -> Self {
        self.tag_border = tag_border;
        self
    }

    pub fn with_tag_id_offset(mut self, tag_id_offset: u32) -> Self {
        self.tag_id_offset = tag_id_offset;
        self
    }

    /// Number of marker cells, i.e. how many tag ids the board consumes.
    #[inline]
    pub fn marker_count(&self) -> usize {
        self.grid.marker_count()
    }

    /// Check the physical dimensions.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !self.edge_length.is_finite() || self.edge_length <= 0.0 {
            return Err(ConfigurationError::InvalidEdgeLength(self.edge_length));
        }
        if !self.tag_border.is_finite() || self.tag_border <= 0.0 {
            return Err(ConfigurationError::InvalidTagBorder(self.tag_border));
        }
        Ok(())
    }
}

/// Assign per-family tag-id offsets so that no two boards reuse an id.
///
/// The first board of each family starts at 0; every later board of the same
/// family starts after all markers of the earlier ones. Families are counted
/// independently. Must run once over the whole design, before rendering.
pub fn adjust_tag_id_offsets(boards: &mut [BoardSpec]) {
    let mut used: HashMap<String, u32> = HashMap::new();
    for board in boards.iter_mut() {
        let markers = board.marker_count() as u32;
        match used.get_mut(&board.tag_family) {
            Some(total) => {
                board.tag_id_offset = *total;
                *total += markers;
            }
            None => {
                board.tag_id_offset = 0;
                used.insert(board.tag_family.clone(), markers);
            }
        }
        log::debug!(
            "{}: {} markers starting at id {}",
            board.tag_family,
            markers,
            board.tag_id_offset
        );
    }
}
