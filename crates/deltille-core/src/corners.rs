//! Per-vertex touch counting.
//!
//! Every filled cell votes for the lattice vertices it owns. A vertex becomes
//! a calibration corner only when exactly the lattice's multiplicity of cells
//! voted for it (2 on a square lattice, 3 on a triangular one).

use std::collections::HashMap;

/// Accumulated votes for one vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CornerVotes {
    /// Highest marker id among the voting cells. `None` when no marker voted.
    pub tag_id: Option<u32>,
    /// Number of cells that touched this vertex.
    pub count: u32,
}

/// A vertex that reached the required touch count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidCorner {
    pub i: i32,
    pub j: i32,
    pub tag_id: Option<u32>,
}

/// Insertion-ordered map from vertex `(i, j)` to its votes.
///
/// Iteration follows the order in which vertices were first touched, so the
/// same grid always yields the same corner order.
#[derive(Clone, Debug, Default)]
pub struct CornerRegistry {
    index: HashMap<(i32, i32), usize>,
    entries: Vec<((i32, i32), CornerVotes)>,
}

impl CornerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one touch of vertex `(i, j)`.
    ///
    /// `None` stands for a cell without a marker and never replaces a real id.
    pub fn vote(&mut self, i: i32, j: i32, tag_id: Option<u32>) {
        match self.index.get(&(i, j)) {
            Some(&slot) => {
                let votes = &mut self.entries[slot].1;
                // Option orders None below every Some, so max keeps the best marker.
                votes.tag_id = votes.tag_id.max(tag_id);
                votes.count += 1;
            }
            None => {
                self.index.insert((i, j), self.entries.len());
                self.entries.push(((i, j), CornerVotes { tag_id, count: 1 }));
            }
        }
    }

    /// Votes recorded for `(i, j)`, if any.
    pub fn get(&self, i: i32, j: i32) -> Option<CornerVotes> {
        self.index.get(&(i, j)).map(|&slot| self.entries[slot].1)
    }

    /// Number of distinct vertices touched.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All touched vertices in first-touch order.
    pub fn iter(&self) -> impl Iterator<Item = ((i32, i32), CornerVotes)> + '_ {
        self.entries.iter().copied()
    }

    /// Vertices whose touch count equals `multiplicity`, in first-touch order.
    pub fn valid_corners(&self, multiplicity: u32) -> impl Iterator<Item = ValidCorner> + '_ {
        self.entries
            .iter()
            .filter(move |(_, votes)| votes.count == multiplicity)
            .map(|&((i, j), votes)| ValidCorner {
                i,
                j,
                tag_id: votes.tag_id,
            })
    }
}
