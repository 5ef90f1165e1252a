//! Family metadata and packed marker codes.

use deltille_core::LatticeKind;
use serde::Serialize;

/// A fixed AprilTag/DelTag-style code family.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct TagFamily {
    /// Family name as written in board specifications (e.g. `aprilTag36h11`).
    pub name: &'static str,
    /// Lattice the codes are designed for.
    pub lattice: LatticeKind,
    /// Number of payload bits per marker (a perfect square: 16, 25, 36).
    pub bit_count: usize,
    /// Minimum Hamming distance between any two codes of the family.
    pub min_hamming: u8,
    /// One code per marker id, least significant bit = bit 0.
    #[serde(skip)]
    pub codes: &'static [u64],
}

impl TagFamily {
    /// Bits along one side of the marker: `round(√bit_count)`.
    #[inline]
    pub fn side_bits(&self) -> usize {
        (self.bit_count as f64).sqrt().round() as usize
    }

    /// Number of distinct marker ids.
    #[inline]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Code for marker `id`, or `None` past the end of the table.
    #[inline]
    pub fn code(&self, id: u32) -> Option<u64> {
        self.codes.get(id as usize).copied()
    }
}
