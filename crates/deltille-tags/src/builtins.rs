//! Embedded built-in families.
//!
//! Square boards use the AprilTag tables, triangular boards the DelTag tables.

use deltille_core::LatticeKind;

use crate::codes::{APRILTAG_16H5, APRILTAG_25H9, APRILTAG_36H11, DELTAG_16H5, DELTAG_25H9};
use crate::TagFamily;

pub const APRILTAG16H5: TagFamily = TagFamily {
    name: "aprilTag16h5",
    lattice: LatticeKind::Square,
    bit_count: 16,
    min_hamming: 5,
    codes: &APRILTAG_16H5,
};

pub const APRILTAG25H9: TagFamily = TagFamily {
    name: "aprilTag25h9",
    lattice: LatticeKind::Square,
    bit_count: 25,
    min_hamming: 9,
    codes: &APRILTAG_25H9,
};

pub const APRILTAG36H11: TagFamily = TagFamily {
    name: "aprilTag36h11",
    lattice: LatticeKind::Square,
    bit_count: 36,
    min_hamming: 11,
    codes: &APRILTAG_36H11,
};

pub const DELTAG16H5: TagFamily = TagFamily {
    name: "delTag16h5",
    lattice: LatticeKind::Triangular,
    bit_count: 16,
    min_hamming: 5,
    codes: &DELTAG_16H5,
};

pub const DELTAG25H9: TagFamily = TagFamily {
    name: "delTag25h9",
    lattice: LatticeKind::Triangular,
    bit_count: 25,
    min_hamming: 9,
    codes: &DELTAG_25H9,
};

/// Every built-in family, square families first.
pub const BUILTIN_FAMILIES: [TagFamily; 5] =
    [APRILTAG16H5, APRILTAG25H9, APRILTAG36H11, DELTAG16H5, DELTAG25H9];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_have_expected_sizes() {
        assert_eq!(APRILTAG16H5.len(), 30);
        assert_eq!(APRILTAG25H9.len(), 35);
        assert_eq!(APRILTAG36H11.len(), 15);
        assert_eq!(DELTAG16H5.len(), 34);
        assert_eq!(DELTAG25H9.len(), 47);
    }

    #[test]
    fn codes_fit_in_bit_count() {
        for fam in BUILTIN_FAMILIES {
            let limit = 1u64 << fam.bit_count;
            assert!(
                fam.codes.iter().all(|&c| c < limit),
                "{} has a code wider than {} bits",
                fam.name,
                fam.bit_count
            );
            assert_eq!(fam.side_bits() * fam.side_bits(), fam.bit_count);
        }
    }

    #[test]
    fn codes_are_distinct() {
        for fam in BUILTIN_FAMILIES {
            let mut codes = fam.codes.to_vec();
            codes.sort_unstable();
            codes.dedup();
            assert_eq!(codes.len(), fam.len(), "{} has duplicate codes", fam.name);
        }
    }

    /// Rotate a row-major, MSB-first square code a quarter turn clockwise.
    fn rotate(code: u64, k: usize) -> u64 {
        let n = k * k;
        let mut out = 0;
        for r in 0..k {
            for c in 0..k {
                if code >> (n - 1 - (r * k + c)) & 1 == 1 {
                    let (nr, nc) = (c, k - 1 - r);
                    out |= 1 << (n - 1 - (nr * k + nc));
                }
            }
        }
        out
    }

    #[test]
    fn apriltag_tables_start_with_the_published_codes() {
        assert_eq!(APRILTAG16H5.code(0), Some(0x231b));
        assert_eq!(APRILTAG16H5.code(29), Some(0xaf2e));
        assert_eq!(APRILTAG25H9.code(0), Some(0x155cbf1));
        assert_eq!(APRILTAG36H11.code(0), Some(0xd5d628584));
        assert_eq!(APRILTAG36H11.code(1), Some(0xd97f18b49));
    }

    #[test]
    fn apriltag_codes_keep_their_distance_under_rotation() {
        for fam in [APRILTAG16H5, APRILTAG25H9, APRILTAG36H11] {
            let k = fam.side_bits();
            let min = u32::from(fam.min_hamming);
            for (i, &a) in fam.codes.iter().enumerate() {
                let mut turned = a;
                for _ in 1..4 {
                    turned = rotate(turned, k);
                    assert!(
                        (a ^ turned).count_ones() >= min,
                        "{} id {i} is self-similar",
                        fam.name
                    );
                }
                for (j, &b) in fam.codes.iter().enumerate().skip(i + 1) {
                    let mut turned = b;
                    for _ in 0..4 {
                        assert!(
                            (a ^ turned).count_ones() >= min,
                            "{} ids {i} and {j} are too close",
                            fam.name
                        );
                        turned = rotate(turned, k);
                    }
                }
            }
        }
    }
}
