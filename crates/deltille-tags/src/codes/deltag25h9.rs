//! DelTag 25h9, minimum Hamming distance 9.

#[rustfmt::skip]
pub const DELTAG_25H9: [u64; 47] = [
    0x09222e8, 0x12128ad, 0x1ec4586, 0x07b4b4b, 0x19956d5, 0x0285c9a,
    0x1d56de9, 0x06473ae, 0x1be964c, 0x036c474, 0x17a0f75, 0x0452c4e,
    0x1719fb2, 0x1b3aedd, 0x1585069, 0x0d2c326, 0x052253b, 0x06c7d43,
    0x0e82bd6, 0x1859975, 0x1665215, 0x157840d, 0x0ce765f, 0x01b39e2,
    0x144cf6c, 0x0c95d3c, 0x0b00df3, 0x0efa572, 0x1f7b853, 0x1135a2e,
    0x0c22965, 0x08f08d7, 0x1b4f42b, 0x07d9958, 0x08176bb, 0x007ab40,
    0x0bc696e, 0x17ddc24, 0x072b21e, 0x0c493cd, 0x1e7576b, 0x0b9ae42,
    0x0581746, 0x159e81a, 0x1f259a1, 0x0634de6, 0x01d8f29,
];
