//! DelTag 16h5, minimum Hamming distance 5.

#[rustfmt::skip]
pub const DELTAG_16H5: [u64; 34] = [
    0x24d6, 0x2a9b, 0x3625, 0x3bea, 0x41af, 0x4d39,
    0x58c3, 0x5e88, 0x644d, 0x86eb, 0xa989, 0xbad8,
    0xd7b1, 0xeec5, 0x1ced, 0x8a8c, 0xca03, 0xf266,
    0x74f5, 0x1c46, 0x2d95, 0x4a6e, 0x25ac, 0x7b90,
    0x796c, 0x6628, 0x974a, 0x6433, 0x8f76, 0xf46b,
    0xe6bd, 0xb491, 0x8c5d, 0x1d8b,
];
