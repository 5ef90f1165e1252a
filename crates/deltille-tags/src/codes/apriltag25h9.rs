//! AprilTag 25h9, minimum Hamming distance 9.
//!
//! Codes use the classic row-major layout: the most significant bit is the
//! top-left data cell and bits run left to right, top row first.

#[rustfmt::skip]
pub const APRILTAG_25H9: [u64; 35] = [
    0x155cbf1, 0x1e4d1b6, 0x17b0b68, 0x1eac9cd, 0x12e14ce, 0x03548bb,
    0x07757e6, 0x1065dab, 0x1baa2e7, 0x0dea688, 0x081d927, 0x051b241,
    0x0dbc8ae, 0x1e50e19, 0x15819d2, 0x16d8282, 0x163e035, 0x09d9b81,
    0x173eec4, 0x0ae3a09, 0x05f7c51, 0x1a137fc, 0x0dc9562, 0x1802e45,
    0x1c3542c, 0x0870fa4, 0x0914709, 0x16684f0, 0x0c8f2a5, 0x0833ebb,
    0x059717f, 0x13cd050, 0x0fa0ad1, 0x1b763b0, 0x0b991ce,
];
