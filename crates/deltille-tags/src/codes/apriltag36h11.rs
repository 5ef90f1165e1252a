//! AprilTag 36h11, minimum Hamming distance 11.
//!
//! Codes use the classic row-major layout: the most significant bit is the
//! top-left data cell and bits run left to right, top row first.
//!
//! Only ids 0..15 of the 587-code family are carried.

#[rustfmt::skip]
pub const APRILTAG_36H11: [u64; 15] = [
    0xd5d628584, 0xd97f18b49, 0xdd280910e, 0xe479e9c98,
    0xebcbca822, 0xf31dab3ac, 0x056a5d085, 0x10652e1d4,
    0x22b1dfead, 0x265ad0472, 0x34fe91b86, 0x3ff962cd5,
    0x43a25329a, 0x474b4385f, 0x4e9d243e9,
];
