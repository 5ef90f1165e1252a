#![allow(clippy::unreadable_literal)]

mod apriltag16h5;
mod apriltag25h9;
mod apriltag36h11;
mod deltag16h5;
mod deltag25h9;

pub(crate) use apriltag16h5::APRILTAG_16H5;
pub(crate) use apriltag25h9::APRILTAG_25H9;
pub(crate) use apriltag36h11::APRILTAG_36H11;
pub(crate) use deltag16h5::DELTAG_16H5;
pub(crate) use deltag25h9::DELTAG_25H9;
