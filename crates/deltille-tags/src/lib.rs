//! Tag families and their embedded code tables.
//!
//! This crate focuses on:
//! - fixed AprilTag (square) and DelTag (triangular) code tables compiled into the binary,
//! - a [`CodeTable`] lookup that renderers receive by reference, so tests can
//!   substitute a small fake table for the built-in catalog.

pub mod builtins;
mod codes;
mod family;
mod table;

pub use family::TagFamily;
pub use table::CodeTable;
