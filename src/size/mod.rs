//! The octet-count value type.
//!
//! ## Main Parts
//!
//! - [`Size`] - An immutable, non-negative number of octets with unit conversions
//! - Arithmetic operators and their checked counterparts, in [`ops`]

#[allow(clippy::module_inception)]
// This is acceptable as it is the main module for the size type
pub mod size;
pub mod ops;

pub use size::Size;
