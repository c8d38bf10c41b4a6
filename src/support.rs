//! Crate-level utilities shared by the black hole model and the figures.
//!
//! These modules are public because they are useful on their own, but their
//! APIs are not stable.

pub mod constraint;
pub mod grid;
pub mod series;
