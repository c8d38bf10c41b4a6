//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation lives. The [`twine_core::Model`] implementation
//! is a thin adapter over that core; the value types it exchanges are
//! re-exported next to it.

pub mod gravity;
