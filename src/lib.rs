//! # LQG Thermo
//!
//! Closed-form thermodynamics of a loop-quantum-gravity corrected black hole,
//! and the figures that summarize its phase structure.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`figures`]: Sampling grids and PNG rendering for the five figures.
//! - [`support`]: Supporting utilities used by models and figures.
//!
//! ## Domain errors
//!
//! State functions never fail. Outside their domain (non-positive radius,
//! negative mass discriminant, vanishing denominator) they return `NaN`, which
//! flows into the sampled arrays and renders as a gap.
//!
//! ```
//! use lqg_thermo::models::gravity::black_hole::LqgParameters;
//!
//! let params = LqgParameters::default();
//! assert!(params.temperature(-1.0, 0.0).is_nan());
//! assert!(params.gibbs(5.0, 0.0).is_finite());
//! ```

pub mod figures;
pub mod models;
pub mod support;
