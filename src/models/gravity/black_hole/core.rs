//! Closed-form thermodynamics of the LQG-corrected black hole.
//!
//! The model is fixed by one constant, the Barbero-Immirzi parameter `γ`.
//! From it the quantum correction `α` and the AdS cosmological constant follow,
//! and every state function is an explicit formula in `(r₊, Λ)`.
//!
//! Nothing here solves equations. Curves the figures need (isotherms, the
//! inversion curve) come from evaluating formulas on fixed grids.

mod isotherm;
mod joule_thomson;
mod parameters;
mod state;

pub mod scaling;

pub use isotherm::IsothermScan;
pub use joule_thomson::DENOMINATOR_EPSILON;
pub use parameters::{CriticalPoint, LqgParameters, LqgParametersError};
pub use state::{HorizonState, Thermodynamics, entropy, volume};
