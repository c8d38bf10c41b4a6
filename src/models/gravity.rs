//! Gravitational thermodynamics models.
//!
//! This module contains black hole models whose thermodynamic quantities are
//! known in closed form.

pub mod black_hole;
