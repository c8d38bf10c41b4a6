//! Model constants derived from the Barbero-Immirzi parameter.

use std::f64::consts::PI;

use thiserror::Error;

use crate::support::constraint::{
    Constrained, Constraint, ConstraintError, Finite, StrictlyPositive,
};

/// Errors that may occur when constructing [`LqgParameters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LqgParametersError {
    /// The Barbero-Immirzi parameter must be strictly positive and finite.
    #[error("invalid Barbero-Immirzi parameter: {source}")]
    Gamma {
        #[source]
        source: ConstraintError,
    },
}

/// Constants of the quantum-corrected black hole.
///
/// Everything is derived from the Barbero-Immirzi parameter `γ`:
///
/// - quantum correction `α = 16·√3·π·γ³`
/// - AdS cosmological constant `Λ_AdS = −3 / (16·π·γ³)`
///
/// All quantities are in geometrized units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LqgParameters {
    gamma: f64,
    alpha: f64,
    lambda_ads: f64,
}

impl LqgParameters {
    /// Barbero-Immirzi parameter used when none is given.
    pub const DEFAULT_GAMMA: f64 = 0.2375;

    /// Derives the model constants from `gamma`.
    ///
    /// # Errors
    ///
    /// Returns [`LqgParametersError::Gamma`] if `gamma` is not strictly
    /// positive and finite.
    pub fn new(gamma: f64) -> Result<Self, LqgParametersError> {
        let gamma = Constrained::<f64, StrictlyPositive>::new(gamma)
            .and_then(|gamma| Finite::check(gamma.as_ref()).map(|()| gamma))
            .map_err(|source| LqgParametersError::Gamma { source })?;

        Ok(Self::from_gamma(gamma))
    }

    fn from_gamma(gamma: Constrained<f64, StrictlyPositive>) -> Self {
        let gamma = gamma.into_inner();
        let gamma_cubed = gamma.powi(3);

        Self {
            gamma,
            alpha: 16.0 * 3.0_f64.sqrt() * PI * gamma_cubed,
            lambda_ads: -3.0 / (16.0 * PI * gamma_cubed),
        }
    }

    /// The Barbero-Immirzi parameter `γ`.
    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// The quantum correction `α`.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// The AdS cosmological constant `Λ_AdS` (negative).
    #[must_use]
    pub fn lambda_ads(&self) -> f64 {
        self.lambda_ads
    }

    /// Closed-form critical point of the model.
    #[must_use]
    pub fn critical_point(&self) -> CriticalPoint {
        CriticalPoint::from_alpha(self.alpha)
    }
}

impl Default for LqgParameters {
    fn default() -> Self {
        Self::new(Self::DEFAULT_GAMMA).expect("default gamma is strictly positive and finite")
    }
}

/// Critical values of the LQG black hole phase transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriticalPoint {
    /// Critical horizon radius `r₊c = 2·√(3α)`.
    pub r_plus: f64,
    /// Critical pressure `Pc = 1 / (24·π·α)`.
    pub pressure: f64,
    /// Critical volume `Vc = 4·√(3α)`.
    pub volume: f64,
    /// Critical temperature `Tc = √3 / (50·π·√α)`.
    pub temperature: f64,
}

impl CriticalPoint {
    /// Classical Van der Waals value of `Pc·Vc/Tc`.
    pub const CLASSICAL_RATIO: f64 = 3.0 / 8.0;

    /// Reference quantum-corrected value of `Pc·Vc/Tc`.
    pub const QUANTUM_RATIO: f64 = 7.0 / 18.0;

    fn from_alpha(alpha: f64) -> Self {
        Self {
            r_plus: 2.0 * (3.0 * alpha).sqrt(),
            pressure: 1.0 / (24.0 * PI * alpha),
            volume: 4.0 * (3.0 * alpha).sqrt(),
            temperature: 3.0_f64.sqrt() / (50.0 * PI * alpha.sqrt()),
        }
    }

    /// The critical ratio `Pc·Vc/Tc`.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.pressure * self.volume / self.temperature
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_constants() {
        let params = LqgParameters::default();

        assert_eq!(params.gamma(), 0.2375);
        assert_relative_eq!(params.alpha(), 1.166_329_672_432_734, epsilon = 1e-12);
        assert_relative_eq!(params.lambda_ads(), -4.455_131_808_374_968, epsilon = 1e-12);
    }

    #[test]
    fn critical_point_closed_forms() {
        let critical = LqgParameters::default().critical_point();

        assert_relative_eq!(critical.pressure, 0.011_371_494_902_175_29, epsilon = 1e-15);
        assert_relative_eq!(critical.volume, 7.482_233_909_520_019, epsilon = 1e-12);
        assert_relative_eq!(critical.temperature, 0.010_210_102_171_078_797, epsilon = 1e-15);
        assert_relative_eq!(critical.r_plus, 0.5 * critical.volume);
    }

    #[test]
    fn critical_ratio_is_independent_of_gamma() {
        // Pc·Vc/Tc = (4√3·√α / 24πα) · (50π√α / √3) = 200/24.
        for gamma in [0.1, 0.2375, 0.5, 2.0] {
            let critical = LqgParameters::new(gamma).unwrap().critical_point();
            assert_relative_eq!(critical.ratio(), 25.0 / 3.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn rejects_invalid_gamma() {
        for (gamma, source) in [
            (0.0, ConstraintError::Zero),
            (-0.2375, ConstraintError::Negative),
            (f64::NAN, ConstraintError::NotANumber),
            (f64::INFINITY, ConstraintError::Infinite),
        ] {
            assert_eq!(
                LqgParameters::new(gamma),
                Err(LqgParametersError::Gamma { source })
            );
        }
    }
}
