//! Quantum-corrected (LQG) black hole model.
//!
//! This module provides a [`twine_core::Model`] implementation for the black
//! hole thermodynamics. The computational core is in the internal [`core`]
//! module; its value types are re-exported here.

pub(crate) mod core;

use std::convert::Infallible;

use twine_core::Model;

pub use self::core::{
    CriticalPoint, DENOMINATOR_EPSILON, HorizonState, IsothermScan, LqgParameters,
    LqgParametersError, Thermodynamics, entropy, scaling, volume,
};

/// Evaluates the black hole state functions at a horizon state.
///
/// The model never fails. Out-of-domain inputs produce `NaN` fields in the
/// returned [`Thermodynamics`]; see [`Thermodynamics::is_physical`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LqgBlackHole {
    parameters: LqgParameters,
}

impl LqgBlackHole {
    #[must_use]
    pub fn new(parameters: LqgParameters) -> Self {
        Self { parameters }
    }

    #[must_use]
    pub fn parameters(&self) -> &LqgParameters {
        &self.parameters
    }
}

impl Model for LqgBlackHole {
    type Input = HorizonState;
    type Output = Thermodynamics;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.parameters.evaluate(*input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(thermo: &Thermodynamics) -> [f64; 6] {
        [
            thermo.mass,
            thermo.temperature,
            thermo.pressure,
            thermo.gibbs,
            thermo.entropy,
            thermo.volume,
        ]
    }

    fn assert_same_state(actual: &Thermodynamics, expected: &Thermodynamics) {
        for (a, e) in fields(actual).into_iter().zip(fields(expected)) {
            assert!(a == e || (a.is_nan() && e.is_nan()), "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn model_delegates_to_core() {
        let model = LqgBlackHole::default();
        let state = HorizonState::flat(6.0);

        let Ok(output) = model.call(&state);
        assert!(output.is_physical());
        assert_same_state(&output, &model.parameters().evaluate(state));
    }

    #[test]
    fn model_keeps_undefined_fields_as_nan() {
        let model = LqgBlackHole::default();
        let state = HorizonState {
            r_plus: 6.0,
            lambda: model.parameters().lambda_ads() / 4.0,
        };

        let Ok(output) = model.call(&state);
        assert!(output.mass.is_nan());
        assert!(output.gibbs.is_nan());
        assert!(output.temperature.is_finite());
        assert_same_state(&output, &model.parameters().evaluate(state));
    }

    #[test]
    fn out_of_domain_input_is_not_an_error() {
        let model = LqgBlackHole::default();

        let Ok(output) = model.call(&HorizonState::flat(-1.0));
        assert!(!output.is_physical());
        assert!(output.temperature.is_nan());
    }
}
