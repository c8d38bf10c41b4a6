//! Closed-form thermodynamic state functions.
//!
//! Every function returns `NaN` outside its domain instead of failing, so a
//! grid sweep keeps one output per input and invalid regions show up as gaps.

use std::f64::consts::PI;

use super::LqgParameters;

/// A point in the model's input space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizonState {
    /// Horizon radius `r₊`.
    pub r_plus: f64,
    /// Cosmological constant `Λ`.
    pub lambda: f64,
}

impl HorizonState {
    /// A horizon in asymptotically flat spacetime (`Λ = 0`).
    #[must_use]
    pub fn flat(r_plus: f64) -> Self {
        Self { r_plus, lambda: 0.0 }
    }
}

/// Thermodynamic quantities at a [`HorizonState`].
///
/// Fields are `NaN` where the corresponding formula is undefined, so the type
/// does not implement `PartialEq`; compare fields with `NaN` in mind.
#[derive(Debug, Clone, Copy)]
pub struct Thermodynamics {
    pub mass: f64,
    pub temperature: f64,
    pub pressure: f64,
    pub gibbs: f64,
    /// Horizon entropy `S = π r₊²`.
    pub entropy: f64,
    /// Plotting volume `V = 2 r₊`.
    pub volume: f64,
}

impl Thermodynamics {
    /// Returns `true` if every quantity is finite.
    #[must_use]
    pub fn is_physical(&self) -> bool {
        [
            self.mass,
            self.temperature,
            self.pressure,
            self.gibbs,
            self.entropy,
            self.volume,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

impl LqgParameters {
    /// Mass `M = r³/(3α)·(1 − √D)` with `D = 1 − 9α/r² + Λαr²`.
    ///
    /// Undefined unless `D ≥ 0` and `r > 0`.
    #[must_use]
    pub fn mass(&self, r_plus: f64, lambda: f64) -> f64 {
        if r_plus.is_nan() || r_plus <= 0.0 {
            return f64::NAN;
        }

        let alpha = self.alpha();
        let discriminant = 1.0 - 9.0 * alpha / r_plus.powi(2) + alpha * lambda * r_plus.powi(2);
        if discriminant >= 0.0 {
            r_plus.powi(3) / (3.0 * alpha) * (1.0 - discriminant.sqrt())
        } else {
            f64::NAN
        }
    }

    /// Hawking temperature `T = (1/4π)(1/r² − 2α/r⁵ + Λr/3)`.
    #[must_use]
    pub fn temperature(&self, r_plus: f64, lambda: f64) -> f64 {
        if r_plus.is_nan() || r_plus <= 0.0 {
            return f64::NAN;
        }

        let alpha = self.alpha();
        1.0 / (4.0 * PI)
            * (1.0 / r_plus.powi(2) - 2.0 * alpha / r_plus.powi(5) + lambda * r_plus / 3.0)
    }

    /// Pressure `P = T/(2r) − 1/(8πr²)`.
    #[must_use]
    pub fn pressure(&self, r_plus: f64, lambda: f64) -> f64 {
        if r_plus.is_nan() || r_plus <= 0.0 {
            return f64::NAN;
        }

        let temperature = self.temperature(r_plus, lambda);
        temperature / (2.0 * r_plus) - 1.0 / (8.0 * PI * r_plus.powi(2))
    }

    /// Gibbs free energy `G = M − T·S` with `S = π r²`.
    #[must_use]
    pub fn gibbs(&self, r_plus: f64, lambda: f64) -> f64 {
        let mass = self.mass(r_plus, lambda);
        let temperature = self.temperature(r_plus, lambda);
        mass - temperature * entropy(r_plus)
    }

    /// Evaluates every state function at `state`.
    #[must_use]
    pub fn evaluate(&self, state: HorizonState) -> Thermodynamics {
        let HorizonState { r_plus, lambda } = state;

        Thermodynamics {
            mass: self.mass(r_plus, lambda),
            temperature: self.temperature(r_plus, lambda),
            pressure: self.pressure(r_plus, lambda),
            gibbs: self.gibbs(r_plus, lambda),
            entropy: entropy(r_plus),
            volume: volume(r_plus),
        }
    }
}

/// Horizon entropy `S = π r²`.
#[must_use]
pub fn entropy(r_plus: f64) -> f64 {
    PI * r_plus.powi(2)
}

/// Plotting volume `V = 2 r`.
#[must_use]
pub fn volume(r_plus: f64) -> f64 {
    2.0 * r_plus
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::{constraint::NonZero, grid::linspace};

    #[test]
    fn non_positive_radius_is_undefined() {
        let params = LqgParameters::default();
        let lambda_half = params.lambda_ads() / 2.0;

        for r in [0.0, -1.0, -10.0, f64::NAN] {
            for lambda in [0.0, lambda_half] {
                assert!(params.mass(r, lambda).is_nan());
                assert!(params.temperature(r, lambda).is_nan());
                assert!(params.pressure(r, lambda).is_nan());
                assert!(params.gibbs(r, lambda).is_nan());
            }
        }
    }

    #[test]
    fn reference_values() {
        let params = LqgParameters::default();

        assert_relative_eq!(
            params.temperature(4.0, 0.0),
            0.004_792_315_474_900_615_5,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            params.pressure(4.0, 0.0),
            -0.001_887_756_551_448_287_8,
            max_relative = 1e-12
        );
        assert_relative_eq!(params.mass(4.0, 0.0), 7.563_993_253_237_626, max_relative = 1e-12);
        assert_relative_eq!(params.gibbs(4.0, 0.0), 7.323_105_203_803_507, max_relative = 1e-12);
    }

    #[test]
    fn flat_temperature_vanishes_at_large_radius() {
        let params = LqgParameters::default();

        let mut previous = params.temperature(10.0, 0.0);
        for r in [1e2, 1e3, 1e4, 1e6] {
            let t = params.temperature(r, 0.0);
            assert!(t > 0.0 && t < previous);
            previous = t;
        }
        assert!(params.temperature(1e8, 0.0) < 1e-17);
    }

    #[test]
    fn mass_requires_non_negative_discriminant() {
        let params = LqgParameters::default();
        let threshold = 3.0 * params.alpha().sqrt();

        assert!(params.mass(threshold * 0.999, 0.0).is_nan());
        assert!(params.mass(threshold * 1.001, 0.0).is_finite());

        // A negative Λ shrinks the discriminant further.
        assert!(params.mass(threshold * 1.001, params.lambda_ads() / 2.0).is_nan());
    }

    #[test]
    fn gibbs_is_continuous_where_mass_is_defined() {
        let params = LqgParameters::default();
        let threshold = 3.0 * params.alpha().sqrt();
        let radii = linspace(2.0, 10.0, NonZero::new(1000).unwrap());

        let (inside, outside): (Vec<f64>, Vec<f64>) =
            radii.iter().partition(|&&r| r >= threshold);

        assert!(outside.iter().all(|&r| params.gibbs(r, 0.0).is_nan()));
        assert!(inside.iter().all(|&r| params.gibbs(r, 0.0).is_finite()));

        let step = radii[1] - radii[0];
        let jumps = inside
            .windows(2)
            .map(|w| (params.gibbs(w[1], 0.0) - params.gibbs(w[0], 0.0)).abs());
        assert!(jumps.into_iter().all(|jump| jump < 100.0 * step));
    }

    #[test]
    fn evaluate_matches_individual_functions() {
        let params = LqgParameters::default();
        let state = HorizonState::flat(5.0);
        let thermo = params.evaluate(state);

        assert_eq!(thermo.mass, params.mass(5.0, 0.0));
        assert_eq!(thermo.temperature, params.temperature(5.0, 0.0));
        assert_eq!(thermo.pressure, params.pressure(5.0, 0.0));
        assert_eq!(thermo.gibbs, params.gibbs(5.0, 0.0));
        assert_relative_eq!(thermo.entropy, 25.0 * PI);
        assert_eq!(thermo.volume, 10.0);
        assert!(thermo.is_physical());

        assert!(!params.evaluate(HorizonState::flat(2.0)).is_physical());
    }
}
