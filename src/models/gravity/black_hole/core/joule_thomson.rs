//! Joule-Thomson expansion.

use super::{CriticalPoint, LqgParameters};

/// Denominators at or below this magnitude leave the coefficient undefined.
pub const DENOMINATOR_EPSILON: f64 = 1e-12;

impl LqgParameters {
    /// Joule-Thomson coefficient at horizon radius `r_plus` and mass `mass`.
    ///
    /// ```text
    /// μ = (4mr⁵ − 30αm²r² − 12mr⁵ + 2r⁶) / (9αm² − 9mr³ + 3r⁴)
    /// ```
    ///
    /// Returns `NaN` unless `|denominator| > 1e-12`, `r > 0` and `m > 0`.
    /// The cosmological constant does not enter the coefficient.
    #[must_use]
    pub fn joule_thomson(&self, r_plus: f64, mass: f64) -> f64 {
        let alpha = self.alpha();
        let r2 = r_plus.powi(2);
        let r5 = r_plus.powi(5);
        let m2 = mass.powi(2);

        let numerator = 4.0 * mass * r5 - 30.0 * alpha * m2 * r2 - 12.0 * mass * r5
            + 2.0 * r_plus.powi(6);
        let denominator = 9.0 * alpha * m2 - 9.0 * mass * r_plus.powi(3) + 3.0 * r_plus.powi(4);

        if denominator.abs() > DENOMINATOR_EPSILON && r_plus > 0.0 && mass > 0.0 {
            numerator / denominator
        } else {
            f64::NAN
        }
    }
}

impl CriticalPoint {
    /// Simplified inversion temperature `T_inv = Tc·(1 + 2P/Pc)`.
    #[must_use]
    pub fn inversion_temperature(&self, pressure: f64) -> f64 {
        self.temperature * (1.0 + 2.0 * pressure / self.pressure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn coefficient_at_reference_radius() {
        let params = LqgParameters::default();
        let mass = params.mass(4.0, 0.0);

        assert_relative_eq!(
            params.joule_thomson(4.0, mass),
            28.713_046_316_515_847,
            max_relative = 1e-10
        );
    }

    #[test]
    fn undefined_outside_domain() {
        let params = LqgParameters::default();

        assert!(params.joule_thomson(0.0, 1.0).is_nan());
        assert!(params.joule_thomson(-3.0, 1.0).is_nan());
        assert!(params.joule_thomson(4.0, 0.0).is_nan());
        assert!(params.joule_thomson(4.0, -1.0).is_nan());
        assert!(params.joule_thomson(4.0, f64::NAN).is_nan());
    }

    #[test]
    fn inversion_curve_passes_through_critical_temperature() {
        let critical = LqgParameters::default().critical_point();

        assert_eq!(critical.inversion_temperature(0.0), critical.temperature);
        assert_relative_eq!(
            critical.inversion_temperature(critical.pressure),
            3.0 * critical.temperature
        );
    }
}
