//! Mean-field scaling near the critical point.
//!
//! Each function takes the reduced temperature `t = (T − Tc)/Tc` (or the
//! conjugate field `h` for the critical isotherm) and returns the scaling
//! form of one observable.

/// Regulator keeping the divergent forms finite at `t = 0`.
pub const REGULATOR: f64 = 1e-6;

/// Which side of the critical temperature a heat capacity branch covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// `T > Tc`
    Above,
    /// `T < Tc`
    Below,
}

/// Heat capacity with exponent `α = 0` (logarithmic divergence).
///
/// `C = −ln(|t| + ε)` on the requested branch, `NaN` on the other side and
/// at `t = 0`.
#[must_use]
pub fn heat_capacity(t: f64, branch: Branch) -> f64 {
    let on_branch = match branch {
        Branch::Above => t > 0.0,
        Branch::Below => t < 0.0,
    };
    if on_branch {
        -(t.abs() + REGULATOR).ln()
    } else {
        f64::NAN
    }
}

/// Order parameter with exponent `β = 1/2`: `|t|^½` below `Tc`, zero above.
#[must_use]
pub fn order_parameter(t: f64) -> f64 {
    if t < 0.0 { t.abs().sqrt() } else { 0.0 }
}

/// Isothermal compressibility with exponent `γ = 1`: `1/|t + ε|`.
#[must_use]
pub fn compressibility(t: f64) -> f64 {
    1.0 / (t + REGULATOR).abs()
}

/// Critical isotherm with exponent `δ = 3`: `sign(h)·|h|^⅓`.
#[must_use]
pub fn critical_isotherm(h: f64) -> f64 {
    if h == 0.0 {
        return 0.0;
    }
    h.signum() * h.abs().powf(1.0 / 3.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn heat_capacity_branches() {
        assert!(heat_capacity(0.1, Branch::Above).is_finite());
        assert!(heat_capacity(0.1, Branch::Below).is_nan());
        assert!(heat_capacity(-0.1, Branch::Below).is_finite());
        assert!(heat_capacity(-0.1, Branch::Above).is_nan());
        assert!(heat_capacity(0.0, Branch::Above).is_nan());
        assert!(heat_capacity(0.0, Branch::Below).is_nan());

        assert_relative_eq!(
            heat_capacity(0.1, Branch::Above),
            heat_capacity(-0.1, Branch::Below)
        );
        assert!(heat_capacity(0.01, Branch::Above) > heat_capacity(0.1, Branch::Above));
    }

    #[test]
    fn order_parameter_vanishes_above_critical() {
        assert_relative_eq!(order_parameter(-0.25), 0.5);
        assert_eq!(order_parameter(0.0), 0.0);
        assert_eq!(order_parameter(0.3), 0.0);
    }

    #[test]
    fn compressibility_diverges_linearly() {
        assert_relative_eq!(compressibility(0.5), 1.0 / (0.5 + REGULATOR));
        assert_relative_eq!(compressibility(-0.5), 1.0 / (0.5 - REGULATOR));
        assert!(compressibility(0.0) > 1e5);
    }

    #[test]
    fn critical_isotherm_is_odd() {
        assert_relative_eq!(critical_isotherm(0.125), 0.5);
        assert_relative_eq!(critical_isotherm(-0.125), -0.5);
        assert_eq!(critical_isotherm(0.0), 0.0);
    }
}
