use super::{LqgParameters, state::volume};

/// Tolerance scan for points on a pressure-volume isotherm.
///
/// Rather than inverting `T(r) = T_iso`, the scan keeps every grid radius
/// whose flat-space temperature is positive and within `tolerance` of the
/// target. Each kept radius contributes its `(V, P)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsothermScan {
    /// Absolute temperature tolerance for accepting a radius.
    pub tolerance: f64,
}

impl Default for IsothermScan {
    fn default() -> Self {
        Self { tolerance: 1e-3 }
    }
}

impl IsothermScan {
    /// Returns the `(volume, pressure)` points matching `target_temperature`.
    ///
    /// Points are sorted by volume. An empty result means no radius on the
    /// grid matched.
    #[must_use]
    pub fn scan(
        &self,
        params: &LqgParameters,
        radii: &[f64],
        target_temperature: f64,
    ) -> Vec<(f64, f64)> {
        let mut points: Vec<(f64, f64)> = radii
            .iter()
            .copied()
            .filter(|&r| {
                let t = params.temperature(r, 0.0);
                t > 0.0 && (t - target_temperature).abs() < self.tolerance
            })
            .map(|r| (volume(r), params.pressure(r, 0.0)))
            .collect();

        points.sort_by(|a, b| a.0.total_cmp(&b.0));
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::{constraint::NonZero, grid::linspace};

    fn radii() -> Vec<f64> {
        linspace(2.0, 10.0, NonZero::new(1000).unwrap())
    }

    #[test]
    fn points_lie_within_tolerance() {
        let params = LqgParameters::default();
        let scan = IsothermScan::default();
        let target = params.critical_point().temperature;

        let points = scan.scan(&params, &radii(), target);
        assert!(!points.is_empty());

        for &(v, p) in &points {
            let r = v / 2.0;
            assert!((params.temperature(r, 0.0) - target).abs() < scan.tolerance);
            assert_eq!(p, params.pressure(r, 0.0));
        }
    }

    #[test]
    fn points_are_sorted_by_volume() {
        let params = LqgParameters::default();
        let mut radii = radii();
        radii.reverse();

        let points = IsothermScan::default().scan(&params, &radii, 0.006);
        assert!(points.windows(2).all(|w| w[0].0 <= w[1].0));
    }

    #[test]
    fn matching_counts_by_temperature_ratio() {
        let params = LqgParameters::default();
        let tc = params.critical_point().temperature;
        let scan = IsothermScan::default();

        let counts: Vec<usize> = [0.6, 0.8, 1.0, 1.2, 1.4]
            .iter()
            .map(|ratio| scan.scan(&params, &radii(), ratio * tc).len())
            .collect();

        assert_eq!(counts, vec![80, 54, 41, 37, 17]);
    }

    #[test]
    fn unreachable_temperature_is_empty() {
        let params = LqgParameters::default();

        assert!(IsothermScan::default().scan(&params, &radii(), 1.0).is_empty());
        assert!(IsothermScan::default().scan(&params, &[-1.0, 0.0], 0.0).is_empty());
    }
}
