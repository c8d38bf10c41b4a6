//! Sampled curves and NaN-aware segmentation.
//!
//! Formulas in this crate return `NaN` outside their domain. A [`Series`]
//! keeps those samples so array lengths stay aligned with the grid, and
//! [`Series::segments`] splits it into the finite runs that get drawn.

/// A named sequence of `(x, y)` samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    /// Samples `f` at each `x`.
    pub fn sample(label: impl Into<String>, xs: &[f64], f: impl Fn(f64) -> f64) -> Self {
        Self {
            label: label.into(),
            points: xs.iter().map(|&x| (x, f(x))).collect(),
        }
    }

    #[must_use]
    pub fn from_points(label: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of samples where both coordinates are finite.
    #[must_use]
    pub fn finite_len(&self) -> usize {
        self.points.iter().filter(|p| is_finite(**p)).count()
    }

    /// Splits the series at non-finite samples.
    ///
    /// Order is preserved and empty runs are dropped.
    #[must_use]
    pub fn segments(&self) -> Vec<Vec<(f64, f64)>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();

        for &point in &self.points {
            if is_finite(point) {
                current.push(point);
            } else if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }

        segments
    }

    /// Finite `(min, max)` of the y values, if any.
    #[must_use]
    pub fn y_range(&self) -> Option<(f64, f64)> {
        finite_range(self.points.iter().map(|&(_, y)| y))
    }
}

/// Finite `(min, max)` over `values`, ignoring `NaN` and infinities.
pub fn finite_range(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |range, v| match range {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

fn is_finite((x, y): (f64, f64)) -> bool {
    x.is_finite() && y.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_splits_into_segments() {
        let series = Series::from_points(
            "g",
            vec![
                (0.0, f64::NAN),
                (1.0, 1.0),
                (2.0, 2.0),
                (3.0, f64::NAN),
                (4.0, f64::NAN),
                (5.0, 5.0),
            ],
        );

        let segments = series.segments();
        assert_eq!(segments, vec![vec![(1.0, 1.0), (2.0, 2.0)], vec![(5.0, 5.0)]]);
        assert_eq!(series.finite_len(), 3);
    }

    #[test]
    fn all_nan_has_no_segments() {
        let series = Series::sample("empty", &[1.0, 2.0], |_| f64::NAN);
        assert!(!series.is_empty());
        assert!(series.segments().is_empty());
        assert_eq!(series.y_range(), None);
    }

    #[test]
    fn range_ignores_non_finite() {
        let range = finite_range([3.0, f64::NAN, -1.0, f64::INFINITY, 2.0]);
        assert_eq!(range, Some((-1.0, 3.0)));
    }
}
