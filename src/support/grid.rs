//! Uniform sampling grids.
//!
//! [`linspace`] follows the NumPy convention: `n` samples, both endpoints
//! included. [`Mesh`] pairs two such axes for surface sampling.

use crate::support::constraint::{Constrained, NonZero};

/// Number of samples along a grid axis.
pub type SampleCount = Constrained<usize, NonZero>;

/// Returns `n` evenly spaced samples over `[start, stop]`.
///
/// A single sample yields `[start]`. The last sample is exactly `stop`.
///
/// ```
/// use lqg_thermo::support::{constraint::NonZero, grid::linspace};
///
/// let r = linspace(2.0, 10.0, NonZero::new(5).unwrap());
/// assert_eq!(r, vec![2.0, 4.0, 6.0, 8.0, 10.0]);
/// ```
#[must_use]
pub fn linspace(start: f64, stop: f64, n: SampleCount) -> Vec<f64> {
    let n = n.into_inner();
    if n == 1 {
        return vec![start];
    }

    #[allow(clippy::cast_precision_loss)]
    let step = (stop - start) / (n - 1) as f64;

    let mut samples: Vec<f64> = (0..n)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let i = i as f64;
            start + i * step
        })
        .collect();
    samples[n - 1] = stop;
    samples
}

/// A rectangular grid over two axes, stored row-major.
///
/// Rows run along `second` and columns along `first`, matching the layout of
/// `meshgrid(first, second)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    first: Vec<f64>,
    second: Vec<f64>,
}

impl Mesh {
    #[must_use]
    pub fn new(first: Vec<f64>, second: Vec<f64>) -> Self {
        Self { first, second }
    }

    /// Evaluates `f` at every node, returning row-major values.
    pub fn map<T>(&self, mut f: impl FnMut(f64, f64) -> T) -> Vec<Vec<T>> {
        self.second
            .iter()
            .map(|&b| self.first.iter().map(|&a| f(a, b)).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn count(n: usize) -> SampleCount {
        NonZero::new(n).unwrap()
    }

    #[test]
    fn endpoints_and_spacing() {
        let r = linspace(2.0, 10.0, count(1000));
        assert_eq!(r.len(), 1000);
        assert_eq!(r[0], 2.0);
        assert_eq!(r[999], 10.0);
        assert_relative_eq!(r[1] - r[0], 8.0 / 999.0, epsilon = 1e-12);
    }

    #[test]
    fn decreasing_range() {
        let l = linspace(0.0, -2.0, count(3));
        assert_eq!(l, vec![0.0, -1.0, -2.0]);
    }

    #[test]
    fn single_sample() {
        assert_eq!(linspace(1.5, 12.0, count(1)), vec![1.5]);
    }

    #[test]
    fn mesh_layout() {
        let mesh = Mesh::new(vec![1.0, 2.0, 3.0], vec![10.0, 20.0]);
        let sums = mesh.map(|a, b| a + b);
        assert_eq!(sums, vec![vec![11.0, 12.0, 13.0], vec![21.0, 22.0, 23.0]]);

        let mut visited = Vec::new();
        mesh.map(|a, b| visited.push((a, b)));
        assert_eq!(visited[..4], [(1.0, 10.0), (2.0, 10.0), (3.0, 10.0), (1.0, 20.0)]);
    }
}
