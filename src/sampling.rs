//! One-dimensional sampling utilities and line-plot series.

use crate::math::Scalar;

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            let mut out: Vec<Scalar> = (0..n).map(|i| start + step * i as Scalar).collect();
            // Pin the endpoint so symmetric intervals stay exactly symmetric.
            out[n - 1] = stop;
            out
        }
    }
}

/// Paired abscissa/ordinate arrays for line-plot rendering.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineSeries {
    /// Sample positions.
    pub x: Vec<Scalar>,
    /// Function values at `x`.
    pub y: Vec<Scalar>,
}

impl LineSeries {
    /// Samples `f` at `n` evenly spaced points of [start, stop].
    #[must_use]
    pub fn sample<F>(start: Scalar, stop: Scalar, n: usize, f: F) -> Self
    where
        F: FnMut(Scalar) -> Scalar,
    {
        let x = linspace(start, stop, n);
        let y = x.iter().copied().map(f).collect();
        Self { x, y }
    }

    /// Total captured samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True if no samples recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterates `(x, y)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (Scalar, Scalar)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Composite trapezoidal integral of the series.
    #[must_use]
    pub fn trapezoid(&self) -> Scalar {
        self.x
            .windows(2)
            .zip(self.y.windows(2))
            .map(|(x, y)| 0.5 * (x[1] - x[0]) * (y[0] + y[1]))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn linspace_basic() {
        let v = linspace(0.0, 1.0, 5);
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
    }

    #[test]
    fn symmetric_interval_is_mirror_symmetric() {
        let v = linspace(-5.0, 5.0, 1000);
        assert_eq!(v[0], -5.0);
        assert_eq!(v[999], 5.0);
        for (a, b) in v.iter().zip(v.iter().rev()) {
            assert_relative_eq!(*a, -*b, epsilon = 1.0e-12);
        }
    }

    #[test]
    fn trapezoid_is_exact_for_linear_functions() {
        let series = LineSeries::sample(0.0, 2.0, 11, |x| 3.0 * x + 1.0);
        assert_relative_eq!(series.trapezoid(), 8.0, epsilon = 1.0e-12);
        assert_eq!(series.points().count(), 11);
    }
}
