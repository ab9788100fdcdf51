//! Axis-aligned rectangular sampling domains and meshgrid construction.

use crate::constants::{MAX_GRID_RESOLUTION, MIN_GRID_RESOLUTION, REFERENCE_HALF_EXTENT};
use crate::math::{Scalar, ScalarField};
use crate::sampling::linspace;

/// Errors raised while constructing a [`Grid2D`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// Resolution outside `[MIN_GRID_RESOLUTION, MAX_GRID_RESOLUTION]`.
    #[error("grid resolution {resolution} outside [{min}, {max}]")]
    ResolutionOutOfRange {
        /// Requested resolution.
        resolution: usize,
        /// Smallest accepted value.
        min: usize,
        /// Largest accepted value.
        max: usize,
    },
    /// Axis bounds that are not finite or not strictly increasing.
    #[error("invalid {axis} bounds [{min}, {max}]")]
    InvalidBounds {
        /// Axis name (`"x"` or `"y"`).
        axis: &'static str,
        /// Lower bound supplied.
        min: Scalar,
        /// Upper bound supplied.
        max: Scalar,
    },
}

/// Regular `resolution x resolution` sampling of `[x_min, x_max] x [y_min, y_max]`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridBounds"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid2D {
    x_min: Scalar,
    x_max: Scalar,
    y_min: Scalar,
    y_max: Scalar,
    resolution: usize,
}

impl Grid2D {
    /// Creates a grid, validating bounds and resolution.
    pub fn new(
        x_min: Scalar,
        x_max: Scalar,
        y_min: Scalar,
        y_max: Scalar,
        resolution: usize,
    ) -> Result<Self, GridError> {
        if !(MIN_GRID_RESOLUTION..=MAX_GRID_RESOLUTION).contains(&resolution) {
            return Err(GridError::ResolutionOutOfRange {
                resolution,
                min: MIN_GRID_RESOLUTION,
                max: MAX_GRID_RESOLUTION,
            });
        }
        check_axis("x", x_min, x_max)?;
        check_axis("y", y_min, y_max)?;
        Ok(Self { x_min, x_max, y_min, y_max, resolution })
    }

    /// Square grid `[-half_extent, half_extent]²`.
    pub fn square(half_extent: Scalar, resolution: usize) -> Result<Self, GridError> {
        Self::new(-half_extent, half_extent, -half_extent, half_extent, resolution)
    }

    /// The `[-2, 2]²` domain shared by the field and mapping panels.
    pub fn reference(resolution: usize) -> Result<Self, GridError> {
        Self::square(REFERENCE_HALF_EXTENT, resolution)
    }

    /// Samples per axis.
    #[must_use]
    pub const fn resolution(&self) -> usize {
        self.resolution
    }

    /// `(rows, columns)` of every array produced from this grid.
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.resolution, self.resolution)
    }

    /// `(x_min, x_max)`.
    #[must_use]
    pub const fn x_bounds(&self) -> (Scalar, Scalar) {
        (self.x_min, self.x_max)
    }

    /// `(y_min, y_max)`.
    #[must_use]
    pub const fn y_bounds(&self) -> (Scalar, Scalar) {
        (self.y_min, self.y_max)
    }

    /// Spacing between neighbouring samples along x and y.
    #[must_use]
    pub fn spacing(&self) -> (Scalar, Scalar) {
        let n = (self.resolution - 1) as Scalar;
        ((self.x_max - self.x_min) / n, (self.y_max - self.y_min) / n)
    }

    /// Sample coordinates along x.
    #[must_use]
    pub fn x_axis(&self) -> Vec<Scalar> {
        linspace(self.x_min, self.x_max, self.resolution)
    }

    /// Sample coordinates along y.
    #[must_use]
    pub fn y_axis(&self) -> Vec<Scalar> {
        linspace(self.y_min, self.y_max, self.resolution)
    }

    /// Coordinate arrays `(X, Y)`; `X[(i, j)] = x[j]` and `Y[(i, j)] = y[i]`.
    #[must_use]
    pub fn meshgrid(&self) -> (ScalarField, ScalarField) {
        let xs = self.x_axis();
        let ys = self.y_axis();
        let n = self.resolution;
        let x = ScalarField::from_fn(n, n, |_, j| xs[j]);
        let y = ScalarField::from_fn(n, n, |i, _| ys[i]);
        (x, y)
    }

    /// Evaluates `f(x, y)` at every grid point.
    #[must_use]
    pub fn sample<F>(&self, mut f: F) -> ScalarField
    where
        F: FnMut(Scalar, Scalar) -> Scalar,
    {
        let xs = self.x_axis();
        let ys = self.y_axis();
        let n = self.resolution;
        ScalarField::from_fn(n, n, |i, j| f(xs[j], ys[i]))
    }
}

/// Unchecked wire form of [`Grid2D`]; deserialization goes through [`Grid2D::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridBounds {
    x_min: Scalar,
    x_max: Scalar,
    y_min: Scalar,
    y_max: Scalar,
    resolution: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<GridBounds> for Grid2D {
    type Error = GridError;

    fn try_from(b: GridBounds) -> Result<Self, Self::Error> {
        Self::new(b.x_min, b.x_max, b.y_min, b.y_max, b.resolution)
    }
}

fn check_axis(axis: &'static str, min: Scalar, max: Scalar) -> Result<(), GridError> {
    if min.is_finite() && max.is_finite() && min < max {
        Ok(())
    } else {
        Err(GridError::InvalidBounds { axis, min, max })
    }
}
