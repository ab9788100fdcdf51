use tracing::{debug, trace};

use crate::constants::{HARMONIC_REFERENCE_RESOLUTION, LOG_RADIUS_EPSILON};
use crate::grid::{Grid2D, GridError};
use crate::math::{Scalar, ScalarField};

/// `ln(sqrt(x² + y²) + ε)`, the logarithmic potential with the origin guarded.
#[inline]
#[must_use]
pub fn log_radius(x: Scalar, y: Scalar) -> Scalar {
    (x.hypot(y) + LOG_RADIUS_EPSILON).ln()
}

/// Logarithmic potential sampled on a grid, with the coordinate arrays for surface rendering.
///
/// Built only by [`sample_log_radius`], so the three arrays always share the grid's shape.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct HarmonicField {
    grid: Grid2D,
    x: ScalarField,
    y: ScalarField,
    z: ScalarField,
}

impl HarmonicField {
    /// Field over `[-2, 2]²` at the fixed panel resolution.
    pub fn reference() -> Result<Self, GridError> {
        Ok(sample_log_radius(&Grid2D::reference(HARMONIC_REFERENCE_RESOLUTION)?))
    }

    /// Grid the field was sampled on.
    #[must_use]
    pub const fn grid(&self) -> &Grid2D {
        &self.grid
    }

    /// X coordinates.
    #[must_use]
    pub const fn x(&self) -> &ScalarField {
        &self.x
    }

    /// Y coordinates.
    #[must_use]
    pub const fn y(&self) -> &ScalarField {
        &self.y
    }

    /// Field values `ln(r + ε)`.
    #[must_use]
    pub const fn z(&self) -> &ScalarField {
        &self.z
    }

    /// Smallest and largest sampled values.
    #[must_use]
    pub fn value_range(&self) -> (Scalar, Scalar) {
        (self.z.min(), self.z.max())
    }
}

/// Samples `ln(r + ε)` on every point of `grid`.
#[must_use]
pub fn sample_log_radius(grid: &Grid2D) -> HarmonicField {
    debug!(resolution = grid.resolution(), "sampling harmonic field");
    let (x, y) = grid.meshgrid();
    let z = x.zip_map(&y, log_radius);
    trace!(min = z.min(), max = z.max(), "harmonic field sampled");
    HarmonicField { grid: *grid, x, y, z }
}

/// Five-point finite-difference Laplacian of the interior cells of `field`.
///
/// The result has shape `(rows - 2, cols - 2)` of the value array; entry `(i, j)`
/// belongs to cell `(i + 1, j + 1)`. Spacing is read off the coordinate arrays.
#[must_use]
pub fn discrete_laplacian(field: &HarmonicField) -> ScalarField {
    let z = &field.z;
    let (rows, cols) = z.shape();
    if rows < 3 || cols < 3 || field.x.shape() != z.shape() || field.y.shape() != z.shape() {
        return ScalarField::zeros(rows.saturating_sub(2), cols.saturating_sub(2));
    }
    let dx = field.x[(0, 1)] - field.x[(0, 0)];
    let dy = field.y[(1, 0)] - field.y[(0, 0)];
    ScalarField::from_fn(rows - 2, cols - 2, |i, j| {
        let (r, c) = (i + 1, j + 1);
        let d2x = (z[(r, c + 1)] - 2.0 * z[(r, c)] + z[(r, c - 1)]) / (dx * dx);
        let d2y = (z[(r + 1, c)] - 2.0 * z[(r, c)] + z[(r - 1, c)]) / (dy * dy);
        d2x + d2y
    })
}
