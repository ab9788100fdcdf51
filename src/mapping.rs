//! Conformal maps applied point-wise to sampling grids.

use nalgebra::DMatrix;
use tracing::debug;

use crate::grid::{Grid2D, GridError};
use crate::math::{CScalar, Scalar, ScalarField};

/// Trait implemented by analytic maps of the complex plane.
pub trait ConformalMap {
    /// Image of `z`.
    fn map(&self, z: CScalar) -> CScalar;

    /// Short formula used as a plot caption (e.g. `w = z^2`).
    fn label(&self) -> &str;
}

/// `w = z²`: doubles angles and squares radii.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Square;

impl ConformalMap for Square {
    fn map(&self, z: CScalar) -> CScalar {
        z * z
    }

    fn label(&self) -> &str {
        "w = z^2"
    }
}

/// Image of every grid point, stored as real and imaginary arrays for scatter rendering.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct MappedGrid {
    /// Source grid.
    pub grid: Grid2D,
    /// `Re(w)` per grid cell.
    pub re: ScalarField,
    /// `Im(w)` per grid cell.
    pub im: ScalarField,
}

impl MappedGrid {
    /// Flattened `(Re w, Im w)` pairs in column-major order.
    pub fn points(&self) -> impl Iterator<Item = (Scalar, Scalar)> + '_ {
        self.re.iter().copied().zip(self.im.iter().copied())
    }

    /// Number of mapped points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.re.len()
    }

    /// True when the grid holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.re.is_empty()
    }
}

/// Applies `map` to `z = x + iy` for every point of `grid`.
#[must_use]
pub fn map_grid<M>(grid: &Grid2D, map: &M) -> MappedGrid
where
    M: ConformalMap + ?Sized,
{
    debug!(resolution = grid.resolution(), map = map.label(), "mapping grid");
    let (x, y) = grid.meshgrid();
    let w: DMatrix<CScalar> = x.zip_map(&y, |x, y| map.map(CScalar::new(x, y)));
    MappedGrid { grid: *grid, re: w.map(|c| c.re), im: w.map(|c| c.im) }
}

/// Maps the `[-2, 2]²` grid at `resolution` through `w = z²`.
pub fn square_grid(resolution: usize) -> Result<MappedGrid, GridError> {
    Ok(map_grid(&Grid2D::reference(resolution)?, &Square))
}
