//! Convenience re-exports for building the demonstration panels.

pub use crate::config::{ConfigError, InputRange, LabConfig};
pub use crate::constants::*;
pub use crate::errors::EmComplexError;
pub use crate::fields::{discrete_laplacian, log_radius, sample_log_radius, HarmonicField};
pub use crate::grid::{Grid2D, GridError};
pub use crate::mapping::{map_grid, square_grid, ConformalMap, MappedGrid, Square};
pub use crate::math::{phasor, polar, rotate, CScalar, Scalar, ScalarField};
pub use crate::phasor::{build_phasors, Arrow, Phasor, PhasorDiagram};
pub use crate::residue::{
    reference_residue_series, residue_integrand, sample_residue_integrand, RationalIntegrand,
    ResidueError,
};
pub use crate::sampling::{linspace, LineSeries};
pub use crate::transforms::{
    clarke, clarke_park, inverse_clarke, inverse_park, park, RotatingFrameCurrents,
    ThreePhaseCurrents, TwoAxisCurrents,
};
pub use crate::workbench::{InputChange, LabInputs, LabOutputs, Panel, Workbench};
