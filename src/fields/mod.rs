//! Scalar field samplers over planar grids.

mod harmonic;

pub use harmonic::{discrete_laplacian, log_radius, sample_log_radius, HarmonicField};
