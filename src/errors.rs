//! Shared error types used across submodules.

use thiserror::Error;

use crate::config::ConfigError;
use crate::grid::GridError;
use crate::residue::ResidueError;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum EmComplexError {
    /// Wraps grid construction errors.
    #[error(transparent)]
    Grid(#[from] GridError),
    /// Wraps rational-integrand sampling errors.
    #[error(transparent)]
    Residue(#[from] ResidueError),
    /// Wraps configuration errors.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
