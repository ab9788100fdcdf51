#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Numerical constants and reference domains.
pub mod constants;
/// Shared scalar, complex and array aliases.
pub mod math;
/// One-dimensional sampling and line series.
pub mod sampling;
/// Two-dimensional sampling grids.
pub mod grid;
/// AC phasor construction.
pub mod phasor;
/// Harmonic scalar fields.
pub mod fields;
/// Conformal maps of sampling grids.
pub mod mapping;
/// Clarke and Park reference-frame transforms.
pub mod transforms;
/// Rational integrands on the real axis.
pub mod residue;
/// Input ranges and defaults.
pub mod config;
/// Selective panel recomputation.
pub mod workbench;
/// Error types shared between submodules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
