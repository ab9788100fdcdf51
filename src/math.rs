//! Shared numerical primitives anchored on `num-complex` and `nalgebra`.

use nalgebra::DMatrix;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Primary complex scalar type used for phasors and mapped points.
pub type CScalar = num_complex::Complex<Scalar>;
/// Real-valued 2-D array, one value per grid cell (rows follow y, columns follow x).
pub type ScalarField = DMatrix<Scalar>;

/// Returns the complex exponential `e^(j * theta)` using `Scalar` precision.
#[must_use]
pub fn phasor(theta: Scalar) -> CScalar {
    CScalar::from_polar(1.0, theta)
}

/// Returns `amplitude * e^(j * phase)`.
#[must_use]
pub fn polar(amplitude: Scalar, phase: Scalar) -> CScalar {
    CScalar::from_polar(amplitude, phase)
}

/// Rotates the planar vector `(x, y)` counter-clockwise by `theta`.
#[inline]
#[must_use]
pub fn rotate(x: Scalar, y: Scalar, theta: Scalar) -> (Scalar, Scalar) {
    let (s, c) = theta.sin_cos();
    (x * c - y * s, x * s + y * c)
}
