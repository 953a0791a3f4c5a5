//! Superellipse boundary tracing.
//!
//! **Mathematical Foundation: Parametric Superellipse Discretization**
//!
//! For semi-axes `a = width/2`, `b = height/2` and exponents `nx`, `ny`:
//! ```text
//! x(t) = a · sgn(cos t) · |cos t|^(2/nx) + a
//! y(t) = b · sgn(sin t) · |sin t|^(2/ny) + b
//! where t ∈ [0, 2π]
//! ```
//! The `+a`, `+b` offset places the curve in the `[0, width] × [0, height]`
//! box with the origin at the top-left corner, y growing downwards.
//!
//! `n = 2` is an ellipse, larger `n` approaches the bounding rectangle and
//! values below `2` pinch towards a diamond/astroid.
//!
//! Samples are taken at `tᵢ = 2πi/steps` for `i ∈ {0, …, steps}`, so the last
//! sample coincides with the first and the contour is closed.

use crate::config;
use crate::errors::ParameterError;
use crate::float_types::{FRAC_PI_2, PI, Real, TAU};
use crate::path::Boundary;
use crate::shape::{Corners, Exponents, SamplingOptions, ShapeParams};
use nalgebra::Point2;

/// Sign with `sign(0) = 0`, unlike [`Real::signum`] which returns `±1` for zeros.
#[inline]
fn sign(value: Real) -> Real {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// `sgn(v) · |v|^(2/n)`, the sign-preserving fractional power.
///
/// `v` may be exactly zero on the axes; `0^p` is `0` for any positive finite
/// `p`, so this never produces NaN as long as `n` is positive and finite.
#[inline]
fn signed_power(value: Real, n: Real) -> Real {
    sign(value) * value.abs().powf(2.0 / n)
}

#[inline]
fn point_from_direction(a: Real, b: Real, cos: Real, sin: Real, nx: Real, ny: Real) -> Point2<Real> {
    Point2::new(a * signed_power(cos, nx) + a, b * signed_power(sin, ny) + b)
}

/// One point of the boundary at angle `t`, already offset into the box.
#[inline]
pub fn superellipse_point(a: Real, b: Real, t: Real, nx: Real, ny: Real) -> Point2<Real> {
    let (sin, cos) = t.sin_cos();
    point_from_direction(a, b, cos, sin, nx, ny)
}

/// `(cos tᵢ, sin tᵢ)` for sample `i` of `steps`.
///
/// Samples that land on a quarter turn get exact axis directions. `sin(π)` is
/// about `1e-16` in floating point, and `|1e-16|^(2/n)` is far from zero for
/// large `n`, which would pull axis points visibly off the box and leave the
/// last point apart from the first.
fn sample_direction(i: usize, steps: usize) -> (Real, Real) {
    if (4 * i) % steps == 0 {
        match (4 * i / steps) % 4 {
            0 => (1.0, 0.0),
            1 => (0.0, 1.0),
            2 => (-1.0, 0.0),
            _ => (0.0, -1.0),
        }
    } else {
        let (sin, cos) = sample_angle(i, steps).sin_cos();
        (cos, sin)
    }
}

#[inline]
fn sample_angle(i: usize, steps: usize) -> Real {
    (i as Real / steps as Real) * TAU
}

/// Local exponent of a per-corner shape at angle `t`.
///
/// Each quarter turn blends linearly between two neighbouring corners:
///
/// | `t`            | from           | to             |
/// |----------------|----------------|----------------|
/// | `[0, π/2)`     | top-right      | bottom-right   |
/// | `[π/2, π)`     | bottom-right   | bottom-left    |
/// | `[π, 3π/2)`    | bottom-left    | top-left       |
/// | `[3π/2, 2π]`   | top-left       | top-right      |
///
/// The factor is exactly `0` at the start of each quarter, so the exponent
/// there is exactly the stored corner value.
pub fn corner_exponent(corners: &Corners, t: Real) -> Real {
    let (start, end, offset) = if t < FRAC_PI_2 {
        (corners.top_right, corners.bottom_right, 0.0)
    } else if t < PI {
        (corners.bottom_right, corners.bottom_left, FRAC_PI_2)
    } else if t < 3.0 * FRAC_PI_2 {
        (corners.bottom_left, corners.top_left, PI)
    } else {
        (corners.top_left, corners.top_right, 3.0 * FRAC_PI_2)
    };
    let factor = (t - offset) / FRAC_PI_2;
    start * (1.0 - factor) + end * factor
}

impl Exponents {
    /// Exponents `(nx, ny)` in effect at angle `t`.
    #[inline]
    pub fn at(&self, t: Real) -> (Real, Real) {
        match self {
            Exponents::Symmetric(n) => (*n, *n),
            Exponents::Asymmetric { x, y } => (*x, *y),
            Exponents::PerCorner(corners) => {
                let n = corner_exponent(corners, t);
                (n, n)
            },
        }
    }
}

impl ShapeParams {
    /// Traces the boundary with `steps` angular samples.
    ///
    /// Parameters are validated up front; on success the boundary holds
    /// `steps + 1` points whose first and last coincide.
    pub fn trace(&self, steps: usize) -> Result<Boundary, ParameterError> {
        self.validate()?;
        if !(1..=config::MAX_STEPS).contains(&steps) {
            return Err(ParameterError::InvalidSteps(steps as f64));
        }

        let (a, b) = self.semi_axes();
        let points = (0..=steps)
            .map(|i| {
                let (nx, ny) = self.exponents.at(sample_angle(i, steps));
                let (cos, sin) = sample_direction(i, steps);
                point_from_direction(a, b, cos, sin, nx, ny)
            })
            .collect();

        Ok(Boundary::new(points, self.width, self.height))
    }

    /// Traces and formats in one go.
    pub fn path_description(&self, options: &SamplingOptions) -> Result<String, ParameterError> {
        options.validate()?;
        Ok(self.trace(options.steps)?.to_path_description(options.precision))
    }
}

/// Path description of a superellipse with one exponent `n` on both axes.
pub fn generate_symmetric(
    width: Real,
    height: Real,
    n: Real,
    steps: usize,
    precision: usize,
) -> Result<String, ParameterError> {
    ShapeParams::symmetric(width, height, n)
        .path_description(&SamplingOptions::new(steps, precision))
}

/// Path description of a superellipse with exponent `nx` on x and `ny` on y.
pub fn generate_asymmetric(
    width: Real,
    height: Real,
    nx: Real,
    ny: Real,
    steps: usize,
    precision: usize,
) -> Result<String, ParameterError> {
    ShapeParams::asymmetric(width, height, nx, ny)
        .path_description(&SamplingOptions::new(steps, precision))
}

/// Path description of a superellipse whose exponent blends between four corners.
/// See [`corner_exponent`] for the blending.
pub fn generate_per_corner(
    width: Real,
    height: Real,
    corners: Corners,
    steps: usize,
    precision: usize,
) -> Result<String, ParameterError> {
    ShapeParams::per_corner(width, height, corners)
        .path_description(&SamplingOptions::new(steps, precision))
}
