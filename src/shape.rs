//! Shape parameters: box size, exponent specification and sampling options.

use crate::config;
use crate::errors::ParameterError;
use crate::float_types::Real;
use serde::{Deserialize, Serialize};

/// One exponent per corner of the bounding box.
///
/// Corners are named in screen coordinates (y grows downwards), matching the
/// box the traced boundary is placed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Corners {
    pub top_left: Real,
    pub top_right: Real,
    pub bottom_right: Real,
    pub bottom_left: Real,
}

impl Corners {
    pub const fn new(top_left: Real, top_right: Real, bottom_right: Real, bottom_left: Real) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// The same exponent on every corner; traces exactly like [`Exponents::Symmetric`].
    pub const fn uniform(n: Real) -> Self {
        Self::new(n, n, n, n)
    }
}

/// How the exponent varies around the boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Exponents {
    /// A single exponent for both axes
    Symmetric(Real),
    /// Independent exponents for the horizontal and vertical axis
    Asymmetric { x: Real, y: Real },
    /// Four corner exponents blended linearly around the boundary
    PerCorner(Corners),
}

impl Exponents {
    /// Short name used in logs and on the wire.
    pub const fn kind(&self) -> &'static str {
        match self {
            Exponents::Symmetric(_) => "symmetric",
            Exponents::Asymmetric { .. } => "asymmetric",
            Exponents::PerCorner(_) => "per-corner",
        }
    }

    /// Rejects any exponent that is not a positive finite number.
    ///
    /// An exponent of zero would turn `2/n` into an infinite power, so it is
    /// refused together with negative ones.
    pub fn validate(&self) -> Result<(), ParameterError> {
        match *self {
            Exponents::Symmetric(n) => check_exponent("n", n),
            Exponents::Asymmetric { x, y } => {
                check_exponent("nx", x)?;
                check_exponent("ny", y)
            },
            Exponents::PerCorner(c) => {
                check_exponent("topLeft", c.top_left)?;
                check_exponent("topRight", c.top_right)?;
                check_exponent("bottomRight", c.bottom_right)?;
                check_exponent("bottomLeft", c.bottom_left)
            },
        }
    }
}

fn check_exponent(name: &'static str, value: Real) -> Result<(), ParameterError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ParameterError::InvalidExponent { name, value })
    }
}

fn check_dimension(name: &'static str, value: Real) -> Result<(), ParameterError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ParameterError::InvalidDimension { name, value })
    }
}

/// Everything needed to trace one boundary, apart from the sampling density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeParams {
    pub width: Real,
    pub height: Real,
    pub exponents: Exponents,
}

impl ShapeParams {
    pub const fn new(width: Real, height: Real, exponents: Exponents) -> Self {
        Self { width, height, exponents }
    }

    pub const fn symmetric(width: Real, height: Real, n: Real) -> Self {
        Self::new(width, height, Exponents::Symmetric(n))
    }

    pub const fn asymmetric(width: Real, height: Real, nx: Real, ny: Real) -> Self {
        Self::new(width, height, Exponents::Asymmetric { x: nx, y: ny })
    }

    pub const fn per_corner(width: Real, height: Real, corners: Corners) -> Self {
        Self::new(width, height, Exponents::PerCorner(corners))
    }

    /// Semi-axes `(a, b)` of the curve.
    pub fn semi_axes(&self) -> (Real, Real) {
        (self.width / 2.0, self.height / 2.0)
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        check_dimension("Width", self.width)?;
        check_dimension("Height", self.height)?;
        self.exponents.validate()
    }
}

/// Sampling density and output formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SamplingOptions {
    /// Number of angular samples over the full turn; the boundary has `steps + 1` points
    pub steps: usize,
    /// Decimal digits kept per coordinate in the path description
    pub precision: usize,
}

impl SamplingOptions {
    pub const fn new(steps: usize, precision: usize) -> Self {
        Self { steps, precision }
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        if !(1..=config::MAX_STEPS).contains(&self.steps) {
            return Err(ParameterError::InvalidSteps(self.steps as f64));
        }
        if self.precision > config::MAX_PRECISION {
            return Err(ParameterError::InvalidPrecision {
                value: self.precision as f64,
                max: config::MAX_PRECISION,
            });
        }
        Ok(())
    }

    /// Builds options from loosely typed numbers, as they arrive over the wire.
    ///
    /// Missing values fall back to [`config::default_sampling`]; present values
    /// must be non-negative integers in range.
    pub fn from_loose(steps: Option<f64>, precision: Option<f64>) -> Result<Self, ParameterError> {
        let defaults = config::default_sampling();
        let steps = match steps {
            None => defaults.steps,
            Some(s) if s.is_finite() && s.fract() == 0.0 && s >= 1.0 && s <= config::MAX_STEPS as f64 => {
                s as usize
            },
            Some(s) => return Err(ParameterError::InvalidSteps(s)),
        };
        let precision = match precision {
            None => defaults.precision,
            Some(p) if p.is_finite() && p.fract() == 0.0 && p >= 0.0 && p <= config::MAX_PRECISION as f64 => {
                p as usize
            },
            Some(p) => {
                return Err(ParameterError::InvalidPrecision {
                    value: p,
                    max: config::MAX_PRECISION,
                });
            },
        };
        Ok(Self { steps, precision })
    }
}

impl Default for SamplingOptions {
    fn default() -> Self {
        config::default_sampling()
    }
}
