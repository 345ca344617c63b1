//! Shape parameters of the Möbius strip.
//!
//! [`ShapeParameters`] is the single input of every downstream computation.
//! Values are validated on construction so the sampler and both estimators
//! can assume `R > 0`, `w > 0` and `n >= 2`.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

/// Smallest grid resolution for which the step sizes `2π/(n-1)` and
/// `w/(n-1)` are defined.
pub const MIN_RESOLUTION: usize = 2;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterError {
    #[error("radius must be a finite value > 0 (got {value})")]
    InvalidRadius { value: f64 },
    #[error("width must be a finite value > 0 (got {value})")]
    InvalidWidth { value: f64 },
    #[error("resolution must be at least {min} (got {value})", min = MIN_RESOLUTION)]
    InvalidResolution { value: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawShapeParameters")]
pub struct ShapeParameters {
    radius: f64,
    width: f64,
    resolution: usize,
}

impl ShapeParameters {
    /// Creates validated parameters.
    ///
    /// # Errors
    /// Returns a [`ParameterError`] when `radius` or `width` is not a finite
    /// positive number, or when `resolution < 2`.
    pub fn new(radius: f64, width: f64, resolution: usize) -> Result<Self, ParameterError> {
        let params = Self {
            radius,
            width,
            resolution,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks the invariants `new` enforces.
    ///
    /// # Errors
    /// See [`ShapeParameters::new`].
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ParameterError::InvalidRadius { value: self.radius });
        }
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(ParameterError::InvalidWidth { value: self.width });
        }
        if self.resolution < MIN_RESOLUTION {
            return Err(ParameterError::InvalidResolution {
                value: self.resolution,
            });
        }
        Ok(())
    }

    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub const fn resolution(&self) -> usize {
        self.resolution
    }

    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.width * 0.5
    }

    /// Spacing between adjacent u samples: `2π/(n-1)`.
    #[must_use]
    pub fn u_step(&self) -> f64 {
        TAU / self.segments()
    }

    /// Spacing between adjacent v samples: `w/(n-1)`.
    #[must_use]
    pub fn v_step(&self) -> f64 {
        self.width / self.segments()
    }

    /// Returns a copy with a different resolution.
    ///
    /// # Errors
    /// Returns [`ParameterError::InvalidResolution`] when `resolution < 2`.
    pub fn with_resolution(&self, resolution: usize) -> Result<Self, ParameterError> {
        Self::new(self.radius, self.width, resolution)
    }

    fn segments(&self) -> f64 {
        self.resolution.saturating_sub(1) as f64
    }
}

/// Unchecked wire form; deserialization goes through [`ShapeParameters::new`].
#[derive(Deserialize)]
struct RawShapeParameters {
    radius: f64,
    width: f64,
    resolution: usize,
}

impl TryFrom<RawShapeParameters> for ShapeParameters {
    type Error = ParameterError;

    fn try_from(raw: RawShapeParameters) -> Result<Self, Self::Error> {
        Self::new(raw.radius, raw.width, raw.resolution)
    }
}

impl Default for ShapeParameters {
    fn default() -> Self {
        Self {
            radius: 1.0,
            width: 0.2,
            resolution: 200,
        }
    }
}
