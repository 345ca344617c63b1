use std::f64::consts::TAU;

use super::core::Point3;
use super::params::ShapeParameters;

/// The Möbius strip parametrization.
///
/// `u ∈ [0, 2π]` is the angular position around the center circle and
/// `v ∈ [-w/2, w/2]` the offset across the strip:
///
/// ```text
/// x = (R + v·cos(u/2))·cos(u)
/// y = (R + v·cos(u/2))·sin(u)
/// z = v·sin(u/2)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MobiusSurface {
    radius: f64,
    half_width: f64,
}

impl MobiusSurface {
    #[must_use]
    pub fn new(params: &ShapeParameters) -> Self {
        Self {
            radius: params.radius(),
            half_width: params.half_width(),
        }
    }

    #[must_use]
    pub fn point_at(&self, u: f64, v: f64) -> Point3 {
        let (sin_half, cos_half) = (u * 0.5).sin_cos();
        let (sin_u, cos_u) = u.sin_cos();
        let ring = self.radius + v * cos_half;
        Point3::new(ring * cos_u, ring * sin_u, v * sin_half)
    }

    #[must_use]
    pub const fn domain_u(&self) -> (f64, f64) {
        (0.0, TAU)
    }

    #[must_use]
    pub fn domain_v(&self) -> (f64, f64) {
        (-self.half_width, self.half_width)
    }
}
