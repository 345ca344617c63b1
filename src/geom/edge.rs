//! Boundary-length estimation.
//!
//! The two boundary curves `v = -w/2` and `v = +w/2` are re-sampled straight
//! from the parametrization at full angular resolution instead of being
//! sliced out of the coordinate grid. Together they trace the strip's single
//! boundary loop; their lengths are summed independently.

use serde::Serialize;

use super::core::Point3;
use super::params::ShapeParameters;
use super::sampler::linspace;
use super::surface::MobiusSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BoundarySide {
    /// `v = -w/2`
    Lower,
    /// `v = +w/2`
    Upper,
}

impl BoundarySide {
    pub const BOTH: [Self; 2] = [Self::Lower, Self::Upper];

    #[must_use]
    pub fn offset(self, params: &ShapeParameters) -> f64 {
        match self {
            Self::Lower => -params.half_width(),
            Self::Upper => params.half_width(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundaryCurve {
    pub side: BoundarySide,
    pub points: Vec<Point3>,
}

impl BoundaryCurve {
    #[must_use]
    pub fn length(&self) -> f64 {
        polyline_length(&self.points)
    }
}

/// Sum of the straight segment lengths between consecutive points.
#[must_use]
pub fn polyline_length(points: &[Point3]) -> f64 {
    points
        .windows(2)
        .map(|pair| pair[1].distance_to(pair[0]))
        .fold(0.0, |acc, d| acc + d)
}

/// Samples one boundary at `n` evenly spaced `u` values over `[0, 2π]`.
#[must_use]
pub fn boundary_curve(params: &ShapeParameters, side: BoundarySide) -> BoundaryCurve {
    let surface = MobiusSurface::new(params);
    let (u0, u1) = surface.domain_u();
    let v = side.offset(params);
    let points = linspace(u0, u1, params.resolution())
        .into_iter()
        .map(|u| surface.point_at(u, v))
        .collect();
    BoundaryCurve { side, points }
}

/// Total polyline length of both boundary curves.
#[must_use]
pub fn estimate_edge_length(params: &ShapeParameters) -> f64 {
    let total: f64 = BoundarySide::BOTH
        .into_iter()
        .map(|side| boundary_curve(params, side).length())
        .sum();
    log::debug!(
        "edge length estimate {total} from 2x{} boundary samples",
        params.resolution()
    );
    total
}
