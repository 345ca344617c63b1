use serde::Serialize;

use super::area::estimate_surface_area;
use super::edge::estimate_edge_length;
use super::metrics::{GeomMetrics, GeomTimingReport, TimingBucket};
use super::params::ShapeParameters;
use super::sampler::build_grid;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StripMeasurements {
    pub surface_area: f64,
    pub edge_length: f64,
}

/// Samples the strip and runs both estimators.
#[must_use]
pub fn measure(params: &ShapeParameters) -> StripMeasurements {
    measure_with_metrics(params).0
}

/// Like [`measure`], also returning per-phase timings when the `metrics`
/// feature is enabled.
#[must_use]
pub fn measure_with_metrics(
    params: &ShapeParameters,
) -> (StripMeasurements, Option<GeomTimingReport>) {
    let mut metrics = GeomMetrics::default();
    metrics.begin();

    let (grid, coords) = metrics.time(TimingBucket::Sampling, || build_grid(params));
    let surface_area = metrics.time(TimingBucket::AreaIntegration, || {
        estimate_surface_area(&grid, &coords)
    });
    let edge_length = metrics.time(TimingBucket::EdgeIntegration, || {
        estimate_edge_length(params)
    });

    log::debug!(
        "measured strip R={} w={} n={}: area={surface_area} edge={edge_length}",
        params.radius(),
        params.width(),
        params.resolution()
    );

    (
        StripMeasurements {
            surface_area,
            edge_length,
        },
        metrics.end(),
    )
}
