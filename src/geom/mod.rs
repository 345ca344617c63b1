mod area;
mod core;
mod edge;
mod measure;
mod mesh;
mod metrics;
mod params;
mod sampler;
mod surface;
mod triangulation;

pub use area::{
    TangentField, estimate_surface_area, gradient_along_cols, gradient_along_rows,
    jacobian_field, partial_derivatives, tangents_at,
};
pub use self::core::{Point3, Vec3};
pub use edge::{BoundaryCurve, BoundarySide, boundary_curve, estimate_edge_length, polyline_length};
pub use measure::{StripMeasurements, measure, measure_with_metrics};
pub use mesh::{GeomMesh, mesh_from_grid};
pub use metrics::{GeomMetrics, GeomTimingReport, TimingBucket};
pub use params::{MIN_RESOLUTION, ParameterError, ShapeParameters};
pub use sampler::{
    CoordinateGrid, Grid2, ParameterGrid, SamplingOrientation, build_grid, build_grid_oriented,
    linspace,
};
pub use surface::MobiusSurface;
pub use triangulation::triangulate_grid;

#[cfg(test)]
mod tests;
