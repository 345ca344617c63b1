//! Surface-area estimation from a sampled coordinate grid.
//!
//! The tangent vectors `T_u` and `T_v` are recovered with finite differences
//! over the grid. The norm of `T_u × T_v` is the local area-scaling factor
//! (Jacobian magnitude) of the parametrization. Summing it over all nodes and
//! scaling by `du·dv` gives a Riemann-sum estimate of `∫∫ |T_u × T_v| du dv`.

use super::core::Vec3;
use super::sampler::{CoordinateGrid, Grid2, ParameterGrid};

/// First partial derivatives of `x`, `y`, `z` at every grid node.
#[derive(Debug, Clone, PartialEq)]
pub struct TangentField {
    pub xu: Grid2,
    pub yu: Grid2,
    pub zu: Grid2,
    pub xv: Grid2,
    pub yv: Grid2,
    pub zv: Grid2,
}

impl TangentField {
    #[must_use]
    pub fn tangent_u(&self, i: usize, j: usize) -> Vec3 {
        Vec3::new(self.xu.get(i, j), self.yu.get(i, j), self.zu.get(i, j))
    }

    #[must_use]
    pub fn tangent_v(&self, i: usize, j: usize) -> Vec3 {
        Vec3::new(self.xv.get(i, j), self.yv.get(i, j), self.zv.get(i, j))
    }
}

/// Derivative of `sample` at index `k` of a uniformly spaced sequence.
///
/// Centered difference in the interior, second-order one-sided differences at
/// both ends. Two samples only admit the first-order forward difference.
fn difference_at(count: usize, step: f64, k: usize, sample: impl Fn(usize) -> f64) -> f64 {
    match count {
        0 | 1 => 0.0,
        2 => (sample(1) - sample(0)) / step,
        _ if k == 0 => (-3.0 * sample(0) + 4.0 * sample(1) - sample(2)) / (2.0 * step),
        _ if k == count - 1 => {
            (3.0 * sample(k) - 4.0 * sample(k - 1) + sample(k - 2)) / (2.0 * step)
        }
        _ => (sample(k + 1) - sample(k - 1)) / (2.0 * step),
    }
}

/// Derivative along the columns (axis 1), i.e. with respect to `u`.
#[must_use]
pub fn gradient_along_cols(grid: &Grid2, step: f64) -> Grid2 {
    let cols = grid.cols();
    Grid2::from_fn(grid.rows(), cols, |i, j| {
        difference_at(cols, step, j, |k| grid.get(i, k))
    })
}

/// Derivative along the rows (axis 0), i.e. with respect to `v`.
#[must_use]
pub fn gradient_along_rows(grid: &Grid2, step: f64) -> Grid2 {
    let rows = grid.rows();
    Grid2::from_fn(rows, grid.cols(), |i, j| {
        difference_at(rows, step, i, |k| grid.get(k, j))
    })
}

#[must_use]
pub fn partial_derivatives(grid: &ParameterGrid, coords: &CoordinateGrid) -> TangentField {
    let (du, dv) = (grid.u_step, grid.v_step);
    TangentField {
        xu: gradient_along_cols(&coords.x, du),
        yu: gradient_along_cols(&coords.y, du),
        zu: gradient_along_cols(&coords.z, du),
        xv: gradient_along_rows(&coords.x, dv),
        yv: gradient_along_rows(&coords.y, dv),
        zv: gradient_along_rows(&coords.z, dv),
    }
}

/// `(T_u, T_v)` at node `(i, j)`, using the same stencils as [`partial_derivatives`].
#[must_use]
pub fn tangents_at(
    grid: &ParameterGrid,
    coords: &CoordinateGrid,
    i: usize,
    j: usize,
) -> (Vec3, Vec3) {
    let (rows, cols) = coords.shape();
    let along_u = |field: &Grid2| difference_at(cols, grid.u_step, j, |k| field.get(i, k));
    let along_v = |field: &Grid2| difference_at(rows, grid.v_step, i, |k| field.get(k, j));
    (
        Vec3::new(along_u(&coords.x), along_u(&coords.y), along_u(&coords.z)),
        Vec3::new(along_v(&coords.x), along_v(&coords.y), along_v(&coords.z)),
    )
}

/// `|T_u × T_v|` at every grid node.
///
/// Tangents are evaluated per node and not stored, so the only extra
/// allocation is the returned field.
#[must_use]
pub fn jacobian_field(grid: &ParameterGrid, coords: &CoordinateGrid) -> Grid2 {
    let (rows, cols) = coords.shape();
    Grid2::from_fn(rows, cols, |i, j| {
        let (t_u, t_v) = tangents_at(grid, coords, i, j);
        t_u.cross(t_v).length()
    })
}

/// Estimates the surface area as `Σ |T_u × T_v| · du · dv` over all `n × n` nodes.
#[must_use]
pub fn estimate_surface_area(grid: &ParameterGrid, coords: &CoordinateGrid) -> f64 {
    let cell = (grid.u_step * grid.v_step).abs();
    let area = jacobian_field(grid, coords).sum() * cell;
    log::debug!(
        "surface area estimate {area} from {}x{} nodes",
        coords.x.rows(),
        coords.x.cols()
    );
    area
}
