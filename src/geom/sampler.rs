//! Parameter-grid sampling of the Möbius strip.
//!
//! Grids follow meshgrid semantics: rows index `v`, columns index `u`, so
//! `u[i][j]` depends only on `j` and `v[i][j]` only on `i`. Every consumer in
//! this crate (area estimation, mesh export) reads the grids with that layout.

use serde::Serialize;

use super::core::Point3;
use super::params::ShapeParameters;
use super::surface::MobiusSurface;

/// Row-major `rows × cols` array of `f64`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid2 {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Grid2 {
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Builds a grid by evaluating `f(i, j)` for every row `i` and column `j`.
    #[must_use]
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.cols + j]
    }

    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.data[i * self.cols + j] = value;
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Copies the grid into nested rows, the layout most plotting hosts expect.
    #[must_use]
    pub fn to_nested(&self) -> Vec<Vec<f64>> {
        self.data
            .chunks_exact(self.cols.max(1))
            .map(<[f64]>::to_vec)
            .collect()
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }
}

/// Direction in which the u axis is swept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplingOrientation {
    /// `u` runs `0 → 2π` along the columns.
    #[default]
    Forward,
    /// `u` runs `2π → 0` along the columns.
    Reversed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterGrid {
    pub u: Grid2,
    pub v: Grid2,
    /// Signed spacing between adjacent columns; negative for reversed sampling.
    pub u_step: f64,
    pub v_step: f64,
}

impl ParameterGrid {
    #[must_use]
    pub const fn resolution(&self) -> usize {
        self.u.rows()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoordinateGrid {
    pub x: Grid2,
    pub y: Grid2,
    pub z: Grid2,
}

impl CoordinateGrid {
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        self.x.shape()
    }

    #[must_use]
    pub fn point(&self, i: usize, j: usize) -> Point3 {
        Point3::new(self.x.get(i, j), self.y.get(i, j), self.z.get(i, j))
    }

    /// Row-major positions, one per grid node.
    #[must_use]
    pub fn positions(&self) -> Vec<[f64; 3]> {
        let (rows, cols) = self.shape();
        let mut positions = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                positions.push(self.point(i, j).to_array());
            }
        }
        positions
    }
}

/// `count` evenly spaced samples over `[start, end]`, both endpoints included.
///
/// The last sample is pinned to `end` so that closed parameter ranges hit
/// their endpoint exactly.
#[must_use]
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            values[count - 1] = end;
            values
        }
    }
}

/// Samples the strip on an `n × n` parameter grid.
#[must_use]
pub fn build_grid(params: &ShapeParameters) -> (ParameterGrid, CoordinateGrid) {
    build_grid_oriented(params, SamplingOrientation::Forward)
}

/// Like [`build_grid`], with the direction of the u sweep chosen explicitly.
#[must_use]
pub fn build_grid_oriented(
    params: &ShapeParameters,
    orientation: SamplingOrientation,
) -> (ParameterGrid, CoordinateGrid) {
    let n = params.resolution();
    let surface = MobiusSurface::new(params);
    let (u0, u1) = surface.domain_u();
    let (v0, v1) = surface.domain_v();

    let (u_values, u_step) = match orientation {
        SamplingOrientation::Forward => (linspace(u0, u1, n), params.u_step()),
        SamplingOrientation::Reversed => (linspace(u1, u0, n), -params.u_step()),
    };
    let v_values = linspace(v0, v1, n);

    let u = Grid2::from_fn(n, n, |_, j| u_values[j]);
    let v = Grid2::from_fn(n, n, |i, _| v_values[i]);

    let mut x = Grid2::zeros(n, n);
    let mut y = Grid2::zeros(n, n);
    let mut z = Grid2::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            let p = surface.point_at(u.get(i, j), v.get(i, j));
            x.set(i, j, p.x);
            y.set(i, j, p.y);
            z.set(i, j, p.z);
        }
    }

    log::debug!("sampled Möbius grid {n}x{n} ({orientation:?})");

    (
        ParameterGrid {
            u,
            v,
            u_step,
            v_step: params.v_step(),
        },
        CoordinateGrid { x, y, z },
    )
}
