use serde::Serialize;

use super::sampler::{CoordinateGrid, ParameterGrid};
use super::triangulation::triangulate_grid;

/// Triangle-list view of a sampled strip, as consumed by renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeomMesh {
    pub positions: Vec<[f64; 3]>,
    pub indices: Vec<u32>,
    /// `(u, v)` parameters of each vertex.
    pub uvs: Option<Vec<[f64; 2]>>,
}

impl GeomMesh {
    #[must_use]
    pub fn new(positions: Vec<[f64; 3]>, indices: Vec<u32>) -> Self {
        Self {
            positions,
            indices,
            uvs: None,
        }
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if any vertex position contains NaN or Inf values.
    #[must_use]
    pub fn has_invalid_vertices(&self) -> bool {
        self.positions
            .iter()
            .any(|p| !p[0].is_finite() || !p[1].is_finite() || !p[2].is_finite())
    }

    /// Returns true if every index refers to an existing vertex.
    #[must_use]
    pub fn has_valid_indices(&self) -> bool {
        let n = self.positions.len() as u32;
        self.indices.iter().all(|&i| i < n)
    }

    #[must_use]
    pub fn has_triangle_indices(&self) -> bool {
        self.indices.len() % 3 == 0
    }

    #[must_use]
    pub fn has_valid_attribute_lengths(&self) -> bool {
        self.uvs
            .as_ref()
            .is_none_or(|uvs| uvs.len() == self.positions.len())
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.has_triangle_indices() {
            return Err("mesh indices are not a triangle list (len % 3 != 0)".to_string());
        }
        if self.has_invalid_vertices() {
            return Err("mesh has invalid vertex coordinates (NaN/Inf)".to_string());
        }
        if !self.has_valid_indices() {
            return Err("mesh has out-of-bounds vertex indices".to_string());
        }
        if !self.has_valid_attribute_lengths() {
            return Err("mesh attribute buffers do not match vertex count".to_string());
        }
        Ok(())
    }

    /// Faces as index lists, the shape the wasm geometry export uses.
    #[must_use]
    pub fn faces(&self) -> Vec<Vec<u32>> {
        self.indices.chunks_exact(3).map(<[u32]>::to_vec).collect()
    }
}

/// Builds a mesh with one vertex per grid node and two triangles per grid cell.
#[must_use]
pub fn mesh_from_grid(grid: &ParameterGrid, coords: &CoordinateGrid) -> GeomMesh {
    let (rows, cols) = coords.shape();
    let positions = coords.positions();
    let indices = triangulate_grid(cols, rows);

    let mut uvs = Vec::with_capacity(rows * cols);
    for i in 0..rows {
        for j in 0..cols {
            uvs.push([grid.u.get(i, j), grid.v.get(i, j)]);
        }
    }

    GeomMesh {
        positions,
        indices,
        uvs: Some(uvs),
    }
}
