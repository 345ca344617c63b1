#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod geom;

use std::fmt;

use geom::{
    BoundaryCurve, BoundarySide, GeomMesh, ShapeParameters, StripMeasurements, boundary_curve,
    build_grid, estimate_edge_length, estimate_surface_area, mesh_from_grid,
};
use serde::Serialize;
use wasm_bindgen::JsError;
use wasm_bindgen::prelude::*;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "console_error_panic_hook", target_arch = "wasm32"))] {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            console_error_panic_hook::set_once();
            init_logger();
        }
    } else {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            // no-op fallback when panic hook is disabled
            init_logger();
        }
    }
}

#[cfg(feature = "debug_logs")]
fn init_logger() {
    use log::LevelFilter;
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;
    if log::set_logger(&DEFAULT_LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
}

#[cfg(not(feature = "debug_logs"))]
fn init_logger() {
    // no-op fallback when debug logs are disabled
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "type")]
enum GeometryItem<'a> {
    Polyline {
        points: Vec<[f64; 3]>,
    },
    Mesh {
        vertices: &'a [[f64; 3]],
        faces: &'a [Vec<u32>],
    },
}

#[derive(Debug, Serialize)]
struct GeometryExport<'a> {
    surface_area: f64,
    edge_length: f64,
    items: Vec<GeometryItem<'a>>,
}

/// Everything derived from one set of [`ShapeParameters`].
#[derive(Debug)]
struct StripState {
    measurements: StripMeasurements,
    mesh: GeomMesh,
    faces: Vec<Vec<u32>>,
    boundaries: Vec<BoundaryCurve>,
}

impl StripState {
    fn compute(params: &ShapeParameters) -> Self {
        let (grid, coords) = build_grid(params);
        let measurements = StripMeasurements {
            surface_area: estimate_surface_area(&grid, &coords),
            edge_length: estimate_edge_length(params),
        };
        let mesh = mesh_from_grid(&grid, &coords);
        let faces = mesh.faces();
        let boundaries = BoundarySide::BOTH
            .into_iter()
            .map(|side| boundary_curve(params, side))
            .collect();

        Self {
            measurements,
            mesh,
            faces,
            boundaries,
        }
    }

    fn geometry_items(&self) -> Vec<GeometryItem<'_>> {
        let mut items = Vec::with_capacity(1 + self.boundaries.len());
        items.push(GeometryItem::Mesh {
            vertices: &self.mesh.positions,
            faces: &self.faces,
        });
        for curve in &self.boundaries {
            items.push(GeometryItem::Polyline {
                points: curve.points.iter().map(|p| p.to_array()).collect(),
            });
        }
        items
    }
}

/// Public entry point for consumers.
///
/// Holds the current shape and recomputes the measurements and render data
/// lazily after every parameter change. No display state lives here; the
/// host renders the exported geometry.
#[wasm_bindgen]
pub struct MobiusEngine {
    params: ShapeParameters,
    state: Option<StripState>,
}

#[wasm_bindgen]
impl MobiusEngine {
    #[wasm_bindgen(constructor)]
    pub fn new(radius: f64, width: f64, resolution: usize) -> Result<MobiusEngine, JsValue> {
        let params = ShapeParameters::new(radius, width, resolution).map_err(to_js_error)?;
        Ok(Self::with_parameters(params))
    }

    /// Build an engine from a `{ radius, width, resolution }` object.
    #[wasm_bindgen]
    pub fn from_config(config: JsValue) -> Result<MobiusEngine, JsValue> {
        let params: ShapeParameters = serde_wasm_bindgen::from_value(config)
            .map_err(|err| JsError::new(&err.to_string()))?;
        Ok(Self::with_parameters(params))
    }

    /// Replace the shape; invalid values leave the current shape untouched.
    #[wasm_bindgen]
    pub fn set_parameters(
        &mut self,
        radius: f64,
        width: f64,
        resolution: usize,
    ) -> Result<(), JsValue> {
        let params = ShapeParameters::new(radius, width, resolution).map_err(to_js_error)?;
        self.update(params);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn surface_area(&mut self) -> f64 {
        self.measurements().surface_area
    }

    #[wasm_bindgen]
    pub fn edge_length(&mut self) -> f64 {
        self.measurements().edge_length
    }

    #[wasm_bindgen]
    pub fn get_parameters(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.params).map_err(|err| JsError::new(&err.to_string()).into())
    }

    /// Mesh of the strip plus both boundary polylines, serialized for the renderer.
    #[wasm_bindgen]
    pub fn get_geometry(&mut self) -> Result<JsValue, JsValue> {
        let state = self.state();
        let export = GeometryExport {
            surface_area: state.measurements.surface_area,
            edge_length: state.measurements.edge_length,
            items: state.geometry_items(),
        };
        serde_wasm_bindgen::to_value(&export).map_err(|err| JsError::new(&err.to_string()).into())
    }
}

impl MobiusEngine {
    #[must_use]
    pub fn with_parameters(params: ShapeParameters) -> Self {
        Self {
            params,
            state: None,
        }
    }

    #[must_use]
    pub fn parameters(&self) -> &ShapeParameters {
        &self.params
    }

    pub fn update(&mut self, params: ShapeParameters) {
        if params != self.params {
            log::debug!("shape parameters changed, invalidating cached strip");
            self.params = params;
            self.state = None;
        }
    }

    pub fn measurements(&mut self) -> StripMeasurements {
        self.state().measurements
    }

    /// Triangle mesh of the current shape.
    pub fn mesh(&mut self) -> &GeomMesh {
        &self.state().mesh
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.state.is_none()
    }

    fn state(&mut self) -> &StripState {
        let params = self.params;
        self.state.get_or_insert_with(|| StripState::compute(&params))
    }
}

fn to_js_error<E: fmt::Display>(error: E) -> JsValue {
    js_error(&error.to_string())
}

fn js_error(message: &str) -> JsValue {
    #[cfg(target_arch = "wasm32")]
    {
        JsError::new(message).into()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        JsValue::NULL
    }
}
