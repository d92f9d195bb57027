use wasm_bindgen::prelude::*;

use crate::core::Vec2;
use crate::domain::BodyDesc;

use super::diagnostics::Diagnostics;
use super::perf_stats::PerfStats;
use super::{SimulationWorld, Spawner};

/// JS-facing handle around a `SimulationWorld`.
#[wasm_bindgen]
pub struct World {
    core: SimulationWorld,
}

#[wasm_bindgen]
impl World {
    /// Create a world with the reference configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: SimulationWorld::with_defaults(),
        }
    }

    /// Create a world from a camelCase JSON config; missing keys use defaults.
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: String) -> Result<World, JsValue> {
        let core = SimulationWorld::from_config_json(&json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.core.body_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn capacity(&self) -> u32 { self.core.capacity() as u32 }

    #[wasm_bindgen(getter)]
    pub fn sub_step_count(&self) -> f64 { self.core.sub_step_count() as f64 }

    #[wasm_bindgen(getter)]
    pub fn world_width(&self) -> f32 { self.core.config().world_width }

    #[wasm_bindgen(getter)]
    pub fn world_height(&self) -> f32 { self.core.config().world_height }

    /// Config currently in effect, as JSON
    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    // === BODY API ===

    /// Add a box body. Returns its id, or -1 when the store is full or the
    /// values are invalid.
    #[allow(clippy::too_many_arguments)]
    pub fn add_body(
        &mut self,
        x: f32,
        y: f32,
        half_w: f32,
        half_h: f32,
        mass: f32,
        restitution: f32,
        is_static: bool,
    ) -> i32 {
        let base = if is_static {
            BodyDesc::fixed(x, y, half_w, half_h)
        } else {
            BodyDesc::dynamic(x, y, half_w, half_h)
        };
        let desc = base.with_mass(mass).with_restitution(restitution);
        match self.core.add_body(desc) {
            Some(id) => id as i32,
            None => -1,
        }
    }

    /// Add a dynamic body with an initial velocity. Returns its id or -1.
    pub fn add_moving_body(&mut self, x: f32, y: f32, half_w: f32, half_h: f32, vx: f32, vy: f32) -> i32 {
        let desc = BodyDesc::dynamic(x, y, half_w, half_h).with_velocity(vx, vy);
        match self.core.add_body(desc) {
            Some(id) => id as i32,
            None => -1,
        }
    }

    pub fn apply_impulse(&mut self, id: u32, ix: f32, iy: f32) -> bool {
        self.core.apply_impulse(id, Vec2::new(ix, iy))
    }

    pub fn apply_acceleration(&mut self, id: u32, ax: f32, ay: f32) -> bool {
        self.core.apply_acceleration(id, Vec2::new(ax, ay))
    }

    // === SCENARIO ===

    /// Add the reference walls. Returns how many were added.
    pub fn load_reference_scenario(&mut self) -> u32 {
        self.core.load_reference_scenario() as u32
    }

    /// Start dropping boxes from the top corners
    pub fn enable_spawner(&mut self, seed: u32) {
        let hz = self.core.config().sub_step_hz;
        self.core.set_spawner(Some(Spawner::with_sub_step_hz(seed, hz)));
    }

    pub fn disable_spawner(&mut self) {
        self.core.set_spawner(None);
    }

    // === STEPPING ===

    /// Advance by a frame delta in seconds. Returns sub-steps run.
    pub fn advance(&mut self, frame_delta: f64) -> u32 {
        self.core.advance(frame_delta)
    }

    /// Run a single fixed sub-step
    pub fn step(&mut self) {
        self.core.step();
    }

    // === SETTINGS ===

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.core.set_gravity(x, y);
    }

    /// Resolve each pair once per sub-step instead of once per shared cell.
    pub fn set_dedup_pairs(&mut self, enabled: bool) {
        self.core.set_dedup_pairs(enabled);
    }

    /// Enable or disable per-advance perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last advance perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Last completed one-second diagnostics window
    pub fn get_diagnostics(&self) -> Diagnostics {
        self.core.diagnostics()
    }

    // === RENDER ===

    /// Copy of the `[x, y, w, h]` rectangles, one per body
    pub fn body_rects(&mut self) -> Vec<f32> {
        self.core.body_rects().to_vec()
    }

    /// Refresh the rect buffer and return a pointer into wasm memory
    /// (zero-copy view; length is `4 * body_count`).
    pub fn body_rects_ptr(&mut self) -> *const f32 {
        self.core.body_rects().as_ptr()
    }
}

impl World {
    /// Native access to the wrapped world.
    pub fn core(&self) -> &SimulationWorld {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut SimulationWorld {
        &mut self.core
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
