use wasm_bindgen::prelude::*;

/// Perf snapshot of the last `advance` call. Timings and counters cover every
/// sub-step that call ran; all zeros while perf metrics are disabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) advance_ms: f64,
    pub(super) grid_ms: f64,
    pub(super) broad_phase_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) sub_steps: u32,
    pub(super) grid_nodes: u32,
    pub(super) node_capacity: u32,
    pub(super) node_grows: u32,
    pub(super) pairs_tested: u32,
    pub(super) pairs_skipped: u32,
    pub(super) contacts_resolved: u32,
    pub(super) wall_clamps: u32,
    pub(super) max_occupancy: u32,
    pub(super) body_count: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn advance_ms(&self) -> f64 { self.advance_ms }
    #[wasm_bindgen(getter)]
    pub fn grid_ms(&self) -> f64 { self.grid_ms }
    #[wasm_bindgen(getter)]
    pub fn broad_phase_ms(&self) -> f64 { self.broad_phase_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn sub_steps(&self) -> u32 { self.sub_steps }
    #[wasm_bindgen(getter)]
    pub fn grid_nodes(&self) -> u32 { self.grid_nodes }
    #[wasm_bindgen(getter)]
    pub fn node_capacity(&self) -> u32 { self.node_capacity }
    /// Node pool reallocations since the world was created
    #[wasm_bindgen(getter)]
    pub fn node_grows(&self) -> u32 { self.node_grows }
    #[wasm_bindgen(getter)]
    pub fn pairs_tested(&self) -> u32 { self.pairs_tested }
    #[wasm_bindgen(getter)]
    pub fn pairs_skipped(&self) -> u32 { self.pairs_skipped }
    #[wasm_bindgen(getter)]
    pub fn contacts_resolved(&self) -> u32 { self.contacts_resolved }
    #[wasm_bindgen(getter)]
    pub fn wall_clamps(&self) -> u32 { self.wall_clamps }
    #[wasm_bindgen(getter)]
    pub fn max_occupancy(&self) -> u32 { self.max_occupancy }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
}
