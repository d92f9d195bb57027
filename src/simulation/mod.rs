//! SimulationWorld - owns every piece of physics state and drives sub-steps.
//!
//! One sub-step is: rebuild the spatial grid, walk it (narrow phase + impulse
//! response), integrate. `advance` feeds a variable frame delta into a fixed
//! timestep accumulator and runs as many sub-steps as fit.
//!
//! No globals: every world is independent, so tests and multiple simulations
//! can live side by side.

use crate::core::{PairBitset, Vec2};
use crate::domain::{Body, BodyDesc, BodyId, BodyStore, SimResult, SimulationConfig};
use crate::spatial::SpatialGrid;
use crate::systems::BroadPhaseStats;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "perf/diagnostics.rs"]
mod diagnostics;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "step/driver.rs"]
mod driver;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "scenario/scenario.rs"]
mod scenario;
mod facade;

pub use diagnostics::Diagnostics;
pub use facade::World;
pub use perf_stats::PerfStats;
pub use scenario::{reference_walls, Spawner};

use diagnostics::DiagnosticsWindow;
use perf_timer::PerfTimer;

/// The simulation world
pub struct SimulationWorld {
    config: SimulationConfig,
    store: BodyStore,
    grid: SpatialGrid,
    seen_pairs: PairBitset,

    // Derived from config
    bounds: Vec2,
    sub_step_dt: f32,

    // Driver state
    accumulator: f64,
    sub_steps: u64,
    last_step_stats: BroadPhaseStats,
    spawner: Option<Spawner>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
    window: DiagnosticsWindow,
    diagnostics: Diagnostics,

    rect_buffer: Vec<f32>,
}

impl SimulationWorld {
    /// Create a world from a validated config.
    pub fn new(config: SimulationConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(init::create_world(config))
    }

    /// World with the reference configuration (800x600, 2048 bodies, 480 Hz).
    pub fn with_defaults() -> Self {
        init::create_world(SimulationConfig::default())
    }

    pub fn from_config_json(json: &str) -> SimResult<Self> {
        Self::new(SimulationConfig::from_json(json)?)
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    // === BODY API ===

    /// Add a body. `None` once the store is full (or the body is invalid); the
    /// world is left unchanged in that case.
    pub fn add_body(&mut self, desc: BodyDesc) -> Option<BodyId> {
        commands::add_body(self, desc)
    }

    /// Add a body, reporting why it was refused.
    pub fn try_add_body(&mut self, desc: BodyDesc) -> SimResult<BodyId> {
        commands::try_add_body(self, desc)
    }

    /// Queue an acceleration for the next sub-step only.
    pub fn apply_acceleration(&mut self, id: BodyId, accel: Vec2) -> bool {
        commands::apply_acceleration(self, id, accel)
    }

    pub fn apply_impulse(&mut self, id: BodyId, impulse: Vec2) -> bool {
        commands::apply_impulse(self, id, impulse)
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.store.get(id)
    }

    pub fn bodies(&self) -> &[Body] {
        self.store.as_slice()
    }

    pub fn body_count(&self) -> usize {
        self.store.len()
    }

    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    // === SCENARIO ===

    /// Add the reference walls and floors. Returns how many were added.
    pub fn load_reference_scenario(&mut self) -> usize {
        scenario::load_reference_walls(self)
    }

    /// Install (or remove) the periodic body spawner.
    pub fn set_spawner(&mut self, spawner: Option<Spawner>) {
        self.spawner = spawner;
    }

    pub fn spawner(&self) -> Option<&Spawner> {
        self.spawner.as_ref()
    }

    // === STEPPING ===

    /// Feed a frame delta (seconds) into the accumulator and run every whole
    /// sub-step it covers. Returns the number of sub-steps run.
    pub fn advance(&mut self, frame_delta: f64) -> u32 {
        driver::advance(self, frame_delta)
    }

    /// Run exactly one sub-step, bypassing the accumulator.
    pub fn step(&mut self) {
        step::sub_step(self);
    }

    /// Run `n` sub-steps back to back.
    pub fn run_sub_steps(&mut self, n: u32) {
        for _ in 0..n {
            step::sub_step(self);
        }
    }

    /// Unconsumed time left in the accumulator, in seconds.
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Total sub-steps run since creation.
    pub fn sub_step_count(&self) -> u64 {
        self.sub_steps
    }

    /// Fixed sub-step duration in seconds.
    pub fn sub_step_dt(&self) -> f32 {
        self.sub_step_dt
    }

    /// Grid as built by the last sub-step.
    pub fn grid(&self) -> &SpatialGrid {
        &self.grid
    }

    /// Broad-phase counters of the last sub-step.
    pub fn last_step_stats(&self) -> BroadPhaseStats {
        self.last_step_stats
    }

    // === SETTINGS ===

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        settings::set_gravity(self, x, y);
    }

    pub fn gravity(&self) -> Vec2 {
        self.config.gravity
    }

    pub fn set_dedup_pairs(&mut self, enabled: bool) {
        settings::set_dedup_pairs(self, enabled);
    }

    /// Enable or disable per-advance perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last advance perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Last completed one-second diagnostics window.
    pub fn diagnostics(&self) -> Diagnostics {
        self.diagnostics.clone()
    }

    // === RENDER ===

    /// Flat `[x, y, w, h]` top-left rectangles, one per body, in id order.
    pub fn body_rects(&mut self) -> &[f32] {
        render_extract::extract_body_rects(self)
    }
}

impl Default for SimulationWorld {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
