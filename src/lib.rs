//! Gridbox Engine - 2D axis-aligned box physics for native and WASM hosts
//!
//! Every sub-step rebuilds a uniform spatial grid, resolves contacts cell by
//! cell with impulses, then integrates. A fixed-timestep driver turns variable
//! frame deltas into whole sub-steps.
//!
//! Architecture:
//! - core/        - Math, node arena, pair bitset
//! - domain/      - Bodies, body store, config, errors
//! - spatial/     - Uniform grid broad-phase structure
//! - systems/     - Broad phase, collision, integration
//! - simulation/  - World orchestration, driver, scenario, WASM facade

pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Thread pool initialization for the parallel bulk resets in the browser
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Gridbox WASM engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::Vec2;
pub use domain::{Body, BodyDesc, BodyId, SimError, SimResult, SimulationConfig};
pub use simulation::{reference_walls, Diagnostics, PerfStats, SimulationWorld, Spawner, World};
pub use spatial::SpatialGrid;
pub use systems::BroadPhaseStats;
