use tracing::debug;

use crate::core::{PairBitset, Vec2};
use crate::domain::{BodyStore, SimulationConfig};
use crate::spatial::SpatialGrid;
use crate::systems::BroadPhaseStats;

use super::diagnostics::{Diagnostics, DiagnosticsWindow};
use super::perf_stats::PerfStats;
use super::SimulationWorld;

/// Build a world from an already validated config.
pub(super) fn create_world(config: SimulationConfig) -> SimulationWorld {
    let store = BodyStore::new(config.capacity);
    let grid = SpatialGrid::new(config.grid_width, config.grid_height, config.cell_size);

    debug!(
        capacity = config.capacity,
        grid_width = config.grid_width,
        grid_height = config.grid_height,
        cell_size = config.cell_size,
        sub_step_hz = config.sub_step_hz,
        "simulation world created"
    );

    SimulationWorld {
        bounds: Vec2::new(config.world_width, config.world_height),
        sub_step_dt: config.sub_step(),
        store,
        grid,
        seen_pairs: PairBitset::new(),
        config,

        accumulator: 0.0,
        sub_steps: 0,
        last_step_stats: BroadPhaseStats::default(),
        spawner: None,

        perf_enabled: false,
        perf_stats: PerfStats::default(),
        window: DiagnosticsWindow::default(),
        diagnostics: Diagnostics::default(),

        // One [x, y, w, h] per body; grows on demand
        rect_buffer: Vec::new(),
    }
}
