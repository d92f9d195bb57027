use tracing::debug;

use crate::core::Vec2;

use super::perf_stats::PerfStats;
use super::SimulationWorld;

pub(super) fn set_gravity(world: &mut SimulationWorld, x: f32, y: f32) {
    world.config.gravity = Vec2::new(x, y);
}

pub(super) fn set_dedup_pairs(world: &mut SimulationWorld, enabled: bool) {
    if world.config.dedup_pairs != enabled {
        debug!(enabled, "pair dedup toggled");
    }
    world.config.dedup_pairs = enabled;
}

pub(super) fn enable_perf_metrics(world: &mut SimulationWorld, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &SimulationWorld) -> PerfStats {
    world.perf_stats.clone()
}
