use crate::systems::{integrate, solve_grid};

use super::{PerfTimer, SimulationWorld};

/// One fixed sub-step: rebuild the grid, resolve contacts cell by cell,
/// integrate, then let the spawner add a body.
pub(super) fn sub_step(world: &mut SimulationWorld) {
    let perf_on = world.perf_enabled;
    let mut timer = if perf_on { Some(PerfTimer::start()) } else { None };

    // === GRID ===
    world.grid.rebuild(world.store.as_slice());
    if let Some(t) = timer.as_mut() {
        world.perf_stats.grid_ms += t.lap_ms();
    }

    // === BROAD + NARROW PHASE ===
    let seen = if world.config.dedup_pairs {
        world.seen_pairs.reset(world.store.len());
        Some(&mut world.seen_pairs)
    } else {
        None
    };
    let stats = solve_grid(
        &world.grid,
        world.store.as_mut_slice(),
        seen,
        world.config.occupancy_threshold,
    );
    if let Some(t) = timer.as_mut() {
        world.perf_stats.broad_phase_ms += t.lap_ms();
    }

    // === INTEGRATION ===
    let clamped = integrate(
        world.store.as_mut_slice(),
        world.config.gravity,
        world.sub_step_dt,
        world.bounds,
    );
    if let Some(t) = timer.as_mut() {
        world.perf_stats.integrate_ms += t.lap_ms();
    }

    world.last_step_stats = stats;
    world.window.record_sub_step(&stats);
    world.sub_steps += 1;

    if let Some(spawner) = world.spawner.as_mut() {
        spawner.tick(&mut world.store);
    }

    if perf_on {
        let perf = &mut world.perf_stats;
        perf.sub_steps += 1;
        perf.grid_nodes = world.grid.node_count() as u32;
        perf.node_capacity = world.grid.node_capacity() as u32;
        perf.node_grows = world.grid.node_grows() as u32;
        perf.pairs_tested += stats.pairs_tested;
        perf.pairs_skipped += stats.pairs_skipped;
        perf.contacts_resolved += stats.contacts_resolved;
        perf.wall_clamps += clamped;
        perf.max_occupancy = perf.max_occupancy.max(stats.max_occupancy);
        perf.body_count = world.store.len() as u32;
    }
}
