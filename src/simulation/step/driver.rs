use super::step::sub_step;
use super::{PerfTimer, SimulationWorld};

/// Clamp a raw frame delta to `[0, max]`. Non-finite or negative input counts
/// as no time passing.
#[inline]
pub(super) fn clamp_frame_delta(delta: f64, max: f64) -> f64 {
    if !delta.is_finite() || delta <= 0.0 {
        0.0
    } else {
        delta.min(max)
    }
}

/// Fixed-timestep driver. Adds the clamped delta to the accumulator and runs
/// sub-steps while at least one full step is banked.
pub(super) fn advance(world: &mut SimulationWorld, frame_delta: f64) -> u32 {
    let delta = clamp_frame_delta(frame_delta, world.config.max_frame_delta);
    let dt = world.sub_step_dt as f64;

    if world.perf_enabled {
        world.perf_stats.reset();
    }

    world.accumulator += delta;
    let mut ran = 0u32;
    if world.accumulator >= dt {
        let timer = PerfTimer::start();
        while world.accumulator >= dt {
            sub_step(world);
            world.accumulator -= dt;
            ran += 1;
        }
        let ms = timer.elapsed_ms();
        world.window.record_physics_ms(ms);
        if world.perf_enabled {
            world.perf_stats.advance_ms = ms;
        }
    }

    if let Some(report) =
        world
            .window
            .end_frame(delta, world.store.len(), world.grid.size())
    {
        world.diagnostics = report;
    }

    ran
}

#[cfg(test)]
mod tests {
    use super::clamp_frame_delta;

    #[test]
    fn frame_delta_is_clamped() {
        assert_eq!(clamp_frame_delta(0.1, 0.25), 0.1);
        assert_eq!(clamp_frame_delta(3.0, 0.25), 0.25);
        assert_eq!(clamp_frame_delta(-1.0, 0.25), 0.0);
        assert_eq!(clamp_frame_delta(f64::NAN, 0.25), 0.0);
        assert_eq!(clamp_frame_delta(f64::INFINITY, 0.25), 0.0);
    }
}
