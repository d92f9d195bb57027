use tracing::info;
use wasm_bindgen::prelude::*;

use crate::systems::BroadPhaseStats;

/// Length of one diagnostics window, in simulated-frame seconds.
const WINDOW_SECS: f64 = 1.0;

/// Aggregate counters over the last completed one-second window.
///
/// Informational only; nothing in the simulation reads them back.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Diagnostics {
    pub(super) frames: u32,
    pub(super) avg_physics_ms: f64,
    pub(super) body_count: u32,
    pub(super) max_occupancy: u32,
    pub(super) avg_occupancy: f64,
    pub(super) crowded_per_step: f64,
    pub(super) crowded_percent: f64,
    pub(super) sub_steps: u32,
}

#[wasm_bindgen]
impl Diagnostics {
    /// Frames (`advance` calls) in the window
    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> u32 { self.frames }
    /// Physics wall time per frame, in ms
    #[wasm_bindgen(getter)]
    pub fn avg_physics_ms(&self) -> f64 { self.avg_physics_ms }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    /// Busiest cell of the window's last sub-step
    #[wasm_bindgen(getter)]
    pub fn max_occupancy(&self) -> u32 { self.max_occupancy }
    /// Dynamic bodies per cell, averaged over every cell of every sub-step
    #[wasm_bindgen(getter)]
    pub fn avg_occupancy(&self) -> f64 { self.avg_occupancy }
    /// Cells above the occupancy threshold, per sub-step
    #[wasm_bindgen(getter)]
    pub fn crowded_per_step(&self) -> f64 { self.crowded_per_step }
    /// Share of cells above the occupancy threshold, 0..100
    #[wasm_bindgen(getter)]
    pub fn crowded_percent(&self) -> f64 { self.crowded_percent }
    #[wasm_bindgen(getter)]
    pub fn sub_steps(&self) -> u32 { self.sub_steps }
}

/// Running totals for the window in progress.
#[derive(Clone, Debug, Default)]
pub(crate) struct DiagnosticsWindow {
    elapsed: f64,
    frames: u32,
    physics_ms: f64,
    sub_steps: u32,
    occupancy_sum: u64,
    crowded_cells: u64,
    max_occupancy: u32,
}

impl DiagnosticsWindow {
    pub(crate) fn record_sub_step(&mut self, stats: &BroadPhaseStats) {
        self.sub_steps += 1;
        self.occupancy_sum += stats.occupancy_sum;
        self.crowded_cells += stats.crowded_cells as u64;
        self.max_occupancy = stats.max_occupancy;
    }

    pub(crate) fn record_physics_ms(&mut self, ms: f64) {
        self.physics_ms += ms;
    }

    /// Count one frame of `delta` seconds. Returns the finished window once
    /// more than a second has accumulated, and starts a new one.
    pub(crate) fn end_frame(&mut self, delta: f64, body_count: usize, cell_count: usize) -> Option<Diagnostics> {
        self.frames += 1;
        self.elapsed += delta;
        if self.elapsed <= WINDOW_SECS {
            return None;
        }

        let frames = self.frames.max(1) as f64;
        let cell_steps = (self.sub_steps as f64) * (cell_count as f64);
        let (avg_occupancy, crowded_percent) = if cell_steps > 0.0 {
            (
                self.occupancy_sum as f64 / cell_steps,
                100.0 * self.crowded_cells as f64 / cell_steps,
            )
        } else {
            (0.0, 0.0)
        };
        let crowded_per_step = if self.sub_steps > 0 {
            self.crowded_cells as f64 / self.sub_steps as f64
        } else {
            0.0
        };

        let report = Diagnostics {
            frames: self.frames,
            avg_physics_ms: self.physics_ms / frames,
            body_count: body_count as u32,
            max_occupancy: self.max_occupancy,
            avg_occupancy,
            crowded_per_step,
            crowded_percent,
            sub_steps: self.sub_steps,
        };

        info!(
            frames = report.frames,
            physics_ms = report.avg_physics_ms,
            bodies = report.body_count,
            max_occupancy = report.max_occupancy,
            avg_occupancy = report.avg_occupancy,
            crowded_per_step = report.crowded_per_step,
            "simulation diagnostics"
        );

        *self = DiagnosticsWindow::default();
        Some(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_closes_after_one_second() {
        let mut window = DiagnosticsWindow::default();
        let stats = BroadPhaseStats {
            max_occupancy: 4,
            occupancy_sum: 20,
            crowded_cells: 1,
            ..Default::default()
        };

        for _ in 0..10 {
            window.record_sub_step(&stats);
            assert!(window.end_frame(0.1, 7, 10).is_none());
        }
        window.record_physics_ms(11.0);
        let report = window.end_frame(0.1, 7, 10).expect("window should close");

        assert_eq!(report.frames(), 11);
        assert_eq!(report.sub_steps(), 10);
        assert_eq!(report.body_count(), 7);
        assert_eq!(report.max_occupancy(), 4);
        assert!((report.avg_occupancy() - 2.0).abs() < 1e-9);
        assert!((report.crowded_per_step() - 1.0).abs() < 1e-9);
        assert!((report.crowded_percent() - 10.0).abs() < 1e-9);
        assert!((report.avg_physics_ms() - 1.0).abs() < 1e-9);

        // Fresh window afterwards.
        assert!(window.end_frame(0.5, 7, 10).is_none());
    }

    #[test]
    fn empty_window_reports_zeros() {
        let mut window = DiagnosticsWindow::default();
        let report = window.end_frame(2.0, 0, 100).unwrap();
        assert_eq!(report.sub_steps(), 0);
        assert_eq!(report.avg_occupancy(), 0.0);
        assert_eq!(report.crowded_percent(), 0.0);
    }
}
