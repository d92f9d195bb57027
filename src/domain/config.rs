use serde::{Deserialize, Serialize};

use crate::core::Vec2;

use super::error::{SimError, SimResult};

/// Default body capacity.
pub const DEFAULT_CAPACITY: usize = 2048;
/// Default sub-steps per simulated second (8 per 60 Hz frame).
pub const DEFAULT_SUB_STEP_HZ: u32 = 8 * 60;
/// Longest frame delta fed into the accumulator, in seconds.
pub const DEFAULT_MAX_FRAME_DELTA: f64 = 0.25;
pub const DEFAULT_CELL_SIZE: f32 = 32.0;
pub const DEFAULT_GRID_CELLS: u32 = 100;
pub const DEFAULT_GRAVITY: f32 = 19.4 * 4.0;
pub const DEFAULT_OCCUPANCY_THRESHOLD: u32 = 20;
/// Largest body store a config may ask for.
pub const MAX_CAPACITY: usize = 1 << 20;
/// Largest grid (`grid_width * grid_height`) a config may ask for.
pub const MAX_GRID_CELLS: usize = 1 << 24;

/// Simulation settings. Every field falls back to the reference value when
/// missing from JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationConfig {
    pub world_width: f32,
    pub world_height: f32,
    pub cell_size: f32,
    pub grid_width: u32,
    pub grid_height: u32,
    pub capacity: usize,
    pub sub_step_hz: u32,
    pub max_frame_delta: f64,
    pub gravity: Vec2,
    /// Cells holding more dynamic bodies than this count as crowded in diagnostics.
    pub occupancy_threshold: u32,
    /// Resolve each pair at most once per sub-step even when it shares several cells.
    pub dedup_pairs: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            world_width: 800.0,
            world_height: 600.0,
            cell_size: DEFAULT_CELL_SIZE,
            grid_width: DEFAULT_GRID_CELLS,
            grid_height: DEFAULT_GRID_CELLS,
            capacity: DEFAULT_CAPACITY,
            sub_step_hz: DEFAULT_SUB_STEP_HZ,
            max_frame_delta: DEFAULT_MAX_FRAME_DELTA,
            gravity: Vec2::new(0.0, DEFAULT_GRAVITY),
            occupancy_threshold: DEFAULT_OCCUPANCY_THRESHOLD,
            dedup_pairs: false,
        }
    }
}

impl SimulationConfig {
    pub fn from_json(json: &str) -> SimResult<Self> {
        let config: SimulationConfig =
            serde_json::from_str(json).map_err(|e| SimError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Fixed sub-step duration in seconds.
    #[inline]
    pub fn sub_step(&self) -> f32 {
        1.0 / self.sub_step_hz as f32
    }

    pub fn cell_count(&self) -> usize {
        self.grid_width as usize * self.grid_height as usize
    }

    pub fn validate(&self) -> SimResult<()> {
        if !(self.world_width > 0.0)
            || !(self.world_height > 0.0)
            || !self.world_width.is_finite()
            || !self.world_height.is_finite()
        {
            return Err(SimError::Config(format!(
                "world size must be positive, got {}x{}",
                self.world_width, self.world_height
            )));
        }
        if !(self.cell_size > 0.0) || !self.cell_size.is_finite() {
            return Err(SimError::Config(format!("cell size must be positive, got {}", self.cell_size)));
        }
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(SimError::Config("grid must have at least one cell".into()));
        }
        match (self.grid_width as usize).checked_mul(self.grid_height as usize) {
            Some(cells) if cells <= MAX_GRID_CELLS => {}
            _ => {
                return Err(SimError::Config(format!(
                    "grid {}x{} exceeds {} cells",
                    self.grid_width, self.grid_height, MAX_GRID_CELLS
                )))
            }
        }
        if self.capacity > MAX_CAPACITY {
            return Err(SimError::Config(format!(
                "capacity {} exceeds {}",
                self.capacity, MAX_CAPACITY
            )));
        }
        if self.sub_step_hz == 0 {
            return Err(SimError::Config("subStepHz must be > 0".into()));
        }
        if !(self.max_frame_delta >= 0.0) || !self.max_frame_delta.is_finite() {
            return Err(SimError::Config(format!(
                "maxFrameDelta must be >= 0, got {}",
                self.max_frame_delta
            )));
        }
        if !self.gravity.is_finite() {
            return Err(SimError::Config("gravity must be finite".into()));
        }
        Ok(())
    }
}
