//! Reference scenario: the fixed wall layout and the periodic spawner that
//! drops boxes from the top corners.

use tracing::{debug, trace};

use crate::domain::config::DEFAULT_SUB_STEP_HZ;
use crate::domain::{BodyDesc, BodyId, BodyStore};

use super::random::rand_range;
use super::SimulationWorld;

const WALL_MASS: f32 = 10.0;
const WALL_RESTITUTION: f32 = 0.5;

/// Seconds between spawns; converted to whole sub-steps.
const SPAWN_PERIOD_SECS: f32 = 0.005;
const SPAWN_Y: f32 = 50.0;
const SPAWN_LEFT_X: f32 = 50.0;
const SPAWN_SIDE_OFFSET: f32 = 500.0;
const SPAWN_MAX_SPEED: f32 = 200.0;

/// The five static walls of the reference scene: a shelf, a post, the floor
/// and the two side walls.
pub fn reference_walls() -> Vec<BodyDesc> {
    let wall = |x: f32, y: f32, hw: f32, hh: f32| {
        BodyDesc::fixed(x, y, hw, hh)
            .with_mass(WALL_MASS)
            .with_restitution(WALL_RESTITUTION)
    };
    vec![
        wall(400.0, 500.0, 100.0, 5.0),
        wall(500.0, 400.0, 5.0, 100.0),
        wall(400.0, 550.0, 400.0, 10.0),
        wall(5.0, 300.0, 10.0, 300.0),
        wall(750.0, 300.0, 10.0, 300.0),
    ]
}

pub(super) fn load_reference_walls(world: &mut SimulationWorld) -> usize {
    let added = reference_walls()
        .into_iter()
        .filter_map(|desc| world.store.add(desc))
        .count();
    debug!(added, "reference walls loaded");
    added
}

/// Drops a small random box every few sub-steps, alternating between the left
/// and right spawn points. Fully determined by its seed.
#[derive(Clone, Debug)]
pub struct Spawner {
    rng: u32,
    interval: u32,
    counter: u32,
    flip: u32,
    spawned: u32,
}

impl Spawner {
    pub fn new(seed: u32) -> Self {
        Self::with_sub_step_hz(seed, DEFAULT_SUB_STEP_HZ)
    }

    /// Spawner paced for a world stepping at `hz`.
    pub fn with_sub_step_hz(seed: u32, hz: u32) -> Self {
        let interval = (hz as f32 * SPAWN_PERIOD_SECS).floor() as u32 + 1;
        Self {
            rng: seed,
            interval,
            counter: 0,
            flip: 0,
            spawned: 0,
        }
    }

    /// Sub-steps between two spawn attempts.
    pub fn interval(&self) -> u32 {
        self.interval
    }

    /// Bodies added so far.
    pub fn spawned(&self) -> u32 {
        self.spawned
    }

    /// Count one sub-step; on every `interval`-th call try to add a body.
    ///
    /// The side alternates on every attempt, including attempts refused
    /// because the store is full.
    pub fn tick(&mut self, store: &mut BodyStore) -> Option<BodyId> {
        self.counter += 1;
        if self.counter < self.interval {
            return None;
        }
        self.counter = 0;
        self.flip = (self.flip + 1) % 2;

        if store.is_full() {
            return None;
        }

        let desc = self.next_desc();
        let id = store.add(desc)?;
        self.spawned += 1;
        trace!(id, side = self.flip, "spawned body");
        Some(id)
    }

    fn next_desc(&mut self) -> BodyDesc {
        let rng = &mut self.rng;
        let hw = rand_range(rng, 2.0, 5.0);
        let hh = rand_range(rng, 2.0, 5.0);
        // Right-hand spawns move left, left-hand spawns move right.
        let direction = 1.0 - (self.flip * 2) as f32;
        let vx = rand_range(rng, 0.0, SPAWN_MAX_SPEED) * direction;
        let mass = rand_range(rng, 5.0, 10.0);
        let restitution = rand_range(rng, 0.0, 0.5);

        let x = SPAWN_LEFT_X + self.flip as f32 * SPAWN_SIDE_OFFSET;
        BodyDesc::dynamic(x, SPAWN_Y, hw, hh)
            .with_velocity(vx, 0.0)
            .with_mass(mass)
            .with_restitution(restitution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(store: &BodyStore) -> Vec<(f32, f32)> {
        store.iter().map(|b| (b.position.x, b.velocity.x)).collect()
    }

    #[test]
    fn interval_matches_reference_rate() {
        assert_eq!(Spawner::new(1).interval(), 3);
        assert_eq!(Spawner::with_sub_step_hz(1, 60).interval(), 1);
    }

    #[test]
    fn spawns_alternate_sides() {
        let mut store = BodyStore::new(16);
        let mut spawner = Spawner::new(99);

        let mut ids = Vec::new();
        for _ in 0..12 {
            if let Some(id) = spawner.tick(&mut store) {
                ids.push(id);
            }
        }

        assert_eq!(ids, vec![0, 1, 2, 3]);
        let xs: Vec<f32> = store.iter().map(|b| b.position.x).collect();
        assert_eq!(xs, vec![550.0, 50.0, 550.0, 50.0]);
        for body in store.iter() {
            assert!(!body.is_static);
            assert_eq!(body.position.y, 50.0);
            assert_eq!(body.velocity.y, 0.0);
            assert!((2.0..=5.0).contains(&body.half_size.x));
            assert!((2.0..=5.0).contains(&body.half_size.y));
            assert!((5.0..=10.0).contains(&body.mass));
            assert!((0.0..=0.5).contains(&body.restitution));
            if body.position.x > 300.0 {
                assert!(body.velocity.x <= 0.0);
            } else {
                assert!(body.velocity.x >= 0.0);
            }
        }
    }

    #[test]
    fn stops_at_capacity_but_keeps_flipping() {
        let mut store = BodyStore::new(1);
        let mut spawner = Spawner::new(5);

        for _ in 0..3 {
            spawner.tick(&mut store);
        }
        assert_eq!(store.len(), 1);
        assert_eq!(spawner.flip, 1);

        for _ in 0..3 {
            assert!(spawner.tick(&mut store).is_none());
        }
        assert_eq!(spawner.flip, 0);
        assert_eq!(spawner.spawned(), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn same_seed_same_bodies() {
        let mut store_a = BodyStore::new(8);
        let mut store_b = BodyStore::new(8);
        let mut a = Spawner::new(1234);
        let mut b = Spawner::new(1234);
        for _ in 0..24 {
            a.tick(&mut store_a);
            b.tick(&mut store_b);
        }
        assert_eq!(store_a.len(), 8);
        assert_eq!(positions(&store_a), positions(&store_b));
        assert_eq!(store_a.as_slice(), store_b.as_slice());
    }

    #[test]
    fn reference_walls_are_static() {
        let walls = reference_walls();
        assert_eq!(walls.len(), 5);
        assert!(walls.iter().all(|w| w.is_static));
        assert!(walls.iter().all(|w| w.restitution == 0.5 && w.mass == 10.0));
    }
}
