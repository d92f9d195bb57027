use crate::core::Vec2;
use crate::domain::{BodyDesc, BodyId, SimResult};

use super::SimulationWorld;

pub(super) fn add_body(world: &mut SimulationWorld, desc: BodyDesc) -> Option<BodyId> {
    world.store.add(desc)
}

pub(super) fn try_add_body(world: &mut SimulationWorld, desc: BodyDesc) -> SimResult<BodyId> {
    world.store.try_add(desc)
}

pub(super) fn apply_acceleration(world: &mut SimulationWorld, id: BodyId, accel: Vec2) -> bool {
    let Some(body) = world.store.get_mut(id) else {
        return false;
    };
    if body.is_static || !accel.is_finite() {
        return false;
    }
    body.apply_acceleration(accel);
    true
}

pub(super) fn apply_impulse(world: &mut SimulationWorld, id: BodyId, impulse: Vec2) -> bool {
    let Some(body) = world.store.get_mut(id) else {
        return false;
    };
    if body.is_static || !impulse.is_finite() {
        return false;
    }
    body.apply_impulse(impulse);
    true
}
