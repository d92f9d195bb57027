use super::SimulationWorld;

/// Fill the rect buffer with one top-left `[x, y, w, h]` per body and return it.
pub(super) fn extract_body_rects(world: &mut SimulationWorld) -> &[f32] {
    let buf = &mut world.rect_buffer;
    buf.clear();
    buf.reserve(world.store.len() * 4);

    for body in world.store.iter() {
        let min = body.min();
        buf.push(min.x);
        buf.push(min.y);
        buf.push(body.half_size.x * 2.0);
        buf.push(body.half_size.y * 2.0);
    }

    &world.rect_buffer
}
