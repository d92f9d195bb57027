//! Integrator - semi-implicit Euler for dynamic bodies plus world-bounds clamp.

use crate::core::Vec2;
use crate::domain::Body;

/// Advance one dynamic body by `dt`. Static bodies are left untouched.
#[inline]
pub fn integrate_body(body: &mut Body, gravity: Vec2, dt: f32) {
    if body.is_static {
        return;
    }
    body.acceleration += gravity;
    body.velocity += body.acceleration * dt;
    body.position += body.velocity * dt;
    body.acceleration = Vec2::ZERO;
}

/// Keep a body's center inside `[0, bounds - half_size]` on both axes.
///
/// Hitting a wall kills velocity and acceleration on that axis regardless of
/// restitution. Returns `true` when any axis was clamped.
#[inline]
pub fn clamp_to_bounds(body: &mut Body, bounds: Vec2) -> bool {
    let mut clamped = false;

    if body.position.x < 0.0 {
        body.position.x = 0.0;
        body.velocity.x = 0.0;
        body.acceleration.x = 0.0;
        clamped = true;
    }
    if body.position.y < 0.0 {
        body.position.y = 0.0;
        body.velocity.y = 0.0;
        body.acceleration.y = 0.0;
        clamped = true;
    }

    let max_x = bounds.x - body.half_size.x;
    if body.position.x > max_x {
        body.position.x = max_x;
        body.velocity.x = 0.0;
        body.acceleration.x = 0.0;
        clamped = true;
    }
    let max_y = bounds.y - body.half_size.y;
    if body.position.y > max_y {
        body.position.y = max_y;
        body.velocity.y = 0.0;
        body.acceleration.y = 0.0;
        clamped = true;
    }

    clamped
}

/// Integrate every dynamic body, then clamp it to the world. Returns the
/// number of bodies that hit a wall.
pub fn integrate(bodies: &mut [Body], gravity: Vec2, dt: f32, bounds: Vec2) -> u32 {
    let mut clamped = 0;
    for body in bodies.iter_mut().filter(|b| !b.is_static) {
        integrate_body(body, gravity, dt);
        if clamp_to_bounds(body, bounds) {
            clamped += 1;
        }
    }
    clamped
}
