use crate::core::Vec2;

use super::error::{SimError, SimResult};

/// Index of a body in the store. Stable for the lifetime of the world.
pub type BodyId = u32;

/// Axis-aligned box body. Never rotates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Body {
    /// Center of the box
    pub position: Vec2,
    pub velocity: Vec2,
    /// Accumulated for one sub-step, zeroed by the integrator
    pub acceleration: Vec2,
    pub half_size: Vec2,
    pub mass: f32,
    pub restitution: f32,
    pub is_static: bool,
}

impl Body {
    #[inline]
    pub fn inverse_mass(&self) -> f32 {
        if self.is_static || self.mass <= 0.0 {
            0.0
        } else {
            1.0 / self.mass
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.position - self.half_size
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.position + self.half_size
    }

    /// Accumulate an acceleration for the next integration only.
    pub fn apply_acceleration(&mut self, accel: Vec2) {
        if !self.is_static {
            self.acceleration += accel;
        }
    }

    /// Apply an impulse at the center of mass.
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity += impulse * self.inverse_mass();
    }
}

/// What a harness hands to `BodyStore::add`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyDesc {
    pub position: Vec2,
    pub velocity: Vec2,
    pub half_size: Vec2,
    pub mass: f32,
    pub restitution: f32,
    pub is_static: bool,
}

impl BodyDesc {
    /// Dynamic box with unit mass and no bounce.
    pub fn dynamic(x: f32, y: f32, half_w: f32, half_h: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
            half_size: Vec2::new(half_w, half_h),
            mass: 1.0,
            restitution: 0.0,
            is_static: false,
        }
    }

    /// Immovable box (walls, floors).
    pub fn fixed(x: f32, y: f32, half_w: f32, half_h: f32) -> Self {
        Self {
            is_static: true,
            ..Self::dynamic(x, y, half_w, half_h)
        }
    }

    pub fn with_velocity(mut self, vx: f32, vy: f32) -> Self {
        self.velocity = Vec2::new(vx, vy);
        self
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_restitution(mut self, restitution: f32) -> Self {
        self.restitution = restitution;
        self
    }

    pub fn validate(&self) -> SimResult<()> {
        if !self.position.is_finite() || !self.velocity.is_finite() || !self.half_size.is_finite() {
            return Err(SimError::InvalidBody("non-finite position, velocity or half size".into()));
        }
        if self.half_size.x < 0.0 || self.half_size.y < 0.0 {
            return Err(SimError::InvalidBody(format!(
                "negative half size ({}, {})",
                self.half_size.x, self.half_size.y
            )));
        }
        if !(self.mass > 0.0) || !self.mass.is_finite() {
            return Err(SimError::InvalidBody(format!("mass must be > 0, got {}", self.mass)));
        }
        if !(self.restitution >= 0.0) || !self.restitution.is_finite() {
            return Err(SimError::InvalidBody(format!(
                "restitution must be >= 0, got {}",
                self.restitution
            )));
        }
        Ok(())
    }

    pub(crate) fn build(&self) -> Body {
        Body {
            position: self.position,
            velocity: if self.is_static { Vec2::ZERO } else { self.velocity },
            acceleration: Vec2::ZERO,
            half_size: self.half_size,
            mass: self.mass,
            restitution: self.restitution,
            is_static: self.is_static,
        }
    }
}
