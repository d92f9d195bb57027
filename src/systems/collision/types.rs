use crate::core::Vec2;

/// Result of a positive narrow-phase test between bodies A and B.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    /// A's center pushed back by the penetration (diagnostics only)
    pub point: Vec2,
    /// Axis-aligned, pointing from A towards B. Zero when the centers coincide on that axis.
    pub normal: Vec2,
    /// Normal scaled by the penetration depth on the chosen axis
    pub penetration: Vec2,
}

impl Contact {
    /// Penetration depth along the contact axis.
    #[inline]
    pub fn depth(&self) -> f32 {
        self.penetration.x.abs() + self.penetration.y.abs()
    }
}
