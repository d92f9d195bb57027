use crate::core::Vec2;
use crate::domain::Body;

use super::types::Contact;

/// -1, 0 or 1. Unlike `f32::signum`, zero maps to zero.
#[inline(always)]
fn sign(v: f32) -> f32 {
    ((v > 0.0) as i32 - (v < 0.0) as i32) as f32
}

/// AABB overlap test with a minimum-translation penetration vector.
///
/// Boxes that merely touch count as overlapping (with zero depth). The contact
/// axis is the one with the smaller penetration; x wins ties.
pub fn test_overlap(a: &Body, b: &Body) -> Option<Contact> {
    let total = a.half_size + b.half_size;

    let separated = (a.position.x < b.position.x - total.x)
        | (a.position.x > b.position.x + total.x)
        | (a.position.y < b.position.y - total.y)
        | (a.position.y > b.position.y + total.y);
    if separated {
        return None;
    }

    let delta = b.position - a.position;
    let depth = total - delta.abs();

    let (normal, penetration) = if depth.x <= depth.y {
        let n = sign(delta.x);
        (Vec2::new(n, 0.0), Vec2::new(n * depth.x, 0.0))
    } else {
        let n = sign(delta.y);
        (Vec2::new(0.0, n), Vec2::new(0.0, n * depth.y))
    };

    Some(Contact {
        point: a.position - penetration,
        normal,
        penetration,
    })
}
