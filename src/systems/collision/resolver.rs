use crate::domain::{Body, BodyId};

use super::types::Contact;

/// Two distinct bodies of the store, both mutable.
///
/// Panics when `a == b`: a body is never paired with itself.
#[inline]
pub fn pair_mut(bodies: &mut [Body], a: BodyId, b: BodyId) -> (&mut Body, &mut Body) {
    let (a, b) = (a as usize, b as usize);
    assert_ne!(a, b, "pair_mut: body {} paired with itself", a);
    if a < b {
        let (lo, hi) = bodies.split_at_mut(b);
        (&mut lo[a], &mut hi[0])
    } else {
        let (lo, hi) = bodies.split_at_mut(a);
        (&mut hi[0], &mut lo[b])
    }
}

/// Resolve a contact between two bodies found in the same dynamic list.
///
/// Restitutions are summed, not averaged. Positional correction is split by
/// the partner's mass share, so the heavier body moves less; a static partner
/// takes none of it. Returns `false` (and changes nothing) when neither body
/// can move.
pub fn resolve_dynamic(a: &mut Body, b: &mut Body, contact: &Contact) -> bool {
    let inv_a = a.inverse_mass();
    let inv_b = b.inverse_mass();
    let inv_sum = inv_a + inv_b;
    if inv_sum <= 0.0 {
        return false;
    }

    let n = contact.normal;
    let relative = a.velocity - b.velocity;
    let j = -(1.0 + a.restitution + b.restitution) * relative.dot(n) / inv_sum;

    let total_mass = a.mass + b.mass;
    let share_a = if b.is_static {
        1.0
    } else if a.is_static {
        0.0
    } else {
        b.mass / total_mass
    };
    let share_b = if a.is_static {
        1.0
    } else if b.is_static {
        0.0
    } else {
        a.mass / total_mass
    };

    a.position -= contact.penetration * share_a;
    b.position += contact.penetration * share_b;
    a.velocity += n * (j * inv_a);
    b.velocity -= n * (j * inv_b);
    true
}

/// Resolve a contact between a dynamic body and a static one.
///
/// The static side is treated as having zero velocity and is never moved; the
/// dynamic body takes the whole correction and the whole impulse.
pub fn resolve_static(body: &mut Body, fixed: &Body, contact: &Contact) -> bool {
    let inv = body.inverse_mass();
    if inv <= 0.0 {
        return false;
    }

    let n = contact.normal;
    let j = -(1.0 + body.restitution + fixed.restitution) * body.velocity.dot(n) / inv;

    body.position -= contact.penetration;
    body.velocity += n * (j * inv);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vec2;
    use crate::domain::BodyDesc;
    use crate::systems::collision::test_overlap;

    #[test]
    fn equal_masses_no_bounce_stop_relative_motion() {
        let mut a = BodyDesc::dynamic(0.0, 0.0, 5.0, 5.0).with_mass(2.0).with_velocity(10.0, 0.0).build();
        let mut b = BodyDesc::dynamic(9.0, 0.0, 5.0, 5.0).with_mass(2.0).with_velocity(-4.0, 0.0).build();
        let momentum_before = a.velocity * a.mass + b.velocity * b.mass;

        let contact = test_overlap(&a, &b).unwrap();
        assert!(resolve_dynamic(&mut a, &mut b, &contact));

        let momentum_after = a.velocity * a.mass + b.velocity * b.mass;
        assert!((momentum_after - momentum_before).length_squared() < 1e-8);
        assert!((a.velocity - b.velocity).dot(contact.normal) <= 1e-6);
        assert_eq!(a.velocity, Vec2::new(3.0, 0.0));
        assert_eq!(b.velocity, Vec2::new(3.0, 0.0));
        // Overlap of 1 split evenly.
        assert_eq!(a.position, Vec2::new(-0.5, 0.0));
        assert_eq!(b.position, Vec2::new(9.5, 0.0));
    }

    #[test]
    fn restitutions_are_summed() {
        let mut a = BodyDesc::dynamic(0.0, 0.0, 1.0, 1.0).with_velocity(0.0, 4.0).with_restitution(0.25).build();
        let mut b = BodyDesc::dynamic(0.0, 1.5, 1.0, 1.0).with_restitution(0.25).build();

        let contact = test_overlap(&a, &b).unwrap();
        resolve_dynamic(&mut a, &mut b, &contact);

        // Relative normal speed 4 -> -(0.25 + 0.25) * 4.
        let rel = (a.velocity - b.velocity).dot(contact.normal);
        assert!((rel + 2.0).abs() < 1e-5);
    }

    #[test]
    fn heavier_body_moves_less() {
        let mut light = BodyDesc::dynamic(0.0, 0.0, 5.0, 5.0).with_mass(1.0).build();
        let mut heavy = BodyDesc::dynamic(6.0, 0.0, 5.0, 5.0).with_mass(3.0).build();

        let contact = test_overlap(&light, &heavy).unwrap();
        resolve_dynamic(&mut light, &mut heavy, &contact);

        // Penetration of 4: the light body takes 3, the heavy one 1.
        assert!((light.position.x + 3.0).abs() < 1e-5);
        assert!((heavy.position.x - 7.0).abs() < 1e-5);
    }

    #[test]
    fn static_partner_in_dynamic_path_is_not_moved() {
        let mut a = BodyDesc::dynamic(0.0, 0.0, 5.0, 5.0).with_velocity(0.0, 3.0).build();
        let mut floor = BodyDesc::fixed(0.0, 8.0, 5.0, 5.0).build();

        let contact = test_overlap(&a, &floor).unwrap();
        resolve_dynamic(&mut a, &mut floor, &contact);

        assert_eq!(floor.position, Vec2::new(0.0, 8.0));
        assert_eq!(floor.velocity, Vec2::ZERO);
        assert_eq!(a.position, Vec2::new(0.0, -2.0));
        assert_eq!(a.velocity, Vec2::ZERO);
    }

    #[test]
    fn dynamic_static_takes_full_correction_and_impulse() {
        let mut a = BodyDesc::dynamic(0.0, 0.0, 5.0, 5.0)
            .with_mass(5.0)
            .with_velocity(1.0, 10.0)
            .with_restitution(0.2)
            .build();
        let floor = BodyDesc::fixed(0.0, 9.0, 20.0, 5.0).with_restitution(0.3).build();

        let contact = test_overlap(&a, &floor).unwrap();
        assert!(resolve_static(&mut a, &floor, &contact));

        assert_eq!(a.position, Vec2::new(0.0, -1.0));
        assert!((a.velocity.y + 5.0).abs() < 1e-5);
        assert_eq!(a.velocity.x, 1.0);
    }

    #[test]
    fn immovable_pairs_are_left_alone() {
        let mut a = BodyDesc::fixed(0.0, 0.0, 5.0, 5.0).build();
        let mut b = BodyDesc::fixed(1.0, 0.0, 5.0, 5.0).build();
        let contact = test_overlap(&a, &b).unwrap();

        assert!(!resolve_dynamic(&mut a, &mut b, &contact));
        assert!(!resolve_static(&mut a, &b, &contact));
        assert_eq!(a.position, Vec2::ZERO);
        assert_eq!(b.position, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn pair_mut_returns_requested_order() {
        let mut bodies = vec![
            BodyDesc::dynamic(0.0, 0.0, 1.0, 1.0).build(),
            BodyDesc::dynamic(1.0, 0.0, 1.0, 1.0).build(),
            BodyDesc::dynamic(2.0, 0.0, 1.0, 1.0).build(),
        ];
        let (a, b) = pair_mut(&mut bodies, 2, 0);
        assert_eq!(a.position.x, 2.0);
        assert_eq!(b.position.x, 0.0);
    }

    #[test]
    #[should_panic(expected = "itself")]
    fn pair_mut_rejects_self_pairs() {
        let mut bodies = vec![BodyDesc::dynamic(0.0, 0.0, 1.0, 1.0).build()];
        let _ = pair_mut(&mut bodies, 0, 0);
    }
}
