//! Unit tests for pairwise circle resolution

use circlesim_core::collision::{resolve_indices, resolve_pair};
use circlesim_core::tests::test_helpers::{approx_eq_f32, approx_eq_vec2, body};
use glam::Vec2;

#[test]
fn test_equal_mass_head_on_swaps_velocities() {
    let mut a = body(5.0, (0.0, 0.0), (100.0, 0.0));
    let mut b = body(5.0, (8.0, 0.0), (-100.0, 0.0));

    assert!(resolve_pair(&mut a, &mut b));

    assert!(approx_eq_vec2(a.vel, Vec2::new(-100.0, 0.0), 1e-3), "a.vel = {:?}", a.vel);
    assert!(approx_eq_vec2(b.vel, Vec2::new(100.0, 0.0), 1e-3), "b.vel = {:?}", b.vel);

    // Each body moved back by half the overlap of 2
    assert!(approx_eq_vec2(a.pos, Vec2::new(-1.0, 0.0), 1e-5));
    assert!(approx_eq_vec2(b.pos, Vec2::new(9.0, 0.0), 1e-5));
}

#[test]
fn test_separated_bodies_are_untouched() {
    let mut a = body(2.0, (0.0, 0.0), (1.0, 2.0));
    let mut b = body(3.0, (5.0, 0.0), (-3.0, 4.0));

    // Touching exactly is not overlapping
    assert!(!resolve_pair(&mut a, &mut b));
    assert_eq!(a.pos, Vec2::ZERO);
    assert_eq!(b.pos, Vec2::new(5.0, 0.0));
    assert_eq!(a.vel, Vec2::new(1.0, 2.0));
    assert_eq!(b.vel, Vec2::new(-3.0, 4.0));
}

#[test]
fn test_resolution_separates_overlap() {
    let cases = [
        (3.0, (10.0, 10.0), 4.0, (12.0, 13.0)),
        (1.0, (0.0, 0.0), 5.0, (0.5, -0.2)),
        (2.5, (40.0, 40.0), 2.5, (40.0, 44.9)),
    ];

    for (ra, pa, rb, pb) in cases {
        let mut a = body(ra, pa, (10.0, -5.0));
        let mut b = body(rb, pb, (-7.0, 3.0));
        assert!(resolve_pair(&mut a, &mut b));

        let distance = a.pos.distance(b.pos);
        assert!(
            distance >= ra + rb - 1e-4,
            "distance {} should be at least {}",
            distance,
            ra + rb
        );
    }
}

#[test]
fn test_momentum_is_conserved() {
    let mut a = body(2.0, (10.0, 10.0), (30.0, 12.0));
    let mut b = body(4.0, (14.0, 13.0), (-20.0, 5.0));
    let before = a.momentum() + b.momentum();

    assert!(resolve_pair(&mut a, &mut b));

    let after = a.momentum() + b.momentum();
    let scale = before.length().max(1.0);
    assert!(
        approx_eq_vec2(before, after, scale * 1e-5),
        "before {:?} after {:?}",
        before,
        after
    );
}

#[test]
fn test_kinetic_energy_is_conserved() {
    let mut a = body(3.0, (0.0, 0.0), (50.0, -10.0));
    let mut b = body(1.5, (2.0, 2.5), (-40.0, 25.0));
    let before = a.kinetic_energy() + b.kinetic_energy();

    assert!(resolve_pair(&mut a, &mut b));

    let after = a.kinetic_energy() + b.kinetic_energy();
    assert!(approx_eq_f32(before, after, before * 1e-5), "before {} after {}", before, after);
}

#[test]
fn test_coincident_centers_use_fixed_direction() {
    let mut a = body(2.0, (50.0, 50.0), (3.0, 1.0));
    let mut b = body(2.0, (50.0, 50.0), (-1.0, 2.0));

    assert!(resolve_pair(&mut a, &mut b));

    for v in [a.pos, b.pos, a.vel, b.vel] {
        assert!(v.is_finite(), "resolution produced a non-finite value: {:?}", v);
    }
    assert!(approx_eq_vec2(a.pos, Vec2::new(48.0, 50.0), 1e-5));
    assert!(approx_eq_vec2(b.pos, Vec2::new(52.0, 50.0), 1e-5));
}

#[test]
fn test_heavier_body_deflects_less() {
    let mut light = body(1.0, (0.0, 0.0), (10.0, 0.0));
    let mut heavy = body(4.0, (4.5, 0.0), (0.0, 0.0));

    assert!(resolve_pair(&mut light, &mut heavy));

    // Light body bounces back, heavy one is nudged forward
    assert!(light.vel.x < 0.0);
    assert!(heavy.vel.x > 0.0);
    assert!(heavy.vel.x < 10.0 * 0.2);
}

#[test]
fn test_resolve_indices_either_order() {
    let make = || {
        vec![
            body(5.0, (0.0, 0.0), (100.0, 0.0)),
            body(1.0, (500.0, 500.0), (0.0, 0.0)),
            body(5.0, (8.0, 0.0), (-100.0, 0.0)),
        ]
    };

    let mut forward = make();
    assert!(resolve_indices(&mut forward, 0, 2));
    let mut backward = make();
    assert!(resolve_indices(&mut backward, 2, 0));

    // Same result up to the mirrored roles of the two bodies
    assert!(approx_eq_vec2(forward[0].vel, Vec2::new(-100.0, 0.0), 1e-3));
    assert!(approx_eq_vec2(backward[0].vel, Vec2::new(-100.0, 0.0), 1e-3));
    assert!(approx_eq_vec2(forward[2].vel, backward[2].vel, 1e-3));
    assert_eq!(forward[1].pos, Vec2::new(500.0, 500.0));
}
