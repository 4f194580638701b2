//! Unit tests for the pairwise field evaluator

use efield_core::engine::{field_at, EPSILON_R, FIELD_CONSTANT, FIELD_EXPONENT};
use efield_core::tests::test_helpers::{approx_eq_f32, world_of};
use glam::Vec2;

#[test]
fn test_symmetric_zero_net_charge_cancels() {
    // Quadrupole: +q on the x axis, -q on the y axis, all at distance 10
    // from the origin. Net charge is zero and the layout is symmetric
    // about the origin, so the field there must vanish.
    let world = world_of(&[
        (3.0, 10.0, 0.0),
        (3.0, -10.0, 0.0),
        (-3.0, 0.0, 10.0),
        (-3.0, 0.0, -10.0),
    ]);

    let field = field_at(Vec2::ZERO, &world.charges, None);
    assert!(
        field.length() < 1e-3,
        "expected cancellation, got {:?}",
        field
    );
}

#[test]
fn test_excluding_the_only_charge_yields_exact_zero() {
    let world = world_of(&[(5.0, 7.0, -2.0)]);

    // Querying at the charge's own position with it excluded: nothing
    // contributes, so the result is the zero vector exactly, with no
    // near-singular term sneaking in.
    let field = field_at(Vec2::new(7.0, -2.0), &world.charges, Some(0));
    assert_eq!(field, Vec2::ZERO);
}

#[test]
fn test_dipole_midpoint_direction_and_magnitude() {
    // +5 at the origin, -5 at (10, 0). At the midpoint both contributions
    // point in +x: the positive charge pushes away from itself, the
    // negative pulls toward itself.
    let world = world_of(&[(5.0, 0.0, 0.0), (-5.0, 10.0, 0.0)]);

    let field = field_at(Vec2::new(5.0, 0.0), &world.charges, None);

    let expected = 2.0 * FIELD_CONSTANT * 5.0 / 5.0f32.powf(FIELD_EXPONENT);
    assert!(field.x > 0.0);
    assert!(approx_eq_f32(field.y, 0.0, 1e-3));
    assert!(approx_eq_f32(field.x, expected, 1e-2));
}

#[test]
fn test_positive_charge_repels() {
    let world = world_of(&[(5.0, 0.0, 0.0)]);

    // Field to the right of a positive charge points further right.
    let field = field_at(Vec2::new(4.0, 0.0), &world.charges, None);
    assert!(field.x > 0.0);
    assert!(approx_eq_f32(field.y, 0.0, 1e-4));
}

#[test]
fn test_negative_charge_attracts() {
    let world = world_of(&[(-5.0, 0.0, 0.0)]);

    // Field to the right of a negative charge points back toward it.
    let field = field_at(Vec2::new(4.0, 0.0), &world.charges, None);
    assert!(field.x < 0.0);
}

#[test]
fn test_coincident_query_point_is_finite() {
    // Query exactly on top of a charge without excluding it: the distance
    // floor kicks in and the direction vector is zero, so the contribution
    // collapses to zero instead of NaN.
    let world = world_of(&[(5.0, 3.0, 3.0)]);

    let field = field_at(Vec2::new(3.0, 3.0), &world.charges, None);
    assert!(field.x.is_finite() && field.y.is_finite());
    assert_eq!(field, Vec2::ZERO);
}

#[test]
fn test_softening_floor_bounds_near_singular_magnitude() {
    // Just off-center, the magnitude is bounded by the epsilon floor.
    let world = world_of(&[(5.0, 0.0, 0.0)]);

    let field = field_at(Vec2::new(1e-6, 0.0), &world.charges, None);
    let bound = 5.0 / EPSILON_R.powf(FIELD_EXPONENT) * FIELD_CONSTANT;
    assert!(field.length() <= bound * 1.001);
    assert!(field.x.is_finite());
}

#[test]
fn test_zero_charge_contributes_nothing() {
    // Zero charge is rejected at the scene boundary, but the evaluator
    // itself just yields a zero contribution.
    let world = world_of(&[(0.0, 10.0, 0.0), (5.0, -10.0, 0.0)]);

    let with_zero = field_at(Vec2::ZERO, &world.charges, None);
    let without = field_at(Vec2::ZERO, &world.charges[1..], None);
    assert_eq!(with_zero, without);
}

#[test]
fn test_superposition_is_additive() {
    let a = world_of(&[(5.0, 20.0, 0.0)]);
    let b = world_of(&[(-3.0, 0.0, 15.0)]);
    let both = world_of(&[(5.0, 20.0, 0.0), (-3.0, 0.0, 15.0)]);

    let p = Vec2::new(1.0, 2.0);
    let sum = field_at(p, &a.charges, None) + field_at(p, &b.charges, None);
    let combined = field_at(p, &both.charges, None);
    assert!(approx_eq_f32(sum.x, combined.x, 1e-3));
    assert!(approx_eq_f32(sum.y, combined.y, 1e-3));
}
