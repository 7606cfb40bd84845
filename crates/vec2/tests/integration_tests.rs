
use approx::{assert_abs_diff_eq, assert_relative_eq};
use ntest::{assert_about_eq, assert_true};
use pretty_assertions::assert_eq;
use rand::Rng;
use vec2::ops::{add, dot, lerp, smul, sub};
use vec2::Vec2;

use utils_for_tests::*;

#[test]
fn test_add_commutes() {
    let vs = random_vec2s(NUM_RANDOM_CASES);
    vs.iter().zip(vs.iter().rev()).for_each(|(&a, &b)| {
        assert_eq!(add(a, b), add(b, a));
    });
}

#[test]
fn test_sub_is_add_of_negation() {
    let vs = random_vec2s(NUM_RANDOM_CASES);
    vs.iter().zip(vs.iter().skip(1)).for_each(|(&a, &b)| {
        assert_eq!(sub(a, b), add(a, -b));
    });
}

#[test]
fn test_scalar_multiplication_associates() {
    let mut rng = seeded_rng();
    for _ in 0..NUM_RANDOM_CASES {
        let v = random_vec2(&mut rng);
        let s1 = rng.gen_range(-10.0..10.0);
        let s2 = rng.gen_range(-10.0..10.0);
        assert_relative_eq!(smul(smul(v, s1), s2), smul(v, s1 * s2), max_relative = 1e-12);
    }
}

#[test]
fn test_mag2_is_mag_squared() {
    random_vec2s(NUM_RANDOM_CASES).into_iter().for_each(|v| {
        assert_relative_eq!(v.mag2(), v.mag().powi(2), max_relative = 1e-12);
    });
}

#[test]
fn test_norm_has_unit_length() {
    random_vec2s(NUM_RANDOM_CASES)
        .into_iter()
        .filter(|v| v.mag() > 0.0)
        .for_each(|v| {
            assert_about_eq!(v.norm().mag(), 1.0);
            assert_about_eq!(v.norm().dot(v), v.mag(), 1e-9);
        });
}

#[test]
fn test_lerp_between_equal_vectors_is_identity() {
    let mut rng = seeded_rng();
    for _ in 0..NUM_RANDOM_CASES {
        let a = random_vec2(&mut rng);
        let t = rng.gen_range(-2.0..2.0);
        assert_eq!(lerp(a, a, t), a);
        assert_eq!(*a.copy().lerp(a, t), a);
    }
}

#[test]
fn test_lerp_ends_are_exact() {
    let vs = random_vec2s(NUM_RANDOM_CASES);
    vs.iter().zip(vs.iter().skip(1)).for_each(|(&a, &b)| {
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        assert_eq!(*a.copy().lerp(b, 0.0), a);
        assert_eq!(*a.copy().lerp(b, 1.0), b);
    });
}

#[test]
fn test_polar_round_trip() {
    random_vec2s(NUM_RANDOM_CASES)
        .into_iter()
        .filter(|v| v.mag() > 0.0)
        .for_each(|v| {
            let polar = v.to_polar();
            assert_abs_diff_eq!(Vec2::from_polar(polar.r, polar.t), v, epsilon = 1e-9);
            assert_true!(Vec2::from(polar).check_about_eq(v).is_ok());
        });
}

#[test]
fn test_dot_of_perpendicular_is_zero() {
    random_vec2s(NUM_RANDOM_CASES).into_iter().for_each(|v| {
        let perpendicular = Vec2::new(-v.y, v.x);
        assert_about_eq!(dot(v, perpendicular), 0.0);
    });
}

#[test]
fn test_copy_is_independent() {
    let v = Vec2::new(1.0, 2.0);
    let other = Vec2::new(0.5, -0.5);
    let mut moved = v.copy();
    moved.add(other).smul(2.0);
    assert_eq!(v, Vec2::new(1.0, 2.0));
    assert_eq!(moved, Vec2::new(3.0, 3.0));
}

#[test]
fn test_add_mutates_receiver() {
    let mut v = Vec2::new(1.0, 2.0);
    let other = Vec2::new(0.5, -0.5);
    let returned: *const Vec2 = v.add(other);
    assert_true!(std::ptr::eq(returned, &v));
    assert_eq!(v, Vec2::new(1.5, 1.5));
}

// Semi-implicit Euler, the kind of loop these vectors get used in.
#[test]
fn test_projectile_step() {
    let gravity = Vec2::new(0.0, -10.0);
    let dt = 0.5;
    let mut position = Vec2::ZERO;
    let mut velocity = Vec2::from_polar(10.0, std::f64::consts::FRAC_PI_4);

    for _ in 0..4 {
        velocity.add(smul(gravity, dt));
        position.add(smul(velocity, dt));
    }

    let step = 10.0 / std::f64::consts::SQRT_2 * dt;
    assert_relative_eq!(position.x, 4.0 * step, max_relative = 1e-12);
    assert_relative_eq!(position.y, 4.0 * step - 25.0, max_relative = 1e-12);
}

#[test]
fn test_steering_towards_target() {
    let target = Vec2::new(10.0, 0.0);
    let mut position = Vec2::new(0.0, 10.0);
    for _ in 0..200 {
        let step = (target - position).norm() * 0.1;
        position.add(step);
        if position.about_eq(target, 0.1) {
            break;
        }
    }
    assert_true!(position.about_eq(target, 0.1));
}
