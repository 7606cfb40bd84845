//! Non-mutating operations. None of these touch their arguments.

use crate::Vec2;

pub fn add(v1: Vec2, v2: Vec2) -> Vec2 {
    Vec2::new(v1.x + v2.x, v1.y + v2.y)
}

pub fn sub(v1: Vec2, v2: Vec2) -> Vec2 {
    Vec2::new(v1.x - v2.x, v1.y - v2.y)
}

pub fn smul(v: Vec2, s: f64) -> Vec2 {
    Vec2::new(v.x * s, v.y * s)
}

/// Dividing by zero gives infinite or NaN components.
pub fn sdiv(v: Vec2, s: f64) -> Vec2 {
    Vec2::new(v.x / s, v.y / s)
}

pub fn dot(v1: Vec2, v2: Vec2) -> f64 {
    v1.x * v2.x + v1.y * v2.y
}

/// Unclamped, so `t` outside of `[0, 1]` extrapolates.
/// Exact at both ends: `t == 0` gives `v1` and `t == 1` gives `v2`.
pub fn lerp(v1: Vec2, v2: Vec2, t: f64) -> Vec2 {
    Vec2::new(lerp_scalar(v1.x, v2.x, t), lerp_scalar(v1.y, v2.y, t))
}

// `a + t * (b - a)` keeps `lerp(a, a, t) == a`, but can miss `b` by an ulp at `t == 1`
pub(crate) fn lerp_scalar(a: f64, b: f64, t: f64) -> f64 {
    if t == 1.0 {
        b
    } else {
        a + t * (b - a)
    }
}
