use std::fmt::{Display, Formatter};
use std::iter::Sum;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num::traits::Zero;

use crate::ops;
use crate::{OkOrMessage, Polar};

/// A vector with two `f64` components.
///
/// The `&mut self` methods (`add`, `sub`, `smul`, `sdiv`, `lerp`, `normalize`) work in place
/// and return the receiver, so they can be chained.
/// To get a new value instead, use the operators, the functions in [`crate::ops`], or call
/// [`Vec2::copy`] first.
///
/// With `std::ops::Add` (or `Sub`) imported, `v.add(w)` picks the by-value operator and leaves
/// `v` alone. Write `v += w` in that case.
#[derive(
    Default,
    Debug,
    Copy,
    Clone,
    PartialEq,
    derive_more::Add,
    derive_more::Sub,
    derive_more::Neg,
    derive_more::Mul,
    derive_more::Div,
    derive_more::AddAssign,
    derive_more::SubAssign,
    derive_more::MulAssign,
    derive_more::DivAssign,
)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const X: Self = Self::new(1.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Vec2 { x, y }
    }
    /// Missing components become zero. NaN and negative zero count as missing.
    pub fn from_partial(x: Option<f64>, y: Option<f64>) -> Self {
        Self::new(zero_if_missing(x), zero_if_missing(y))
    }
    /// `theta` is in radians, counterclockwise from the +x axis.
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Self::new(theta.cos() * r, theta.sin() * r)
    }

    pub fn add(&mut self, v: Vec2) -> &mut Self {
        self.x += v.x;
        self.y += v.y;
        self
    }
    pub fn sub(&mut self, v: Vec2) -> &mut Self {
        self.x -= v.x;
        self.y -= v.y;
        self
    }
    pub fn smul(&mut self, s: f64) -> &mut Self {
        self.x *= s;
        self.y *= s;
        self
    }
    pub fn sdiv(&mut self, s: f64) -> &mut Self {
        self.x /= s;
        self.y /= s;
        self
    }
    /// Moves `self` towards `v` by `t`, same as [`ops::lerp`].
    pub fn lerp(&mut self, v: Vec2, t: f64) -> &mut Self {
        self.x = ops::lerp_scalar(self.x, v.x, t);
        self.y = ops::lerp_scalar(self.y, v.y, t);
        self
    }
    pub fn normalize(&mut self) -> &mut Self {
        let m = self.magnitude_or_one();
        self.sdiv(m)
    }

    pub fn copy(&self) -> Self {
        Self::new(self.x, self.y)
    }
    pub fn to_polar(&self) -> Polar {
        Polar::new(self.mag(), self.y.atan2(self.x))
    }
    pub fn mag(&self) -> f64 {
        self.mag2().sqrt()
    }
    pub fn mag2(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }
    pub fn dot(&self, other: Vec2) -> f64 {
        ops::dot(*self, other)
    }
    /// Unit vector in the same direction. The zero vector stays zero.
    pub fn norm(&self) -> Self {
        ops::sdiv(*self, self.magnitude_or_one())
    }
    // NaN lengths are also replaced, so a NaN vector normalizes to itself
    fn magnitude_or_one(&self) -> f64 {
        let m = self.mag();
        if m == 0.0 || m.is_nan() {
            1.0
        } else {
            m
        }
    }

    pub fn about_eq(&self, other: Self, tolerance: f64) -> bool {
        (*self - other).mag() < tolerance
    }
    pub fn check_about_eq(&self, other: Self) -> OkOrMessage {
        let tolerance = 0.001;
        if self.about_eq(other, tolerance) {
            Ok(())
        } else {
            Err(format!(
                "\nVectors too far apart:\n\tv1: {}\n\tv2: {}\n",
                self, other
            ))
        }
    }
}

fn zero_if_missing(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v != 0.0 && !v.is_nan() => v,
        _ => 0.0,
    }
}

// Always plain decimal, so `1e21` prints as `1000000000000000000000` and `1e-7` as `0.0000001`
impl Display for Vec2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "vec2 {{ {}, {} }}", self.x, self.y)
    }
}

impl Zero for Vec2 {
    fn zero() -> Self {
        Self::ZERO
    }
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl Sum for Vec2 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |total, v| total + v)
    }
}
impl<'a> Sum<&'a Vec2> for Vec2 {
    fn sum<I: Iterator<Item = &'a Vec2>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
impl From<[f64; 2]> for Vec2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}
impl From<Vec2> for (f64, f64) {
    fn from(v: Vec2) -> Self {
        (v.x, v.y)
    }
}
impl From<Vec2> for [f64; 2] {
    fn from(v: Vec2) -> Self {
        [v.x, v.y]
    }
}
impl<U> From<euclid::Vector2D<f64, U>> for Vec2 {
    fn from(v: euclid::Vector2D<f64, U>) -> Self {
        Self::new(v.x, v.y)
    }
}
impl<U> From<Vec2> for euclid::Vector2D<f64, U> {
    fn from(v: Vec2) -> Self {
        euclid::vec2(v.x, v.y)
    }
}

impl AbsDiffEq for Vec2 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}
impl RelativeEq for Vec2 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }
    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}
impl UlpsEq for Vec2 {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }
    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps) && self.y.ulps_eq(&other.y, epsilon, max_ulps)
    }
}
