use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::Vec2;

/// A vector as a length and a direction.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct Polar {
    /// magnitude
    pub r: f64,
    /// radians counterclockwise from +x, in `[-PI, PI]` when it comes from [`Vec2::to_polar`]
    pub t: f64,
}

impl Polar {
    pub const fn new(r: f64, t: f64) -> Self {
        Polar { r, t }
    }
    pub fn to_vec2(&self) -> Vec2 {
        Vec2::from_polar(self.r, self.t)
    }
}

impl From<Vec2> for Polar {
    fn from(v: Vec2) -> Self {
        v.to_polar()
    }
}
impl From<Polar> for Vec2 {
    fn from(p: Polar) -> Self {
        p.to_vec2()
    }
}

impl AbsDiffEq for Polar {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.r.abs_diff_eq(&other.r, epsilon) && self.t.abs_diff_eq(&other.t, epsilon)
    }
}
impl RelativeEq for Polar {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }
    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.r.relative_eq(&other.r, epsilon, max_relative)
            && self.t.relative_eq(&other.t, epsilon, max_relative)
    }
}
impl UlpsEq for Polar {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }
    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.r.ulps_eq(&other.r, epsilon, max_ulps) && self.t.ulps_eq(&other.t, epsilon, max_ulps)
    }
}
