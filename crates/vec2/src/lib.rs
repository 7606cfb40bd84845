//! Two-dimensional `f64` vectors.
//!
//! [`Vec2`] methods that take `&mut self` mutate the receiver and return it for chaining.
//! The free functions in [`ops`] and the operator traits always produce new values.

mod polar;
pub use polar::Polar;

mod vec2;
pub use vec2::Vec2;

pub mod ops;

pub type OkOrMessage = Result<(), String>;
