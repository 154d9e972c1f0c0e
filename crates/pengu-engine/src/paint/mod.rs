//! Paint model shared between applications and the GPU layer.
//!
//! Scope is deliberately small: a single linear premultiplied color type used
//! for surface clears.

pub mod color;

pub use color::Color;
