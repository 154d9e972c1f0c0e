//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, binds the GPU layer to the window,
//! and drives the `core::Harness` from platform events.

mod entry;
mod icon;
mod runtime;

pub use icon::{default_icon_rgba, IconPolicy, DEFAULT_ICON_SIZE};
pub use runtime::{Runtime, RuntimeConfig};
