//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! The runtime translates platform events into [`Event`]s via `translate`.

mod translate;
mod types;

pub(crate) use translate::translate_window_event;
pub use types::{Event, Key, KeyState, Modifiers};
