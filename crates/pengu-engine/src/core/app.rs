use crate::input::Event;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Stop,
}

/// Application contract implemented by higher layers.
///
/// The harness invokes these in lifecycle order: `on_init` once after the
/// graphics service is up, then any number of `on_event`/`on_frame`, then
/// `on_cleanup` once before the service is released.
pub trait App {
    fn on_init(&mut self) {}

    /// Called for translated window events.
    ///
    /// Quit events end the lifecycle regardless of the returned directive.
    fn on_event(&mut self, event: &Event) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per frame tick.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;

    fn on_cleanup(&mut self) {}
}
