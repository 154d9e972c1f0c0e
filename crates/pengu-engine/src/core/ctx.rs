use crate::paint::Color;
use crate::time::FrameTime;

use super::service::GraphicsService;

/// Runtime context passed to the application.
///
/// Requests are recorded and applied by the harness after the current callback
/// returns.
#[derive(Debug, Default)]
pub struct RuntimeCtx {
    shutdown_requested: bool,
}

impl RuntimeCtx {
    /// Ends the lifecycle once the current frame returns.
    pub fn request_shutdown(&mut self) {
        self.shutdown_requested = true;
    }

    pub fn shutdown_requested(&self) -> bool {
        self.shutdown_requested
    }
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// `'a` is the duration of the callback invocation.
pub struct FrameCtx<'a> {
    pub gfx:     &'a mut dyn GraphicsService,
    pub time:    FrameTime,
    pub runtime: &'a mut RuntimeCtx,
}

impl<'a> FrameCtx<'a> {
    /// Clears the surface with `clear` and presents the frame.
    pub fn clear_and_present(&mut self, clear: Color) {
        self.gfx.clear_surface(clear);
        self.gfx.present_frame();
    }
}
