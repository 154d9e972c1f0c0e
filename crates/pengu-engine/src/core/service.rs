use crate::paint::Color;

/// Commands the harness (and apps, through `FrameCtx`) issue to the host
/// graphics service.
///
/// Acquisition and release of the underlying context are not part of this
/// trait: the service is constructed when the harness starts and released by
/// dropping it at shutdown.
pub trait GraphicsService {
    /// Resets the drawing surface to `color`.
    fn clear_surface(&mut self, color: Color);

    /// Makes the current frame visible.
    fn present_frame(&mut self);
}

impl<S: GraphicsService + ?Sized> GraphicsService for Box<S> {
    fn clear_surface(&mut self, color: Color) {
        (**self).clear_surface(color);
    }

    fn present_frame(&mut self) {
        (**self).present_frame();
    }
}
