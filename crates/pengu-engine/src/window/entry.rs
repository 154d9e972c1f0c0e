use anyhow::{Context, Result};
use ouroboros::self_referencing;
use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use crate::core::GraphicsService;
use crate::device::{Gpu, GpuInit};
use crate::paint::Color;

use super::RuntimeConfig;

/// The window and the GPU context bound to it.
///
/// This is the graphics service the runtime hands to the harness. Dropping it
/// releases the GPU context first, then destroys the window.
#[self_referencing]
pub(crate) struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

impl WindowEntry {
    /// Creates the window described by `config` and binds a GPU context to it.
    pub(crate) fn create(
        event_loop: &ActiveEventLoop,
        config: &RuntimeConfig,
        gpu_init: GpuInit,
    ) -> Result<Self> {
        let icon = config.icon.to_icon().context("invalid window icon")?;

        let attrs = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(LogicalSize::new(config.width as f64, config.height as f64))
            .with_window_icon(Some(icon));

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        WindowEntryTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
    }

    pub(crate) fn request_redraw(&self) {
        self.with_window(|w| w.request_redraw());
    }

    pub(crate) fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.with_gpu_mut(|gpu| gpu.resize(new_size));
        self.request_redraw();
    }

    /// Re-reads the drawable size from the window (scale factor changes).
    pub(crate) fn refresh_size(&mut self) {
        let new_size = self.with_window(|w| w.inner_size());
        self.resize(new_size);
    }

    pub(crate) fn is_fatal(&self) -> bool {
        self.with_gpu(|gpu| gpu.is_fatal())
    }
}

impl GraphicsService for WindowEntry {
    fn clear_surface(&mut self, color: Color) {
        self.with_gpu_mut(|gpu| gpu.clear_surface(color));
    }

    fn present_frame(&mut self) {
        self.with_mut(|fields| {
            fields.window.pre_present_notify();
            fields.gpu.present_frame();
        });
    }
}
