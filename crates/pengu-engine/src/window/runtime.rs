use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

use crate::core::{App, AppControl, Harness, HarnessError, Lifecycle};
use crate::device::GpuInit;
use crate::input::{translate_window_event, Event};
use crate::logging::LogSink;
use crate::time::FrameClock;

use super::entry::WindowEntry;
use super::IconPolicy;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    /// Initial inner width in logical pixels.
    pub width: u32,
    /// Initial inner height in logical pixels.
    pub height: u32,
    pub icon: IconPolicy,
    /// Receives operator-facing lifecycle diagnostics.
    pub log_sink: LogSink,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "pengu".to_string(),
            width: 640,
            height: 480,
            icon: IconPolicy::Default,
            log_sink: LogSink::default(),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Runs `app` until it quits.
    ///
    /// Returns `Ok(())` on normal termination. Initialization failures have
    /// already been reported through `config.log_sink` when this returns
    /// `Err`.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + App,
    {
        // Frame time counts from here, so window and GPU setup are included.
        let clock = FrameClock::new();

        let mut harness: Harness<A, WindowEntry> = Harness::new(app, config.log_sink.clone());

        let event_loop = match EventLoop::new() {
            Ok(event_loop) => event_loop,
            Err(e) => {
                let err = anyhow::Error::new(e).context("failed to create winit EventLoop");
                return Err(harness.abort(err).into());
            }
        };

        // Continuous redraw is requested explicitly from `about_to_wait`.
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut state = AppState {
            config,
            gpu_init,
            harness,
            clock,
            failure: None,
        };

        let loop_result = event_loop.run_app(&mut state);

        // The loop may return without `exiting` having been observed.
        state.harness.shutdown();

        if let Some(err) = state.failure {
            return Err(err.into());
        }

        loop_result.context("winit event loop terminated with error")?;
        Ok(())
    }
}

struct AppState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    harness: Harness<A, WindowEntry>,
    clock: FrameClock,
    failure: Option<HarnessError>,
}

impl<A> AppState<A>
where
    A: App + 'static,
{
    fn start(&mut self, event_loop: &ActiveEventLoop) {
        let (config, gpu_init) = (&self.config, self.gpu_init.clone());

        match self
            .harness
            .start(|| WindowEntry::create(event_loop, config, gpu_init))
        {
            Ok(()) => {
                if let Some(entry) = self.harness.service() {
                    entry.request_redraw();
                }
            }
            Err(err) => {
                self.failure = Some(err);
                event_loop.exit();
            }
        }
    }

    fn redraw(&mut self) {
        let time = self.clock.tick();
        if self.harness.frame(time) == AppControl::Stop {
            return;
        }

        let fatal = self.harness.service().is_some_and(WindowEntry::is_fatal);
        if fatal {
            log::error!("graphics surface is unrecoverable; shutting down");
            self.harness.shutdown();
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Single window; later resumes (mobile) reuse the running service.
        if self.harness.state() == Lifecycle::Uninitialized {
            self.start(event_loop);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        match self.harness.service() {
            Some(entry) => entry.request_redraw(),
            None => event_loop.exit(),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if !self.harness.is_running() {
            event_loop.exit();
            return;
        }

        // Runtime-managed surface handling first, so the app sees a consistent size.
        match &event {
            WindowEvent::RedrawRequested => self.redraw(),

            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.harness.service_mut() {
                    entry.resize(*new_size);
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.harness.service_mut() {
                    entry.refresh_size();
                }
            }

            _ => {}
        }

        if let Some(ev) = translate_window_event(&event) {
            self.harness.event(&ev);
        }

        if !self.harness.is_running() {
            event_loop.exit();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if self.harness.is_running() {
            self.harness.event(&Event::Quit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_starter_window() {
        let config = RuntimeConfig::default();
        assert_eq!((config.width, config.height), (640, 480));
        assert_eq!(config.icon, IconPolicy::Default);
    }
}
