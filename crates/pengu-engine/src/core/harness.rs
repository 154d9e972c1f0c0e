use std::fmt;

use crate::input::Event;
use crate::logging::LogSink;
use crate::time::FrameTime;

use super::app::{App, AppControl};
use super::ctx::{FrameCtx, RuntimeCtx};
use super::service::GraphicsService;

/// Lifecycle states of the harness.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Lifecycle {
    Uninitialized,
    Running,
    Terminated,
}

/// Failures surfaced by the harness.
#[derive(Debug)]
pub enum HarnessError {
    /// The windowing/graphics service could not be started. Fatal.
    Initialization(anyhow::Error),
    /// `start` was called outside the `Uninitialized` state.
    AlreadyStarted(Lifecycle),
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessError::Initialization(err) => write!(f, "initialization failed: {err:#}"),
            HarnessError::AlreadyStarted(state) => {
                write!(f, "harness cannot start from state {state:?}")
            }
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HarnessError::Initialization(err) => {
                let inner: &(dyn std::error::Error + 'static) = err.as_ref();
                Some(inner)
            }
            HarnessError::AlreadyStarted(_) => None,
        }
    }
}

/// Render-loop harness.
///
/// Owns the application and, while running, the graphics service `S`. The
/// service is the only handle to the window/context; it is created by
/// [`start`](Self::start), lent to every frame callback, and dropped exactly
/// once by [`shutdown`](Self::shutdown). Once terminated, further frames and
/// events are ignored and never reach the application.
pub struct Harness<A, S> {
    app:     A,
    service: Option<S>,
    state:   Lifecycle,
    log:     LogSink,
}

impl<A, S> Harness<A, S>
where
    A: App,
    S: GraphicsService,
{
    pub fn new(app: A, log: LogSink) -> Self {
        Self {
            app,
            service: None,
            state: Lifecycle::Uninitialized,
            log,
        }
    }

    pub fn state(&self) -> Lifecycle {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == Lifecycle::Running
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    /// Returns the live service; `None` unless running.
    pub fn service(&self) -> Option<&S> {
        self.service.as_ref()
    }

    pub fn service_mut(&mut self) -> Option<&mut S> {
        self.service.as_mut()
    }

    /// Brings the service up via `connect` and moves to `Running`.
    ///
    /// On failure the error is reported once through the log sink and the
    /// harness terminates without invoking any app callback.
    pub fn start<F>(&mut self, connect: F) -> Result<(), HarnessError>
    where
        F: FnOnce() -> anyhow::Result<S>,
    {
        if self.state != Lifecycle::Uninitialized {
            return Err(HarnessError::AlreadyStarted(self.state));
        }

        match connect() {
            Ok(service) => {
                self.service = Some(service);
                self.state = Lifecycle::Running;
                log::debug!("harness running");
                self.app.on_init();
                Ok(())
            }
            Err(err) => Err(self.abort(err)),
        }
    }

    /// Terminates before startup completed, reporting `err` through the sink.
    ///
    /// Used for failures that happen before the service can even be
    /// requested (e.g. the event loop could not be created).
    pub fn abort(&mut self, err: anyhow::Error) -> HarnessError {
        let err = HarnessError::Initialization(err);
        self.log.error(&err.to_string());
        self.service = None;
        self.state = Lifecycle::Terminated;
        err
    }

    /// Drives one frame tick.
    ///
    /// Returns `Stop` when the lifecycle has ended, either before this call or
    /// as a result of it.
    pub fn frame(&mut self, time: FrameTime) -> AppControl {
        let Some(service) = self.service.as_mut() else {
            return AppControl::Stop;
        };

        let mut runtime = RuntimeCtx::default();
        let control = {
            let mut ctx = FrameCtx {
                gfx: service,
                time,
                runtime: &mut runtime,
            };
            self.app.on_frame(&mut ctx)
        };

        if control == AppControl::Stop || runtime.shutdown_requested() {
            self.shutdown();
            return AppControl::Stop;
        }

        AppControl::Continue
    }

    /// Delivers an event; quit events and `Stop` end the lifecycle.
    pub fn event(&mut self, event: &Event) -> AppControl {
        if !self.is_running() {
            return AppControl::Stop;
        }

        let control = self.app.on_event(event);

        if control == AppControl::Stop || event.is_quit() {
            self.shutdown();
            return AppControl::Stop;
        }

        AppControl::Continue
    }

    /// Runs app cleanup and releases the service. Idempotent.
    pub fn shutdown(&mut self) {
        if self.state != Lifecycle::Running {
            self.state = Lifecycle::Terminated;
            return;
        }

        self.app.on_cleanup();

        // Dropping the service releases the context and destroys the window.
        drop(self.service.take());
        self.state = Lifecycle::Terminated;
        log::debug!("harness terminated");
    }
}
