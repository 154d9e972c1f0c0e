//! Core engine-facing contracts.
//!
//! This module defines the stable interface between the runtime (platform loop)
//! and applications: the callback contract, the per-frame context, the
//! graphics command seam, and the lifecycle state machine that ties them
//! together. Nothing here depends on winit or wgpu, so the whole lifecycle can
//! be driven from tests with a recording service.

mod app;
mod ctx;
mod harness;
mod service;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, RuntimeCtx};
pub use harness::{Harness, HarnessError, Lifecycle};
pub use service::GraphicsService;
