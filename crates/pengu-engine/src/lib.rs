//! Pengu engine crate.
//!
//! This crate owns the render-loop harness and the platform + GPU runtime
//! pieces it drives.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod paint;
