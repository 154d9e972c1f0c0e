//! Logging utilities.
//!
//! This module centralizes logger initialization and the operator-facing
//! diagnostic sink used by the harness. It avoids imposing a specific logging
//! backend beyond the standard `log` facade.

mod init;
mod sink;

pub use init::{init_logging, LoggingConfig};
pub use sink::LogSink;
