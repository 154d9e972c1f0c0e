use std::fmt;
use std::sync::Arc;

use log::Level;

/// Operator-visible diagnostic sink.
///
/// The harness reports lifecycle diagnostics (most importantly initialization
/// failures) through this callback rather than through a global. The default
/// sink forwards to the `log` facade under the `pengu` target.
#[derive(Clone)]
pub struct LogSink {
    func: Arc<dyn Fn(Level, &str) + Send + Sync>,
}

impl LogSink {
    /// Wraps a custom callback.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(Level, &str) + Send + Sync + 'static,
    {
        Self { func: Arc::new(func) }
    }

    /// A sink that drops every message.
    pub fn silent() -> Self {
        Self::new(|_, _| {})
    }

    pub fn emit(&self, level: Level, message: &str) {
        (self.func)(level, message);
    }

    #[inline]
    pub fn error(&self, message: &str) {
        self.emit(Level::Error, message);
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new(|level, message| log::log!(target: "pengu", level, "{message}"))
    }
}

impl fmt::Debug for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogSink").finish_non_exhaustive()
    }
}
