use business::domain::logger::{LogLevel, Logger};
use tracing::{debug, error, info, warn};

/// `Logger` adapter that forwards use case messages to the `tracing` subscriber.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => debug!(target: "storefront", "{}", message),
            LogLevel::Info => info!(target: "storefront", "{}", message),
            LogLevel::Warn => warn!(target: "storefront", "{}", message),
            LogLevel::Error => error!(target: "storefront", "{}", message),
        }
    }
}
