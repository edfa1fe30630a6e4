use log::{debug, error, info, warn};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info) // Default level
            .filter_module("wayfarer", log::LevelFilter::Debug) // More verbose for our app
            .filter_module("reqwest", log::LevelFilter::Warn) // Reduce HTTP noise
            .filter_module("hyper", log::LevelFilter::Warn)
            .filter_module("tokio", log::LevelFilter::Warn) // Reduce tokio noise
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .init();

        info!("Logging system initialized");
    });
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log document store operations
    pub fn store_operation(operation: &str, collection: &str, duration_ms: Option<u64>) {
        match duration_ms {
            Some(duration) => debug!(
                "Store: {} on {} completed in {}ms",
                operation, collection, duration
            ),
            None => debug!("Store: Starting {} on {}", operation, collection),
        }
    }

    /// Log search outcomes
    pub fn search_operation(category: &str, path: Option<&str>, results: Option<(usize, u64)>) {
        match (path, results) {
            (Some(p), Some((rows, total))) => info!(
                "Search: {} via {} path returned {} of {} results",
                category, p, rows, total
            ),
            (Some(p), None) => debug!("Search: Starting {} via {} path", category, p),
            (None, Some((rows, total))) => {
                info!("Search: {} returned {} of {} results", category, rows, total)
            }
            (None, None) => debug!("Search: Starting {}", category),
        }
    }

    /// Log a degraded search (structured path rejected, or store unreachable)
    pub fn search_degraded(category: &str, stage: &str, reason: &dyn std::fmt::Display) {
        warn!("Search: {} degraded at {}: {}", category, stage, reason);
    }

    /// Log errors with context
    pub fn error_with_context(error: &dyn std::error::Error, context: &str) {
        error!("{}: {}", context, error);
    }

    /// Log performance metrics
    pub fn performance_metric(operation: &str, duration_ms: u64, additional_info: Option<&str>) {
        match additional_info {
            Some(info) => info!(
                "Performance: {} took {}ms ({})",
                operation, duration_ms, info
            ),
            None => info!("Performance: {} took {}ms", operation, duration_ms),
        }
    }
}

/// Helper for timing operations
pub struct TimedOperation {
    start: std::time::Instant,
    operation: String,
}

impl TimedOperation {
    pub fn new(operation: &str) -> Self {
        debug!("Starting: {}", operation);
        Self {
            start: std::time::Instant::now(),
            operation: operation.to_string(),
        }
    }

    pub fn finish_with_info(self, info: &str) -> u64 {
        let duration = self.start.elapsed().as_millis() as u64;
        LogContext::performance_metric(&self.operation, duration, Some(info));
        duration
    }
}
