//! Logging and observability
//!
//! Structured logging through `tracing`:
//! - Configurable log levels
//! - JSON-formatted local file logs with rotation
//!
//! # Example
//!
//! ```no_run
//! use bngl_export::logging::init_logging;
//! use bngl_export::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of an export operation
///
/// # Example
///
/// ```no_run
/// use bngl_export::log_export_start;
/// use bngl_export::core::export::RateMode;
///
/// log_export_start!(RateMode::Simulator, 12);
/// ```
#[macro_export]
macro_rules! log_export_start {
    ($mode:expr, $rule_count:expr) => {
        tracing::info!(
            mode = %$mode,
            rule_count = $rule_count,
            "Starting BNGL export"
        );
    };
}

/// Log the completion of an export operation
///
/// # Example
///
/// ```no_run
/// use bngl_export::log_export_complete;
/// use std::time::Duration;
///
/// let count = 42;
/// let duration = Duration::from_millis(3);
/// log_export_complete!(count, duration);
/// ```
#[macro_export]
macro_rules! log_export_complete {
    ($count:expr, $duration:expr) => {
        tracing::info!(
            count = $count,
            duration_ms = $duration.as_millis() as u64,
            "BNGL export completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use bngl_export::log_error_with_context;
/// use bngl_export::domain::BnglError;
///
/// let error = BnglError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
