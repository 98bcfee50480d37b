//! Logging and observability
//!
//! Structured logging through `tracing`, with an optional JSON file layer.
//!
//! # Example
//!
//! ```no_run
//! use mongodb_anonymizer::config::LoggingConfig;
//! use mongodb_anonymizer::logging::init_logging;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!(collection = "users", "Anonymizing");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of a collection copy
///
/// # Example
///
/// ```no_run
/// use mongodb_anonymizer::log_collection_start;
///
/// let fields = vec!["email", "name"];
/// log_collection_start!("users", &fields);
/// ```
#[macro_export]
macro_rules! log_collection_start {
    ($collection:expr, $fields:expr) => {
        tracing::info!(
            collection = %$collection,
            fields = ?$fields,
            "Anonymizing collection"
        );
    };
}

/// Log the completion of a collection copy
///
/// # Example
///
/// ```no_run
/// use mongodb_anonymizer::log_collection_complete;
/// use std::time::Duration;
///
/// log_collection_complete!("users", 42, Duration::from_millis(350));
/// ```
#[macro_export]
macro_rules! log_collection_complete {
    ($collection:expr, $count:expr, $duration:expr) => {
        tracing::info!(
            collection = %$collection,
            count = $count,
            duration_ms = $duration.as_millis() as u64,
            "Collection copied"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use mongodb_anonymizer::domain::AnonymizerError;
/// use mongodb_anonymizer::log_error_with_context;
///
/// let error = AnonymizerError::Connection("timeout".to_string());
/// log_error_with_context!(&error, "Failed to reach target");
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
