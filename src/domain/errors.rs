//! Domain error types
//!
//! Every failure in a run is fatal. The variants mirror the points where a run
//! can stop: startup configuration, connecting to a store, resolving a field
//! directive, and reading or writing collections.

use thiserror::Error;

/// Main error type for an anonymization run
#[derive(Debug, Error)]
pub enum AnonymizerError {
    /// Missing or invalid settings (connection strings, log level, config file)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Source or target store unreachable
    #[error("Connection error: {0}")]
    Connection(String),

    /// A JSON directive could not be decoded or parsed
    #[error("Malformed directive for field '{field}': {directive} ({reason})")]
    MalformedDirective {
        field: String,
        directive: String,
        reason: String,
    },

    /// The generator has no `namespace.method` entry
    #[error("Unknown generator: {namespace}.{method}")]
    UnknownGenerator { namespace: String, method: String },

    /// Read, delete or insert failure
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl AnonymizerError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AnonymizerError::Configuration(_) => 2,
            AnonymizerError::Connection(_) => 4,
            _ => 5,
        }
    }

    /// Shorthand for an unknown generator call
    pub fn unknown_generator(namespace: impl Into<String>, method: impl Into<String>) -> Self {
        AnonymizerError::UnknownGenerator {
            namespace: namespace.into(),
            method: method.into(),
        }
    }
}

/// Document store failures
///
/// Driver errors are flattened to strings so callers never depend on the
/// driver's error types.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to list collections on {store}: {reason}")]
    ListCollectionsFailed { store: String, reason: String },

    #[error("Failed to read collection '{collection}': {reason}")]
    ReadFailed { collection: String, reason: String },

    #[error("Failed to count documents in '{collection}': {reason}")]
    CountFailed { collection: String, reason: String },

    #[error("Failed to clear collection '{collection}': {reason}")]
    DeleteFailed { collection: String, reason: String },

    #[error("Failed to drop collection '{collection}': {reason}")]
    DropFailed { collection: String, reason: String },

    #[error("Failed to insert into '{collection}': {reason}")]
    InsertFailed { collection: String, reason: String },
}

impl From<toml::de::Error> for AnonymizerError {
    fn from(err: toml::de::Error) -> Self {
        AnonymizerError::Configuration(format!("Failed to parse TOML: {err}"))
    }
}
