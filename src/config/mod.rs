//! Configuration management.
//!
//! A run is configured from, in increasing precedence: built-in defaults, an
//! optional TOML file, `ANONYMIZER_*` environment variables and command line
//! flags.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mongodb_anonymizer::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("anonymizer.toml")?;
//! println!("Fields: {}", config.fields);
//! println!("Ignored: {:?}", config.ignore_collections);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! source_uri = "${PROD_MONGO_URI}"
//! target_uri = "mongodb://localhost:27017/staging"
//! fields = "email,users.age:faker.random.number,orders.notes:null"
//! faker_locale = "fr"
//! ignore_collections = ["sessions", "audit_log"]
//!
//! [logging]
//! level = "info"
//! local_enabled = true
//! local_path = "./logs"
//! local_rotation = "daily"
//! ```
//!
//! Connection strings are held as [`SecretString`] and redacted with
//! [`redact_connection_string`] before they reach a log.

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::{load_config, load_layered};
pub use schema::{AnonymizerConfig, LoggingConfig, DEFAULT_FIELDS, MISSING_URI_MESSAGE};
pub use secret::{
    redact_connection_string, secret_string, secret_string_opt, SecretString, SecretValue,
};
