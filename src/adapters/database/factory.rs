//! Document store factory
//!
//! Picks the store implementation from the connection string scheme.

use crate::adapters::database::traits::DocumentStore;
use crate::adapters::mongodb::MongoStore;
use crate::config::SecretString;
use crate::domain::{AnonymizerError, Result};
use secrecy::ExposeSecret;
use std::sync::Arc;

/// Supported connection string schemes
pub const SUPPORTED_SCHEMES: &[&str] = &["mongodb://", "mongodb+srv://"];

/// Connect to the store behind `uri`
///
/// `role` ("source" or "target") is only used in logs and error messages.
///
/// # Errors
///
/// Returns a configuration error for an unsupported scheme and a connection
/// error when the store cannot be reached.
pub async fn connect_store(uri: &SecretString, role: &str) -> Result<Arc<dyn DocumentStore>> {
    check_scheme(uri.expose_secret().as_ref(), role)?;

    tracing::info!(role, "Creating MongoDB store");
    let store = MongoStore::connect(uri, role).await?;
    Ok(Arc::new(store) as Arc<dyn DocumentStore>)
}

fn check_scheme(uri: &str, role: &str) -> Result<()> {
    if SUPPORTED_SCHEMES.iter().any(|scheme| uri.starts_with(scheme)) {
        Ok(())
    } else {
        Err(AnonymizerError::Configuration(format!(
            "Unsupported {role} connection string, expected one of: {}",
            SUPPORTED_SCHEMES.join(", ")
        )))
    }
}
