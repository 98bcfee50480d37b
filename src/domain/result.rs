//! Result type alias using [`AnonymizerError`]

use super::errors::AnonymizerError;

/// Result type alias for anonymizer operations
///
/// # Examples
///
/// ```
/// use mongodb_anonymizer::domain::{AnonymizerError, Result};
///
/// fn require_uri(uri: Option<&str>) -> Result<&str> {
///     uri.ok_or_else(|| AnonymizerError::Configuration("uri is required".to_string()))
/// }
///
/// assert!(require_uri(None).is_err());
/// ```
pub type Result<T> = std::result::Result<T, AnonymizerError>;
