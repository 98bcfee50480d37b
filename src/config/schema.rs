//! Configuration schema types

use crate::anonymization::FieldSpec;
use crate::config::SecretString;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

/// Field list used when none is configured
pub const DEFAULT_FIELDS: &str =
    "email,name,description,address,city,country,phone,comment,birthdate";

/// Message shown when either connection string is missing
pub const MISSING_URI_MESSAGE: &str =
    "You must specify a source and a target uri (type -h for help)";

const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const VALID_ROTATIONS: &[&str] = &["daily", "hourly", "never"];

/// Root configuration, mapped from the TOML file
///
/// Every key is optional so a run can be configured from flags alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizerConfig {
    /// Connection string of the database to read from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_uri: Option<SecretString>,

    /// Connection string of the database to overwrite
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_uri: Option<SecretString>,

    /// Comma separated field rules (`[collection.]field[:directive]`)
    #[serde(default = "default_fields")]
    pub fields: String,

    /// Locale for generated values (en, fr, pt_BR, zh_CN, zh_TW, ja, ar)
    #[serde(default)]
    pub faker_locale: Option<String>,

    /// Collections removed from the target instead of copied
    #[serde(default)]
    pub ignore_collections: Vec<String>,

    /// Seed for reproducible fake data
    #[serde(default)]
    pub seed: Option<u64>,

    /// Read and anonymize without writing to the target
    #[serde(default)]
    pub dry_run: bool,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AnonymizerConfig {
    fn default() -> Self {
        Self {
            source_uri: None,
            target_uri: None,
            fields: default_fields(),
            faker_locale: None,
            ignore_collections: Vec::new(),
            seed: None,
            dry_run: false,
            logging: LoggingConfig::default(),
        }
    }
}

impl AnonymizerConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a connection string is missing or a value is invalid
    pub fn validate(&self) -> Result<(), String> {
        if !has_value(&self.source_uri) || !has_value(&self.target_uri) {
            return Err(MISSING_URI_MESSAGE.to_string());
        }

        if self.ignore_collections.iter().any(|c| c.trim().is_empty()) {
            return Err("ignore_collections must not contain empty names".to_string());
        }

        self.logging.validate()
    }

    /// Parsed field rules, in configuration order
    pub fn field_specs(&self) -> Vec<FieldSpec> {
        FieldSpec::parse_list(&self.fields)
    }

    /// Split a comma separated collection list, dropping blanks
    pub fn parse_collection_list(list: &str) -> Vec<String> {
        list.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }
}

fn has_value(uri: &Option<SecretString>) -> bool {
    uri.as_ref().is_some_and(|u| !u.expose_secret().is_empty())
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid logging.level '{}'. Must be one of: {}",
                self.level,
                VALID_LOG_LEVELS.join(", ")
            ));
        }

        if !VALID_ROTATIONS.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                VALID_ROTATIONS.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path is required when local logging is enabled".to_string());
        }

        Ok(())
    }
}

fn default_fields() -> String {
    DEFAULT_FIELDS.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    fn valid_config() -> AnonymizerConfig {
        AnonymizerConfig {
            source_uri: Some(secret_string("mongodb://localhost/prod".to_string())),
            target_uri: Some(secret_string("mongodb://localhost/staging".to_string())),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = AnonymizerConfig::default();
        assert_eq!(config.fields, DEFAULT_FIELDS);
        assert!(!config.dry_run);
        assert!(config.ignore_collections.is_empty());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.local_rotation, "daily");
    }

    #[test]
    fn test_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_missing_target_uri() {
        let config = AnonymizerConfig {
            target_uri: None,
            ..valid_config()
        };
        assert_eq!(config.validate().unwrap_err(), MISSING_URI_MESSAGE);
    }

    #[test]
    fn test_blank_source_uri() {
        let config = AnonymizerConfig {
            source_uri: Some(secret_string("   ".to_string())),
            ..valid_config()
        };
        assert_eq!(config.validate().unwrap_err(), MISSING_URI_MESSAGE);
    }

    #[test]
    fn test_invalid_rotation() {
        let mut config = valid_config();
        config.logging.local_rotation = "size".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.contains("local_rotation"));
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = valid_config();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().unwrap_err().contains("logging.level"));
    }

    #[test]
    fn test_field_specs_from_default_list() {
        let specs = AnonymizerConfig::default().field_specs();
        assert_eq!(specs.len(), 9);
        assert_eq!(specs[0].field, "email");
        assert_eq!(specs[8].field, "birthdate");
    }

    #[test]
    fn test_parse_collection_list() {
        assert_eq!(
            AnonymizerConfig::parse_collection_list(" audit, ,sessions "),
            vec!["audit".to_string(), "sessions".to_string()]
        );
    }

    #[test]
    fn test_deserialize_minimal_toml() {
        let config: AnonymizerConfig = toml::from_str(
            r#"
source_uri = "mongodb://localhost/prod"
target_uri = "mongodb://localhost/staging"
ignore_collections = ["sessions"]

[logging]
level = "debug"
"#,
        )
        .unwrap();

        assert_eq!(config.fields, DEFAULT_FIELDS);
        assert_eq!(config.ignore_collections, vec!["sessions".to_string()]);
        assert_eq!(config.logging.level, "debug");
        assert!(config.validate().is_ok());
    }
}
