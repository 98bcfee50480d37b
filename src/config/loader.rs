//! Configuration loader with TOML parsing and environment variable overrides
//!
//! Layers are applied in order: defaults, config file, `ANONYMIZER_*`
//! environment variables. Command line flags are applied last by the CLI.

use super::schema::AnonymizerConfig;
use super::secret::secret_string;
use crate::domain::errors::AnonymizerError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads and validates configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`AnonymizerConfig`]
/// 4. Applies environment variable overrides (`ANONYMIZER_*` prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns a configuration error if the file cannot be read or parsed, a
/// referenced variable is unset, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use mongodb_anonymizer::config::load_config;
///
/// let config = load_config("anonymizer.toml").expect("Failed to load config");
/// println!("{}", config.fields);
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<AnonymizerConfig> {
    let config = load_layered(Some(path.as_ref()))?;

    config.validate().map_err(|e| {
        AnonymizerError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Loads defaults, the optional file and environment overrides without validating
///
/// The CLI validates after its own flags are merged on top.
pub fn load_layered(path: Option<&Path>) -> Result<AnonymizerConfig> {
    let mut config = match path {
        Some(path) => read_config_file(path)?,
        None => AnonymizerConfig::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    Ok(config)
}

fn read_config_file(path: &Path) -> Result<AnonymizerConfig> {
    if !path.exists() {
        return Err(AnonymizerError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        AnonymizerError::Configuration(format!(
            "Failed to read configuration file {}: {e}",
            path.display()
        ))
    })?;

    let contents = substitute_env_vars(&contents, |key| std::env::var(key).ok())?;

    Ok(toml::from_str(&contents)?)
}

/// Substitutes `${VAR_NAME}` placeholders outside comment lines
///
/// # Errors
///
/// Returns an error naming every referenced variable that is not set
fn substitute_env_vars<F>(input: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| AnonymizerError::Configuration(format!("Invalid placeholder pattern: {e}")))?;
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let processed = re.replace_all(line, |caps: &regex::Captures<'_>| {
            let name = &caps[1];
            lookup(name).unwrap_or_else(|| {
                if !missing_vars.iter().any(|m| m == name) {
                    missing_vars.push(name.to_string());
                }
                String::new()
            })
        });
        result.push_str(&processed);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(AnonymizerError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies `ANONYMIZER_*` overrides
///
/// # Errors
///
/// Returns an error if a numeric or boolean override cannot be parsed
fn apply_env_overrides<F>(config: &mut AnonymizerConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("ANONYMIZER_SOURCE_URI") {
        config.source_uri = Some(secret_string(val));
    }
    if let Some(val) = lookup("ANONYMIZER_TARGET_URI") {
        config.target_uri = Some(secret_string(val));
    }
    if let Some(val) = lookup("ANONYMIZER_FIELDS") {
        config.fields = val;
    }
    if let Some(val) = lookup("ANONYMIZER_FAKER_LOCALE") {
        config.faker_locale = Some(val);
    }
    if let Some(val) = lookup("ANONYMIZER_IGNORE_COLLECTIONS") {
        config.ignore_collections = AnonymizerConfig::parse_collection_list(&val);
    }
    if let Some(val) = lookup("ANONYMIZER_SEED") {
        let seed = val.trim().parse().map_err(|_| {
            AnonymizerError::Configuration(format!(
                "ANONYMIZER_SEED must be an integer, got '{val}'"
            ))
        })?;
        config.seed = Some(seed);
    }
    if let Some(val) = lookup("ANONYMIZER_DRY_RUN") {
        config.dry_run = parse_bool("ANONYMIZER_DRY_RUN", &val)?;
    }

    if let Some(val) = lookup("ANONYMIZER_LOG_LEVEL") {
        config.logging.level = val;
    }
    if let Some(val) = lookup("ANONYMIZER_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_bool("ANONYMIZER_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Some(val) = lookup("ANONYMIZER_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Some(val) = lookup("ANONYMIZER_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(AnonymizerError::Configuration(format!(
            "{key} must be a boolean, got '{value}'"
        ))),
    }
}
