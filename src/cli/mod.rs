//! CLI interface and argument parsing
//!
//! Flags keep their historical camelCase long names (`--targetUri`,
//! `--fakerLocale`, `--ignoreDocuments`).

pub mod migrate;

use crate::config::{load_layered, secret_string, AnonymizerConfig, SecretString};
use crate::domain::Result;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Copy a MongoDB database into another one, replacing sensitive fields with fake data
#[derive(Parser, Debug)]
#[command(name = "mongodb-anonymizer")]
#[command(version, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Source connection string
    #[arg(short = 'u', long = "uri", value_name = "URI", value_parser = parse_secret)]
    pub uri: Option<SecretString>,

    /// Target connection string (its collections are overwritten)
    #[arg(short = 't', long = "targetUri", value_name = "URI", value_parser = parse_secret)]
    pub target_uri: Option<SecretString>,

    /// Comma separated fields to anonymize: [collection.]field[:directive]
    /// (default: email,name,description,address,city,country,phone,comment,birthdate)
    #[arg(short = 'l', long = "list", value_name = "FIELDS")]
    pub list: Option<String>,

    /// Locale of the generated values (en, fr, pt_BR, zh_CN, zh_TW, ja, ar)
    #[arg(short = 'f', long = "fakerLocale", value_name = "LOCALE")]
    pub faker_locale: Option<String>,

    /// Comma separated collections to skip; they are dropped from the target
    #[arg(short = 'i', long = "ignoreDocuments", value_name = "COLLECTIONS")]
    pub ignore_documents: Option<String>,

    /// Path to an optional TOML configuration file
    #[arg(short = 'c', long, env = "ANONYMIZER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "ANONYMIZER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Seed for reproducible fake data
    #[arg(long)]
    pub seed: Option<u64>,

    /// Read and anonymize without writing to the target
    #[arg(long)]
    pub dry_run: bool,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}

impl Cli {
    /// Configuration with every layer applied, flags last
    ///
    /// The result is not validated yet.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the file or an environment override
    /// cannot be used.
    pub fn resolve_config(&self) -> Result<AnonymizerConfig> {
        let mut config = load_layered(self.config.as_deref())?;
        self.apply_overrides(&mut config);
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut AnonymizerConfig) {
        if let Some(uri) = &self.uri {
            config.source_uri = Some(uri.clone());
        }
        if let Some(uri) = &self.target_uri {
            config.target_uri = Some(uri.clone());
        }
        if let Some(list) = &self.list {
            config.fields = list.clone();
        }
        if let Some(locale) = &self.faker_locale {
            config.faker_locale = Some(locale.clone());
        }
        if let Some(ignored) = &self.ignore_documents {
            config.ignore_collections = AnonymizerConfig::parse_collection_list(ignored);
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.dry_run {
            config.dry_run = true;
        }
    }
}

fn parse_secret(value: &str) -> std::result::Result<SecretString, String> {
    Ok(secret_string(value.to_string()))
}
