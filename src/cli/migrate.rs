//! Migration command
//!
//! Validates the merged configuration, connects both databases and runs the
//! [`MigrationCoordinator`]. Exit codes: 0 success, 2 configuration error,
//! 4 connection error, 5 any other failure.

use super::Cli;
use crate::adapters::database::{connect_store, DocumentStore};
use crate::anonymization::{FakerGenerator, Generator, Locale, ValueAnonymizer};
use crate::config::{redact_connection_string, AnonymizerConfig};
use crate::core::migration::{MigrationCoordinator, MigrationPlan, MigrationSummary};
use crate::domain::AnonymizerError;
use crate::logging::init_logging;
use anyhow::Context;
use secrecy::ExposeSecret;
use std::io::{self, Write};
use std::sync::Arc;

/// Exit code for a configuration error
pub const EXIT_CONFIGURATION: i32 = 2;

impl Cli {
    /// Resolve the configuration, start logging and run the migration
    ///
    /// Returns the process exit code.
    ///
    /// # Errors
    ///
    /// Only failures to write the summary are returned; run failures are
    /// reported on stderr and turned into an exit code.
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let config = match self.resolve_config() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{e}");
                return Ok(e.exit_code());
            }
        };

        let _guard = match init_logging(&config.logging.level, &config.logging) {
            Ok(guard) => guard,
            Err(e) => {
                eprintln!("Failed to initialize logging: {e}");
                return Ok(e.exit_code());
            }
        };

        tracing::info!(version = env!("CARGO_PKG_VERSION"), "mongodb-anonymizer");

        migrate(config).await
    }
}

/// Validate `config`, connect both databases and copy
///
/// # Errors
///
/// Only failures to write the summary are returned.
pub async fn migrate(config: AnonymizerConfig) -> anyhow::Result<i32> {
    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Configuration validation failed");
        eprintln!("{e}");
        return Ok(EXIT_CONFIGURATION);
    }

    let (Some(source_uri), Some(target_uri)) = (&config.source_uri, &config.target_uri) else {
        return Ok(EXIT_CONFIGURATION);
    };

    tracing::info!(
        source = %redact_connection_string(source_uri.expose_secret().as_ref()),
        target = %redact_connection_string(target_uri.expose_secret().as_ref()),
        "Starting anonymized copy"
    );

    let source = match connect_store(source_uri, "source").await {
        Ok(store) => store,
        Err(e) => return Ok(report_failure(&e, "Failed to connect to source")),
    };
    let target = match connect_store(target_uri, "target").await {
        Ok(store) => store,
        Err(e) => {
            source.close().await;
            return Ok(report_failure(&e, "Failed to connect to target"));
        }
    };

    if config.dry_run {
        println!("DRY RUN MODE - No data will be written to the target");
        println!();
    }

    let summary = match run_migration(source, target, &config).await {
        Ok(summary) => summary,
        Err(e) => return Ok(report_failure(&e, "Migration failed")),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_summary(&mut out, &summary).context("Failed to write migration summary")?;
    out.flush().context("Failed to flush stdout")?;

    Ok(0)
}

/// Build the generator and plan from `config` and run the coordinator
///
/// # Errors
///
/// Returns the first error of the run; both stores are closed either way.
pub async fn run_migration(
    source: Arc<dyn DocumentStore>,
    target: Arc<dyn DocumentStore>,
    config: &AnonymizerConfig,
) -> crate::domain::Result<MigrationSummary> {
    let plan = MigrationPlan {
        field_specs: config.field_specs(),
        ignored_collections: config.ignore_collections.clone(),
        dry_run: config.dry_run,
    };
    let anonymizer = ValueAnonymizer::new(build_generator(config));

    MigrationCoordinator::new(source, target, plan, anonymizer)
        .run()
        .await
}

fn build_generator(config: &AnonymizerConfig) -> Box<dyn Generator> {
    let locale = Locale::resolve(config.faker_locale.as_deref());
    match config.seed {
        Some(seed) => {
            tracing::info!(%locale, seed, "Using seeded generator");
            Box::new(FakerGenerator::with_seed(locale, seed))
        }
        None => Box::new(FakerGenerator::new(locale)),
    }
}

fn report_failure(error: &AnonymizerError, context: &str) -> i32 {
    crate::log_error_with_context!(error, context);
    eprintln!("{context}: {error}");
    error.exit_code()
}

/// Human readable run summary
pub fn write_summary(out: &mut impl Write, summary: &MigrationSummary) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Migration Summary ({}):", summary.run_id)?;
    for collection in &summary.collections {
        writeln!(
            out,
            "  {}: {} documents ({})",
            collection.name,
            collection.documents,
            if collection.fields.is_empty() {
                "copied as is".to_string()
            } else {
                collection.fields.join(", ")
            }
        )?;
    }
    for ignored in &summary.ignored {
        let action = if ignored.dropped {
            "dropped from target"
        } else {
            "skipped"
        };
        writeln!(out, "  {}: ignored, {action}", ignored.name)?;
    }
    writeln!(out, "  Collections: {}", summary.collections.len())?;
    writeln!(out, "  Documents: {}", summary.total_documents())?;
    writeln!(out, "  Duration: {:.2}s", summary.duration.as_secs_f64())?;
    writeln!(out)?;

    if summary.dry_run {
        writeln!(out, "Dry run completed, target unchanged.")?;
    } else {
        writeln!(out, "Migration completed successfully!")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::database::InMemoryStore;
    use crate::config::secret_string;
    use crate::core::migration::{CollectionReport, IgnoredCollection};
    use bson::doc;

    #[tokio::test]
    async fn test_migrate_without_uris_is_configuration_error() {
        let code = migrate(AnonymizerConfig::default()).await.unwrap();
        assert_eq!(code, EXIT_CONFIGURATION);
    }

    #[tokio::test]
    async fn test_migrate_rejects_unsupported_scheme() {
        let config = AnonymizerConfig {
            source_uri: Some(secret_string("postgres://localhost/prod".to_string())),
            target_uri: Some(secret_string("mongodb://localhost/staging".to_string())),
            ..Default::default()
        };
        assert_eq!(migrate(config).await.unwrap(), EXIT_CONFIGURATION);
    }

    #[tokio::test]
    async fn test_run_migration_with_seed_is_reproducible() {
        let config = AnonymizerConfig {
            fields: "email,name".to_string(),
            seed: Some(99),
            ..Default::default()
        };
        let mut outputs = Vec::new();
        for _ in 0..2 {
            let source = Arc::new(InMemoryStore::new("prod").with_collection(
                "users",
                vec![doc! { "email": "a@x.com", "name": "Ann" }],
            ));
            let target = Arc::new(InMemoryStore::new("staging"));
            run_migration(source, target.clone(), &config).await.unwrap();
            outputs.push(target.documents("users").await.unwrap());
        }
        assert_eq!(outputs[0], outputs[1]);
        assert_ne!(outputs[0][0].get_str("email").unwrap(), "a@x.com");
    }

    #[test]
    fn test_write_summary() {
        let mut summary = MigrationSummary::new(false);
        summary.add_collection(CollectionReport {
            name: "users".to_string(),
            documents: 2,
            cleared: 0,
            inserted: 2,
            fields: vec!["email".to_string(), "age".to_string()],
        });
        summary.add_ignored(IgnoredCollection {
            name: "sessions".to_string(),
            target_documents: 5,
            dropped: true,
        });

        let mut out = Vec::new();
        write_summary(&mut out, &summary).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("users: 2 documents (email, age)"));
        assert!(text.contains("sessions: ignored, dropped from target"));
        assert!(text.contains("Documents: 2"));
        assert!(text.contains("Migration completed successfully!"));
    }
}
