//! Migration coordinator - copies every source collection into the target
//!
//! Collections are processed one at a time: read fully, anonymized in
//! memory, then the target collection is cleared and bulk inserted. Any error
//! aborts the run. Collections already written stay as written.

use super::summary::{CollectionReport, IgnoredCollection, MigrationSummary};
use crate::adapters::database::DocumentStore;
use crate::anonymization::{FieldSpec, RuleSet, ValueAnonymizer};
use crate::domain::Result;
use std::sync::Arc;
use std::time::Instant;

/// What to copy and how
#[derive(Debug, Clone, Default)]
pub struct MigrationPlan {
    /// Field rules, compiled per collection
    pub field_specs: Vec<FieldSpec>,

    /// Collections that are not copied and are dropped from the target
    pub ignored_collections: Vec<String>,

    /// Read and anonymize without touching the target
    pub dry_run: bool,
}

impl MigrationPlan {
    pub fn is_ignored(&self, collection: &str) -> bool {
        self.ignored_collections.iter().any(|c| c == collection)
    }
}

/// Owns both stores for the duration of a run
pub struct MigrationCoordinator {
    source: Arc<dyn DocumentStore>,
    target: Arc<dyn DocumentStore>,
    plan: MigrationPlan,
    anonymizer: ValueAnonymizer,
}

impl MigrationCoordinator {
    pub fn new(
        source: Arc<dyn DocumentStore>,
        target: Arc<dyn DocumentStore>,
        plan: MigrationPlan,
        anonymizer: ValueAnonymizer,
    ) -> Self {
        Self {
            source,
            target,
            plan,
            anonymizer,
        }
    }

    /// Run the migration
    ///
    /// Both stores are closed before returning, whether the run succeeded or
    /// not.
    ///
    /// # Errors
    ///
    /// Returns the first store, directive or generator error encountered.
    pub async fn run(mut self) -> Result<MigrationSummary> {
        let start_time = Instant::now();
        let mut summary = MigrationSummary::new(self.plan.dry_run);

        tracing::info!(
            run_id = %summary.run_id,
            source = self.source.name(),
            target = self.target.name(),
            dry_run = self.plan.dry_run,
            "Starting migration"
        );

        let outcome = self.migrate_all(&mut summary).await;

        self.source.close().await;
        self.target.close().await;

        outcome?;

        let summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();
        Ok(summary)
    }

    async fn migrate_all(&mut self, summary: &mut MigrationSummary) -> Result<()> {
        let collections = self.source.list_collections().await?;
        tracing::debug!(count = collections.len(), "Listed source collections");

        for collection in &collections {
            if self.plan.is_ignored(collection) {
                summary.add_ignored(self.clear_ignored(collection).await?);
            } else {
                summary.add_collection(self.migrate_collection(collection).await?);
            }
        }

        Ok(())
    }

    async fn clear_ignored(&self, collection: &str) -> Result<IgnoredCollection> {
        let target_documents = self.target.count(collection).await?;
        let dropped = target_documents > 0 && !self.plan.dry_run;

        if dropped {
            self.target.drop_collection(collection).await?;
            tracing::info!(collection, target_documents, "Dropped ignored collection from target");
        } else {
            tracing::info!(collection, target_documents, "Skipping ignored collection");
        }

        Ok(IgnoredCollection {
            name: collection.to_string(),
            target_documents,
            dropped,
        })
    }

    async fn migrate_collection(&mut self, collection: &str) -> Result<CollectionReport> {
        let start_time = Instant::now();
        let rules = RuleSet::compile(&self.plan.field_specs, collection);
        let fields: Vec<String> = rules.fields().into_iter().map(str::to_string).collect();
        crate::log_collection_start!(collection, &fields);

        let documents = self.source.read_all(collection).await?;
        let count = documents.len();
        let anonymized = self.anonymizer.anonymize_collection(documents, &rules)?;

        let (cleared, inserted) = if self.plan.dry_run {
            tracing::info!(collection, count, "Dry run, target left untouched");
            (0, 0)
        } else {
            let cleared = self.target.delete_all(collection).await?;
            let inserted = self.target.insert_many(collection, anonymized).await?;
            (cleared, inserted)
        };

        crate::log_collection_complete!(collection, count, start_time.elapsed());

        Ok(CollectionReport {
            name: collection.to_string(),
            documents: count,
            cleared,
            inserted,
            fields,
        })
    }
}
