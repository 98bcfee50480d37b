//! Migration summary and reporting

use chrono::{DateTime, Utc};
use std::time::Duration;
use uuid::Uuid;

/// Outcome of one copied collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionReport {
    /// Collection name
    pub name: String,

    /// Documents read from the source and anonymized
    pub documents: usize,

    /// Documents removed from the target before inserting
    pub cleared: u64,

    /// Documents written to the target
    pub inserted: usize,

    /// Lower-cased fields that had a rule for this collection
    pub fields: Vec<String>,
}

/// Outcome of one ignored collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredCollection {
    /// Collection name
    pub name: String,

    /// Documents found in the target
    pub target_documents: u64,

    /// Whether the target collection was dropped
    pub dropped: bool,
}

/// Summary of a migration run
#[derive(Debug, Clone)]
pub struct MigrationSummary {
    /// Unique id of the run, repeated in logs
    pub run_id: Uuid,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// Copied collections, in processing order
    pub collections: Vec<CollectionReport>,

    /// Ignored collections, in processing order
    pub ignored: Vec<IgnoredCollection>,

    /// Nothing was written to the target
    pub dry_run: bool,

    /// Wall time of the run
    pub duration: Duration,
}

impl MigrationSummary {
    pub fn new(dry_run: bool) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            collections: Vec::new(),
            ignored: Vec::new(),
            dry_run,
            duration: Duration::ZERO,
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn add_collection(&mut self, report: CollectionReport) {
        self.collections.push(report);
    }

    pub fn add_ignored(&mut self, ignored: IgnoredCollection) {
        self.ignored.push(ignored);
    }

    /// Documents anonymized across all collections
    pub fn total_documents(&self) -> usize {
        self.collections.iter().map(|c| c.documents).sum()
    }

    /// Documents written across all collections
    pub fn total_inserted(&self) -> usize {
        self.collections.iter().map(|c| c.inserted).sum()
    }

    /// Ignored collections that were dropped from the target
    pub fn dropped_collections(&self) -> usize {
        self.ignored.iter().filter(|i| i.dropped).count()
    }

    /// Documents processed per second
    pub fn throughput(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.total_documents() as f64 / secs
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            run_id = %self.run_id,
            collections = self.collections.len(),
            ignored = self.ignored.len(),
            dropped = self.dropped_collections(),
            documents = self.total_documents(),
            inserted = self.total_inserted(),
            dry_run = self.dry_run,
            duration_ms = self.duration.as_millis() as u64,
            "Migration completed"
        );
    }
}
