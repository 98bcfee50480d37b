//! Collection migration
//!
//! - [`coordinator`] - runs the copy across all collections
//! - [`summary`] - run reporting

pub mod coordinator;
pub mod summary;

pub use coordinator::{MigrationCoordinator, MigrationPlan};
pub use summary::{CollectionReport, IgnoredCollection, MigrationSummary};
