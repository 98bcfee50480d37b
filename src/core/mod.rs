//! Core business logic.
//!
//! # Migration Workflow
//!
//! 1. **List**: read the collection names of the source database
//! 2. **Skip**: ignored collections are not read; the target copy is dropped
//! 3. **Compile**: build the rule set for the collection
//! 4. **Read**: load the whole source collection
//! 5. **Anonymize**: replace every field that has a rule
//! 6. **Write**: clear the target collection and bulk insert
//! 7. **Report**: produce a [`MigrationSummary`](migration::MigrationSummary)
//!
//! # Example
//!
//! ```rust,no_run
//! use mongodb_anonymizer::adapters::database::connect_store;
//! use mongodb_anonymizer::anonymization::{FakerGenerator, FieldSpec, Locale, ValueAnonymizer};
//! use mongodb_anonymizer::config::secret_string;
//! use mongodb_anonymizer::core::migration::{MigrationCoordinator, MigrationPlan};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = connect_store(&secret_string("mongodb://localhost/prod".into()), "source").await?;
//! let target = connect_store(&secret_string("mongodb://localhost/staging".into()), "target").await?;
//!
//! let plan = MigrationPlan {
//!     field_specs: FieldSpec::parse_list("email,users.age:faker.random.number"),
//!     ignored_collections: vec!["sessions".to_string()],
//!     dry_run: false,
//! };
//! let anonymizer = ValueAnonymizer::new(Box::new(FakerGenerator::new(Locale::En)));
//!
//! let summary = MigrationCoordinator::new(source, target, plan, anonymizer).run().await?;
//! println!("Anonymized {} documents", summary.total_documents());
//! # Ok(())
//! # }
//! ```

pub mod migration;
