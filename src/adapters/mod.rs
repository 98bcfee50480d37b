//! External system integrations.
//!
//! - [`database`] - document store abstraction (trait-based) and factory
//! - [`mongodb`] - MongoDB implementation
//!
//! # Design Pattern
//!
//! Adapters isolate the database driver behind the
//! [`DocumentStore`](database::DocumentStore) trait, so the migration logic
//! runs unchanged against `InMemoryStore` in tests.
//!
//! ```rust,no_run
//! use mongodb_anonymizer::adapters::database::connect_store;
//! use mongodb_anonymizer::config::secret_string;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let uri = secret_string("mongodb://localhost:27017/app".to_string());
//! let source = connect_store(&uri, "source").await?;
//! let collections = source.list_collections().await?;
//! println!("{collections:?}");
//! source.close().await;
//! # Ok(())
//! # }
//! ```

pub mod database;
pub mod mongodb;
