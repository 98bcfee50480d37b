//! Document store abstraction
//!
//! This module defines the trait that source and target stores implement.
//! The anonymizer only needs whole collections of top-level documents, so the
//! interface is limited to listing, reading, counting, clearing, dropping and
//! bulk inserting.

use crate::domain::Result;
use async_trait::async_trait;
use bson::Document;

/// A database holding named collections of documents
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Human-readable name used in logs (database name, never credentials)
    fn name(&self) -> &str;

    /// List collection names
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ListCollectionsFailed`](crate::domain::StoreError::ListCollectionsFailed)
    /// if the listing fails.
    async fn list_collections(&self) -> Result<Vec<String>>;

    /// Read every document of a collection into memory
    async fn read_all(&self, collection: &str) -> Result<Vec<Document>>;

    /// Count documents in a collection (0 for a missing collection)
    async fn count(&self, collection: &str) -> Result<u64>;

    /// Delete every document of a collection, keeping the collection itself
    async fn delete_all(&self, collection: &str) -> Result<u64>;

    /// Insert documents in bulk
    ///
    /// Inserting an empty batch is a no-op and returns 0.
    async fn insert_many(&self, collection: &str, documents: Vec<Document>) -> Result<usize>;

    /// Drop a collection
    async fn drop_collection(&self, collection: &str) -> Result<()>;

    /// Release the connection
    ///
    /// Called exactly once at the end of a run, on success and on failure.
    async fn close(&self);
}
