//! In-memory document store
//!
//! Backs the integration tests and local experiments. Reads are recorded so
//! callers can check which collections were touched.

use super::traits::DocumentStore;
use crate::domain::{Result, StoreError};
use async_trait::async_trait;
use bson::Document;
use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// In-memory document store
pub struct InMemoryStore {
    name: String,
    collections: RwLock<BTreeMap<String, Vec<Document>>>,
    reads: RwLock<Vec<String>>,
    failing: HashSet<String>,
    closed: AtomicBool,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collections: RwLock::new(BTreeMap::new()),
            reads: RwLock::new(Vec::new()),
            failing: HashSet::new(),
            closed: AtomicBool::new(false),
        }
    }

    /// Adds a collection with documents.
    #[must_use]
    pub fn with_collection(mut self, collection: &str, documents: Vec<Document>) -> Self {
        self.collections
            .get_mut()
            .insert(collection.to_string(), documents);
        self
    }

    /// Makes reads and inserts on `collection` fail.
    #[must_use]
    pub fn with_failing_collection(mut self, collection: &str) -> Self {
        self.failing.insert(collection.to_string());
        self
    }

    /// Returns a copy of a collection's documents.
    pub async fn documents(&self, collection: &str) -> Option<Vec<Document>> {
        self.collections.read().await.get(collection).cloned()
    }

    /// Returns whether a collection exists.
    pub async fn has_collection(&self, collection: &str) -> bool {
        self.collections.read().await.contains_key(collection)
    }

    /// Collections read so far, in order.
    pub async fn reads(&self) -> Vec<String> {
        self.reads.read().await.clone()
    }

    /// Returns true once [`DocumentStore::close`] has been called.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn check_failing(&self, collection: &str, op: &str) -> Result<()> {
        if self.failing.contains(collection) {
            let reason = format!("simulated {op} failure");
            let err = match op {
                "read" => StoreError::ReadFailed {
                    collection: collection.to_string(),
                    reason,
                },
                _ => StoreError::InsertFailed {
                    collection: collection.to_string(),
                    reason,
                },
            };
            return Err(err.into());
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn list_collections(&self) -> Result<Vec<String>> {
        Ok(self.collections.read().await.keys().cloned().collect())
    }

    async fn read_all(&self, collection: &str) -> Result<Vec<Document>> {
        self.reads.write().await.push(collection.to_string());
        self.check_failing(collection, "read")?;
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }

    async fn count(&self, collection: &str) -> Result<u64> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .map_or(0, |docs| docs.len() as u64))
    }

    async fn delete_all(&self, collection: &str) -> Result<u64> {
        let mut collections = self.collections.write().await;
        let deleted = collections
            .get_mut(collection)
            .map_or(0, |docs| std::mem::take(docs).len() as u64);
        Ok(deleted)
    }

    async fn insert_many(&self, collection: &str, documents: Vec<Document>) -> Result<usize> {
        self.check_failing(collection, "insert")?;
        if documents.is_empty() {
            return Ok(0);
        }
        let inserted = documents.len();
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .extend(documents);
        Ok(inserted)
    }

    async fn drop_collection(&self, collection: &str) -> Result<()> {
        self.collections.write().await.remove(collection);
        Ok(())
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}
