//! MongoDB document store
//!
//! Wraps the official driver. The database is taken from the connection
//! string path; without one the driver default `test` is used.

use crate::adapters::database::traits::DocumentStore;
use crate::config::{redact_connection_string, SecretString};
use crate::domain::{AnonymizerError, Result, StoreError};
use async_trait::async_trait;
use bson::{doc, Document};
use futures::TryStreamExt;
use mongodb::error::ErrorKind;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use secrecy::ExposeSecret;

const DEFAULT_DATABASE: &str = "test";
const APP_NAME: &str = "mongodb-anonymizer";

/// MongoDB-backed [`DocumentStore`]
pub struct MongoStore {
    client: Client,
    database: Database,
    database_name: String,
}

impl MongoStore {
    /// Connect and verify the server answers a `ping`
    ///
    /// # Errors
    ///
    /// - [`AnonymizerError::Configuration`] for an invalid connection string
    /// - [`AnonymizerError::Connection`] when the server cannot be reached
    pub async fn connect(uri: &SecretString, role: &str) -> Result<Self> {
        let uri: &str = uri.expose_secret().as_ref();
        let redacted = redact_connection_string(uri);
        tracing::info!(role, uri = %redacted, "Connecting to MongoDB");

        let mut options = ClientOptions::parse(uri).await.map_err(|e| match e.kind.as_ref() {
            ErrorKind::InvalidArgument { .. } => {
                AnonymizerError::Configuration(format!("Invalid {role} connection string: {e}"))
            }
            _ => AnonymizerError::Connection(format!("Failed to resolve {role} ({redacted}): {e}")),
        })?;
        options.app_name = Some(APP_NAME.to_string());

        let database_name = options.default_database.clone().unwrap_or_else(|| {
            tracing::warn!(role, "No database in connection string, using '{DEFAULT_DATABASE}'");
            DEFAULT_DATABASE.to_string()
        });

        let client = Client::with_options(options).map_err(|e| {
            AnonymizerError::Connection(format!("Failed to create {role} client: {e}"))
        })?;
        let database = client.database(&database_name);

        if let Err(e) = database.run_command(doc! { "ping": 1 }, None).await {
            client.shutdown().await;
            return Err(AnonymizerError::Connection(format!(
                "Failed to connect to {role} ({redacted}): {e}"
            )));
        }

        tracing::info!(role, database = %database_name, "Connected to MongoDB");

        Ok(Self {
            client,
            database,
            database_name,
        })
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection::<Document>(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn name(&self) -> &str {
        &self.database_name
    }

    async fn list_collections(&self) -> Result<Vec<String>> {
        self.database
            .list_collection_names(None)
            .await
            .map_err(|e| {
                StoreError::ListCollectionsFailed {
                    store: self.database_name.clone(),
                    reason: e.to_string(),
                }
                .into()
            })
    }

    async fn read_all(&self, collection: &str) -> Result<Vec<Document>> {
        let read_failed = |e: mongodb::error::Error| StoreError::ReadFailed {
            collection: collection.to_string(),
            reason: e.to_string(),
        };

        let cursor = self
            .collection(collection)
            .find(None, None)
            .await
            .map_err(read_failed)?;
        let documents: Vec<Document> = cursor.try_collect().await.map_err(read_failed)?;

        tracing::debug!(collection, count = documents.len(), "Read collection");
        Ok(documents)
    }

    async fn count(&self, collection: &str) -> Result<u64> {
        self.collection(collection)
            .count_documents(None, None)
            .await
            .map_err(|e| {
                StoreError::CountFailed {
                    collection: collection.to_string(),
                    reason: e.to_string(),
                }
                .into()
            })
    }

    async fn delete_all(&self, collection: &str) -> Result<u64> {
        let result = self
            .collection(collection)
            .delete_many(doc! {}, None)
            .await
            .map_err(|e| StoreError::DeleteFailed {
                collection: collection.to_string(),
                reason: e.to_string(),
            })?;
        Ok(result.deleted_count)
    }

    async fn insert_many(&self, collection: &str, documents: Vec<Document>) -> Result<usize> {
        // The driver rejects empty batches
        if documents.is_empty() {
            return Ok(0);
        }

        let result = self
            .collection(collection)
            .insert_many(documents, None)
            .await
            .map_err(|e| StoreError::InsertFailed {
                collection: collection.to_string(),
                reason: e.to_string(),
            })?;
        Ok(result.inserted_ids.len())
    }

    async fn drop_collection(&self, collection: &str) -> Result<()> {
        self.collection(collection)
            .drop(None)
            .await
            .map_err(|e| {
                StoreError::DropFailed {
                    collection: collection.to_string(),
                    reason: e.to_string(),
                }
                .into()
            })
    }

    async fn close(&self) {
        tracing::debug!(database = %self.database_name, "Closing MongoDB client");
        self.client.clone().shutdown().await;
    }
}
