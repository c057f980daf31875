//! `MongoDB` driver.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, doc};
use mongodb::{Client, Collection, Database};
use secrecy::{ExposeSecret, SecretString};

use super::store::{DocumentStore, StoreError};

/// Document store backed by a `MongoDB` database.
///
/// The driver pools connections internally, so one instance serves every
/// request.
#[derive(Debug, Clone)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Connect to `MongoDB` and select `database_name`.
    ///
    /// The driver connects lazily, so a `ping` is issued to surface bad URLs
    /// and unreachable servers at startup.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Driver` if the URL is invalid or the server does
    /// not answer the ping.
    pub async fn connect(url: &SecretString, database_name: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(url.expose_secret()).await?;
        let store = Self {
            database: client.database(database_name),
        };
        store.ping().await?;
        tracing::info!(database = database_name, "Connected to MongoDB");
        Ok(store)
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn backend(&self) -> &'static str {
        "mongodb"
    }

    fn database_name(&self) -> &str {
        self.database.name()
    }

    async fn insert_one(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<ObjectId, StoreError> {
        let result = self.collection(collection).insert_one(document).await?;
        result.inserted_id.as_object_id().ok_or_else(|| {
            StoreError::Rejected(format!(
                "expected an ObjectId, store returned {}",
                result.inserted_id
            ))
        })
    }

    async fn find(&self, collection: &str, filter: Document) -> Result<Vec<Document>, StoreError> {
        let cursor = self.collection(collection).find(filter).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, StoreError> {
        Ok(self.collection(collection).find_one(filter).await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.database.list_collection_names().await?)
    }
}
