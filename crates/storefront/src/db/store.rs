//! Minimal document-store driver interface.
//!
//! The accessor in [`super::DocumentRepository`] only needs these few
//! operations, so any backend that can insert, filter, and list collections
//! can sit behind it.

use async_trait::async_trait;
use mongodb::bson::Document;
use mongodb::bson::oid::ObjectId;
use thiserror::Error;

/// Errors raised by a document store driver.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The `MongoDB` driver reported a failure (unreachable, timeout, rejected write).
    #[error("database error: {0}")]
    Driver(#[from] mongodb::error::Error),

    /// The store refused the write.
    #[error("insert rejected: {0}")]
    Rejected(String),
}

/// A store of untyped documents grouped into named collections.
///
/// Every document carries a store-native `_id`. Implementations generate one
/// on insert when the document does not already have it.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short backend name for diagnostics (e.g. `"mongodb"`).
    fn backend(&self) -> &'static str;

    /// Name of the database the collections live in.
    fn database_name(&self) -> &str;

    /// Insert one document and return its identifier.
    async fn insert_one(&self, collection: &str, document: Document)
    -> Result<ObjectId, StoreError>;

    /// Every document whose top-level fields equal all entries of `filter`.
    async fn find(&self, collection: &str, filter: Document) -> Result<Vec<Document>, StoreError>;

    /// The first document matching `filter`, if any.
    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, StoreError>;

    /// Check that the store answers.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Names of the collections that currently exist.
    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError>;
}
