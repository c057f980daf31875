//! Document persistence for the storefront.
//!
//! # Collections
//!
//! One collection per record kind, named by [`RecordKind::collection`]:
//!
//! - `product` - Catalog
//! - `review` - Product reviews (`product_id` links to a product by convention)
//! - `newsletter` - Newsletter signups
//! - `contactmessage` - Contact form submissions
//! - `order` - Placed orders
//!
//! # Layers
//!
//! - [`DocumentStore`] - the driver interface ([`MongoStore`], [`MemoryStore`])
//! - [`DocumentRepository`] - the generic accessor every route goes through.
//!   It turns typed records into documents on the way in, and hands
//!   documents back as JSON with the native `_id` replaced by a string `id`.

pub mod memory;
pub mod mongo;
pub mod store;

use std::sync::Arc;

use flori_mart_core::{Record, RecordKind, Rule, ValidationError};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document, doc};
use serde_json::Value;

use crate::config::StorefrontConfig;

pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use store::{DocumentStore, StoreError};

/// Errors from the document accessor.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The underlying store failed or rejected the operation.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A record could not be turned into a document.
    #[error("could not encode record: {0}")]
    Encode(#[from] mongodb::bson::ser::Error),

    /// An identifier was not in the store's native format.
    #[error("{0}")]
    MalformedId(ValidationError),

    /// No document has the requested identifier.
    #[error("{} not found", .0.label())]
    NotFound(RecordKind),
}

/// Open the document store described by `config`.
///
/// Uses `MongoDB` when `DATABASE_URL` is set, otherwise an in-memory store.
///
/// # Errors
///
/// Returns `StoreError` if `MongoDB` is configured but unreachable.
pub async fn connect(config: &StorefrontConfig) -> Result<Arc<dyn DocumentStore>, StoreError> {
    if let Some(url) = &config.database_url {
        let store = MongoStore::connect(url, &config.database_name).await?;
        Ok(Arc::new(store))
    } else {
        tracing::warn!("DATABASE_URL not set, using in-memory store (data is not persisted)");
        Ok(Arc::new(MemoryStore::new(config.database_name.clone())))
    }
}

/// Parse an identifier string into the store's native representation.
///
/// # Errors
///
/// Returns `RepositoryError::MalformedId` unless `id` is 24 hex characters.
pub fn parse_id(id: &str) -> Result<ObjectId, RepositoryError> {
    ObjectId::parse_str(id).map_err(|_| {
        RepositoryError::MalformedId(ValidationError::new(
            "id",
            Rule::MalformedIdentifier,
            format!("'{id}' is not a valid identifier"),
        ))
    })
}

/// Render a native `_id` as the opaque string clients see.
fn render_id(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Convert a stored document into client-facing JSON.
///
/// The native `_id` is removed and replaced by a string `id`.
fn into_json(mut document: Document) -> Value {
    let id = document.remove("_id");
    let mut value = Bson::Document(document).into_relaxed_extjson();
    if let (Some(id), Some(object)) = (id, value.as_object_mut()) {
        object.insert("id".to_owned(), Value::String(render_id(&id)));
    }
    value
}

/// Generic accessor mapping typed records to documents and back.
pub struct DocumentRepository<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> DocumentRepository<'a> {
    /// Create a new repository over `store`.
    #[must_use]
    pub const fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    /// Persist `record` in its kind's collection and return the new identifier.
    ///
    /// Single attempt; a failed insert is not retried.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Encode` if the record cannot be serialized,
    /// or `RepositoryError::Store` if the insert fails.
    pub async fn create<R: Record + Sync>(&self, record: &R) -> Result<String, RepositoryError> {
        let document = mongodb::bson::to_document(record)?;
        let id = self
            .store
            .insert_one(R::KIND.collection(), document)
            .await?;
        Ok(id.to_hex())
    }

    /// All documents of `kind` whose top-level fields equal every entry of
    /// `filter`. An empty filter returns the whole collection, in store order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the query fails.
    pub async fn query(
        &self,
        kind: RecordKind,
        filter: Document,
    ) -> Result<Vec<Value>, RepositoryError> {
        let documents = self.store.find(kind.collection(), filter).await?;
        Ok(documents.into_iter().map(into_json).collect())
    }

    /// The single document of `kind` with identifier `id`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::MalformedId` if `id` cannot be parsed,
    /// `RepositoryError::NotFound` if no document has it, or
    /// `RepositoryError::Store` if the lookup fails.
    pub async fn get_by_id(&self, kind: RecordKind, id: &str) -> Result<Value, RepositoryError> {
        let oid = parse_id(id)?;
        self.store
            .find_one(kind.collection(), doc! { "_id": oid })
            .await?
            .map(into_json)
            .ok_or(RepositoryError::NotFound(kind))
    }

    /// Names of the existing collections, for connectivity reports.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the store cannot be reached.
    pub async fn collection_names(&self) -> Result<Vec<String>, RepositoryError> {
        self.store.ping().await?;
        Ok(self.store.list_collection_names().await?)
    }
}
