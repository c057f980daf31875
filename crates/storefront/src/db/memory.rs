//! In-process document store.
//!
//! Used by the test suites and for local runs without `DATABASE_URL`.
//! Matching follows `MongoDB` equality semantics closely enough for the
//! filters the API builds: numbers compare by value across integer and
//! floating-point representations, and an array field matches a scalar
//! filter value it contains.

use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document};
use tokio::sync::RwLock;

use super::store::{DocumentStore, StoreError};

/// Document store that keeps every collection in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    database_name: String,
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new(database_name: impl Into<String>) -> Self {
        Self {
            database_name: database_name.into(),
            collections: RwLock::default(),
        }
    }

    /// Number of documents in `collection` (0 if it does not exist).
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }
}

fn as_number(value: &Bson) -> Option<f64> {
    match value {
        Bson::Double(n) => Some(*n),
        Bson::Int32(n) => Some(f64::from(*n)),
        #[allow(clippy::cast_precision_loss)] // equality on catalog-sized integers
        Bson::Int64(n) => Some(*n as f64),
        _ => None,
    }
}

#[allow(clippy::float_cmp)] // MongoDB compares numbers exactly across types
fn values_equal(actual: &Bson, expected: &Bson) -> bool {
    match (as_number(actual), as_number(expected)) {
        (Some(a), Some(b)) => a == b,
        _ => actual == expected,
    }
}

fn field_matches(actual: Option<&Bson>, expected: &Bson) -> bool {
    match (actual, expected) {
        (None, Bson::Null) => true,
        (None, _) => false,
        (Some(Bson::Array(items)), expected) if !matches!(expected, Bson::Array(_)) => {
            items.iter().any(|item| values_equal(item, expected))
        }
        (Some(actual), expected) => values_equal(actual, expected),
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| field_matches(document.get(key), expected))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    fn database_name(&self) -> &str {
        &self.database_name
    }

    async fn insert_one(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<ObjectId, StoreError> {
        let id = match document.get("_id") {
            None => {
                let id = ObjectId::new();
                document.insert("_id", id);
                id
            }
            Some(Bson::ObjectId(id)) => *id,
            Some(other) => {
                return Err(StoreError::Rejected(format!(
                    "unsupported _id type: {:?}",
                    other.element_type()
                )));
            }
        };

        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection.to_owned()).or_default();
        if documents
            .iter()
            .any(|d| d.get_object_id("_id").is_ok_and(|existing| existing == id))
        {
            return Err(StoreError::Rejected(format!("duplicate key: _id {id}")));
        }
        documents.push(document);
        Ok(id)
    }

    async fn find(&self, collection: &str, filter: Document) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|d| matches(d, &filter))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|documents| documents.iter().find(|d| matches(d, &filter)).cloned()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError> {
        let mut names: Vec<String> = self.collections.read().await.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use mongodb::bson::doc;

    use super::*;

    #[tokio::test]
    async fn test_insert_assigns_unique_ids() {
        let store = MemoryStore::new("test");
        let a = store.insert_one("product", doc! { "title": "A" }).await.unwrap();
        let b = store.insert_one("product", doc! { "title": "B" }).await.unwrap();

        assert_ne!(a, b);
        assert_eq!(store.count("product").await, 2);
        assert_eq!(store.count("review").await, 0);
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let store = MemoryStore::new("test");
        let id = ObjectId::new();
        store.insert_one("order", doc! { "_id": id }).await.unwrap();
        let err = store.insert_one("order", doc! { "_id": id }).await.unwrap_err();
        assert!(matches!(err, StoreError::Rejected(_)));
    }

    #[tokio::test]
    async fn test_find_is_conjunctive() {
        let store = MemoryStore::new("test");
        store
            .insert_one("product", doc! { "occasion": "birthday", "color": "red" })
            .await
            .unwrap();
        store
            .insert_one("product", doc! { "occasion": "birthday", "color": "white" })
            .await
            .unwrap();

        let all = store.find("product", doc! {}).await.unwrap();
        assert_eq!(all.len(), 2);

        let red = store
            .find("product", doc! { "occasion": "birthday", "color": "red" })
            .await
            .unwrap();
        assert_eq!(red.len(), 1);

        let none = store
            .find("product", doc! { "occasion": "wedding" })
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_numbers_match_across_types() {
        let store = MemoryStore::new("test");
        store
            .insert_one("review", doc! { "rating": 5_i64 })
            .await
            .unwrap();

        let found = store.find("review", doc! { "rating": 5.0 }).await.unwrap();
        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn test_near_numbers_do_not_match() {
        let store = MemoryStore::new("test");
        store
            .insert_one("product", doc! { "price": 1.0 })
            .await
            .unwrap();

        assert!(store.find("product", doc! { "price": 1.000_000_1 }).await.unwrap().is_empty());
        assert!(store.find("product", doc! { "price": 1.0 + f64::EPSILON }).await.unwrap().is_empty());
        assert_eq!(store.find("product", doc! { "price": 1_i32 }).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_array_field_matches_member() {
        let store = MemoryStore::new("test");
        store
            .insert_one("product", doc! { "sizes": ["S", "M"] })
            .await
            .unwrap();

        assert_eq!(store.find("product", doc! { "sizes": "M" }).await.unwrap().len(), 1);
        assert!(store.find("product", doc! { "sizes": "XL" }).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_one_and_collections() {
        let store = MemoryStore::new("test");
        let id = store.insert_one("newsletter", doc! { "email": "a@b.co" }).await.unwrap();

        let found = store
            .find_one("newsletter", doc! { "_id": id })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.get_str("email").unwrap(), "a@b.co");

        assert!(
            store
                .find_one("newsletter", doc! { "_id": ObjectId::new() })
                .await
                .unwrap()
                .is_none()
        );
        assert_eq!(
            store.list_collection_names().await.unwrap(),
            vec!["newsletter".to_string()]
        );
    }
}
