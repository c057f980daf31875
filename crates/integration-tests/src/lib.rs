//! Integration test harness for the Flori Mart storefront.
//!
//! Drives the full router (middleware included) in-process with
//! `tower::ServiceExt::oneshot`; no socket or external database needed.
//!
//! ```rust,ignore
//! let app = TestApp::new();
//! let (status, body) = app.post_json("/api/products", &json!({"title": "Tulips", "price": 9.5})).await;
//! assert_eq!(status, StatusCode::OK);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::missing_panics_doc, clippy::unwrap_used)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode},
};
use flori_mart_core::RecordKind;
use flori_mart_storefront::config::StorefrontConfig;
use flori_mart_storefront::db::{DocumentStore, MemoryStore, StoreError};
use flori_mart_storefront::routes;
use flori_mart_storefront::state::AppState;
use http_body_util::BodyExt;
use mongodb::bson::{Document, oid::ObjectId};
use serde_json::Value;
use tower::ServiceExt;

/// Response captured from a single request.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

/// Router plus handle to the store behind it.
pub struct TestApp {
    router: Router,
    store: Arc<MemoryStore>,
}

impl TestApp {
    /// App over an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new("flori_mart_test"));
        let state = AppState::new(StorefrontConfig::default(), store.clone());
        Self {
            router: routes::app(state),
            store,
        }
    }

    /// Number of documents stored for a record kind.
    pub async fn count(&self, kind: RecordKind) -> usize {
        self.store.count(kind.collection()).await
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> TestResponse {
        self.post_raw(uri, &body.to_string()).await
    }

    pub async fn post_raw(&self, uri: &str, body: &str) -> TestResponse {
        self.send(
            Request::post(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Create a record and return its identifier.
    pub async fn create(&self, uri: &str, body: &Value) -> String {
        let response = self.post_json(uri, body).await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.body);
        response.body["id"].as_str().unwrap().to_string()
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        send(&self.router, request).await
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Send a request through a router and decode the JSON (or text) body.
pub async fn send(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    TestResponse {
        status,
        headers,
        body,
    }
}

/// Store whose every operation fails, for exercising 5xx paths.
pub struct FailingStore {
    pub message: String,
}

impl FailingStore {
    #[must_use]
    pub fn router(message: impl Into<String>) -> Router {
        let store = Arc::new(Self {
            message: message.into(),
        });
        routes::app(AppState::new(StorefrontConfig::default(), store))
    }

    fn error(&self) -> StoreError {
        StoreError::Rejected(self.message.clone())
    }
}

#[async_trait]
impl DocumentStore for FailingStore {
    fn backend(&self) -> &'static str {
        "failing"
    }

    fn database_name(&self) -> &str {
        "broken"
    }

    async fn insert_one(&self, _collection: &str, _document: Document) -> Result<ObjectId, StoreError> {
        Err(self.error())
    }

    async fn find(&self, _collection: &str, _filter: Document) -> Result<Vec<Document>, StoreError> {
        Err(self.error())
    }

    async fn find_one(
        &self,
        _collection: &str,
        _filter: Document,
    ) -> Result<Option<Document>, StoreError> {
        Err(self.error())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(self.error())
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError> {
        Err(self.error())
    }
}
