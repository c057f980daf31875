//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                          - Welcome message
//! GET  /health                    - Liveness check
//! GET  /test                      - Store connectivity report
//!
//! # Products
//! POST /api/products              - Create product
//! GET  /api/products              - List products (?occasion=&style=&color=&featured=)
//! GET  /api/products/{id}         - Product detail
//!
//! # Reviews
//! POST /api/reviews               - Add review
//! GET  /api/reviews/{product_id}  - Reviews for a product
//!
//! # Newsletter / Contact
//! POST /api/newsletter            - Subscribe
//! POST /api/contact               - Send contact message
//!
//! # Orders
//! POST /api/orders                - Place order
//! ```
//!
//! Every `POST` body is validated into a record before it reaches the store
//! and answers `{"id": "<identifier>"}` on success.

pub mod contact;
pub mod health;
pub mod newsletter;
pub mod orders;
pub mod products;
pub mod reviews;

use axum::{
    Json, Router,
    extract::Request,
    http::HeaderValue,
    routing::{get, post},
};
use flori_mart_core::Record;
use serde::Serialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::CorsOrigins;
use crate::error::Result;
use crate::middleware;
use crate::state::AppState;

/// Response body for every create endpoint.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// Persist a validated record and answer with its new identifier.
async fn create_record<R: Record + Sync>(
    state: &AppState,
    record: &R,
) -> Result<Json<CreatedResponse>> {
    let id = state.repository().create(record).await?;
    tracing::info!(kind = %R::KIND, id = %id, "Record created");
    Ok(Json(CreatedResponse { id }))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route("/{id}", get(products::show))
}

/// Create the `/api` routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/products", product_routes())
        .route("/reviews", post(reviews::create))
        .route("/reviews/{product_id}", get(reviews::for_product))
        .route("/newsletter", post(newsletter::subscribe))
        .route("/contact", post(contact::submit))
        .route("/orders", post(orders::create))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/test", get(health::test_database))
        .nest("/api", api_routes())
}

fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let allow_origin = match origins {
        CorsOrigins::Any => AllowOrigin::from(Any),
        CorsOrigins::List(list) => {
            let values: Vec<HeaderValue> = list
                .iter()
                .filter_map(|origin| HeaderValue::from_str(origin).ok())
                .collect();
            AllowOrigin::list(values)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Build the complete application: routes, state, and middleware.
///
/// Layers apply bottom to top: request ID (innermost), tracing, then CORS.
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config().cors_origins);

    Router::new()
        .merge(routes())
        .with_state(state)
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = tracing::field::Empty,
            )
        }))
        .layer(cors)
}
