//! Review route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use flori_mart_core::{RecordKind, Review};
use mongodb::bson::doc;
use serde_json::Value;
use tracing::instrument;

use super::{CreatedResponse, create_record};
use crate::error::Result;
use crate::extract::ValidatedRecord;
use crate::state::AppState;

/// Add a review.
///
/// POST /api/reviews
///
/// The referenced product is not looked up; reviews link to products by
/// identifier only.
#[instrument(skip(state, review), fields(product_id = %review.product_id, rating = review.rating))]
pub async fn create(
    State(state): State<AppState>,
    ValidatedRecord(review): ValidatedRecord<Review>,
) -> Result<Json<CreatedResponse>> {
    create_record(&state, &review).await
}

/// List the reviews for a product.
///
/// GET /api/reviews/{product_id}
#[instrument(skip(state))]
pub async fn for_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<Vec<Value>>> {
    let reviews = state
        .repository()
        .query(RecordKind::Review, doc! { "product_id": product_id })
        .await?;
    Ok(Json(reviews))
}
