//! Product route handlers.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use flori_mart_core::{Product, RecordKind};
use mongodb::bson::Document;
use serde::{Deserialize, Deserializer, de::Error as _};
use serde_json::Value;
use tracing::instrument;

use super::{CreatedResponse, create_record};
use crate::error::{AppError, Result};
use crate::extract::ValidatedRecord;
use crate::state::AppState;

/// Catalog filters. Every filter is optional; empty strings are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ProductFilter {
    pub occasion: Option<String>,
    pub style: Option<String>,
    pub color: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub featured: Option<bool>,
}

/// Accept the usual spellings of a query-string boolean, in any case.
fn lenient_bool<'de, D>(deserializer: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "" => Ok(None),
        "true" | "1" | "yes" | "on" => Ok(Some(true)),
        "false" | "0" | "no" | "off" => Ok(Some(false)),
        _ => Err(D::Error::custom(format!(
            "featured: expected a boolean, got `{raw}`"
        ))),
    }
}

impl ProductFilter {
    /// Equality filter over the filterable product fields.
    #[must_use]
    pub fn to_document(&self) -> Document {
        let mut filter = Document::new();
        for (field, value) in [
            ("occasion", &self.occasion),
            ("style", &self.style),
            ("color", &self.color),
        ] {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                filter.insert(field, value);
            }
        }
        if let Some(featured) = self.featured {
            filter.insert("is_featured", featured);
        }
        filter
    }
}

/// Create a product.
///
/// POST /api/products
#[instrument(skip(state, product), fields(title = %product.title))]
pub async fn create(
    State(state): State<AppState>,
    ValidatedRecord(product): ValidatedRecord<Product>,
) -> Result<Json<CreatedResponse>> {
    create_record(&state, &product).await
}

/// List products matching the query filters.
///
/// GET /api/products
#[instrument(skip(state, query))]
pub async fn index(
    State(state): State<AppState>,
    query: std::result::Result<Query<ProductFilter>, QueryRejection>,
) -> Result<Json<Vec<Value>>> {
    let Query(filter) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let products = state
        .repository()
        .query(RecordKind::Product, filter.to_document())
        .await?;

    tracing::debug!(count = products.len(), ?filter, "Listed products");
    Ok(Json(products))
}

/// Show a single product.
///
/// GET /api/products/{id}
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>> {
    let product = state
        .repository()
        .get_by_id(RecordKind::Product, &id)
        .await?;
    Ok(Json(product))
}
