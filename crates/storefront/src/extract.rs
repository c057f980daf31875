//! Request extractors.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use flori_mart_core::Record;
use serde_json::Value;

use crate::error::AppError;

/// Extractor that parses the JSON body and validates it into a record.
///
/// Rejects with `AppError::BadRequest` when the body is not JSON and with
/// `AppError::Validation` when it does not satisfy the record's schema, so
/// handlers only ever see valid records.
///
/// # Example
///
/// ```rust,ignore
/// async fn create_product(
///     State(state): State<AppState>,
///     ValidatedRecord(product): ValidatedRecord<Product>,
/// ) -> Result<Json<CreatedResponse>> {
///     // `product` has passed validation
/// }
/// ```
pub struct ValidatedRecord<R>(pub R);

impl<S, R> FromRequest<S> for ValidatedRecord<R>
where
    S: Send + Sync,
    R: Record + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        let record = R::from_json(value)?;
        Ok(Self(record))
    }
}
