//! Contact form route handlers.

use axum::{Json, extract::State};
use flori_mart_core::ContactMessage;
use tracing::instrument;

use super::{CreatedResponse, create_record};
use crate::error::Result;
use crate::extract::ValidatedRecord;
use crate::state::AppState;

/// Submit a contact message.
///
/// POST /api/contact
#[instrument(skip(state, message), fields(email = %message.email))]
pub async fn submit(
    State(state): State<AppState>,
    ValidatedRecord(message): ValidatedRecord<ContactMessage>,
) -> Result<Json<CreatedResponse>> {
    create_record(&state, &message).await
}
