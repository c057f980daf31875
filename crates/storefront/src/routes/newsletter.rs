//! Newsletter subscription route handlers.

use axum::{Json, extract::State};
use flori_mart_core::Newsletter;
use tracing::instrument;

use super::{CreatedResponse, create_record};
use crate::error::{Result, add_breadcrumb};
use crate::extract::ValidatedRecord;
use crate::state::AppState;

/// Subscribe to the newsletter.
///
/// POST /api/newsletter
///
/// Every signup is stored, including repeats of an address already on the
/// list.
#[instrument(skip(state, signup), fields(email = %signup.email))]
pub async fn subscribe(
    State(state): State<AppState>,
    ValidatedRecord(signup): ValidatedRecord<Newsletter>,
) -> Result<Json<CreatedResponse>> {
    add_breadcrumb(
        "newsletter",
        "Newsletter signup",
        &[("source", signup.source.as_deref().unwrap_or("unknown"))],
    );
    create_record(&state, &signup).await
}
