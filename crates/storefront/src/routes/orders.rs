//! Checkout route handlers.

use axum::{Json, extract::State};
use flori_mart_core::Order;
use tracing::instrument;

use super::{CreatedResponse, create_record};
use crate::error::{Result, add_breadcrumb};
use crate::extract::ValidatedRecord;
use crate::state::AppState;

/// Place an order.
///
/// POST /api/orders
///
/// Totals are stored as submitted. Payment is not taken here; the chosen
/// `payment_method` is recorded for fulfilment.
#[instrument(
    skip(state, order),
    fields(email = %order.email, items = order.items.len(), payment_method = %order.payment_method)
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedRecord(order): ValidatedRecord<Order>,
) -> Result<Json<CreatedResponse>> {
    let total = order.total.to_string();
    add_breadcrumb("checkout", "Order submitted", &[("total", &total)]);
    create_record(&state, &order).await
}
