//! Welcome, liveness, and store status handlers.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use crate::{error::truncate, state::AppState};

/// Longest error excerpt shown in the status report.
const MAX_ERROR_CHARS: usize = 50;

/// Collections listed in the status report.
const MAX_COLLECTIONS: usize = 10;

#[derive(Debug, Serialize)]
pub struct Welcome {
    pub name: &'static str,
    pub message: &'static str,
}

/// Store connectivity report served at `/test`.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub backend: &'static str,
    pub store_backend: &'static str,
    pub database: String,
    pub database_url: &'static str,
    pub database_name: String,
    pub connection_status: &'static str,
    pub collections: Vec<String>,
}

/// GET /
pub async fn root() -> Json<Welcome> {
    Json(Welcome {
        name: "Flori Mart API",
        message: "Welcome to nature's boutique",
    })
}

/// Liveness check. Does not touch the store.
pub async fn health() -> &'static str {
    "ok"
}

/// Report store connectivity.
///
/// Always answers 200; a failing store is described in the body.
#[instrument(skip(state))]
pub async fn test_database(State(state): State<AppState>) -> Json<StatusReport> {
    let mut report = StatusReport {
        backend: "Running",
        store_backend: state.store().backend(),
        database: "Not Available".to_string(),
        database_url: if state.config().database_url.is_some() {
            "Set"
        } else {
            "Not Set"
        },
        database_name: state.store().database_name().to_string(),
        connection_status: "Not Connected",
        collections: Vec::new(),
    };

    match state.repository().collection_names().await {
        Ok(mut names) => {
            names.truncate(MAX_COLLECTIONS);
            report.collections = names;
            report.database = "Connected & Working".to_string();
            report.connection_status = "Connected";
        }
        Err(e) => {
            tracing::warn!(error = %e, "Store status check failed");
            report.database = format!(
                "Connected but Error: {}",
                truncate(&e.to_string(), MAX_ERROR_CHARS)
            );
        }
    }

    Json(report)
}
