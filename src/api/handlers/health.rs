use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use std::sync::Arc;
use time::OffsetDateTime;

use crate::{AppState, HealthResponse};

pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "OK",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: OffsetDateTime::now_utc().to_string(),
        countries: state.table.entities().len(),
        periods: state.table.periods().len(),
    };

    (StatusCode::OK, Json(response))
}
