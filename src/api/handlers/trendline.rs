use axum::{http::StatusCode, response::Json};
use tracing::{error, info};

use crate::{stats, TrendlineRequest, TrendlineResponse};

pub async fn compute_trendline(
    Json(payload): Json<TrendlineRequest>,
) -> Result<Json<TrendlineResponse>, StatusCode> {
    info!("Fitting trendline over {} samples", payload.data.len());

    let fit = stats::fit_trendline(&payload.timestamps, &payload.data).map_err(|e| {
        error!("Trendline fit failed: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(fit.into()))
}
