use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info};

use crate::{AppState, CountriesResponse, TrendlineResponse};

// Lookup is case-sensitive; an unknown name surfaces as a generic 500
pub async fn get_country_trendline(
    State(state): State<Arc<AppState>>,
    Path(country): Path<String>,
) -> Result<Json<TrendlineResponse>, StatusCode> {
    info!("Fitting trendline for {}", country);

    let fit = state.table.trendline(&country).map_err(|e| {
        error!("Country trendline failed for {}: {}", country, e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(fit.into()))
}

pub async fn get_countries(State(state): State<Arc<AppState>>) -> Json<CountriesResponse> {
    let mut countries = state.table.entities().to_vec();
    countries.sort();

    Json(CountriesResponse { countries })
}
