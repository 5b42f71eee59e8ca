use serde::{Deserialize, Serialize};

use crate::stats::TrendFit;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub countries: usize,
    pub periods: usize,
}

#[derive(Debug, Serialize)]
pub struct HiResponse {
    #[serde(rename = "Hi")]
    pub hi: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HelloResponse {
    #[serde(rename = "Hello")]
    pub hello: String,
}

#[derive(Debug, Deserialize)]
pub struct TrendlineRequest {
    pub timestamps: Vec<f64>,
    pub data: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct TrendlineResponse {
    pub slope: f64,
    pub r_squared: f64,
}

impl From<TrendFit> for TrendlineResponse {
    fn from(fit: TrendFit) -> Self {
        Self {
            slope: fit.slope,
            r_squared: fit.r_squared,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CountriesResponse {
    pub countries: Vec<String>,
}
