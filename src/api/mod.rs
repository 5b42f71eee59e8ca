mod handlers;
mod types;
mod state;
pub use handlers::*;
pub use types::*;
pub use state::*;

use tokio::net::TcpListener;
use axum::{
    Router,
    routing::{get, post}
};
use tower_http::cors::{Any, CorsLayer};
use std::sync::Arc;
use std::net::SocketAddr;
use tracing::info;
use anyhow::Result;
use std::time::Duration;

use crate::models::SdgTable;

pub async fn serve(host: String, port: u16, table: Arc<SdgTable>) -> Result<()> {
    // Create application state
    let state = Arc::new(AppState::new(table));

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    // Build router with routes and middleware
    let app = Router::new()
        // Core endpoints
        .route("/health", get(health_check))

        // Greeting endpoints
        .route("/say_hi/", get(say_hi))
        .route("/say_hello/{name}", get(say_hello))

        // Trendline endpoints
        .route("/fit_trendline/", post(compute_trendline))
        .route("/country_trendline/{country}", get(get_country_trendline))
        .route("/countries", get(get_countries))
        .layer(cors)
        .with_state(state);

    // Create socket address
    let addr = format!("{}:{}", host, port)
        .parse::<SocketAddr>()?;

    // Create TCP listener
    let listener = TcpListener::bind(&addr).await?;

    info!("API server listening on {}", addr);

    // Start server
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
