// Submodules
pub mod health;  // Health check endpoint
pub mod greeting;  // Demo greeting endpoints

// Trendline endpoints
pub mod trendline;
pub mod country;

// Re-exports
pub use health::health_check;
pub use greeting::{say_hello, say_hi};
pub use trendline::compute_trendline;
pub use country::{get_countries, get_country_trendline};
