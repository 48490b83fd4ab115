pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod reviews;
pub mod schedule;
pub mod state;

use axum::{
    Router,
    http::HeaderValue,
    routing::get,
};
use config::Config;
use state::AppState;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api", get(handlers::root))
        .route("/api/", get(handlers::root))
        .route("/api/schedule", get(handlers::get_schedule))
        .route(
            "/api/bookings",
            get(handlers::get_bookings).post(handlers::create_booking),
        )
        .route("/api/reviews", get(handlers::get_reviews))
        .route("/api/stats", get(handlers::get_stats))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %o, "ignoring unparsable CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(allowed)
}

pub fn app(app_state: AppState, config: &Config) -> Router {
    let mut app = api_router();
    if let Some(dir) = &config.static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }
    app.layer(cors_layer(&config.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
