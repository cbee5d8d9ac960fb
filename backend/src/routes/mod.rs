pub mod news;

use axum::{response::IntoResponse, routing::get, Json, Router};
use http::StatusCode;
use serde_json::json;
use std::{error::Error, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt, Registry};

pub use news::news_routes;

use crate::utils::{config::Config, state::AppState};

/// Installs the global subscriber. `LOG_LEVEL` sets the verbosity of this
/// crate; later calls are no-ops.
pub fn init_tracing() {
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let level = match log_level.as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    };

    let filter = filter::Targets::new()
        .with_target("tower_http::trace::on_response", Level::TRACE)
        .with_target("tower_http::trace::on_request", Level::TRACE)
        .with_target("tower_http::trace::make_span", Level::DEBUG)
        .with_target("axum::rejection", Level::TRACE)
        .with_target(env!("CARGO_PKG_NAME"), level)
        .with_default(Level::INFO);

    let tracing_layer = tracing_subscriber::fmt::layer();

    let _ = Registry::default().with(tracing_layer).with(filter).try_init();
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .nest("/news", news_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

pub async fn make_app(config: Config) -> Result<Router, Box<dyn Error>> {
    init_tracing();

    info!("Initializing application...");
    info!(
        page_size = config.page_size,
        page_policy = ?config.page_policy,
        error_mode = ?config.error_mode,
        "Configuration loaded successfully"
    );

    let state = AppState::init(config);
    let seeded = state.news.record_count().await?;
    info!(records = seeded, "News store ready");

    let app = build_router(state);
    info!("Application initialized successfully");

    Ok(app)
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"message": "ok"}))).into_response()
}
