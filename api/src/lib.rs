pub mod api_error;
pub mod routes;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use paper_synthesis::{AnalysisService, Config, GeminiService, GenerativeModel};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

#[derive(Clone)]
pub struct AppState {
    pub analysis: Arc<AnalysisService>,
}

impl AppState {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self {
            analysis: Arc::new(AnalysisService::new(model)),
        }
    }
}

pub fn create_app(config: &Config) -> Router {
    let gemini = Arc::new(GeminiService::new(config));
    log::info!("Gemini client configured for model {}", gemini.model());
    build_router(AppState::new(gemini), config.max_upload_bytes)
}

pub fn build_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(routes::home))
        .route("/health", get(routes::health_check))
        .route("/analyze", post(routes::analyze_documents))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
