use std::sync::Arc;

use axum::{
    http::StatusCode,
    middleware::from_fn,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    catalog::Catalog,
    middleware::request_id::{propagate_request_id, span_for_request},
    services::{JiebaSegmenter, MovieScorer, RecommendationEngine, TextScorer},
};

pub mod movies;
pub mod recommendations;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn Catalog>,
    pub engine: Arc<RecommendationEngine>,
}

impl AppState {
    /// Builds the state around a catalog, wiring the engine with the default
    /// jieba-backed text scorer. The segmenter dictionary loads once here and
    /// is shared for the life of the process.
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        let text = TextScorer::new(Arc::new(JiebaSegmenter::new()));
        let engine = Arc::new(RecommendationEngine::new(
            catalog.clone(),
            MovieScorer::new(text),
        ));
        Self { catalog, engine }
    }
}

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(from_fn(propagate_request_id))
                .layer(TraceLayer::new_for_http().make_span_with(span_for_request))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/movies", get(movies::list))
        .route("/movies/:id", get(movies::get_by_id))
        .route("/movies/:id/recommendations", get(movies::similar))
        .route(
            "/recommendations/favorites",
            post(recommendations::for_favorites),
        )
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
