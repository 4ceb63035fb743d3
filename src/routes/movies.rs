use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::{Movie, Recommendation},
    routes::AppState,
};

/// Handler for the full catalog listing
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Movie>>> {
    let movies = state.catalog.fetch_all().await?;
    Ok(Json(movies))
}

/// Handler for a single movie lookup
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Movie>> {
    state
        .catalog
        .fetch_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("movie {id} not found")))
}

/// Handler for detail-page recommendations: movies similar to this one
pub async fn similar(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<Recommendation>>> {
    let ranked = state.engine.recommend_similar_to(id).await?;
    Ok(Json(ranked))
}
