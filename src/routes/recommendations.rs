use axum::{extract::State, Json};
use serde::Deserialize;

use crate::{error::AppResult, models::Recommendation, routes::AppState};

#[derive(Debug, Deserialize)]
pub struct FavoritesRequest {
    pub favorite_ids: Vec<i64>,
}

/// Handler for profile-page recommendations based on a user's favorites
pub async fn for_favorites(
    State(state): State<AppState>,
    Json(request): Json<FavoritesRequest>,
) -> AppResult<Json<Vec<Recommendation>>> {
    let ranked = state
        .engine
        .recommend_for_favorites(&request.favorite_ids)
        .await?;
    Ok(Json(ranked))
}
