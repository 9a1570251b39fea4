use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::models::{Bird, BirdStats};
use crate::state::AppState;

/// Get all birds, ordered by name
pub async fn get_birds(State(state): State<AppState>) -> AppResult<Json<Vec<Bird>>> {
    let birds = state.birds.get_all().await?;
    Ok(Json(birds))
}

/// Get a random unused bird; 404 once the pool is exhausted
pub async fn get_random_bird(State(state): State<AppState>) -> AppResult<Json<Bird>> {
    let bird = state.birds.get_random_unused().await?;
    Ok(Json(bird))
}

/// Get aggregate counts over the bird pool
pub async fn get_bird_stats(State(state): State<AppState>) -> AppResult<Json<BirdStats>> {
    let stats = state.birds.stats().await?;
    Ok(Json(stats))
}

/// Mark a bird as used
pub async fn mark_bird_used(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Value>> {
    state.birds.mark_used(id).await?;
    Ok(Json(json!({ "message": "Vogel als benutzt markiert" })))
}

/// Clear a bird's used marking
pub async fn unmark_bird(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Value>> {
    state.birds.unmark(id).await?;
    Ok(Json(json!({ "message": "Vogel-Markierung entfernt" })))
}

/// Reset the whole pool to unused
pub async fn reset_birds(State(state): State<AppState>) -> AppResult<Json<Value>> {
    state.birds.reset_all().await?;
    Ok(Json(json!({ "message": "Alle Vögel zurückgesetzt" })))
}
