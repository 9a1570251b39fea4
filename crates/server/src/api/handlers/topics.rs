use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::models::{Topic, TopicPayload, TopicStats, TopicStatus};
use crate::state::AppState;

/// Query parameters for listing topics
#[derive(Debug, Deserialize)]
pub struct TopicListQuery {
    /// Optional exact status filter
    pub status: Option<TopicStatus>,
}

/// Get all topics, optionally filtered by status
pub async fn get_topics(
    State(state): State<AppState>,
    Query(query): Query<TopicListQuery>,
) -> AppResult<Json<Vec<Topic>>> {
    let topics = state.topics.get_all(query.status).await?;
    Ok(Json(topics))
}

/// Create a new topic
pub async fn create_topic(
    State(state): State<AppState>,
    Json(payload): Json<TopicPayload>,
) -> AppResult<(StatusCode, Json<Topic>)> {
    let topic = state.topics.create(payload).await?;
    Ok((StatusCode::CREATED, Json(topic)))
}

/// Full replace of a topic
pub async fn update_topic(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<TopicPayload>,
) -> AppResult<Json<Topic>> {
    let topic = state.topics.update(id, payload).await?;
    Ok(Json(topic))
}

/// Delete a topic
pub async fn delete_topic(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Value>> {
    state.topics.delete(id).await?;
    Ok(Json(json!({ "message": "Thema gelöscht" })))
}

/// Per-status topic counts
pub async fn get_topic_stats(State(state): State<AppState>) -> AppResult<Json<TopicStats>> {
    let stats = state.topics.stats().await?;
    Ok(Json(stats))
}
