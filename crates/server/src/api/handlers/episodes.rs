use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::models::{Episode, EpisodeTopic, EpisodeTopicFlags, SpeakingTimeStats};
use crate::state::AppState;

/// Get all episodes, newest first
pub async fn get_episodes(State(state): State<AppState>) -> AppResult<Json<Vec<Episode>>> {
    let episodes = state.episodes.get_all().await?;
    Ok(Json(episodes))
}

/// Get a single episode by ID
pub async fn get_episode(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Episode>> {
    let episode = state.episodes.get_by_id(id).await?;
    Ok(Json(episode))
}

/// Speaking-time aggregate over transcribed episodes
pub async fn get_speaking_time_stats(
    State(state): State<AppState>,
) -> AppResult<Json<SpeakingTimeStats>> {
    let stats = state.episodes.speaking_time_stats().await?;
    Ok(Json(stats))
}

/// Get the topics linked to an episode
pub async fn get_episode_topics(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<EpisodeTopic>>> {
    let topics = state.episodes.get_topics(id).await?;
    Ok(Json(topics))
}

/// Link a topic to an episode (or overwrite the link's flags)
pub async fn link_episode_topic(
    State(state): State<AppState>,
    Path((id, topic_id)): Path<(i64, i64)>,
    Json(flags): Json<EpisodeTopicFlags>,
) -> AppResult<Json<Value>> {
    state.episodes.link_topic(id, topic_id, flags).await?;
    Ok(Json(json!({ "message": "Thema verknüpft" })))
}

/// Remove the link between an episode and a topic
pub async fn unlink_episode_topic(
    State(state): State<AppState>,
    Path((id, topic_id)): Path<(i64, i64)>,
) -> AppResult<Json<Value>> {
    state.episodes.unlink_topic(id, topic_id).await?;
    Ok(Json(json!({ "message": "Verknüpfung entfernt" })))
}
