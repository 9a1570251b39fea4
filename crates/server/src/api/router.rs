use axum::{
    routing::{get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;

use crate::state::AppState;

use super::handlers;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        // Bird endpoints
        .route("/api/birds", get(handlers::get_birds))
        .route("/api/birds/random", get(handlers::get_random_bird))
        .route("/api/birds/stats", get(handlers::get_bird_stats))
        .route("/api/birds/{id}/mark-used", post(handlers::mark_bird_used))
        .route("/api/birds/{id}/unmark", post(handlers::unmark_bird))
        .route("/api/birds/reset", post(handlers::reset_birds))
        // Topic endpoints
        .route(
            "/api/topics",
            get(handlers::get_topics).post(handlers::create_topic),
        )
        .route(
            "/api/topics/{id}",
            put(handlers::update_topic).delete(handlers::delete_topic),
        )
        .route("/api/topics/stats", get(handlers::get_topic_stats))
        // Episode endpoints
        .route("/api/episodes", get(handlers::get_episodes))
        .route("/api/episodes/{id}", get(handlers::get_episode))
        .route(
            "/api/episodes/stats/speaking-time",
            get(handlers::get_speaking_time_stats),
        )
        .route(
            "/api/episodes/{id}/topics",
            get(handlers::get_episode_topics),
        )
        .route(
            "/api/episodes/{id}/topics/{topic_id}",
            put(handlers::link_episode_topic).delete(handlers::unlink_episode_topic),
        )
        // Internal admin tool: any origin may call the API
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Nettgeflüster API läuft! 🎙️" }))
}
