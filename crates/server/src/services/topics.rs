use sqlx::SqlitePool;

use crate::error::{AppError, AppResult};
use crate::models::{Topic, TopicPayload, TopicStats, TopicStatus};
use crate::repositories::TopicRepository;

/// Service for the topic backlog
pub struct TopicService {
    db: SqlitePool,
}

impl TopicService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// All topics, optionally filtered by status, newest first
    pub async fn get_all(&self, status: Option<TopicStatus>) -> AppResult<Vec<Topic>> {
        Ok(TopicRepository::get_all(&self.db, status).await?)
    }

    /// Create a topic, stamping the creation time server-side
    pub async fn create(&self, payload: TopicPayload) -> AppResult<Topic> {
        let created_date = chrono::Utc::now().to_rfc3339();
        Ok(TopicRepository::create(&self.db, &payload, &created_date).await?)
    }

    /// Full replace of a topic's mutable fields
    pub async fn update(&self, id: i64, payload: TopicPayload) -> AppResult<Topic> {
        TopicRepository::update(&self.db, id, &payload)
            .await?
            .ok_or_else(|| AppError::not_found("Thema nicht gefunden"))
    }

    /// Delete a topic
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let deleted = TopicRepository::delete(&self.db, id).await?;
        if !deleted {
            return Err(AppError::not_found("Thema nicht gefunden"));
        }
        Ok(())
    }

    /// Per-status counts over the fixed status set
    pub async fn stats(&self) -> AppResult<TopicStats> {
        Ok(TopicRepository::stats(&self.db).await?)
    }
}
