use sqlx::SqlitePool;

use crate::models::{Topic, TopicPayload, TopicStats, TopicStatus};

/// Common SELECT fields for topic queries
const SELECT_TOPIC: &str = r#"
    SELECT id, title, description, priority, status, category, created_date
    FROM topics
"#;

pub struct TopicRepository;

impl TopicRepository {
    /// Insert a new topic with the given creation timestamp
    pub async fn create(
        pool: &SqlitePool,
        data: &TopicPayload,
        created_date: &str,
    ) -> Result<Topic, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO topics (title, description, priority, status, category, created_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.priority.as_str())
        .bind(data.status.as_str())
        .bind(&data.category)
        .bind(created_date)
        .fetch_one(pool)
        .await?;

        let id: i64 = sqlx::Row::get(&result, "id");
        Self::get_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Get a topic by ID
    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Topic>, sqlx::Error> {
        let query = format!("{} WHERE id = $1", SELECT_TOPIC);
        let row = sqlx::query_as::<_, TopicRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(Into::into))
    }

    /// Get all topics, optionally filtered by exact status, newest first
    pub async fn get_all(
        pool: &SqlitePool,
        status: Option<TopicStatus>,
    ) -> Result<Vec<Topic>, sqlx::Error> {
        let rows = match status {
            Some(status) => {
                let query = format!(
                    "{} WHERE status = $1 ORDER BY created_date DESC",
                    SELECT_TOPIC
                );
                sqlx::query_as::<_, TopicRow>(&query)
                    .bind(status.as_str())
                    .fetch_all(pool)
                    .await?
            }
            None => {
                let query = format!("{} ORDER BY created_date DESC", SELECT_TOPIC);
                sqlx::query_as::<_, TopicRow>(&query).fetch_all(pool).await?
            }
        };

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Full replace of a topic's mutable fields. Returns None if absent.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: &TopicPayload,
    ) -> Result<Option<Topic>, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE topics
            SET title = $1, description = $2, priority = $3, status = $4, category = $5
            WHERE id = $6
            "#,
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.priority.as_str())
        .bind(data.status.as_str())
        .bind(&data.category)
        .bind(id)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Self::get_by_id(pool, id).await
    }

    /// Delete a topic by ID
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM topics WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Per-status counts over the fixed status set. Rows with a status
    /// outside the enumeration fall into no bucket.
    pub async fn stats(pool: &SqlitePool) -> Result<TopicStats, sqlx::Error> {
        let rows: Vec<(String, i64)> =
            sqlx::query_as("SELECT status, COUNT(*) FROM topics GROUP BY status")
                .fetch_all(pool)
                .await?;

        let mut stats = TopicStats::default();
        for (status, count) in rows {
            match status.as_str() {
                "backlog" => stats.backlog = count,
                "planned" => stats.planned = count,
                "discussed" => stats.discussed = count,
                "skipped" => stats.skipped = count,
                _ => {}
            }
        }

        Ok(stats)
    }
}

/// Internal row type for mapping SQLite results
#[derive(Debug, sqlx::FromRow)]
struct TopicRow {
    id: i64,
    title: String,
    description: Option<String>,
    priority: String,
    status: String,
    category: Option<String>,
    created_date: String,
}

impl From<TopicRow> for Topic {
    fn from(row: TopicRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            priority: row.priority.parse().unwrap_or_default(),
            status: row.status.parse().unwrap_or_default(),
            category: row.category,
            created_date: row.created_date,
        }
    }
}
