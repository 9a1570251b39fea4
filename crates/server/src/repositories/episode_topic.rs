use sqlx::SqlitePool;

use crate::models::{EpisodeTopic, EpisodeTopicFlags};

pub struct EpisodeTopicRepository;

impl EpisodeTopicRepository {
    /// All topics linked to an episode, joined with their titles
    pub async fn get_for_episode(
        pool: &SqlitePool,
        episode_id: i64,
    ) -> Result<Vec<EpisodeTopic>, sqlx::Error> {
        let rows = sqlx::query_as::<_, EpisodeTopicRow>(
            r#"
            SELECT et.episode_id, et.topic_id, t.title AS topic_title, et.planned, et.discussed
            FROM episode_topics et
            JOIN topics t ON t.id = et.topic_id
            WHERE et.episode_id = $1
            ORDER BY t.title
            "#,
        )
        .bind(episode_id)
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Create or overwrite the link between an episode and a topic
    pub async fn upsert(
        pool: &SqlitePool,
        episode_id: i64,
        topic_id: i64,
        flags: EpisodeTopicFlags,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO episode_topics (episode_id, topic_id, planned, discussed)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (episode_id, topic_id)
            DO UPDATE SET planned = excluded.planned, discussed = excluded.discussed
            "#,
        )
        .bind(episode_id)
        .bind(topic_id)
        .bind(flags.planned)
        .bind(flags.discussed)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Remove the link between an episode and a topic
    pub async fn delete(
        pool: &SqlitePool,
        episode_id: i64,
        topic_id: i64,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM episode_topics WHERE episode_id = $1 AND topic_id = $2")
                .bind(episode_id)
                .bind(topic_id)
                .execute(pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Internal row type for mapping SQLite results
#[derive(Debug, sqlx::FromRow)]
struct EpisodeTopicRow {
    episode_id: i64,
    topic_id: i64,
    topic_title: String,
    planned: bool,
    discussed: bool,
}

impl From<EpisodeTopicRow> for EpisodeTopic {
    fn from(row: EpisodeTopicRow) -> Self {
        Self {
            episode_id: row.episode_id,
            topic_id: row.topic_id,
            topic_title: row.topic_title,
            planned: row.planned,
            discussed: row.discussed,
        }
    }
}
