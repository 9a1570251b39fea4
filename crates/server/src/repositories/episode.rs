use sqlx::SqlitePool;

use crate::models::{CreateEpisode, Episode, SpeakingTimeStats};

/// Common SELECT fields for episode queries
const SELECT_EPISODE: &str = r#"
    SELECT
        id, episode_number, title, publish_date, audio_url, duration_minutes,
        philipp_speaking_time, nadine_speaking_time, transcription_text, transcribed
    FROM episodes
"#;

pub struct EpisodeRepository;

impl EpisodeRepository {
    /// Insert a new episode (importer path)
    pub async fn create(pool: &SqlitePool, data: CreateEpisode) -> Result<Episode, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO episodes (episode_number, title, publish_date, audio_url, duration_minutes, transcribed)
            VALUES ($1, $2, $3, $4, $5, 0)
            RETURNING id
            "#,
        )
        .bind(data.episode_number)
        .bind(&data.title)
        .bind(&data.publish_date)
        .bind(&data.audio_url)
        .bind(data.duration_minutes)
        .fetch_one(pool)
        .await?;

        let id: i64 = sqlx::Row::get(&result, "id");
        Self::get_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Get an episode by ID
    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Episode>, sqlx::Error> {
        let query = format!("{} WHERE id = $1", SELECT_EPISODE);
        let row = sqlx::query_as::<_, EpisodeRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(Into::into))
    }

    /// Get an episode by its episode number (the importer's natural key)
    pub async fn get_by_number(
        pool: &SqlitePool,
        episode_number: i64,
    ) -> Result<Option<Episode>, sqlx::Error> {
        let query = format!("{} WHERE episode_number = $1", SELECT_EPISODE);
        let row = sqlx::query_as::<_, EpisodeRow>(&query)
            .bind(episode_number)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(Into::into))
    }

    /// Get all episodes, newest episode number first
    pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Episode>, sqlx::Error> {
        let query = format!("{} ORDER BY episode_number DESC", SELECT_EPISODE);
        let rows = sqlx::query_as::<_, EpisodeRow>(&query)
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Speaking-time aggregate restricted to transcribed episodes
    pub async fn speaking_time_stats(pool: &SqlitePool) -> Result<SpeakingTimeStats, sqlx::Error> {
        let row: (i64, Option<f64>, Option<f64>, Option<i64>, Option<i64>) = sqlx::query_as(
            r#"
            SELECT
                COUNT(*),
                AVG(philipp_speaking_time),
                AVG(nadine_speaking_time),
                SUM(philipp_speaking_time),
                SUM(nadine_speaking_time)
            FROM episodes
            WHERE transcribed = 1
            "#,
        )
        .fetch_one(pool)
        .await?;

        Ok(SpeakingTimeStats {
            total_episodes: row.0,
            avg_philipp: row.1,
            avg_nadine: row.2,
            total_philipp: row.3,
            total_nadine: row.4,
        })
    }
}

/// Internal row type for mapping SQLite results
#[derive(Debug, sqlx::FromRow)]
struct EpisodeRow {
    id: i64,
    episode_number: i64,
    title: String,
    publish_date: String,
    audio_url: String,
    duration_minutes: Option<i64>,
    philipp_speaking_time: Option<i64>,
    nadine_speaking_time: Option<i64>,
    transcription_text: Option<String>,
    transcribed: bool,
}

impl From<EpisodeRow> for Episode {
    fn from(row: EpisodeRow) -> Self {
        Self {
            id: row.id,
            episode_number: row.episode_number,
            title: row.title,
            publish_date: row.publish_date,
            audio_url: row.audio_url,
            duration_minutes: row.duration_minutes,
            philipp_speaking_time: row.philipp_speaking_time,
            nadine_speaking_time: row.nadine_speaking_time,
            transcription_text: row.transcription_text,
            transcribed: row.transcribed,
        }
    }
}
