use sqlx::SqlitePool;

use crate::models::{Bird, BirdStats, CreateBird};

/// Common SELECT fields for bird queries
const SELECT_BIRD: &str = r#"
    SELECT id, name, scientific_name, description, image_url, used, used_date
    FROM birds
"#;

pub struct BirdRepository;

impl BirdRepository {
    /// Insert a new bird (seeder path)
    pub async fn create(pool: &SqlitePool, data: CreateBird) -> Result<Bird, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO birds (name, scientific_name, description, image_url, used)
            VALUES ($1, $2, $3, $4, 0)
            RETURNING id
            "#,
        )
        .bind(&data.name)
        .bind(&data.scientific_name)
        .bind(&data.description)
        .bind(&data.image_url)
        .fetch_one(pool)
        .await?;

        let id: i64 = sqlx::Row::get(&result, "id");
        Self::get_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Get a bird by ID
    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Bird>, sqlx::Error> {
        let query = format!("{} WHERE id = $1", SELECT_BIRD);
        let row = sqlx::query_as::<_, BirdRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(Into::into))
    }

    /// Get all birds ordered by name
    pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Bird>, sqlx::Error> {
        let query = format!("{} ORDER BY name", SELECT_BIRD);
        let rows = sqlx::query_as::<_, BirdRow>(&query).fetch_all(pool).await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Pick one unused bird uniformly at random
    pub async fn get_random_unused(pool: &SqlitePool) -> Result<Option<Bird>, sqlx::Error> {
        let query = format!("{} WHERE used = 0 ORDER BY RANDOM() LIMIT 1", SELECT_BIRD);
        let row = sqlx::query_as::<_, BirdRow>(&query)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(Into::into))
    }

    /// Aggregate counts over the pool
    pub async fn stats(pool: &SqlitePool) -> Result<BirdStats, sqlx::Error> {
        let (total, used): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*), COALESCE(SUM(used), 0) FROM birds",
        )
        .fetch_one(pool)
        .await?;

        Ok(BirdStats {
            total,
            used,
            remaining: total - used,
        })
    }

    /// Mark a bird as used with the given timestamp
    pub async fn mark_used(
        pool: &SqlitePool,
        id: i64,
        used_date: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE birds SET used = 1, used_date = $1 WHERE id = $2")
            .bind(used_date)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Clear the used flag and timestamp of a single bird
    pub async fn unmark(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE birds SET used = 0, used_date = NULL WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Reset the whole pool to unused
    pub async fn reset_all(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE birds SET used = 0, used_date = NULL")
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Number of birds in the pool
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM birds")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// Delete all birds (seeder --force path)
    pub async fn delete_all(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM birds").execute(pool).await?;

        Ok(result.rows_affected())
    }
}

/// Internal row type for mapping SQLite results
#[derive(Debug, sqlx::FromRow)]
struct BirdRow {
    id: i64,
    name: String,
    scientific_name: String,
    description: String,
    image_url: String,
    used: bool,
    used_date: Option<String>,
}

impl From<BirdRow> for Bird {
    fn from(row: BirdRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            scientific_name: row.scientific_name,
            description: row.description,
            image_url: row.image_url,
            used: row.used,
            used_date: row.used_date,
        }
    }
}
