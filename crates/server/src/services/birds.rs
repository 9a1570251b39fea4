use sqlx::SqlitePool;

use crate::error::{AppError, AppResult};
use crate::models::{Bird, BirdStats};
use crate::repositories::BirdRepository;

/// Service for the bird inventory: listing, random draws and the
/// used/unused lifecycle
pub struct BirdService {
    db: SqlitePool,
}

impl BirdService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// All birds, ordered by name
    pub async fn get_all(&self) -> AppResult<Vec<Bird>> {
        Ok(BirdRepository::get_all(&self.db).await?)
    }

    /// A random unused bird; fails once the pool is exhausted
    pub async fn get_random_unused(&self) -> AppResult<Bird> {
        BirdRepository::get_random_unused(&self.db)
            .await?
            .ok_or_else(|| AppError::not_found("Alle Vögel wurden bereits benutzt!"))
    }

    /// Aggregate counts: total / used / remaining
    pub async fn stats(&self) -> AppResult<BirdStats> {
        Ok(BirdRepository::stats(&self.db).await?)
    }

    /// Mark a bird as used, stamping the current time
    pub async fn mark_used(&self, id: i64) -> AppResult<()> {
        let used_date = chrono::Utc::now().to_rfc3339();
        let updated = BirdRepository::mark_used(&self.db, id, &used_date).await?;
        if !updated {
            return Err(AppError::not_found("Vogel nicht gefunden"));
        }
        Ok(())
    }

    /// Clear a bird's used flag and timestamp
    pub async fn unmark(&self, id: i64) -> AppResult<()> {
        let updated = BirdRepository::unmark(&self.db, id).await?;
        if !updated {
            return Err(AppError::not_found("Vogel nicht gefunden"));
        }
        Ok(())
    }

    /// Reset the whole pool to unused
    pub async fn reset_all(&self) -> AppResult<u64> {
        let count = BirdRepository::reset_all(&self.db).await?;
        tracing::info!("Reset {} birds to unused", count);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_test_pool;
    use crate::models::CreateBird;

    async fn seed_birds(pool: &SqlitePool, names: &[&str]) -> Vec<Bird> {
        let mut birds = Vec::new();
        for name in names {
            let bird = BirdRepository::create(
                pool,
                CreateBird {
                    name: name.to_string(),
                    scientific_name: String::new(),
                    description: String::new(),
                    image_url: String::new(),
                },
            )
            .await
            .unwrap();
            birds.push(bird);
        }
        birds
    }

    #[tokio::test]
    async fn test_stats_invariant_across_lifecycle() {
        let pool = create_test_pool().await;
        let service = BirdService::new(pool.clone());
        let birds = seed_birds(&pool, &["Amsel", "Blaumeise", "Star"]).await;

        let stats = service.stats().await.unwrap();
        assert_eq!((stats.total, stats.used, stats.remaining), (3, 0, 3));

        service.mark_used(birds[0].id).await.unwrap();
        service.mark_used(birds[1].id).await.unwrap();
        let stats = service.stats().await.unwrap();
        assert_eq!((stats.total, stats.used, stats.remaining), (3, 2, 1));
        assert_eq!(stats.remaining, stats.total - stats.used);

        service.unmark(birds[0].id).await.unwrap();
        let stats = service.stats().await.unwrap();
        assert_eq!((stats.total, stats.used, stats.remaining), (3, 1, 2));

        service.reset_all().await.unwrap();
        let stats = service.stats().await.unwrap();
        assert_eq!((stats.total, stats.used, stats.remaining), (3, 0, 3));
    }

    #[tokio::test]
    async fn test_random_never_returns_used_bird() {
        let pool = create_test_pool().await;
        let service = BirdService::new(pool.clone());
        let birds = seed_birds(&pool, &["Amsel", "Blaumeise"]).await;

        service.mark_used(birds[0].id).await.unwrap();

        // Only one unused bird remains, so every draw must return it
        for _ in 0..10 {
            let drawn = service.get_random_unused().await.unwrap();
            assert_eq!(drawn.id, birds[1].id);
            assert!(!drawn.used);
        }

        service.mark_used(birds[1].id).await.unwrap();
        let result = service.get_random_unused().await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_mark_then_unmark_round_trips_flag() {
        let pool = create_test_pool().await;
        let service = BirdService::new(pool.clone());
        let birds = seed_birds(&pool, &["Rotkehlchen"]).await;

        service.mark_used(birds[0].id).await.unwrap();
        let marked = BirdRepository::get_by_id(&pool, birds[0].id)
            .await
            .unwrap()
            .unwrap();
        assert!(marked.used);
        assert!(marked.used_date.is_some());

        service.unmark(birds[0].id).await.unwrap();
        let unmarked = BirdRepository::get_by_id(&pool, birds[0].id)
            .await
            .unwrap()
            .unwrap();
        assert!(!unmarked.used);
        assert!(unmarked.used_date.is_none());
    }

    #[tokio::test]
    async fn test_mark_unknown_bird_is_not_found() {
        let pool = create_test_pool().await;
        let service = BirdService::new(pool);

        assert!(matches!(
            service.mark_used(999).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.unmark(999).await,
            Err(AppError::NotFound(_))
        ));
    }
}
