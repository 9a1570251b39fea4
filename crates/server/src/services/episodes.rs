use sqlx::SqlitePool;

use crate::error::{AppError, AppResult};
use crate::models::{Episode, EpisodeTopic, EpisodeTopicFlags, SpeakingTimeStats};
use crate::repositories::{EpisodeRepository, EpisodeTopicRepository, TopicRepository};

/// Service for the episode catalog and its topic links. Episode rows
/// themselves are populated by the importer and read-only here.
pub struct EpisodeService {
    db: SqlitePool,
}

impl EpisodeService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// All episodes, newest episode number first
    pub async fn get_all(&self) -> AppResult<Vec<Episode>> {
        Ok(EpisodeRepository::get_all(&self.db).await?)
    }

    /// A single episode by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Episode> {
        EpisodeRepository::get_by_id(&self.db, id)
            .await?
            .ok_or_else(|| AppError::not_found("Episode nicht gefunden"))
    }

    /// Speaking-time aggregate over transcribed episodes
    pub async fn speaking_time_stats(&self) -> AppResult<SpeakingTimeStats> {
        Ok(EpisodeRepository::speaking_time_stats(&self.db).await?)
    }

    /// Topics linked to an episode
    pub async fn get_topics(&self, episode_id: i64) -> AppResult<Vec<EpisodeTopic>> {
        // Distinguish "no links" from "no such episode"
        self.get_by_id(episode_id).await?;
        Ok(EpisodeTopicRepository::get_for_episode(&self.db, episode_id).await?)
    }

    /// Link a topic to an episode, overwriting the flags if the link exists
    pub async fn link_topic(
        &self,
        episode_id: i64,
        topic_id: i64,
        flags: EpisodeTopicFlags,
    ) -> AppResult<()> {
        self.get_by_id(episode_id).await?;
        if TopicRepository::get_by_id(&self.db, topic_id).await?.is_none() {
            return Err(AppError::not_found("Thema nicht gefunden"));
        }

        EpisodeTopicRepository::upsert(&self.db, episode_id, topic_id, flags).await?;
        Ok(())
    }

    /// Remove the link between an episode and a topic
    pub async fn unlink_topic(&self, episode_id: i64, topic_id: i64) -> AppResult<()> {
        let deleted = EpisodeTopicRepository::delete(&self.db, episode_id, topic_id).await?;
        if !deleted {
            return Err(AppError::not_found("Verknüpfung nicht gefunden"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_test_pool;
    use crate::models::{CreateEpisode, TopicPayload};

    async fn seed_episode(pool: &SqlitePool, number: i64, title: &str) -> Episode {
        EpisodeRepository::create(
            pool,
            CreateEpisode {
                episode_number: number,
                title: title.to_string(),
                publish_date: "2025-03-10".to_string(),
                audio_url: format!("https://cdn.example.de/ep{number}.mp3"),
                duration_minutes: Some(60),
            },
        )
        .await
        .unwrap()
    }

    async fn set_speaking_times(
        pool: &SqlitePool,
        id: i64,
        philipp: i64,
        nadine: i64,
    ) {
        sqlx::query(
            "UPDATE episodes SET philipp_speaking_time = $1, nadine_speaking_time = $2, transcribed = 1 WHERE id = $3",
        )
        .bind(philipp)
        .bind(nadine)
        .bind(id)
        .execute(pool)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_number_descending() {
        let pool = create_test_pool().await;
        let service = EpisodeService::new(pool.clone());

        seed_episode(&pool, 1, "Folge #1").await;
        seed_episode(&pool, 3, "Folge #3").await;
        seed_episode(&pool, 2, "Folge #2").await;

        let episodes = service.get_all().await.unwrap();
        let numbers: Vec<i64> = episodes.iter().map(|e| e.episode_number).collect();
        assert_eq!(numbers, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let pool = create_test_pool().await;
        let service = EpisodeService::new(pool);

        assert!(matches!(
            service.get_by_id(42).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_speaking_time_stats_only_counts_transcribed() {
        let pool = create_test_pool().await;
        let service = EpisodeService::new(pool.clone());

        let a = seed_episode(&pool, 1, "Folge #1").await;
        let b = seed_episode(&pool, 2, "Folge #2").await;
        seed_episode(&pool, 3, "Folge #3").await; // never transcribed

        set_speaking_times(&pool, a.id, 30, 40).await;
        set_speaking_times(&pool, b.id, 20, 30).await;

        let stats = service.speaking_time_stats().await.unwrap();
        assert_eq!(stats.total_episodes, 2);
        assert_eq!(stats.total_philipp, Some(50));
        assert_eq!(stats.total_nadine, Some(70));
        assert_eq!(stats.avg_philipp, Some(25.0));
        assert_eq!(stats.avg_nadine, Some(35.0));
    }

    #[tokio::test]
    async fn test_speaking_time_stats_empty() {
        let pool = create_test_pool().await;
        let service = EpisodeService::new(pool);

        let stats = service.speaking_time_stats().await.unwrap();
        assert_eq!(stats.total_episodes, 0);
        assert_eq!(stats.avg_philipp, None);
        assert_eq!(stats.total_nadine, None);
    }

    #[tokio::test]
    async fn test_topic_links() {
        let pool = create_test_pool().await;
        let service = EpisodeService::new(pool.clone());

        let episode = seed_episode(&pool, 1, "Folge #1").await;
        let topic = TopicRepository::create(
            &pool,
            &TopicPayload {
                title: "Zugvögel".to_string(),
                description: None,
                priority: Default::default(),
                status: Default::default(),
                category: None,
            },
            "2025-01-01T00:00:00Z",
        )
        .await
        .unwrap();

        service
            .link_topic(
                episode.id,
                topic.id,
                EpisodeTopicFlags {
                    planned: true,
                    discussed: false,
                },
            )
            .await
            .unwrap();

        let links = service.get_topics(episode.id).await.unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].topic_title, "Zugvögel");
        assert!(links[0].planned);
        assert!(!links[0].discussed);

        // Upsert overwrites the flags
        service
            .link_topic(
                episode.id,
                topic.id,
                EpisodeTopicFlags {
                    planned: true,
                    discussed: true,
                },
            )
            .await
            .unwrap();
        let links = service.get_topics(episode.id).await.unwrap();
        assert_eq!(links.len(), 1);
        assert!(links[0].discussed);

        service.unlink_topic(episode.id, topic.id).await.unwrap();
        assert!(service.get_topics(episode.id).await.unwrap().is_empty());
        assert!(matches!(
            service.unlink_topic(episode.id, topic.id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_link_topic_validates_both_sides() {
        let pool = create_test_pool().await;
        let service = EpisodeService::new(pool.clone());
        let episode = seed_episode(&pool, 1, "Folge #1").await;

        assert!(matches!(
            service
                .link_topic(999, 1, EpisodeTopicFlags::default())
                .await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service
                .link_topic(episode.id, 999, EpisodeTopicFlags::default())
                .await,
            Err(AppError::NotFound(_))
        ));
    }
}
