use std::collections::HashSet;
use std::fmt;

use chrono::Datelike;
use feed::{FeedClient, FeedItem};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::models::CreateEpisode;
use crate::repositories::EpisodeRepository;

/// Feed of the Nettgeflüster podcast
pub const DEFAULT_FEED_URL: &str =
    "https://cdn.julephosting.de/podcasts/1188-nettgefluster-der-podcast-eines-ehepaars/feed.rss";

/// Only episodes published in these years are imported
pub const DEFAULT_TARGET_YEARS: [i32; 2] = [2025, 2026];

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Feed error: {0}")]
    Feed(#[from] feed::FeedError),
}

/// Outcome of processing a single feed item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// Stored as a new episode
    Imported { episode_number: i64 },
    /// An episode with this number already exists
    SkippedExisting { episode_number: i64 },
    /// Title carries no `#<digits>` marker
    SkippedNoNumber,
    /// Publish date missing or unparseable
    SkippedNoDate,
    /// Published outside the target years
    SkippedYear { year: i32 },
    /// Insert failed; the run continues
    Failed { message: String },
}

impl fmt::Display for ImportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportOutcome::Imported { episode_number } => {
                write!(f, "imported as episode #{}", episode_number)
            }
            ImportOutcome::SkippedExisting { episode_number } => {
                write!(f, "skipped, episode #{} already stored", episode_number)
            }
            ImportOutcome::SkippedNoNumber => write!(f, "skipped, no episode number in title"),
            ImportOutcome::SkippedNoDate => write!(f, "skipped, no parseable publish date"),
            ImportOutcome::SkippedYear { year } => {
                write!(f, "skipped, published in {}", year)
            }
            ImportOutcome::Failed { message } => write!(f, "failed: {}", message),
        }
    }
}

/// Per-item report within a run summary
#[derive(Debug, Clone)]
pub struct ItemReport {
    pub title: String,
    pub outcome: ImportOutcome,
}

/// Summary of a whole import run
#[derive(Debug, Clone, Default)]
pub struct ImportSummary {
    pub items: Vec<ItemReport>,
}

impl ImportSummary {
    fn record(&mut self, title: &str, outcome: ImportOutcome) {
        self.items.push(ItemReport {
            title: title.to_string(),
            outcome,
        });
    }

    pub fn imported(&self) -> usize {
        self.items
            .iter()
            .filter(|r| matches!(r.outcome, ImportOutcome::Imported { .. }))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.items
            .iter()
            .filter(|r| {
                matches!(
                    r.outcome,
                    ImportOutcome::SkippedExisting { .. }
                        | ImportOutcome::SkippedNoNumber
                        | ImportOutcome::SkippedNoDate
                        | ImportOutcome::SkippedYear { .. }
                )
            })
            .count()
    }

    pub fn failed(&self) -> usize {
        self.items
            .iter()
            .filter(|r| matches!(r.outcome, ImportOutcome::Failed { .. }))
            .count()
    }
}

/// Service importing podcast feed items into the episode catalog.
///
/// Fetching and applying are separate steps so the database path can be
/// exercised without a network.
pub struct FeedImportService {
    db: SqlitePool,
    client: FeedClient,
}

impl FeedImportService {
    pub fn new(db: SqlitePool, client: FeedClient) -> Self {
        Self { db, client }
    }

    /// Fetch the feed and import its items. A feed-level failure aborts
    /// the run; per-item failures only show up in the summary.
    pub async fn import_feed(
        &self,
        url: &str,
        target_years: &[i32],
    ) -> Result<ImportSummary, ImportError> {
        let items = self.client.fetch(url).await?;
        tracing::info!("Feed carries {} items", items.len());

        self.import_items(&items, target_years).await
    }

    /// Apply already-parsed feed items to the episode catalog
    pub async fn import_items(
        &self,
        items: &[FeedItem],
        target_years: &[i32],
    ) -> Result<ImportSummary, ImportError> {
        let mut existing: HashSet<i64> = EpisodeRepository::get_all(&self.db)
            .await?
            .into_iter()
            .map(|e| e.episode_number)
            .collect();

        let mut summary = ImportSummary::default();

        for item in items {
            let outcome = self.process_item(item, target_years, &mut existing).await;
            match &outcome {
                ImportOutcome::Imported { episode_number } => {
                    tracing::info!("Episode #{}: {}", episode_number, item.title);
                }
                ImportOutcome::Failed { message } => {
                    tracing::warn!("Failed to import '{}': {}", item.title, message);
                }
                other => {
                    tracing::debug!("'{}': {}", item.title, other);
                }
            }
            summary.record(&item.title, outcome);
        }

        tracing::info!(
            "Import finished: {} imported, {} skipped, {} failed",
            summary.imported(),
            summary.skipped(),
            summary.failed()
        );

        Ok(summary)
    }

    async fn process_item(
        &self,
        item: &FeedItem,
        target_years: &[i32],
        existing: &mut HashSet<i64>,
    ) -> ImportOutcome {
        let Some(episode_number) = item.episode_number() else {
            return ImportOutcome::SkippedNoNumber;
        };

        let Some(publish_date) = item.publish_date() else {
            return ImportOutcome::SkippedNoDate;
        };

        let year = publish_date.year();
        if !target_years.contains(&year) {
            return ImportOutcome::SkippedYear { year };
        }

        if existing.contains(&episode_number) {
            return ImportOutcome::SkippedExisting { episode_number };
        }

        let create = CreateEpisode {
            episode_number,
            title: item.title.clone(),
            publish_date: publish_date.format("%Y-%m-%d").to_string(),
            audio_url: item.audio_url.clone().unwrap_or_default(),
            duration_minutes: item.duration_minutes(),
        };

        match EpisodeRepository::create(&self.db, create).await {
            Ok(_) => {
                existing.insert(episode_number);
                ImportOutcome::Imported { episode_number }
            }
            Err(e) => ImportOutcome::Failed {
                message: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_test_pool;

    fn item(title: &str, pub_date: &str, duration: &str) -> FeedItem {
        FeedItem {
            title: title.to_string(),
            pub_date: Some(pub_date.to_string()),
            audio_url: Some("https://cdn.example.de/audio.mp3".to_string()),
            itunes_duration: Some(duration.to_string()),
        }
    }

    #[tokio::test]
    async fn test_import_feed_entry() {
        let pool = create_test_pool().await;
        let service = FeedImportService::new(pool.clone(), FeedClient::new());

        let items = vec![item(
            "Folge #42: Vogelkunde",
            "Mon, 10 Mar 2025 06:00:00 +0000",
            "1:05:00",
        )];
        let summary = service
            .import_items(&items, &DEFAULT_TARGET_YEARS)
            .await
            .unwrap();
        assert_eq!(summary.imported(), 1);

        let episode = EpisodeRepository::get_by_number(&pool, 42)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(episode.title, "Folge #42: Vogelkunde");
        assert_eq!(episode.publish_date, "2025-03-10");
        assert_eq!(episode.duration_minutes, Some(65));
        assert!(!episode.transcribed);
    }

    #[tokio::test]
    async fn test_second_import_is_a_no_op() {
        let pool = create_test_pool().await;
        let service = FeedImportService::new(pool.clone(), FeedClient::new());

        let items = vec![
            item("Folge #1", "Mon, 06 Jan 2025 06:00:00 +0000", "3600"),
            item("Folge #2", "Mon, 13 Jan 2025 06:00:00 +0000", "3600"),
        ];

        let first = service
            .import_items(&items, &DEFAULT_TARGET_YEARS)
            .await
            .unwrap();
        assert_eq!(first.imported(), 2);

        let second = service
            .import_items(&items, &DEFAULT_TARGET_YEARS)
            .await
            .unwrap();
        assert_eq!(second.imported(), 0);
        assert_eq!(second.skipped(), 2);
        assert!(second
            .items
            .iter()
            .all(|r| matches!(r.outcome, ImportOutcome::SkippedExisting { .. })));

        let all = EpisodeRepository::get_all(&pool).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_items_outside_target_years_are_skipped() {
        let pool = create_test_pool().await;
        let service = FeedImportService::new(pool, FeedClient::new());

        let items = vec![
            item("Folge #9", "Mon, 02 Dec 2024 06:00:00 +0000", "3600"),
            item("Folge #10", "Mon, 06 Jan 2025 06:00:00 +0000", "3600"),
        ];
        let summary = service
            .import_items(&items, &DEFAULT_TARGET_YEARS)
            .await
            .unwrap();
        assert_eq!(summary.imported(), 1);
        assert_eq!(
            summary.items[0].outcome,
            ImportOutcome::SkippedYear { year: 2024 }
        );
    }

    #[tokio::test]
    async fn test_items_without_number_or_date_are_skipped() {
        let pool = create_test_pool().await;
        let service = FeedImportService::new(pool, FeedClient::new());

        let items = vec![
            FeedItem {
                title: "Trailer".to_string(),
                ..FeedItem::default()
            },
            FeedItem {
                title: "Folge #5".to_string(),
                pub_date: Some("kein Datum".to_string()),
                ..FeedItem::default()
            },
        ];
        let summary = service
            .import_items(&items, &DEFAULT_TARGET_YEARS)
            .await
            .unwrap();
        assert_eq!(summary.imported(), 0);
        assert_eq!(summary.items[0].outcome, ImportOutcome::SkippedNoNumber);
        assert_eq!(summary.items[1].outcome, ImportOutcome::SkippedNoDate);
    }
}
