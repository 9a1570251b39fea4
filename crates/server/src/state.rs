use sqlx::SqlitePool;
use std::sync::Arc;

use crate::config::Config;
use crate::services::{BirdService, EpisodeService, TopicService};

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<Config>,
    pub birds: Arc<BirdService>,
    pub topics: Arc<TopicService>,
    pub episodes: Arc<EpisodeService>,
}

impl AppState {
    pub fn new(db: SqlitePool, config: Config) -> Self {
        let birds = Arc::new(BirdService::new(db.clone()));
        let topics = Arc::new(TopicService::new(db.clone()));
        let episodes = Arc::new(EpisodeService::new(db.clone()));

        Self {
            db,
            config: Arc::new(config),
            birds,
            topics,
            episodes,
        }
    }
}
