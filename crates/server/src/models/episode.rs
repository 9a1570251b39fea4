use serde::{Deserialize, Serialize};

/// A published podcast installment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Episode {
    pub id: i64,
    /// Episode number from the feed title, unique
    pub episode_number: i64,
    pub title: String,
    /// Publish date in `YYYY-MM-DD` format
    pub publish_date: String,
    pub audio_url: String,
    pub duration_minutes: Option<i64>,
    /// Philipp's talk time in minutes, set once transcribed
    pub philipp_speaking_time: Option<i64>,
    /// Nadine's talk time in minutes, set once transcribed
    pub nadine_speaking_time: Option<i64>,
    pub transcription_text: Option<String>,
    /// Whether talk-time fields are populated and count towards stats
    pub transcribed: bool,
}

/// Payload for inserting an episode (importer only, no API endpoint)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEpisode {
    pub episode_number: i64,
    pub title: String,
    pub publish_date: String,
    pub audio_url: String,
    pub duration_minutes: Option<i64>,
}

/// Speaking-time aggregate over transcribed episodes
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpeakingTimeStats {
    pub total_episodes: i64,
    pub avg_philipp: Option<f64>,
    pub avg_nadine: Option<f64>,
    pub total_philipp: Option<i64>,
    pub total_nadine: Option<i64>,
}

/// A topic linked to an episode, with its planning flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeTopic {
    pub episode_id: i64,
    pub topic_id: i64,
    pub topic_title: String,
    /// Topic was planned for this episode
    pub planned: bool,
    /// Topic was actually discussed in this episode
    pub discussed: bool,
}

/// Flags for linking a topic to an episode
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EpisodeTopicFlags {
    #[serde(default)]
    pub planned: bool,
    #[serde(default)]
    pub discussed: bool,
}
