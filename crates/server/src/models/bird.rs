use serde::{Deserialize, Serialize};

/// A candidate bird to feature in an episode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    pub id: i64,
    /// German common name
    pub name: String,
    /// Latin species name
    pub scientific_name: String,
    pub description: String,
    pub image_url: String,
    /// Whether the bird has already been featured
    pub used: bool,
    /// ISO-8601 timestamp of when the bird was marked used
    pub used_date: Option<String>,
}

/// Payload for inserting a bird (seeder only, no API endpoint)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBird {
    pub name: String,
    pub scientific_name: String,
    pub description: String,
    pub image_url: String,
}

/// Aggregate counts over the bird pool
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BirdStats {
    pub total: i64,
    pub used: i64,
    pub remaining: i64,
}
