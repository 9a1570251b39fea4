use serde::{Deserialize, Serialize};

/// A bird record as harvested from NABU (or from the bundled samples)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BirdRecord {
    /// German common name
    pub name: String,
    /// Latin species name
    pub scientific_name: String,
    /// Short free-text description
    pub description: String,
    /// Portrait image URL
    pub image_url: String,
}
