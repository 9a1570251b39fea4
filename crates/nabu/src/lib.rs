mod client;
mod error;
pub mod models;
mod samples;

pub use client::NabuClient;
pub use error::NabuError;
pub use models::BirdRecord;
pub use samples::sample_birds;

pub type Result<T> = std::result::Result<T, NabuError>;
