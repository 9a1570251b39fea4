mod client;
mod error;
pub mod models;
mod parser;

pub use client::FeedClient;
pub use error::FeedError;
pub use models::FeedItem;
pub use parser::parse_podcast_feed;

pub type Result<T> = std::result::Result<T, FeedError>;
