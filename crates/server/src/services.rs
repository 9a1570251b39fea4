mod birds;
mod episodes;
mod feed_import;
mod topics;

pub use birds::BirdService;
pub use episodes::EpisodeService;
pub use feed_import::{
    FeedImportService, ImportError, ImportOutcome, ImportSummary, DEFAULT_FEED_URL,
    DEFAULT_TARGET_YEARS,
};
pub use topics::TopicService;
