mod bird;
mod episode;
mod episode_topic;
mod topic;

pub use bird::BirdRepository;
pub use episode::EpisodeRepository;
pub use episode_topic::EpisodeTopicRepository;
pub use topic::TopicRepository;
