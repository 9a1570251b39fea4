mod birds;
mod episodes;
mod topics;

pub use birds::{get_birds, get_bird_stats, get_random_bird, mark_bird_used, reset_birds, unmark_bird};
pub use episodes::{
    get_episode, get_episode_topics, get_episodes, get_speaking_time_stats, link_episode_topic,
    unlink_episode_topic,
};
pub use topics::{create_topic, delete_topic, get_topic_stats, get_topics, update_topic};
