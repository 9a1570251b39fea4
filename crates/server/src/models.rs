mod bird;
mod episode;
mod topic;

pub use bird::*;
pub use episode::*;
pub use topic::*;
