pub mod catalog;
pub mod error;
pub mod phase;
pub mod topic;

pub use catalog::{Note, Panel, Sample, TopicInfo, catalog};
pub use error::{Error, Result};
pub use phase::{AnimationState, Phase};
pub use topic::{Difficulty, Topic};
