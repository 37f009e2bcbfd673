pub mod catalog;
pub mod screen;

pub use catalog::{
    present_completion, present_guide_reply, present_init, present_progress, present_topic_detail,
    present_topic_list,
};
pub use screen::{StatusLine, build_screen_view_model, phase_caption, topic_for_shortcut};
