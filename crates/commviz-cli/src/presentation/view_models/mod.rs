pub mod catalog;
pub mod common;
pub mod result;
pub mod screen;

pub use catalog::{
    CompletedTopicViewModel, CompletionViewModel, GuideViewModel, InitViewModel, NoteViewModel, ProgressViewModel,
    SampleViewModel, TopicDetailViewModel, TopicEntryViewModel, TopicListViewModel,
};
pub use common::{Guidance, StatusLevel};
pub use result::{CommandResultViewModel, CreateView};
pub use screen::{
    ChannelViewModel, ControlBarViewModel, DiagramViewModel, ScreenViewModel, StageBoxViewModel,
    TabViewModel,
};
