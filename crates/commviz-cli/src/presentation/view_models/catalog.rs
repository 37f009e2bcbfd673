use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TopicListViewModel {
    pub topics: Vec<TopicEntryViewModel>,
    pub completed: usize,
    pub total: usize,
    pub percent: u8,
}

#[derive(Debug, Serialize)]
pub struct TopicEntryViewModel {
    pub number: usize,
    pub name: String,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub duration_minutes: u32,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleViewModel {
    pub text: String,
    pub caption: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glyph: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteViewModel {
    pub term: String,
    pub detail: String,
}

#[derive(Debug, Serialize)]
pub struct TopicDetailViewModel {
    pub name: String,
    pub title: String,
    pub heading: String,
    pub purpose: String,
    pub source_role: String,
    pub destination_role: String,
    pub forward: String,
    pub forward_parameter: String,
    pub reverse: String,
    pub reverse_parameter: String,
    pub original: Vec<SampleViewModel>,
    pub transformed: Vec<SampleViewModel>,
    pub channel: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_note: Option<String>,
    pub notes: Vec<NoteViewModel>,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct ProgressViewModel {
    pub completed: Vec<CompletedTopicViewModel>,
    pub completed_count: usize,
    pub total: usize,
    pub percent: u8,
}

#[derive(Debug, Serialize)]
pub struct CompletedTopicViewModel {
    pub name: String,
    pub title: String,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct CompletionViewModel {
    pub name: String,
    pub title: String,
    pub completed: bool,
    pub percent: u8,
}

#[derive(Debug, Serialize)]
pub struct GuideViewModel {
    pub question: String,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    pub reply: String,
}

#[derive(Debug, Serialize)]
pub struct InitViewModel {
    pub path: String,
    pub created: bool,
    pub tick_interval_ms: u64,
    pub default_topic: String,
    pub autoplay: bool,
}
