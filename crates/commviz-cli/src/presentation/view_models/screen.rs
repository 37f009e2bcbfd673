//! View models for the interactive diagram screen

use super::catalog::NoteViewModel;
use super::common::StatusLevel;

#[derive(Debug, Clone)]
pub struct ScreenViewModel {
    pub tabs: Vec<TabViewModel>,
    pub diagram: DiagramViewModel,
    pub notes: Vec<NoteViewModel>,
    pub control_bar: ControlBarViewModel,
}

impl ScreenViewModel {
    pub fn selected_tab(&self) -> usize {
        self.tabs.iter().position(|t| t.selected).unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabViewModel {
    pub label: String,
    pub selected: bool,
    pub completed: bool,
}

/// One box of the diagram: a value holder or a transformer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageBoxViewModel {
    pub title: String,
    pub lines: Vec<String>,
    pub lit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelViewModel {
    pub label: String,
    pub note: Option<String>,
    pub lit: bool,
}

/// Sender column, channel, receiver column
#[derive(Debug, Clone)]
pub struct DiagramViewModel {
    pub heading: String,
    pub purpose: String,
    pub source_role: String,
    pub destination_role: String,
    pub source: StageBoxViewModel,
    pub encode: StageBoxViewModel,
    pub encoded: StageBoxViewModel,
    pub channel: ChannelViewModel,
    pub received: StageBoxViewModel,
    pub decode: StageBoxViewModel,
    pub delivered: StageBoxViewModel,
}

#[derive(Debug, Clone)]
pub struct ControlBarViewModel {
    pub running: bool,
    pub phase_index: u8,
    pub phase_label: String,
    pub interval_ms: u64,
    pub progress_percent: u8,
    pub status_message: String,
    pub status_level: StatusLevel,
}
