//! TUI View Components
//!
//! Ratatui Widget implementations for the diagram screen. Each component is
//! a thin wrapper around a ViewModel reference.
//!
//! Color mapping from StatusLevel and highlight flags to Ratatui styles
//! happens here and nowhere else.

pub mod control_bar;
pub mod diagram;
pub mod notes;
pub mod tabs;

pub use control_bar::ControlBarView;
pub use diagram::DiagramView;
pub use notes::NotesView;
pub use tabs::TopicTabsView;

use crate::presentation::view_models::StatusLevel;
use ratatui::style::{Color, Modifier, Style};

/// Convert StatusLevel to Ratatui Color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

/// Border/text style for a diagram element
pub(crate) fn stage_style(lit: bool) -> Style {
    if lit {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let width = buf.area.width as usize;
    buf.content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
