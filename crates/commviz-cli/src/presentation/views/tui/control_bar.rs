//! Control bar: play state, phase, progress, key hints

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::ControlBarViewModel;

use super::status_level_to_color;

pub struct ControlBarView<'a> {
    model: &'a ControlBarViewModel,
}

impl<'a> ControlBarView<'a> {
    pub fn new(model: &'a ControlBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for ControlBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(inner);

        let (state_label, state_color) = if self.model.running {
            ("▶ Playing", Color::Green)
        } else {
            ("⏸ Paused", Color::Gray)
        };

        let status_line = Line::from(vec![
            Span::styled(format!("{} ", state_label), Style::default().fg(state_color)),
            Span::raw("| "),
            Span::raw(format!(
                "Step {}/4 {} ",
                self.model.phase_index + 1,
                self.model.phase_label
            )),
            Span::raw("| "),
            Span::raw(format!("{}ms ", self.model.interval_ms)),
            Span::raw("| "),
            Span::raw(format!("Done {}% ", self.model.progress_percent)),
            Span::raw("| "),
            Span::styled(
                self.model.status_message.as_str(),
                Style::default().fg(status_level_to_color(self.model.status_level)),
            ),
        ]);
        Paragraph::new(status_line).render(chunks[0], buf);

        let key = Style::default().fg(Color::Yellow);
        let help_line = Line::from(vec![
            Span::styled("[space]", key),
            Span::raw("play "),
            Span::styled("[r]", key),
            Span::raw("eset "),
            Span::styled("[1-4/tab]", key),
            Span::raw("topic "),
            Span::styled("[c]", key),
            Span::raw("omplete "),
            Span::styled("[q]", key),
            Span::raw("uit"),
        ]);
        Paragraph::new(help_line).render(chunks[1], buf);
    }
}
