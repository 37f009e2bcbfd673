//! "How it works" panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::NoteViewModel;

pub struct NotesView<'a> {
    notes: &'a [NoteViewModel],
}

impl<'a> NotesView<'a> {
    pub fn new(notes: &'a [NoteViewModel]) -> Self {
        Self { notes }
    }
}

impl<'a> Widget for NotesView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .notes
            .iter()
            .map(|note| {
                Line::from(vec![
                    Span::raw("• "),
                    Span::styled(
                        format!("{}: ", note.term),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(note.detail.as_str()),
                ])
            })
            .collect();

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("How It Works"))
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
