//! Sender → channel → receiver diagram

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::{ChannelViewModel, DiagramViewModel, StageBoxViewModel};

use super::stage_style;

pub struct DiagramView<'a> {
    model: &'a DiagramViewModel,
}

impl<'a> DiagramView<'a> {
    pub fn new(model: &'a DiagramViewModel) -> Self {
        Self { model }
    }
}

fn box_height(stage: &StageBoxViewModel) -> u16 {
    stage.lines.len() as u16 + 2
}

fn render_stage(stage: &StageBoxViewModel, area: Rect, buf: &mut Buffer) {
    let style = stage_style(stage.lit);
    let lines: Vec<Line> = stage.lines.iter().map(|l| Line::from(l.as_str())).collect();
    Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(style)
                .title(stage.title.as_str()),
        )
        .render(area, buf);
}

fn render_arrow(lit: bool, area: Rect, buf: &mut Buffer) {
    Paragraph::new("↓")
        .style(stage_style(lit))
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn render_channel(channel: &ChannelViewModel, area: Rect, buf: &mut Buffer) {
    let rows = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .split(area);

    let arrow = if channel.lit { "══════▶" } else { "──────▶" };
    let mut lines = vec![Line::from(arrow), Line::from(channel.label.as_str())];
    if let Some(note) = &channel.note {
        lines.push(Line::from(note.as_str()));
    }

    Paragraph::new(lines)
        .style(stage_style(channel.lit))
        .alignment(Alignment::Center)
        .render(rows[1], buf);
}

/// One side of the diagram: role label, value, transformer, value
fn render_column(
    role: &str,
    top: &StageBoxViewModel,
    transformer: &StageBoxViewModel,
    bottom: &StageBoxViewModel,
    area: Rect,
    buf: &mut Buffer,
) {
    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(box_height(top)),
        Constraint::Length(1),
        Constraint::Length(box_height(transformer)),
        Constraint::Length(1),
        Constraint::Length(box_height(bottom)),
        Constraint::Min(0),
    ])
    .split(area);

    Paragraph::new(role)
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .render(rows[0], buf);
    render_stage(top, rows[1], buf);
    render_arrow(transformer.lit, rows[2], buf);
    render_stage(transformer, rows[3], buf);
    render_arrow(transformer.lit, rows[4], buf);
    render_stage(bottom, rows[5], buf);
}

impl<'a> Widget for DiagramView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let m = self.model;

        let block = Block::default()
            .borders(Borders::ALL)
            .title(m.heading.as_str())
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(inner);

        Paragraph::new(format!("Purpose: {}", m.purpose))
            .wrap(Wrap { trim: true })
            .render(rows[0], buf);

        let columns = Layout::horizontal([
            Constraint::Percentage(40),
            Constraint::Percentage(20),
            Constraint::Percentage(40),
        ])
        .split(rows[1]);

        render_column(
            &m.source_role,
            &m.source,
            &m.encode,
            &m.encoded,
            columns[0],
            buf,
        );
        render_channel(&m.channel, columns[1], buf);
        render_column(
            &m.destination_role,
            &m.received,
            &m.decode,
            &m.delivered,
            columns[2],
            buf,
        );
    }
}
