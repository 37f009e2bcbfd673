//! Topic tab strip

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs, Widget},
};

use crate::presentation::view_models::TabViewModel;

pub struct TopicTabsView<'a> {
    tabs: &'a [TabViewModel],
}

impl<'a> TopicTabsView<'a> {
    pub fn new(tabs: &'a [TabViewModel]) -> Self {
        Self { tabs }
    }
}

impl<'a> Widget for TopicTabsView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<Line> = self
            .tabs
            .iter()
            .map(|tab| {
                let label = if tab.completed {
                    format!("{} ✓", tab.label)
                } else {
                    tab.label.clone()
                };
                Line::from(label)
            })
            .collect();

        let selected = self.tabs.iter().position(|t| t.selected).unwrap_or(0);

        Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Data Communication Frameworks"),
            )
            .select(selected)
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
            .render(area, buf);
    }
}
