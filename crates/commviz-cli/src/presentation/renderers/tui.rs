//! TUI Renderer for the show command
//!
//! Owns the presentation controller and drives it from the event loop:
//! key presses become controller operations, and the poll timeout is
//! bounded by the time left until the next tick so phases advance on
//! schedule even when no key is pressed.

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use commviz_engine::{PresentationController, Progress};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};

use crate::presentation::presenters::{StatusLine, build_screen_view_model, topic_for_shortcut};
use crate::presentation::view_models::StatusLevel;
use crate::presentation::views::tui::{ControlBarView, DiagramView, NotesView, TopicTabsView};

/// Longest wait between redraws while idle
const IDLE_POLL: Duration = Duration::from_millis(250);

pub struct TuiRenderer {
    controller: PresentationController,
    progress: Progress,
    progress_path: PathBuf,

    /// UI State: message overriding the default status line
    status: Option<StatusLine>,

    /// UI State: Should quit flag
    should_quit: bool,
}

impl TuiRenderer {
    pub fn new(controller: PresentationController, progress: Progress, progress_path: PathBuf) -> Self {
        Self {
            controller,
            progress,
            progress_path,
            status: None,
            should_quit: false,
        }
    }

    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Leaving the screen cancels any pending tick
        self.controller.reset_animation();

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            let timeout = self
                .controller
                .next_tick_in(Instant::now())
                .map_or(IDLE_POLL, |remaining| remaining.min(IDLE_POLL));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key_event(key);
                }
            }

            if self.should_quit {
                break;
            }

            self.controller.poll(Instant::now());
        }

        Ok(())
    }

    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Raw mode delivers Ctrl+C as a key rather than a signal
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c @ '1'..='4') => {
                if let Some(topic) = c.to_digit(10).and_then(topic_for_shortcut) {
                    self.status = None;
                    self.controller.select_topic(topic);
                }
            }
            KeyCode::Tab | KeyCode::Right => {
                self.status = None;
                self.controller.select_topic(self.controller.topic().next());
            }
            KeyCode::BackTab | KeyCode::Left => {
                self.status = None;
                self.controller.select_topic(self.controller.topic().previous());
            }
            KeyCode::Char(' ') | KeyCode::Char('p') => {
                self.status = None;
                self.controller.toggle_animation();
            }
            KeyCode::Char('r') => {
                self.status = None;
                self.controller.reset_animation();
            }
            KeyCode::Char('c') => self.toggle_completion(),
            _ => {}
        }
    }

    fn toggle_completion(&mut self) {
        let topic = self.controller.topic();
        let completed = self.progress.toggle(topic);
        let title = topic.info().title;

        self.status = Some(match self.progress.save_to(&self.progress_path) {
            Ok(()) if completed => {
                StatusLine::new(format!("Marked {} complete", title), StatusLevel::Success)
            }
            Ok(()) => StatusLine::new(format!("Marked {} incomplete", title), StatusLevel::Info),
            Err(err) => {
                tracing::error!(%err, path = %self.progress_path.display(), "failed to save progress");
                StatusLine::new(format!("Could not save progress: {}", err), StatusLevel::Error)
            }
        });
    }

    fn render(&self, f: &mut Frame) {
        let screen = build_screen_view_model(
            &self.controller.snapshot(),
            &self.progress,
            self.status.as_ref(),
        );

        // Main layout: [Tabs | Diagram | Notes | Control Bar]
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(16),
            Constraint::Length(screen.notes.len() as u16 + 2),
            Constraint::Length(3),
        ])
        .split(f.area());

        f.render_widget(TopicTabsView::new(&screen.tabs), chunks[0]);
        f.render_widget(DiagramView::new(&screen.diagram), chunks[1]);
        f.render_widget(NotesView::new(&screen.notes), chunks[2]);
        f.render_widget(ControlBarView::new(&screen.control_bar), chunks[3]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commviz_types::{AnimationState, Phase, Topic};
    use tempfile::TempDir;

    fn renderer(dir: &TempDir) -> TuiRenderer {
        TuiRenderer::new(
            PresentationController::default(),
            Progress::new(),
            dir.path().join("progress.json"),
        )
    }

    fn press(renderer: &mut TuiRenderer, code: KeyCode) {
        renderer.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn number_keys_select_topics() {
        let dir = TempDir::new().unwrap();
        let mut renderer = renderer(&dir);

        press(&mut renderer, KeyCode::Char('3'));
        assert_eq!(renderer.controller.topic(), Topic::Modulation);
        press(&mut renderer, KeyCode::Char('1'));
        assert_eq!(renderer.controller.topic(), Topic::Encryption);
    }

    #[test]
    fn tab_keys_wrap_around() {
        let dir = TempDir::new().unwrap();
        let mut renderer = renderer(&dir);

        press(&mut renderer, KeyCode::BackTab);
        assert_eq!(renderer.controller.topic(), Topic::Multiplexing);
        press(&mut renderer, KeyCode::Tab);
        assert_eq!(renderer.controller.topic(), Topic::Encryption);
        press(&mut renderer, KeyCode::Right);
        assert_eq!(renderer.controller.topic(), Topic::Encoding);
    }

    #[test]
    fn space_toggles_and_switch_resets() {
        let dir = TempDir::new().unwrap();
        let mut renderer = renderer(&dir);

        press(&mut renderer, KeyCode::Char(' '));
        assert!(renderer.controller.is_running());
        renderer.controller.tick();
        assert_eq!(renderer.controller.step(), Phase::Transform);

        press(&mut renderer, KeyCode::Char('2'));
        assert_eq!(renderer.controller.state(), AnimationState::IDLE);
        assert!(!renderer.controller.timer_armed());
    }

    #[test]
    fn reset_key_returns_to_idle() {
        let dir = TempDir::new().unwrap();
        let mut renderer = renderer(&dir);

        press(&mut renderer, KeyCode::Char('p'));
        renderer.controller.tick();
        press(&mut renderer, KeyCode::Char('r'));
        assert_eq!(renderer.controller.state(), AnimationState::IDLE);
    }

    #[test]
    fn complete_key_persists_progress() {
        let dir = TempDir::new().unwrap();
        let mut renderer = renderer(&dir);

        press(&mut renderer, KeyCode::Char('c'));
        assert!(renderer.progress.is_completed(Topic::Encryption));
        assert_eq!(
            renderer.status.as_ref().map(|s| s.level),
            Some(StatusLevel::Success)
        );

        let saved = Progress::load_from(&dir.path().join("progress.json")).unwrap();
        assert!(saved.is_completed(Topic::Encryption));
    }

    #[test]
    fn quit_keys() {
        let dir = TempDir::new().unwrap();

        let mut renderer_q = renderer(&dir);
        press(&mut renderer_q, KeyCode::Char('q'));
        assert!(renderer_q.should_quit);

        let mut renderer_ctrl_c = renderer(&dir);
        renderer_ctrl_c.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(renderer_ctrl_c.should_quit);
        assert!(!renderer_ctrl_c.progress.is_completed(Topic::Encryption));
    }

    #[test]
    fn release_events_are_ignored() {
        let dir = TempDir::new().unwrap();
        let mut renderer = renderer(&dir);
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        renderer.handle_key_event(key);
        assert!(!renderer.should_quit);
    }
}
