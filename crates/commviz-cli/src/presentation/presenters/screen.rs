//! Screen presenter
//!
//! Pure function from controller state + progress to the TUI view model.
//! Highlighting comes from the shared stage table; only the labels and
//! values differ per topic.

use commviz_engine::{ControllerSnapshot, Progress, StageHighlight};
use commviz_types::{Phase, Sample, Topic, catalog};

use crate::presentation::view_models::{
    ChannelViewModel, ControlBarViewModel, DiagramViewModel, NoteViewModel, ScreenViewModel,
    StageBoxViewModel, StatusLevel, TabViewModel,
};

/// Transient message shown in the control bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub message: String,
    pub level: StatusLevel,
}

impl StatusLine {
    pub fn new(message: impl Into<String>, level: StatusLevel) -> Self {
        Self {
            message: message.into(),
            level,
        }
    }
}

pub fn build_screen_view_model(
    snapshot: &ControllerSnapshot,
    progress: &Progress,
    status: Option<&StatusLine>,
) -> ScreenViewModel {
    let tabs = catalog()
        .iter()
        .map(|info| TabViewModel {
            label: format!("{} {}", info.topic.index() + 1, info.title),
            selected: info.topic == snapshot.topic,
            completed: progress.is_completed(info.topic),
        })
        .collect();

    let notes = snapshot
        .topic
        .panel()
        .notes
        .iter()
        .map(|note| NoteViewModel {
            term: note.term.to_string(),
            detail: note.detail.to_string(),
        })
        .collect();

    let status = status
        .cloned()
        .unwrap_or_else(|| default_status(snapshot));

    ScreenViewModel {
        tabs,
        diagram: build_diagram(snapshot),
        notes,
        control_bar: ControlBarViewModel {
            running: snapshot.animation.running,
            phase_index: snapshot.animation.step.index(),
            phase_label: snapshot.animation.step.label().to_string(),
            interval_ms: snapshot.interval.as_millis() as u64,
            progress_percent: progress.percent(),
            status_message: status.message,
            status_level: status.level,
        },
    }
}

fn default_status(snapshot: &ControllerSnapshot) -> StatusLine {
    let animation = snapshot.animation;
    if animation.running {
        StatusLine::new("Animating", StatusLevel::Success)
    } else if animation.step.index() == 0 {
        StatusLine::new("Press space to start the animation", StatusLevel::Info)
    } else {
        StatusLine::new("Paused", StatusLevel::Warning)
    }
}

fn build_diagram(snapshot: &ControllerSnapshot) -> DiagramViewModel {
    let panel = snapshot.topic.panel();
    let lit = StageHighlight::for_state(snapshot.animation);

    let value_box = |samples: &[Sample], lit: bool| StageBoxViewModel {
        title: box_title(samples),
        lines: sample_lines(samples),
        lit,
    };
    let transformer_box = |name: &str, parameter: &str, lit: bool| StageBoxViewModel {
        title: name.to_string(),
        lines: vec![parameter.to_string()],
        lit,
    };

    DiagramViewModel {
        heading: panel.heading.to_string(),
        purpose: panel.purpose.to_string(),
        source_role: panel.source_role.to_string(),
        destination_role: panel.destination_role.to_string(),
        source: value_box(panel.original, lit.source),
        encode: transformer_box(panel.forward, panel.forward_parameter, lit.encode),
        encoded: value_box(panel.transformed, lit.encoded),
        channel: ChannelViewModel {
            label: panel.channel.to_string(),
            note: panel.channel_note.map(str::to_string),
            lit: lit.channel,
        },
        received: value_box(panel.transformed, lit.received),
        decode: transformer_box(panel.reverse, panel.reverse_parameter, lit.decode),
        delivered: value_box(panel.original, lit.delivered),
    }
}

fn box_title(samples: &[Sample]) -> String {
    match samples {
        [single] => single.caption.to_string(),
        _ => "Signals".to_string(),
    }
}

/// A lone sample shows its value and waveform; several samples share one
/// box with a `value: caption` line each
fn sample_lines(samples: &[Sample]) -> Vec<String> {
    match samples {
        [single] => {
            let mut lines = vec![single.text.to_string()];
            if let Some(glyph) = single.glyph {
                lines.push(glyph.to_string());
            }
            lines
        }
        _ => samples
            .iter()
            .map(|s| format!("{}: {}", s.text, s.caption))
            .collect(),
    }
}

fn joined_values(samples: &[Sample]) -> String {
    samples
        .iter()
        .map(|s| s.text)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One-line description of what the diagram shows during `phase`
pub fn phase_caption(topic: Topic, phase: Phase) -> String {
    let panel = topic.panel();
    let original = joined_values(panel.original);
    let transformed = joined_values(panel.transformed);
    match phase {
        Phase::Source => format!("{} emits {}", panel.source_role, original),
        Phase::Transform => format!(
            "{} [{}] turns {} into {}",
            panel.forward, panel.forward_parameter, original, transformed
        ),
        Phase::Channel => format!(
            "{} crosses the {} to the {}",
            transformed, panel.channel, panel.destination_role
        ),
        Phase::Destination => format!(
            "{} [{}] restores {}",
            panel.reverse, panel.reverse_parameter, original
        ),
    }
}

/// Topic behind a 1-based tab number
pub fn topic_for_shortcut(number: u32) -> Option<Topic> {
    number
        .checked_sub(1)
        .and_then(|i| Topic::from_index(i as usize))
}

#[cfg(test)]
mod tests {
    use super::*;
    use commviz_engine::PresentationController;

    fn screen_for(controller: &PresentationController) -> ScreenViewModel {
        build_screen_view_model(&controller.snapshot(), &Progress::new(), None)
    }

    #[test]
    fn idle_encryption_screen() {
        let controller = PresentationController::new(Topic::Encryption);
        let screen = screen_for(&controller);

        assert_eq!(screen.selected_tab(), 0);
        assert_eq!(screen.tabs[0].label, "1 Encryption/Decryption");
        assert_eq!(screen.diagram.source.lines, vec!["HELLO"]);
        assert_eq!(screen.diagram.encoded.lines, vec!["KHOOR"]);
        assert_eq!(screen.diagram.encode.title, "ENCRYPTOR");
        assert_eq!(screen.diagram.decode.lines, vec!["KEY: 3"]);
        assert!(!screen.diagram.source.lit);
        assert!(!screen.diagram.delivered.lit);
        assert!(!screen.control_bar.running);
        assert_eq!(screen.control_bar.interval_ms, 1500);
    }

    #[test]
    fn highlights_follow_phase() {
        let mut controller = PresentationController::new(Topic::Encoding);
        controller.toggle_animation();
        assert!(screen_for(&controller).diagram.delivered.lit);

        controller.tick();
        let screen = screen_for(&controller);
        assert!(screen.diagram.source.lit && screen.diagram.encode.lit);
        assert!(!screen.diagram.channel.lit);

        controller.tick();
        let screen = screen_for(&controller);
        assert!(screen.diagram.channel.lit && screen.diagram.encoded.lit);
        assert!(!screen.diagram.encode.lit);

        controller.tick();
        let screen = screen_for(&controller);
        assert!(screen.diagram.received.lit && screen.diagram.decode.lit);
        assert_eq!(screen.control_bar.phase_index, 3);
    }

    #[test]
    fn multiplexing_groups_signals() {
        let controller = PresentationController::new(Topic::Multiplexing);
        let screen = screen_for(&controller);
        assert_eq!(screen.diagram.source.title, "Signals");
        assert_eq!(screen.diagram.source.lines.len(), 4);
        assert_eq!(screen.diagram.source.lines[0], "Signal A: Voice Call");
        assert_eq!(screen.notes.len(), 6);
    }

    #[test]
    fn modulation_shows_waveforms_and_channel_note() {
        let controller = PresentationController::new(Topic::Modulation);
        let screen = screen_for(&controller);
        assert_eq!(screen.diagram.source.lines.len(), 2);
        assert_eq!(
            screen.diagram.channel.note.as_deref(),
            Some("(Phone line, Radio)")
        );
    }

    #[test]
    fn completed_tabs_and_progress() {
        let controller = PresentationController::new(Topic::Encryption);
        let mut progress = Progress::new();
        progress.toggle(Topic::Modulation);
        let screen = build_screen_view_model(&controller.snapshot(), &progress, None);
        assert!(screen.tabs[2].completed);
        assert!(!screen.tabs[0].completed);
        assert_eq!(screen.control_bar.progress_percent, 25);
    }

    #[test]
    fn explicit_status_overrides_default() {
        let controller = PresentationController::default();
        let status = StatusLine::new("Saved", StatusLevel::Success);
        let screen = build_screen_view_model(&controller.snapshot(), &Progress::new(), Some(&status));
        assert_eq!(screen.control_bar.status_message, "Saved");
        assert_eq!(screen.control_bar.status_level, StatusLevel::Success);
    }

    #[test]
    fn phase_captions_use_topic_values() {
        assert_eq!(
            phase_caption(Topic::Encryption, Phase::Transform),
            "ENCRYPTOR [KEY: 3] turns HELLO into KHOOR"
        );
        assert_eq!(
            phase_caption(Topic::Encoding, Phase::Channel),
            "01000001 crosses the Transmission to the DESTINATION"
        );
        assert!(
            phase_caption(Topic::Multiplexing, Phase::Source)
                .contains("Signal A, Signal B, Signal C, Signal D")
        );
    }

    #[test]
    fn shortcuts_map_to_topics() {
        assert_eq!(topic_for_shortcut(1), Some(Topic::Encryption));
        assert_eq!(topic_for_shortcut(4), Some(Topic::Multiplexing));
        assert_eq!(topic_for_shortcut(0), None);
        assert_eq!(topic_for_shortcut(5), None);
    }
}
