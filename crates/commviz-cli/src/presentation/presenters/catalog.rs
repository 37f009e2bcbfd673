use commviz_engine::{GuideAction, GuideReply, Progress};
use commviz_types::{Sample, Topic, catalog};

use crate::config::Config;
use crate::presentation::view_models::{
    CommandResultViewModel, CompletedTopicViewModel, CompletionViewModel, Guidance, GuideViewModel, InitViewModel,
    NoteViewModel, ProgressViewModel, SampleViewModel, TopicDetailViewModel, TopicEntryViewModel,
    TopicListViewModel,
};

pub fn present_topic_list(progress: &Progress) -> CommandResultViewModel<TopicListViewModel> {
    let topics = catalog()
        .iter()
        .map(|info| TopicEntryViewModel {
            number: info.topic.index() + 1,
            name: info.topic.to_string(),
            title: info.title.to_string(),
            description: info.description.to_string(),
            difficulty: info.difficulty.to_string(),
            duration_minutes: info.duration_minutes,
            completed: progress.is_completed(info.topic),
        })
        .collect();

    CommandResultViewModel::new(TopicListViewModel {
        topics,
        completed: progress.completed_count(),
        total: progress.total(),
        percent: progress.percent(),
    })
    .with_suggestion(
        Guidance::new("Open a diagram").with_command("commviz show <topic>"),
    )
}

pub fn present_topic_detail(
    topic: Topic,
    progress: &Progress,
) -> CommandResultViewModel<TopicDetailViewModel> {
    let info = topic.info();
    let panel = topic.panel();

    CommandResultViewModel::new(TopicDetailViewModel {
        name: topic.to_string(),
        title: info.title.to_string(),
        heading: panel.heading.to_string(),
        purpose: panel.purpose.to_string(),
        source_role: panel.source_role.to_string(),
        destination_role: panel.destination_role.to_string(),
        forward: panel.forward.to_string(),
        forward_parameter: panel.forward_parameter.to_string(),
        reverse: panel.reverse.to_string(),
        reverse_parameter: panel.reverse_parameter.to_string(),
        original: samples(panel.original),
        transformed: samples(panel.transformed),
        channel: panel.channel.to_string(),
        channel_note: panel.channel_note.map(str::to_string),
        notes: panel
            .notes
            .iter()
            .map(|n| NoteViewModel {
                term: n.term.to_string(),
                detail: n.detail.to_string(),
            })
            .collect(),
        completed: progress.is_completed(topic),
    })
    .with_suggestion(
        Guidance::new("Watch it animate").with_command(format!("commviz show {} --play", topic)),
    )
}

fn samples(samples: &[Sample]) -> Vec<SampleViewModel> {
    samples
        .iter()
        .map(|s| SampleViewModel {
            text: s.text.to_string(),
            caption: s.caption.to_string(),
            glyph: s.glyph.map(str::to_string),
        })
        .collect()
}

pub fn present_progress(progress: &Progress) -> CommandResultViewModel<ProgressViewModel> {
    let result = CommandResultViewModel::new(ProgressViewModel {
        completed: progress
            .completed_topics()
            .filter_map(|topic| {
                progress
                    .completed_at(topic)
                    .map(|completed_at| CompletedTopicViewModel {
                        name: topic.to_string(),
                        title: topic.info().title.to_string(),
                        completed_at,
                    })
            })
            .collect(),
        completed_count: progress.completed_count(),
        total: progress.total(),
        percent: progress.percent(),
    });

    match Topic::ALL.into_iter().find(|t| !progress.is_completed(*t)) {
        Some(next) => result.with_suggestion(
            Guidance::new(format!("Next up: {}", next.info().title))
                .with_command(format!("commviz show {}", next)),
        ),
        None => result,
    }
}

pub fn present_completion(
    topic: Topic,
    completed: bool,
    progress: &Progress,
) -> CommandResultViewModel<CompletionViewModel> {
    CommandResultViewModel::new(CompletionViewModel {
        name: topic.to_string(),
        title: topic.info().title.to_string(),
        completed,
        percent: progress.percent(),
    })
}

pub fn present_guide_reply(
    question: &str,
    reply: &GuideReply,
) -> CommandResultViewModel<GuideViewModel> {
    let (action, topic) = match reply.action {
        GuideAction::Navigate(topic) => ("navigate", Some(topic)),
        GuideAction::Progress => ("progress", None),
        GuideAction::Help => ("help", None),
        GuideAction::Fallback => ("fallback", None),
    };

    let result = CommandResultViewModel::new(GuideViewModel {
        question: question.to_string(),
        action: action.to_string(),
        topic: topic.map(|t| t.to_string()),
        reply: reply.text.clone(),
    });

    match topic {
        Some(topic) => result.with_suggestion(
            Guidance::new(format!("Open {}", topic.info().title))
                .with_command(format!("commviz show {}", topic)),
        ),
        None => result,
    }
}

pub fn present_init(
    path: &std::path::Path,
    created: bool,
    config: &Config,
) -> CommandResultViewModel<InitViewModel> {
    CommandResultViewModel::new(InitViewModel {
        path: path.display().to_string(),
        created,
        tick_interval_ms: config.tick_interval_ms,
        default_topic: config.default_topic.to_string(),
        autoplay: config.autoplay,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn list_marks_completed_topics() {
        let mut progress = Progress::new();
        progress.toggle(Topic::Encoding);
        let result = present_topic_list(&progress);

        assert_eq!(result.content.topics.len(), 4);
        assert_eq!(result.content.topics[1].name, "encoding");
        assert!(result.content.topics[1].completed);
        assert!(!result.content.topics[0].completed);
        assert_eq!(result.content.topics[3].difficulty, "Advanced");
        assert_eq!(result.content.percent, 25);
    }

    #[test]
    fn detail_carries_static_values() {
        let result = present_topic_detail(Topic::Encoding, &Progress::new());
        assert_eq!(result.content.original[0].text, "A");
        assert_eq!(result.content.transformed[0].text, "01000001");
        assert_eq!(result.content.forward, "ENCODER");
        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some("commviz show encoding --play")
        );
    }

    #[test]
    fn progress_suggests_first_incomplete() {
        let mut progress = Progress::new();
        progress.toggle(Topic::Encryption);
        let result = present_progress(&progress);
        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some("commviz show encoding")
        );

        for topic in Topic::ALL.into_iter().skip(1) {
            progress.toggle(topic);
        }
        assert!(present_progress(&progress).suggestions.is_empty());
    }

    #[test]
    fn progress_carries_completion_times() {
        let mut progress = Progress::new();
        let at = Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap();
        progress.toggle_at(Topic::Modulation, at);

        let result = present_progress(&progress);
        assert_eq!(result.content.completed.len(), 1);
        assert_eq!(result.content.completed[0].name, "modulation");
        assert_eq!(result.content.completed[0].title, "Modulation/Demodulation");
        assert_eq!(result.content.completed[0].completed_at, at);
    }

    #[test]
    fn guide_navigation_suggests_show() {
        let reply = commviz_engine::respond("what is multiplexing", &Progress::new());
        let result = present_guide_reply("what is multiplexing", &reply);
        assert_eq!(result.content.action, "navigate");
        assert_eq!(result.content.topic.as_deref(), Some("multiplexing"));
        assert_eq!(result.suggestions.len(), 1);
    }
}
