//! Keyword guide
//!
//! Answers a free-text question by pointing at the matching topic. Rules
//! are checked in order; the first hit wins.

use commviz_types::Topic;
use serde::Serialize;

use crate::Progress;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "topic", rename_all = "lowercase")]
pub enum GuideAction {
    Navigate(Topic),
    Progress,
    Help,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuideReply {
    pub action: GuideAction,
    pub text: String,
}

const TOPIC_RULES: [(&[&str], Topic); 4] = [
    (&["encrypt", "decryp"], Topic::Encryption),
    (&["encod", "decod"], Topic::Encoding),
    (&["modulat"], Topic::Modulation),
    (&["multiplex"], Topic::Multiplexing),
];

pub fn respond(message: &str, progress: &Progress) -> GuideReply {
    let lower = message.to_lowercase();

    for (keywords, topic) in TOPIC_RULES {
        if keywords.iter().any(|k| lower.contains(k)) {
            tracing::debug!(%topic, "guide routed question");
            return GuideReply {
                action: GuideAction::Navigate(topic),
                text: navigate_text(topic),
            };
        }
    }

    if lower.contains("progress") {
        return GuideReply {
            action: GuideAction::Progress,
            text: format!(
                "You've completed {} out of {} frameworks ({}%). Keep going!",
                progress.completed_count(),
                progress.total(),
                progress.percent()
            ),
        };
    }

    if lower.contains("help") || lower.contains("how") {
        return GuideReply {
            action: GuideAction::Help,
            text: "I can take you to any data communication framework. Ask about \
                   'encryption', 'encoding', 'modulation' or 'multiplexing'."
                .to_string(),
        };
    }

    GuideReply {
        action: GuideAction::Fallback,
        text: "Ask me about encryption, encoding, modulation or multiplexing and \
               I'll point you to the right framework."
            .to_string(),
    }
}

fn navigate_text(topic: Topic) -> String {
    let detail = match topic {
        Topic::Encryption => "how data is secured with keys and algorithms",
        Topic::Encoding => "how data is converted for transmission",
        Topic::Modulation => "how digital signals become analog and back",
        Topic::Multiplexing => "how several signals share one channel",
    };
    format!("Head to {}: it shows {}.", topic.info().title, detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(message: &str) -> GuideAction {
        respond(message, &Progress::new()).action
    }

    #[test]
    fn routes_topic_keywords() {
        assert_eq!(action("How does DECRYPTION work?"), GuideAction::Navigate(Topic::Encryption));
        assert_eq!(action("what is base64 encoding"), GuideAction::Navigate(Topic::Encoding));
        assert_eq!(action("demodulation please"), GuideAction::Navigate(Topic::Modulation));
        assert_eq!(action("Demultiplexing?"), GuideAction::Navigate(Topic::Multiplexing));
    }

    #[test]
    fn topic_rules_win_over_help() {
        // "how" alone would be a help request
        assert_eq!(action("how does encoding work"), GuideAction::Navigate(Topic::Encoding));
        assert_eq!(action("how do I start"), GuideAction::Help);
    }

    #[test]
    fn earlier_topic_rule_wins() {
        assert_eq!(
            action("encryption vs encoding"),
            GuideAction::Navigate(Topic::Encryption)
        );
    }

    #[test]
    fn progress_reports_counts() {
        let mut progress = Progress::new();
        progress.toggle(Topic::Encoding);
        progress.toggle(Topic::Modulation);
        let reply = respond("show my progress", &progress);
        assert_eq!(reply.action, GuideAction::Progress);
        assert!(reply.text.contains("2 out of 4"));
        assert!(reply.text.contains("50%"));
    }

    #[test]
    fn unknown_falls_back() {
        assert_eq!(action("tell me a joke"), GuideAction::Fallback);
        assert_eq!(action(""), GuideAction::Fallback);
    }
}
