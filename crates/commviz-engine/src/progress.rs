use chrono::{DateTime, Utc};
use commviz_types::{Result, Topic};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Topics the learner has marked complete, with when they did it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    #[serde(default)]
    completed: BTreeMap<Topic, DateTime<Utc>>,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_completed(&self, topic: Topic) -> bool {
        self.completed.contains_key(&topic)
    }

    pub fn completed_at(&self, topic: Topic) -> Option<DateTime<Utc>> {
        self.completed.get(&topic).copied()
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn total(&self) -> usize {
        Topic::ALL.len()
    }

    /// Share of topics completed, rounded to a whole percent
    pub fn percent(&self) -> u8 {
        let ratio = self.completed_count() as f64 / self.total() as f64;
        (ratio * 100.0).round() as u8
    }

    /// Flip completion for `topic`; returns the new flag
    pub fn toggle(&mut self, topic: Topic) -> bool {
        self.toggle_at(topic, Utc::now())
    }

    pub fn toggle_at(&mut self, topic: Topic, now: DateTime<Utc>) -> bool {
        if self.completed.remove(&topic).is_some() {
            tracing::info!(%topic, "topic marked incomplete");
            false
        } else {
            self.completed.insert(topic, now);
            tracing::info!(%topic, "topic marked complete");
            true
        }
    }

    pub fn completed_topics(&self) -> impl Iterator<Item = Topic> + '_ {
        self.completed.keys().copied()
    }

    /// Load from `path`; a missing file is empty progress
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let progress = serde_json::from_str(&content)?;
        Ok(progress)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::debug!(path = %path.display(), completed = self.completed_count(), "progress saved");
        Ok(())
    }
}
