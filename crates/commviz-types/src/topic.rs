use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// One of the four concept-pairs the visualizer explains.
///
/// Declaration order is the display order: tab cycling and the numeric
/// shortcuts follow it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    #[default]
    Encryption,
    Encoding,
    Modulation,
    Multiplexing,
}

impl Topic {
    pub const ALL: [Topic; 4] = [
        Topic::Encryption,
        Topic::Encoding,
        Topic::Modulation,
        Topic::Multiplexing,
    ];

    /// Canonical lowercase name (`encryption`, `encoding`, ...)
    pub fn as_str(self) -> &'static str {
        match self {
            Topic::Encryption => "encryption",
            Topic::Encoding => "encoding",
            Topic::Modulation => "modulation",
            Topic::Multiplexing => "multiplexing",
        }
    }

    /// Catalog id naming both directions of the pair (`encryption-decryption`)
    pub fn id(self) -> &'static str {
        match self {
            Topic::Encryption => "encryption-decryption",
            Topic::Encoding => "encoding-decoding",
            Topic::Modulation => "modulation-demodulation",
            Topic::Multiplexing => "multiplexing-demultiplexing",
        }
    }

    /// Zero-based position in [`Topic::ALL`]
    pub fn index(self) -> usize {
        match self {
            Topic::Encryption => 0,
            Topic::Encoding => 1,
            Topic::Modulation => 2,
            Topic::Multiplexing => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Topic> {
        Self::ALL.get(index).copied()
    }

    /// Following topic, wrapping from the last back to the first
    pub fn next(self) -> Topic {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Preceding topic, wrapping from the first to the last
    pub fn previous(self) -> Topic {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Topic::ALL
            .into_iter()
            .find(|topic| topic.as_str() == needle || topic.id() == needle)
            .ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "unknown topic '{}' (expected one of: encryption, encoding, modulation, multiplexing)",
                    s
                ))
            })
    }
}

/// Difficulty rating shown in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "Beginner"),
            Difficulty::Intermediate => write!(f, "Intermediate"),
            Difficulty::Advanced => write!(f, "Advanced"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_names_and_ids() {
        assert_eq!("encryption".parse::<Topic>().unwrap(), Topic::Encryption);
        assert_eq!("encoding-decoding".parse::<Topic>().unwrap(), Topic::Encoding);
        assert_eq!("  Modulation ".parse::<Topic>().unwrap(), Topic::Modulation);
        assert_eq!("MULTIPLEXING".parse::<Topic>().unwrap(), Topic::Multiplexing);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "compression".parse::<Topic>().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(err.to_string().contains("compression"));

        assert!("".parse::<Topic>().is_err());
        assert!("encrypt".parse::<Topic>().is_err());
    }

    #[test]
    fn next_and_previous_wrap() {
        assert_eq!(Topic::Multiplexing.next(), Topic::Encryption);
        assert_eq!(Topic::Encryption.previous(), Topic::Multiplexing);
        for topic in Topic::ALL {
            assert_eq!(topic.next().previous(), topic);
            assert_eq!(Topic::from_index(topic.index()), Some(topic));
        }
        assert_eq!(Topic::from_index(4), None);
    }

    #[test]
    fn serializes_as_lowercase_name() {
        let json = serde_json::to_string(&Topic::Modulation).unwrap();
        assert_eq!(json, "\"modulation\"");
        let back: Topic = serde_json::from_str("\"encoding\"").unwrap();
        assert_eq!(back, Topic::Encoding);
    }
}
