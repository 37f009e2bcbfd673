use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Error;

/// Position in the four-step animation cycle.
///
/// The cycle is the same for every topic: the source emits its value, the
/// forward transformer runs, the result crosses the channel, and the
/// destination applies the reverse transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Source,
    Transform,
    Channel,
    Destination,
}

impl Phase {
    pub const COUNT: u8 = 4;

    pub fn index(self) -> u8 {
        match self {
            Phase::Source => 0,
            Phase::Transform => 1,
            Phase::Channel => 2,
            Phase::Destination => 3,
        }
    }

    /// `(step + 1) mod 4`
    pub fn next(self) -> Phase {
        match self {
            Phase::Source => Phase::Transform,
            Phase::Transform => Phase::Channel,
            Phase::Channel => Phase::Destination,
            Phase::Destination => Phase::Source,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::Source => "Source emits original",
            Phase::Transform => "Transformation applied",
            Phase::Channel => "Crossing the channel",
            Phase::Destination => "Reverse transformation",
        }
    }
}

impl TryFrom<u8> for Phase {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Phase::Source),
            1 => Ok(Phase::Transform),
            2 => Ok(Phase::Channel),
            3 => Ok(Phase::Destination),
            other => Err(Error::InvalidArgument(format!(
                "animation step {} is outside 0..={}",
                other,
                Phase::COUNT - 1
            ))),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Running flag plus current phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnimationState {
    pub running: bool,
    pub step: Phase,
}

impl AnimationState {
    /// Idle at phase 0
    pub const IDLE: AnimationState = AnimationState {
        running: false,
        step: Phase::Source,
    };
}
