//! Stage highlight table
//!
//! Every topic draws the same seven stages: original value at the source,
//! forward transformer, transformed value, channel, received value, reverse
//! transformer, delivered value. Which of them are lit depends only on the
//! animation state.

use commviz_types::{AnimationState, Phase};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Source,
    Encode,
    Encoded,
    Channel,
    Received,
    Decode,
    Delivered,
}

impl Stage {
    pub const ALL: [Stage; 7] = [
        Stage::Source,
        Stage::Encode,
        Stage::Encoded,
        Stage::Channel,
        Stage::Received,
        Stage::Decode,
        Stage::Delivered,
    ];

    /// Whether this stage is highlighted in the given state
    pub fn is_lit(self, state: AnimationState) -> bool {
        let step = state.step;
        match self {
            Stage::Source => step >= Phase::Transform,
            Stage::Encode => step == Phase::Transform,
            Stage::Encoded => step >= Phase::Channel,
            Stage::Channel => step == Phase::Channel,
            Stage::Received => step >= Phase::Destination,
            Stage::Decode => step == Phase::Destination,
            Stage::Delivered => step == Phase::Source && state.running,
        }
    }
}

/// Lit flags for every stage, computed once per render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StageHighlight {
    pub source: bool,
    pub encode: bool,
    pub encoded: bool,
    pub channel: bool,
    pub received: bool,
    pub decode: bool,
    pub delivered: bool,
}

impl StageHighlight {
    pub fn for_state(state: AnimationState) -> Self {
        Self {
            source: Stage::Source.is_lit(state),
            encode: Stage::Encode.is_lit(state),
            encoded: Stage::Encoded.is_lit(state),
            channel: Stage::Channel.is_lit(state),
            received: Stage::Received.is_lit(state),
            decode: Stage::Decode.is_lit(state),
            delivered: Stage::Delivered.is_lit(state),
        }
    }

    pub fn get(&self, stage: Stage) -> bool {
        match stage {
            Stage::Source => self.source,
            Stage::Encode => self.encode,
            Stage::Encoded => self.encoded,
            Stage::Channel => self.channel,
            Stage::Received => self.received,
            Stage::Decode => self.decode,
            Stage::Delivered => self.delivered,
        }
    }

    pub fn lit_stages(&self) -> Vec<Stage> {
        Stage::ALL.into_iter().filter(|s| self.get(*s)).collect()
    }
}
