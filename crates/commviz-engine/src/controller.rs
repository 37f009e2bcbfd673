//! Presentation controller
//!
//! Owns the selected topic and the animation state, plus the tick timer
//! while the animation runs. The timer is `Some` exactly when `running` is
//! true; every operation that stops the animation drops it.

use std::time::{Duration, Instant};

use commviz_types::{AnimationState, Phase, Result, Topic};

use crate::timer::{DEFAULT_TICK_INTERVAL, TickTimer};

/// Read-only view of the controller used by presenters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerSnapshot {
    pub topic: Topic,
    pub animation: AnimationState,
    pub interval: Duration,
}

#[derive(Debug)]
pub struct PresentationController {
    topic: Topic,
    animation: AnimationState,
    interval: Duration,
    timer: Option<TickTimer>,
}

impl PresentationController {
    pub fn new(topic: Topic) -> Self {
        Self::with_interval(topic, DEFAULT_TICK_INTERVAL)
    }

    pub fn with_interval(topic: Topic, interval: Duration) -> Self {
        Self {
            topic,
            animation: AnimationState::IDLE,
            interval,
            timer: None,
        }
    }

    pub fn topic(&self) -> Topic {
        self.topic
    }

    pub fn state(&self) -> AnimationState {
        self.animation
    }

    pub fn is_running(&self) -> bool {
        self.animation.running
    }

    pub fn step(&self) -> Phase {
        self.animation.step
    }

    pub fn timer_armed(&self) -> bool {
        self.timer.is_some()
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            topic: self.topic,
            animation: self.animation,
            interval: self.interval,
        }
    }

    /// Switch topic and return to the idle state
    pub fn select_topic(&mut self, topic: Topic) {
        tracing::info!(from = %self.topic, to = %topic, "select topic");
        self.topic = topic;
        self.reset_animation();
    }

    /// Text boundary for topic selection.
    ///
    /// An unrecognized name is rejected and nothing changes.
    pub fn select_topic_named(&mut self, name: &str) -> Result<Topic> {
        let topic = name.parse::<Topic>().inspect_err(|err| {
            tracing::warn!(input = name, %err, "rejected topic selection");
        })?;
        self.select_topic(topic);
        Ok(topic)
    }

    pub fn toggle_animation(&mut self) {
        self.toggle_animation_at(Instant::now());
    }

    /// Flip `running`; the first tick of a fresh run is due one interval
    /// after `now`
    pub fn toggle_animation_at(&mut self, now: Instant) {
        self.animation.running = !self.animation.running;
        if self.animation.running {
            tracing::info!(topic = %self.topic, step = %self.animation.step, "animation started");
            self.timer = Some(TickTimer::start(self.interval, now));
            tracing::debug!(interval_ms = self.interval.as_millis() as u64, "tick timer armed");
        } else {
            tracing::info!(topic = %self.topic, step = %self.animation.step, "animation paused");
            self.cancel_timer();
        }
    }

    pub fn reset_animation(&mut self) {
        self.animation = AnimationState::IDLE;
        self.cancel_timer();
    }

    /// Advance one phase if running
    pub fn tick(&mut self) {
        if !self.animation.running {
            return;
        }
        self.animation.step = self.animation.step.next();
        tracing::trace!(topic = %self.topic, step = %self.animation.step, "tick");
    }

    /// Fire every tick that became due at or before `now`.
    ///
    /// Returns the number of ticks applied.
    pub fn poll(&mut self, now: Instant) -> u32 {
        self.poll_with(now, |_| {})
    }

    /// Like [`poll`](Self::poll), calling `on_tick` after each tick so the
    /// caller sees every intermediate phase
    pub fn poll_with(&mut self, now: Instant, mut on_tick: impl FnMut(&Self)) -> u32 {
        let Some(timer) = self.timer.as_mut() else {
            return 0;
        };
        let due = timer.take_due(now);
        for _ in 0..due {
            self.tick();
            on_tick(self);
        }
        due
    }

    /// Time until the next tick, `None` while idle
    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        self.timer.as_ref().map(|timer| timer.remaining(now))
    }

    fn cancel_timer(&mut self) {
        if self.timer.take().is_some() {
            tracing::debug!("tick timer cancelled");
        }
    }
}

impl Default for PresentationController {
    fn default() -> Self {
        Self::new(Topic::default())
    }
}
