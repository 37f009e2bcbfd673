use std::time::{Duration, Instant};

/// Default interval between animation ticks
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1500);

/// Repeating deadline that drives the animation.
///
/// The timer holds no thread or OS handle; it only remembers when the next
/// tick is due. Whoever owns it cancels it by dropping it.
#[derive(Debug, Clone)]
pub struct TickTimer {
    interval: Duration,
    next_deadline: Instant,
}

impl TickTimer {
    /// Arm a timer whose first tick is due one interval after `now`
    pub fn start(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_deadline: now + interval,
        }
    }

    pub fn next_deadline(&self) -> Instant {
        self.next_deadline
    }

    /// Time left until the next tick, zero if it is already due
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_deadline.saturating_duration_since(now)
    }

    /// Count the ticks that became due at or before `now` and move the
    /// deadline past them. Deadlines stay on the original grid, so a late
    /// poll does not stretch the following interval.
    pub fn take_due(&mut self, now: Instant) -> u32 {
        if now < self.next_deadline || self.interval.is_zero() {
            return 0;
        }

        let overdue = now - self.next_deadline;
        let extra =
            u32::try_from(overdue.as_nanos() / self.interval.as_nanos()).unwrap_or(u32::MAX);
        let due = extra.saturating_add(1);
        self.next_deadline += self.interval * due;
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn nothing_due_before_first_interval() {
        let t0 = Instant::now();
        let mut timer = TickTimer::start(100 * MS, t0);
        assert_eq!(timer.take_due(t0), 0);
        assert_eq!(timer.take_due(t0 + 99 * MS), 0);
        assert_eq!(timer.remaining(t0 + 40 * MS), 60 * MS);
    }

    #[test]
    fn fires_once_per_elapsed_interval() {
        let t0 = Instant::now();
        let mut timer = TickTimer::start(100 * MS, t0);
        assert_eq!(timer.take_due(t0 + 100 * MS), 1);
        assert_eq!(timer.take_due(t0 + 150 * MS), 0);
        assert_eq!(timer.take_due(t0 + 200 * MS), 1);
    }

    #[test]
    fn late_poll_catches_up_on_grid() {
        let t0 = Instant::now();
        let mut timer = TickTimer::start(100 * MS, t0);
        assert_eq!(timer.take_due(t0 + 350 * MS), 3);
        assert_eq!(timer.next_deadline(), t0 + 400 * MS);
        assert_eq!(timer.remaining(t0 + 350 * MS), 50 * MS);
    }

    #[test]
    fn extreme_stall_saturates_instead_of_wrapping() {
        let t0 = Instant::now();
        let interval = Duration::from_nanos(1);
        let mut timer = TickTimer::start(interval, t0);

        // ten billion intervals overdue, more than a u32 can count
        let due = timer.take_due(t0 + Duration::from_secs(10));
        assert_eq!(due, u32::MAX);
        assert!(timer.next_deadline() > t0);
    }
}
