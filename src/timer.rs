use std::time::Duration;

use crate::state::AutoplayState;

/// Recurring trigger driven by the host loop's elapsed time.
///
/// The host feeds frame time through [`AutoplayTimer::advance`]; the timer
/// answers with how many intervals completed. Nothing fires while stopped.
#[derive(Debug, Clone)]
pub struct AutoplayTimer {
    interval: Duration,
    elapsed: Duration,
    state: AutoplayState,
}

impl AutoplayTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            elapsed: Duration::ZERO,
            state: AutoplayState::Stopped,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn state(&self) -> AutoplayState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == AutoplayState::Running
    }

    /// Returns false when already running: a second registration would
    /// double the pace.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.elapsed = Duration::ZERO;
        self.state = AutoplayState::Running;
        true
    }

    /// Returns false when nothing was registered.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.elapsed = Duration::ZERO;
        self.state = AutoplayState::Stopped;
        true
    }

    /// Accounts `dt` of elapsed time and returns the number of completed intervals.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if !self.is_running() {
            return 0;
        }
        self.elapsed += dt;
        let fired = self.elapsed.as_nanos() / self.interval.as_nanos();
        let fired = u32::try_from(fired).unwrap_or(u32::MAX);
        self.elapsed -= self.interval.saturating_mul(fired).min(self.elapsed);
        fired
    }
}
