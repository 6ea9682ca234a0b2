//! Simulated progress for long-running backend calls.
//!
//! DESIGN
//! ======
//! The backend exposes no progress signal for upload or re-analysis, so the
//! percentage is a UI affordance: it climbs on a fixed tick with shrinking
//! increments and stalls below 100 until the real result arrives. Call sites
//! only use `start` / `tick` / `cancel` / `on_result`, so a real progress
//! protocol can replace the schedule without touching them.
//!
//! Every run gets a ticket. Timers carry the ticket they were started with and
//! stop as soon as `tick` reports it stale, which prevents a leftover timer
//! from moving the bar after the result (or an unmount) has been handled.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use std::time::Duration;

/// One piece of a piecewise increment schedule.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressStep {
    /// Applies while the current percentage is strictly below this value.
    pub below: f64,
    /// Percentage points added per tick.
    pub increment: f64,
}

/// Tick interval, starting value, ceiling and increments of a simulated bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressSchedule {
    pub start: f64,
    pub ceiling: f64,
    pub interval: Duration,
    pub steps: &'static [ProgressStep],
}

impl ProgressSchedule {
    /// Percentage after one more tick from `current`.
    #[must_use]
    pub fn advance(&self, current: f64) -> f64 {
        let increment = self
            .steps
            .iter()
            .find(|step| current < step.below)
            .map_or(0.0, |step| step.increment);
        (current + increment).min(self.ceiling).max(current)
    }
}

/// Upload: large steps while the file is in transit, then a slow crawl.
pub const UPLOAD: ProgressSchedule = ProgressSchedule {
    start: 10.0,
    ceiling: 95.0,
    interval: Duration::from_millis(800),
    steps: &[
        ProgressStep { below: 60.0, increment: 10.0 },
        ProgressStep { below: 95.0, increment: 3.0 },
    ],
};

/// Re-analysis: a multi-minute backend job, slowing down progressively.
pub const REANALYZE: ProgressSchedule = ProgressSchedule {
    start: 5.0,
    ceiling: 95.0,
    interval: Duration::from_secs(1),
    steps: &[
        ProgressStep { below: 30.0, increment: 5.0 },
        ProgressStep { below: 60.0, increment: 2.0 },
        ProgressStep { below: 80.0, increment: 1.0 },
        ProgressStep { below: 95.0, increment: 0.5 },
    ],
};

/// Lifecycle of a tracked action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProgressPhase {
    #[default]
    Idle,
    Running,
    Complete,
}

/// Stateful progress helper for one action slot.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressTracker {
    schedule: ProgressSchedule,
    phase: ProgressPhase,
    percent: f64,
    ticket: u64,
}

impl ProgressTracker {
    #[must_use]
    pub fn new(schedule: ProgressSchedule) -> Self {
        Self { schedule, phase: ProgressPhase::Idle, percent: 0.0, ticket: 0 }
    }

    /// Begin a run and return its ticket, or `None` if one is already running.
    pub fn start(&mut self) -> Option<u64> {
        if self.phase == ProgressPhase::Running {
            return None;
        }
        self.ticket += 1;
        self.phase = ProgressPhase::Running;
        self.percent = self.schedule.start;
        Some(self.ticket)
    }

    /// Advance one tick for `ticket`.
    ///
    /// Returns `false` once the ticket is no longer the active run, telling the
    /// caller's timer to stop.
    pub fn tick(&mut self, ticket: u64) -> bool {
        if !self.is_active(ticket) {
            return false;
        }
        self.percent = self.schedule.advance(self.percent);
        true
    }

    /// Abandon the current run without a result.
    pub fn cancel(&mut self) {
        self.ticket += 1;
        self.phase = ProgressPhase::Idle;
        self.percent = 0.0;
    }

    /// Apply the backend outcome: 100% on success, back to idle at 0% on failure.
    pub fn on_result(&mut self, succeeded: bool) {
        self.ticket += 1;
        if succeeded {
            self.phase = ProgressPhase::Complete;
            self.percent = 100.0;
        } else {
            self.phase = ProgressPhase::Idle;
            self.percent = 0.0;
        }
    }

    #[must_use]
    pub fn is_active(&self, ticket: u64) -> bool {
        self.phase == ProgressPhase::Running && self.ticket == ticket
    }

    #[must_use]
    pub fn phase(&self) -> ProgressPhase {
        self.phase
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == ProgressPhase::Running
    }

    #[must_use]
    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Whole-number percentage for display.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn display_percent(&self) -> u8 {
        self.percent.clamp(0.0, 100.0).floor() as u8
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.schedule.interval
    }
}
