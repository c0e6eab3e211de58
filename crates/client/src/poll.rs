// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wait loop for a submitted job.
//!
//! Each iteration fetches a snapshot and stops on any non-running status.
//! Otherwise the elapsed time is checked and, if still within budget, the
//! loop sleeps one interval. A job can therefore overrun the timeout by up to
//! one interval plus one fetch.

use std::time::{Duration, Instant};

use tc_core::Clock;
use tc_wire::{JobSnapshot, JobStatus};

/// Result of one [`Poller::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Slept one interval; poll again.
    Ready,
    /// The budget is spent.
    Timeout,
}

/// Fixed-interval poller bounded by a total budget.
pub struct Poller<C: Clock> {
    clock: C,
    interval: Duration,
    timeout: Duration,
    started: Instant,
}

impl<C: Clock> Poller<C> {
    /// Starts the budget now.
    pub fn new(clock: C, interval: Duration, timeout: Duration) -> Self {
        let started = clock.now();
        Self { clock, interval, timeout, started }
    }

    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_duration_since(self.started)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn tick(&mut self) -> Tick {
        if self.elapsed() > self.timeout {
            return Tick::Timeout;
        }
        self.clock.sleep(self.interval);
        Tick::Ready
    }
}

/// Where a wait ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Running,
    Done,
    Failed,
    /// Synthetic: the job was still running when the budget ran out.
    TimedOut,
}

tc_core::simple_display! {
    PollState {
        Running => "running",
        Done => "done",
        Failed => "failed",
        TimedOut => "timed out",
    }
}

impl PollState {
    /// Unrecognized statuses count as failures.
    pub fn from_status(status: JobStatus) -> Self {
        match status {
            JobStatus::Running => PollState::Running,
            JobStatus::Done => PollState::Done,
            JobStatus::Failed | JobStatus::Unknown => PollState::Failed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitOutcome {
    pub state: PollState,
    /// Last snapshot fetched. Still running when `state` is `TimedOut`.
    pub snapshot: JobSnapshot,
    pub polls: u32,
}

/// Drive `fetch` until it reports a terminal status or the poller times out.
///
/// Fetch errors end the wait immediately.
pub fn wait_until_terminal<C, E, F>(poller: &mut Poller<C>, mut fetch: F) -> Result<WaitOutcome, E>
where
    C: Clock,
    F: FnMut() -> Result<JobSnapshot, E>,
{
    let mut polls = 0;
    loop {
        let snapshot = fetch()?;
        polls += 1;

        let state = PollState::from_status(snapshot.job_status());
        if state != PollState::Running {
            return Ok(WaitOutcome { state, snapshot, polls });
        }

        tracing::debug!(polls, elapsed_ms = poller.elapsed().as_millis() as u64, "job still running");
        if poller.tick() == Tick::Timeout {
            return Ok(WaitOutcome { state: PollState::TimedOut, snapshot, polls });
        }
    }
}

#[cfg(test)]
#[path = "poll_tests.rs"]
mod tests;
