use crate::completions::mark_plank;
use crate::state::AppState;
use crate::storage::persist_state;
use serde::Serialize;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{error, info};

pub const PLANK_DURATION_SECS: u32 = 60;
const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerStatus {
    Idle,
    Running,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The timer was not running; nothing changed.
    Idle,
    Counting(u32),
    /// Remaining hit zero on this tick and the timer stopped.
    Finished,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TimerSnapshot {
    pub remaining: u32,
    pub running: bool,
    pub display: String,
}

#[derive(Debug, Clone)]
pub struct PlankTimer {
    duration: u32,
    remaining: u32,
    status: TimerStatus,
}

impl Default for PlankTimer {
    fn default() -> Self {
        Self::new(PLANK_DURATION_SECS)
    }
}

impl PlankTimer {
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            remaining: duration,
            status: TimerStatus::Idle,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }

    /// Returns `true` when the timer was idle and is now running.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.status = TimerStatus::Running;
        true
    }

    /// Returns `true` when a running countdown was stopped.
    pub fn pause(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.status = TimerStatus::Idle;
        true
    }

    pub fn reset(&mut self) {
        self.status = TimerStatus::Idle;
        self.remaining = self.duration;
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.status = TimerStatus::Idle;
            return TickOutcome::Finished;
        }
        TickOutcome::Counting(self.remaining)
    }

    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.remaining / 60, self.remaining % 60)
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            remaining: self.remaining,
            running: self.is_running(),
            display: self.display(),
        }
    }
}

/// The timer plus the task ticking it, if any.
#[derive(Debug, Default)]
pub struct TimerSlot {
    pub timer: PlankTimer,
    ticker: Option<JoinHandle<()>>,
}

impl TimerSlot {
    fn cancel_ticker(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
        }
    }
}

pub async fn start_timer(state: &AppState) -> TimerSnapshot {
    let mut slot = state.timer.lock().await;
    if slot.timer.start() {
        info!(remaining = slot.timer.remaining(), "plank timer started");
        slot.ticker = Some(spawn_ticker(state.clone()));
    }
    slot.timer.snapshot()
}

pub async fn pause_timer(state: &AppState) -> TimerSnapshot {
    let mut slot = state.timer.lock().await;
    if slot.timer.pause() {
        slot.cancel_ticker();
        info!(remaining = slot.timer.remaining(), "plank timer paused");
    }
    slot.timer.snapshot()
}

pub async fn reset_timer(state: &AppState) -> TimerSnapshot {
    let mut slot = state.timer.lock().await;
    slot.cancel_ticker();
    slot.timer.reset();
    slot.timer.snapshot()
}

pub async fn timer_snapshot(state: &AppState) -> TimerSnapshot {
    state.timer.lock().await.timer.snapshot()
}

// Ticks are applied under the timer lock and do nothing once the timer is
// idle, so a late tick after pause/reset can never mark the plank twice.
fn spawn_ticker(state: AppState) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(TICK);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let outcome = {
                let mut slot = state.timer.lock().await;
                let outcome = slot.timer.tick();
                if outcome == TickOutcome::Finished {
                    slot.ticker = None;
                }
                outcome
            };
            match outcome {
                TickOutcome::Counting(_) => continue,
                TickOutcome::Idle => break,
                TickOutcome::Finished => {
                    complete_plank(&state).await;
                    break;
                }
            }
        }
    })
}

async fn complete_plank(state: &AppState) {
    let today = state.clock.today();
    let mut data = state.data.lock().await;
    mark_plank(&mut data, today);
    info!(%today, "plank timer finished, marked plank complete");
    if let Err(err) = persist_state(&state.data_path, &data).await {
        error!("failed to persist plank completion: {}", err.message);
    }
}
