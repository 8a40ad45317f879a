use crate::calendar::DayCell;
use crate::dates::{next_saturday, parse_day_key};
use crate::schedule::PlanEntry;
use crate::timer::TimerSnapshot;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Day-key to completion marker. Only `true` entries are ever stored.
pub type Completions = BTreeMap<String, bool>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrackingState {
    pub tracking_start_date: NaiveDate,
    #[serde(default)]
    pub plank_completions: Completions,
    #[serde(default)]
    pub workout_completions: Completions,
}

impl TrackingState {
    /// Fresh state whose cycle begins on the Saturday after `today`.
    pub fn default_for(today: NaiveDate) -> Self {
        Self::with_start(next_saturday(today))
    }

    pub fn with_start(tracking_start_date: NaiveDate) -> Self {
        Self {
            tracking_start_date,
            plank_completions: Completions::new(),
            workout_completions: Completions::new(),
        }
    }

    /// Layers stored fields over `defaults`, one top-level key at a time.
    ///
    /// A field that is missing or has the wrong shape keeps its default.
    /// Completion maps keep only entries stored as `true`; unknown keys are
    /// ignored.
    pub fn merge_over_defaults(stored: &Map<String, Value>, defaults: TrackingState) -> Self {
        let tracking_start_date = stored
            .get("trackingStartDate")
            .and_then(Value::as_str)
            .and_then(parse_day_key)
            .unwrap_or(defaults.tracking_start_date);

        Self {
            tracking_start_date,
            plank_completions: completions_or_empty(stored.get("plankCompletions")),
            workout_completions: completions_or_empty(stored.get("workoutCompletions")),
        }
    }

    pub fn completions(&self, kind: CompletionKind) -> &Completions {
        match kind {
            CompletionKind::Plank => &self.plank_completions,
            CompletionKind::Workout => &self.workout_completions,
        }
    }

    pub fn completions_mut(&mut self, kind: CompletionKind) -> &mut Completions {
        match kind {
            CompletionKind::Plank => &mut self.plank_completions,
            CompletionKind::Workout => &mut self.workout_completions,
        }
    }
}

fn completions_or_empty(value: Option<&Value>) -> Completions {
    let Some(Value::Object(entries)) = value else {
        return Completions::new();
    };
    entries
        .iter()
        .filter(|(_, flag)| matches!(flag, Value::Bool(true)))
        .map(|(key, _)| (key.clone(), true))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionKind {
    Plank,
    Workout,
}

impl FromStr for CompletionKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "plank" => Ok(Self::Plank),
            "workout" => Ok(Self::Workout),
            other => Err(format!("kind must be 'plank' or 'workout', got '{other}'")),
        }
    }
}

impl fmt::Display for CompletionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plank => f.write_str("plank"),
            Self::Workout => f.write_str("workout"),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub kind: String,
    pub date: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub kind: String,
    pub date: String,
    pub completed: bool,
}

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<i32>,
    /// `prev` or `next`, applied after `year`/`month`.
    pub nav: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub weekdays: [&'static str; 7],
    pub cells: Vec<DayCell>,
}

#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    pub tracking_start_date: String,
    pub plan: Vec<PlanEntry>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub today: String,
    pub plank_done_today: bool,
    pub streak: u32,
    pub total_planks: usize,
    pub tracking_start_date: String,
    pub timer: TimerSnapshot,
}

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub message: &'static str,
    pub tracking_start_date: String,
    pub plank_days: usize,
    pub workout_days: usize,
}
