use crate::dates::day_key;
use crate::models::{CompletionKind, TrackingState};
use chrono::{Duration, NaiveDate};

pub fn mark_plank(state: &mut TrackingState, today: NaiveDate) {
    state.plank_completions.insert(day_key(today), true);
}

/// Flips one day's flag and returns the new value. Turning a day off removes
/// its key.
pub fn toggle(state: &mut TrackingState, kind: CompletionKind, key: &str) -> bool {
    let entries = state.completions_mut(kind);
    if entries.remove(key).is_some() {
        false
    } else {
        entries.insert(key.to_string(), true);
        true
    }
}

pub fn is_complete(state: &TrackingState, kind: CompletionKind, key: &str) -> bool {
    state.completions(kind).get(key).copied().unwrap_or(false)
}

pub fn total_completed_planks(state: &TrackingState) -> usize {
    state.plank_completions.values().filter(|done| **done).count()
}

pub fn current_streak(state: &TrackingState, today: NaiveDate) -> u32 {
    let mut streak = 0u32;
    let mut day = today;
    while is_complete(state, CompletionKind::Plank, &day_key(day)) {
        streak += 1;
        day = day - Duration::days(1);
    }
    streak
}
