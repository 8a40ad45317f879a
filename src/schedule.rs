use crate::models::TrackingState;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

pub const NOT_STARTED: &str = "Starts next Saturday";

/// Activities indexed by weekday, Sunday = 0.
pub const SCHEDULE: [&str; 7] = [
    "Yoga (20–30 min) + Walk (30 min)",
    "Bike Bootcamp",
    "Barre or Pilates (20 min) + Walk (30 min)",
    "Strength (30 min)",
    "Core (10 min) + Pilates (10 min) + Walk/Jog (30 min)",
    "Bike Bootcamp",
    "Long Peloton Ride (60+ min)",
];

/// The cycle starts on Saturday, so the plan is listed Saturday first.
pub const WEEKLY_ORDER: [usize; 7] = [6, 0, 1, 2, 3, 4, 5];

pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub const WEEKDAY_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PlanEntry {
    pub weekday: &'static str,
    pub activity: &'static str,
}

pub fn activity_for_weekday(date: NaiveDate) -> &'static str {
    SCHEDULE[date.weekday().num_days_from_sunday() as usize]
}

pub fn schedule_for_date(date: NaiveDate, state: &TrackingState) -> &'static str {
    if date < state.tracking_start_date {
        return NOT_STARTED;
    }
    activity_for_weekday(date)
}

pub fn weekly_plan() -> Vec<PlanEntry> {
    WEEKLY_ORDER
        .iter()
        .map(|&day| PlanEntry {
            weekday: WEEKDAY_NAMES[day],
            activity: SCHEDULE[day],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn state_starting(start: NaiveDate) -> TrackingState {
        TrackingState::with_start(start)
    }

    #[test]
    fn dates_before_start_are_not_started_on_every_weekday() {
        let start = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let state = state_starting(start);
        for offset in 1..=14 {
            let date = start - Duration::days(offset);
            assert_eq!(schedule_for_date(date, &state), NOT_STARTED);
        }
    }

    #[test]
    fn start_day_and_later_follow_the_table() {
        let start = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let state = state_starting(start);
        assert_eq!(schedule_for_date(start, &state), "Long Peloton Ride (60+ min)");
        assert_eq!(
            schedule_for_date(start + Duration::days(1), &state),
            "Yoga (20–30 min) + Walk (30 min)"
        );
        assert_eq!(
            schedule_for_date(start + Duration::days(4), &state),
            "Strength (30 min)"
        );
    }

    #[test]
    fn weekly_plan_runs_saturday_to_friday() {
        let plan = weekly_plan();
        assert_eq!(plan.len(), 7);
        assert_eq!(plan[0].weekday, "Saturday");
        assert_eq!(plan[0].activity, "Long Peloton Ride (60+ min)");
        assert_eq!(plan[6].weekday, "Friday");
        assert_eq!(plan[6].activity, "Bike Bootcamp");
    }
}
