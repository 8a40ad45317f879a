use crate::completions::is_complete;
use crate::dates::day_key;
use crate::models::{CompletionKind, TrackingState};
use crate::schedule::schedule_for_date;
use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::Serialize;

pub const GRID_CELLS: usize = 42;

/// A displayed month. Only the year and month matter; the day is pinned to the 1st.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    first_day: NaiveDate,
}

impl CalendarMonth {
    /// `month0` is zero based and may overflow in either direction:
    /// `(2024, -1)` is December 2023 and `(2024, 12)` is January 2025.
    pub fn new(year: i32, month0: i32) -> Option<Self> {
        let total = i64::from(year) * 12 + i64::from(month0);
        let year = i32::try_from(total.div_euclid(12)).ok()?;
        let month = total.rem_euclid(12) as u32 + 1;
        NaiveDate::from_ymd_opt(year, month, 1).map(|first_day| Self { first_day })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first_day: date - Duration::days(i64::from(date.day0())),
        }
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month0(&self) -> u32 {
        self.first_day.month0()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn previous(&self) -> Option<Self> {
        self.first_day
            .checked_sub_months(Months::new(1))
            .map(|first_day| Self { first_day })
    }

    pub fn next(&self) -> Option<Self> {
        self.first_day
            .checked_add_months(Months::new(1))
            .map(|first_day| Self { first_day })
    }

    pub fn label(&self) -> String {
        self.first_day.format("%B %Y").to_string()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DayCell {
    pub date: String,
    pub day: u32,
    pub is_current_month: bool,
    pub is_today: bool,
    pub workout_text: &'static str,
    pub plank_done: bool,
    pub workout_done: bool,
}

/// Six full weeks starting on the Sunday on or before the 1st of `month`.
///
/// Returns `None` when that window runs past the dates chrono can represent.
pub fn build_calendar_at(
    today: NaiveDate,
    month: CalendarMonth,
    state: &TrackingState,
) -> Option<Vec<DayCell>> {
    let first = month.first_day();
    let offset = i64::from(first.weekday().num_days_from_sunday());
    let grid_start = first.checked_sub_signed(Duration::days(offset))?;
    grid_start.checked_add_signed(Duration::days(GRID_CELLS as i64 - 1))?;

    let cells = grid_start
        .iter_days()
        .take(GRID_CELLS)
        .map(|date| {
            let key = day_key(date);
            DayCell {
                day: date.day(),
                is_current_month: date.month0() == month.month0() && date.year() == month.year(),
                is_today: date == today,
                workout_text: schedule_for_date(date, state),
                plank_done: is_complete(state, CompletionKind::Plank, &key),
                workout_done: is_complete(state, CompletionKind::Workout, &key),
                date: key,
            }
        })
        .collect();
    Some(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completions::{mark_plank, toggle};
    use crate::schedule::NOT_STARTED;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn june_2024_grid_shape() {
        let state = TrackingState::with_start(date(2024, 6, 1));
        let june = CalendarMonth::new(2024, 5).unwrap();
        let cells = build_calendar_at(date(2024, 6, 12), june, &state).unwrap();

        assert_eq!(cells.len(), GRID_CELLS);
        let first = crate::dates::parse_day_key(&cells[0].date).unwrap();
        assert_eq!(first.weekday(), Weekday::Sun);
        assert_eq!(first, date(2024, 5, 26));

        let june_first = cells.iter().find(|cell| cell.date == "2024-06-01").unwrap();
        assert!(june_first.is_current_month);
        assert!(!cells[0].is_current_month);
        assert_eq!(cells.iter().filter(|cell| cell.is_current_month).count(), 30);
    }

    #[test]
    fn month_starting_on_sunday_begins_on_the_first() {
        let state = TrackingState::with_start(date(2024, 1, 1));
        let september = CalendarMonth::new(2024, 8).unwrap();
        let cells = build_calendar_at(date(2024, 9, 3), september, &state).unwrap();
        assert_eq!(cells[0].date, "2024-09-01");
        assert!(cells[0].is_current_month);
    }

    #[test]
    fn cells_carry_today_schedule_and_completions() {
        let mut state = TrackingState::with_start(date(2024, 6, 15));
        mark_plank(&mut state, date(2024, 6, 12));
        toggle(&mut state, CompletionKind::Workout, "2024-06-16");

        let june = CalendarMonth::containing(date(2024, 6, 12));
        let cells = build_calendar_at(date(2024, 6, 12), june, &state).unwrap();

        let today: Vec<_> = cells.iter().filter(|cell| cell.is_today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].date, "2024-06-12");
        assert!(today[0].plank_done);
        assert!(!today[0].workout_done);
        assert_eq!(today[0].workout_text, NOT_STARTED);

        let sunday = cells.iter().find(|cell| cell.date == "2024-06-16").unwrap();
        assert!(sunday.workout_done);
        assert_eq!(sunday.workout_text, "Yoga (20–30 min) + Walk (30 min)");
    }

    #[test]
    fn same_inputs_give_the_same_grid() {
        let state = TrackingState::with_start(date(2024, 2, 3));
        let month = CalendarMonth::new(2024, 1).unwrap();
        let today = date(2024, 2, 20);
        assert_eq!(
            build_calendar_at(today, month, &state),
            build_calendar_at(today, month, &state)
        );
    }

    #[test]
    fn month_index_wraps_across_years() {
        let december = CalendarMonth::new(2024, -1).unwrap();
        assert_eq!((december.year(), december.month0()), (2023, 11));
        let january = CalendarMonth::new(2024, 12).unwrap();
        assert_eq!((january.year(), january.month0()), (2025, 0));

        let june = CalendarMonth::new(2024, 5).unwrap();
        assert_eq!(june.label(), "June 2024");
        assert_eq!(june.next().unwrap().label(), "July 2024");
        assert_eq!(
            CalendarMonth::new(2024, 0).unwrap().previous(),
            Some(december)
        );
    }

    #[test]
    fn months_at_the_edge_of_the_date_range_have_no_grid() {
        let state = TrackingState::with_start(date(2024, 1, 1));
        let today = date(2024, 6, 12);

        let last = CalendarMonth::containing(NaiveDate::MAX);
        assert_eq!(build_calendar_at(today, last, &state), None);
        let first = CalendarMonth::containing(NaiveDate::MIN);
        assert_eq!(build_calendar_at(today, first, &state), None);

        let edge = CalendarMonth::new(NaiveDate::MAX.year(), NaiveDate::MAX.month0() as i32);
        assert_eq!(edge, Some(last));
        assert_eq!(last.next(), None);
        assert_eq!(first.previous(), None);
    }
}
