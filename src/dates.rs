use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Reads a `YYYY-MM-DD` key back into a calendar date.
///
/// Components are taken as plain numbers, so `2024-6-1` is accepted as well.
pub fn parse_day_key(key: &str) -> Option<NaiveDate> {
    let mut parts = key.trim().split('-');
    let year = parts.next()?.parse::<i32>().ok()?;
    let month = parts.next()?.parse::<u32>().ok()?;
    let day = parts.next()?.parse::<u32>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

pub fn date_only(moment: NaiveDateTime) -> NaiveDate {
    moment.date()
}

/// First Saturday strictly after `reference`.
pub fn next_saturday(reference: NaiveDate) -> NaiveDate {
    let weekday = reference.weekday().num_days_from_sunday() as i64;
    let offset = match (6 - weekday + 7) % 7 {
        0 => 7,
        days => days,
    };
    reference + Duration::days(offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, Weekday};

    #[test]
    fn day_key_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(day_key(date), "2024-03-07");
    }

    #[test]
    fn parse_day_key_inverts_day_key() {
        let start = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
        for offset in 0..400 {
            let date = start + Duration::days(offset);
            assert_eq!(parse_day_key(&day_key(date)), Some(date));
        }
    }

    #[test]
    fn parse_day_key_ignores_time_of_day() {
        let moment = NaiveDate::from_ymd_opt(2024, 6, 12)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(23, 59, 1).unwrap());
        assert_eq!(
            parse_day_key(&day_key(date_only(moment))),
            NaiveDate::from_ymd_opt(2024, 6, 12)
        );
    }

    #[test]
    fn parse_day_key_rejects_garbage() {
        assert_eq!(parse_day_key("not-a-date"), None);
        assert_eq!(parse_day_key("2024-02-30"), None);
        assert_eq!(parse_day_key("2024-06"), None);
        assert_eq!(parse_day_key("2024-06-01-02"), None);
        assert_eq!(parse_day_key("2024-6-1"), NaiveDate::from_ymd_opt(2024, 6, 1));
    }

    #[test]
    fn next_saturday_is_strictly_later_and_within_a_week() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        for offset in 0..21 {
            let date = start + Duration::days(offset);
            let saturday = next_saturday(date);
            assert_eq!(saturday.weekday(), Weekday::Sat);
            assert!(saturday > date);
            assert!((saturday - date).num_days() <= 7);
        }
    }

    #[test]
    fn next_saturday_from_saturday_skips_a_week() {
        let saturday = NaiveDate::from_ymd_opt(2024, 6, 8).unwrap();
        assert_eq!(
            next_saturday(saturday),
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
        );
        let friday = NaiveDate::from_ymd_opt(2024, 6, 7).unwrap();
        assert_eq!(next_saturday(friday), saturday);
    }
}
