use chrono::{Datelike, NaiveDate};

/// Absolute month index for calendar arithmetic: `year * 12 + (month - 1)`.
///
/// Cadence strides and slot offsets are computed as differences of these
/// indices, which makes year boundaries a non-issue.
pub fn absolute_month(date: NaiveDate) -> i64 {
    date.year() as i64 * 12 + (date.month0() as i64)
}

/// Decomposes an absolute month index back into `(year, month)`.
pub fn year_month_from_absolute(abs_month: i64) -> (i32, u32) {
    let year = abs_month.div_euclid(12) as i32;
    let month = abs_month.rem_euclid(12) as u32 + 1;
    (year, month)
}

/// Number of days in the given calendar month, leap years included.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .expect("month is validated by the caller");
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("successor month is always constructible");
    next.signed_duration_since(first).num_days() as u32
}

/// Builds a date in `(year, month)` with `day` clamped to the month's last day.
///
/// Used to carry a pay day-of-month (e.g. the 31st) into shorter months.
pub fn date_with_clamped_day(year: i32, month: u32, day: u32) -> NaiveDate {
    let clamped = day.min(days_in_month(year, month)).max(1);
    NaiveDate::from_ymd_opt(year, month, clamped)
        .expect("clamped day is always in range")
}

/// First day of the month containing `abs_month`.
pub fn first_day_of_absolute_month(abs_month: i64) -> NaiveDate {
    let (year, month) = year_month_from_absolute(abs_month);
    NaiveDate::from_ymd_opt(year, month, 1).expect("month index decomposes to a valid month")
}
