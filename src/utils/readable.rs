//! Human-readable rendering of predicted durations
//!
//! - `hours_to_readable`: "5 hours", "1 day", "2 days and 3 hours"
//! - `delivery_date`: projected arrival as a long date/time string

use std::fmt;

use chrono::{DateTime, Duration, Local, TimeZone};

/// Weekday, month, zero-padded day, year, 12-hour clock
pub const DELIVERY_DATE_FORMAT: &str = "%A, %B %d, %Y at %I:%M %p";

const HOURS_PER_DAY: f64 = 24.0;
const MICROS_PER_HOUR: f64 = 3_600_000_000.0;

/// Convert an hour count into "N hours" / "N day(s) and M hour(s)"
///
/// Under a day the fractional part is truncated and the noun is always plural.
/// From one day upward, days and leftover hours are both floored and each
/// noun is pluralised only when its count is greater than one.
pub fn hours_to_readable(hours: f64) -> String {
    if hours < HOURS_PER_DAY {
        return format!("{} hours", hours.trunc() as i64);
    }

    let days = (hours / HOURS_PER_DAY).floor() as i64;
    let remaining_hours = hours.rem_euclid(HOURS_PER_DAY).floor() as i64;

    if remaining_hours == 0 {
        format!("{} day{}", days, plural(days))
    } else {
        format!(
            "{} day{} and {} hour{}",
            days,
            plural(days),
            remaining_hours,
            plural(remaining_hours)
        )
    }
}

fn plural(count: i64) -> &'static str {
    if count > 1 {
        "s"
    } else {
        ""
    }
}

/// Project `now + hours` and format it with `DELIVERY_DATE_FORMAT`
///
/// Fractional hours are kept to microsecond precision.
pub fn delivery_date<Tz>(hours: f64, now: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let offset = Duration::microseconds((hours * MICROS_PER_HOUR).round() as i64);
    (now + offset).format(DELIVERY_DATE_FORMAT).to_string()
}

/// `delivery_date` against the local wall clock
pub fn delivery_date_from_now(hours: f64) -> String {
    delivery_date(hours, Local::now())
}
