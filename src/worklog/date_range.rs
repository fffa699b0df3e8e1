//! Resolution of the `<time>` command parameter into a date range.
//!
//! Accepted symbols:
//!
//! | Symbol | Range |
//! |--------|-------|
//! | `today` (or anything unknown) | `[today, tomorrow)` |
//! | `yesterday` | `[yesterday, today)` |
//! | `this-week`, `thisweek` | `[start of week, start of week + 7 days)` |
//! | `last-week`, `lastweek` | `[start of week - 7 days, start of week)` |
//! | `DD-MM-YYYY~DD-MM-YYYY` | both dates verbatim |
//!
//! Weeks start on Saturday.

use std::fmt;

use chrono::{Datelike, Duration, Local, NaiveDate};
use log::debug;

/// Date format used by the work-log API.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Half-open range of dates `[from, to)`, both formatted `DD-MM-YYYY`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub from: String,
    pub to: String,
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} to {}", self.from, self.to)
    }
}

impl DateRange {
    fn between(from: NaiveDate, to: NaiveDate) -> Self {
        DateRange {
            from: from.format(DATE_FORMAT).to_string(),
            to: to.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Most recent Saturday on or before `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let days_since_saturday = (date.weekday().num_days_from_sunday() + 1) % 7;
    date - Duration::days(days_since_saturday as i64)
}

/// Resolves `symbol` relative to `today`.
///
/// Never fails: unknown symbols and malformed literal ranges fall back to
/// `[today, tomorrow)`. Literal ranges are not validated.
pub fn resolve_range(symbol: &str, today: NaiveDate) -> DateRange {
    let range = match symbol {
        "yesterday" => DateRange::between(today - Duration::days(1), today),
        "last-week" | "lastweek" => {
            let start = start_of_week(today);
            DateRange::between(start - Duration::days(7), start)
        }
        "this-week" | "thisweek" => {
            let start = start_of_week(today);
            DateRange::between(start, start + Duration::days(7))
        }
        _ => match symbol.split('~').collect::<Vec<_>>().as_slice() {
            [from, to] => DateRange {
                from: from.to_string(),
                to: to.to_string(),
            },
            _ => DateRange::between(today, today + Duration::days(1)),
        },
    };

    debug!("resolved time {} to {}", symbol, range);
    range
}

/// Resolves `symbol` relative to the local wall-clock date.
pub fn resolve_range_now(symbol: &str) -> DateRange {
    resolve_range(symbol, Local::now().date_naive())
}
