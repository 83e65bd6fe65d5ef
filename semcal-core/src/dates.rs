//! Date/time normalization for seminar start times.
//!
//! Input is loosely formatted ("2023/05/10 13h45", "10/05/2023 13:45", or
//! something fuzzier). French hour tokens are rewritten first, then an
//! explicit format list is tried, then fuzzydate as a last resort. The
//! resulting naive instant is attached to the system local timezone.

use crate::error::{SemcalError, SemcalResult};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

const DATETIME_FORMATS: &[&str] = &[
    "%Y/%m/%d %H:%M",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y/%m/%d", "%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"];

/// Parse a combined date+time string into a timezone-aware local instant.
pub fn parse_start(input: &str) -> SemcalResult<DateTime<Local>> {
    let cleaned = normalize_hours(input.trim());

    for fmt in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&cleaned, fmt) {
            return attach_local(naive, input);
        }
    }

    // Date without a time: midnight.
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&cleaned, fmt) {
            return attach_local(date.and_time(NaiveTime::MIN), input);
        }
    }

    let naive =
        fuzzydate::parse(&cleaned).map_err(|_| SemcalError::DateParse(input.to_string()))?;
    attach_local(naive, input)
}

fn attach_local(naive: NaiveDateTime, original: &str) -> SemcalResult<DateTime<Local>> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| SemcalError::DateParse(original.to_string()))
}

/// Rewrite French hour tokens: "13h45" -> "13:45", bare "13h" -> "13:00".
fn normalize_hours(input: &str) -> String {
    input
        .split_whitespace()
        .map(normalize_hour_token)
        .collect::<Vec<_>>()
        .join(" ")
}

fn normalize_hour_token(token: &str) -> String {
    let lower = token.to_lowercase();
    if let Some((hours, minutes)) = lower.split_once('h') {
        let hours_ok = !hours.is_empty()
            && hours.len() <= 2
            && hours.chars().all(|c| c.is_ascii_digit());
        let minutes_ok = minutes.is_empty()
            || (minutes.len() == 2 && minutes.chars().all(|c| c.is_ascii_digit()));
        if hours_ok && minutes_ok {
            return if minutes.is_empty() {
                format!("{hours}:00")
            } else {
                format!("{hours}:{minutes}")
            };
        }
    }
    token.to_string()
}
