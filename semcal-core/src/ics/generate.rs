//! Single-event .ics generation.

use crate::error::{SemcalError, SemcalResult};
use crate::seminar::Seminar;
use chrono::Utc;
use icalendar::{Calendar, Component, Event, EventLike};

/// Generate the .ics document for a seminar: one calendar, exactly one
/// event, fields copied verbatim from the record.
pub fn generate_ics(seminar: &Seminar) -> SemcalResult<String> {
    if seminar.title.trim().is_empty() {
        return Err(SemcalError::IcsGenerate(
            "seminar has no title".to_string(),
        ));
    }

    let mut cal = Calendar::new();

    let mut event = Event::new();
    event.uid(&event_uid(seminar));
    event.summary(&seminar.title);
    event.location(&seminar.place);
    event.description(&seminar.description_line());

    // DTSTAMP is required by RFC 5545.
    event.add_property("DTSTAMP", Utc::now().format("%Y%m%dT%H%M%SZ").to_string());

    let start = seminar.date.with_timezone(&Utc);
    event.add_property("DTSTART", start.format("%Y%m%dT%H%M%SZ").to_string());

    cal.push(event.done());
    let cal = cal.done();

    Ok(tidy_output(&cal.to_string()))
}

/// Stable UID from the start time and the speaker.
fn event_uid(seminar: &Seminar) -> String {
    let speaker = seminar
        .author
        .split_whitespace()
        .last()
        .unwrap_or("seminaire")
        .to_lowercase();
    format!("{}-{}@semcal", seminar.date.format("%Y%m%dT%H%M"), speaker)
}

/// Clean up the icalendar crate's output:
/// - replace PRODID with our own
/// - drop CALSCALE:GREGORIAN (it is the default)
fn tidy_output(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:SEMCAL\r\n");
            continue;
        }
        if line == "CALSCALE:GREGORIAN" {
            continue;
        }
        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
