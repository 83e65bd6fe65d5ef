//! Re-reading .ics documents with the icalendar crate's parser.

use crate::error::{SemcalError, SemcalResult};
use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use icalendar::{
    CalendarDateTime, DatePerhapsTime,
    parser::{read_calendar, unfold},
};

/// The fields we care about when re-reading a generated document.
#[derive(Debug, Clone)]
pub struct ParsedEvent {
    pub uid: String,
    pub summary: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub start: DateTime<Utc>,
}

/// Parse the first VEVENT of an .ics document.
pub fn parse_event(content: &str) -> SemcalResult<ParsedEvent> {
    let unfolded = unfold(content);
    let calendar = read_calendar(&unfolded).map_err(|e| SemcalError::IcsParse(e.to_string()))?;
    let vevent = calendar
        .components
        .iter()
        .find(|c| c.name == "VEVENT")
        .ok_or_else(|| malformed("no VEVENT in document"))?;

    let uid = vevent
        .find_prop("UID")
        .ok_or_else(|| malformed("VEVENT is missing UID"))?
        .val
        .to_string();
    let summary = vevent
        .find_prop("SUMMARY")
        .map(|p| unescape(p.val.as_ref()))
        .unwrap_or_else(|| "(No title)".to_string());

    let start_prop = vevent
        .find_prop("DTSTART")
        .ok_or_else(|| malformed("VEVENT is missing DTSTART"))?;
    let start = DatePerhapsTime::try_from(start_prop)
        .ok()
        .and_then(to_utc)
        .ok_or_else(|| malformed("unreadable DTSTART"))?;

    let location = vevent.find_prop("LOCATION").map(|p| unescape(p.val.as_ref()));
    let description = vevent
        .find_prop("DESCRIPTION")
        .map(|p| unescape(p.val.as_ref()));

    Ok(ParsedEvent {
        uid,
        summary,
        location,
        description,
        start,
    })
}

fn malformed(detail: &str) -> SemcalError {
    SemcalError::IcsParse(detail.to_string())
}

/// Undo RFC 5545 text escaping (TEXT values escape backslash, comma,
/// semicolon, and newline).
fn unescape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => result.push('\n'),
            Some(escaped) => result.push(escaped),
            None => result.push('\\'),
        }
    }

    result
}

fn to_utc(time: DatePerhapsTime) -> Option<DateTime<Utc>> {
    match time {
        DatePerhapsTime::DateTime(CalendarDateTime::Utc(dt)) => Some(dt),
        DatePerhapsTime::DateTime(CalendarDateTime::Floating(naive)) => {
            Some(Utc.from_utc_datetime(&naive))
        }
        DatePerhapsTime::DateTime(CalendarDateTime::WithTimezone { date_time, tzid }) => {
            let tz: Tz = tzid.parse().ok()?;
            tz.from_local_datetime(&date_time)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc))
        }
        DatePerhapsTime::Date(date) => Some(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "BEGIN:VCALENDAR\r\n\
        VERSION:2.0\r\n\
        PRODID:SEMCAL\r\n\
        BEGIN:VEVENT\r\n\
        UID:20230510T1345-doe@semcal\r\n\
        DTSTAMP:20230501T120000Z\r\n\
        DTSTART:20230510T114500Z\r\n\
        SUMMARY:Crustal deformation\r\n\
        LOCATION:IPGS\\, Amphi Rothe\r\n\
        END:VEVENT\r\n\
        END:VCALENDAR\r\n";

    #[test]
    fn parses_a_single_event() {
        let event = parse_event(SAMPLE).unwrap();
        assert_eq!(event.uid, "20230510T1345-doe@semcal");
        assert_eq!(event.summary, "Crustal deformation");
        assert_eq!(event.location.as_deref(), Some("IPGS, Amphi Rothe"));
        assert_eq!(
            event.start,
            Utc.with_ymd_and_hms(2023, 5, 10, 11, 45, 0).unwrap()
        );
    }

    #[test]
    fn zoned_start_converts_through_the_tzid() {
        let ics = "BEGIN:VCALENDAR\r\n\
            VERSION:2.0\r\n\
            BEGIN:VEVENT\r\n\
            UID:zoned@semcal\r\n\
            DTSTART;TZID=Europe/Paris:20230510T134500\r\n\
            SUMMARY:Zoned\r\n\
            END:VEVENT\r\n\
            END:VCALENDAR\r\n";

        let event = parse_event(ics).unwrap();
        // Paris is UTC+2 in May.
        assert_eq!(
            event.start,
            Utc.with_ymd_and_hms(2023, 5, 10, 11, 45, 0).unwrap()
        );
    }

    #[test]
    fn unknown_tzid_is_an_error() {
        let ics = "BEGIN:VCALENDAR\r\n\
            VERSION:2.0\r\n\
            BEGIN:VEVENT\r\n\
            UID:zoned@semcal\r\n\
            DTSTART;TZID=Nowhere/Special:20230510T134500\r\n\
            SUMMARY:Zoned\r\n\
            END:VEVENT\r\n\
            END:VCALENDAR\r\n";

        assert!(matches!(
            parse_event(ics),
            Err(SemcalError::IcsParse(_))
        ));
    }

    #[test]
    fn document_without_event_is_an_error() {
        assert!(matches!(
            parse_event("BEGIN:VCALENDAR\r\nVERSION:2.0\r\nEND:VCALENDAR\r\n"),
            Err(SemcalError::IcsParse(_))
        ));
    }

    #[test]
    fn event_without_uid_is_an_error() {
        let ics = "BEGIN:VCALENDAR\r\n\
            VERSION:2.0\r\n\
            BEGIN:VEVENT\r\n\
            DTSTART:20230510T114500Z\r\n\
            SUMMARY:No uid\r\n\
            END:VEVENT\r\n\
            END:VCALENDAR\r\n";

        assert!(matches!(
            parse_event(ics),
            Err(SemcalError::IcsParse(_))
        ));
    }
}
