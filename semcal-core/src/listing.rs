//! Parsing the seminar listing page.
//!
//! The page is an HTML table: header rows, then forthcoming seminars, then a
//! "Past Seminars" marker followed by the archive. Data rows carry
//! class-tagged cells (`date`, `place`, `author`, `title`).

use crate::dates;
use crate::error::{SemcalError, SemcalResult};
use crate::seminar::{Seminar, split_speaker};
use scraper::{ElementRef, Html, Selector};

pub const LISTING_URL: &str = "http://eost.u-strasbg.fr/semipgs/calendar.html";

const PAST_MARKER: &str = "Past Seminars";
const FORTHCOMING_MARKER: &str = "Forthcoming Seminars";
const COLUMNS_MARKER: &str = "Date,\u{a0}heure";
const PLACEHOLDER_TITLE: &str = "TBA";

/// Extract the forthcoming seminars from the listing page. Collection stops
/// at the "Past Seminars" marker; placeholder and malformed rows are skipped.
pub fn parse_listing(html: &str) -> SemcalResult<Vec<Seminar>> {
    let document = Html::parse_document(html);
    let rows = selector("tr")?;
    let cells = selector("td")?;

    let mut seminars = Vec::new();
    for row in document.select(&rows) {
        let text = row.text().collect::<String>();
        if text.contains(PAST_MARKER) {
            break;
        }
        if text.contains(FORTHCOMING_MARKER) || text.contains(COLUMNS_MARKER) {
            continue;
        }
        if let Some(seminar) = parse_row(&row, &cells)? {
            seminars.push(seminar);
        }
    }

    Ok(seminars)
}

fn selector(css: &str) -> SemcalResult<Selector> {
    Selector::parse(css).map_err(|e| SemcalError::Listing(e.to_string()))
}

/// One table row. Returns None for rows that do not describe a usable
/// seminar: unclassed cells, a missing field, or the "TBA" placeholder.
fn parse_row(row: &ElementRef<'_>, cells: &Selector) -> SemcalResult<Option<Seminar>> {
    let mut date = None;
    let mut place = None;
    let mut author_line = None;
    let mut title = None;

    for cell in row.select(cells) {
        let Some(class) = cell
            .value()
            .attr("class")
            .and_then(|c| c.split_whitespace().next())
        else {
            return Ok(None);
        };
        let text = cell.text().collect::<String>().trim().to_string();

        match class {
            "date" => date = Some(dates::parse_start(&text)?),
            "place" => place = Some(text),
            "author" => author_line = Some(text),
            "title" => {
                if text == PLACEHOLDER_TITLE {
                    return Ok(None);
                }
                title = Some(text);
            }
            _ => {}
        }
    }

    let (Some(date), Some(author_line), Some(title)) = (date, author_line, title) else {
        return Ok(None);
    };

    let (author, affiliation) = split_speaker(&author_line);
    let mut builder = Seminar::builder(date, title)
        .author(author)
        .affiliation(affiliation);
    if let Some(place) = place {
        builder = builder.place(place);
    }

    Ok(Some(builder.build()))
}
