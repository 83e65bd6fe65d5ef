//! Calendar-event document generation and re-reading.

mod generate;
mod parse;

pub use generate::generate_ics;
pub use parse::{ParsedEvent, parse_event};
