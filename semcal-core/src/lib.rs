//! Building blocks for seminar announcements.
//!
//! This crate holds the normalized seminar record and the pure
//! transformations around it: language and date normalization, calendar
//! document generation, output path derivation, announcement email bodies,
//! and the listing-page parser. Console and network I/O live in the CLI.

pub mod dates;
pub mod email;
pub mod error;
pub mod ics;
pub mod input;
pub mod listing;
pub mod locale;
pub mod seminar;
pub mod store;

pub use error::{SemcalError, SemcalResult};
pub use seminar::{Language, Seminar, SeminarBuilder};
