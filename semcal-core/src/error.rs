//! Error types for the semcal ecosystem.

use thiserror::Error;

/// Errors that can occur while building a seminar announcement.
#[derive(Error, Debug)]
pub enum SemcalError {
    #[error("Seminar can be either in fr or en, not '{0}'")]
    InvalidLanguage(String),

    #[error("Unexpected value for yes/no: '{0}'")]
    InvalidBoolean(String),

    #[error("Could not parse date/time: \"{0}\"")]
    DateParse(String),

    #[error("Listing parse error: {0}")]
    Listing(String),

    #[error("ICS parse error: {0}")]
    IcsParse(String),

    #[error("ICS generation error: {0}")]
    IcsGenerate(String),

    #[error("Too many filename collisions for {0}")]
    Collisions(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for semcal operations.
pub type SemcalResult<T> = Result<T, SemcalError>;
