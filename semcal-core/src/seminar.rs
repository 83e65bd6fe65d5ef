//! The seminar record and its validated construction.

use crate::error::{SemcalError, SemcalResult};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Room used when the listing or the user gives none.
pub const DEFAULT_PLACE: &str = "IPGS, Amphi Rothe";

/// Canonical seminar language. Free text only enters through
/// [`Language::parse`], so a record can never hold an unvalidated label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    French,
    English,
}

impl Language {
    /// Normalize free-text language input, case-insensitively.
    pub fn parse(input: &str) -> SemcalResult<Self> {
        match input.trim().to_lowercase().as_str() {
            "fr" | "francais" | "français" | "french" => Ok(Language::French),
            "en" | "english" | "anglais" => Ok(Language::English),
            _ => Err(SemcalError::InvalidLanguage(input.trim().to_string())),
        }
    }

    /// The label used in announcements and calendar descriptions.
    pub fn label(self) -> &'static str {
        match self {
            Language::French => "Français",
            Language::English => "Anglais",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Language {
    type Err = SemcalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::parse(s)
    }
}

/// Normalized data for one seminar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seminar {
    /// Start of the talk, in the system local timezone.
    pub date: DateTime<Local>,
    pub author: String,
    pub affiliation: String,
    pub title: String,
    pub language: Language,
    pub place: String,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
}

impl Seminar {
    pub fn builder(date: DateTime<Local>, title: impl Into<String>) -> SeminarBuilder {
        SeminarBuilder {
            date,
            title: title.into(),
            author: String::new(),
            affiliation: String::new(),
            language: Language::French,
            place: DEFAULT_PLACE.to_string(),
            abstract_text: None,
        }
    }

    /// Calendar description: speaker, affiliation, language, abstract.
    pub fn description_line(&self) -> String {
        [
            self.author.as_str(),
            self.affiliation.as_str(),
            self.language.label(),
            self.abstract_text.as_deref().unwrap_or(""),
        ]
        .join("; ")
    }
}

/// Builds a [`Seminar`] from validated parts. Defaults: French, the usual
/// room, no abstract.
#[derive(Debug, Clone)]
pub struct SeminarBuilder {
    date: DateTime<Local>,
    title: String,
    author: String,
    affiliation: String,
    language: Language,
    place: String,
    abstract_text: Option<String>,
}

impl SeminarBuilder {
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn affiliation(mut self, affiliation: impl Into<String>) -> Self {
        self.affiliation = affiliation.into();
        self
    }

    /// Set author and affiliation from a "Name, Affiliation" line.
    pub fn speaker(self, line: &str) -> Self {
        let (author, affiliation) = split_speaker(line);
        self.author(author).affiliation(affiliation)
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Normalize and set the language from free text.
    pub fn language_input(self, input: &str) -> SemcalResult<Self> {
        Ok(self.language(Language::parse(input)?))
    }

    pub fn place(mut self, place: impl Into<String>) -> Self {
        self.place = place.into();
        self
    }

    pub fn abstract_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.abstract_text = if text.trim().is_empty() {
            None
        } else {
            Some(text.trim().to_string())
        };
        self
    }

    pub fn build(self) -> Seminar {
        Seminar {
            date: self.date,
            author: self.author,
            affiliation: self.affiliation,
            title: self.title,
            language: self.language,
            place: self.place,
            abstract_text: self.abstract_text,
        }
    }
}

/// Split a "Name, Affiliation" line on the first comma. Everything after the
/// first comma belongs to the affiliation.
pub fn split_speaker(line: &str) -> (String, String) {
    match line.split_once(',') {
        Some((author, rest)) => {
            let affiliation = rest
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(", ");
            (author.trim().to_string(), affiliation)
        }
        None => (line.trim().to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_date() -> DateTime<Local> {
        Local.with_ymd_and_hms(2023, 5, 10, 13, 45, 0).unwrap()
    }

    #[test]
    fn french_aliases_normalize() {
        for alias in ["fr", "francais", "français", "french", "FR", "French", " Français "] {
            assert_eq!(Language::parse(alias).unwrap(), Language::French, "{alias}");
        }
    }

    #[test]
    fn english_aliases_normalize() {
        for alias in ["en", "english", "anglais", "EN", "Anglais", "ENGLISH"] {
            assert_eq!(Language::parse(alias).unwrap(), Language::English, "{alias}");
        }
    }

    #[test]
    fn unknown_language_is_rejected() {
        for input in ["de", "german", "", "français?"] {
            assert!(matches!(
                Language::parse(input),
                Err(SemcalError::InvalidLanguage(_))
            ));
        }
    }

    #[test]
    fn labels() {
        assert_eq!(Language::French.to_string(), "Français");
        assert_eq!(Language::English.to_string(), "Anglais");
    }

    #[test]
    fn split_speaker_name_and_affiliation() {
        let (author, affiliation) = split_speaker("Jane Doe, EOST");
        assert_eq!(author, "Jane Doe");
        assert_eq!(affiliation, "EOST");
    }

    #[test]
    fn split_speaker_multi_part_affiliation() {
        let (author, affiliation) = split_speaker("Jane Doe, EOST, Strasbourg");
        assert_eq!(author, "Jane Doe");
        assert_eq!(affiliation, "EOST, Strasbourg");
    }

    #[test]
    fn split_speaker_without_comma() {
        let (author, affiliation) = split_speaker("Jane Doe");
        assert_eq!(author, "Jane Doe");
        assert_eq!(affiliation, "");
    }

    #[test]
    fn builder_defaults() {
        let seminar = Seminar::builder(test_date(), "Crustal deformation").build();
        assert_eq!(seminar.language, Language::French);
        assert_eq!(seminar.place, DEFAULT_PLACE);
        assert!(seminar.abstract_text.is_none());
    }

    #[test]
    fn builder_rejects_bad_language_input() {
        let result = Seminar::builder(test_date(), "Title").language_input("klingon");
        assert!(matches!(result, Err(SemcalError::InvalidLanguage(_))));
    }

    #[test]
    fn empty_abstract_becomes_none() {
        let seminar = Seminar::builder(test_date(), "Title")
            .abstract_text("   ")
            .build();
        assert!(seminar.abstract_text.is_none());
    }

    #[test]
    fn description_line_joins_fields() {
        let seminar = Seminar::builder(test_date(), "Title")
            .speaker("Jane Doe, EOST")
            .abstract_text("A short abstract.")
            .build();
        assert_eq!(
            seminar.description_line(),
            "Jane Doe; EOST; Français; A short abstract."
        );
    }
}
