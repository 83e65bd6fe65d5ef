//! Interactive seminar intake.

use crate::commands::announce;
use crate::utils::prompts;
use anyhow::Result;
use owo_colors::OwoColorize;
use semcal_core::dates;
use semcal_core::seminar::{DEFAULT_PLACE, Language, Seminar, split_speaker};

pub fn run() -> Result<()> {
    let start = loop {
        let date_input = prompts::prompt_required("Date of the seminar (yyyy/mm/dd)")?;
        let hour_input = prompts::prompt_or_default("Starting hour of the seminar", "13h45")?;
        match dates::parse_start(&format!("{date_input} {hour_input}")) {
            Ok(start) => break start,
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    };
    println!("Got start time: {start}");

    let title = prompts::prompt_required("Title of the seminar")?;

    let speaker = prompts::prompt_required("Speaker (Name, Affiliation)")?;
    let (author, affiliation) = split_speaker(&speaker);
    println!("Received:\n  Name: {author}\n  Affiliation: {affiliation}");

    let language =
        prompts::prompt_with_retry("Language of the seminar (french/english)", Language::parse)?;
    println!("Got language: {language}");

    let place = prompts::prompt_or_default("Location of the seminar", DEFAULT_PLACE)?;
    let abstract_text = prompts::prompt_optional("Abstract (optional)")?;

    let mut builder = Seminar::builder(start, title)
        .author(author)
        .affiliation(affiliation)
        .language(language)
        .place(place);
    if let Some(text) = abstract_text {
        builder = builder.abstract_text(text);
    }

    announce::run(builder.build())
}
