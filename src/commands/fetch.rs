//! Download the seminar listing and work on one of its entries.

use crate::commands::announce;
use crate::utils::{prompts, tui};
use anyhow::{Context, Result};
use dialoguer::Select;
use semcal_core::listing::{self, LISTING_URL};
use semcal_core::seminar::{Language, Seminar};

pub fn run(url: Option<&str>, json: bool) -> Result<()> {
    let url = url.unwrap_or(LISTING_URL);

    let spinner = tui::create_spinner(format!("Fetching {url}"));
    let page = download(url).with_context(|| format!("Failed to download {url}"))?;
    spinner.finish_and_clear();

    let seminars = listing::parse_listing(&page)?;
    if seminars.is_empty() {
        println!("No forthcoming seminars found.");
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&seminars)?);
        return Ok(());
    }

    println!("{} seminars found.", seminars.len());
    loop {
        let items: Vec<String> = seminars.iter().map(describe).collect();
        let selection = Select::new()
            .with_prompt("Select a seminar")
            .items(&items)
            .default(0)
            .interact()?;

        let mut seminar = seminars[selection].clone();
        println!("Working on: {}", describe(&seminar));

        let change = prompts::prompt_bool(
            &format!("Language is set to {}. Change it?", seminar.language),
            false,
        )?;
        if change {
            seminar.language = prompts::prompt_with_retry(
                "Language of the seminar (french/english)",
                Language::parse,
            )?;
        }

        announce::run(seminar)?;

        if !prompts::prompt_bool("Continue with another seminar?", false)? {
            break;
        }
    }
    println!("Exiting.");

    Ok(())
}

fn download(url: &str) -> reqwest::Result<String> {
    reqwest::blocking::get(url)?.error_for_status()?.text()
}

fn describe(seminar: &Seminar) -> String {
    format!(
        "{} | {}, {} | {}",
        seminar.date.format("%Y-%m-%d %H:%M"),
        seminar.author,
        seminar.affiliation,
        seminar.title
    )
}
