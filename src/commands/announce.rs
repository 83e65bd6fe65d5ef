//! Shared save-and-announce flow used by both intake paths.

use crate::compose;
use crate::utils::prompts;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use semcal_core::seminar::Seminar;
use semcal_core::store;
use std::path::PathBuf;

pub fn run(seminar: Seminar) -> Result<()> {
    if !prompts::prompt_bool("Save the .ics file?", true)? {
        return Ok(());
    }

    let default_path = store::default_filename(&seminar);
    let input = prompts::prompt_or_default("Output filepath", &default_path)?;
    let mut path = PathBuf::from(input);

    // Never overwrite silently: confirm, or fall back to a suffixed name.
    if path.exists() && !prompts::prompt_bool("File exists. Overwrite?", false)? {
        path = store::resolve_collision(&path)?;
    }

    store::write_ics(&seminar, &path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("{}", format!("File saved to {}", path.display()).green());

    if prompts::prompt_bool("Compose announcement emails?", false)? {
        compose::open_drafts(&seminar, &path)?;
    }

    Ok(())
}
