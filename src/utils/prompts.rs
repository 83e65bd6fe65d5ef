//! Console prompt helpers shared by the commands.

use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;
use semcal_core::SemcalResult;
use semcal_core::input::parse_bool;

/// Prompt until the parser accepts the input.
pub fn prompt_with_retry<T, F>(prompt: &str, parse: F) -> Result<T>
where
    F: Fn(&str) -> SemcalResult<T>,
{
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse(&input) {
            Ok(value) => return Ok(value),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}

/// Non-empty free-text prompt, re-asking on empty input.
pub fn prompt_required(prompt: &str) -> Result<String> {
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .default(String::new())
            .show_default(false)
            .interact_text()?;
        let trimmed = input.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
        eprintln!("  {}", "Empty input, try again".red());
    }
}

/// Free-text prompt; empty input falls back to the default.
pub fn prompt_or_default(prompt: &str, default: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;
    Ok(input.trim().to_string())
}

/// Optional free-text prompt; empty input yields None.
pub fn prompt_optional(prompt: &str) -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(String::new())
        .show_default(false)
        .interact_text()?;
    let trimmed = input.trim();
    Ok(if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    })
}

/// Yes/no question answered as free text. Empty input takes the default;
/// unrecognized answers re-prompt.
pub fn prompt_bool(prompt: &str, default: bool) -> Result<bool> {
    let hint = if default { "Y/n" } else { "y/N" };
    loop {
        let input: String = Input::new()
            .with_prompt(format!("{prompt} [{hint}]"))
            .default(String::new())
            .show_default(false)
            .interact_text()?;
        if input.trim().is_empty() {
            return Ok(default);
        }
        match parse_bool(&input) {
            Ok(value) => return Ok(value),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}
