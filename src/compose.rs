//! Hand the announcement drafts to the mail client.

use anyhow::{Context, Result};
use semcal_core::email;
use semcal_core::seminar::Seminar;
use std::io::Write;
use std::path::Path;
use std::process::Command;

/// Write the three compose commands to a transient shell script, run it once
/// through bash, and let the file be removed when the handle drops.
pub fn open_drafts(seminar: &Seminar, attachment: &Path) -> Result<()> {
    let attachment = attachment
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", attachment.display()))?;

    let mut script = tempfile::Builder::new()
        .prefix("open_drafts")
        .suffix(".sh")
        .tempfile()
        .context("Failed to create the draft script")?;

    for announcement in email::announcements(seminar) {
        writeln!(script, "{}", email::compose_command(&announcement, &attachment))?;
    }
    script.flush()?;

    let status = Command::new("/bin/bash")
        .arg(script.path())
        .status()
        .context("Failed to run the draft script")?;
    if !status.success() {
        anyhow::bail!("Draft script exited with {status}");
    }

    Ok(())
}
