//! Output path derivation and .ics file writing.

use crate::error::{SemcalError, SemcalResult};
use crate::ics;
use crate::seminar::Seminar;
use std::path::{Path, PathBuf};

/// Default output file name: ISO date, "Seminaire", the speaker's surname.
/// "Jane Doe" on 2023-05-10 gives "2023-05-10-Seminaire-Doe.ics".
pub fn default_filename(seminar: &Seminar) -> String {
    let mut tokens = seminar.author.split_whitespace();
    let first = tokens.next().unwrap_or("Seminaire");
    let surname = tokens.next().unwrap_or(first);

    format!("{}-Seminaire-{}.ics", seminar.date.format("%Y-%m-%d"), surname)
}

/// Find a non-colliding variant of `path`. An existing path gets "_1", "_2",
/// ... appended to its stem; the first free name wins. Never overwrites.
pub fn resolve_collision(path: &Path) -> SemcalResult<PathBuf> {
    if !path.exists() {
        return Ok(path.to_path_buf());
    }

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("seminaire");
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("ics");

    for n in 1..=100 {
        let candidate = path.with_file_name(format!("{stem}_{n}.{extension}"));
        if !candidate.exists() {
            return Ok(candidate);
        }
    }

    Err(SemcalError::Collisions(path.display().to_string()))
}

/// Generate the calendar document and write it to `path`.
pub fn write_ics(seminar: &Seminar, path: &Path) -> SemcalResult<()> {
    let content = ics::generate_ics(seminar)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn test_seminar() -> Seminar {
        let date = Local.with_ymd_and_hms(2023, 5, 10, 13, 45, 0).unwrap();
        Seminar::builder(date, "Crustal deformation")
            .speaker("Jane Doe, EOST")
            .build()
    }

    #[test]
    fn default_filename_uses_date_and_surname() {
        assert_eq!(
            default_filename(&test_seminar()),
            "2023-05-10-Seminaire-Doe.ics"
        );
    }

    #[test]
    fn single_name_author_falls_back_to_that_name() {
        let date = Local.with_ymd_and_hms(2023, 5, 10, 13, 45, 0).unwrap();
        let seminar = Seminar::builder(date, "Title").author("Plato").build();
        assert_eq!(default_filename(&seminar), "2023-05-10-Seminaire-Plato.ics");
    }

    #[test]
    fn missing_path_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("2023-05-10-Seminaire-Doe.ics");
        assert_eq!(resolve_collision(&path).unwrap(), path);
    }

    #[test]
    fn existing_path_gets_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("2023-05-10-Seminaire-Doe.ics");
        std::fs::write(&path, "x").unwrap();

        let resolved = resolve_collision(&path).unwrap();
        assert_eq!(
            resolved,
            dir.path().join("2023-05-10-Seminaire-Doe_1.ics")
        );
    }

    #[test]
    fn suffix_increments_until_free() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seminar.ics");
        std::fs::write(&path, "x").unwrap();
        std::fs::write(dir.path().join("seminar_1.ics"), "x").unwrap();

        let resolved = resolve_collision(&path).unwrap();
        assert_eq!(resolved, dir.path().join("seminar_2.ics"));
    }

    #[test]
    fn write_ics_round_trips_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let seminar = test_seminar();
        let path = dir.path().join(default_filename(&seminar));

        write_ics(&seminar, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let event = crate::ics::parse_event(&content).unwrap();
        assert_eq!(event.summary, seminar.title);
    }
}
