//! Announcement email bodies and mail-client compose commands.
//!
//! Three drafts are prepared for each seminar: one sent the Friday of the
//! week before, one the day before, one the morning of the talk. They share
//! the same French body; only the recipient, the subject tag, and the
//! scheduled-send hint differ.

use crate::locale::LocaleGuard;
use crate::seminar::Seminar;
use chrono::{Datelike, Duration, Locale};
use std::path::Path;

pub const SEMINAR_LIST_ADDRESS: &str = "seminaires@eost.unistra.fr";
pub const INSTITUTE_ADDRESS: &str = "ipgs@unistra.fr";

/// One draft announcement, ready to hand to the mail client.
#[derive(Debug, Clone)]
pub struct Announcement {
    pub recipient: &'static str,
    pub subject: String,
    pub body: String,
}

/// Render the shared French announcement body. The date line is localized
/// under the scoped announcement locale and title-cased.
pub fn email_body(seminar: &Seminar) -> String {
    let guard = LocaleGuard::acquire(Locale::fr_FR);
    let day_line = title_case(&guard.format(&seminar.date, "%A %-d %B %Y"));
    let hour = seminar.date.format("%-Hh%M");

    format!(
        "\n\
         -------------- SEMINAIRE IPGS -------------------\n\
         \n\
         Intervenant : {author}, {affiliation}\n\
         \n\
         Titre : {title}\n\
         \n\
         Salle : {place}\n\
         \n\
         Date : {day_line}, {hour}.\n\
         \n\
         Le séminaire sera en {language}.\n\
         \n\
         Ci-joint un fichier ics pour ajouter ce séminaire dans votre\n\
         calendrier. Les renseignements sur les séminaires à venir sont sur la\n\
         page http://eost.unistra.fr/agenda/seminaires-ipgs\n\
         Espérant vous voir nombreux, nous vous souhaitons une bonne journée.\n\
         Les responsables des séminaires de l'IPGS\n",
        author = seminar.author,
        affiliation = seminar.affiliation,
        title = seminar.title,
        place = seminar.place,
        language = seminar.language,
    )
}

/// The three scheduled announcement variants for one seminar.
pub fn announcements(seminar: &Seminar) -> Vec<Announcement> {
    let body = email_body(seminar);
    let date = seminar.date.date_naive();

    // Friday of the previous week: back to Monday, forward four days,
    // back one week.
    let friday_before = date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
        + Duration::days(4)
        - Duration::weeks(1);
    let day_before = date - Duration::days(1);

    vec![
        Announcement {
            recipient: SEMINAR_LIST_ADDRESS,
            subject: subject(seminar, None),
            body: format!("{}{}", friday_before.format("%Y/%m/%d - 13:00"), body),
        },
        Announcement {
            recipient: INSTITUTE_ADDRESS,
            subject: subject(seminar, Some("Demain")),
            body: format!("{}{}", day_before.format("%Y/%m/%d - 13:00"), body),
        },
        Announcement {
            recipient: INSTITUTE_ADDRESS,
            subject: subject(seminar, Some("Aujourd'hui")),
            body: format!("{}{}", date.format("%Y/%m/%d - 08:00"), body),
        },
    ]
}

/// A `thunderbird -compose` invocation for one draft.
pub fn compose_command(announcement: &Announcement, attachment: &Path) -> String {
    format!(
        "thunderbird -compose \"to={},subject='{}',body='{}',attachment='{}'\";",
        announcement.recipient,
        announcement.subject,
        announcement.body,
        attachment.display()
    )
}

fn subject(seminar: &Seminar, tag: Option<&str>) -> String {
    let tag = tag.map(|t| format!("[{t}] ")).unwrap_or_default();
    format!(
        "[tous] [Séminaire IPGS] {tag}{}, {}, {}",
        seminar.author, seminar.affiliation, seminar.title
    )
}

/// Uppercase the first letter of each word, like the French convention for
/// date lines in announcements.
fn title_case(input: &str) -> String {
    input
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
