//! Process-wide announcement locale.
//!
//! The locale used for rendering announcement dates is global state: it must
//! be acquired exclusively, swapped in, used, and restored before anything
//! else reads it. `LocaleGuard` holds the lock for its whole scope and puts
//! the saved value back in `Drop`, so the restore happens on every exit path.

use chrono::{DateTime, Locale, TimeZone};
use std::fmt::Display;
use std::sync::{Mutex, MutexGuard};

static ANNOUNCEMENT_LOCALE: Mutex<Locale> = Mutex::new(Locale::POSIX);

/// Exclusive, scoped access to the announcement locale.
pub struct LocaleGuard {
    saved: Locale,
    slot: MutexGuard<'static, Locale>,
}

impl LocaleGuard {
    /// Lock the announcement locale and swap `locale` in for this scope.
    pub fn acquire(locale: Locale) -> Self {
        let mut slot = ANNOUNCEMENT_LOCALE
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let saved = *slot;
        *slot = locale;
        LocaleGuard { saved, slot }
    }

    pub fn active(&self) -> Locale {
        *self.slot
    }

    /// Format a datetime with the locale held by this guard.
    pub fn format<Tz: TimeZone>(&self, datetime: &DateTime<Tz>, fmt: &str) -> String
    where
        Tz::Offset: Display,
    {
        datetime.format_localized(fmt, *self.slot).to_string()
    }
}

impl Drop for LocaleGuard {
    fn drop(&mut self) {
        *self.slot = self.saved;
    }
}

/// The locale currently installed (briefly takes the lock).
pub fn current() -> Locale {
    *ANNOUNCEMENT_LOCALE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
