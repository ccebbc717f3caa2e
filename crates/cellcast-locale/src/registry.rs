//! The read-only table of supported locales.

use crate::locale::NumberLocale;
use cellcast_api::LocaleTag;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The process default: English conventions, `.` decimal and `,` grouping.
pub const ENGLISH: NumberLocale = NumberLocale::new("en", '.', ',', 'e');

/// Every registered locale. Entries are filed under lowercase tags; a
/// regional entry is present only where it differs from its primary
/// language (de-CH keeps the dot decimal and groups with an apostrophe).
static LOCALES: &[NumberLocale] = &[
    ENGLISH,
    NumberLocale::new("cs", ',', '\u{00A0}', 'e'),
    NumberLocale::new("da", ',', '.', 'e'),
    NumberLocale::new("de", ',', '.', 'e'),
    NumberLocale::new("de-ch", '.', '\u{2019}', 'e'),
    NumberLocale::new("es", ',', '.', 'e'),
    NumberLocale::new("fi", ',', '\u{00A0}', 'e'),
    NumberLocale::new("fr", ',', '\u{202F}', 'e'),
    NumberLocale::new("it", ',', '.', 'e'),
    NumberLocale::new("ja", '.', ',', 'e'),
    NumberLocale::new("nl", ',', '.', 'e'),
    NumberLocale::new("pl", ',', '\u{00A0}', 'e'),
    NumberLocale::new("pt", ',', '.', 'e'),
    NumberLocale::new("ru", ',', '\u{00A0}', 'e'),
    NumberLocale::new("sv", ',', '\u{00A0}', 'e'),
    NumberLocale::new("tr", ',', '.', 'e'),
    NumberLocale::new("zh", '.', ',', 'e'),
];

/// Lowercase tag index over [`LOCALES`], built on first lookup and immutable
/// afterwards.
static BY_TAG: Lazy<HashMap<&'static str, NumberLocale>> =
    Lazy::new(|| LOCALES.iter().map(|locale| (locale.tag(), *locale)).collect());

/// Finds the locale registered for `tag`.
///
/// Lookup is ASCII-case-insensitive: the exact tag first, then its primary
/// language subtag (`"de-AT"` falls back to `"de"`). Returns `None` when
/// neither is registered; the registry never substitutes [`ENGLISH`] on its
/// own.
pub fn lookup(tag: &LocaleTag) -> Option<NumberLocale> {
    let lowered = tag.as_str().to_ascii_lowercase();
    if let Some(locale) = BY_TAG.get(lowered.as_str()) {
        return Some(*locale);
    }
    let primary = tag.primary_subtag().to_ascii_lowercase();
    BY_TAG.get(primary.as_str()).copied()
}

/// All registered locales, in table order.
pub fn all() -> &'static [NumberLocale] {
    LOCALES
}
