//! Whitespace handling shared by every converter.

/// Strips leading and trailing Unicode whitespace (space, tab, newline, and
/// the rest of the whitespace class) without touching interior text or case.
///
/// Returns a borrow of `raw`; normalization never allocates and never fails.
/// All-whitespace input normalizes to the empty string, which downstream
/// parsing rejects. Interior whitespace is left in place for the locale
/// grammar to judge: under a space-grouping locale it separates digit
/// groups, elsewhere it is malformed.
pub fn normalize(raw: &str) -> &str {
    raw.trim()
}
