//! The numeric conventions of a single locale.

use serde::Serialize;

/// Space-like grouping characters accepted interchangeably: ASCII space,
/// no-break space, narrow no-break space. Documents and clipboards swap
/// freely between these three.
const SPACE_LIKE: [char; 3] = [' ', '\u{00A0}', '\u{202F}'];

/// Apostrophe-like grouping characters accepted interchangeably: ASCII
/// apostrophe, right single quotation mark.
const APOSTROPHE_LIKE: [char; 2] = ['\'', '\u{2019}'];

/// The numeric formatting conventions of one locale.
///
/// Values come only from the registry, which guarantees the decimal and
/// grouping separators never collide. Exactly one locale is active per
/// conversion; conventions are never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumberLocale {
    tag: &'static str,
    decimal_separator: char,
    grouping_separator: char,
    exponent_marker: char,
}

impl NumberLocale {
    pub(crate) const fn new(
        tag: &'static str,
        decimal_separator: char,
        grouping_separator: char,
        exponent_marker: char,
    ) -> Self {
        assert!(decimal_separator != grouping_separator);
        NumberLocale {
            tag,
            decimal_separator,
            grouping_separator,
            exponent_marker,
        }
    }

    /// The registry tag this locale is filed under, always lowercase.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// The character separating integer and fraction digits.
    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// The canonical character separating groups of integer digits.
    pub fn grouping_separator(&self) -> char {
        self.grouping_separator
    }

    /// The canonical exponent marker.
    pub fn exponent_marker(&self) -> char {
        self.exponent_marker
    }

    /// True when `c` spells this locale's decimal separator.
    pub fn matches_decimal(&self, c: char) -> bool {
        c == self.decimal_separator
    }

    /// True when `c` spells this locale's grouping separator, folding the
    /// space-like and apostrophe-like character classes together.
    pub fn matches_grouping(&self, c: char) -> bool {
        if c == self.grouping_separator {
            return true;
        }
        if SPACE_LIKE.contains(&self.grouping_separator) {
            return SPACE_LIKE.contains(&c);
        }
        if APOSTROPHE_LIKE.contains(&self.grouping_separator) {
            return APOSTROPHE_LIKE.contains(&c);
        }
        false
    }

    /// True when `c` spells this locale's exponent marker, either case.
    pub fn matches_exponent(&self, c: char) -> bool {
        c.eq_ignore_ascii_case(&self.exponent_marker)
    }
}
