//! Translation of locale-formatted numerals into canonical ASCII.
//!
//! [`canonicalize`] is a single-pass scanner: it validates a numeral against
//! one locale's conventions and rewrites it into the form the standard
//! `FromStr` implementations accept (`-?digits(.digits)?(e[+-]?digits)?`).
//! Splitting the locale grammar from the final parse keeps every numeric
//! target type behind the same syntax rules.

use cellcast_locale::NumberLocale;
use thiserror::Error;

/// Why a numeral failed to canonicalize or parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumberFormatError {
    /// The input was empty after trimming.
    #[error("empty input")]
    Empty,

    /// A character with no role in the locale's number grammar, or one in a
    /// position the grammar does not allow.
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),

    /// Grouping separators must split the integer digits into an initial
    /// group of one to three followed by groups of exactly three, and never
    /// appear in the fraction or exponent.
    #[error("misplaced grouping separator")]
    MisplacedGroupingSeparator,

    /// A sign, separator, or exponent marker with no digits to apply to.
    #[error("missing digits")]
    MissingDigits,

    /// The target type is integral; fraction syntax is not representable.
    #[error("fraction not representable by the target type")]
    FractionNotSupported,

    /// The target type is integral; exponent syntax is not representable.
    #[error("exponent not representable by the target type")]
    ExponentNotSupported,

    /// Syntactically valid but outside the target type's representable
    /// range.
    #[error("value out of range")]
    OutOfRange,
}

/// The grammar subset a target type can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberSyntax {
    /// Whether fraction syntax (`"1.5"`, `"0."`) is representable.
    pub accepts_fraction: bool,
    /// Whether exponent syntax (`"1.5e3"`) is representable.
    pub accepts_exponent: bool,
}

impl NumberSyntax {
    /// Integer grammar: sign and digits only.
    pub const INTEGER: NumberSyntax = NumberSyntax {
        accepts_fraction: false,
        accepts_exponent: false,
    };

    /// Real-number grammar: fraction and exponent accepted.
    pub const REAL: NumberSyntax = NumberSyntax {
        accepts_fraction: true,
        accepts_exponent: true,
    };
}

enum Section {
    Integer,
    Fraction,
    Exponent,
}

/// Rewrites `input` into canonical ASCII form under `locale`.
///
/// `input` must already be trimmed. The scan is strict: grouping separators
/// must land on proper three-digit group boundaries, the decimal separator
/// may appear once, the exponent marker is matched case-insensitively, and
/// only ASCII digits are digits. A leading `+` and a redundant leading or
/// trailing decimal separator (`".5"`, `"5."`) are accepted and erased from
/// the canonical form.
pub fn canonicalize(
    input: &str,
    locale: NumberLocale,
    syntax: NumberSyntax,
) -> Result<String, NumberFormatError> {
    if input.is_empty() {
        return Err(NumberFormatError::Empty);
    }

    let mut out = String::with_capacity(input.len() + 1);
    let mut rest = input;
    if let Some(after) = input.strip_prefix('-') {
        out.push('-');
        rest = after;
    } else if let Some(after) = input.strip_prefix('+') {
        rest = after;
    }
    if rest.is_empty() {
        return Err(NumberFormatError::MissingDigits);
    }

    let mut section = Section::Integer;
    let mut int_digits = 0usize;
    let mut frac_digits = 0usize;
    let mut exp_digits = 0usize;
    // Digits seen since the last grouping separator.
    let mut group_len = 0usize;
    let mut saw_grouping = false;
    let mut exp_sign_ok = false;

    for c in rest.chars() {
        match section {
            Section::Integer => {
                if c.is_ascii_digit() {
                    out.push(c);
                    int_digits += 1;
                    group_len += 1;
                } else if locale.matches_grouping(c) {
                    let group_ok = if saw_grouping {
                        group_len == 3
                    } else {
                        (1..=3).contains(&group_len)
                    };
                    if !group_ok {
                        return Err(NumberFormatError::MisplacedGroupingSeparator);
                    }
                    saw_grouping = true;
                    group_len = 0;
                } else if locale.matches_decimal(c) {
                    if !syntax.accepts_fraction {
                        return Err(NumberFormatError::FractionNotSupported);
                    }
                    if saw_grouping && group_len != 3 {
                        return Err(NumberFormatError::MisplacedGroupingSeparator);
                    }
                    if int_digits == 0 {
                        out.push('0');
                    }
                    out.push('.');
                    section = Section::Fraction;
                } else if locale.matches_exponent(c) {
                    if int_digits == 0 {
                        return Err(NumberFormatError::UnexpectedCharacter(c));
                    }
                    if !syntax.accepts_exponent {
                        return Err(NumberFormatError::ExponentNotSupported);
                    }
                    if saw_grouping && group_len != 3 {
                        return Err(NumberFormatError::MisplacedGroupingSeparator);
                    }
                    out.push('e');
                    section = Section::Exponent;
                    exp_sign_ok = true;
                } else {
                    return Err(NumberFormatError::UnexpectedCharacter(c));
                }
            }
            Section::Fraction => {
                if c.is_ascii_digit() {
                    out.push(c);
                    frac_digits += 1;
                } else if locale.matches_exponent(c) {
                    if int_digits + frac_digits == 0 {
                        return Err(NumberFormatError::UnexpectedCharacter(c));
                    }
                    if !syntax.accepts_exponent {
                        return Err(NumberFormatError::ExponentNotSupported);
                    }
                    if frac_digits == 0 {
                        // Drop the dangling separator from forms like "1.e5".
                        out.pop();
                    }
                    out.push('e');
                    section = Section::Exponent;
                    exp_sign_ok = true;
                } else if locale.matches_grouping(c) {
                    return Err(NumberFormatError::MisplacedGroupingSeparator);
                } else {
                    return Err(NumberFormatError::UnexpectedCharacter(c));
                }
            }
            Section::Exponent => {
                if c.is_ascii_digit() {
                    out.push(c);
                    exp_digits += 1;
                    exp_sign_ok = false;
                } else if (c == '+' || c == '-') && exp_sign_ok {
                    if c == '-' {
                        out.push('-');
                    }
                    exp_sign_ok = false;
                } else if locale.matches_grouping(c) {
                    return Err(NumberFormatError::MisplacedGroupingSeparator);
                } else {
                    return Err(NumberFormatError::UnexpectedCharacter(c));
                }
            }
        }
    }

    match section {
        Section::Integer => {
            if saw_grouping && group_len != 3 {
                return Err(NumberFormatError::MisplacedGroupingSeparator);
            }
        }
        Section::Fraction => {
            if int_digits + frac_digits == 0 {
                return Err(NumberFormatError::MissingDigits);
            }
            if frac_digits == 0 {
                // "5." canonicalizes to "5".
                out.pop();
            }
        }
        Section::Exponent => {
            if exp_digits == 0 {
                return Err(NumberFormatError::MissingDigits);
            }
        }
    }

    Ok(out)
}
