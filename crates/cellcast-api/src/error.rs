//! The failure type shared by every converter.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConversionError>;

/// Classifies a [`ConversionError`] so callers can tell bad data from bad
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConversionErrorKind {
    /// The raw text does not spell a value of the target type under the
    /// resolved locale.
    MalformedInput,

    /// The destination carries a language directive naming a locale no
    /// converter knows how to parse under.
    UnsupportedLocale,
}

impl fmt::Display for ConversionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionErrorKind::MalformedInput => write!(f, "malformed input"),
            ConversionErrorKind::UnsupportedLocale => write!(f, "unsupported locale"),
        }
    }
}

/// Returned when a converter cannot produce a typed value.
///
/// Carries the raw text verbatim (pre-normalization), the target type name,
/// and the failure kind, so callers can report the offending cell without
/// re-deriving any of it. Immutable once built; converters construct one at
/// the point of failure and never recover internally.
#[derive(Debug, Error)]
#[error("cannot convert \"{raw}\" into {target_type}: {kind}")]
pub struct ConversionError {
    raw: String,
    target_type: &'static str,
    kind: ConversionErrorKind,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ConversionError {
    /// Builds an error of the given kind for `raw`, without an underlying
    /// cause. Attach one with [`ConversionError::with_source`].
    pub fn new(
        raw: impl Into<String>,
        target_type: &'static str,
        kind: ConversionErrorKind,
    ) -> Self {
        ConversionError {
            raw: raw.into(),
            target_type,
            kind,
            source: None,
        }
    }

    /// Builds a [`ConversionErrorKind::MalformedInput`] error for `raw`.
    pub fn malformed_input(raw: impl Into<String>, target_type: &'static str) -> Self {
        ConversionError::new(raw, target_type, ConversionErrorKind::MalformedInput)
    }

    /// Builds a [`ConversionErrorKind::UnsupportedLocale`] error for `raw`.
    pub fn unsupported_locale(raw: impl Into<String>, target_type: &'static str) -> Self {
        ConversionError::new(raw, target_type, ConversionErrorKind::UnsupportedLocale)
    }

    /// Attaches the underlying parse or lookup error.
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        self.source = Some(source.into());
        self
    }

    /// The raw input text exactly as the caller supplied it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The name of the type the conversion was aimed at.
    pub fn target_type(&self) -> &'static str {
        self.target_type
    }

    /// The failure classification.
    pub fn kind(&self) -> ConversionErrorKind {
        self.kind
    }

    /// True when the input text itself was at fault.
    pub fn is_malformed_input(&self) -> bool {
        self.kind == ConversionErrorKind::MalformedInput
    }

    /// True when the destination's language directive was at fault.
    pub fn is_unsupported_locale(&self) -> bool {
        self.kind == ConversionErrorKind::UnsupportedLocale
    }
}
