//! Destination metadata converters are allowed to interrogate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A language tag such as `"en"`, `"de"`, or `"pt-BR"`, following standard
/// language-tag conventions.
///
/// Tags are case-preserving; consumers are expected to compare and look them
/// up case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleTag(String);

impl LocaleTag {
    /// Wraps a tag string.
    pub fn new(tag: impl Into<String>) -> Self {
        LocaleTag(tag.into())
    }

    /// The tag as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary language subtag: `"de"` for `"de-AT"`, the whole tag when
    /// there is no region part.
    pub fn primary_subtag(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LocaleTag {
    fn from(tag: &str) -> Self {
        LocaleTag::new(tag)
    }
}

impl From<String> for LocaleTag {
    fn from(tag: String) -> Self {
        LocaleTag(tag)
    }
}

/// Capability interface a destination exposes to converters.
///
/// A destination is wherever the converted value is headed: a table column,
/// a struct field, a configuration cell. The pipeline that owns the
/// destination implements this trait as an adapter over its own metadata
/// model; converters query exactly one capability and must not assume any
/// other.
pub trait TargetMetadata {
    /// The language directive attached to this destination, if any.
    ///
    /// `None` means the destination says nothing about language and inherits
    /// the resolver default; it is never an error.
    fn language_directive(&self) -> Option<&LocaleTag>;
}

/// A bare tag can stand in for a full metadata carrier.
impl TargetMetadata for LocaleTag {
    fn language_directive(&self) -> Option<&LocaleTag> {
        Some(self)
    }
}
