//! Locale resolution against destination metadata.

use crate::locale::NumberLocale;
use crate::registry;
use cellcast_api::{LocaleTag, TargetMetadata};
use thiserror::Error;

/// Returned by [`LocaleResolver::resolve`] when a language directive names a
/// locale the registry does not cover.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown locale tag \"{tag}\"")]
pub struct UnknownLocaleError {
    tag: LocaleTag,
}

impl UnknownLocaleError {
    /// The directive that failed to resolve, case preserved.
    pub fn tag(&self) -> &LocaleTag {
        &self.tag
    }
}

/// Chooses the locale a single conversion parses under.
///
/// Precedence: an explicit language directive on the destination wins; a
/// missing metadata carrier, or a carrier without a directive, falls back to
/// the resolver's default locale. A directive naming an unregistered locale
/// is an error, never a silent fallback, so misconfigured destinations stay
/// distinguishable from bad cell data.
///
/// The default locale is explicit construction-time state rather than an
/// ambient global, so tests and embedders can pin it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleResolver {
    default_locale: NumberLocale,
}

impl LocaleResolver {
    /// A resolver that falls back to `default_locale`.
    pub fn new(default_locale: NumberLocale) -> Self {
        LocaleResolver { default_locale }
    }

    /// The locale used when no directive is present.
    pub fn default_locale(&self) -> NumberLocale {
        self.default_locale
    }

    /// Resolves the locale for a destination described by `metadata`.
    ///
    /// Pure lookup; no side effects.
    pub fn resolve(
        &self,
        metadata: Option<&dyn TargetMetadata>,
    ) -> Result<NumberLocale, UnknownLocaleError> {
        match metadata.and_then(|m| m.language_directive()) {
            None => Ok(self.default_locale),
            Some(directive) => registry::lookup(directive).ok_or_else(|| UnknownLocaleError {
                tag: directive.clone(),
            }),
        }
    }
}

impl Default for LocaleResolver {
    /// English conventions, the registry's process default.
    fn default() -> Self {
        LocaleResolver::new(registry::ENGLISH)
    }
}
