//! Numeric locale conventions for cellcast
//!
//! This crate owns the answer to "which separator characters does this cell
//! use": the conventions themselves ([`NumberLocale`]), the immutable table
//! of supported locales ([`registry`]), and the resolution policy that picks
//! one locale per conversion from destination metadata ([`LocaleResolver`]).
//!
//! # Overview
//!
//! The core types are:
//! - [`NumberLocale`]: one locale's decimal separator, grouping separator,
//!   and exponent marker
//! - [`registry`]: the read-only lookup table, keyed by language tag
//! - [`LocaleResolver`]: fallback precedence from metadata to locale
//! - [`UnknownLocaleError`]: returned when a directive names an unregistered
//!   locale; resolution never silently falls back to the default
//!
//! # Example
//!
//! ```rust
//! use cellcast_api::LocaleTag;
//! use cellcast_locale::{ENGLISH, LocaleResolver};
//!
//! let resolver = LocaleResolver::default();
//!
//! // No metadata carrier at all: the default locale applies.
//! assert_eq!(resolver.resolve(None)?, ENGLISH);
//!
//! // A language directive picks the matching registry entry.
//! let tag = LocaleTag::new("de");
//! let locale = resolver.resolve(Some(&tag))?;
//! assert_eq!(locale.decimal_separator(), ',');
//!
//! // Unknown tags are an error, not a fallback.
//! let tag = LocaleTag::new("tlh");
//! assert!(resolver.resolve(Some(&tag)).is_err());
//! # Ok::<(), cellcast_locale::UnknownLocaleError>(())
//! ```

pub mod locale;
pub mod registry;
pub mod resolver;

// Re-export main types
pub use locale::NumberLocale;
pub use registry::{ENGLISH, all, lookup};
pub use resolver::{LocaleResolver, UnknownLocaleError};
