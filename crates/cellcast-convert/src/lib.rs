//! Locale-sensitive numeric conversion for cellcast
//!
//! This crate turns raw cell text into typed numeric values. A conversion
//! trims surrounding whitespace, resolves the locale for the destination
//! (an explicit language directive wins, otherwise the configured default),
//! rewrites the numeral from that locale's conventions into canonical ASCII,
//! and parses it as the target type. Failures surface as
//! [`cellcast_api::ConversionError`], split into malformed input and
//! unsupported locale.
//!
//! # Overview
//!
//! The core pieces are:
//! - [`NumberConverter`]: the generic converter, one per target type
//! - [`ParsableNumber`]: implemented for `i8`–`i128`, `u8`–`u128`, `f32`,
//!   `f64`, and `rust_decimal::Decimal`
//! - [`canonicalize`]: the strict locale grammar, usable on its own
//! - [`normalize`]: surrounding-whitespace removal
//!
//! # Example
//!
//! ```rust
//! use cellcast_api::LocaleTag;
//! use cellcast_convert::NumberConverter;
//!
//! let converter = NumberConverter::<f64>::new();
//!
//! // English conventions by default.
//! assert_eq!(converter.convert("1,234.5", None)?, 1234.5);
//!
//! // A language directive on the destination switches the separator rules.
//! let tag = LocaleTag::new("de");
//! assert_eq!(converter.convert("1.234,5", Some(&tag))?, 1234.5);
//!
//! // Bad data stays a typed error.
//! assert!(converter.convert("hello world", None).is_err());
//! # Ok::<(), cellcast_api::ConversionError>(())
//! ```

pub mod canonical;
mod decimal;
pub mod normalize;
pub mod number;

// Re-export main types
pub use canonical::{NumberFormatError, NumberSyntax, canonicalize};
pub use normalize::normalize;
pub use number::{NumberConverter, ParsableNumber};
