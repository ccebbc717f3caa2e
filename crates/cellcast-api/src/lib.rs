//! Conversion contracts for cellcast
//!
//! This crate defines the boundary between a document-processing pipeline and
//! the converters that turn raw cell text into typed values. It carries no
//! parsing logic of its own: the converter contract, the metadata capability
//! a destination exposes, and the one failure type all converters report
//! through.
//!
//! # Overview
//!
//! The core types are:
//! - [`TypeConverter`]: the contract a converter implements
//! - [`TargetMetadata`]: what a destination (column, field, cell) can tell a
//!   converter, queried only for its optional language directive
//! - [`LocaleTag`]: a language tag such as `"en"` or `"de-CH"`
//! - [`ConversionError`]: the typed failure channel, classified by
//!   [`ConversionErrorKind`]
//!
//! # Example
//!
//! ```rust
//! use cellcast_api::{ConversionError, Result, TargetMetadata, TypeConverter};
//!
//! /// A converter that accepts only the word "yes" or "no".
//! struct YesNoConverter;
//!
//! impl TypeConverter for YesNoConverter {
//!     type Output = bool;
//!
//!     fn convert(
//!         &self,
//!         raw: &str,
//!         _metadata: Option<&dyn TargetMetadata>,
//!     ) -> Result<bool> {
//!         match raw {
//!             "yes" => Ok(true),
//!             "no" => Ok(false),
//!             other => Err(ConversionError::malformed_input(other, "bool")),
//!         }
//!     }
//! }
//!
//! let converter = YesNoConverter;
//! assert!(converter.convert("yes", None)?);
//! assert!(converter.convert("maybe", None).is_err());
//! # Ok::<(), cellcast_api::ConversionError>(())
//! ```

pub mod converter;
pub mod error;
pub mod metadata;

// Re-export main types
pub use converter::TypeConverter;
pub use error::{ConversionError, ConversionErrorKind, Result};
pub use metadata::{LocaleTag, TargetMetadata};
