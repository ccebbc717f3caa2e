//! The contract between the document pipeline and typed converters.

use crate::error::Result;
use crate::metadata::TargetMetadata;

/// Converts raw cell text into one strongly-typed value.
///
/// Implementations must be stateless with respect to conversions: `convert`
/// borrows the converter immutably, mutates nothing across calls, and may be
/// called concurrently from any number of threads. Each call is a pure
/// function of the raw text and the destination metadata.
///
/// The trait is object safe, so a pipeline can hold a
/// `Box<dyn TypeConverter<Output = T>>` per destination type.
pub trait TypeConverter {
    /// The value type this converter produces.
    type Output;

    /// Converts `raw` into [`Self::Output`].
    ///
    /// `metadata` describes the destination the value is headed for. `None`
    /// means the caller has no metadata carrier at all, which is an ordinary
    /// case, not an error: converters fall back to their default conventions.
    fn convert(&self, raw: &str, metadata: Option<&dyn TargetMetadata>) -> Result<Self::Output>;
}
