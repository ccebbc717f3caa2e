//! The generic locale-aware number converter.

use crate::canonical::{self, NumberFormatError, NumberSyntax};
use crate::normalize::normalize;
use cellcast_api::{ConversionError, TargetMetadata, TypeConverter};
use cellcast_locale::{LocaleResolver, NumberLocale};
use std::marker::PhantomData;

/// A numeric type [`NumberConverter`] can produce.
///
/// Implementations receive text already rewritten into canonical ASCII form
/// restricted by [`Self::SYNTAX`]; the only failures left to report are
/// range failures.
pub trait ParsableNumber: Sized {
    /// The name used in error messages (`"f32"`, `"i64"`, `"Decimal"`).
    const TYPE_NAME: &'static str;

    /// The grammar subset this type can represent.
    const SYNTAX: NumberSyntax;

    /// Parses canonical ASCII text (`-?digits(.digits)?(e[+-]?digits)?`).
    fn from_canonical(canonical: &str) -> Result<Self, NumberFormatError>;
}

macro_rules! impl_parsable_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ParsableNumber for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);
                const SYNTAX: NumberSyntax = NumberSyntax::INTEGER;

                fn from_canonical(canonical: &str) -> Result<Self, NumberFormatError> {
                    // Canonical integer text only fails on magnitude, or on
                    // a minus sign fed to an unsigned type.
                    canonical
                        .parse::<$ty>()
                        .map_err(|_| NumberFormatError::OutOfRange)
                }
            }
        )*
    };
}

impl_parsable_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

macro_rules! impl_parsable_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ParsableNumber for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);
                const SYNTAX: NumberSyntax = NumberSyntax::REAL;

                fn from_canonical(canonical: &str) -> Result<Self, NumberFormatError> {
                    let value = canonical
                        .parse::<$ty>()
                        .map_err(|_| NumberFormatError::OutOfRange)?;
                    // Overflow saturates to infinity during the parse; cells
                    // carry finite numbers only.
                    if value.is_finite() {
                        Ok(value)
                    } else {
                        Err(NumberFormatError::OutOfRange)
                    }
                }
            }
        )*
    };
}

impl_parsable_float!(f32, f64);

/// Locale-aware converter from cell text to one numeric type.
///
/// A conversion normalizes the raw text, resolves the locale for the
/// destination, canonicalizes the numeral under that locale, and parses the
/// result as `T`. Stateless and reentrant: conversions borrow the converter
/// immutably and share no interior state, so one instance may serve any
/// number of threads.
#[derive(Debug, Clone, Copy)]
pub struct NumberConverter<T> {
    resolver: LocaleResolver,
    _target: PhantomData<fn() -> T>,
}

impl<T: ParsableNumber> NumberConverter<T> {
    /// A converter with the default English fallback conventions.
    pub fn new() -> Self {
        NumberConverter::with_resolver(LocaleResolver::default())
    }

    /// A converter using an explicit resolver.
    pub fn with_resolver(resolver: LocaleResolver) -> Self {
        NumberConverter {
            resolver,
            _target: PhantomData,
        }
    }

    /// A converter whose fallback locale is `default_locale`.
    pub fn with_default_locale(default_locale: NumberLocale) -> Self {
        NumberConverter::with_resolver(LocaleResolver::new(default_locale))
    }

    /// Converts `raw` under the locale resolved for `metadata`.
    ///
    /// Errors carry the raw text exactly as supplied here, before any
    /// normalization.
    pub fn convert(
        &self,
        raw: &str,
        metadata: Option<&dyn TargetMetadata>,
    ) -> Result<T, ConversionError> {
        let trimmed = normalize(raw);
        let locale = self.resolver.resolve(metadata).map_err(|err| {
            ConversionError::unsupported_locale(raw, T::TYPE_NAME).with_source(err)
        })?;
        let canonical = canonical::canonicalize(trimmed, locale, T::SYNTAX)
            .map_err(|err| ConversionError::malformed_input(raw, T::TYPE_NAME).with_source(err))?;
        T::from_canonical(&canonical)
            .map_err(|err| ConversionError::malformed_input(raw, T::TYPE_NAME).with_source(err))
    }
}

impl<T: ParsableNumber> Default for NumberConverter<T> {
    fn default() -> Self {
        NumberConverter::new()
    }
}

impl<T: ParsableNumber> TypeConverter for NumberConverter<T> {
    type Output = T;

    fn convert(
        &self,
        raw: &str,
        metadata: Option<&dyn TargetMetadata>,
    ) -> Result<T, ConversionError> {
        NumberConverter::convert(self, raw, metadata)
    }
}
