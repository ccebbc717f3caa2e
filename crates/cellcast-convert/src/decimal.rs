//! Arbitrary-precision decimal targets.

use crate::canonical::{NumberFormatError, NumberSyntax};
use crate::number::ParsableNumber;
use rust_decimal::Decimal;

impl ParsableNumber for Decimal {
    const TYPE_NAME: &'static str = "Decimal";
    const SYNTAX: NumberSyntax = NumberSyntax::REAL;

    fn from_canonical(canonical: &str) -> Result<Self, NumberFormatError> {
        // Canonical text always spells the exponent marker in lowercase.
        let parsed = match canonical.split_once('e') {
            // from_scientific rounds an overlong mantissa instead of
            // failing; the mantissa must first survive an exact parse on
            // its own.
            Some((mantissa, _)) => Decimal::from_str_exact(mantissa)
                .and_then(|_| Decimal::from_scientific(canonical)),
            None => Decimal::from_str_exact(canonical),
        };
        parsed.map_err(|_| NumberFormatError::OutOfRange)
    }
}
