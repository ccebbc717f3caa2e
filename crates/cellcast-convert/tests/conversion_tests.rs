//! End-to-end conversion behavior across locales and target types.

use cellcast_api::{ConversionErrorKind, LocaleTag, TargetMetadata};
use cellcast_convert::NumberConverter;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;

/// Test double for a destination column that may carry a language directive.
struct ColumnSpec {
    language: Option<LocaleTag>,
}

impl ColumnSpec {
    fn with_language(tag: &str) -> Self {
        ColumnSpec {
            language: Some(LocaleTag::new(tag)),
        }
    }

    fn plain() -> Self {
        ColumnSpec { language: None }
    }
}

impl TargetMetadata for ColumnSpec {
    fn language_directive(&self) -> Option<&LocaleTag> {
        self.language.as_ref()
    }
}

#[test]
fn test_zero_spellings_convert_to_zero() {
    let converter = NumberConverter::<f32>::new();
    for spelling in ["0", "0.", "0.0", "0.00", "0.000"] {
        assert_eq!(converter.convert(spelling, None).unwrap(), 0.0f32);
    }
}

#[test]
fn test_max_value_round_trips() {
    let f32_converter = NumberConverter::<f32>::new();
    let formatted = f32::MAX.to_string();
    assert_eq!(f32_converter.convert(&formatted, None).unwrap(), f32::MAX);

    let f64_converter = NumberConverter::<f64>::new();
    let formatted = f64::MAX.to_string();
    assert_eq!(f64_converter.convert(&formatted, None).unwrap(), f64::MAX);
}

#[test]
fn test_lowest_value_round_trips() {
    let converter = NumberConverter::<f32>::new();
    let formatted = f32::MIN.to_string();
    assert_eq!(converter.convert(&formatted, None).unwrap(), f32::MIN);
}

#[test]
fn test_min_positive_and_subnormal_round_trip() {
    let converter = NumberConverter::<f32>::new();
    let formatted = f32::MIN_POSITIVE.to_string();
    assert_eq!(
        converter.convert(&formatted, None).unwrap(),
        f32::MIN_POSITIVE
    );

    // Smallest positive subnormal.
    let subnormal = f32::from_bits(1);
    let formatted = subnormal.to_string();
    assert_eq!(converter.convert(&formatted, None).unwrap(), subnormal);
}

#[test]
fn test_high_precision_fraction_matches_literal() {
    let converter = NumberConverter::<f64>::new();
    let value = converter.convert("-10000000.0000001", None).unwrap();
    assert_eq!(value, -10000000.0000001f64);
}

#[test]
fn test_surrounding_whitespace_is_ignored() {
    let converter = NumberConverter::<f64>::new();
    for raw in [" 1.0", "1.0 ", "\t1.0", "1.0\t", "\n1.0", "1.0\n", "\r\n 1.0 \t"] {
        assert_eq!(converter.convert(raw, None).unwrap(), 1.0);
    }
}

#[test]
fn test_interior_whitespace_is_not_ignored() {
    let converter = NumberConverter::<f64>::new();
    assert!(converter.convert("1 0", None).is_err());
    assert!(converter.convert("1 000.5", None).is_err());
}

#[test]
fn test_word_input_fails_as_malformed() {
    let converter = NumberConverter::<f32>::new();
    let err = converter.convert("hello world", None).unwrap_err();
    assert_eq!(err.kind(), ConversionErrorKind::MalformedInput);
    assert!(err.is_malformed_input());
    assert_eq!(err.raw(), "hello world");
    assert!(err.to_string().contains("hello world"));
}

#[test]
fn test_empty_and_blank_input_fail() {
    let converter = NumberConverter::<f32>::new();
    for raw in ["", " ", "\t", "\n", "   "] {
        let err = converter.convert(raw, None).unwrap_err();
        assert_eq!(err.kind(), ConversionErrorKind::MalformedInput);
    }
}

#[test]
fn test_absent_and_directiveless_metadata_use_default() {
    let converter = NumberConverter::<f32>::new();
    let no_directive = ColumnSpec::plain();

    assert_eq!(converter.convert("42.0", None).unwrap(), 42.0);
    assert_eq!(converter.convert("42.0", Some(&no_directive)).unwrap(), 42.0);

    // Under the default English conventions a German spelling is bad data.
    assert!(converter.convert("42,0", None).is_err());
}

#[test]
fn test_german_directive_switches_separators() {
    let converter = NumberConverter::<f32>::new();
    let german = ColumnSpec::with_language("de");

    assert_eq!(converter.convert("42,0", Some(&german)).unwrap(), 42.0);
    assert_eq!(
        converter.convert("1.234,56", Some(&german)).unwrap(),
        1234.56
    );

    // And the English spelling is no longer valid.
    assert!(converter.convert("42.0", Some(&german)).is_err());
}

#[test]
fn test_unknown_directive_fails_without_fallback() {
    let converter = NumberConverter::<f32>::new();
    let klingon = ColumnSpec::with_language("tlh");

    let err = converter.convert("42.0", Some(&klingon)).unwrap_err();
    assert_eq!(err.kind(), ConversionErrorKind::UnsupportedLocale);
    assert!(err.is_unsupported_locale());
    // "42.0" is perfectly valid English; the failure must not mask that the
    // locale configuration is the problem.
    assert_eq!(err.raw(), "42.0");
}

#[test]
fn test_region_subtag_inherits_language_rules() {
    let converter = NumberConverter::<f64>::new();
    let austrian = ColumnSpec::with_language("de-AT");
    assert_eq!(converter.convert("42,5", Some(&austrian)).unwrap(), 42.5);
}

#[test]
fn test_swiss_german_keeps_dot_decimal() {
    let converter = NumberConverter::<f64>::new();
    let swiss = ColumnSpec::with_language("de-CH");

    assert_eq!(
        converter.convert("1'234.5", Some(&swiss)).unwrap(),
        1234.5
    );
    assert_eq!(
        converter.convert("1\u{2019}234.5", Some(&swiss)).unwrap(),
        1234.5
    );
    assert!(converter.convert("1.234,5", Some(&swiss)).is_err());
}

#[test]
fn test_space_grouped_locale() {
    let converter = NumberConverter::<f64>::new();
    let swedish = ColumnSpec::with_language("sv");
    assert_eq!(
        converter.convert("1\u{00A0}234,5", Some(&swedish)).unwrap(),
        1234.5
    );
    assert_eq!(converter.convert("1 234,5", Some(&swedish)).unwrap(), 1234.5);
}

#[test]
fn test_negative_zero_preserves_sign() {
    let converter = NumberConverter::<f32>::new();
    for raw in ["-0", "-0.0", "-0.00"] {
        let value = converter.convert(raw, None).unwrap();
        assert_eq!(value, 0.0);
        assert!(value.is_sign_negative(), "{raw} lost its sign");
    }
}

#[test]
fn test_scientific_notation_inputs() {
    let converter = NumberConverter::<f64>::new();
    assert_eq!(converter.convert("1.5e3", None).unwrap(), 1500.0);
    assert_eq!(converter.convert("1.5E3", None).unwrap(), 1500.0);
    assert_eq!(converter.convert("2e-3", None).unwrap(), 0.002);
    assert_eq!(converter.convert("+1e2", None).unwrap(), 100.0);

    let german = ColumnSpec::with_language("de");
    assert_eq!(converter.convert("1,5e3", Some(&german)).unwrap(), 1500.0);
}

#[test]
fn test_nonfinite_spellings_are_rejected() {
    let converter = NumberConverter::<f64>::new();
    for raw in ["inf", "-inf", "infinity", "Infinity", "NaN", "nan"] {
        let err = converter.convert(raw, None).unwrap_err();
        assert_eq!(err.kind(), ConversionErrorKind::MalformedInput, "{raw}");
    }
}

#[test]
fn test_integer_family_end_to_end() {
    assert_eq!(
        NumberConverter::<i32>::new().convert("1,234", None).unwrap(),
        1234
    );
    assert_eq!(
        NumberConverter::<u64>::new()
            .convert(&u64::MAX.to_string(), None)
            .unwrap(),
        u64::MAX
    );
    assert_eq!(
        NumberConverter::<i128>::new()
            .convert(&i128::MIN.to_string(), None)
            .unwrap(),
        i128::MIN
    );
    assert_eq!(
        NumberConverter::<u128>::new()
            .convert(&u128::MAX.to_string(), None)
            .unwrap(),
        u128::MAX
    );
    assert!(NumberConverter::<u8>::new().convert("-1", None).is_err());
    assert!(NumberConverter::<i64>::new().convert("9.5", None).is_err());
}

#[test]
fn test_decimal_target_end_to_end() {
    let converter = NumberConverter::<Decimal>::new();
    let german = ColumnSpec::with_language("de");
    assert_eq!(
        converter.convert("1.234.567,89", Some(&german)).unwrap(),
        Decimal::from_str_exact("1234567.89").unwrap()
    );
}

#[test]
fn test_error_exposes_raw_type_and_kind() {
    let err = NumberConverter::<u16>::new()
        .convert(" 42,0 ", None)
        .unwrap_err();
    assert_eq!(err.raw(), " 42,0 ");
    assert_eq!(err.target_type(), "u16");
    assert_eq!(err.kind(), ConversionErrorKind::MalformedInput);
}

#[test]
fn test_display_round_trip_spot_checks() {
    let f64_converter = NumberConverter::<f64>::new();
    for value in [0.1f64, 12345.678, -98765.4321, 1e-10, 2.5e300] {
        let formatted = value.to_string();
        assert_eq!(f64_converter.convert(&formatted, None).unwrap(), value);
    }

    let i64_converter = NumberConverter::<i64>::new();
    for value in [i64::MIN, -1, 0, 1, i64::MAX] {
        let formatted = value.to_string();
        assert_eq!(i64_converter.convert(&formatted, None).unwrap(), value);
    }
}

macro_rules! assert_min_max_round_trip {
    ($($target:ty),+ $(,)?) => {$({
        let converter = NumberConverter::<$target>::new();
        for boundary in [<$target>::MIN, <$target>::MAX] {
            let formatted = boundary.to_string();
            assert_eq!(
                converter.convert(&formatted, None).unwrap(),
                boundary,
                "{} does not round-trip {formatted}",
                stringify!($target)
            );
        }
    })+};
}

#[test]
fn test_every_target_round_trips_its_boundaries() {
    assert_min_max_round_trip!(i8, i16, i32, i64, i128);
    assert_min_max_round_trip!(u8, u16, u32, u64, u128);
    assert_min_max_round_trip!(f32, f64, Decimal);
}

#[test]
fn test_scientific_renderings_round_trip() {
    let f32_converter = NumberConverter::<f32>::new();
    for value in [f32::MAX, f32::MIN, f32::MIN_POSITIVE, f32::from_bits(1)] {
        let formatted = format!("{value:e}");
        let parsed = f32_converter.convert(&formatted, None).unwrap();
        assert_eq!(parsed, value, "{formatted}");
    }

    let f64_converter = NumberConverter::<f64>::new();
    for value in [f64::MAX, f64::MIN, f64::MIN_POSITIVE, f64::from_bits(1)] {
        let formatted = format!("{value:e}");
        let parsed = f64_converter.convert(&formatted, None).unwrap();
        assert_eq!(parsed, value, "{formatted}");
    }
}

#[test]
fn test_one_converter_serves_many_locales() {
    let converter = NumberConverter::<f64>::new();
    let german = ColumnSpec::with_language("de");
    let french = ColumnSpec::with_language("fr");

    assert_eq!(converter.convert("1,234.5", None).unwrap(), 1234.5);
    assert_eq!(converter.convert("1.234,5", Some(&german)).unwrap(), 1234.5);
    assert_eq!(
        converter.convert("1\u{202F}234,5", Some(&french)).unwrap(),
        1234.5
    );
    // Back to the default: no directive state leaks between calls.
    assert_eq!(converter.convert("1,234.5", None).unwrap(), 1234.5);
}

#[test]
fn test_shared_converter_across_threads() {
    let converter = NumberConverter::<f64>::new();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let german = ColumnSpec::with_language("de");
                for _ in 0..100 {
                    assert_eq!(converter.convert("1,234.5", None).unwrap(), 1234.5);
                    assert_eq!(
                        converter.convert("1.234,5", Some(&german)).unwrap(),
                        1234.5
                    );
                }
            });
        }
    });
}
