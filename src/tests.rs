use crate::error::PatternError;
use crate::parser::*;
use crate::types::*;

#[test]
fn test_empty_pattern() {
    let result = parse_pattern("").unwrap();
    assert!(result.tokens.is_empty());
    assert!(is_pattern_correct(""));
}

#[test]
fn test_all_groups() {
    let result = parse_pattern("$#+7.1-2;1-2").unwrap();
    assert_eq!(
        result.tokens,
        vec![
            PatternToken::Style(StyleToken::CurrencySymbol),
            PatternToken::NoGrouping,
            PatternToken::Sign(SignToken::ExceptZero),
            PatternToken::IntegerDigits(7),
            PatternToken::FractionDigits(DigitRange {
                min: Some(1),
                max: Some(2),
            }),
            PatternToken::SignificantDigits(DigitRange {
                min: Some(1),
                max: Some(2),
            }),
        ]
    );
}

#[test]
fn test_style_symbols() {
    let cases = [
        ("d", StyleToken::Decimal),
        ("%", StyleToken::Percent),
        ("u", StyleToken::Unit),
        ("$", StyleToken::CurrencySymbol),
        ("w", StyleToken::CurrencyNarrowSymbol),
        ("n", StyleToken::CurrencyName),
        ("o", StyleToken::CurrencyCode),
        ("a", StyleToken::Accounting),
        ("E", StyleToken::Scientific),
        ("e", StyleToken::Engineering),
        ("c", StyleToken::Compact),
        ("l", StyleToken::CompactLong),
        ("s", StyleToken::CompactShort),
    ];
    for (pattern, style) in cases {
        let result = parse_pattern(pattern).unwrap();
        assert_eq!(result.tokens, vec![PatternToken::Style(style)], "{pattern}");
        assert_eq!(style.symbol().to_string(), pattern);
    }
}

#[test]
fn test_zero_integer_digits_is_kept() {
    let result = parse_pattern("0").unwrap();
    assert_eq!(result.tokens, vec![PatternToken::IntegerDigits(0)]);

    let result = parse_pattern("00").unwrap();
    assert_eq!(result.tokens, vec![PatternToken::IntegerDigits(0)]);

    let result = parse_pattern("21").unwrap();
    assert_eq!(result.tokens, vec![PatternToken::IntegerDigits(21)]);
}

#[test]
fn test_partial_ranges() {
    let result = parse_pattern(".").unwrap();
    assert_eq!(
        result.tokens,
        vec![PatternToken::FractionDigits(DigitRange::default())]
    );

    let result = parse_pattern(".-2").unwrap();
    assert_eq!(
        result.tokens,
        vec![PatternToken::FractionDigits(DigitRange {
            min: None,
            max: Some(2),
        })]
    );

    let result = parse_pattern(";3-").unwrap();
    assert_eq!(
        result.tokens,
        vec![PatternToken::SignificantDigits(DigitRange {
            min: Some(3),
            max: None,
        })]
    );
}

#[test]
fn test_blanks_around_grouping() {
    let result = parse_pattern("d #").unwrap();
    assert_eq!(
        result.tokens,
        vec![
            PatternToken::Style(StyleToken::Decimal),
            PatternToken::NoGrouping
        ]
    );

    // A literal backslash-t counts as a blank
    let result = parse_pattern("d\\t\\t# @").unwrap();
    assert_eq!(
        result.tokens,
        vec![
            PatternToken::Style(StyleToken::Decimal),
            PatternToken::NoGrouping,
            PatternToken::Sign(SignToken::Always),
        ]
    );

    assert!(is_pattern_correct("   "));
    // A real tab is not a blank
    assert!(!is_pattern_correct("d\t#"));
    // No blank between sign and digits
    assert!(!is_pattern_correct("+ 2"));
}

#[test]
fn test_rejected_patterns() {
    for pattern in [
        "WRONG", "123", "$$", "#d", "+#", ".123", "1.2-345", ";1;2", ".1.2", ";1.2", "1:2",
    ] {
        assert!(!is_pattern_correct(pattern), "{pattern} should be rejected");
    }

    // Blanks may trail the style even when nothing follows
    assert!(is_pattern_correct("d "));
}

#[test]
fn test_error_reports_remaining_input() {
    let err = parse_pattern("$7.1x").unwrap_err();
    assert_eq!(
        err,
        PatternError::UnexpectedInput {
            offset: 4,
            remaining: "x".to_string(),
        }
    );
    assert_eq!(err.to_string(), "unexpected input 'x' at offset 4");
}

#[test]
fn test_display_writes_canonical_pattern() {
    let result = parse_pattern("$ # +07.1-2;-3").unwrap();
    assert_eq!(result.to_string(), "$#+7.1-2;-3");
    assert_eq!(parse_pattern(&result.to_string()).unwrap(), result);

    assert_eq!(parse_pattern(".").unwrap().to_string(), ".");
}
