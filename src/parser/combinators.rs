use winnow::combinator::{opt, preceded, repeat};
use winnow::token::{literal, take_while};
use winnow::{ModalResult, Parser};

use crate::parser::tokens::parse_blank;
use crate::types::*;

/// Skip any run of blanks
pub fn skip_blanks(input: &mut &str) -> ModalResult<()> {
    repeat(0.., parse_blank).parse_next(input)
}

/// Parse up to two decimal digits
///
/// Yields `None` when no digit is present, so that an explicit `0` stays
/// distinguishable from a missing count.
pub fn parse_digit_count(input: &mut &str) -> ModalResult<Option<u8>> {
    take_while(0..=2, |c: char| c.is_ascii_digit())
        .map(|digits: &str| {
            (!digits.is_empty())
                .then(|| digits.bytes().fold(0u8, |acc, b| acc * 10 + (b - b'0')))
        })
        .parse_next(input)
}

/// Parse `min`, `min-max`, `-max` or nothing
pub fn parse_digit_range(input: &mut &str) -> ModalResult<DigitRange> {
    (parse_digit_count, opt(preceded(literal("-"), parse_digit_count)))
        .map(|(min, max)| DigitRange {
            min,
            max: max.flatten(),
        })
        .parse_next(input)
}

/// Fraction digit group, introduced by `.`
pub fn parse_fraction_group(input: &mut &str) -> ModalResult<PatternToken> {
    preceded(literal("."), parse_digit_range)
        .map(PatternToken::FractionDigits)
        .parse_next(input)
}

/// Significant digit group, introduced by `;`
pub fn parse_significant_group(input: &mut &str) -> ModalResult<PatternToken> {
    preceded(literal(";"), parse_digit_range)
        .map(PatternToken::SignificantDigits)
        .parse_next(input)
}
