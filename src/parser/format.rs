use winnow::combinator::opt;
use winnow::{ModalResult, Parser};

use crate::error::PatternError;
use crate::parser::combinators::{
    parse_digit_count, parse_fraction_group, parse_significant_group, skip_blanks,
};
use crate::parser::tokens::{parse_grouping, parse_sign, parse_style};
use crate::types::*;

/// Parse a number pattern
///
/// This is the main entry point of this module. The whole string must match
/// the grammar; a pattern that only matches a prefix is rejected.
///
/// # Arguments
/// * `pattern` - The pattern to parse
///
/// # Returns
/// * `Result<Pattern, PatternError>` - The tokens found, in grammar order
///
/// # Examples
/// ```
/// use intl_number_pattern::parser::parse_pattern;
/// use intl_number_pattern::types::{PatternToken, StyleToken};
///
/// let pattern = parse_pattern("$#").unwrap();
/// assert_eq!(
///     pattern.tokens,
///     vec![PatternToken::Style(StyleToken::CurrencySymbol), PatternToken::NoGrouping]
/// );
/// ```
pub fn parse_pattern(pattern: &str) -> Result<Pattern, PatternError> {
    let mut input = pattern;

    let tokens = parse_pattern_tokens
        .parse_next(&mut input)
        .map_err(|e| PatternError::Syntax(format!("{e:?}")))?;

    if !input.is_empty() {
        return Err(PatternError::UnexpectedInput {
            offset: pattern.len() - input.len(),
            remaining: input.to_string(),
        });
    }

    Ok(Pattern { tokens })
}

/// Indicates whether the whole pattern matches the grammar
///
/// An empty pattern is correct.
pub fn is_pattern_correct(pattern: &str) -> bool {
    parse_pattern(pattern).is_ok()
}

/// Parse every group in order: style, grouping, sign, integer digits,
/// fraction range, significant range
fn parse_pattern_tokens(input: &mut &str) -> ModalResult<Vec<PatternToken>> {
    let style = opt(parse_style).parse_next(input)?;
    skip_blanks(input)?;
    let grouping = opt(parse_grouping).parse_next(input)?;
    skip_blanks(input)?;
    let sign = opt(parse_sign).parse_next(input)?;
    let integer_digits = parse_digit_count(input)?;
    let fraction = opt(parse_fraction_group).parse_next(input)?;
    let significant = opt(parse_significant_group).parse_next(input)?;

    let tokens = [
        style.map(PatternToken::Style),
        grouping,
        sign.map(PatternToken::Sign),
        integer_digits.map(PatternToken::IntegerDigits),
        fraction,
        significant,
    ]
    .into_iter()
    .flatten()
    .collect();

    Ok(tokens)
}
