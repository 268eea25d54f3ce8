use winnow::combinator::alt;
use winnow::token::literal;
use winnow::{ModalResult, Parser};

use crate::types::*;

// Style and notation
pub fn parse_style(input: &mut &str) -> ModalResult<StyleToken> {
    alt((
        literal("d").value(StyleToken::Decimal),
        literal("%").value(StyleToken::Percent),
        literal("u").value(StyleToken::Unit),
        literal("$").value(StyleToken::CurrencySymbol),
        literal("w").value(StyleToken::CurrencyNarrowSymbol),
        literal("n").value(StyleToken::CurrencyName),
        literal("o").value(StyleToken::CurrencyCode),
        literal("a").value(StyleToken::Accounting),
        literal("E").value(StyleToken::Scientific),
        literal("e").value(StyleToken::Engineering),
        literal("c").value(StyleToken::Compact),
        literal("l").value(StyleToken::CompactLong),
        literal("s").value(StyleToken::CompactShort),
    ))
    .parse_next(input)
}

pub fn parse_grouping(input: &mut &str) -> ModalResult<PatternToken> {
    literal("#").value(PatternToken::NoGrouping).parse_next(input)
}

pub fn parse_sign(input: &mut &str) -> ModalResult<SignToken> {
    alt((
        literal("+").value(SignToken::ExceptZero),
        literal("!").value(SignToken::Never),
        literal("@").value(SignToken::Always),
    ))
    .parse_next(input)
}

/// Space, or a literal backslash followed by `t`
pub fn parse_blank(input: &mut &str) -> ModalResult<()> {
    alt((literal(" "), literal("\\t"))).void().parse_next(input)
}
