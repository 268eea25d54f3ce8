//! Pattern to option mapping
//!
//! Turns parsed pattern tokens into [`NumberFormatOptions`] and merges caller
//! overrides on top.

use tracing::debug;

use crate::parser::parse_pattern;
use crate::types::*;

impl StyleToken {
    /// Base options for a style symbol
    pub fn base_options(self) -> NumberFormatOptions {
        let mut options = NumberFormatOptions::default();
        match self {
            StyleToken::Decimal => options.style = Some(Style::Decimal),
            StyleToken::Percent => options.style = Some(Style::Percent),
            StyleToken::Unit => options.style = Some(Style::Unit),
            StyleToken::CurrencySymbol => {
                options.style = Some(Style::Currency);
                options.currency_display = Some(CurrencyDisplay::Symbol);
            }
            StyleToken::CurrencyNarrowSymbol => {
                options.style = Some(Style::Currency);
                options.currency_display = Some(CurrencyDisplay::NarrowSymbol);
            }
            StyleToken::CurrencyName => {
                options.style = Some(Style::Currency);
                options.currency_display = Some(CurrencyDisplay::Name);
            }
            StyleToken::CurrencyCode => {
                options.style = Some(Style::Currency);
                options.currency_display = Some(CurrencyDisplay::Code);
            }
            StyleToken::Accounting => {
                options.style = Some(Style::Currency);
                options.currency_sign = Some(CurrencySign::Accounting);
            }
            StyleToken::Scientific => options.notation = Some(Notation::Scientific),
            StyleToken::Engineering => options.notation = Some(Notation::Engineering),
            StyleToken::Compact => options.notation = Some(Notation::Compact),
            StyleToken::CompactLong => {
                options.notation = Some(Notation::Compact);
                options.compact_display = Some(CompactDisplay::Long);
            }
            StyleToken::CompactShort => {
                options.notation = Some(Notation::Compact);
                options.compact_display = Some(CompactDisplay::Short);
            }
        }
        options
    }
}

impl From<SignToken> for SignDisplay {
    fn from(sign: SignToken) -> Self {
        match sign {
            SignToken::ExceptZero => SignDisplay::ExceptZero,
            SignToken::Never => SignDisplay::Never,
            SignToken::Always => SignDisplay::Always,
        }
    }
}

impl Pattern {
    /// Options described by this pattern alone
    pub fn to_options(&self) -> NumberFormatOptions {
        let mut options = NumberFormatOptions::default();
        for token in &self.tokens {
            match *token {
                PatternToken::Style(style) => options.merge(&style.base_options()),
                PatternToken::NoGrouping => options.use_grouping = Some(false),
                PatternToken::Sign(sign) => options.sign_display = Some(sign.into()),
                PatternToken::IntegerDigits(n) => options.minimum_integer_digits = Some(n),
                PatternToken::FractionDigits(range) => {
                    options.minimum_fraction_digits = range.min;
                    options.maximum_fraction_digits = range.max;
                }
                PatternToken::SignificantDigits(range) => {
                    options.minimum_significant_digits = range.min;
                    options.maximum_significant_digits = range.max;
                }
            }
        }
        options
    }
}

impl From<&Pattern> for NumberFormatOptions {
    fn from(pattern: &Pattern) -> Self {
        pattern.to_options()
    }
}

impl NumberFormatOptions {
    /// Copy every field set in `overrides` onto `self`
    pub fn merge(&mut self, overrides: &NumberFormatOptions) {
        fn take<T: Clone>(target: &mut Option<T>, source: &Option<T>) {
            if source.is_some() {
                target.clone_from(source);
            }
        }

        take(&mut self.style, &overrides.style);
        take(&mut self.notation, &overrides.notation);
        take(&mut self.compact_display, &overrides.compact_display);
        take(&mut self.currency, &overrides.currency);
        take(&mut self.currency_display, &overrides.currency_display);
        take(&mut self.currency_sign, &overrides.currency_sign);
        take(&mut self.sign_display, &overrides.sign_display);
        take(&mut self.use_grouping, &overrides.use_grouping);
        take(&mut self.minimum_integer_digits, &overrides.minimum_integer_digits);
        take(&mut self.minimum_fraction_digits, &overrides.minimum_fraction_digits);
        take(&mut self.maximum_fraction_digits, &overrides.maximum_fraction_digits);
        take(&mut self.minimum_significant_digits, &overrides.minimum_significant_digits);
        take(&mut self.maximum_significant_digits, &overrides.maximum_significant_digits);
    }

    /// `self` with `overrides` merged on top
    pub fn merged(mut self, overrides: &NumberFormatOptions) -> Self {
        self.merge(overrides);
        self
    }
}

/// Build number format options from a pattern
///
/// A pattern that does not match the grammar contributes nothing: the
/// result is a copy of `overrides`, or empty options. Fields set in
/// `overrides` always win over decoded ones.
///
/// # Examples
/// ```
/// use intl_number_pattern::make_options;
/// use intl_number_pattern::types::{CurrencyDisplay, Style};
///
/// let options = make_options("$7.1-2", None);
/// assert_eq!(options.style, Some(Style::Currency));
/// assert_eq!(options.currency_display, Some(CurrencyDisplay::Symbol));
/// assert_eq!(options.minimum_integer_digits, Some(7));
/// assert_eq!(options.maximum_fraction_digits, Some(2));
/// ```
pub fn make_options(
    pattern: &str,
    overrides: Option<&NumberFormatOptions>,
) -> NumberFormatOptions {
    let decoded = match parse_pattern(pattern) {
        Ok(parsed) => parsed.to_options(),
        Err(err) => {
            debug!(pattern, %err, "pattern ignored");
            NumberFormatOptions::default()
        }
    };

    match overrides {
        Some(overrides) => decoded.merged(overrides),
        None => decoded,
    }
}
