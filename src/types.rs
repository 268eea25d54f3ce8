//! Type definitions for number pattern decoding
//!
//! This module defines the tagged form a pattern is parsed into and the
//! option set handed to the number formatting backend.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Style symbol at the start of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleToken {
    /// Plain decimal (d)
    Decimal,
    /// Percentage (%)
    Percent,
    /// Unit (u)
    Unit,
    /// Currency with its symbol ($)
    CurrencySymbol,
    /// Currency with its narrow symbol (w)
    CurrencyNarrowSymbol,
    /// Currency with its localized name (n)
    CurrencyName,
    /// Currency with its ISO code (o)
    CurrencyCode,
    /// Currency in accounting form (a)
    Accounting,
    /// Scientific notation (E)
    Scientific,
    /// Engineering notation (e)
    Engineering,
    /// Compact notation (c)
    Compact,
    /// Compact notation, long form (l)
    CompactLong,
    /// Compact notation, short form (s)
    CompactShort,
}

impl StyleToken {
    /// The character this style is written with in a pattern
    pub fn symbol(self) -> char {
        match self {
            StyleToken::Decimal => 'd',
            StyleToken::Percent => '%',
            StyleToken::Unit => 'u',
            StyleToken::CurrencySymbol => '$',
            StyleToken::CurrencyNarrowSymbol => 'w',
            StyleToken::CurrencyName => 'n',
            StyleToken::CurrencyCode => 'o',
            StyleToken::Accounting => 'a',
            StyleToken::Scientific => 'E',
            StyleToken::Engineering => 'e',
            StyleToken::Compact => 'c',
            StyleToken::CompactLong => 'l',
            StyleToken::CompactShort => 's',
        }
    }
}

/// Sign display symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignToken {
    /// +
    ExceptZero,
    /// !
    Never,
    /// @
    Always,
}

impl SignToken {
    pub fn symbol(self) -> char {
        match self {
            SignToken::ExceptZero => '+',
            SignToken::Never => '!',
            SignToken::Always => '@',
        }
    }
}

/// A `min-max` digit range; either side may be missing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DigitRange {
    pub min: Option<u8>,
    pub max: Option<u8>,
}

/// One grammar group found in a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternToken {
    /// Style or notation symbol
    Style(StyleToken),
    /// Grouping disabled (#)
    NoGrouping,
    /// Sign display symbol
    Sign(SignToken),
    /// Minimum integer digits
    IntegerDigits(u8),
    /// Fraction digit range, introduced by `.`
    FractionDigits(DigitRange),
    /// Significant digit range, introduced by `;`
    SignificantDigits(DigitRange),
}

/// A parsed pattern: its groups in the order they appear
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pattern {
    pub tokens: Vec<PatternToken>,
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            match token {
                PatternToken::Style(style) => write!(f, "{}", style.symbol())?,
                PatternToken::NoGrouping => f.write_str("#")?,
                PatternToken::Sign(sign) => write!(f, "{}", sign.symbol())?,
                PatternToken::IntegerDigits(n) => write!(f, "{n}")?,
                PatternToken::FractionDigits(range) => write_range(f, '.', range)?,
                PatternToken::SignificantDigits(range) => write_range(f, ';', range)?,
            }
        }
        Ok(())
    }
}

fn write_range(f: &mut fmt::Formatter<'_>, lead: char, range: &DigitRange) -> fmt::Result {
    write!(f, "{lead}")?;
    if let Some(min) = range.min {
        write!(f, "{min}")?;
    }
    if let Some(max) = range.max {
        write!(f, "-{max}")?;
    }
    Ok(())
}

macro_rules! option_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// The option value as the formatting backend spells it
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

option_enum! {
    /// Top-level formatting mode
    Style {
        Decimal => "decimal",
        Percent => "percent",
        Unit => "unit",
        Currency => "currency",
    }
}

option_enum! {
    /// Numeral display mode
    Notation {
        Standard => "standard",
        Scientific => "scientific",
        Engineering => "engineering",
        Compact => "compact",
    }
}

option_enum! {
    CompactDisplay {
        Long => "long",
        Short => "short",
    }
}

option_enum! {
    /// How a currency is shown
    CurrencyDisplay {
        Symbol => "symbol",
        NarrowSymbol => "narrowSymbol",
        Name => "name",
        Code => "code",
    }
}

option_enum! {
    CurrencySign {
        Standard => "standard",
        Accounting => "accounting",
    }
}

option_enum! {
    /// When to show the sign
    SignDisplay {
        Auto => "auto",
        Always => "always",
        ExceptZero => "exceptZero",
        Never => "never",
    }
}

/// Number formatting options
///
/// Every field is optional; a `None` field is left to the backend's default.
/// Serializes with the camelCase key names used by locale-aware number
/// formatters, skipping absent keys.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NumberFormatOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notation: Option<Notation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compact_display: Option<CompactDisplay>,
    /// ISO 4217 currency code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_display: Option<CurrencyDisplay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_sign: Option<CurrencySign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign_display: Option<SignDisplay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_grouping: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_integer_digits: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_fraction_digits: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_fraction_digits: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_significant_digits: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_significant_digits: Option<u8>,
}
