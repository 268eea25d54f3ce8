//! Compact number patterns for locale-aware number formatting
//!
//! A pattern such as `$#+7.1-2` is decoded into [`NumberFormatOptions`]
//! (currency style, no grouping, sign except zero, seven integer digits,
//! one to two fraction digits). [`format_number`] hands those options to a
//! [`NumberFormatBackend`](formatter::NumberFormatBackend), guessing the
//! currency from the locale's country when the pattern asks for one.

pub mod error;
pub mod formatter;
pub mod locale;
pub mod options;
pub mod parser;
pub mod types;

// Main API
pub use error::{PatternError, TableError};
pub use formatter::{DEFAULT_CURRENCY, NumberFormatBackend, NumberFormatter, format_number};
pub use locale::{CurrencyTable, LocaleResolver, currency_from_locale, extract_country_code};
pub use options::make_options;
pub use parser::{is_pattern_correct, parse_pattern};
pub use types::NumberFormatOptions;

#[cfg(test)]
mod tests;
