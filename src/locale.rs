//! Locale support for currency resolution
//!
//! This module extracts country codes from locale tags and maps them to
//! currency codes through a country to currency table.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::error;

use crate::error::TableError;

type Result<T> = std::result::Result<T, TableError>;

/// Country code to currency code table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencyTable {
    currencies: HashMap<String, String>,
}

// Global table built from the embedded data
static BUILTIN_TABLE: OnceLock<CurrencyTable> = OnceLock::new();

impl CurrencyTable {
    /// The table embedded in the crate, loaded on first use
    pub fn builtin() -> &'static CurrencyTable {
        BUILTIN_TABLE.get_or_init(|| {
            Self::from_toml_str(include_str!("locale/currencies.toml")).unwrap_or_else(|e| {
                error!(error = %e, "failed to load embedded currency table");
                Self::default()
            })
        })
    }

    /// Parse a table from TOML
    ///
    /// The document holds one `[currencies]` table of `COUNTRY = "CUR"`
    /// entries, e.g. `BR = "BRL"`. Country codes must be two ASCII letters,
    /// currency codes three; both are stored uppercase.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

        let entries = parsed_toml
            .get("currencies")
            .and_then(|v| v.as_table())
            .ok_or(TableError::MissingTable("currencies"))?;

        let mut currencies = HashMap::with_capacity(entries.len());
        for (country, value) in entries {
            if country.len() != 2 || !is_alpha(country) {
                return Err(TableError::InvalidCountry(country.clone()));
            }

            let currency = value
                .as_str()
                .filter(|code| code.len() == 3 && is_alpha(code))
                .ok_or_else(|| TableError::InvalidCurrency {
                    country: country.clone(),
                    value: value.to_string(),
                })?;

            currencies.insert(country.to_ascii_uppercase(), currency.to_ascii_uppercase());
        }

        Ok(Self { currencies })
    }

    /// Currency code for an uppercase country code
    pub fn get(&self, country: &str) -> Option<&str> {
        self.currencies.get(country).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }
}

impl<C: AsRef<str>, V: AsRef<str>> FromIterator<(C, V)> for CurrencyTable {
    fn from_iter<T: IntoIterator<Item = (C, V)>>(iter: T) -> Self {
        let currencies = iter
            .into_iter()
            .map(|(country, currency)| {
                (
                    country.as_ref().to_ascii_uppercase(),
                    currency.as_ref().to_ascii_uppercase(),
                )
            })
            .collect();
        Self { currencies }
    }
}

/// Resolves currencies from locale tags against a borrowed table
#[derive(Debug, Clone, Copy)]
pub struct LocaleResolver<'a> {
    table: &'a CurrencyTable,
}

impl<'a> LocaleResolver<'a> {
    pub fn new(table: &'a CurrencyTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a CurrencyTable {
        self.table
    }

    /// Currency for a country code, compared uppercase
    pub fn currency_for_country(&self, country: &str) -> Option<&'a str> {
        self.table.get(&country.to_ascii_uppercase())
    }

    /// Currency for the country subtag of a locale tag
    pub fn currency_for_locale(&self, locale: &str) -> Option<&'a str> {
        extract_country_code(locale).and_then(|country| self.table.get(&country))
    }
}

impl Default for LocaleResolver<'static> {
    fn default() -> Self {
        Self::new(CurrencyTable::builtin())
    }
}

/// Extract the country code from a locale tag
///
/// `_` and `-` both separate subtags. The third subtag wins over the second,
/// so a script subtag is skipped.
///
/// # Examples
/// ```
/// use intl_number_pattern::locale::extract_country_code;
///
/// assert_eq!(extract_country_code("en-us").as_deref(), Some("US"));
/// assert_eq!(extract_country_code("zh-Hans-CN").as_deref(), Some("CN"));
/// assert_eq!(extract_country_code("en"), None);
/// ```
pub fn extract_country_code(locale: &str) -> Option<String> {
    let mut subtags = split_subtags(locale).skip(1);
    let second = subtags.next().filter(|s| !s.is_empty());
    let third = subtags.next().filter(|s| !s.is_empty());

    third.or(second).map(str::to_ascii_uppercase)
}

/// Currency code for a locale tag, from the built-in table
///
/// # Examples
/// ```
/// use intl_number_pattern::locale::currency_from_locale;
///
/// assert_eq!(currency_from_locale("pt-BR"), Some("BRL"));
/// assert_eq!(currency_from_locale("de"), None);
/// ```
pub fn currency_from_locale(locale: &str) -> Option<&'static str> {
    LocaleResolver::default().currency_for_locale(locale)
}

/// Normalize the case of a locale tag
///
/// The language is lowercased. With three subtags the script is title-cased
/// and the region uppercased; with two, the second is uppercased. Further
/// subtags are dropped.
///
/// # Examples
/// ```
/// use intl_number_pattern::locale::normalize_locale;
///
/// assert_eq!(normalize_locale("en_us").as_deref(), Some("en-US"));
/// assert_eq!(normalize_locale("ZH-hans-cn").as_deref(), Some("zh-Hans-CN"));
/// ```
pub fn normalize_locale(locale: &str) -> Option<String> {
    let mut subtags = split_subtags(locale).filter(|s| !s.is_empty());
    let language = subtags.next()?.to_ascii_lowercase();

    let normalized = match (subtags.next(), subtags.next()) {
        (Some(script), Some(region)) => format!(
            "{language}-{}-{}",
            titlecase(script),
            region.to_ascii_uppercase()
        ),
        (Some(region), None) => format!("{language}-{}", region.to_ascii_uppercase()),
        _ => language,
    };

    Some(normalized)
}

fn split_subtags(locale: &str) -> impl Iterator<Item = &str> {
    locale.split(['-', '_'])
}

fn is_alpha(value: &str) -> bool {
    value.chars().all(|ch| ch.is_ascii_alphabetic())
}

fn titlecase(value: &str) -> String {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut output = String::with_capacity(value.len());
    output.push(first.to_ascii_uppercase());
    for ch in chars {
        output.push(ch.to_ascii_lowercase());
    }
    output
}
