//! Number formatting entry point
//!
//! Decodes a pattern, fills in a currency when a currency style lacks one,
//! and hands the result to a [`NumberFormatBackend`] that does the
//! locale-aware rendering.

use tracing::debug;

use crate::locale::LocaleResolver;
use crate::options::make_options;
use crate::types::{NumberFormatOptions, Style};

/// Currency used when none is given and none can be derived from the locale
pub const DEFAULT_CURRENCY: &str = "USD";

/// Locale-aware number renderer
pub trait NumberFormatBackend {
    type Error;

    fn format(
        &self,
        value: f64,
        locale: Option<&str>,
        options: &NumberFormatOptions,
    ) -> Result<String, Self::Error>;
}

impl<B: NumberFormatBackend + ?Sized> NumberFormatBackend for &B {
    type Error = B::Error;

    fn format(
        &self,
        value: f64,
        locale: Option<&str>,
        options: &NumberFormatOptions,
    ) -> Result<String, Self::Error> {
        (**self).format(value, locale, options)
    }
}

/// Formats numbers from patterns with a backend and a currency resolver
pub struct NumberFormatter<'a, B> {
    backend: B,
    resolver: LocaleResolver<'a>,
}

impl<B: NumberFormatBackend> NumberFormatter<'static, B> {
    /// Formatter resolving currencies with the built-in table
    pub fn new(backend: B) -> Self {
        Self::with_resolver(backend, LocaleResolver::default())
    }
}

impl<'a, B: NumberFormatBackend> NumberFormatter<'a, B> {
    pub fn with_resolver(backend: B, resolver: LocaleResolver<'a>) -> Self {
        Self { backend, resolver }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Options that [`format`](Self::format) would hand to the backend
    ///
    /// Without a pattern (or with an empty one) the overrides are used as
    /// they are. Otherwise the pattern is decoded, the overrides merged on
    /// top, and a currency style without a currency gets one from the
    /// locale, falling back to [`DEFAULT_CURRENCY`].
    pub fn resolve_options(
        &self,
        locale: Option<&str>,
        pattern: Option<&str>,
        overrides: Option<&NumberFormatOptions>,
    ) -> NumberFormatOptions {
        let Some(pattern) = pattern.filter(|p| !p.is_empty()) else {
            return overrides.cloned().unwrap_or_default();
        };

        let mut options = make_options(pattern, overrides);

        let needs_currency = options.style == Some(Style::Currency)
            && options.currency.as_deref().is_none_or(str::is_empty);
        if needs_currency {
            let currency = locale
                .filter(|l| !l.is_empty())
                .and_then(|l| self.resolver.currency_for_locale(l))
                .unwrap_or_else(|| {
                    debug!(?locale, currency = DEFAULT_CURRENCY, "no currency for locale");
                    DEFAULT_CURRENCY
                });
            options.currency = Some(currency.to_string());
        }

        options
    }

    /// Format `value` for `locale` using a pattern and optional overrides
    ///
    /// Malformed patterns never fail here; any error comes from the backend
    /// and is returned unchanged.
    pub fn format(
        &self,
        value: f64,
        locale: Option<&str>,
        pattern: Option<&str>,
        overrides: Option<&NumberFormatOptions>,
    ) -> Result<String, B::Error> {
        let options = self.resolve_options(locale, pattern, overrides);
        self.backend.format(value, locale, &options)
    }
}

/// Format a number with the built-in currency table
///
/// # Examples
/// ```
/// use intl_number_pattern::format_number;
/// use intl_number_pattern::formatter::NumberFormatBackend;
/// use intl_number_pattern::types::NumberFormatOptions;
///
/// struct CurrencyEcho;
///
/// impl NumberFormatBackend for CurrencyEcho {
///     type Error = String;
///
///     fn format(
///         &self,
///         value: f64,
///         _locale: Option<&str>,
///         options: &NumberFormatOptions,
///     ) -> Result<String, String> {
///         Ok(format!("{value} {}", options.currency.as_deref().unwrap_or("-")))
///     }
/// }
///
/// let backend = CurrencyEcho;
/// assert_eq!(format_number(&backend, 1.5, Some("pt-BR"), Some("$"), None).unwrap(), "1.5 BRL");
/// assert_eq!(format_number(&backend, 1.5, None, Some("$"), None).unwrap(), "1.5 USD");
/// ```
pub fn format_number<B: NumberFormatBackend + ?Sized>(
    backend: &B,
    value: f64,
    locale: Option<&str>,
    pattern: Option<&str>,
    overrides: Option<&NumberFormatOptions>,
) -> Result<String, B::Error> {
    NumberFormatter::new(backend).format(value, locale, pattern, overrides)
}
