//! Error types

use thiserror::Error;

/// Why a pattern was rejected by [`parse_pattern`](crate::parser::parse_pattern)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The grammar matched a prefix only
    #[error("unexpected input '{remaining}' at offset {offset}")]
    UnexpectedInput { offset: usize, remaining: String },
    #[error("parse error: {0}")]
    Syntax(String),
}

/// Errors raised while loading a country to currency table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("error parsing currency table: {0}")]
    Parse(String),
    #[error("missing table [{0}]")]
    MissingTable(&'static str),
    #[error("invalid country code '{0}'")]
    InvalidCountry(String),
    #[error("invalid currency code for {country}: {value}")]
    InvalidCurrency { country: String, value: String },
}
