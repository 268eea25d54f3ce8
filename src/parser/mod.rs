//! Pattern parsing module
//!
//! This module turns pattern strings into the tagged [`Pattern`](crate::types::Pattern) form.
//! The main entry point is the `parse_pattern` function.

mod combinators;
mod format;
mod tokens;

pub use format::{is_pattern_correct, parse_pattern};
