//! CSS Values and Units Module Level 3 — Typed numeric values and `calc()` expressions.
//! Spec: <https://www.w3.org/TR/css-values-3/>

#![forbid(unsafe_code)]

use core::fmt;

// Per-chapter modules mirroring the Values & Units table of contents.
pub mod chapter_10_calc;
pub mod chapter_4_numbers;
pub mod chapter_5_percentages;
pub mod chapter_6_dimensions;

// Re-exports for ergonomic access from other crates.
pub use chapter_10_calc::CalcNode;
pub use chapter_4_numbers::{Number, parse_number, write_number};
pub use chapter_5_percentages::{Percentage, parse_percentage};
pub use chapter_6_dimensions::{Length, LengthUnit, parse_length};

/// Parse error for Values & Units parsing utilities in this crate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The next token did not match the expected grammar.
    UnexpectedToken,
    /// A dimension carried a unit this crate does not model.
    UnsupportedUnit(String),
    /// A length was supplied where only a `<percentage>` is allowed.
    ExpectedPercentage,
    /// The value parsed but more tokens followed it.
    TrailingInput,
}

impl fmt::Display for ParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken => formatter.write_str("unexpected token"),
            Self::UnsupportedUnit(unit) => write!(formatter, "unsupported unit `{unit}`"),
            Self::ExpectedPercentage => formatter.write_str("expected a <percentage>"),
            Self::TrailingInput => formatter.write_str("unexpected input after value"),
        }
    }
}

impl core::error::Error for ParseError {}
