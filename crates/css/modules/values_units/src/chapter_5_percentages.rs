//! CSS Values & Units Level 3 — §5 Percentages
//! Spec: <https://www.w3.org/TR/css-values-3/#percentages>

use crate::ParseError;
use crate::chapter_4_numbers::{reparse_numeric, write_number};
use crate::chapter_6_dimensions::{Length, LengthUnit, parse_length};
use core::fmt::{self, Write};
use core::str::FromStr;
use cssparser::{Parser, ParserInput, ToCss, Token};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A CSS <percentage>, stored as written (`2%` is `Percentage(2.0)`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Percentage(pub f64);

impl Percentage {
    /// The percentage as a number in `[0..100]` for in-range values.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl From<Percentage> for Length {
    fn from(percentage: Percentage) -> Self {
        Self::new(percentage.0, LengthUnit::Percent)
    }
}

impl TryFrom<Length> for Percentage {
    type Error = ParseError;

    fn try_from(length: Length) -> Result<Self, Self::Error> {
        if length.is_percentage() {
            Ok(Self(length.value))
        } else {
            Err(ParseError::ExpectedPercentage)
        }
    }
}

impl ToCss for Percentage {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        write_number(self.0, dest)?;
        dest.write_char('%')
    }
}

/// Parse a CSS <percentage> (§5.1).
///
/// # Errors
/// Returns `ParseError::ExpectedPercentage` for other lengths and
/// `ParseError::UnexpectedToken` for anything that is not a length at all.
pub fn parse_percentage(input: &mut Parser) -> Result<Percentage, ParseError> {
    input.skip_whitespace();
    let state = input.state();
    if let Ok(Token::Percentage { unit_value, .. }) = input.next().cloned() {
        // Tokenizer stores 50% as 0.5.
        let tokenized = f64::from(unit_value) * 100.0;
        let raw = input.slice_from(state.position());
        return Ok(Percentage(reparse_numeric(raw, 1, tokenized)));
    }
    input.reset(&state);
    parse_length(input).and_then(Percentage::try_from)
}

impl FromStr for Percentage {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        let percentage = parse_percentage(&mut parser)?;
        if parser.is_exhausted() {
            Ok(percentage)
        } else {
            Err(ParseError::TrailingInput)
        }
    }
}

impl Serialize for Percentage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_css_string())
    }
}

impl<'de> Deserialize<'de> for Percentage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}
