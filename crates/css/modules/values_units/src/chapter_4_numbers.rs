//! CSS Values & Units Level 3 — §4 Numbers
//! Spec: <https://www.w3.org/TR/css-values-3/#numeric-types>

use crate::ParseError;
use core::fmt::{self, Write};
use cssparser::{Parser, ToCss, Token};

/// Fractional digits kept when serializing a number.
const SERIALIZE_PRECISION: u32 = 5;

/// A CSS <number>
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Number(pub f64);

impl ToCss for Number {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        write_number(self.0, dest)
    }
}

/// Round to `precision` fractional digits, folding `-0` into `0`.
fn round_to(value: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision as i32);
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Write a number the way it appears in a stylesheet: at most five fractional
/// digits, no trailing zeros, no trailing dot.
///
/// # Errors
/// Propagates errors from the underlying writer.
pub fn write_number<W>(value: f64, dest: &mut W) -> fmt::Result
where
    W: Write,
{
    write_number_with_precision(value, SERIALIZE_PRECISION, dest)
}

/// [`write_number`] keeping up to `precision` fractional digits.
///
/// # Errors
/// Propagates errors from the underlying writer.
pub fn write_number_with_precision<W>(value: f64, precision: u32, dest: &mut W) -> fmt::Result
where
    W: Write,
{
    let text = format!("{:.*}", precision as usize, round_to(value, precision));
    let trimmed = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text.as_str()
    };
    dest.write_str(trimmed)
}

/// Re-read the digits of a numeric token at `f64` precision.
///
/// The tokenizer only keeps `f32`, which turns `2.5%` into `2.4999...`.
/// `suffix_len` is the byte length of the unit (or `%`) following the digits.
pub(crate) fn reparse_numeric(raw: &str, suffix_len: usize, tokenized: f64) -> f64 {
    raw.trim()
        .get(..raw.trim().len().saturating_sub(suffix_len))
        .and_then(|digits| digits.parse::<f64>().ok())
        .unwrap_or(tokenized)
}

/// Parse a CSS <number> (§4.2). Accepts integer or real numbers.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a `<number>`.
pub fn parse_number(input: &mut Parser) -> Result<Number, ParseError> {
    input.skip_whitespace();
    let start = input.position();
    let token = input
        .next()
        .map_err(|_| ParseError::UnexpectedToken)?
        .clone();
    if let Token::Number { value, .. } = token {
        Ok(Number(reparse_numeric(
            input.slice_from(start),
            0,
            f64::from(value),
        )))
    } else {
        Err(ParseError::UnexpectedToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serialized(value: f64) -> String {
        Number(value).to_css_string()
    }

    #[test]
    /// # Panics
    /// Panics if integral values keep a fractional part.
    fn integral_values_have_no_fraction() {
        assert_eq!(serialized(49.0), "49");
        assert_eq!(serialized(100.0), "100");
        assert_eq!(serialized(0.0), "0");
    }

    #[test]
    /// # Panics
    /// Panics if fractional values are not trimmed and rounded.
    fn fractional_values_are_trimmed() {
        assert_eq!(serialized(25.5), "25.5");
        assert_eq!(serialized(0.25), "0.25");
        assert_eq!(serialized(1.0 / 3.0), "0.33333");
        assert_eq!(serialized(2.0 / 3.0), "0.66667");
    }

    #[test]
    /// # Panics
    /// Panics if decimal input loses precision through the tokenizer.
    fn parse_keeps_decimal_precision() {
        let mut input = cssparser::ParserInput::new(" 0.1 ");
        let mut parser = Parser::new(&mut input);
        assert_eq!(parse_number(&mut parser), Ok(Number(0.1)));
    }

    #[test]
    /// # Panics
    /// Panics if negative zero survives rounding.
    fn negative_zero_prints_as_zero() {
        assert_eq!(serialized(-0.0), "0");
        assert_eq!(serialized(-0.000_001), "0");
        assert_eq!(serialized(-2.0), "-2");
    }

    #[test]
    /// # Panics
    /// Panics if an explicit precision is not honoured.
    fn explicit_precision() {
        let mut text = String::new();
        assert!(write_number_with_precision(1.0 / 3.0, 10, &mut text).is_ok());
        assert_eq!(text, "0.3333333333");
        text.clear();
        assert!(write_number_with_precision(0.25, 10, &mut text).is_ok());
        assert_eq!(text, "0.25");
    }
}
