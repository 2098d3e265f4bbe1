//! CSS Values & Units Level 3 — §6 Dimensions (Lengths)
//! Spec: <https://www.w3.org/TR/css-values-3/#lengths>

use crate::ParseError;
use crate::chapter_4_numbers::{reparse_numeric, write_number};
use core::fmt::{self, Write};
use core::str::FromStr;
use cssparser::{Parser, ParserInput, ToCss, Token};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Units a `<length>` (or `<length-percentage>`) may carry.
///
/// `Percent` is the only unit that can be combined with a container
/// percentage without deferring to `calc()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Percent,
    Pixels,
    Ems,
    RootEms,
    Ex,
    Ch,
    ViewportWidth,
    ViewportHeight,
    ViewportMin,
    ViewportMax,
    Points,
    Centimeters,
    Millimeters,
    Inches,
}

impl LengthUnit {
    /// Map a (case-insensitive) CSS unit suffix to a unit.
    pub fn from_css(unit: &str) -> Option<Self> {
        let unit_kind = match unit.to_ascii_lowercase().as_str() {
            "%" => Self::Percent,
            "px" => Self::Pixels,
            "em" => Self::Ems,
            "rem" => Self::RootEms,
            "ex" => Self::Ex,
            "ch" => Self::Ch,
            "vw" => Self::ViewportWidth,
            "vh" => Self::ViewportHeight,
            "vmin" => Self::ViewportMin,
            "vmax" => Self::ViewportMax,
            "pt" => Self::Points,
            "cm" => Self::Centimeters,
            "mm" => Self::Millimeters,
            "in" => Self::Inches,
            _ => return None,
        };
        Some(unit_kind)
    }

    /// Canonical serialized suffix.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Percent => "%",
            Self::Pixels => "px",
            Self::Ems => "em",
            Self::RootEms => "rem",
            Self::Ex => "ex",
            Self::Ch => "ch",
            Self::ViewportWidth => "vw",
            Self::ViewportHeight => "vh",
            Self::ViewportMin => "vmin",
            Self::ViewportMax => "vmax",
            Self::Points => "pt",
            Self::Centimeters => "cm",
            Self::Millimeters => "mm",
            Self::Inches => "in",
        }
    }
}

/// A CSS <length-percentage> value with an explicit unit tag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Length {
    pub const fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    pub const fn percent(value: f64) -> Self {
        Self::new(value, LengthUnit::Percent)
    }

    pub const fn px(value: f64) -> Self {
        Self::new(value, LengthUnit::Pixels)
    }

    pub const fn em(value: f64) -> Self {
        Self::new(value, LengthUnit::Ems)
    }

    pub const fn rem(value: f64) -> Self {
        Self::new(value, LengthUnit::RootEms)
    }

    #[inline]
    pub fn is_percentage(&self) -> bool {
        self.unit == LengthUnit::Percent
    }
}

impl ToCss for Length {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        write_number(self.value, dest)?;
        dest.write_str(self.unit.as_str())
    }
}

/// Parse a CSS <length-percentage> (§6.2). Unitless zero is a length.
///
/// # Errors
/// Returns `ParseError::UnsupportedUnit` for dimensions with unknown units and
/// `ParseError::UnexpectedToken` when the next token is not a length.
pub fn parse_length(input: &mut Parser) -> Result<Length, ParseError> {
    input.skip_whitespace();
    let start = input.position();
    let token = input
        .next()
        .map_err(|_| ParseError::UnexpectedToken)?
        .clone();
    let raw = input.slice_from(start);
    match token {
        Token::Dimension { value, unit, .. } => {
            let unit_kind = LengthUnit::from_css(unit.as_ref())
                .ok_or_else(|| ParseError::UnsupportedUnit(unit.as_ref().to_owned()))?;
            let precise = reparse_numeric(raw, unit.len(), f64::from(value));
            Ok(Length::new(precise, unit_kind))
        }
        Token::Percentage { unit_value, .. } => Ok(Length::percent(reparse_numeric(
            raw,
            1,
            f64::from(unit_value) * 100.0,
        ))),
        Token::Number { value: 0.0, .. } => Ok(Length::px(0.0)),
        Token::Ident(_)
        | Token::AtKeyword(_)
        | Token::Hash(_)
        | Token::IDHash(_)
        | Token::QuotedString(_)
        | Token::UnquotedUrl(_)
        | Token::Delim(_)
        | Token::Number { .. }
        | Token::WhiteSpace(_)
        | Token::Comment(_)
        | Token::Colon
        | Token::Semicolon
        | Token::Comma
        | Token::IncludeMatch
        | Token::DashMatch
        | Token::PrefixMatch
        | Token::SuffixMatch
        | Token::SubstringMatch
        | Token::CDO
        | Token::CDC
        | Token::Function(_)
        | Token::ParenthesisBlock
        | Token::SquareBracketBlock
        | Token::CurlyBracketBlock
        | Token::BadUrl(_)
        | Token::BadString(_)
        | Token::CloseParenthesis
        | Token::CloseSquareBracket
        | Token::CloseCurlyBracket => Err(ParseError::UnexpectedToken),
    }
}

impl FromStr for Length {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        let length = parse_length(&mut parser)?;
        if parser.is_exhausted() {
            Ok(length)
        } else {
            Err(ParseError::TrailingInput)
        }
    }
}

impl Serialize for Length {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_css_string())
    }
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}
