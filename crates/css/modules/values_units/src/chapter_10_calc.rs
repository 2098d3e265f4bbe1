//! CSS Values & Units Level 3 — §10 Mathematical Expressions: `calc()`
//! Spec: <https://www.w3.org/TR/css-values-3/#calc-notation>
//!
//! Expressions are kept as a tree so the arithmetic can be evaluated against
//! a resolution basis (for compile-time percentage math) and serialized
//! separately (for layout-time evaluation by the consumer).

use crate::chapter_4_numbers::write_number_with_precision;
use crate::chapter_6_dimensions::Length;
use core::fmt::{self, Write};
use cssparser::ToCss;

/// Fractional digits kept for scalar factors. Finer than literal lengths so a
/// column fraction never rounds below its own percentage fallback.
const FACTOR_PRECISION: u32 = 10;

/// A node of a `calc()` expression tree.
#[derive(Clone, Debug, PartialEq)]
pub enum CalcNode {
    Length(Length),
    Number(f64),
    Sum(Box<CalcNode>, Box<CalcNode>),
    Difference(Box<CalcNode>, Box<CalcNode>),
    Product(Box<CalcNode>, Box<CalcNode>),
}

impl CalcNode {
    pub fn sum(lhs: Self, rhs: Self) -> Self {
        Self::Sum(Box::new(lhs), Box::new(rhs))
    }

    pub fn difference(lhs: Self, rhs: Self) -> Self {
        Self::Difference(Box::new(lhs), Box::new(rhs))
    }

    pub fn product(lhs: Self, rhs: Self) -> Self {
        Self::Product(Box::new(lhs), Box::new(rhs))
    }

    /// Evaluate the tree to a scalar, resolving each length leaf through `resolve`.
    ///
    /// Returns `None` as soon as a leaf cannot be resolved in the caller's basis
    /// (e.g. an `rem` leaf when only percentages are known).
    pub fn evaluate(&self, resolve: &dyn Fn(&Length) -> Option<f64>) -> Option<f64> {
        match self {
            Self::Length(length) => resolve(length),
            Self::Number(number) => Some(*number),
            Self::Sum(lhs, rhs) => Some(lhs.evaluate(resolve)? + rhs.evaluate(resolve)?),
            Self::Difference(lhs, rhs) => Some(lhs.evaluate(resolve)? - rhs.evaluate(resolve)?),
            Self::Product(lhs, rhs) => Some(lhs.evaluate(resolve)? * rhs.evaluate(resolve)?),
        }
    }

    /// Evaluate assuming every length leaf is a percentage of the same basis.
    pub fn evaluate_percentage(&self) -> Option<f64> {
        self.evaluate(&|length: &Length| length.is_percentage().then_some(length.value))
    }

    const fn is_additive(&self) -> bool {
        matches!(self, Self::Sum(..) | Self::Difference(..))
    }

    fn write_grouped<W>(&self, dest: &mut W, grouped: bool) -> fmt::Result
    where
        W: Write,
    {
        if grouped {
            dest.write_char('(')?;
            self.write_expression(dest)?;
            dest.write_char(')')
        } else {
            self.write_expression(dest)
        }
    }

    fn write_expression<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        match self {
            Self::Length(length) => length.to_css(dest),
            Self::Number(number) => write_number_with_precision(*number, FACTOR_PRECISION, dest),
            Self::Sum(lhs, rhs) => {
                lhs.write_expression(dest)?;
                dest.write_str(" + ")?;
                rhs.write_expression(dest)
            }
            Self::Difference(lhs, rhs) => {
                lhs.write_expression(dest)?;
                dest.write_str(" - ")?;
                rhs.write_grouped(dest, rhs.is_additive())
            }
            Self::Product(lhs, rhs) => {
                lhs.write_grouped(dest, lhs.is_additive())?;
                dest.write_str(" * ")?;
                rhs.write_grouped(dest, rhs.is_additive())
            }
        }
    }
}

impl From<Length> for CalcNode {
    fn from(length: Length) -> Self {
        Self::Length(length)
    }
}

impl ToCss for CalcNode {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        dest.write_str("calc(")?;
        self.write_expression(dest)?;
        dest.write_char(')')
    }
}
