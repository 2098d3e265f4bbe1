//! Width and position formulas of the isolation grid.
//!
//! A cell spanning `n` of `c` columns occupies the fraction `f = n / c` of
//! the row, where every column carries its share of one gutter:
//!
//! ```text
//! width    = (100% + gutter) * f - gutter
//! position = (100% + gutter) * f
//! ```
//!
//! With a percentage gutter both are plain percentages. With any other unit
//! the arithmetic mixes units and only the consumer can resolve it, so two
//! values are produced: a percentage computed with the gutter fallback, then
//! a `calc()` expression with the real gutter that overrides it where
//! supported.

use crate::settings::GridConfig;
use css_syntax::Declaration;
use css_values_units::{CalcNode, Length, LengthUnit};
use cssparser::ToCss;

/// One computed length, possibly with a percentage fallback.
#[derive(Clone, Debug, PartialEq)]
pub enum FormattedLength {
    /// Resolved at compute time.
    Single(Length),
    /// Emitted as two declarations: `fallback` first, `expression` second.
    WithFallback {
        fallback: Length,
        expression: CalcNode,
    },
}

impl FormattedLength {
    /// The literal percentage (the only value, or the fallback).
    pub const fn literal(&self) -> Length {
        match self {
            Self::Single(length) | Self::WithFallback { fallback: length, .. } => *length,
        }
    }

    pub const fn expression(&self) -> Option<&CalcNode> {
        match self {
            Self::Single(_) => None,
            Self::WithFallback { expression, .. } => Some(expression),
        }
    }

    /// Serialized values in emission order.
    pub fn values(&self) -> Vec<String> {
        match self {
            Self::Single(length) => vec![length.to_css_string()],
            Self::WithFallback {
                fallback,
                expression,
            } => vec![fallback.to_css_string(), expression.to_css_string()],
        }
    }

    /// One declaration of `property` per value, in emission order.
    pub fn declarations(&self, property: &str) -> Vec<Declaration> {
        self.values()
            .into_iter()
            .map(|value| Declaration::new(property, value))
            .collect()
    }
}

/// `(100% + gutter) * fraction [- gutter]` as an expression tree.
fn isolation_expression(fraction: f64, gutter: Length, trailing_gutter: bool) -> CalcNode {
    let track = CalcNode::product(
        CalcNode::sum(Length::percent(100.0).into(), gutter.into()),
        CalcNode::Number(fraction),
    );
    if trailing_gutter {
        CalcNode::difference(track, gutter.into())
    } else {
        track
    }
}

/// The same formula over a percentage gutter, evaluated now.
fn isolation_percentage(fraction: f64, gutter_percent: f64, trailing_gutter: bool) -> Length {
    let track = (100.0 + gutter_percent) * fraction;
    Length::percent(if trailing_gutter {
        track - gutter_percent
    } else {
        track
    })
}

fn isolate(columns: f64, config: &GridConfig, trailing_gutter: bool) -> FormattedLength {
    let fraction = columns / config.column_count();
    match config.gutter.unit {
        LengthUnit::Percent => FormattedLength::Single(isolation_percentage(
            fraction,
            config.gutter.value,
            trailing_gutter,
        )),
        _ => FormattedLength::WithFallback {
            fallback: isolation_percentage(
                fraction,
                config.gutter_fallback.value(),
                trailing_gutter,
            ),
            expression: isolation_expression(fraction, config.gutter, trailing_gutter),
        },
    }
}

/// Width of a cell spanning `span_columns` columns.
///
/// Spans are not validated: fractional, negative, or wider-than-the-grid
/// spans produce well-defined values.
pub fn width(span_columns: f64, config: &GridConfig) -> FormattedLength {
    let result = isolate(span_columns, config, true);
    tracing::debug!(
        "width: span={}, columns={}, gutter={} -> {:?}",
        span_columns,
        config.columns,
        config.gutter.to_css_string(),
        result.values()
    );
    result
}

/// Left offset of a cell starting `offset_columns` columns into the row.
pub fn position(offset_columns: f64, config: &GridConfig) -> FormattedLength {
    let result = isolate(offset_columns, config, false);
    tracing::debug!(
        "position: offset={}, columns={}, gutter={} -> {:?}",
        offset_columns,
        config.columns,
        config.gutter.to_css_string(),
        result.values()
    );
    result
}
