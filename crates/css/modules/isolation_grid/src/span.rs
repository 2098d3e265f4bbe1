//! Cell span composition.
//!
//! Every cell floats left and pulls the following box back over itself with
//! `margin-right: -100%`, so all cells of a row share the same origin. Its
//! horizontal placement then depends only on its own `margin-left`, never on
//! the rounded widths of its siblings.

use crate::formula::{position, width};
use crate::settings::GridConfig;
use css_syntax::Declaration;
use css_values_units::Length;

/// The two declarations that take a cell out of sibling-relative flow.
pub fn isolation_declarations() -> [Declaration; 2] {
    [
        Declaration::new("float", "left"),
        Declaration::from_value("margin-right", &Length::percent(-100.0)),
    ]
}

/// Declarations placing a cell of `width_columns` at `offset_columns`.
///
/// Order: `float`, `margin-right`, `width` (one or two), `margin-left` (one
/// or two).
pub fn span(width_columns: f64, offset_columns: f64, config: &GridConfig) -> Vec<Declaration> {
    let mut declarations = Vec::from(isolation_declarations());
    declarations.extend(width(width_columns, config).declarations("width"));
    declarations.extend(position(offset_columns, config).declarations("margin-left"));
    declarations
}
