//! Isolation float grid.
//!
//! Computes the declarations of a float grid in which every cell is placed
//! independently: `float: left` plus `margin-right: -100%` puts all cells of
//! a row at the same origin, and `margin-left` moves each to its column.
//! Widths and offsets are expressed in column units against a configurable
//! column count and gutter.
//!
//! ```text
//! GridConfig (columns, gutter, gutter-fallback)
//!   ↓  DefaultsProvider + GridOverrides
//! width / position   → FormattedLength (literal, or fallback + calc())
//!   ↓
//! span / distribute  → Declaration, StyleRule (css_syntax)
//! ```

// Settings keys, resolved config, per-call overrides
mod settings;
pub use settings::{
    DEFAULT_COLUMNS, DEFAULT_GUTTER, DEFAULT_GUTTER_FALLBACK, GridConfig, GridOverrides,
    GridSetting, SettingValue,
};

// Default providers and resolution
mod defaults;
pub use defaults::{DefaultsProvider, SettingsStore, global, resolve, resolve_config};

mod error;
pub use error::GridError;

// Width and position formulas
mod formula;
pub use formula::{FormattedLength, position, width};

// Cell span composition
mod span;
pub use span::{isolation_declarations, span};

// Equal-width rows
mod distribution;
pub use distribution::{ChildRule, NthChild, RowDistribution, distribute_equal_width};

mod grid;
pub use grid::Grid;
