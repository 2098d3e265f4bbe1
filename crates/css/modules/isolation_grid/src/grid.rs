//! Call-site entry point binding a defaults provider to optional overrides.

use crate::defaults::{DefaultsProvider, global, resolve, resolve_config};
use crate::distribution::{RowDistribution, distribute_equal_width};
use crate::error::GridError;
use crate::formula::{FormattedLength, position, width};
use crate::settings::{GridConfig, GridOverrides, SettingValue};
use crate::span::span;
use css_syntax::{Declaration, StyleRule, Stylesheet};

/// A grid as seen from one call site.
///
/// Every computation reads the provider once, merges the overrides over it
/// and runs the pure formulas on the result.
#[derive(Debug, Clone, Copy)]
pub struct Grid<'provider> {
    provider: &'provider dyn DefaultsProvider,
    overrides: GridOverrides,
}

impl Grid<'static> {
    /// A grid reading the process-wide defaults.
    pub fn from_global() -> Self {
        Self::new(global())
    }
}

impl<'provider> Grid<'provider> {
    pub fn new(provider: &'provider dyn DefaultsProvider) -> Self {
        Self {
            provider,
            overrides: GridOverrides::default(),
        }
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: GridOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Effective configuration for this call site.
    pub fn config(&self) -> GridConfig {
        resolve_config(&self.overrides, self.provider)
    }

    /// Effective value of one setting by name.
    ///
    /// # Errors
    /// Returns `GridError::UnknownSetting` when `key` names no setting.
    pub fn setting(&self, key: &str) -> Result<SettingValue, GridError> {
        resolve(key, &self.overrides, self.provider)
    }

    pub fn width(&self, span_columns: f64) -> FormattedLength {
        width(span_columns, &self.config())
    }

    pub fn position(&self, offset_columns: f64) -> FormattedLength {
        position(offset_columns, &self.config())
    }

    pub fn span(&self, width_columns: f64, offset_columns: f64) -> Vec<Declaration> {
        span(width_columns, offset_columns, &self.config())
    }

    /// A complete rule placing `selector` at the given span.
    pub fn span_rule(&self, selector: &str, width_columns: f64, offset_columns: f64) -> StyleRule {
        StyleRule::with_declarations(selector, self.span(width_columns, offset_columns))
    }

    /// # Errors
    /// Returns `GridError::InvalidCellsPerRow` when `cells_per_row` is zero.
    pub fn distribute(&self, cells_per_row: u32) -> Result<RowDistribution, GridError> {
        distribute_equal_width(cells_per_row, &self.config())
    }

    /// Equal-width distribution of the children of `selector`, as a stylesheet.
    ///
    /// # Errors
    /// Returns `GridError::InvalidCellsPerRow` when `cells_per_row` is zero.
    pub fn distribute_stylesheet(
        &self,
        selector: &str,
        cells_per_row: u32,
    ) -> Result<Stylesheet, GridError> {
        Ok(self.distribute(cells_per_row)?.to_rules(selector).into_iter().collect())
    }
}
