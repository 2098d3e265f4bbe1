//! Grid settings: the three recognised keys, the resolved configuration and
//! the flat per-call override map.

use crate::error::GridError;
use core::fmt::{self, Write};
use core::num::NonZeroU32;
use core::str::FromStr;
use css_values_units::{Length, Percentage, parse_number};
use cssparser::{Parser, ParserInput, ToCss};
use serde::Deserialize;

/// Columns in the default grid.
pub const DEFAULT_COLUMNS: NonZeroU32 = match NonZeroU32::new(12) {
    Some(columns) => columns,
    None => NonZeroU32::MIN,
};
/// Default spacing between cells: one root font size.
pub const DEFAULT_GUTTER: Length = Length::rem(1.0);
/// Percentage stand-in for the gutter when `calc()` is unavailable.
pub const DEFAULT_GUTTER_FALLBACK: Percentage = Percentage(2.0);

/// A recognised configuration key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GridSetting {
    Columns,
    Gutter,
    GutterFallback,
}

impl GridSetting {
    pub const ALL: [Self; 3] = [Self::Columns, Self::Gutter, Self::GutterFallback];

    /// Canonical key name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Columns => "columns",
            Self::Gutter => "gutter",
            Self::GutterFallback => "gutter-fallback",
        }
    }

    /// Look up a key by name. `gutterFallback` is accepted as an alias.
    ///
    /// # Errors
    /// Returns `GridError::UnknownSetting` for any other name.
    pub fn from_name(name: &str) -> Result<Self, GridError> {
        match name.trim() {
            "columns" => Ok(Self::Columns),
            "gutter" => Ok(Self::Gutter),
            "gutter-fallback" | "gutterFallback" => Ok(Self::GutterFallback),
            other => Err(GridError::UnknownSetting(other.to_owned())),
        }
    }

    /// Parse CSS value text into a value of this setting's type.
    ///
    /// # Errors
    /// Returns `GridError::InvalidValue` when the text does not parse, and
    /// `GridError::InvalidColumns` when `columns` is not a positive integer.
    pub fn parse_value(self, text: &str) -> Result<SettingValue, GridError> {
        let invalid = |source| GridError::InvalidValue {
            setting: self,
            source,
        };
        match self {
            Self::Columns => parse_columns(text).map(SettingValue::Columns),
            Self::Gutter => text.parse().map(SettingValue::Gutter).map_err(invalid),
            Self::GutterFallback => text
                .parse()
                .map(SettingValue::GutterFallback)
                .map_err(invalid),
        }
    }
}

impl fmt::Display for GridSetting {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for GridSetting {
    type Err = GridError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::from_name(name)
    }
}

/// Parse a positive integer column count.
fn parse_columns(text: &str) -> Result<NonZeroU32, GridError> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let number = parse_number(&mut parser).map_err(|source| GridError::InvalidValue {
        setting: GridSetting::Columns,
        source,
    })?;
    if !parser.is_exhausted() {
        return Err(GridError::InvalidValue {
            setting: GridSetting::Columns,
            source: css_values_units::ParseError::TrailingInput,
        });
    }
    let count = number.0;
    if count.fract() != 0.0 || count < 1.0 || count > f64::from(u32::MAX) {
        return Err(GridError::InvalidColumns);
    }
    NonZeroU32::new(count as u32).ok_or(GridError::InvalidColumns)
}

/// A typed value for one setting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SettingValue {
    Columns(NonZeroU32),
    Gutter(Length),
    GutterFallback(Percentage),
}

impl SettingValue {
    pub const fn setting(&self) -> GridSetting {
        match self {
            Self::Columns(_) => GridSetting::Columns,
            Self::Gutter(_) => GridSetting::Gutter,
            Self::GutterFallback(_) => GridSetting::GutterFallback,
        }
    }
}

impl ToCss for SettingValue {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        match self {
            Self::Columns(columns) => write!(dest, "{columns}"),
            Self::Gutter(gutter) => gutter.to_css(dest),
            Self::GutterFallback(fallback) => fallback.to_css(dest),
        }
    }
}

/// Fully resolved grid configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    /// Total column count of the grid.
    pub columns: NonZeroU32,
    /// Spacing between cells; any length unit.
    pub gutter: Length,
    /// Percentage approximation of `gutter` for consumers without `calc()`.
    pub gutter_fallback: Percentage,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            gutter: DEFAULT_GUTTER,
            gutter_fallback: DEFAULT_GUTTER_FALLBACK,
        }
    }
}

impl GridConfig {
    /// # Errors
    /// Returns `GridError::InvalidColumns` when `columns` is zero.
    pub fn new(
        columns: u32,
        gutter: Length,
        gutter_fallback: Percentage,
    ) -> Result<Self, GridError> {
        Ok(Self {
            columns: NonZeroU32::new(columns).ok_or(GridError::InvalidColumns)?,
            gutter,
            gutter_fallback,
        })
    }

    /// Column count as a float divisor.
    #[inline]
    pub fn column_count(&self) -> f64 {
        f64::from(self.columns.get())
    }

    pub const fn get(&self, setting: GridSetting) -> SettingValue {
        match setting {
            GridSetting::Columns => SettingValue::Columns(self.columns),
            GridSetting::Gutter => SettingValue::Gutter(self.gutter),
            GridSetting::GutterFallback => SettingValue::GutterFallback(self.gutter_fallback),
        }
    }

    /// Replace one setting. Keys are fixed; nothing is ever added or removed.
    pub fn set(&mut self, value: SettingValue) {
        match value {
            SettingValue::Columns(columns) => self.columns = columns,
            SettingValue::Gutter(gutter) => self.gutter = gutter,
            SettingValue::GutterFallback(fallback) => self.gutter_fallback = fallback,
        }
    }
}

/// A partial, flat override map for a single call site.
///
/// Keys left as `None` fall back to the defaults. Unknown keys are rejected
/// when deserializing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct GridOverrides {
    pub columns: Option<NonZeroU32>,
    pub gutter: Option<Length>,
    #[serde(alias = "gutterFallback")]
    pub gutter_fallback: Option<Percentage>,
}

impl GridOverrides {
    /// Parse an override map such as `{"columns": 16, "gutter": "20px"}`.
    ///
    /// # Errors
    /// Returns `GridError::Overrides` for malformed JSON, unknown keys, zero
    /// columns, or values that are not valid CSS for their key.
    pub fn from_json(json: &str) -> Result<Self, GridError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builder-style override of one setting.
    #[must_use]
    pub fn with(mut self, value: SettingValue) -> Self {
        self.set(value);
        self
    }

    pub fn set(&mut self, value: SettingValue) {
        match value {
            SettingValue::Columns(columns) => self.columns = Some(columns),
            SettingValue::Gutter(gutter) => self.gutter = Some(gutter),
            SettingValue::GutterFallback(fallback) => self.gutter_fallback = Some(fallback),
        }
    }

    /// Set a key from CSS value text, e.g. `insert("gutter", "1.5em")`.
    ///
    /// # Errors
    /// Returns `GridError::UnknownSetting` or a value error; the map is left
    /// untouched on failure.
    pub fn insert(&mut self, key: &str, value: &str) -> Result<(), GridError> {
        let parsed = GridSetting::from_name(key)?.parse_value(value)?;
        self.set(parsed);
        Ok(())
    }

    pub fn get(&self, setting: GridSetting) -> Option<SettingValue> {
        match setting {
            GridSetting::Columns => self.columns.map(SettingValue::Columns),
            GridSetting::Gutter => self.gutter.map(SettingValue::Gutter),
            GridSetting::GutterFallback => self.gutter_fallback.map(SettingValue::GutterFallback),
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.columns.is_none() && self.gutter.is_none() && self.gutter_fallback.is_none()
    }

    /// Merge over `base` key by key.
    pub fn apply(&self, base: &GridConfig) -> GridConfig {
        GridConfig {
            columns: self.columns.unwrap_or(base.columns),
            gutter: self.gutter.unwrap_or(base.gutter),
            gutter_fallback: self.gutter_fallback.unwrap_or(base.gutter_fallback),
        }
    }
}
