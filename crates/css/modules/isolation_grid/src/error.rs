//! Errors raised while configuring the grid.

use crate::settings::GridSetting;
use core::fmt;
use css_values_units::ParseError;

/// Failure of a settings lookup, a settings update, or a distribution request.
#[derive(Debug)]
pub enum GridError {
    /// The key is not one of `columns`, `gutter`, `gutter-fallback`.
    UnknownSetting(String),
    /// `columns` must be a positive integer.
    InvalidColumns,
    /// A row must hold at least one cell.
    InvalidCellsPerRow,
    /// The value text did not parse as the setting's type.
    InvalidValue {
        setting: GridSetting,
        source: ParseError,
    },
    /// A JSON override map was malformed or named an unknown key.
    Overrides(serde_json::Error),
}

impl fmt::Display for GridError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSetting(name) => write!(formatter, "grid setting `{name}` does not exist"),
            Self::InvalidColumns => formatter.write_str("grid columns must be a positive integer"),
            Self::InvalidCellsPerRow => formatter.write_str("cells per row must be at least 1"),
            Self::InvalidValue { setting, source } => {
                write!(formatter, "invalid value for grid setting `{setting}`: {source}")
            }
            Self::Overrides(source) => write!(formatter, "invalid grid overrides: {source}"),
        }
    }
}

impl core::error::Error for GridError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InvalidValue { source, .. } => Some(source),
            Self::Overrides(source) => Some(source),
            Self::UnknownSetting(_) | Self::InvalidColumns | Self::InvalidCellsPerRow => None,
        }
    }
}

impl From<serde_json::Error> for GridError {
    fn from(error: serde_json::Error) -> Self {
        Self::Overrides(error)
    }
}
