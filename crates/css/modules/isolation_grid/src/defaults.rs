//! Default configuration sources and per-key resolution.
//!
//! Formula code never reads global state: it takes a `GridConfig`. The
//! defaults a call site starts from come from a `DefaultsProvider`, which is
//! either a fixed `GridConfig` or a mutable `SettingsStore`.

use crate::error::GridError;
use crate::settings::{GridConfig, GridOverrides, GridSetting, SettingValue};
use core::fmt;
use cssparser::ToCss;
use log::{debug, warn};
use once_cell::sync::Lazy;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Source of the default grid configuration.
pub trait DefaultsProvider: fmt::Debug {
    /// Current defaults; a copy, so later updates do not affect the caller.
    fn defaults(&self) -> GridConfig;
}

impl DefaultsProvider for GridConfig {
    fn defaults(&self) -> GridConfig {
        *self
    }
}

/// A shared, updatable set of defaults.
///
/// Updates replace the value of an existing key and never add or remove keys.
#[derive(Debug, Default)]
pub struct SettingsStore {
    config: RwLock<GridConfig>,
}

impl SettingsStore {
    pub const fn new(config: GridConfig) -> Self {
        Self {
            config: RwLock::new(config),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, GridConfig> {
        self.config.read().unwrap_or_else(|poisoned| {
            warn!("SettingsStore: recovering from poisoned lock");
            PoisonError::into_inner(poisoned)
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, GridConfig> {
        self.config.write().unwrap_or_else(|poisoned| {
            warn!("SettingsStore: recovering from poisoned lock");
            PoisonError::into_inner(poisoned)
        })
    }

    pub fn snapshot(&self) -> GridConfig {
        *self.read()
    }

    /// Replace the default for `key` with the parsed `value`.
    ///
    /// The key is validated before the value is parsed; on any error the
    /// store is left unchanged.
    ///
    /// # Errors
    /// Returns `GridError::UnknownSetting` for unrecognised keys, and a value
    /// error when `value` does not parse as the key's type.
    pub fn set_default(&self, key: &str, value: &str) -> Result<(), GridError> {
        let setting = GridSetting::from_name(key).inspect_err(|_| {
            warn!("SettingsStore: rejected update of unknown setting `{key}`");
        })?;
        let parsed = setting.parse_value(value).inspect_err(|err| {
            warn!("SettingsStore: rejected value `{value}` for `{setting}`: {err}");
        })?;
        self.set(parsed);
        Ok(())
    }

    /// Typed variant of [`SettingsStore::set_default`]; cannot fail.
    pub fn set(&self, value: SettingValue) {
        let mut config = self.write();
        debug!(
            "SettingsStore: {} = {} (was {})",
            value.setting(),
            value.to_css_string(),
            config.get(value.setting()).to_css_string()
        );
        config.set(value);
    }

    /// Restore the built-in defaults.
    pub fn reset(&self) {
        *self.write() = GridConfig::default();
    }
}

impl DefaultsProvider for SettingsStore {
    fn defaults(&self) -> GridConfig {
        self.snapshot()
    }
}

static GLOBAL_SETTINGS: Lazy<SettingsStore> = Lazy::new(SettingsStore::default);

/// Process-wide defaults, initialised to the built-in configuration.
pub fn global() -> &'static SettingsStore {
    &GLOBAL_SETTINGS
}

/// Look up one setting: the override if present, otherwise the default.
///
/// # Errors
/// Returns `GridError::UnknownSetting` when `key` names no setting.
pub fn resolve(
    key: &str,
    overrides: &GridOverrides,
    provider: &dyn DefaultsProvider,
) -> Result<SettingValue, GridError> {
    let setting = GridSetting::from_name(key)?;
    Ok(overrides
        .get(setting)
        .unwrap_or_else(|| provider.defaults().get(setting)))
}

/// Merge `overrides` over the provider's defaults, key by key.
pub fn resolve_config(overrides: &GridOverrides, provider: &dyn DefaultsProvider) -> GridConfig {
    overrides.apply(&provider.defaults())
}
