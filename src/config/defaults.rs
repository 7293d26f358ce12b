// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration and storage.

/// Settings file name inside the config directory.
pub const CONFIG_FILE: &str = "settings.toml";

/// Preference file name inside the data directory.
pub const PREFERENCES_FILE: &str = "preferences.toml";

/// Fixed slot name under which the active locale is persisted.
pub const LOCALE_KEY: &str = "locale";

/// `tracing` filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "portfolio_i18n=info";
