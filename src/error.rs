// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// Translation data could not be parsed or has a non-string leaf.
    #[error("Catalog Error: {0}")]
    Catalog(String),

    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// No durable storage in this context (headless run, storage disabled).
    #[error("Storage unavailable")]
    StorageUnavailable,

    #[error("Storage Error: {0}")]
    Storage(String),

    /// The i18n accessor was requested from a context with no provider attached.
    /// This is a composition mistake in the caller, never a data problem.
    #[error("i18n accessor used outside of an I18nProvider")]
    OutsideProvider,
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Catalog(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
