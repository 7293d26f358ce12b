// SPDX-License-Identifier: MPL-2.0
//! `portfolio_i18n` holds the translation store and locale session behind a
//! three-language portfolio site.
//!
//! Translations are trees of strings addressed by dotted keys
//! (`"home.title"`). A single [`session::I18nProvider`] owns the active
//! locale, restores it from a durable preference slot at startup and
//! persists it whenever it changes. Missing keys render as the key itself.
//!
//! ```
//! use portfolio_i18n::{I18nProvider, Locale, MemoryStore, TranslationStore};
//! use std::sync::Arc;
//!
//! let translations = Arc::new(TranslationStore::embedded().unwrap());
//! let mut provider = I18nProvider::start(MemoryStore::new(), translations);
//! let mut i18n = provider.session();
//!
//! assert_eq!(i18n.locale(), Locale::PtBr);
//! i18n.set_locale(Locale::EnUs);
//! assert_eq!(i18n.t("header.nav.home"), "Home");
//! assert_eq!(i18n.t("nonexistent.key"), "nonexistent.key");
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod locale;
pub mod paths;
pub mod session;
pub mod site;
pub mod storage;

pub use catalog::TranslationStore;
pub use error::{Error, Result};
pub use locale::Locale;
pub use session::{Context, I18n, I18nProvider, SessionState};
pub use storage::{FileStore, MemoryStore, PreferenceStore, Unavailable};
