// SPDX-License-Identifier: MPL-2.0
//! Locale session: the one place that owns the active locale.
//!
//! An [`I18nProvider`] is created once at the root of whatever is being
//! rendered and lives as long as that tree. Consumers never see the provider
//! itself; they get an [`I18n`] handle borrowed from it, either directly via
//! [`I18nProvider::session`] or through a [`Context`] passed down at
//! composition time.
//!
//! # Lifecycle
//!
//! ```text
//! (no provider) --new--> DefaultActive --restore (valid stored value)--> LocaleActive(L)
//!                             |                                            ^
//!                             +-------------------set_locale(L)------------+
//! ```
//!
//! "Uninitialized" is the absence of a provider: a [`Context`] without one
//! answers [`Error::OutsideProvider`].
//!
//! Storage is best-effort throughout. A restore that cannot read, or reads a
//! value outside the supported set, leaves the session on the default
//! locale. A `set_locale` whose write fails still switches locale.

use crate::catalog::TranslationStore;
use crate::error::{Error, Result};
use crate::locale::Locale;
use crate::storage::{PreferenceStore, LOCALE_KEY};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing restored or selected yet; [`Locale::DEFAULT`] is active.
    DefaultActive,
    LocaleActive(Locale),
}

impl SessionState {
    pub fn locale(self) -> Locale {
        match self {
            SessionState::DefaultActive => Locale::DEFAULT,
            SessionState::LocaleActive(locale) => locale,
        }
    }
}

#[derive(Debug)]
pub struct I18nProvider<S> {
    store: S,
    translations: Arc<TranslationStore>,
    state: SessionState,
    restore_attempted: bool,
}

impl<S: PreferenceStore> I18nProvider<S> {
    /// Creates a provider on the default locale. Storage is not read yet.
    pub fn new(store: S, translations: Arc<TranslationStore>) -> Self {
        Self {
            store,
            translations,
            state: SessionState::DefaultActive,
            restore_attempted: false,
        }
    }

    /// Creates a provider and immediately runs the one-time restore.
    pub fn start(store: S, translations: Arc<TranslationStore>) -> Self {
        let mut provider = Self::new(store, translations);
        provider.restore();
        provider
    }

    /// Applies the persisted locale, if there is a supported one.
    ///
    /// Runs at most once per provider; later calls return `false` without
    /// touching storage. Returns whether a stored locale was applied.
    pub fn restore(&mut self) -> bool {
        if self.restore_attempted {
            return false;
        }
        self.restore_attempted = true;

        let stored = match self.store.get(LOCALE_KEY) {
            Ok(Some(value)) => value,
            Ok(None) => return false,
            Err(err) => {
                tracing::debug!(error = %err, "skipping locale restore");
                return false;
            }
        };

        match Locale::from_code(&stored) {
            Some(locale) => {
                tracing::debug!(locale = %locale, "restored persisted locale");
                self.state = SessionState::LocaleActive(locale);
                true
            }
            None => {
                tracing::debug!(value = %stored, "ignoring unsupported persisted locale");
                false
            }
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn locale(&self) -> Locale {
        self.state.locale()
    }

    pub fn translations(&self) -> &Arc<TranslationStore> {
        &self.translations
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumer handle, valid while the provider is borrowed.
    pub fn session(&mut self) -> I18n<'_, S> {
        I18n { provider: self }
    }

    /// Context carrying this provider, for passing down to components.
    pub fn context(&mut self) -> Context<'_, S> {
        Context::with_provider(self)
    }

    /// Tears the provider down and hands back its storage.
    pub fn into_store(self) -> S {
        self.store
    }

    fn set_locale(&mut self, locale: Locale) {
        if self.locale() != locale {
            tracing::info!(from = %self.locale(), to = %locale, "locale changed");
        }
        self.state = SessionState::LocaleActive(locale);

        match self.store.set(LOCALE_KEY, locale.code()) {
            Ok(()) => {}
            Err(Error::StorageUnavailable) => {
                tracing::debug!(locale = %locale, "storage unavailable, locale not persisted");
            }
            Err(err) => {
                tracing::warn!(locale = %locale, error = %err, "failed to persist locale");
            }
        }
    }

    fn translate(&self, key: &str) -> String {
        match self.translations.resolve(self.locale(), key) {
            Some(value) => value.to_string(),
            None => {
                tracing::trace!(locale = %self.locale(), key, "missing translation");
                key.to_string()
            }
        }
    }
}

/// Consumer-facing accessor. Only obtainable from a live provider.
pub struct I18n<'a, S> {
    provider: &'a mut I18nProvider<S>,
}

impl<S: PreferenceStore> I18n<'_, S> {
    pub fn locale(&self) -> Locale {
        self.provider.locale()
    }

    /// Switches the active locale and persists it.
    ///
    /// The write happens on every call, even when `locale` is already active.
    pub fn set_locale(&mut self, locale: Locale) {
        self.provider.set_locale(locale);
    }

    /// Translates a dotted key in the active locale, falling back to `key`.
    pub fn translate(&self, key: &str) -> String {
        self.provider.translate(key)
    }

    /// Shorthand for [`I18n::translate`].
    pub fn t(&self, key: &str) -> String {
        self.translate(key)
    }
}

/// Composition-time context handed to components.
///
/// A component that needs translations calls [`Context::i18n`]; if it was
/// composed outside a provider, that is reported as
/// [`Error::OutsideProvider`].
pub struct Context<'a, S> {
    provider: Option<&'a mut I18nProvider<S>>,
}

impl<'a, S: PreferenceStore> Context<'a, S> {
    pub fn with_provider(provider: &'a mut I18nProvider<S>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// A context with no provider attached.
    pub fn detached() -> Self {
        Self { provider: None }
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    pub fn i18n(&mut self) -> Result<I18n<'_, S>> {
        self.provider
            .as_deref_mut()
            .map(|provider| I18n { provider })
            .ok_or(Error::OutsideProvider)
    }
}
