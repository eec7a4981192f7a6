//! Persisted presentation preferences.
//!
//! The language and dark-mode choices made in the header survive reloads
//! through their own storage slots; the signed-in marker is what the
//! account guard checks. The rendering layer also threads the active
//! language between views as a transient parameter, which is not this
//! module's business.

use souq_core::Language;

use crate::storage::{Storage, keys};

/// Persisted presentation preferences and the signed-in marker.
#[derive(Debug)]
pub struct Preferences<S> {
    storage: S,
}

impl<S: Storage> Preferences<S> {
    /// Create a preferences view over `storage`.
    #[must_use]
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// The persisted UI language; Arabic when unset or unrecognized.
    #[must_use]
    pub fn language(&self) -> Language {
        match self.storage.get(keys::LANGUAGE) {
            Ok(Some(code)) => code.parse::<Language>().unwrap_or_else(|_| {
                tracing::warn!(%code, "unrecognized language code, falling back to Arabic");
                Language::default()
            }),
            Ok(None) => Language::default(),
            Err(e) => {
                tracing::warn!("failed to read language preference: {e}");
                Language::default()
            }
        }
    }

    /// Persist `language` as the UI language.
    pub fn set_language(&mut self, language: Language) {
        self.write(keys::LANGUAGE, language.code());
    }

    /// Switch to the other language, persist it, and return it.
    pub fn toggle_language(&mut self) -> Language {
        let next = self.language().toggled();
        self.set_language(next);
        next
    }

    /// The persisted dark-mode choice; light when unset.
    #[must_use]
    pub fn dark_mode(&self) -> bool {
        match self.storage.get(keys::DARK_MODE) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                tracing::warn!("failed to read dark-mode preference: {e}");
                false
            }
        }
    }

    /// Persist the dark-mode choice.
    pub fn set_dark_mode(&mut self, dark: bool) {
        self.write(keys::DARK_MODE, if dark { "true" } else { "false" });
    }

    /// Flip dark mode, persist it, and return the new choice.
    pub fn toggle_dark_mode(&mut self) -> bool {
        let next = !self.dark_mode();
        self.set_dark_mode(next);
        next
    }

    /// The raw signed-in user snapshot, when one is stored.
    #[must_use]
    pub fn current_user(&self) -> Option<String> {
        match self.storage.get(keys::CURRENT_USER) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("failed to read signed-in marker: {e}");
                None
            }
        }
    }

    /// Whether a user snapshot is present. Presence is the whole check;
    /// the snapshot's contents are opaque here.
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.current_user().is_some()
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Err(e) = self.storage.set(key, value) {
            tracing::error!(key, "failed to persist preference: {e}");
        }
    }
}
