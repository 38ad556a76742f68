//! Localization provider.
//!
//! The widget registers itself here at construction time, declaring the
//! locale codes it supports and the base directory its translation
//! resources live in. The provider does the rest: it loads
//! `tally.<code>.json` files lazily, caches them per locale, and hands
//! back translated strings. The widget never performs lookup itself.
//!
//! Resolution order for a supported locale:
//!
//! 1. `<base_dir>/tally.<code>.json` on disk (hosts may override copy)
//! 2. the copy of the same file embedded at compile time
//! 3. built-in source-locale strings
//!
//! A missing or malformed file is not an error the user sees; it is
//! logged at debug level and the next source in the chain is used.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Locale codes with shipped translations.
pub const SUPPORTED_LOCALES: &[&str] = &["ar", "es", "hi", "zh"];

/// The implicit default/source locale.
pub const DEFAULT_LOCALE: &str = "en";

/// Translated strings for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Strings {
    /// The widget's title label.
    pub title: String,
}

impl Strings {
    /// Built-in source-locale strings, the end of every fallback chain.
    #[must_use]
    pub fn source_locale() -> Self {
        Self {
            title: "Counter".to_string(),
        }
    }
}

/// Error loading a locale resource file.
#[derive(Debug, Error)]
pub enum LocaleError {
    /// The file could not be read.
    #[error("failed to read locale file: {0}")]
    Io(#[from] std::io::Error),
    /// The file was not a valid string table.
    #[error("failed to parse locale file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Compile-time copies of the shipped locale resources.
fn embedded(locale: &str) -> Option<&'static str> {
    match locale {
        "ar" => Some(include_str!("../locales/tally.ar.json")),
        "es" => Some(include_str!("../locales/tally.es.json")),
        "hi" => Some(include_str!("../locales/tally.hi.json")),
        "zh" => Some(include_str!("../locales/tally.zh.json")),
        _ => None,
    }
}

/// Supplies locale-specific translated strings from per-locale JSON files.
///
/// # Example
///
/// ```rust
/// use tally::i18n::{Localizer, SUPPORTED_LOCALES};
///
/// let mut localizer = Localizer::new("locales", SUPPORTED_LOCALES);
/// let strings = localizer.strings("es");
/// assert_eq!(strings.title, "Contador");
/// ```
#[derive(Debug, Clone)]
pub struct Localizer {
    base_dir: PathBuf,
    locales: Vec<String>,
    cache: HashMap<String, Strings>,
}

impl Localizer {
    /// Registers a widget's localization needs: its supported locale codes
    /// and the base directory its resources are fetched from.
    pub fn new(base_dir: impl Into<PathBuf>, locales: &[&str]) -> Self {
        Self {
            base_dir: base_dir.into(),
            locales: locales.iter().map(ToString::to_string).collect(),
            cache: HashMap::new(),
        }
    }

    /// The registered locale codes (the default locale is implicit).
    #[must_use]
    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    /// The registered resource base directory.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Whether strings exist for `locale`, counting the implicit default.
    #[must_use]
    pub fn is_supported(&self, locale: &str) -> bool {
        locale == DEFAULT_LOCALE || self.locales.iter().any(|l| l == locale)
    }

    /// Returns the strings for `locale`, loading and caching on first use.
    ///
    /// Unsupported locales and load failures resolve to fallbacks and are
    /// never surfaced as errors.
    pub fn strings(&mut self, locale: &str) -> &Strings {
        if !self.cache.contains_key(locale) {
            let strings = self.resolve(locale);
            self.cache.insert(locale.to_string(), strings);
        }
        &self.cache[locale]
    }

    fn resolve(&self, locale: &str) -> Strings {
        if locale == DEFAULT_LOCALE || !self.is_supported(locale) {
            if !self.is_supported(locale) {
                debug!(locale, "unsupported locale, using source strings");
            }
            return Strings::source_locale();
        }

        match self.load_file(locale) {
            Ok(strings) => return strings,
            Err(err) => {
                debug!(locale, error = %err, "locale file unavailable, trying embedded copy");
            }
        }

        if let Some(raw) = embedded(locale) {
            match serde_json::from_str(raw) {
                Ok(strings) => return strings,
                Err(err) => {
                    debug!(locale, error = %err, "embedded locale copy unreadable");
                }
            }
        }

        Strings::source_locale()
    }

    fn load_file(&self, locale: &str) -> Result<Strings, LocaleError> {
        let path = self.base_dir.join(format!("tally.{locale}.json"));
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
