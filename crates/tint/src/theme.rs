//! Semantic theme tokens.
//!
//! A [`Theme`] names the colors a widget is allowed to use; widgets map
//! their visual states onto tokens and never hardcode colors. Themes come
//! from a built-in preset or a JSON file supplied by the host.
//!
//! ```rust
//! use tint::{Theme, ThemePreset};
//!
//! let theme = Theme::preset(ThemePreset::Dark);
//! let digits = theme.primary_style().bold().render("0");
//! ```

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;
use crate::style::Style;

/// Error loading a theme from a file.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The file could not be read.
    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),
    /// The file was not valid theme JSON.
    #[error("failed to parse theme file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Built-in theme preset identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemePreset {
    /// Dark backgrounds, bright foregrounds.
    #[default]
    Dark,
    /// Light backgrounds, dark foregrounds.
    Light,
}

impl ThemePreset {
    /// Display name of the preset.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// All available presets.
    pub const fn all() -> [Self; 2] {
        [Self::Dark, Self::Light]
    }
}

/// Error parsing a preset name.
#[derive(Debug, Error)]
#[error("unknown theme preset: {0:?}")]
pub struct ParsePresetError(String);

impl FromStr for ThemePreset {
    type Err = ParsePresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(ParsePresetError(other.to_string())),
        }
    }
}

/// Semantic color tokens consumed by widgets.
///
/// Token meanings, in widget terms:
///
/// - `primary`: the main value display (the count digits)
/// - `accent`: wrapper background
/// - `pinned`: value display when pinned at a bound
/// - `focus`: the currently focused control
/// - `muted`: disabled controls, secondary text
/// - `text`: default body text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name, e.g. `"dark"` or the file stem it was loaded from.
    pub name: String,
    /// Main value display color.
    pub primary: Color,
    /// Wrapper background color.
    pub accent: Color,
    /// Value display color when pinned at min or max.
    pub pinned: Color,
    /// Focused control color.
    pub focus: Color,
    /// Disabled controls and secondary text.
    pub muted: Color,
    /// Default body text.
    pub text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// The built-in dark theme.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            primary: Color::new("#7571F9"),
            accent: Color::new("#1B1B2F"),
            pinned: Color::new("#9D4EDD"),
            focus: Color::new("#FFD23F"),
            muted: Color::new("#606060"),
            text: Color::new("#E6E6E6"),
        }
    }

    /// The built-in light theme.
    #[must_use]
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            primary: Color::new("#3D3BB0"),
            accent: Color::new("#F2F2F7"),
            pinned: Color::new("#7B2CBF"),
            focus: Color::new("#B8860B"),
            muted: Color::new("#9A9A9A"),
            text: Color::new("#1C1C1E"),
        }
    }

    /// Resolve a preset to its theme.
    #[must_use]
    pub fn preset(preset: ThemePreset) -> Self {
        match preset {
            ThemePreset::Dark => Self::dark(),
            ThemePreset::Light => Self::light(),
        }
    }

    /// Load a theme from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError`] when the file cannot be read or parsed.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Style for the main value display.
    #[must_use]
    pub fn primary_style(&self) -> Style {
        Style::new().foreground(self.primary.clone())
    }

    /// Style for the value display when pinned at a bound.
    #[must_use]
    pub fn pinned_style(&self) -> Style {
        Style::new().foreground(self.pinned.clone())
    }

    /// Style for the focused control.
    #[must_use]
    pub fn focus_style(&self) -> Style {
        Style::new().foreground(self.focus.clone())
    }

    /// Style for disabled controls and secondary text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::new().foreground(self.muted.clone())
    }

    /// Style for default body text.
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::new().foreground(self.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn presets_resolve() {
        assert_eq!(Theme::preset(ThemePreset::Dark).name, "dark");
        assert_eq!(Theme::preset(ThemePreset::Light).name, "light");
    }

    #[test]
    fn preset_parses_case_insensitively() {
        assert_eq!("DARK".parse::<ThemePreset>().unwrap(), ThemePreset::Dark);
        assert!("solarized".parse::<ThemePreset>().is_err());
    }

    #[test]
    fn theme_round_trips_through_json() {
        let theme = Theme::light();
        let json = serde_json::to_string(&theme).unwrap();
        let back: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, theme);
    }

    #[test]
    fn from_json_file_loads_custom_theme() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let theme = Theme {
            name: "custom".to_string(),
            ..Theme::dark()
        };
        file.write_all(serde_json::to_string(&theme).unwrap().as_bytes())
            .unwrap();

        let loaded = Theme::from_json_file(file.path()).unwrap();
        assert_eq!(loaded.name, "custom");
    }

    #[test]
    fn from_json_file_rejects_garbage() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();
        assert!(matches!(
            Theme::from_json_file(file.path()),
            Err(ThemeError::Parse(_))
        ));
    }
}
