//! Runtime configuration.
//!
//! [`Config`] is the canonical representation of all runtime options,
//! independent of how they were specified. The CLI resolves into it, and
//! tests construct it directly.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tint::{Theme, ThemePreset};
use tracing::warn;

use crate::cli::Cli;
use crate::counter::{DEFAULT_MAX, DEFAULT_MIN};
use crate::i18n::DEFAULT_LOCALE;

/// Resolved runtime configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Theme preset to use.
    pub theme_preset: ThemePreset,
    /// Optional custom theme JSON file; overrides the preset.
    pub theme_file: Option<PathBuf>,
    /// Active locale code.
    pub locale: String,
    /// Base directory for locale resources, if overridden.
    pub locales_dir: Option<PathBuf>,
    /// Inclusive lower bound.
    pub min: i64,
    /// Inclusive upper bound.
    pub max: i64,
    /// Initial count.
    pub count: i64,
    /// Whether the celebration animation runs.
    pub animations: bool,
    /// Whether color output is enabled.
    pub color: bool,
    /// Seed for deterministic celebration bursts.
    pub seed: Option<u64>,
    /// Log verbosity (0=warn, 1=info, 2=debug, 3+=trace).
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_preset: ThemePreset::Dark,
            theme_file: None,
            locale: DEFAULT_LOCALE.to_string(),
            locales_dir: None,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            count: 0,
            animations: true,
            color: true,
            seed: None,
            verbosity: 0,
        }
    }
}

impl Config {
    /// Resolve CLI arguments into a config.
    ///
    /// An unknown theme name falls back to the default preset with a
    /// warning rather than refusing to start.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        let theme_preset = cli.theme.parse().unwrap_or_else(|_| {
            let known = ThemePreset::all().map(ThemePreset::name).join(", ");
            warn!(theme = %cli.theme, available = %known, "unknown theme preset, using dark");
            ThemePreset::Dark
        });

        // REDUCE_MOTION set to any value disables animations, same as the
        // explicit flag.
        let animations = !cli.no_animations && std::env::var("REDUCE_MOTION").is_err();

        Self {
            theme_preset,
            theme_file: cli.theme_file.clone(),
            locale: cli.locale.clone(),
            locales_dir: cli.locales_dir.clone(),
            min: cli.min,
            max: cli.max,
            count: cli.count,
            animations,
            color: !cli.no_color,
            seed: cli.seed,
            verbosity: cli.verbosity,
        }
    }

    /// Resolve the theme: the file when given and loadable, else the
    /// preset. A broken theme file is logged and ignored.
    #[must_use]
    pub fn resolve_theme(&self) -> Theme {
        if let Some(path) = &self.theme_file {
            match Theme::from_json_file(path) {
                Ok(theme) => return theme,
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "theme file unusable, using preset");
                }
            }
        }
        Theme::preset(self.theme_preset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn cli_resolves_to_config() {
        let cli = Cli::try_parse_from([
            "tally",
            "--theme",
            "light",
            "--locale",
            "zh",
            "--min",
            "0",
            "--max",
            "25",
            "--no-animations",
        ])
        .unwrap();
        let config = Config::from_cli(&cli);

        assert_eq!(config.theme_preset, ThemePreset::Light);
        assert_eq!(config.locale, "zh");
        assert_eq!(config.min, 0);
        assert_eq!(config.max, 25);
        assert!(!config.animations);
        assert!(config.color);
    }

    #[test]
    fn unknown_theme_falls_back_to_dark() {
        let cli = Cli::try_parse_from(["tally", "--theme", "nope"]).unwrap();
        let config = Config::from_cli(&cli);
        assert_eq!(config.theme_preset, ThemePreset::Dark);
    }

    #[test]
    fn theme_file_overrides_preset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let theme = Theme {
            name: "custom".to_string(),
            ..Theme::light()
        };
        file.write_all(serde_json::to_string(&theme).unwrap().as_bytes())
            .unwrap();

        let config = Config {
            theme_file: Some(file.path().to_path_buf()),
            ..Config::default()
        };
        assert_eq!(config.resolve_theme().name, "custom");
    }

    #[test]
    fn broken_theme_file_falls_back_to_preset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[").unwrap();

        let config = Config {
            theme_file: Some(file.path().to_path_buf()),
            theme_preset: ThemePreset::Light,
            ..Config::default()
        };
        assert_eq!(config.resolve_theme().name, "light");
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = Config {
            locale: "ar".to_string(),
            seed: Some(9),
            ..Config::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.locale, "ar");
        assert_eq!(back.seed, Some(9));
    }
}
