//! Terminal color types.
//!
//! Colors are stored as strings in either hex (`"#ff00ff"`, `"#f0f"`) or
//! ANSI-256 (`"196"`) form and converted to SGR escape parameters when a
//! [`crate::Style`] renders. An unparseable color renders as no color at
//! all, matching the terminal's defaults.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};

/// Process-wide color toggle.
///
/// Off means styles render text verbatim, with no escape sequences. Hosts
/// flip this once at startup (e.g. when `NO_COLOR` is set or output is not
/// a terminal).
static COLOR_ENABLED: AtomicBool = AtomicBool::new(true);

/// Enable or disable color output process-wide.
pub fn set_color_enabled(enabled: bool) {
    COLOR_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Returns whether color output is currently enabled.
pub fn color_enabled() -> bool {
    COLOR_ENABLED.load(Ordering::Relaxed)
}

/// A terminal color in hex or ANSI-256 string form.
///
/// # Example
///
/// ```rust
/// use tint::Color;
///
/// let violet = Color::new("#9d4edd");
/// assert_eq!(violet.as_rgb(), Some((0x9d, 0x4e, 0xdd)));
///
/// let red = Color::new("196");
/// assert_eq!(red.as_ansi(), Some(196));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub String);

impl Color {
    /// Creates a color from a hex or ANSI-256 string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Parses the color as RGB, if it is in `#rgb` or `#rrggbb` form.
    pub fn as_rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.0.strip_prefix('#')?;
        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
                Some((r * 17, g * 17, b * 17))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some((r, g, b))
            }
            _ => None,
        }
    }

    /// Parses the color as an ANSI-256 index, if it is a bare number.
    pub fn as_ansi(&self) -> Option<u8> {
        if self.0.starts_with('#') {
            return None;
        }
        self.0.parse().ok()
    }

    /// Returns whether the color parses as either form.
    pub fn is_valid(&self) -> bool {
        self.as_rgb().is_some() || self.as_ansi().is_some()
    }

    /// SGR parameters selecting this color as the foreground.
    ///
    /// Empty when the color does not parse or color is disabled.
    pub(crate) fn fg_params(&self) -> Option<String> {
        if !color_enabled() {
            return None;
        }
        if let Some((r, g, b)) = self.as_rgb() {
            return Some(format!("38;2;{r};{g};{b}"));
        }
        self.as_ansi().map(|n| format!("38;5;{n}"))
    }

    /// SGR parameters selecting this color as the background.
    pub(crate) fn bg_params(&self) -> Option<String> {
        if !color_enabled() {
            return None;
        }
        if let Some((r, g, b)) = self.as_rgb() {
            return Some(format!("48;2;{r};{g};{b}"));
        }
        self.as_ansi().map(|n| format!("48;5;{n}"))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Self(s)
    }
}
