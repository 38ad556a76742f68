//! Declarative text styling.
//!
//! [`Style`] is a builder that accumulates colors and text attributes and
//! applies them with [`Style::render`]. Styles are cheap to clone and each
//! builder method returns a new value, so shared bases work naturally:
//!
//! ```rust
//! use tint::{Color, Style};
//!
//! let base = Style::new().bold();
//! let active = base.clone().foreground(Color::new("#7571F9"));
//! let dimmed = base.faint();
//! # let _ = (active, dimmed);
//! ```

use crate::color::Color;

/// A terminal text style.
///
/// Attributes and colors are applied per line so multi-line content does
/// not leak styling across line breaks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    foreground: Option<Color>,
    background: Option<Color>,
    bold: bool,
    faint: bool,
    italic: bool,
    underline: bool,
    padding_left: u16,
    padding_right: u16,
}

impl Style {
    /// Creates a new empty style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the foreground color.
    #[must_use]
    pub fn foreground(mut self, color: impl Into<Color>) -> Self {
        self.foreground = Some(color.into());
        self
    }

    /// Sets the background color.
    #[must_use]
    pub fn background(mut self, color: impl Into<Color>) -> Self {
        self.background = Some(color.into());
        self
    }

    /// Renders text bold.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Renders text faint (dimmed). Used for disabled controls.
    #[must_use]
    pub fn faint(mut self) -> Self {
        self.faint = true;
        self
    }

    /// Renders text italic.
    #[must_use]
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Renders text underlined.
    #[must_use]
    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Pads content with spaces on the left.
    #[must_use]
    pub fn padding_left(mut self, n: u16) -> Self {
        self.padding_left = n;
        self
    }

    /// Pads content with spaces on the right.
    #[must_use]
    pub fn padding_right(mut self, n: u16) -> Self {
        self.padding_right = n;
        self
    }

    /// Pads content with spaces on both sides.
    #[must_use]
    pub fn padding_horizontal(self, n: u16) -> Self {
        self.padding_left(n).padding_right(n)
    }

    fn sgr_params(&self) -> Vec<String> {
        let mut params = Vec::new();
        if self.bold {
            params.push("1".to_string());
        }
        if self.faint {
            params.push("2".to_string());
        }
        if self.italic {
            params.push("3".to_string());
        }
        if self.underline {
            params.push("4".to_string());
        }
        if let Some(fg) = self.foreground.as_ref().and_then(Color::fg_params) {
            params.push(fg);
        }
        if let Some(bg) = self.background.as_ref().and_then(Color::bg_params) {
            params.push(bg);
        }
        params
    }

    /// Applies the style to `text`.
    ///
    /// Returns the text unchanged (apart from padding) when the style has
    /// no effective attributes, e.g. with color disabled.
    #[must_use]
    pub fn render(&self, text: &str) -> String {
        let pad_l = " ".repeat(self.padding_left as usize);
        let pad_r = " ".repeat(self.padding_right as usize);

        let params = self.sgr_params();
        let mut out = String::with_capacity(text.len() + 16);
        let mut first = true;
        for line in text.split('\n') {
            if !first {
                out.push('\n');
            }
            first = false;
            if params.is_empty() {
                out.push_str(&pad_l);
                out.push_str(line);
                out.push_str(&pad_r);
            } else {
                out.push_str("\x1b[");
                out.push_str(&params.join(";"));
                out.push('m');
                out.push_str(&pad_l);
                out.push_str(line);
                out.push_str(&pad_r);
                out.push_str("\x1b[0m");
            }
        }
        out
    }
}
