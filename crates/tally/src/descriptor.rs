//! Widget property descriptor.
//!
//! A static, serializable description of the widget's configurable
//! surface, published for host design tooling. Purely descriptive; the
//! widget never reads it.

use serde::{Deserialize, Serialize};

use crate::counter::{DEFAULT_MAX, DEFAULT_MIN};
use crate::i18n::SUPPORTED_LOCALES;

/// One configurable property of the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySpec {
    /// Property name, as exposed on the widget.
    pub name: String,
    /// Property type, in descriptor vocabulary (`"integer"`).
    pub kind: String,
    /// Default value.
    pub default: i64,
    /// Human-readable description.
    pub description: String,
}

/// The widget's static descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    /// Widget tag name.
    pub tag: String,
    /// Key of the localized title string.
    pub title_key: String,
    /// Supported locale codes, beyond the implicit default.
    pub locales: Vec<String>,
    /// Externally settable, observable properties.
    pub properties: Vec<PropertySpec>,
}

impl Descriptor {
    /// The counter widget's descriptor.
    #[must_use]
    pub fn for_widget() -> Self {
        Self {
            tag: "tally-counter".to_string(),
            title_key: "title".to_string(),
            locales: SUPPORTED_LOCALES.iter().map(ToString::to_string).collect(),
            properties: vec![
                PropertySpec {
                    name: "count".to_string(),
                    kind: "integer".to_string(),
                    default: 0,
                    description: "Current displayed value".to_string(),
                },
                PropertySpec {
                    name: "min".to_string(),
                    kind: "integer".to_string(),
                    default: DEFAULT_MIN,
                    description: "Inclusive lower bound".to_string(),
                },
                PropertySpec {
                    name: "max".to_string(),
                    kind: "integer".to_string(),
                    default: DEFAULT_MAX,
                    description: "Inclusive upper bound".to_string(),
                },
            ],
        }
    }

    /// Serialize to pretty JSON for host tooling.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json` error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_lists_all_attributes() {
        let descriptor = Descriptor::for_widget();
        let names: Vec<&str> = descriptor
            .properties
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["count", "min", "max"]);
    }

    #[test]
    fn descriptor_defaults_match_widget_defaults() {
        let descriptor = Descriptor::for_widget();
        let min = descriptor.properties.iter().find(|p| p.name == "min").unwrap();
        let max = descriptor.properties.iter().find(|p| p.name == "max").unwrap();
        assert_eq!(min.default, DEFAULT_MIN);
        assert_eq!(max.default, DEFAULT_MAX);
    }

    #[test]
    fn descriptor_round_trips_through_json() {
        let descriptor = Descriptor::for_widget();
        let json = descriptor.to_json().unwrap();
        let back: Descriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, descriptor);
    }
}
