//! Brand colors handed to the root element as CSS custom properties.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const DEFAULT_BRAND: &[(u16, &str)] = &[
    (50, "#f3f7ff"),
    (100, "#e6efff"),
    (200, "#cddfff"),
    (300, "#a3c2ff"),
    (400, "#6f98ff"),
    (500, "#3b74ff"),
    (600, "#225dff"),
    (700, "#1a49cc"),
    (800, "#153aa6"),
    (900, "#112f87"),
];

/// Shade number (50..=900) to hex color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrandPalette(BTreeMap<u16, String>);

impl Default for BrandPalette {
    fn default() -> Self {
        Self(
            DEFAULT_BRAND
                .iter()
                .map(|(shade, hex)| (*shade, hex.to_string()))
                .collect(),
        )
    }
}

impl BrandPalette {
    pub fn get(&self, shade: u16) -> Option<&str> {
        self.0.get(&shade).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u16, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

fn is_hex_color(s: &str) -> bool {
    s.strip_prefix('#')
        .is_some_and(|h| matches!(h.len(), 3 | 6) && h.chars().all(|c| c.is_ascii_hexdigit()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Custom property prefix: `--{prefix}-{shade}`.
    pub prefix: String,
    pub brand: BrandPalette,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            prefix: "aerie".to_string(),
            brand: BrandPalette::default(),
        }
    }
}

impl Theme {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (shade, value) in self.brand.iter() {
            if !is_hex_color(value) {
                return Err(ConfigError::InvalidColor {
                    shade,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Inline `style` for the root element, e.g. `--aerie-50: #f3f7ff; ...`.
    pub fn root_style(&self) -> String {
        self.brand
            .iter()
            .map(|(shade, hex)| format!("--{}-{}: {};", self.prefix, shade, hex))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
