use std::collections::HashSet;

use roamlog_types::ThemeTypography;
use serde::{Deserialize, Serialize};

/// Font reference as written in a theme
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FontToken {
    System,
    SystemSerif,
    SystemMono,
    SystemRounded,
    /// Bundled font looked up by name
    Named(String),
}

impl FontToken {
    pub fn parse(token: &str) -> Self {
        match token.trim() {
            "system" | "" => FontToken::System,
            "system-serif" => FontToken::SystemSerif,
            "system-mono" => FontToken::SystemMono,
            "system-rounded" => FontToken::SystemRounded,
            name => FontToken::Named(name.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FontToken::System => "system",
            FontToken::SystemSerif => "system-serif",
            FontToken::SystemMono => "system-mono",
            FontToken::SystemRounded => "system-rounded",
            FontToken::Named(name) => name,
        }
    }
}

/// Concrete family handed to the renderer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum FontFamily {
    System,
    Serif,
    Monospaced,
    Rounded,
    Custom(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Light,
    Regular,
    Medium,
    Semibold,
    Bold,
}

impl FontWeight {
    /// CSS-style numeric weight
    pub fn value(self) -> u16 {
        match self {
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Semibold => 600,
            FontWeight::Bold => 700,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontDescriptor {
    pub family: FontFamily,
    pub size: f64,
    pub weight: FontWeight,
}

/// Fonts the host can actually render
pub trait FontCatalog {
    fn contains(&self, name: &str) -> bool;
}

impl FontCatalog for HashSet<String> {
    fn contains(&self, name: &str) -> bool {
        HashSet::contains(self, name)
    }
}

impl FontCatalog for Vec<String> {
    fn contains(&self, name: &str) -> bool {
        self.iter().any(|font| font == name)
    }
}

impl<const N: usize> FontCatalog for [&str; N] {
    fn contains(&self, name: &str) -> bool {
        self.iter().any(|font| *font == name)
    }
}

/// Catalog with no bundled fonts; every named font falls back
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemFontsOnly;

impl FontCatalog for SystemFontsOnly {
    fn contains(&self, _name: &str) -> bool {
        false
    }
}

/// Resolve a token to a concrete font
///
/// Named fonts resolve to [`FontFamily::Custom`] when the catalog has them
/// and to [`FontFamily::System`] otherwise. Size and weight pass through.
pub fn resolve_font(
    token: &FontToken,
    size: f64,
    weight: FontWeight,
    catalog: &dyn FontCatalog,
) -> FontDescriptor {
    let family = match token {
        FontToken::System => FontFamily::System,
        FontToken::SystemSerif => FontFamily::Serif,
        FontToken::SystemMono => FontFamily::Monospaced,
        FontToken::SystemRounded => FontFamily::Rounded,
        FontToken::Named(name) if catalog.contains(name) => FontFamily::Custom(name.clone()),
        FontToken::Named(name) => {
            tracing::debug!(font = %name, "font not bundled, falling back to system");
            FontFamily::System
        }
    };

    FontDescriptor {
        family,
        size,
        weight,
    }
}

/// Fonts for each text role of a theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedTypography {
    pub title: FontDescriptor,
    pub body: FontDescriptor,
    pub caption: FontDescriptor,
}

pub fn resolve_typography(
    typography: &ThemeTypography,
    catalog: &dyn FontCatalog,
) -> ResolvedTypography {
    let font = |token: &str, size: f64, weight: FontWeight| {
        resolve_font(&FontToken::parse(token), size, weight, catalog)
    };

    ResolvedTypography {
        title: font(&typography.title_font, typography.title_size, FontWeight::Bold),
        body: font(&typography.body_font, typography.body_size, FontWeight::Regular),
        caption: font(
            &typography.caption_font,
            typography.caption_size,
            FontWeight::Medium,
        ),
    }
}
