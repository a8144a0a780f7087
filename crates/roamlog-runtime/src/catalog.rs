//! Themes and fonts available to a host.
//!
//! The catalog starts with the built-in presets. Themes fetched from the
//! server are added on top and may replace a preset with the same slug.

use std::collections::{BTreeMap, HashSet};

use roamlog_engine::{resolve_typography, FontCatalog, ResolvedTypography};
use roamlog_types::{JournalTheme, DEFAULT_THEME_SLUG};

use crate::config::Config;
use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct ThemeCatalog {
    themes: BTreeMap<String, JournalTheme>,
}

impl Default for ThemeCatalog {
    fn default() -> Self {
        Self::with_presets()
    }
}

impl ThemeCatalog {
    /// Catalog containing only the built-in presets
    pub fn with_presets() -> Self {
        let themes = JournalTheme::presets()
            .into_iter()
            .map(|theme| (theme.slug.clone(), theme.clone()))
            .collect();
        Self { themes }
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    /// Register a theme after validating it
    ///
    /// Returns the theme it replaced, if any.
    pub fn insert(&mut self, theme: JournalTheme) -> Result<Option<JournalTheme>> {
        theme.validate()?;
        tracing::debug!(slug = %theme.slug, system = theme.is_system, "registering theme");
        Ok(self.themes.insert(theme.slug.clone(), theme))
    }

    /// Parse and register a theme as served by the API
    pub fn insert_json(&mut self, json: &str) -> Result<&JournalTheme> {
        let theme: JournalTheme = serde_json::from_str(json)?;
        let slug = theme.slug.clone();
        self.insert(theme)?;
        self.get(&slug)
    }

    pub fn get(&self, slug: &str) -> Result<&JournalTheme> {
        self.themes
            .get(slug)
            .ok_or_else(|| Error::ThemeNotFound(slug.to_string()))
    }

    /// Theme for `slug`, falling back to the default preset
    pub fn resolve(&self, slug: Option<&str>) -> &JournalTheme {
        if let Some(slug) = slug {
            if let Some(theme) = self.themes.get(slug) {
                return theme;
            }
            tracing::warn!(slug, "unknown theme, falling back to default");
        }

        self.themes
            .get(DEFAULT_THEME_SLUG)
            .unwrap_or(JournalTheme::default_preset())
    }

    /// Theme selected by the config
    pub fn active(&self, config: &Config) -> &JournalTheme {
        self.resolve(Some(&config.default_theme))
    }
}

/// Fonts shipped with the host app
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundledFonts {
    names: HashSet<String>,
}

impl BundledFonts {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.bundled_fonts.iter().cloned())
    }

    /// Typography of `theme` as this host can render it
    pub fn typography(&self, theme: &JournalTheme) -> ResolvedTypography {
        resolve_typography(&theme.typography, self)
    }
}

impl FontCatalog for BundledFonts {
    fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}
