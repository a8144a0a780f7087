use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::color::Rgba;
use crate::block::{Rating, RecommendationCategory};
use crate::error::{Error, Result};

/// Declarative style configuration for rendering a journal
///
/// Immutable once built. System presets live in [`super::presets`]; themes
/// fetched from the backend have the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalTheme {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_system: bool,
    pub typography: ThemeTypography,
    pub colors: ThemeColors,
    pub blocks: ThemeBlocks,
    pub style: ThemeStyle,
}

/// Font tokens and sizes
///
/// Font fields hold a token: `system`, `system-serif`, `system-mono`,
/// `system-rounded`, or the name of a bundled font.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTypography {
    pub title_font: String,
    pub body_font: String,
    pub caption_font: String,
    pub title_size: f64,
    pub body_size: f64,
    pub caption_size: f64,
}

/// Palette as hex strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub background: String,
    pub surface: String,
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub text: String,
    pub text_secondary: String,
    pub border: String,
}

impl ThemeColors {
    /// `(field, value)` pairs for validation and debugging
    pub fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("background", self.background.as_str()),
            ("surface", self.surface.as_str()),
            ("primary", self.primary.as_str()),
            ("secondary", self.secondary.as_str()),
            ("accent", self.accent.as_str()),
            ("text", self.text.as_str()),
            ("textSecondary", self.text_secondary.as_str()),
            ("border", self.border.as_str()),
        ]
    }
}

/// Per-block-type visual rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeBlocks {
    pub moment: MomentBlockStyle,
    pub recommendation: RecommendationBlockStyle,
    pub photo: PhotoBlockStyle,
    pub tip: TipBlockStyle,
    pub divider: DividerBlockStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StampShape {
    Circle,
    Rectangle,
    Oval,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MomentBlockStyle {
    pub show_stamp: bool,
    pub stamp_shape: StampShape,
    /// Used when the block does not carry its own stamp colour
    pub stamp_color: String,
    pub title_color: String,
}

/// Background and foreground of a badge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBadgeStyle {
    pub background: String,
    pub text: String,
}

impl CategoryBadgeStyle {
    pub fn new(background: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            background: background.into(),
            text: text.into(),
        }
    }
}

/// Badge colours by rating tier (S/A, B/C, D/F)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingBadgeStyle {
    pub top: CategoryBadgeStyle,
    pub middle: CategoryBadgeStyle,
    pub low: CategoryBadgeStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationBlockStyle {
    pub stay: CategoryBadgeStyle,
    pub eat: CategoryBadgeStyle,
    #[serde(rename = "do")]
    pub do_: CategoryBadgeStyle,
    pub shop: CategoryBadgeStyle,
    pub rating: RatingBadgeStyle,
    #[serde(default = "default_true")]
    pub show_price_level: bool,
}

impl RatingBadgeStyle {
    /// S/A use `top`, B/C `middle`, D/F `low`
    pub fn for_rating(&self, rating: Rating) -> &CategoryBadgeStyle {
        match rating {
            Rating::S | Rating::A => &self.top,
            Rating::B | Rating::C => &self.middle,
            Rating::D | Rating::F => &self.low,
        }
    }
}

impl RecommendationBlockStyle {
    /// Badge for `category`
    pub fn badge_style(&self, category: RecommendationCategory) -> &CategoryBadgeStyle {
        match category {
            RecommendationCategory::Stay => &self.stay,
            RecommendationCategory::Eat => &self.eat,
            RecommendationCategory::Do => &self.do_,
            RecommendationCategory::Shop => &self.shop,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoFrame {
    None,
    Polaroid,
    Rounded,
    Film,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoBlockStyle {
    pub frame: PhotoFrame,
    pub show_caption: bool,
    pub allow_rotation: bool,
    /// Largest absolute rotation in degrees
    pub max_rotation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipBlockStyle {
    pub background: String,
    pub border: String,
    /// Symbol name shown next to the tip title
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DividerPattern {
    Line,
    Dashed,
    Dotted,
    Ornament,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividerBlockStyle {
    pub pattern: DividerPattern,
    pub color: String,
}

/// Layout-level attributes shared by all blocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeStyle {
    pub corner_radius: f64,
    pub block_spacing: f64,
    pub shadow_opacity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper_texture: Option<String>,
}

fn default_true() -> bool {
    true
}

impl JournalTheme {
    /// Check every colour parses and every size is usable
    ///
    /// # Errors
    /// Returns [`Error::InvalidTheme`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let fail = |reason: String| Error::InvalidTheme {
            slug: self.slug.clone(),
            reason,
        };

        if self.slug.trim().is_empty() {
            return Err(fail("slug is empty".to_string()));
        }

        for (field, value) in self.color_fields() {
            Rgba::from_hex(value).map_err(|_| fail(format!("{} is not a colour: {:?}", field, value)))?;
        }

        let typography = &self.typography;
        for (field, size) in [
            ("titleSize", typography.title_size),
            ("bodySize", typography.body_size),
            ("captionSize", typography.caption_size),
        ] {
            if !(size.is_finite() && size > 0.0) {
                return Err(fail(format!("{} must be positive, got {}", field, size)));
            }
        }

        let max_rotation = self.blocks.photo.max_rotation;
        if !(max_rotation.is_finite() && max_rotation >= 0.0) {
            return Err(fail(format!("photo.maxRotation must be >= 0, got {}", max_rotation)));
        }

        if !(0.0..=1.0).contains(&self.style.shadow_opacity) {
            return Err(fail(format!(
                "style.shadowOpacity must be within 0..=1, got {}",
                self.style.shadow_opacity
            )));
        }

        Ok(())
    }

    /// Every colour string in the theme, palette first
    pub fn color_fields(&self) -> Vec<(String, &str)> {
        let mut fields: Vec<(String, &str)> = self
            .colors
            .entries()
            .into_iter()
            .map(|(name, value)| (format!("colors.{}", name), value))
            .collect();

        let blocks = &self.blocks;
        let recommendation = &blocks.recommendation;
        let badges = [
            ("stay", &recommendation.stay),
            ("eat", &recommendation.eat),
            ("do", &recommendation.do_),
            ("shop", &recommendation.shop),
            ("rating.top", &recommendation.rating.top),
            ("rating.middle", &recommendation.rating.middle),
            ("rating.low", &recommendation.rating.low),
        ];
        for (name, badge) in badges {
            fields.push((format!("recommendation.{}.background", name), badge.background.as_str()));
            fields.push((format!("recommendation.{}.text", name), badge.text.as_str()));
        }

        fields.push(("moment.stampColor".to_string(), blocks.moment.stamp_color.as_str()));
        fields.push(("moment.titleColor".to_string(), blocks.moment.title_color.as_str()));
        fields.push(("tip.background".to_string(), blocks.tip.background.as_str()));
        fields.push(("tip.border".to_string(), blocks.tip.border.as_str()));
        fields.push(("divider.color".to_string(), blocks.divider.color.as_str()));
        fields
    }
}
