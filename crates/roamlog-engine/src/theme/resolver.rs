use roamlog_types::{
    BlockType, CategoryBadgeStyle, DividerPattern, EditorBlock, EditorBlockData, JournalTheme,
    MomentBlockStyle, PhotoBlockStyle, PhotoFrame, RecommendationBlockStyle, StampShape,
};
use serde::Serialize;

use crate::convert::FALLBACK_CATEGORY;

/// Highest price level shown, in currency symbols
pub const MAX_PRICE_LEVEL: i32 = 4;

/// Concrete visual attributes for one block under one theme
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockAppearance<'a> {
    Moment(MomentAppearance<'a>),
    Recommendation(RecommendationAppearance<'a>),
    Photo(PhotoAppearance),
    Tip(TipAppearance<'a>),
    Divider(DividerAppearance<'a>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MomentAppearance<'a> {
    pub title_color: &'a str,
    pub stamp: Option<StampAppearance<'a>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StampAppearance<'a> {
    pub text: &'a str,
    pub color: &'a str,
    pub shape: StampShape,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationAppearance<'a> {
    pub badge: &'a CategoryBadgeStyle,
    pub rating_label: Option<&'static str>,
    pub rating_badge: Option<&'a CategoryBadgeStyle>,
    /// e.g. `"$$"`; `None` when the theme hides price levels or none is set
    pub price_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhotoAppearance {
    pub frame: PhotoFrame,
    /// Degrees, already clamped to the theme's limit
    pub rotation: f64,
    pub show_caption: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TipAppearance<'a> {
    pub background: &'a str,
    pub border: &'a str,
    pub icon: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DividerAppearance<'a> {
    pub pattern: DividerPattern,
    pub color: &'a str,
}

/// Resolve every visual attribute of `block` under `theme`
pub fn resolve_block<'a>(block: &'a EditorBlock, theme: &'a JournalTheme) -> BlockAppearance<'a> {
    let blocks = &theme.blocks;
    let data = &block.data;

    match block.block_type {
        BlockType::Moment => BlockAppearance::Moment(MomentAppearance {
            title_color: &blocks.moment.title_color,
            stamp: resolve_stamp(data, &blocks.moment),
        }),
        BlockType::Recommendation => {
            BlockAppearance::Recommendation(resolve_recommendation(data, &blocks.recommendation))
        }
        BlockType::Photo => BlockAppearance::Photo(resolve_photo_frame(data, &blocks.photo)),
        BlockType::Tip => BlockAppearance::Tip(TipAppearance {
            background: &blocks.tip.background,
            border: &blocks.tip.border,
            icon: &blocks.tip.icon,
        }),
        BlockType::Divider => BlockAppearance::Divider(DividerAppearance {
            pattern: blocks.divider.pattern,
            color: &blocks.divider.color,
        }),
    }
}

/// Stamp for a moment, or `None` when the theme hides stamps or the block has no stamp text
///
/// A stamp colour on the block overrides the theme's.
pub fn resolve_stamp<'a>(
    data: &'a EditorBlockData,
    style: &'a MomentBlockStyle,
) -> Option<StampAppearance<'a>> {
    if !style.show_stamp {
        return None;
    }

    let text = data.stamp_text.as_deref().map(str::trim).filter(|t| !t.is_empty())?;
    let color = data
        .stamp_color
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or(style.stamp_color.as_str());

    Some(StampAppearance {
        text,
        color,
        shape: style.stamp_shape,
    })
}

pub fn resolve_recommendation<'a>(
    data: &EditorBlockData,
    style: &'a RecommendationBlockStyle,
) -> RecommendationAppearance<'a> {
    let category = data.category.unwrap_or(FALLBACK_CATEGORY);

    RecommendationAppearance {
        badge: style.badge_style(category),
        rating_label: data.rating.map(|rating| rating.label()),
        rating_badge: data.rating.map(|rating| style.rating.for_rating(rating)),
        price_label: data
            .price_level
            .filter(|_| style.show_price_level)
            .and_then(price_label),
    }
}

/// `"$"` repeated `level` times, clamped to `1..=MAX_PRICE_LEVEL`; `None` below 1
pub fn price_label(level: i32) -> Option<String> {
    if level < 1 {
        return None;
    }
    Some("$".repeat(level.min(MAX_PRICE_LEVEL) as usize))
}

/// Frame and effective rotation for a photo
///
/// Rotation is zero when the theme disallows it, otherwise clamped to
/// `±max_rotation`. Non-finite rotations count as zero.
pub fn resolve_photo_frame(data: &EditorBlockData, style: &PhotoBlockStyle) -> PhotoAppearance {
    let requested = data.rotation.filter(|r| r.is_finite()).unwrap_or(0.0);
    let limit = if style.max_rotation.is_finite() {
        style.max_rotation.abs()
    } else {
        0.0
    };
    let rotation = if style.allow_rotation {
        requested.clamp(-limit, limit)
    } else {
        0.0
    };

    PhotoAppearance {
        frame: style.frame,
        rotation,
        show_caption: style.show_caption && data.caption.as_deref().is_some_and(|c| !c.is_empty()),
    }
}
