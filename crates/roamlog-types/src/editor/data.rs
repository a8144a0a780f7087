use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::block::{BlockType, Rating, RecommendationCategory};

// NOTE: Field-bag shape
//
// EditorBlockData carries the union of every block type's fields. Only the
// subset named by `relevant_fields(block.type)` is meaningful; the rest stay
// `None`. The backend DTO has the same flat shape, so the bag is kept as-is
// instead of being split into one struct per block type.

/// Payload of a draft block
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorBlockData {
    // Moment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stamp_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stamp_color: Option<String>,

    // Recommendation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<RecommendationCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    /// 1 (cheap) to 4 (expensive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_level: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    // Photo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Rotation in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,

    // Photo and recommendation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl EditorBlockData {
    pub fn moment(
        date: Option<DateTime<Utc>>,
        title: Option<String>,
        content: Option<String>,
        stamp_text: Option<String>,
        stamp_color: Option<String>,
    ) -> Self {
        Self {
            date,
            title,
            content,
            stamp_text,
            stamp_color,
            ..Self::default()
        }
    }

    pub fn recommendation(
        name: impl Into<String>,
        category: RecommendationCategory,
        rating: Option<Rating>,
        price_level: Option<i32>,
        note: Option<String>,
        image_url: Option<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            category: Some(category),
            rating,
            price_level,
            note,
            image_url,
            ..Self::default()
        }
    }

    pub fn photo(image_url: Option<String>, caption: Option<String>, rotation: Option<f64>) -> Self {
        Self {
            image_url,
            caption,
            rotation,
            ..Self::default()
        }
    }

    pub fn tip(title: Option<String>, content: Option<String>) -> Self {
        Self {
            title,
            content,
            ..Self::default()
        }
    }

    pub fn divider() -> Self {
        Self::default()
    }

    /// Wire names of the fields meaningful for `block_type`
    pub fn relevant_fields(block_type: BlockType) -> &'static [&'static str] {
        match block_type {
            BlockType::Moment => &["date", "title", "content", "stampText", "stampColor"],
            BlockType::Recommendation => &[
                "name",
                "category",
                "rating",
                "priceLevel",
                "note",
                "imageUrl",
            ],
            BlockType::Photo => &["imageUrl", "caption", "rotation"],
            BlockType::Tip => &["title", "content"],
            BlockType::Divider => &[],
        }
    }

    /// Clear every field that is not meaningful for `block_type`
    pub fn retain_for(&mut self, block_type: BlockType) {
        let kept = std::mem::take(self);
        *self = match block_type {
            BlockType::Moment => Self::moment(
                kept.date,
                kept.title,
                kept.content,
                kept.stamp_text,
                kept.stamp_color,
            ),
            BlockType::Recommendation => Self {
                name: kept.name,
                category: kept.category,
                rating: kept.rating,
                price_level: kept.price_level,
                note: kept.note,
                image_url: kept.image_url,
                ..Self::default()
            },
            BlockType::Photo => Self::photo(kept.image_url, kept.caption, kept.rotation),
            BlockType::Tip => Self::tip(kept.title, kept.content),
            BlockType::Divider => Self::divider(),
        };
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
