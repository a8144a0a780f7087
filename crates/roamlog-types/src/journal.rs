use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::block::{BlockType, Rating, RecommendationCategory};

// ==========================================
// Published journal (read-only)
// ==========================================
//
// Entries are produced by the backend's publish step. The client only
// constructs them locally for previews and tests.

/// Place resolved by the backend to a permanent record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceSummary {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalMoment {
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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<PlaceSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalRecommendation {
    pub name: String,
    pub category: RecommendationCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_level: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<PlaceSummary>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalPhoto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalTip {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JournalDivider {}

/// Published journal block
///
/// Exactly one of the sub-entities is populated, matching `block_type`.
/// Decoding does not enforce this; see [`JournalEntry::is_consistent`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: Uuid,
    pub order: i32,
    pub block_type: BlockType,
    #[serde(default)]
    pub save_count: i32,
    #[serde(default)]
    pub is_saved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moment: Option<JournalMoment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<JournalRecommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<JournalPhoto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<JournalTip>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub divider: Option<JournalDivider>,
}

impl JournalEntry {
    /// Entry of `block_type` with no sub-entity attached
    pub fn empty(id: Uuid, order: i32, block_type: BlockType) -> Self {
        Self {
            id,
            order,
            block_type,
            save_count: 0,
            is_saved: false,
            moment: None,
            recommendation: None,
            photo: None,
            tip: None,
            divider: None,
        }
    }

    pub fn moment(id: Uuid, order: i32, moment: JournalMoment) -> Self {
        Self {
            moment: Some(moment),
            ..Self::empty(id, order, BlockType::Moment)
        }
    }

    pub fn recommendation(id: Uuid, order: i32, recommendation: JournalRecommendation) -> Self {
        Self {
            recommendation: Some(recommendation),
            ..Self::empty(id, order, BlockType::Recommendation)
        }
    }

    pub fn photo(id: Uuid, order: i32, photo: JournalPhoto) -> Self {
        Self {
            photo: Some(photo),
            ..Self::empty(id, order, BlockType::Photo)
        }
    }

    pub fn tip(id: Uuid, order: i32, tip: JournalTip) -> Self {
        Self {
            tip: Some(tip),
            ..Self::empty(id, order, BlockType::Tip)
        }
    }

    pub fn divider(id: Uuid, order: i32) -> Self {
        Self {
            divider: Some(JournalDivider {}),
            ..Self::empty(id, order, BlockType::Divider)
        }
    }

    /// Resolved place of a moment or recommendation
    pub fn place(&self) -> Option<&PlaceSummary> {
        match self.block_type {
            BlockType::Moment => self.moment.as_ref().and_then(|m| m.place.as_ref()),
            BlockType::Recommendation => {
                self.recommendation.as_ref().and_then(|r| r.place.as_ref())
            }
            BlockType::Photo | BlockType::Tip | BlockType::Divider => None,
        }
    }

    /// Whether exactly the sub-entity named by `block_type` is populated
    pub fn is_consistent(&self) -> bool {
        let populated = [
            (BlockType::Moment, self.moment.is_some()),
            (BlockType::Recommendation, self.recommendation.is_some()),
            (BlockType::Photo, self.photo.is_some()),
            (BlockType::Tip, self.tip.is_some()),
            (BlockType::Divider, self.divider.is_some()),
        ];

        populated
            .iter()
            .all(|(block_type, present)| *present == (*block_type == self.block_type))
    }
}

/// Published journal of one trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Journal {
    pub trip_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_slug: Option<String>,
    #[serde(default)]
    pub entries: Vec<JournalEntry>,
}

impl Journal {
    /// Entries sorted by their published order
    pub fn sorted_entries(&self) -> Vec<&JournalEntry> {
        let mut entries: Vec<&JournalEntry> = self.entries.iter().collect();
        entries.sort_by_key(|entry| entry.order);
        entries
    }

    pub fn total_saves(&self) -> i64 {
        self.entries
            .iter()
            .map(|entry| i64::from(entry.save_count))
            .sum()
    }
}
