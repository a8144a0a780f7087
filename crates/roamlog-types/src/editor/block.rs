use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::data::EditorBlockData;
use super::location::EditorLocation;
use crate::block::{BlockType, Rating, RecommendationCategory};

/// Single ordered unit of a draft journal
///
/// `order` is a zero-based rank among sibling blocks. It is maintained by the
/// owning [`EditorContent`](super::EditorContent), never by the block itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorBlock {
    pub id: Uuid,
    pub order: i32,
    #[serde(rename = "type")]
    pub block_type: BlockType,
    /// Only meaningful for moment and recommendation blocks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<EditorLocation>,
    pub data: EditorBlockData,
}

impl EditorBlock {
    /// Build a block with an explicit id. Prefer the typed `new_*` factories.
    pub fn with_id(
        id: Uuid,
        order: i32,
        block_type: BlockType,
        location: Option<EditorLocation>,
        data: EditorBlockData,
    ) -> Self {
        Self {
            id,
            order,
            block_type,
            location,
            data,
        }
    }

    fn fresh(order: i32, block_type: BlockType, data: EditorBlockData) -> Self {
        Self::with_id(Uuid::new_v4(), order, block_type, None, data)
    }

    pub fn new_moment(
        order: i32,
        date: Option<DateTime<Utc>>,
        title: Option<String>,
        content: Option<String>,
        stamp_text: Option<String>,
        stamp_color: Option<String>,
    ) -> Self {
        Self::fresh(
            order,
            BlockType::Moment,
            EditorBlockData::moment(date, title, content, stamp_text, stamp_color),
        )
    }

    /// Recommendation blocks cannot exist without a name and a category
    pub fn new_recommendation(
        order: i32,
        name: impl Into<String>,
        category: RecommendationCategory,
        rating: Option<Rating>,
        price_level: Option<i32>,
        note: Option<String>,
        image_url: Option<String>,
    ) -> Self {
        Self::fresh(
            order,
            BlockType::Recommendation,
            EditorBlockData::recommendation(name, category, rating, price_level, note, image_url),
        )
    }

    pub fn new_photo(
        order: i32,
        image_url: Option<String>,
        caption: Option<String>,
        rotation: Option<f64>,
    ) -> Self {
        Self::fresh(
            order,
            BlockType::Photo,
            EditorBlockData::photo(image_url, caption, rotation),
        )
    }

    pub fn new_tip(order: i32, title: Option<String>, content: Option<String>) -> Self {
        Self::fresh(order, BlockType::Tip, EditorBlockData::tip(title, content))
    }

    pub fn new_divider(order: i32) -> Self {
        Self::fresh(order, BlockType::Divider, EditorBlockData::divider())
    }

    /// Attach a location. Kept even on block types that ignore it.
    pub fn with_location(mut self, location: EditorLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn supports_location(&self) -> bool {
        self.block_type.supports_location()
    }

    /// Copy of the block with only the fields its type uses.
    ///
    /// Drops the location on block types that do not support one.
    pub fn normalized(&self) -> Self {
        let mut block = self.clone();
        block.data.retain_for(block.block_type);
        if !block.supports_location() {
            block.location = None;
        }
        block
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factories_set_type_and_fresh_ids() {
        let moment = EditorBlock::new_moment(0, None, Some("A".to_string()), None, None, None);
        let tip = EditorBlock::new_tip(1, Some("B".to_string()), None);
        let photo = EditorBlock::new_photo(2, None, None, None);
        let divider = EditorBlock::new_divider(3);

        assert_eq!(moment.block_type, BlockType::Moment);
        assert_eq!(tip.block_type, BlockType::Tip);
        assert_eq!(photo.block_type, BlockType::Photo);
        assert_eq!(divider.block_type, BlockType::Divider);
        assert_ne!(moment.id, tip.id);
        assert!(divider.data.is_empty());
        assert!(moment.location.is_none());
    }

    #[test]
    fn test_new_recommendation_requires_name_and_category() {
        let block = EditorBlock::new_recommendation(
            0,
            "Time Out Market",
            RecommendationCategory::Eat,
            None,
            None,
            None,
            None,
        );
        assert_eq!(block.data.name.as_deref(), Some("Time Out Market"));
        assert_eq!(block.data.category, Some(RecommendationCategory::Eat));
        assert!(block.data.price_level.is_none());
    }

    #[test]
    fn test_block_wire_shape() {
        let id = Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap();
        let block = EditorBlock::with_id(
            id,
            2,
            BlockType::Tip,
            None,
            EditorBlockData::tip(Some("Cash only".to_string()), None),
        );
        let json = serde_json::to_value(&block).unwrap();

        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000001");
        assert_eq!(json["order"], 2);
        assert_eq!(json["type"], "Tip");
        assert!(json.get("location").is_none());
        assert_eq!(json["data"]["title"], "Cash only");

        let parsed: EditorBlock = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, block);
    }

    #[test]
    fn test_normalized_drops_location_on_photo() {
        let location = EditorLocation::new("N", 1, "Spot", "Spot", 0.0, 0.0);
        let mut photo = EditorBlock::new_photo(0, None, Some("caption".to_string()), None)
            .with_location(location.clone());
        photo.data.title = Some("stray".to_string());

        let normalized = photo.normalized();
        assert!(normalized.location.is_none());
        assert!(normalized.data.title.is_none());
        assert_eq!(normalized.data.caption.as_deref(), Some("caption"));

        let moment = EditorBlock::new_moment(0, None, None, None, None, None)
            .with_location(location.clone());
        assert_eq!(moment.normalized().location, Some(location));
    }
}
