use roamlog_types::{
    BlockType, EditorBlock, EditorBlockData, EditorContent, EditorLocation, JournalEntry,
    JournalMoment, JournalPhoto, JournalRecommendation, JournalTip, PlaceSummary,
    RecommendationCategory,
};
use tracing::{debug, warn};
use uuid::Uuid;

/// Category used when a published recommendation arrives without its payload
pub const FALLBACK_CATEGORY: RecommendationCategory = RecommendationCategory::Do;

// NOTE: Conversion is lossy on purpose
//
// The backend discards OSM identity once it resolves a location to a
// permanent place. Converting a published entry back into a draft block
// therefore yields a placeholder location (osmType "N", osmId 0). Every
// scalar field survives.

/// Rebuild a draft block from a published entry
///
/// Total over [`BlockType`]. A missing sub-entity produces a block with
/// empty defaults instead of failing.
pub fn to_editor_block(entry: &JournalEntry) -> EditorBlock {
    if !entry.is_consistent() {
        warn!(
            entry_id = %entry.id,
            block_type = %entry.block_type,
            "published entry does not match its block type, using defaults"
        );
    }

    let (location, data) = match entry.block_type {
        BlockType::Moment => {
            let moment = entry.moment.clone().unwrap_or_default();
            let location = moment.place.as_ref().map(place_to_location);
            let data = EditorBlockData::moment(
                moment.date,
                moment.title,
                moment.content,
                moment.stamp_text,
                moment.stamp_color,
            );
            (location, data)
        }
        BlockType::Recommendation => match &entry.recommendation {
            Some(recommendation) => (
                recommendation.place.as_ref().map(place_to_location),
                EditorBlockData::recommendation(
                    recommendation.name.clone(),
                    recommendation.category,
                    recommendation.rating,
                    recommendation.price_level,
                    recommendation.note.clone(),
                    recommendation.image_url.clone(),
                ),
            ),
            None => (
                None,
                EditorBlockData::recommendation(
                    String::new(),
                    FALLBACK_CATEGORY,
                    None,
                    None,
                    None,
                    None,
                ),
            ),
        },
        BlockType::Photo => {
            let photo = entry.photo.clone().unwrap_or_default();
            (
                None,
                EditorBlockData::photo(photo.image_url, photo.caption, photo.rotation),
            )
        }
        BlockType::Tip => {
            let tip = entry.tip.clone().unwrap_or_default();
            let content = Some(tip.content).filter(|content| !content.is_empty());
            (None, EditorBlockData::tip(tip.title, content))
        }
        BlockType::Divider => (None, EditorBlockData::divider()),
    };

    EditorBlock::with_id(entry.id, entry.order, entry.block_type, location, data)
}

/// Draft content for a list of published entries, sorted by order and renumbered
pub fn to_editor_content(entries: &[JournalEntry]) -> EditorContent {
    debug!(entries = entries.len(), "converting published entries to draft");
    EditorContent::from_blocks(entries.iter().map(to_editor_block).collect())
}

/// Placeholder draft location for a resolved place
pub fn place_to_location(place: &PlaceSummary) -> EditorLocation {
    EditorLocation::placeholder(
        place.name.clone(),
        place
            .display_name
            .clone()
            .unwrap_or_else(|| place.name.clone()),
        place.latitude,
        place.longitude,
    )
}

/// Unsaved place summary for a draft location, used by previews
pub fn location_to_place(location: &EditorLocation) -> PlaceSummary {
    PlaceSummary {
        id: Uuid::nil(),
        name: location.name.clone(),
        display_name: Some(location.display_name.clone()),
        latitude: location.latitude,
        longitude: location.longitude,
        category: None,
    }
}

/// Published-shaped preview of a draft block
///
/// The preview has never been saved: `save_count` is 0 and any place has a
/// nil id.
pub fn preview_entry(block: &EditorBlock) -> JournalEntry {
    let data = &block.data;
    let place = block
        .location
        .as_ref()
        .filter(|_| block.supports_location())
        .map(location_to_place);

    match block.block_type {
        BlockType::Moment => JournalEntry::moment(
            block.id,
            block.order,
            JournalMoment {
                date: data.date,
                title: data.title.clone(),
                content: data.content.clone(),
                stamp_text: data.stamp_text.clone(),
                stamp_color: data.stamp_color.clone(),
                place,
            },
        ),
        BlockType::Recommendation => JournalEntry::recommendation(
            block.id,
            block.order,
            JournalRecommendation {
                name: data.name.clone().unwrap_or_default(),
                category: data.category.unwrap_or(FALLBACK_CATEGORY),
                rating: data.rating,
                price_level: data.price_level,
                note: data.note.clone(),
                image_url: data.image_url.clone(),
                place,
            },
        ),
        BlockType::Photo => JournalEntry::photo(
            block.id,
            block.order,
            JournalPhoto {
                image_url: data.image_url.clone(),
                caption: data.caption.clone(),
                rotation: data.rotation,
            },
        ),
        BlockType::Tip => JournalEntry::tip(
            block.id,
            block.order,
            JournalTip {
                title: data.title.clone(),
                content: data.content.clone().unwrap_or_default(),
            },
        ),
        BlockType::Divider => JournalEntry::divider(block.id, block.order),
    }
}

/// Previews for every block of a draft, in sequence order
pub fn preview_entries(content: &EditorContent) -> Vec<JournalEntry> {
    content.iter().map(preview_entry).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use roamlog_types::Rating;

    fn place() -> PlaceSummary {
        PlaceSummary {
            id: Uuid::from_u128(77),
            name: "Miradouro da Graca".to_string(),
            display_name: None,
            latitude: 38.716,
            longitude: -9.131,
            category: Some("viewpoint".to_string()),
        }
    }

    #[test]
    fn test_place_to_location_zeroes_provenance() {
        let location = place_to_location(&place());
        assert_eq!(location.osm_type, "N");
        assert_eq!(location.osm_id, 0);
        assert_eq!(location.display_name, "Miradouro da Graca");
        assert_eq!(location.latitude, 38.716);
    }

    #[test]
    fn test_every_block_type_converts_without_payload() {
        for block_type in BlockType::ALL {
            let entry = JournalEntry::empty(Uuid::from_u128(1), 3, block_type);
            let block = to_editor_block(&entry);

            assert_eq!(block.id, entry.id);
            assert_eq!(block.order, 3);
            assert_eq!(block.block_type, block_type);
            assert!(block.location.is_none());
        }
    }

    #[test]
    fn test_missing_recommendation_uses_safe_defaults() {
        let entry = JournalEntry::empty(Uuid::from_u128(1), 0, BlockType::Recommendation);
        let block = to_editor_block(&entry);

        assert_eq!(block.data.name.as_deref(), Some(""));
        assert_eq!(block.data.category, Some(FALLBACK_CATEGORY));
    }

    #[test]
    fn test_tip_content_is_kept() {
        let entry = JournalEntry::tip(
            Uuid::from_u128(5),
            1,
            JournalTip {
                title: Some("Trams".to_string()),
                content: "Buy a Viva Viagem card".to_string(),
            },
        );
        let block = to_editor_block(&entry);
        assert_eq!(block.data.title.as_deref(), Some("Trams"));
        assert_eq!(block.data.content.as_deref(), Some("Buy a Viva Viagem card"));
    }

    #[test]
    fn test_empty_tip_content_converts_to_absent() {
        let draft = EditorBlock::new_tip(0, Some("Later".to_string()), None);
        let entry = preview_entry(&draft);
        assert_eq!(entry.tip.as_ref().map(|tip| tip.content.as_str()), Some(""));

        let block = to_editor_block(&entry);
        assert!(block.data.content.is_none());
        assert_eq!(block.data, draft.data);
    }

    #[test]
    fn test_preview_entry_is_consistent_for_every_type() {
        let blocks = [
            EditorBlock::new_moment(0, None, Some("A".to_string()), None, None, None),
            EditorBlock::new_recommendation(
                1,
                "Bairro Alto Hotel",
                RecommendationCategory::Stay,
                Some(Rating::A),
                Some(4),
                None,
                None,
            ),
            EditorBlock::new_photo(2, Some("https://img".to_string()), None, Some(3.0)),
            EditorBlock::new_tip(3, None, Some("Wear good shoes".to_string())),
            EditorBlock::new_divider(4),
        ];

        for block in &blocks {
            let entry = preview_entry(block);
            assert!(entry.is_consistent(), "{:?}", block.block_type);
            assert_eq!(entry.save_count, 0);
            assert!(!entry.is_saved);
            assert_eq!(to_editor_block(&entry).data, block.data);
        }
    }

    #[test]
    fn test_preview_place_has_nil_id() {
        let block = EditorBlock::new_moment(0, None, None, None, None, None)
            .with_location(EditorLocation::new("W", 12, "Castle", "Castelo", 38.71, -9.13));
        let entry = preview_entry(&block);

        let place = entry.place().unwrap();
        assert!(place.id.is_nil());
        assert_eq!(place.display_name.as_deref(), Some("Castelo"));
    }
}
