use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::block::BlockType;
use crate::editor::{EditorBlock, EditorBlockData, EditorContent, EditorLocation};

// Request/response bodies of the draft editor endpoints. Field names are a
// wire contract with the backend (camelCase). Outgoing blocks are normalized
// so fields irrelevant to a block's type are never sent.

/// Body of `POST /trips/{id}/editor/blocks`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBlockRequest {
    #[serde(rename = "type")]
    pub block_type: BlockType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<EditorLocation>,
    pub data: EditorBlockData,
    /// Insert before the block currently at this order; append when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_at_order: Option<i32>,
}

impl AddBlockRequest {
    pub fn for_block(block: &EditorBlock, insert_at_order: Option<i32>) -> Self {
        let block = block.normalized();
        Self {
            block_type: block.block_type,
            location: block.location,
            data: block.data,
            insert_at_order,
        }
    }
}

/// Body of `PUT /trips/{id}/editor/blocks/{blockId}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlockRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<EditorLocation>,
    pub data: EditorBlockData,
}

impl From<&EditorBlock> for UpdateBlockRequest {
    fn from(block: &EditorBlock) -> Self {
        let block = block.normalized();
        Self {
            location: block.location,
            data: block.data,
        }
    }
}

/// Body of `PUT /trips/{id}/editor`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveDraftRequest {
    pub blocks: Vec<EditorBlock>,
}

impl From<&EditorContent> for SaveDraftRequest {
    fn from(content: &EditorContent) -> Self {
        Self {
            blocks: content.iter().map(EditorBlock::normalized).collect(),
        }
    }
}

/// Body of `PUT /trips/{id}/editor/reorder`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderBlocksRequest {
    pub block_ids: Vec<Uuid>,
}

impl From<&EditorContent> for ReorderBlocksRequest {
    fn from(content: &EditorContent) -> Self {
        Self {
            block_ids: content.block_ids(),
        }
    }
}

/// Draft state returned by every editor endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorResponse {
    pub trip_id: Uuid,
    pub last_updated_at: DateTime<Utc>,
    #[serde(default)]
    pub blocks: Vec<EditorBlock>,
}

impl EditorResponse {
    /// Draft content with blocks sorted by order and renumbered from 0
    pub fn into_content(self) -> EditorContent {
        EditorContent::from_blocks(self.blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{Rating, RecommendationCategory};

    #[test]
    fn test_add_block_request_wire_shape() {
        let mut block = EditorBlock::new_recommendation(
            0,
            "LX Factory",
            RecommendationCategory::Shop,
            Some(Rating::B),
            None,
            None,
            None,
        )
        .with_location(EditorLocation::new("W", 55, "LX Factory", "LX Factory, Lisbon", 38.7, -9.17));
        block.data.caption = Some("ignored".to_string());

        let request = AddBlockRequest::for_block(&block, Some(2));
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["type"], "Recommendation");
        assert_eq!(json["insertAtOrder"], 2);
        assert_eq!(json["location"]["osmId"], 55);
        assert_eq!(json["data"]["category"], "shop");
        assert_eq!(json["data"]["rating"], 2);
        assert!(json["data"].get("caption").is_none());
    }

    #[test]
    fn test_add_block_request_omits_absent_insert_order() {
        let request = AddBlockRequest::for_block(&EditorBlock::new_divider(0), None);
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("insertAtOrder").is_none());
        assert!(json.get("location").is_none());
    }

    #[test]
    fn test_reorder_request_uses_sequence_order() {
        let mut content = EditorContent::new();
        content.append(EditorBlock::new_divider(0));
        content.append(EditorBlock::new_tip(0, None, None));
        let request = ReorderBlocksRequest::from(&content);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["blockIds"].as_array().map(Vec::len), Some(2));
        assert_eq!(request.block_ids, content.block_ids());
    }

    #[test]
    fn test_update_request_drops_location_for_tip() {
        let block = EditorBlock::new_tip(0, Some("t".to_string()), None)
            .with_location(EditorLocation::placeholder("x", "x", 0.0, 0.0));
        let request = UpdateBlockRequest::from(&block);
        assert!(request.location.is_none());
        assert_eq!(request.data.title.as_deref(), Some("t"));
    }

    #[test]
    fn test_editor_response_into_content_sorts_blocks() {
        let json = r#"{
            "tripId": "00000000-0000-0000-0000-000000000001",
            "lastUpdatedAt": "2026-03-01T10:00:00Z",
            "blocks": [
                {"id": "00000000-0000-0000-0000-00000000000b", "order": 5, "type": "Divider", "data": {}},
                {"id": "00000000-0000-0000-0000-00000000000a", "order": 2, "type": "Tip", "data": {"title": "first"}}
            ]
        }"#;

        let response: EditorResponse = serde_json::from_str(json).unwrap();
        let content = response.into_content();

        assert_eq!(content.blocks()[0].data.title.as_deref(), Some("first"));
        assert_eq!(content.blocks()[0].order, 0);
        assert_eq!(content.blocks()[1].order, 1);
        assert_eq!(content.next_order(), 2);
    }
}
