//! Local draft state for one trip.
//!
//! Every mutation is applied to the local [`EditorContent`] first and returns
//! the request body the host should send, so the UI never waits on the network.

use chrono::{DateTime, Utc};
use roamlog_engine::preview_entries;
use roamlog_types::{
    AddBlockRequest, EditorBlock, EditorContent, EditorResponse, JournalEntry,
    ReorderBlocksRequest, SaveDraftRequest, UpdateBlockRequest,
};
use uuid::Uuid;

use crate::config::Config;
use crate::Result;

#[derive(Debug, Clone)]
pub struct DraftSession {
    trip_id: Uuid,
    content: EditorContent,
    last_synced_at: Option<DateTime<Utc>>,
    dirty: bool,
    strict_reorder: bool,
}

impl DraftSession {
    pub fn new(trip_id: Uuid, config: &Config) -> Self {
        Self {
            trip_id,
            content: EditorContent::new(),
            last_synced_at: None,
            dirty: false,
            strict_reorder: config.strict_reorder,
        }
    }

    pub fn from_response(response: EditorResponse, config: &Config) -> Self {
        let mut session = Self::new(response.trip_id, config);
        session.apply_response(response);
        session
    }

    pub fn trip_id(&self) -> Uuid {
        self.trip_id
    }

    pub fn content(&self) -> &EditorContent {
        &self.content
    }

    pub fn last_synced_at(&self) -> Option<DateTime<Utc>> {
        self.last_synced_at
    }

    /// Local edits not yet confirmed by the server
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn append(&mut self, mut block: EditorBlock) -> AddBlockRequest {
        block.order = self.content.next_order();
        let request = AddBlockRequest::for_block(&block, None);
        self.content.append(block);
        self.dirty = true;
        request
    }

    pub fn insert(&mut self, mut block: EditorBlock, index: usize) -> Result<AddBlockRequest> {
        let order = i32::try_from(index).unwrap_or(i32::MAX);
        block.order = order;
        let request = AddBlockRequest::for_block(&block, Some(order));
        self.content.insert(block, index)?;
        self.dirty = true;
        Ok(request)
    }

    /// `None` when the block is no longer part of the draft or would change type
    pub fn update(&mut self, block: EditorBlock) -> Option<UpdateBlockRequest> {
        let request = UpdateBlockRequest::from(&block);
        if !self.content.update(block) {
            return None;
        }
        self.dirty = true;
        Some(request)
    }

    /// Whether a block was removed
    pub fn remove(&mut self, id: Uuid) -> bool {
        if self.content.position(id).is_none() {
            return false;
        }
        self.content.remove(id);
        self.dirty = true;
        true
    }

    /// Reorder with the configured strictness
    ///
    /// Lenient sessions drop blocks missing from `ids`; strict sessions reject
    /// anything that is not a permutation and leave the draft untouched.
    pub fn reorder(&mut self, ids: &[Uuid]) -> Result<ReorderBlocksRequest> {
        if self.strict_reorder {
            self.content.reorder_checked(ids)?;
        } else {
            self.content.reorder(ids);
        }
        self.dirty = true;
        Ok(ReorderBlocksRequest::from(&self.content))
    }

    pub fn move_block(&mut self, id: Uuid, to_index: usize) -> Result<Option<ReorderBlocksRequest>> {
        if !self.content.move_block(id, to_index)? {
            return Ok(None);
        }
        self.dirty = true;
        Ok(Some(ReorderBlocksRequest::from(&self.content)))
    }

    /// Full draft snapshot for an explicit save
    pub fn save_request(&self) -> SaveDraftRequest {
        SaveDraftRequest::from(&self.content)
    }

    /// Replace local state with the server's view of the draft
    pub fn apply_response(&mut self, response: EditorResponse) {
        if response.trip_id != self.trip_id {
            tracing::warn!(
                expected = %self.trip_id,
                received = %response.trip_id,
                "editor response for another trip ignored"
            );
            return;
        }

        self.last_synced_at = Some(response.last_updated_at);
        self.content = response.into_content();
        self.dirty = false;
        tracing::debug!(trip_id = %self.trip_id, blocks = self.content.len(), "draft synced");
    }

    /// Published-shape entries for rendering the draft as a journal
    pub fn preview(&self) -> Vec<JournalEntry> {
        preview_entries(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use roamlog_types::BlockType;

    fn config(strict_reorder: bool) -> Config {
        Config {
            strict_reorder,
            ..Config::default()
        }
    }

    #[test]
    fn test_append_builds_request_and_marks_dirty() {
        let mut session = DraftSession::new(Uuid::from_u128(9), &Config::default());
        assert!(!session.is_dirty());

        let request = session.append(EditorBlock::new_tip(7, Some("Cash".to_string()), None));
        assert_eq!(request.block_type, BlockType::Tip);
        assert_eq!(request.insert_at_order, None);
        assert_eq!(session.content().blocks()[0].order, 0);
        assert!(session.is_dirty());
    }

    #[test]
    fn test_insert_out_of_range_leaves_draft_clean() {
        let mut session = DraftSession::new(Uuid::from_u128(9), &Config::default());
        let err = session.insert(EditorBlock::new_divider(0), 3).unwrap_err();
        assert!(matches!(
            err,
            Error::Types(roamlog_types::Error::IndexOutOfRange { index: 3, len: 0 })
        ));
        assert!(session.content().is_empty());
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_strict_reorder_rejects_partial_list() {
        let mut session = DraftSession::new(Uuid::from_u128(9), &config(true));
        session.append(EditorBlock::new_divider(0));
        session.append(EditorBlock::new_divider(0));
        let first = session.content().blocks()[0].id;

        assert!(session.reorder(&[first]).is_err());
        assert_eq!(session.content().len(), 2);
    }

    #[test]
    fn test_lenient_reorder_drops_omitted_blocks() {
        let mut session = DraftSession::new(Uuid::from_u128(9), &config(false));
        session.append(EditorBlock::new_divider(0));
        session.append(EditorBlock::new_divider(0));
        let second = session.content().blocks()[1].id;

        let request = session.reorder(&[second]).unwrap();
        assert_eq!(request.block_ids, vec![second]);
        assert_eq!(session.content().len(), 1);
    }

    #[test]
    fn test_update_keeps_local_block_type_in_step_with_server() {
        let mut session = DraftSession::new(Uuid::from_u128(9), &Config::default());
        session.append(EditorBlock::new_tip(0, Some("t".to_string()), None));
        let stored = session.content().blocks()[0].clone();

        let mut retyped = EditorBlock::new_moment(0, None, Some("m".to_string()), None, None, None);
        retyped.id = stored.id;
        assert!(session.update(retyped).is_none());
        assert_eq!(session.content().blocks()[0], stored);

        let mut edited = stored.clone();
        edited.data.title = Some("t2".to_string());
        let request = session.update(edited).expect("same-type update applies");
        assert_eq!(request.data.title.as_deref(), Some("t2"));
        assert_eq!(session.content().blocks()[0].block_type, BlockType::Tip);
        assert_eq!(session.content().blocks()[0].data.title.as_deref(), Some("t2"));
    }

    #[test]
    fn test_update_unknown_block_is_ignored() {
        let mut session = DraftSession::new(Uuid::from_u128(9), &Config::default());
        assert!(session.update(EditorBlock::new_divider(0)).is_none());
        assert!(!session.is_dirty());
        assert!(!session.remove(Uuid::from_u128(1)));
    }
}
