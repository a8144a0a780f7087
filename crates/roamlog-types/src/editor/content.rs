use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use super::block::EditorBlock;
use crate::error::{Error, Result};

/// Ordered blocks of one trip's draft journal
///
/// Aggregate root of an editing session. Structural changes (append, insert,
/// remove, reorder, move) keep `order` equal to the sequence position,
/// i.e. contiguous from 0. `update` never touches order.
///
/// Operations are not internally synchronized; callers sharing a content
/// value between threads must serialize writes themselves.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawContent")]
pub struct EditorContent {
    blocks: Vec<EditorBlock>,
}

/// Wire shape of [`EditorContent`]; renumbered on the way in
#[derive(Deserialize)]
struct RawContent {
    #[serde(default)]
    blocks: Vec<EditorBlock>,
}

impl From<RawContent> for EditorContent {
    fn from(raw: RawContent) -> Self {
        Self::from_blocks(raw.blocks)
    }
}

impl EditorContent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap existing blocks, sorting by their order and renumbering from 0
    pub fn from_blocks(mut blocks: Vec<EditorBlock>) -> Self {
        blocks.sort_by_key(|block| block.order);
        let mut content = Self { blocks };
        content.reindex();
        content
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EditorBlock> {
        self.blocks.iter()
    }

    /// Blocks in sequence order
    pub fn blocks(&self) -> &[EditorBlock] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<EditorBlock> {
        self.blocks
    }

    pub fn block_ids(&self) -> Vec<Uuid> {
        self.blocks.iter().map(|block| block.id).collect()
    }

    /// Block with the given id, if present
    pub fn block(&self, id: Uuid) -> Option<&EditorBlock> {
        self.blocks.iter().find(|block| block.id == id)
    }

    /// Sequence position of the block with the given id
    pub fn position(&self, id: Uuid) -> Option<usize> {
        self.blocks.iter().position(|block| block.id == id)
    }

    /// Order to assign to the next appended block: max order + 1, or 0 if empty
    pub fn next_order(&self) -> i32 {
        self.blocks
            .iter()
            .map(|block| block.order)
            .max()
            .map_or(0, |max| max + 1)
    }

    /// Append a copy of `block` with `order = next_order()`
    pub fn append(&mut self, mut block: EditorBlock) {
        block.order = self.next_order();
        debug!(block_id = %block.id, order = block.order, block_type = %block.block_type, "append block");
        self.blocks.push(block);
    }

    /// Insert `block` at sequence position `index` (`0..=len`) and renumber
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] without modifying the content when
    /// `index > len`.
    pub fn insert(&mut self, block: EditorBlock, index: usize) -> Result<()> {
        let len = self.blocks.len();
        if index > len {
            return Err(Error::IndexOutOfRange { index, len });
        }

        debug!(block_id = %block.id, index, block_type = %block.block_type, "insert block");
        self.blocks.insert(index, block);
        self.reindex();
        Ok(())
    }

    /// Remove the block with `id` if present, then renumber
    pub fn remove(&mut self, id: Uuid) {
        if let Some(index) = self.position(id) {
            debug!(block_id = %id, index, "remove block");
            self.blocks.remove(index);
        }
        self.reindex();
    }

    /// Replace the data and location of the stored block that has `block.id`
    ///
    /// The stored id, order and block type are kept. An unknown id is a
    /// silent no-op: the editing UI may hold a block that a background refresh
    /// already removed. A block whose type differs from the stored one is
    /// ignored as well. Returns whether the stored block was changed.
    pub fn update(&mut self, block: EditorBlock) -> bool {
        let Some(existing) = self.blocks.iter_mut().find(|existing| existing.id == block.id)
        else {
            debug!(block_id = %block.id, "update ignored, block not found");
            return false;
        };

        if existing.block_type != block.block_type {
            warn!(
                block_id = %block.id,
                stored = %existing.block_type,
                received = %block.block_type,
                "update ignored, block type cannot change"
            );
            return false;
        }

        existing.data = block.data;
        existing.location = block.location;
        true
    }

    /// Rebuild the sequence in the order of `ids`
    ///
    /// This redefines membership: ids with no matching block are skipped and
    /// blocks whose id is absent from `ids` are dropped. Callers must pass the
    /// complete id set to keep every block. See [`reorder_checked`] for the
    /// strict variant.
    ///
    /// [`reorder_checked`]: EditorContent::reorder_checked
    pub fn reorder(&mut self, ids: &[Uuid]) {
        let before = self.blocks.len();
        let mut remaining = std::mem::take(&mut self.blocks);
        let mut reordered = Vec::with_capacity(ids.len());

        for id in ids {
            if let Some(index) = remaining.iter().position(|block| block.id == *id) {
                reordered.push(remaining.swap_remove(index));
            }
        }

        if !remaining.is_empty() {
            warn!(
                dropped = remaining.len(),
                before,
                "reorder dropped blocks missing from the id list"
            );
        }

        self.blocks = reordered;
        self.reindex();
    }

    /// Reorder only when `ids` is an exact permutation of the current block ids
    ///
    /// # Errors
    /// Returns [`Error::ReorderMismatch`] listing missing and unknown ids; the
    /// content is left untouched.
    pub fn reorder_checked(&mut self, ids: &[Uuid]) -> Result<()> {
        let current: HashSet<Uuid> = self.blocks.iter().map(|block| block.id).collect();
        let requested: HashSet<Uuid> = ids.iter().copied().collect();

        let missing: Vec<Uuid> = self
            .blocks
            .iter()
            .map(|block| block.id)
            .filter(|id| !requested.contains(id))
            .collect();
        let unknown: Vec<Uuid> = ids
            .iter()
            .copied()
            .filter(|id| !current.contains(id))
            .collect();

        if !missing.is_empty() || !unknown.is_empty() || requested.len() != ids.len() {
            return Err(Error::ReorderMismatch { missing, unknown });
        }

        self.reorder(ids);
        Ok(())
    }

    /// Move the block with `id` to sequence position `to_index` and renumber
    ///
    /// Returns `Ok(false)` when no block has `id`.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] when `to_index >= len`.
    pub fn move_block(&mut self, id: Uuid, to_index: usize) -> Result<bool> {
        let len = self.blocks.len();
        let Some(from) = self.position(id) else {
            return Ok(false);
        };
        if to_index >= len {
            return Err(Error::IndexOutOfRange {
                index: to_index,
                len,
            });
        }

        let block = self.blocks.remove(from);
        self.blocks.insert(to_index, block);
        self.reindex();
        Ok(true)
    }

    /// Whether orders are exactly `0..n-1` in sequence order
    pub fn is_contiguous(&self) -> bool {
        self.blocks
            .iter()
            .enumerate()
            .all(|(index, block)| block.order as usize == index && block.order >= 0)
    }

    fn reindex(&mut self) {
        for (index, block) in self.blocks.iter_mut().enumerate() {
            block.order = index as i32;
        }
    }
}

impl<'a> IntoIterator for &'a EditorContent {
    type Item = &'a EditorBlock;
    type IntoIter = std::slice::Iter<'a, EditorBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
