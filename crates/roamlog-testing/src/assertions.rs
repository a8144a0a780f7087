//! Invariant checks for draft content.
//!
//! Each assertion returns `anyhow::Result` so failures carry the offending
//! position instead of a bare panic.

use anyhow::{bail, Result};
use roamlog_types::EditorContent;
use uuid::Uuid;

/// Orders are exactly `0..n-1` in sequence order.
pub fn assert_contiguous_orders(content: &EditorContent) -> Result<()> {
    for (index, block) in content.iter().enumerate() {
        if block.order < 0 || block.order as usize != index {
            bail!(
                "Block {} at position {} has order {}",
                block.id,
                index,
                block.order
            );
        }
    }
    Ok(())
}

/// `next_order` equals max order + 1, or 0 when empty.
pub fn assert_next_order_law(content: &EditorContent) -> Result<()> {
    let expected = content
        .blocks()
        .iter()
        .map(|block| block.order)
        .max()
        .unwrap_or(-1)
        + 1;

    if content.next_order() != expected {
        bail!(
            "next_order is {} but max order + 1 is {}",
            content.next_order(),
            expected
        );
    }
    Ok(())
}

/// Blocks appear with exactly these ids, in this order.
pub fn assert_block_ids(content: &EditorContent, expected: &[Uuid]) -> Result<()> {
    let actual = content.block_ids();
    if actual != expected {
        bail!("Expected block ids {:?}, got {:?}", expected, actual);
    }
    Ok(())
}
