use crate::parsing::blocks::Block;

use super::tree::Doc;

/// Cursor arithmetic shared by the split and merge paths. All positions
/// are derived from `spec_offset` and length deltas, never hand-tuned
/// constants.

/// Snaps a byte offset down to the nearest character boundary.
pub fn snap_to_char_boundary(text: &str, mut offset: usize) -> usize {
    offset = offset.min(text.len());
    while offset > 0 && !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Absolute caret position for a content-local offset within a leaf.
pub fn content_caret(doc: &Doc, leaf_index: usize, content_offset: usize) -> Option<usize> {
    let start = doc.block_start(leaf_index)?;
    let leaves = doc.leaves();
    let block = leaves.get(leaf_index)?.block;
    Some(start + block.spec_offset + content_offset.min(block.content_len()))
}

/// Content-local caret for a join at `join` source bytes into a merged
/// block: the join point translated past the reconstructed spec run,
/// clamped to the content start when the new spec swallowed the join.
pub fn caret_after_join(merged: &Block, join: usize) -> usize {
    join.saturating_sub(merged.spec_offset)
}
