use crate::parsing::blocks::Block;
use crate::parsing::construct::classify_and_construct;

use super::cursor::caret_after_join;
use super::guard::ReentrancyGuard;
use super::tree::Doc;

/// Which boundary the deletion crosses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeDirection {
    /// Backspace with the caret at the start of a block's content.
    Backward,
    /// Delete with the caret at the end of a block's content.
    Forward,
}

/// Result of merging two blocks across a boundary. The caller splices
/// `blocks` over `replace_leaves` (equivalently `replace_range` in
/// absolute offsets), places the caret at `cursor`, and then releases the
/// reentrancy guard.
#[derive(Debug)]
pub struct MergeOutcome {
    /// Half-open leaf index range being replaced.
    pub replace_leaves: std::ops::Range<usize>,
    /// Absolute byte range being replaced.
    pub replace_range: std::ops::Range<usize>,
    pub blocks: Vec<Block>,
    /// New absolute caret position, already clamped into content.
    pub cursor: usize,
}

/// Merges the block at the caret with its nearest neighbor in the given
/// direction (the Backspace/Delete-across-boundary operation).
///
/// The neighbor search tries siblings at the current depth first, then
/// walks up one structural level at a time, so a list item can merge with
/// content outside its list. Returns `None` (a normal no-op, never an
/// error) when no neighbor exists in that direction, when the caret is
/// not on the relevant content boundary, when the offset cannot be
/// resolved, or when a previous merge is still being applied.
///
/// The upper side of the join contributes its full source text; the
/// lower side contributes content only, its marker dissolving with the
/// boundary. The joined text is then re-fed through block classification
/// and inline tokenization, which can both create structure (two half
/// lines forming a heading) and destroy it.
pub fn merge_across_boundary(
    doc: &Doc,
    cursor: usize,
    direction: MergeDirection,
    guard: &mut ReentrancyGuard,
) -> Option<MergeOutcome> {
    if !guard.try_begin() {
        return None;
    }
    let outcome = compute(doc, cursor, direction);
    if outcome.is_none() {
        // Nothing will be applied, so there is nothing to finish.
        guard.finish();
    }
    outcome
}

fn compute(doc: &Doc, cursor: usize, direction: MergeDirection) -> Option<MergeOutcome> {
    let pos = doc.resolve(cursor)?;

    let on_boundary = match direction {
        MergeDirection::Backward => pos.offset == pos.block.spec_offset,
        MergeDirection::Forward => pos.offset == pos.block.source_len(),
    };
    if !on_boundary {
        return None;
    }

    let neighbor_path = match direction {
        MergeDirection::Backward => doc.previous_leaf(&pos.path)?,
        MergeDirection::Forward => doc.next_leaf(&pos.path)?,
    };
    let neighbor_leaf = doc.leaf_index_of(&neighbor_path)?;

    let (upper_leaf, lower_leaf) = match direction {
        MergeDirection::Backward => (neighbor_leaf, pos.leaf_index),
        MergeDirection::Forward => (pos.leaf_index, neighbor_leaf),
    };

    let leaves = doc.leaves();
    let upper = leaves.get(upper_leaf)?.block;
    let lower = leaves.get(lower_leaf)?.block;

    // Decompose to the paragraph-equivalent texts and join: the upper
    // block keeps its spec (its line start survives), the lower block's
    // spec dissolves (its line start is the boundary being deleted).
    let upper_text = upper.source_text();
    let join = upper_text.len();
    let merged_text = upper_text + &lower.content_text();
    let merged = classify_and_construct(&merged_text);

    let upper_start = doc.block_start(upper_leaf)?;
    let lower_end = doc.block_start(lower_leaf)? + lower.source_len();
    let cursor = upper_start + merged.spec_offset + caret_after_join(&merged, join);

    Some(MergeOutcome {
        replace_leaves: upper_leaf..lower_leaf + 1,
        replace_range: upper_start..lower_end,
        blocks: vec![merged],
        cursor,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parsing::blocks::BlockKind;

    /// Runs a backward merge and applies it, returning the new doc and
    /// caret.
    fn backspace(doc: &Doc, cursor: usize) -> Option<(Doc, usize)> {
        let mut guard = ReentrancyGuard::new();
        let out = merge_across_boundary(doc, cursor, MergeDirection::Backward, &mut guard)?;
        let updated = doc.replace_leaves(out.replace_leaves.clone(), out.blocks.clone());
        guard.finish();
        Some((updated, out.cursor))
    }

    fn delete(doc: &Doc, cursor: usize) -> Option<(Doc, usize)> {
        let mut guard = ReentrancyGuard::new();
        let out = merge_across_boundary(doc, cursor, MergeDirection::Forward, &mut guard)?;
        let updated = doc.replace_leaves(out.replace_leaves.clone(), out.blocks.clone());
        guard.finish();
        Some((updated, out.cursor))
    }

    #[test]
    fn paragraphs_join_at_the_seam() {
        let doc = Doc::from_markdown("hello\nworld");
        // Caret at the start of "world" (offset 6).
        let (updated, cursor) = backspace(&doc, 6).expect("merge should apply");
        assert_eq!(updated.to_markdown(), "helloworld");
        assert_eq!(cursor, 5);
    }

    #[test]
    fn heading_absorbs_following_paragraph() {
        let doc = Doc::from_markdown("# head\ning");
        let (updated, cursor) = backspace(&doc, 7).expect("merge should apply");
        assert_eq!(updated.to_markdown(), "# heading");
        let pos = updated.resolve(cursor).expect("cursor resolves");
        assert_eq!(pos.block.kind, BlockKind::Heading { level: 1 });
        assert_eq!(cursor, 6);
    }

    #[test]
    fn half_lines_can_form_a_heading() {
        // "#" and " title" were halves of a heading split inside its
        // spec run; merging reconstitutes the heading.
        let doc = Doc::from_markdown("#\n title");
        let (updated, cursor) = backspace(&doc, 2).expect("merge should apply");
        assert_eq!(updated.to_markdown(), "# title");
        let pos = updated.resolve(cursor).expect("cursor resolves");
        assert_eq!(pos.block.kind, BlockKind::Heading { level: 1 });
        // The join sat inside the reconstructed spec; the caret clamps to
        // the content start.
        assert_eq!(cursor, 2);
    }

    #[test]
    fn bullet_items_merge_dropping_the_lower_marker() {
        let doc = Doc::from_markdown("- one\n- two");
        // Caret at content start of the second item: 6 + 2.
        let (updated, cursor) = backspace(&doc, 8).expect("merge should apply");
        assert_eq!(updated.to_markdown(), "- onetwo");
        assert_eq!(cursor, 5);
    }

    #[test]
    fn quote_continuation_merges_into_one_quote() {
        let doc = Doc::from_markdown("> a\n> b");
        let (updated, cursor) = backspace(&doc, 6).expect("merge should apply");
        assert_eq!(updated.to_markdown(), "> ab");
        assert_eq!(cursor, 3);
    }

    #[test]
    fn first_list_item_merges_with_block_outside_the_list() {
        let doc = Doc::from_markdown("intro\n- a\n- b");
        // Caret at content start of "- a": block starts at 6, spec 2.
        let (updated, cursor) = backspace(&doc, 8).expect("merge should apply");
        assert_eq!(updated.to_markdown(), "introa\n- b");
        assert_eq!(cursor, 5);
    }

    #[test]
    fn merge_at_document_start_is_a_noop() {
        let doc = Doc::from_markdown("- a\n- b");
        assert!(backspace(&doc, 2).is_none());
    }

    #[test]
    fn merge_at_document_end_is_a_noop() {
        let doc = Doc::from_markdown("a\nb");
        assert!(delete(&doc, 3).is_none());
    }

    #[test]
    fn off_boundary_caret_is_a_noop() {
        let doc = Doc::from_markdown("ab\ncd");
        // Caret in the middle of "cd", not at its content start.
        assert!(backspace(&doc, 4).is_none());
    }

    #[test]
    fn unresolvable_offset_is_a_noop() {
        let doc = Doc::from_markdown("ab");
        assert!(backspace(&doc, 99).is_none());
    }

    #[test]
    fn forward_delete_joins_the_next_block() {
        let doc = Doc::from_markdown("- a\n- b");
        // Caret at the end of the first item's content (offset 3).
        let (updated, cursor) = delete(&doc, 3).expect("merge should apply");
        assert_eq!(updated.to_markdown(), "- ab");
        assert_eq!(cursor, 3);
    }

    #[test]
    fn forward_delete_from_paragraph_into_list() {
        let doc = Doc::from_markdown("intro\n- a");
        let (updated, cursor) = delete(&doc, 5).expect("merge should apply");
        assert_eq!(updated.to_markdown(), "introa");
        assert_eq!(cursor, 5);
    }

    #[test]
    fn held_guard_suppresses_reentry() {
        let doc = Doc::from_markdown("a\nb");
        let mut guard = ReentrancyGuard::new();
        let first = merge_across_boundary(&doc, 2, MergeDirection::Backward, &mut guard);
        assert!(first.is_some());
        // The replacement has not been applied yet; a re-dispatched key
        // event must not start a second merge.
        let second = merge_across_boundary(&doc, 2, MergeDirection::Backward, &mut guard);
        assert!(second.is_none());
        guard.finish();
        let third = merge_across_boundary(&doc, 2, MergeDirection::Backward, &mut guard);
        assert!(third.is_some());
    }

    #[test]
    fn noop_merge_releases_the_guard() {
        let doc = Doc::from_markdown("a");
        let mut guard = ReentrancyGuard::new();
        assert!(merge_across_boundary(&doc, 0, MergeDirection::Backward, &mut guard).is_none());
        assert!(!guard.is_held());
    }

    #[test]
    fn merge_is_the_inverse_of_split_for_list_items() {
        use crate::editing::split::split_at;
        use crate::parsing::classify_and_construct;

        let original = classify_and_construct("- item one");
        let halves = split_at(&original, 6);
        let doc = Doc::from_blocks(halves.blocks);
        // Caret at content start of the lower half: "- item\n-  one".
        let lower_content_start = 7 + 2;
        let (updated, cursor) = backspace(&doc, lower_content_start).expect("merge should apply");
        assert_eq!(updated.to_markdown(), "- item one");
        assert_eq!(cursor, 6);
    }

    #[test]
    fn merged_sequence_is_reclassified_not_spliced() {
        // Destroying structure: the quote marker of the lower block is
        // gone after the merge, so the text reclassifies as one quote.
        let doc = Doc::from_markdown("> keep\n> gone");
        let (updated, _) = backspace(&doc, 9).expect("merge should apply");
        let leaves = updated.leaves();
        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves[0].block.kind, BlockKind::BlockQuote);
        assert_eq!(leaves[0].block.content_text(), "keepgone");
    }

    #[test]
    fn replace_range_spans_both_blocks() {
        let doc = Doc::from_markdown("abc\ndef");
        let mut guard = ReentrancyGuard::new();
        let out = merge_across_boundary(&doc, 4, MergeDirection::Backward, &mut guard)
            .expect("merge should apply");
        assert_eq!(out.replace_leaves, 0..2);
        assert_eq!(out.replace_range, 0..7);
        assert_eq!(out.blocks.len(), 1);
        assert_eq!(out.blocks[0].source_text(), "abcdef");
    }
}
