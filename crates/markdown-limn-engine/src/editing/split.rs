use crate::parsing::blocks::{Block, BlockKind, Classified};
use crate::parsing::construct::{classify_and_construct, construct};

use super::cursor::snap_to_char_boundary;

/// Result of splitting one block at a cursor offset.
///
/// Exactly two blocks are always produced; an empty half becomes an empty
/// placeholder rather than being omitted, so callers can rely on the
/// block count when mapping the caret. The caret belongs at content
/// offset 0 of `blocks[cursor_block]`.
#[derive(Debug)]
pub struct SplitOutcome {
    pub blocks: Vec<Block>,
    /// Index into `blocks` of the node that receives the caret.
    pub cursor_block: usize,
}

/// Splits a block at a source-text byte offset (the Enter operation).
///
/// Where the cut happens decides the path:
/// - inside the spec run: the full source text is cut at the raw offset
///   and both halves reclassified from scratch, so edits to the marker
///   itself flow through ordinary reclassification;
/// - in paragraph, heading or code content: both halves reclassified,
///   letting a half that now matches another rule change kind;
/// - in list-item content: the lower half becomes a new item of the same
///   kind, inheriting indent and marker, ordered numbers incrementing;
/// - in blockquote content: both halves stay blockquotes.
pub fn split_at(block: &Block, cursor: usize) -> SplitOutcome {
    let source = block.source_text();
    let cursor = snap_to_char_boundary(&source, cursor);

    if cursor < block.spec_offset {
        return reclassify_halves(&source, cursor);
    }

    let content = &source[block.spec_offset..];
    let local = cursor - block.spec_offset;

    match &block.kind {
        BlockKind::Paragraph | BlockKind::Heading { .. } | BlockKind::CodeBlock { .. } => {
            reclassify_halves(&source, cursor)
        }
        BlockKind::BulletItem { marker, .. } => {
            let indent = block.indent_units();
            two(
                construct(Classified::BulletItem {
                    indent: indent.clone(),
                    marker: *marker,
                    text: content[..local].to_string(),
                }),
                construct(Classified::BulletItem {
                    indent,
                    marker: *marker,
                    text: content[local..].to_string(),
                }),
            )
        }
        BlockKind::OrderedItem { number, .. } => {
            let indent = block.indent_units();
            two(
                construct(Classified::OrderedItem {
                    indent: indent.clone(),
                    number: *number,
                    text: content[..local].to_string(),
                }),
                construct(Classified::OrderedItem {
                    indent,
                    number: number + 1,
                    text: content[local..].to_string(),
                }),
            )
        }
        BlockKind::IndentedItem { .. } => {
            let indent = block.indent_units();
            two(
                construct(Classified::IndentedItem {
                    indent: indent.clone(),
                    text: content[..local].to_string(),
                }),
                construct(Classified::IndentedItem {
                    indent,
                    text: content[local..].to_string(),
                }),
            )
        }
        BlockKind::BlockQuote => two(
            construct(Classified::BlockQuote {
                text: content[..local].to_string(),
            }),
            construct(Classified::BlockQuote {
                text: content[local..].to_string(),
            }),
        ),
    }
}

/// Cuts the raw source text and reclassifies both halves from scratch.
/// Empty halves become placeholder paragraphs.
fn reclassify_halves(source: &str, cut: usize) -> SplitOutcome {
    let upper = &source[..cut];
    let lower = &source[cut..];
    two(half(upper), half(lower))
}

fn half(text: &str) -> Block {
    if text.is_empty() {
        Block::empty_paragraph()
    } else {
        classify_and_construct(text)
    }
}

fn two(upper: Block, lower: Block) -> SplitOutcome {
    SplitOutcome {
        blocks: vec![upper, lower],
        cursor_block: 1,
    }
}
