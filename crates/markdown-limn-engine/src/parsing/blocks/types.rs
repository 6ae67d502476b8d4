use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::parsing::indent::IndentUnit;
use crate::parsing::inline::{Mark, Run};

/// Stable identifier for a block, assigned at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    pub fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

/// The structural kind of a block, with kind-specific attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    Paragraph,
    Heading { level: u8 },
    BlockQuote,
    BulletItem { depth: usize, marker: char },
    OrderedItem { depth: usize, number: u64 },
    IndentedItem { depth: usize },
    /// Reserved: fence reconstruction is not implemented yet, so the
    /// classifier never produces this kind (fence lines stay paragraphs).
    CodeBlock { lang: Option<String> },
}

impl BlockKind {
    pub fn is_list_item(&self) -> bool {
        matches!(
            self,
            BlockKind::BulletItem { .. }
                | BlockKind::OrderedItem { .. }
                | BlockKind::IndentedItem { .. }
        )
    }
}

/// One classified, decorated block.
///
/// The first `spec_offset` bytes of the source text belong to the
/// markdown syntax marker, materialized as the leading spec/tab/marker
/// runs; everything after is kind-independent content. Blocks are built
/// fresh on every reconstruction pass and never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: NodeId,
    pub kind: BlockKind,
    pub spec_offset: usize,
    pub runs: Vec<Run>,
}

impl Block {
    pub(crate) fn assemble(kind: BlockKind, spec_offset: usize, runs: Vec<Run>) -> Self {
        Self {
            id: NodeId::fresh(),
            kind,
            spec_offset,
            runs,
        }
    }

    /// An empty paragraph placeholder holding the sentinel run.
    pub fn empty_paragraph() -> Self {
        Self::assemble(BlockKind::Paragraph, 0, vec![Run::sentinel()])
    }

    /// The block's full markdown-faithful source text: every run's text,
    /// spec runs included, marks dropped.
    pub fn source_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// The user-content portion of the source text, after the spec runs.
    pub fn content_text(&self) -> String {
        let source = self.source_text();
        source[self.spec_offset..].to_string()
    }

    pub fn source_len(&self) -> usize {
        self.runs.iter().map(Run::len).sum()
    }

    pub fn content_len(&self) -> usize {
        self.source_len() - self.spec_offset
    }

    /// Recovers the indent units materialized as tab runs, for list items
    /// that pass their indentation on to a split-off sibling.
    pub fn indent_units(&self) -> Vec<IndentUnit> {
        self.runs
            .iter()
            .filter(|r| r.marks.iter().any(|m| matches!(m, Mark::Tab { .. })))
            .filter_map(|r| IndentUnit::from_str(&r.text))
            .collect()
    }
}
