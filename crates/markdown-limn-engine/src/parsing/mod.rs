//! Markdown notation: block classification, inline tokenization and
//! block construction.

pub mod blocks;
pub mod construct;
pub mod indent;
pub mod inline;

pub use blocks::{Block, BlockKind, Classified, NodeId, classify_block};
pub use construct::{classify_and_construct, construct, construct_blocks};
pub use indent::{IndentUnit, classify_indent};
pub use inline::{
    LinkClass, Mark, MarkSet, MathPart, NOTE_SCHEME, Run, SpecClass, normalize_runs, tokenize,
};
