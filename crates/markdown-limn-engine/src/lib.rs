pub mod editing;
pub mod io;
pub mod parsing;

// Re-export key types for easier usage
pub use editing::{
    Doc, MergeDirection, MergeOutcome, ReentrancyGuard, SplitOutcome, merge_across_boundary,
    split_at,
};
pub use parsing::{
    Block, BlockKind, Classified, IndentUnit, LinkClass, Mark, MarkSet, MathPart, NodeId, Run,
    SpecClass, classify_and_construct, classify_block, construct_blocks, tokenize,
};
