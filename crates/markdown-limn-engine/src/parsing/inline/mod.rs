//! Inline mark tokenization.
//!
//! Turns a block's flat content text into a sequence of [`Run`]s carrying
//! decoration marks, with markdown delimiters preserved as spec runs so
//! the exact source text stays recoverable.

pub mod kinds;
pub mod scanner;
pub mod types;

pub use kinds::links::NOTE_SCHEME;
pub use scanner::tokenize;
pub use types::{LinkClass, Mark, MarkSet, MathPart, Run, SpecClass, normalize_runs};
