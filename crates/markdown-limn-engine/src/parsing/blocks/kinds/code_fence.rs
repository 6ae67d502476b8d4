use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::blocks::Classified;

/// Fenced code block opener/closer.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";
}

static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```(\S*)\s*$").expect("invalid fence pattern"));

/// True if the line looks like a fence opener or closer.
pub fn is_fence_line(text: &str) -> bool {
    PATTERN.is_match(text)
}

pub(crate) fn try_match(text: &str) -> Option<Classified> {
    PATTERN.captures(text)?;
    // A fence only means something once its closing line arrives, and a
    // single-line reconstruction pass never sees that line. Leave the
    // text as a paragraph rather than guess.
    // TODO: assemble multi-line fences when reconstruction can span lines.
    None
}
