use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::blocks::Classified;

/// Blockquote. Owns the quote prefix knowledge.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: &'static str = "> ";
}

static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^> (.*)$").expect("invalid blockquote pattern"));

pub(crate) fn try_match(text: &str) -> Option<Classified> {
    let caps = PATTERN.captures(text)?;
    Some(Classified::BlockQuote {
        text: caps[1].to_string(),
    })
}
