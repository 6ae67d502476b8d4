use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::blocks::Classified;

/// ATX heading. Owns all heading syntax knowledge.
pub struct Heading;

impl Heading {
    pub const MAX_LEVEL: u8 = 6;

    /// The spec text for a given level, e.g. `"## "` for level 2.
    pub fn spec_text(level: u8) -> String {
        let mut s = "#".repeat(level as usize);
        s.push(' ');
        s
    }
}

static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6}) (.*)$").expect("invalid heading pattern"));

pub(crate) fn try_match(text: &str) -> Option<Classified> {
    let caps = PATTERN.captures(text)?;
    Some(Classified::Heading {
        level: caps[1].len() as u8,
        text: caps[2].to_string(),
    })
}
