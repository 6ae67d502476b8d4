use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::blocks::Classified;
use crate::parsing::indent::classify_indent;

/// List items: bullets (`- ` / `+ `), ordered (`1. `) and bare indented
/// continuations. All three consume leading indent units first.

static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([-+]) (.*)$").expect("invalid bullet pattern"));

static ORDERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\. (.*)$").expect("invalid ordered pattern"));

pub(crate) fn try_match_bullet(text: &str) -> Option<Classified> {
    let (indent, consumed) = classify_indent(text);
    let caps = BULLET.captures(&text[consumed..])?;
    Some(Classified::BulletItem {
        indent,
        marker: caps[1].chars().next()?,
        text: caps[2].to_string(),
    })
}

pub(crate) fn try_match_ordered(text: &str) -> Option<Classified> {
    let (indent, consumed) = classify_indent(text);
    let caps = ORDERED.captures(&text[consumed..])?;
    Some(Classified::OrderedItem {
        indent,
        number: caps[1].parse().ok()?,
        text: caps[2].to_string(),
    })
}

pub(crate) fn try_match_indented(text: &str) -> Option<Classified> {
    let (indent, consumed) = classify_indent(text);
    if indent.is_empty() {
        return None;
    }
    Some(Classified::IndentedItem {
        indent,
        text: text[consumed..].to_string(),
    })
}
