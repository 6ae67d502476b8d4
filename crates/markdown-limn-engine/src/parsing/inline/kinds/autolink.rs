use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::inline::scanner::InlineMatch;
use crate::parsing::inline::types::{Mark, MarkSet, Run};

/// Bare URLs, emails and `#tags` decorate the literal text in place:
/// they add a link mark but no spec runs.

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s<>()\[\]]+").expect("invalid url pattern"));

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)+")
        .expect("invalid email pattern")
});

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[A-Za-z][A-Za-z0-9_/-]*").expect("invalid tag pattern"));

fn decorate(text: &str, href: String) -> InlineMatch {
    InlineMatch::Opaque {
        runs: vec![Run::marked(
            text,
            MarkSet::of(Mark::Link { href, class: None }),
        )],
        consumed: text.len(),
    }
}

pub(crate) fn url(text: &str) -> Option<InlineMatch> {
    let found = URL.find(text)?;
    let literal = found.as_str();
    Some(decorate(literal, literal.to_string()))
}

pub(crate) fn email(text: &str) -> Option<InlineMatch> {
    let found = EMAIL.find(text)?;
    let literal = found.as_str();
    Some(decorate(literal, format!("mailto:{literal}")))
}

pub(crate) fn tag(text: &str) -> Option<InlineMatch> {
    let found = TAG.find(text)?;
    let literal = found.as_str();
    let name = &literal[1..];
    Some(decorate(literal, format!("tag:{name}")))
}
