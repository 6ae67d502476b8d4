use crate::parsing::inline::scanner::InlineMatch;
use crate::parsing::inline::types::{Mark, SpecClass};

/// Emphasis-family matchers. All of them are nestable: their inner text
/// is re-tokenized by the scanner before the outer mark is applied.

pub(crate) fn strong(text: &str) -> Option<InlineMatch> {
    paired(text, "**", Mark::Strong, SpecClass::Strong)
}

pub(crate) fn em(text: &str) -> Option<InlineMatch> {
    single(text, '*', Mark::Em, SpecClass::Em)
}

pub(crate) fn strike(text: &str) -> Option<InlineMatch> {
    paired(text, "~~", Mark::Strike, SpecClass::Strike)
}

pub(crate) fn highlight(text: &str) -> Option<InlineMatch> {
    paired(text, "==", Mark::Highlight, SpecClass::Highlight)
}

pub(crate) fn underline(text: &str) -> Option<InlineMatch> {
    paired(text, "__", Mark::Underline, SpecClass::Underline)
}

pub(crate) fn italic(text: &str) -> Option<InlineMatch> {
    single(text, '_', Mark::Italic, SpecClass::Italic)
}

/// Matches `<delim>inner<delim>` for a two-character delimiter.
fn paired(
    text: &str,
    delim: &'static str,
    mark: Mark,
    class: SpecClass,
) -> Option<InlineMatch> {
    let rest = text.strip_prefix(delim)?;
    let close = rest.find(delim)?;
    if close == 0 {
        return None;
    }
    Some(InlineMatch::Nestable {
        open: delim,
        inner: rest[..close].to_string(),
        close: delim,
        mark,
        class,
    })
}

/// Matches `<delim>inner<delim>` for a one-character delimiter, rejecting
/// delimiters adjacent to another copy of themselves so that e.g. a lone
/// `*..*` never claims half of a `**` pair.
fn single(text: &str, delim: char, mark: Mark, class: SpecClass) -> Option<InlineMatch> {
    let rest = text.strip_prefix(delim)?;
    if rest.starts_with(delim) {
        return None;
    }
    // The first closing candidate is the only one: the inner text of a
    // single-delimiter span cannot itself contain the delimiter.
    let close = rest.find(delim)?;
    if rest[close + delim.len_utf8()..].starts_with(delim) {
        return None;
    }
    let open: &'static str = match delim {
        '*' => "*",
        '_' => "_",
        _ => return None,
    };
    Some(InlineMatch::Nestable {
        open,
        inner: rest[..close].to_string(),
        close: open,
        mark,
        class,
    })
}
