use crate::parsing::inline::scanner::InlineMatch;
use crate::parsing::inline::types::{LinkClass, Mark, MarkSet, Run, SpecClass};

/// Internal URI scheme prefix that note links and embedded links resolve
/// their targets against.
pub const NOTE_SCHEME: &str = "note://";

const WIKI_OPEN: &str = "[[";
const EMBED_OPEN: &str = "![[";
const WIKI_CLOSE: &str = "]]";
const ALIAS: char = '|';

/// `![[target]]` / `![[target|alias]]`.
pub(crate) fn embedded(text: &str) -> Option<InlineMatch> {
    wiki(text, EMBED_OPEN, SpecClass::EmbedLink, LinkClass::Embed)
}

/// `[[target]]` / `[[target|alias]]`.
pub(crate) fn note(text: &str) -> Option<InlineMatch> {
    wiki(text, WIKI_OPEN, SpecClass::NoteLink, LinkClass::Internal)
}

fn wiki(
    text: &str,
    open: &'static str,
    class: SpecClass,
    link_class: LinkClass,
) -> Option<InlineMatch> {
    let rest = text.strip_prefix(open)?;
    let close = rest.find(WIKI_CLOSE)?;
    if close == 0 {
        return None;
    }
    let body = &rest[..close];
    let (target, alias) = match body.find(ALIAS) {
        Some(pipe) => (&body[..pipe], Some(&body[pipe + 1..])),
        None => (body, None),
    };
    if target.is_empty() {
        return None;
    }

    let link = Mark::Link {
        href: format!("{NOTE_SCHEME}{target}"),
        class: Some(link_class),
    };

    let mut runs = vec![Run::spec(open, class)];
    runs.push(Run::marked(target, MarkSet::of(link.clone())));
    if let Some(alias) = alias {
        runs.push(Run::spec(ALIAS, SpecClass::Alias));
        if !alias.is_empty() {
            runs.push(Run::marked(alias, MarkSet::of(link)));
        }
    }
    runs.push(Run::spec(WIKI_CLOSE, class));

    Some(InlineMatch::Opaque {
        runs,
        consumed: open.len() + close + WIKI_CLOSE.len(),
    })
}

/// `[text]` with no `(` following: decorated as a link to nowhere.
pub(crate) fn empty(text: &str) -> Option<InlineMatch> {
    let rest = text.strip_prefix('[')?;
    if rest.starts_with('[') {
        return None;
    }
    let close = rest.find(']')?;
    if close == 0 {
        return None;
    }
    if rest[close + 1..].starts_with('(') {
        return None;
    }
    let label = &rest[..close];

    let link = Mark::Link {
        href: "#".to_string(),
        class: Some(LinkClass::Empty),
    };
    Some(InlineMatch::Opaque {
        runs: vec![
            Run::spec("[", SpecClass::EmptyLink),
            Run::marked(label, MarkSet::of(link)),
            Run::spec("]", SpecClass::EmptyLink),
        ],
        consumed: close + 2,
    })
}

/// `[text](href)`. The `](href)` tail is a single spec run so the target
/// can be hidden as one piece.
pub(crate) fn inline(text: &str) -> Option<InlineMatch> {
    let rest = text.strip_prefix('[')?;
    if rest.starts_with('[') {
        return None;
    }
    let close = rest.find(']')?;
    if close == 0 {
        return None;
    }
    let tail = rest[close + 1..].strip_prefix('(')?;
    let end = tail.find(')')?;

    let label = &rest[..close];
    let href_text = &tail[..end];
    let href = if href_text.is_empty() {
        "#".to_string()
    } else {
        href_text.to_string()
    };

    let link = Mark::Link { href, class: None };
    Some(InlineMatch::Opaque {
        runs: vec![
            Run::spec("[", SpecClass::Link),
            Run::marked(label, MarkSet::of(link)),
            Run::spec(format!("]({href_text})"), SpecClass::Link),
        ],
        consumed: 1 + close + 2 + end + 1,
    })
}
