use crate::parsing::inline::scanner::InlineMatch;
use crate::parsing::inline::types::{Mark, MarkSet, Run, SpecClass};

/// `%%comment%%` span. Opaque like code: the inner text is literal.
pub(crate) const DELIM: &str = "%%";

pub(crate) fn try_match(text: &str) -> Option<InlineMatch> {
    let rest = text.strip_prefix(DELIM)?;
    let close = rest.find(DELIM)?;
    if close == 0 {
        return None;
    }
    let inner = &rest[..close];
    Some(InlineMatch::Opaque {
        runs: vec![
            Run::spec(DELIM, SpecClass::Comment),
            Run::marked(inner, MarkSet::of(Mark::Comment)),
            Run::spec(DELIM, SpecClass::Comment),
        ],
        consumed: close + 2 * DELIM.len(),
    })
}
