use crate::parsing::inline::scanner::InlineMatch;
use crate::parsing::inline::types::{Mark, MarkSet, Run, SpecClass};

/// Inline code span. The captured span is opaque: nothing inside the
/// backticks is reinterpreted.
pub struct CodeSpan;

impl CodeSpan {
    pub const TICK: char = '`';
}

pub(crate) fn try_match(text: &str) -> Option<InlineMatch> {
    let rest = text.strip_prefix(CodeSpan::TICK)?;
    let close = rest.find(CodeSpan::TICK)?;
    if close == 0 {
        return None;
    }
    let inner = &rest[..close];
    Some(InlineMatch::Opaque {
        runs: vec![
            Run::spec("`", SpecClass::Code),
            Run::marked(inner, MarkSet::of(Mark::Code)),
            Run::spec("`", SpecClass::Code),
        ],
        consumed: close + 2,
    })
}
