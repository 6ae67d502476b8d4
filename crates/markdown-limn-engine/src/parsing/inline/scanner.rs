use super::kinds;
use super::types::{Mark, Run, SpecClass};

/// Recursion limit for nestable marks. Deeper nesting degrades to plain
/// text instead of recursing further.
pub(crate) const MAX_NEST_DEPTH: usize = 8;

/// One recognized inline construct at the head of the remaining input.
pub(crate) enum InlineMatch {
    /// Emphasis-family construct whose inner text is re-tokenized before
    /// the outer mark is applied to the resulting content runs.
    Nestable {
        open: &'static str,
        inner: String,
        close: &'static str,
        mark: Mark,
        class: SpecClass,
    },
    /// Construct emitted as prebuilt runs; its span is opaque.
    Opaque { runs: Vec<Run>, consumed: usize },
}

type Matcher = fn(&str) -> Option<InlineMatch>;

/// Inline rules in priority order. The first rule that matches at the
/// current scan position wins; ordering is a correctness property.
pub(crate) const RULES: &[(&str, Matcher)] = &[
    ("strong", kinds::emphasis::strong),
    ("em", kinds::emphasis::em),
    ("strike", kinds::emphasis::strike),
    ("highlight", kinds::emphasis::highlight),
    ("underline", kinds::emphasis::underline),
    ("italic", kinds::emphasis::italic),
    ("code", kinds::code_span::try_match),
    ("comment", kinds::comment::try_match),
    ("math", kinds::math::try_match),
    ("embedded-link", kinds::links::embedded),
    ("note-link", kinds::links::note),
    ("empty-link", kinds::links::empty),
    ("link", kinds::links::inline),
    ("url", kinds::autolink::url),
    ("email", kinds::autolink::email),
    ("tag", kinds::autolink::tag),
];

/// Tokenizes flat text into a sequence of decorated runs.
///
/// Greedy leftmost scan: at each position the rules are tried in order
/// and the first match is consumed. When nothing matches, exactly one
/// character is consumed as plain text, which guarantees termination on
/// any input; a malformed delimiter never blocks the rest of the line.
pub fn tokenize(text: &str) -> Vec<Run> {
    tokenize_at_depth(text, 0)
}

pub(crate) fn tokenize_at_depth(text: &str, depth: usize) -> Vec<Run> {
    let mut out = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    'scan: while !rest.is_empty() {
        if depth < MAX_NEST_DEPTH {
            for (_, matcher) in RULES {
                if let Some(found) = matcher(rest) {
                    flush_plain(&mut out, &mut plain);
                    let consumed = emit(&mut out, found, depth);
                    rest = &rest[consumed..];
                    continue 'scan;
                }
            }
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            plain.push(c);
            rest = chars.as_str();
        }
    }

    flush_plain(&mut out, &mut plain);
    out
}

fn flush_plain(out: &mut Vec<Run>, plain: &mut String) {
    if !plain.is_empty() {
        out.push(Run::plain(std::mem::take(plain)));
    }
}

/// Appends the runs of one match, recursing into nestable inner text.
/// Returns the number of bytes consumed from the input.
fn emit(out: &mut Vec<Run>, found: InlineMatch, depth: usize) -> usize {
    match found {
        InlineMatch::Nestable {
            open,
            inner,
            close,
            mark,
            class,
        } => {
            let consumed = open.len() + inner.len() + close.len();
            out.push(Run::spec(open, class));
            for mut run in tokenize_at_depth(&inner, depth + 1) {
                // Syntax runs of nested constructs stay pure punctuation;
                // only content runs pick up the outer mark.
                if !run.marks.is_syntax() {
                    run.marks.insert(mark.clone());
                }
                out.push(run);
            }
            out.push(Run::spec(close, class));
            consumed
        }
        InlineMatch::Opaque { runs, consumed } => {
            out.extend(runs);
            consumed
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parsing::inline::types::{LinkClass, MarkSet};

    fn joined(runs: &[Run]) -> String {
        runs.iter().map(|r| r.text.as_str()).collect()
    }

    #[test]
    fn plain_text_is_one_run() {
        let runs = tokenize("hello world");
        assert_eq!(runs, vec![Run::plain("hello world")]);
    }

    #[test]
    fn empty_input_yields_no_runs() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn strong_emits_spec_content_spec() {
        let runs = tokenize("**b**");
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0], Run::spec("**", SpecClass::Strong));
        assert_eq!(runs[1], Run::marked("b", MarkSet::of(Mark::Strong)));
        assert_eq!(runs[2], Run::spec("**", SpecClass::Strong));
    }

    #[test]
    fn nested_em_inside_strong_carries_both_marks() {
        let runs = tokenize("**a *b* c**");
        // ** a <*> b <*> c **, with the inner run carrying strong and em.
        let inner = runs
            .iter()
            .find(|r| r.text == "b")
            .expect("inner run should exist");
        assert!(inner.marks.contains(&Mark::Strong));
        assert!(inner.marks.contains(&Mark::Em));
        let outer = runs
            .iter()
            .find(|r| r.text == "a ")
            .expect("outer run should exist");
        assert!(outer.marks.contains(&Mark::Strong));
        assert!(!outer.marks.contains(&Mark::Em));
        assert_eq!(joined(&runs), "**a *b* c**");
    }

    #[test]
    fn sibling_em_spans_stay_independent() {
        let runs = tokenize("*a* *b*");
        let em_runs: Vec<_> = runs
            .iter()
            .filter(|r| r.marks.contains(&Mark::Em))
            .collect();
        assert_eq!(em_runs.len(), 2);
        assert_eq!(em_runs[0].text, "a");
        assert_eq!(em_runs[1].text, "b");
    }

    #[test]
    fn malformed_delimiter_consumes_one_char_and_continues() {
        let runs = tokenize("*not closed **but this is**");
        assert_eq!(joined(&runs), "*not closed **but this is**");
        assert!(
            runs.iter()
                .any(|r| r.text == "but this is" && r.marks.contains(&Mark::Strong))
        );
    }

    #[test]
    fn code_suppresses_inner_constructs() {
        let runs = tokenize("`**x**`");
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[1].text, "**x**");
        assert!(runs[1].marks.contains(&Mark::Code));
        assert!(!runs[1].marks.contains(&Mark::Strong));
    }

    #[test]
    fn link_inside_emphasis_keeps_link_mark() {
        let runs = tokenize("==see [[note]]==");
        let target = runs
            .iter()
            .find(|r| r.text == "note")
            .expect("target run should exist");
        assert!(target.marks.contains(&Mark::Highlight));
        assert!(target.marks.iter().any(|m| matches!(
            m,
            Mark::Link {
                class: Some(LinkClass::Internal),
                ..
            }
        )));
        // Nested delimiters stay pure syntax without the outer mark.
        let open = runs
            .iter()
            .find(|r| r.text == "[[")
            .expect("open delimiter should exist");
        assert!(!open.marks.contains(&Mark::Highlight));
    }

    #[test]
    fn rule_order_prefers_strong_over_em() {
        let runs = tokenize("**x**");
        assert!(runs.iter().any(|r| r.marks.contains(&Mark::Strong)));
        assert!(!runs.iter().any(|r| r.marks.contains(&Mark::Em)));
    }

    #[test]
    fn tag_and_url_decorate_without_spec_runs() {
        let runs = tokenize("see https://e.io and #tag");
        assert_eq!(joined(&runs), "see https://e.io and #tag");
        assert!(runs.iter().all(|r| !r.marks.is_syntax()));
        let links: Vec<_> = runs
            .iter()
            .filter(|r| r.marks.iter().any(|m| matches!(m, Mark::Link { .. })))
            .collect();
        assert_eq!(links.len(), 2);
    }

    #[test]
    fn pathological_nesting_terminates() {
        let depth = 32;
        let mut input = String::new();
        for _ in 0..depth {
            input.push_str("**");
        }
        input.push('x');
        for _ in 0..depth {
            input.push_str("**");
        }
        let runs = tokenize(&input);
        assert_eq!(joined(&runs), input);
    }

    #[test]
    fn every_tokenization_preserves_text() {
        for input in [
            "a **b** c",
            "~~x~~ ==y== __z__ _w_",
            "`code` %%note%% $x^2$",
            "[[a|b]] ![[c]] [d] [e](f)",
            "mail me at x@y.zz or #later",
            "*** ~~ == __ [ ]] ((",
        ] {
            assert_eq!(joined(&tokenize(input)), input, "input: {input}");
        }
    }
}
