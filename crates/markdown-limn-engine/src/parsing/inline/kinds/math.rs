use crate::parsing::inline::scanner::InlineMatch;
use crate::parsing::inline::types::{Mark, MarkSet, MathPart, Run, SpecClass};

/// Unicode minus sign substituted for ASCII hyphen inside math spans.
pub(crate) const MINUS: char = '\u{2212}';

/// `$math$` span. The span as a whole is opaque to the main tokenizer;
/// a secondary pass splits the inner text into presentational sub-runs.
pub(crate) fn try_match(text: &str) -> Option<InlineMatch> {
    let rest = text.strip_prefix('$')?;
    let close = rest.find('$')?;
    if close == 0 {
        return None;
    }
    let inner = &rest[..close];

    let mut runs = vec![Run::spec("$", SpecClass::Math)];
    runs.extend(sub_tokenize(inner));
    runs.push(Run::spec("$", SpecClass::Math));

    Some(InlineMatch::Opaque {
        runs,
        consumed: close + 2,
    })
}

fn part_of(c: char) -> Option<MathPart> {
    if c.is_ascii_digit() {
        Some(MathPart::Number)
    } else if c.is_alphabetic() {
        // Covers Latin and Greek letters alike.
        Some(MathPart::Word)
    } else if matches!(c, '(' | ')' | '[' | ']' | '{' | '}') {
        Some(MathPart::Bracket)
    } else if matches!(c, '_' | '^' | '.') {
        Some(MathPart::Operand)
    } else {
        None
    }
}

/// Splits math-span text into sub-runs by character class.
///
/// ASCII hyphens are rewritten to the Unicode minus sign first. Characters
/// with no sub-classification carry only the math mark.
pub(crate) fn sub_tokenize(inner: &str) -> Vec<Run> {
    let substituted = inner.replace('-', &MINUS.to_string());

    let mut runs = Vec::new();
    let mut buf = String::new();
    let mut current: Option<MathPart> = None;
    let mut started = false;

    let flush = |runs: &mut Vec<Run>, buf: &mut String, part: Option<MathPart>| {
        if buf.is_empty() {
            return;
        }
        let mut marks = MarkSet::of(Mark::Math);
        if let Some(part) = part {
            marks.insert(Mark::MathPart(part));
        }
        runs.push(Run::marked(std::mem::take(buf), marks));
    };

    for c in substituted.chars() {
        let part = part_of(c);
        if started && part != current {
            flush(&mut runs, &mut buf, current);
        }
        current = part;
        started = true;
        buf.push(c);
    }
    flush(&mut runs, &mut buf, current);

    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn math_span_splits_into_parts() {
        let Some(InlineMatch::Opaque { runs, consumed }) = try_match("$x^2$") else {
            panic!("expected opaque match");
        };
        assert_eq!(consumed, 5);
        // $ x ^ 2 $
        assert_eq!(runs.len(), 5);
        assert!(runs[1].marks.contains(&Mark::MathPart(MathPart::Word)));
        assert!(runs[2].marks.contains(&Mark::MathPart(MathPart::Operand)));
        assert!(runs[3].marks.contains(&Mark::MathPart(MathPart::Number)));
    }

    #[test]
    fn hyphen_becomes_minus_sign() {
        let runs = sub_tokenize("a-b");
        let joined: String = runs.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(joined, "a\u{2212}b");
    }

    #[test]
    fn greek_letters_are_words() {
        let runs = sub_tokenize("λ+1");
        assert_eq!(runs[0].text, "λ");
        assert!(runs[0].marks.contains(&Mark::MathPart(MathPart::Word)));
        // `+` has no sub-class; it carries only the math mark.
        assert!(!runs[1].marks.iter().any(|m| matches!(m, Mark::MathPart(_))));
        assert!(runs[1].marks.contains(&Mark::Math));
    }

    #[test]
    fn consecutive_same_class_chars_share_a_run() {
        let runs = sub_tokenize("123+abc");
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0].text, "123");
        assert_eq!(runs[2].text, "abc");
    }

    #[test]
    fn empty_math_span_does_not_match() {
        assert!(try_match("$$").is_none());
    }
}
