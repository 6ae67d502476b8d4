use super::Classified;
use super::kinds;

type Matcher = fn(&str) -> Option<Classified>;

/// Block rules in priority order. The first rule that matches wins; the
/// ordering resolves ambiguity deterministically (an indented bullet is a
/// bullet before it is generic indentation) and is a correctness property
/// tested in isolation from tree mechanics.
pub(crate) const RULES: &[(&str, Matcher)] = &[
    ("heading", kinds::heading::try_match),
    ("code-fence", kinds::code_fence::try_match),
    ("blockquote", kinds::block_quote::try_match),
    ("bullet-item", kinds::list_item::try_match_bullet),
    ("ordered-item", kinds::list_item::try_match_ordered),
    ("indented-item", kinds::list_item::try_match_indented),
];

/// Runs the rule set over one line of flat text. Paragraph is the
/// universal fallback, so classification never fails.
pub fn first_match(text: &str) -> Classified {
    for (_, matcher) in RULES {
        if let Some(classified) = matcher(text) {
            return classified;
        }
    }
    kinds::paragraph::fallback(text)
}
