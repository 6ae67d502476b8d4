use crate::parsing::blocks::Classified;

/// Paragraph: the universal fallback. Classification never fails because
/// any text is a valid paragraph.
pub(crate) fn fallback(text: &str) -> Classified {
    Classified::Paragraph {
        text: text.to_string(),
    }
}
