use serde::{Deserialize, Serialize};

/// One recognized indentation increment at the start of a list line.
///
/// Only two spellings count as an indent unit: a run of exactly four
/// spaces, or a single literal tab. Anything else terminates indent
/// classification and is folded into the line's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndentUnit {
    Spaces,
    Tab,
}

impl IndentUnit {
    /// The literal text this unit occupies in the source.
    pub fn as_str(self) -> &'static str {
        match self {
            IndentUnit::Spaces => "    ",
            IndentUnit::Tab => "\t",
        }
    }

    /// Byte length of the unit's literal text.
    pub fn len(self) -> usize {
        self.as_str().len()
    }

    /// Recovers a unit from its literal text, if it is one.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "    " => Some(IndentUnit::Spaces),
            "\t" => Some(IndentUnit::Tab),
            _ => None,
        }
    }
}

/// Classifies the leading whitespace of `text` into indent units.
///
/// Scans left to right, consuming four-space runs and single tabs.
/// Returns the units and the total byte length consumed. Whitespace that
/// does not complete a unit is left unconsumed. Never fails.
pub fn classify_indent(text: &str) -> (Vec<IndentUnit>, usize) {
    let bytes = text.as_bytes();
    let mut units = Vec::new();
    let mut i = 0usize;

    loop {
        if bytes.get(i) == Some(&b'\t') {
            units.push(IndentUnit::Tab);
            i += 1;
        } else if bytes[i..].starts_with(b"    ") {
            units.push(IndentUnit::Spaces);
            i += 4;
        } else {
            break;
        }
    }

    (units, i)
}
