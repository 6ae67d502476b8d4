use serde::{Deserialize, Serialize};

/// Class of a spec run, naming the construct whose delimiter it carries.
///
/// The class travels with the delimiter text so a presentation layer can
/// style or hide each kind of syntax punctuation independently without
/// losing the characters themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecClass {
    Heading,
    Quote,
    Strong,
    Em,
    Italic,
    Strike,
    Highlight,
    Underline,
    Code,
    Comment,
    Math,
    Link,
    NoteLink,
    EmbedLink,
    EmptyLink,
    /// The `|` separating target from display text in a note link.
    Alias,
}

impl SpecClass {
    /// CSS-like class name for presentation.
    pub fn css_class(self) -> &'static str {
        match self {
            SpecClass::Heading => "heading",
            SpecClass::Quote => "quote",
            SpecClass::Strong => "strong",
            SpecClass::Em => "em",
            SpecClass::Italic => "italic",
            SpecClass::Strike => "strike",
            SpecClass::Highlight => "highlight",
            SpecClass::Underline => "underline",
            SpecClass::Code => "code",
            SpecClass::Comment => "comment",
            SpecClass::Math => "math",
            SpecClass::Link => "link",
            SpecClass::NoteLink => "note-link",
            SpecClass::EmbedLink => "embed-link",
            SpecClass::EmptyLink => "empty-link",
            SpecClass::Alias => "alias",
        }
    }
}

/// Flavor of a link mark beyond a plain `[text](href)` link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkClass {
    /// `[[target]]` note link resolved against the internal scheme.
    Internal,
    /// `![[target]]` embedded link.
    Embed,
    /// `[text]` with no target; href falls back to `#`.
    Empty,
}

/// Presentational sub-classification of one run inside a math span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MathPart {
    Number,
    Word,
    Bracket,
    Operand,
}

/// An attribute tag attached to a run of text, orthogonal to block
/// structure.
///
/// `Spec`, `Tab` and `ListMarker` tag syntax punctuation; they never
/// co-occur with emphasis or link marks on the same run. A character
/// position is either decoration punctuation or user content, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    Spec(SpecClass),
    Strong,
    Em,
    Italic,
    Strike,
    Highlight,
    Underline,
    Code,
    Comment,
    Math,
    /// Sub-highlight inside a math span; carries no serialized delimiters.
    MathPart(MathPart),
    Link {
        href: String,
        class: Option<LinkClass>,
    },
    /// One indent unit's literal text at the head of a list item.
    Tab {
        index: usize,
    },
    /// A list bullet or number literal, e.g. `- ` or `3. `.
    ListMarker,
}

impl Mark {
    /// True for marks that tag syntax text rather than user content.
    pub fn is_syntax(&self) -> bool {
        matches!(self, Mark::Spec(_) | Mark::Tab { .. } | Mark::ListMarker)
    }
}

/// An immutable set of marks carried by a run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MarkSet(Vec<Mark>);

impl MarkSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn of(mark: Mark) -> Self {
        Self(vec![mark])
    }

    /// Adds a mark unless already present.
    pub fn insert(&mut self, mark: Mark) {
        if !self.0.contains(&mark) {
            self.0.push(mark);
        }
    }

    pub fn with(mut self, mark: Mark) -> Self {
        self.insert(mark);
        self
    }

    pub fn contains(&self, mark: &Mark) -> bool {
        self.0.contains(mark)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if any mark in the set tags syntax text.
    pub fn is_syntax(&self) -> bool {
        self.0.iter().any(Mark::is_syntax)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mark> {
        self.0.iter()
    }
}

/// A maximal span of text carrying one set of marks.
///
/// Runs are never empty, with one exception: the sentinel run of an
/// otherwise empty placeholder block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    pub marks: MarkSet,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: MarkSet::new(),
        }
    }

    pub fn marked(text: impl Into<String>, marks: MarkSet) -> Self {
        Self {
            text: text.into(),
            marks,
        }
    }

    /// A delimiter run tagged with its construct's spec class.
    pub fn spec(text: impl Into<String>, class: SpecClass) -> Self {
        Self {
            text: text.into(),
            marks: MarkSet::of(Mark::Spec(class)),
        }
    }

    /// The zero-content placeholder run of an empty block.
    pub fn sentinel() -> Self {
        Self {
            text: String::new(),
            marks: MarkSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Merges adjacent runs carrying identical mark sets and drops empty runs.
///
/// Incremental construction is allowed to emit unnormalized sequences;
/// consumers complete the merge here. An input that normalizes to nothing
/// yields a single sentinel run so empty blocks keep their placeholder.
pub fn normalize_runs(runs: Vec<Run>) -> Vec<Run> {
    let mut out: Vec<Run> = Vec::with_capacity(runs.len());
    for run in runs {
        if run.is_empty() {
            continue;
        }
        match out.last_mut() {
            Some(prev) if prev.marks == run.marks => prev.text.push_str(&run.text),
            _ => out.push(run),
        }
    }
    if out.is_empty() {
        out.push(Run::sentinel());
    }
    out
}
