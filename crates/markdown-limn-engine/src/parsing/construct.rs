use crate::parsing::blocks::kinds::{BlockQuote, Heading};
use crate::parsing::blocks::{Block, BlockKind, Classified, classify_block};
use crate::parsing::indent::IndentUnit;
use crate::parsing::inline::{Mark, MarkSet, Run, SpecClass, normalize_runs, tokenize};

/// Builds the final decorated block for a classification outcome.
///
/// Kind-specific spec runs are prepended (heading hashes, quote prefix,
/// tab and marker runs for list items), `spec_offset` is set to their
/// total length, and the tokenized content runs follow. Pure
/// construction: no search, no mutation of existing nodes.
pub fn construct(classified: Classified) -> Block {
    match classified {
        Classified::Paragraph { text } => {
            Block::assemble(BlockKind::Paragraph, 0, normalize_runs(tokenize(&text)))
        }
        Classified::Heading { level, text } => with_spec(
            BlockKind::Heading { level },
            vec![Run::spec(Heading::spec_text(level), SpecClass::Heading)],
            &text,
        ),
        Classified::BlockQuote { text } => with_spec(
            BlockKind::BlockQuote,
            vec![Run::spec(BlockQuote::PREFIX, SpecClass::Quote)],
            &text,
        ),
        Classified::BulletItem {
            indent,
            marker,
            text,
        } => {
            let mut lead = tab_runs(&indent);
            lead.push(marker_run(format!("{marker} ")));
            with_spec(
                BlockKind::BulletItem {
                    depth: indent.len(),
                    marker,
                },
                lead,
                &text,
            )
        }
        Classified::OrderedItem {
            indent,
            number,
            text,
        } => {
            let mut lead = tab_runs(&indent);
            lead.push(marker_run(format!("{number}. ")));
            with_spec(
                BlockKind::OrderedItem {
                    depth: indent.len(),
                    number,
                },
                lead,
                &text,
            )
        }
        Classified::IndentedItem { indent, text } => with_spec(
            BlockKind::IndentedItem {
                depth: indent.len(),
            },
            tab_runs(&indent),
            &text,
        ),
    }
}

/// Classifies and constructs one line of flat text in a single step.
/// This is the canonical reclassification primitive composed by the
/// split and merge operations.
pub fn classify_and_construct(text: &str) -> Block {
    construct(classify_block(text))
}

/// Classifies and constructs every line of a multi-line text.
pub fn construct_blocks(text: &str) -> Vec<Block> {
    text.split('\n').map(classify_and_construct).collect()
}

fn tab_runs(indent: &[IndentUnit]) -> Vec<Run> {
    indent
        .iter()
        .enumerate()
        .map(|(index, unit)| Run::marked(unit.as_str(), MarkSet::of(Mark::Tab { index })))
        .collect()
}

fn marker_run(literal: String) -> Run {
    Run::marked(literal, MarkSet::of(Mark::ListMarker))
}

fn with_spec(kind: BlockKind, lead: Vec<Run>, content: &str) -> Block {
    let spec_offset = lead.iter().map(Run::len).sum();
    let mut runs = lead;
    let content_runs = tokenize(content);
    if !content_runs.is_empty() {
        runs.extend(normalize_runs(content_runs));
    }
    Block::assemble(kind, spec_offset, runs)
}
