use markdown_limn_engine::{
    Block, BlockKind, Doc, Mark, classify_and_construct, construct_blocks, tokenize,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn serialize(block: &Block) -> String {
    block.source_text()
}

#[rstest]
#[case("# Title")]
#[case("## Second")]
#[case("###### Sixth")]
#[case("> quote")]
#[case("- bullet")]
#[case("+ plus bullet")]
#[case("1. first")]
#[case("42. forty-second")]
#[case("\t- nested bullet")]
#[case("    - space-indented bullet")]
#[case("    indented")]
#[case("\t\tdouble indented")]
#[case("plain paragraph")]
#[case("")]
fn single_line_round_trip(#[case] input: &str) {
    assert_eq!(serialize(&classify_and_construct(input)), input);
}

#[rstest]
#[case("**bold** middle *em*")]
#[case("~~strike~~ ==mark== __under__ _ital_")]
#[case("`co[[de]]` %%aside%% $f(x)$")]
#[case("[[note]] [[note|alias]] ![[embed]]")]
#[case("[label] [label](target) [label]()")]
#[case("https://host.tld/path user@host.tld #topic")]
#[case("broken **delims ~~ here")]
fn inline_decoration_round_trip(#[case] input: &str) {
    assert_eq!(serialize(&classify_and_construct(input)), input);
}

#[test]
fn document_round_trip() {
    let source = "# Notes\n\nintro paragraph\n- one\n- two\n\t- nested\n> quoted\n1. ordered";
    assert_eq!(Doc::from_markdown(source).to_markdown(), source);
}

#[test]
fn priority_bullet_before_ordered() {
    let block = classify_and_construct("- 1. x");
    assert_eq!(
        block.kind,
        BlockKind::BulletItem {
            depth: 0,
            marker: '-',
        }
    );
    assert_eq!(block.content_text(), "1. x");
}

#[test]
fn nesting_inner_run_carries_both_marks() {
    let runs = tokenize("**a *b* c**");
    let inner = runs.iter().find(|r| r.text == "b").expect("inner run");
    assert!(inner.marks.contains(&Mark::Strong));
    assert!(inner.marks.contains(&Mark::Em));
    for outer in ["a ", " c"] {
        let run = runs.iter().find(|r| r.text == outer).expect("outer run");
        assert!(run.marks.contains(&Mark::Strong));
        assert!(!run.marks.contains(&Mark::Em));
    }
}

#[test]
fn emphasis_boundary_is_not_greedy() {
    let runs = tokenize("*a* *b*");
    let em: Vec<&str> = runs
        .iter()
        .filter(|r| r.marks.contains(&Mark::Em))
        .map(|r| r.text.as_str())
        .collect();
    assert_eq!(em, vec!["a", "b"]);
}

#[test]
fn spec_offset_matches_materialized_spec_runs() {
    for input in ["# h", "> q", "- b", "3. o", "\t- n", "    i"] {
        let block = classify_and_construct(input);
        let spec_len: usize = block
            .runs
            .iter()
            .take_while(|r| r.marks.is_syntax())
            .map(|r| r.len())
            .sum();
        assert_eq!(block.spec_offset, spec_len, "input: {input}");
    }
}

#[test]
fn plain_text_is_kind_independent() {
    let blocks = construct_blocks("# same\n> same\n- same\n2. same");
    for block in blocks {
        assert_eq!(block.content_text(), "same");
    }
}

#[test]
fn fence_lines_stay_paragraphs() {
    let blocks = construct_blocks("```rust\nlet x = 1;\n```");
    for block in &blocks {
        assert_eq!(block.kind, BlockKind::Paragraph);
    }
    assert_eq!(
        Doc::from_blocks(blocks).to_markdown(),
        "```rust\nlet x = 1;\n```"
    );
}
