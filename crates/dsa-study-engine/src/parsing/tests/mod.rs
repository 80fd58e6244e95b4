//! Pipeline tests for theory parsing: splitter round-trip, classifier purity,
//! and end-to-end shapes.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use xi_rope::Rope;

use crate::parsing::{
    blocks::{Block, classify_block},
    inline::InlineNode,
    parse_inline_for_block, parse_theory, parse_theory_str, snapshot, split_blocks,
};

fn concat_spans(text: &str) -> String {
    let rope = Rope::from(text);
    split_blocks(&rope)
        .map(|b| rope.slice_to_cow(b.span.range()).into_owned())
        .collect()
}

/// Lines drawn from every shape the grammar knows, plus blanks and fences.
fn theory_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        Just("```".to_string()),
        Just("```rust".to_string()),
        Just("| a | b |".to_string()),
        Just("|---|---|".to_string()),
        Just("- item".to_string()),
        Just("1. step".to_string()),
        Just("**Heading**".to_string()),
        "[a-zA-Z `*()O]{0,12}",
    ]
}

fn theory_text() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(theory_line(), 0..24),
        prop_oneof![Just("\n"), Just("\r\n")],
        any::<bool>(),
    )
        .prop_map(|(lines, eol, trailing)| {
            let mut text = lines.join(eol);
            if trailing {
                text.push_str(eol);
            }
            text
        })
}

proptest! {
    #[test]
    fn split_spans_reconstruct_input(text in theory_text()) {
        let has_content = text.lines().any(|l| !l.trim().is_empty());
        let rebuilt = concat_spans(&text);
        if has_content {
            prop_assert_eq!(rebuilt, text);
        } else {
            prop_assert_eq!(rebuilt, "");
        }
    }

    #[test]
    fn split_respects_invariants(text in theory_text()) {
        let rope = Rope::from(text.as_str());
        let raw: Vec<_> = split_blocks(&rope).collect();
        snapshot::invariants(&rope, &raw);
    }

    #[test]
    fn classification_is_deterministic(text in theory_text()) {
        let rope = Rope::from(text.as_str());
        for raw in split_blocks(&rope) {
            let body = raw.text(&rope);
            prop_assert_eq!(classify_block(&body), classify_block(&body));
        }
    }
}

#[test]
fn round_trip_with_fences_and_trailing_blanks() {
    let text = "\n\nIntro line\n\n```\nlet a = 1;\n\nlet b = 2;\n```\n\n- x\n- y\n\n\n";
    assert_eq!(concat_spans(text), text);
}

#[test]
fn empty_document() {
    assert!(parse_theory_str("").is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(parse_theory_str("\n\n  \n").is_empty());
}

#[test]
fn topic_with_every_shape() {
    let text = "\
Arrays store elements contiguously.

**Operations**
- access O(1)
- insert O(n)

**Steps**
1. find slot
2. shift right

| op | cost |
|---|---|
| get | O(1) |

```rust
let v = vec![1, 2, 3];
```

**Example**
```python
xs = [1, 2]
```

**Costs**
| op | cost |
| push | O(1) |

1. alone

- loose

**Summary**";

    let kinds: Vec<_> = parse_theory_str(text)
        .iter()
        .map(Block::kind_name)
        .collect();
    assert_eq!(
        kinds,
        vec![
            "Paragraph",
            "HeadingList",
            "HeadingList",
            "Table",
            "Code",
            "HeadingCode",
            "HeadingTable",
            "OrderedList",
            "UnorderedList",
            "Paragraph",
        ]
    );
}

#[test]
fn unclosed_fence_is_one_code_block() {
    let blocks = parse_theory_str("```js\nconst a = 1;\n\nconst b = 2;");
    assert_eq!(
        blocks,
        vec![Block::Code {
            lang: Some("js".into()),
            code: "const a = 1;\n\nconst b = 2;".into(),
        }]
    );
}

#[test]
fn paragraph_inline_spans_are_absolute() {
    let text = "intro\n\n  see `vec` here";
    let rope = Rope::from(text);
    let parsed = parse_theory(&rope);
    let inlines = parse_inline_for_block(&rope, &parsed.blocks[1]);
    let code = inlines
        .iter()
        .find(|n| matches!(n, InlineNode::CodeSpan { .. }))
        .unwrap();
    assert_eq!(&text[code.span().range()], "`vec`");
}

#[test]
fn non_paragraph_blocks_have_no_inline_nodes() {
    let rope = Rope::from("- a\n- b");
    let parsed = parse_theory(&rope);
    assert!(parse_inline_for_block(&rope, &parsed.blocks[0]).is_empty());
}
