use xi_rope::Rope;

use crate::parsing::blocks::RawBlock;

/// Panics if the raw blocks break any splitter invariant.
pub fn check(rope: &Rope, blocks: &[RawBlock]) {
    let n = rope.len();
    let mut expected_start = 0;
    for b in blocks {
        assert!(
            b.span.start <= b.span.end && b.span.end <= n,
            "block span out of bounds: {:?} (rope len: {})",
            b.span,
            n
        );
        assert!(
            b.body.start >= b.span.start && b.body.end <= b.span.end,
            "body not contained in block span: body {:?}, span {:?}",
            b.body,
            b.span
        );
        assert!(!b.body.is_empty(), "empty block body at {:?}", b.body);
        assert_eq!(
            b.span.start, expected_start,
            "block spans are not contiguous at {:?}",
            b.span
        );
        expected_start = b.span.end;
    }
    if !blocks.is_empty() {
        assert_eq!(expected_start, n, "last block does not reach end of input");
    }
}
