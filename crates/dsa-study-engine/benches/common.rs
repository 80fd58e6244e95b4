// Shared by every bench target; each one uses a different subset.
#[allow(dead_code)]
pub fn generate_theory(topics: usize) -> String {
    let base = "**Binary Heaps**\n\nA complete tree where each parent is `<=` its children, giving O(1) peek.\n\n**Operations**\n- push O(log n)\n- pop O(log n)\n- peek O(1)\n\n**Steps**\n1. append at the end\n2. sift up while smaller than the parent\n\n| op | cost |\n|---|---|\n| push | O(log n) |\n| pop | O(log n) |\n\n**Example**\n```rust\nlet mut h = BinaryHeap::new();\n\nh.push(3);\n```\n\n";
    base.repeat(topics)
}

#[allow(dead_code)]
pub fn generate_inline_line(repeats: usize) -> String {
    "Use `Vec::push` for **amortized** O(1) appends, *not* `insert(0, x)` at O(n). "
        .repeat(repeats)
}
