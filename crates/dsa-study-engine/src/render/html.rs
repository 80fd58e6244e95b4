use crate::parsing::{
    blocks::{Block, kinds::HeadingMarker},
    inline::format_inline,
    table::parse_table,
};

/// Renders blocks as an HTML fragment, one element per line.
pub fn render_html(blocks: &[Block]) -> String {
    let mut out = String::new();
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_block(&mut out, block);
    }
    out
}

fn write_block(out: &mut String, block: &Block) {
    match block {
        Block::Paragraph { text } => match HeadingMarker::standalone(text) {
            Some(inner) => out.push_str(&format!("<h3>{}</h3>", format_inline(inner.trim()))),
            None => out.push_str(&format!("<p>{}</p>", format_inline(text))),
        },
        Block::OrderedList { items } => write_list(out, true, items),
        Block::UnorderedList { items } => write_list(out, false, items),
        Block::Table { text } => write_table(out, text),
        Block::Code { lang, code } => write_code(out, lang.as_deref(), code),
        Block::HeadingList {
            heading,
            items,
            ordered,
        } => {
            open_section(out, heading);
            write_list(out, *ordered, items);
            out.push_str("</section>");
        }
        Block::HeadingTable { heading, table } => {
            open_section(out, heading);
            write_table(out, table);
            out.push_str("</section>");
        }
        Block::HeadingCode {
            heading,
            lang,
            code,
        } => {
            open_section(out, heading);
            write_code(out, lang.as_deref(), code);
            out.push_str("</section>");
        }
    }
}

fn open_section(out: &mut String, heading: &str) {
    let text = HeadingMarker::standalone(heading).unwrap_or(heading).trim();
    out.push_str(&format!("<section><h4>{}</h4>", format_inline(text)));
}

fn write_list(out: &mut String, ordered: bool, items: &[String]) {
    let tag = if ordered { "ol" } else { "ul" };
    out.push_str(&format!("<{tag}>"));
    for item in items {
        out.push_str(&format!("<li>{}</li>", format_inline(item)));
    }
    out.push_str(&format!("</{tag}>"));
}

fn write_table(out: &mut String, text: &str) {
    let table = parse_table(text);
    out.push_str("<table><thead><tr>");
    for cell in &table.header {
        out.push_str(&format!("<th>{}</th>", format_inline(cell)));
    }
    out.push_str("</tr></thead><tbody>");
    for row in &table.rows {
        out.push_str("<tr>");
        for cell in row {
            out.push_str(&format!("<td>{}</td>", format_inline(cell)));
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
}

fn write_code(out: &mut String, lang: Option<&str>, code: &str) {
    match lang {
        Some(lang) => out.push_str(&format!(
            "<pre><code class=\"language-{}\">",
            html_escape::encode_double_quoted_attribute(lang)
        )),
        None => out.push_str("<pre><code>"),
    }
    out.push_str(&html_escape::encode_text(code));
    out.push_str("</code></pre>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_theory_str;

    #[test]
    fn renders_topic() {
        let blocks = parse_theory_str(
            "**Stacks**\n\nLIFO with `push` and `pop`.\n\n**Costs**\n- push O(1)\n- pop O(1)\n\n```rust\nlet mut s: Vec<i32> = vec![];\n```\n\n| op | cost |\n|---|---|\n| peek | O(1) |",
        );
        insta::assert_snapshot!(render_html(&blocks), @r#"
        <h3>Stacks</h3>
        <p>LIFO with <code>push</code> and <code>pop</code>.</p>
        <section><h4>Costs</h4><ul><li>push <span class="big-o">O(1)</span></li><li>pop <span class="big-o">O(1)</span></li></ul></section>
        <pre><code class="language-rust">let mut s: Vec&lt;i32&gt; = vec![];</code></pre>
        <table><thead><tr><th>op</th><th>cost</th></tr></thead><tbody><tr><td>peek</td><td><span class="big-o">O(1)</span></td></tr></tbody></table>
        "#);
    }

    #[test]
    fn heading_code_and_table_sections() {
        let blocks = parse_theory_str(
            "**Example**\n```\nx = 1\n```\n\n**Ragged**\n| a | b |\n| 1 |",
        );
        insta::assert_snapshot!(render_html(&blocks), @r#"
        <section><h4>Example</h4><pre><code>x = 1</code></pre></section>
        <section><h4>Ragged</h4><table><thead><tr><th>a</th><th>b</th></tr></thead><tbody><tr><td>1</td><td></td></tr></tbody></table></section>
        "#);
    }

    #[test]
    fn ordered_list() {
        let html = render_html(&[Block::OrderedList {
            items: vec!["*first*".into(), "second".into()],
        }]);
        assert_eq!(html, "<ol><li><em>first</em></li><li>second</li></ol>");
    }

    #[test]
    fn code_language_is_attribute_escaped() {
        let html = render_html(&[Block::Code {
            lang: Some("c\"x".into()),
            code: "a < b".into(),
        }]);
        assert_eq!(
            html,
            "<pre><code class=\"language-c&quot;x\">a &lt; b</code></pre>"
        );
    }
}
