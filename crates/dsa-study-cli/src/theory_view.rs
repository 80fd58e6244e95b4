use dsa_study_engine::{
    RenderedBlock,
    parsing::inline::{Segment, plain_text},
    render::TableView,
};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Lays rendered theory out as terminal lines, one blank line between blocks.
pub fn theory_lines(blocks: &[RenderedBlock]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for block in blocks {
        push_block(&mut lines, block);
        lines.push(Line::default());
    }
    lines
}

fn push_block(lines: &mut Vec<Line<'static>>, block: &RenderedBlock) {
    match block {
        RenderedBlock::Paragraph(segments) => {
            lines.extend(split_lines(segments).into_iter().map(Line::from));
        }
        RenderedBlock::Heading(segments) => lines.push(heading(segments, Color::Cyan)),
        RenderedBlock::List { ordered, items } => {
            for (i, item) in items.iter().enumerate() {
                let marker = if *ordered {
                    format!("{}. ", i + 1)
                } else {
                    "• ".to_string()
                };
                let indent = " ".repeat(marker.chars().count());
                let mut item_lines = split_lines(item).into_iter();
                let mut first = vec![Span::styled(marker, Style::default().fg(Color::DarkGray))];
                first.extend(item_lines.next().unwrap_or_default());
                lines.push(Line::from(first));
                // Continuations hang under the item text, not the marker
                for mut rest in item_lines {
                    if let Some(lead) = rest.first_mut() {
                        lead.content = lead.content.trim_start().to_string().into();
                    }
                    rest.insert(0, Span::raw(indent.clone()));
                    lines.push(Line::from(rest));
                }
            }
        }
        RenderedBlock::Table(table) => lines.extend(table_lines(table)),
        RenderedBlock::Code { lang, code } => {
            let style = Style::default().fg(Color::Green);
            if let Some(lang) = lang {
                lines.push(Line::from(Span::styled(
                    format!("[{lang}]"),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            for code_line in code.lines() {
                lines.push(Line::from(Span::styled(format!("  {code_line}"), style)));
            }
        }
        RenderedBlock::Section { heading: h, body } => {
            lines.push(heading(h, Color::Magenta));
            push_block(lines, body);
        }
    }
}

fn heading(segments: &[Segment], color: Color) -> Line<'static> {
    let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    Line::from(Span::styled(plain_text(segments), style))
}

/// Styled spans grouped by line; a segment containing `\n` is cut there.
fn split_lines(segments: &[Segment]) -> Vec<Vec<Span<'static>>> {
    let mut lines = Vec::new();
    let mut current = Vec::new();
    for segment in segments {
        let style = segment_style(segment);
        for (i, part) in segment.text.split('\n').enumerate() {
            if i > 0 {
                lines.push(std::mem::take(&mut current));
            }
            if !part.is_empty() {
                current.push(Span::styled(part.to_string(), style));
            }
        }
    }
    lines.push(current);
    lines
}

fn segment_style(segment: &Segment) -> Style {
    let mut style = Style::default();
    if segment.style.code {
        style = style.fg(Color::Green);
    }
    if segment.style.big_o {
        style = style.fg(Color::Yellow);
    }
    if segment.style.strong {
        style = style.add_modifier(Modifier::BOLD);
    }
    if segment.style.emphasis {
        style = style.add_modifier(Modifier::ITALIC);
    }
    style
}

/// Column-aligned rows; cells are flattened to plain text for width.
fn table_lines(table: &TableView) -> Vec<Line<'static>> {
    let header: Vec<String> = table.header.iter().map(|c| plain_text(c)).collect();
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|r| r.iter().map(|c| plain_text(c)).collect())
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|c| c.chars().count()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let render_row = |cells: &[String], style: Style| {
        let text = cells
            .iter()
            .zip(&widths)
            .map(|(c, &w)| format!("{c:<w$}"))
            .collect::<Vec<_>>()
            .join(" │ ");
        Line::from(Span::styled(text, style))
    };

    let mut lines = vec![render_row(
        &header,
        Style::default().add_modifier(Modifier::BOLD),
    )];
    let rule = widths
        .iter()
        .map(|&w| "─".repeat(w))
        .collect::<Vec<_>>()
        .join("─┼─");
    lines.push(Line::from(Span::styled(
        rule,
        Style::default().fg(Color::DarkGray),
    )));
    lines.extend(rows.iter().map(|r| render_row(r, Style::default())));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsa_study_engine::{parse_theory_str, render_theory};
    use pretty_assertions::assert_eq;
    use ratatui::{Terminal, backend::TestBackend, widgets::Paragraph};

    fn text_of(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn lays_out_every_shape() {
        let blocks = render_theory(&parse_theory_str(
            "**Queues**\n\nFIFO in O(1).\n\n**Ops**\n1. enqueue\n2. dequeue\n\n| op | cost |\n|---|---|\n| peek | O(1) |\n\n```rust\nq.push_back(1);\n```",
        ));
        assert_eq!(
            text_of(&theory_lines(&blocks)),
            vec![
                "Queues",
                "",
                "FIFO in O(1).",
                "",
                "Ops",
                "1. enqueue",
                "2. dequeue",
                "",
                "op   │ cost",
                "─────┼─────",
                "peek │ O(1)",
                "",
                "[rust]",
                "  q.push_back(1);",
                "",
            ]
        );
    }

    fn draw(lines: Vec<Line<'static>>, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| f.render_widget(Paragraph::new(lines), f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                let row: String = (0..width).map(|x| buffer[(x, y)].symbol()).collect();
                row.trim_end().to_string()
            })
            .collect()
    }

    #[test]
    fn multi_line_blocks_keep_their_line_breaks() {
        let blocks = render_theory(&parse_theory_str("line one\nline two\n\n1. a\n   cont"));
        let rows = draw(theory_lines(&blocks), 30, 8);
        assert_eq!(
            rows[..5].to_vec(),
            vec!["line one", "line two", "", "1. a", "   cont"]
        );
    }

    #[test]
    fn styles_survive_line_splits() {
        let lines = theory_lines(&render_theory(&parse_theory_str("first\nthen O(n)")));
        assert_eq!(text_of(&lines[..2]), vec!["first", "then O(n)"]);
        let big_o = lines[1]
            .spans
            .iter()
            .find(|s| s.content == "O(n)")
            .unwrap();
        assert_eq!(big_o.style.fg, Some(Color::Yellow));
    }

    #[test]
    fn big_o_is_highlighted() {
        let lines = theory_lines(&render_theory(&parse_theory_str("costs O(n)")));
        let big_o = lines[0]
            .spans
            .iter()
            .find(|s| s.content == "O(n)")
            .unwrap();
        assert_eq!(big_o.style.fg, Some(Color::Yellow));
    }
}
