use dsa_study_engine::{
    QuizSession,
    parsing::inline::styled,
    quiz::{Accent, Category, Phase, QuizReport},
};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

pub fn accent_color(category: Category) -> Color {
    match category.accent() {
        Accent::Blue => Color::Blue,
        Accent::Green => Color::Green,
        Accent::Amber => Color::Yellow,
        Accent::Purple => Color::Magenta,
    }
}

pub fn quiz_lines(session: &QuizSession) -> Vec<Line<'static>> {
    match (session.phase(), session.current()) {
        (Phase::Complete, _) | (_, None) => report_lines(&session.report()),
        (phase, Some(card)) => {
            let mut lines = vec![
                Line::from(vec![
                    Span::styled(
                        format!("[{}] ", card.category.label()),
                        Style::default().fg(accent_color(card.category)),
                    ),
                    Span::raw(format!(
                        "Question {} of {}  ·  score {}/{}",
                        session.position() + 1,
                        session.len(),
                        session.score(),
                        session.answered()
                    )),
                ]),
                Line::default(),
                Line::from(inline_spans(&card.question, Modifier::BOLD)),
                Line::default(),
            ];

            for (i, choice) in card.choices.iter().enumerate() {
                let style = match (phase, session.selected()) {
                    (Phase::Revealed, _) if card.is_correct(i) => {
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
                    }
                    (Phase::Revealed, Some(picked)) if picked == i => {
                        Style::default().fg(Color::Red)
                    }
                    _ => Style::default(),
                };
                lines.push(Line::from(vec![
                    Span::styled(format!("  {}. ", i + 1), Style::default().fg(Color::DarkGray)),
                    Span::styled(choice.clone(), style),
                ]));
            }

            if phase == Phase::Revealed {
                let verdict = match session.selected() {
                    Some(picked) if card.is_correct(picked) => {
                        Span::styled("Correct!", Style::default().fg(Color::Green))
                    }
                    _ => Span::styled("Not quite.", Style::default().fg(Color::Red)),
                };
                lines.push(Line::default());
                lines.push(Line::from(verdict));
                if !card.explanation.is_empty() {
                    lines.push(Line::from(inline_spans(
                        &card.explanation,
                        Modifier::empty(),
                    )));
                }
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    "Enter/Space: next question",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            lines
        }
    }
}

fn report_lines(report: &QuizReport) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "Quiz complete",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(format!(
            "Score: {}/{} ({}%)",
            report.score, report.answered, report.percent
        )),
        Line::default(),
    ];
    for c in &report.categories {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<16}", c.category.label()),
                Style::default().fg(accent_color(c.category)),
            ),
            Span::raw(format!("{}/{} ({}%)", c.correct, c.total, c.percent)),
        ]));
    }
    if report.cards == 0 {
        lines.push(Line::from("No cards match this filter."));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "r: retry  ·  f: change category",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

/// Question text may carry inline markup such as `code` or O(n).
fn inline_spans(text: &str, base: Modifier) -> Vec<Span<'static>> {
    styled(text)
        .into_iter()
        .map(|s| {
            let mut style = Style::default().add_modifier(base);
            if s.style.code {
                style = style.fg(Color::Green);
            }
            if s.style.big_o {
                style = style.fg(Color::Yellow);
            }
            Span::styled(s.text, style)
        })
        .collect()
}
