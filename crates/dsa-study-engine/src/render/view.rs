use crate::parsing::{
    blocks::{Block, kinds::HeadingMarker},
    inline::{Segment, styled},
    table::{TableModel, parse_table},
};

/// Display tree for one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedBlock {
    Paragraph(Vec<Segment>),
    Heading(Vec<Segment>),
    List {
        ordered: bool,
        items: Vec<Vec<Segment>>,
    },
    Table(TableView),
    Code {
        lang: Option<String>,
        code: String,
    },
    /// A heading with the list, table or code it introduces.
    Section {
        heading: Vec<Segment>,
        body: Box<RenderedBlock>,
    },
}

/// A parsed table with every cell inline-formatted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableView {
    pub header: Vec<Vec<Segment>>,
    pub rows: Vec<Vec<Vec<Segment>>>,
}

impl From<TableModel> for TableView {
    fn from(model: TableModel) -> Self {
        let cells = |row: Vec<String>| row.iter().map(|c| styled(c)).collect::<Vec<_>>();
        TableView {
            header: cells(model.header),
            rows: model.rows.into_iter().map(cells).collect(),
        }
    }
}

pub fn render_theory(blocks: &[Block]) -> Vec<RenderedBlock> {
    blocks.iter().map(render_block).collect()
}

pub fn render_block(block: &Block) -> RenderedBlock {
    match block {
        Block::Paragraph { text } => match HeadingMarker::standalone(text) {
            Some(inner) => RenderedBlock::Heading(styled(inner.trim())),
            None => RenderedBlock::Paragraph(styled(text)),
        },
        Block::OrderedList { items } => list(true, items),
        Block::UnorderedList { items } => list(false, items),
        Block::Table { text } => RenderedBlock::Table(parse_table(text).into()),
        Block::Code { lang, code } => RenderedBlock::Code {
            lang: lang.clone(),
            code: code.clone(),
        },
        Block::HeadingList {
            heading,
            items,
            ordered,
        } => section(heading, list(*ordered, items)),
        Block::HeadingTable { heading, table } => {
            section(heading, RenderedBlock::Table(parse_table(table).into()))
        }
        Block::HeadingCode {
            heading,
            lang,
            code,
        } => section(
            heading,
            RenderedBlock::Code {
                lang: lang.clone(),
                code: code.clone(),
            },
        ),
    }
}

/// Inline text of a heading line, with a wrapping `**…**` pair removed.
pub fn heading_segments(heading: &str) -> Vec<Segment> {
    match HeadingMarker::standalone(heading) {
        Some(inner) => styled(inner.trim()),
        None => styled(heading.trim()),
    }
}

fn list(ordered: bool, items: &[String]) -> RenderedBlock {
    RenderedBlock::List {
        ordered,
        items: items.iter().map(|i| styled(i)).collect(),
    }
}

fn section(heading: &str, body: RenderedBlock) -> RenderedBlock {
    RenderedBlock::Section {
        heading: heading_segments(heading),
        body: Box::new(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::plain_text;
    use pretty_assertions::assert_eq;

    #[test]
    fn standalone_heading_paragraph() {
        let rendered = render_block(&Block::Paragraph {
            text: "**Time Complexity**".into(),
        });
        assert_eq!(
            rendered,
            RenderedBlock::Heading(vec![Segment::plain("Time Complexity")])
        );
    }

    #[test]
    fn bold_prose_stays_a_paragraph() {
        let rendered = render_block(&Block::Paragraph {
            text: "**Note:** arrays are fixed size".into(),
        });
        assert!(matches!(rendered, RenderedBlock::Paragraph(_)));
    }

    #[test]
    fn heading_list_becomes_section() {
        let rendered = render_block(&Block::HeadingList {
            heading: "**Heading**".into(),
            items: vec!["item1".into(), "`item2`".into()],
            ordered: false,
        });
        let RenderedBlock::Section { heading, body } = rendered else {
            panic!("expected a section");
        };
        assert_eq!(plain_text(&heading), "Heading");
        let RenderedBlock::List { ordered, items } = *body else {
            panic!("expected a list body");
        };
        assert!(!ordered);
        assert_eq!(items.len(), 2);
        assert!(items[1][0].style.code);
    }

    #[test]
    fn table_cells_are_formatted() {
        let rendered = render_block(&Block::Table {
            text: "| op | cost |\n|---|---|\n| get | O(1) |".into(),
        });
        let RenderedBlock::Table(table) = rendered else {
            panic!("expected a table");
        };
        assert_eq!(table.header.len(), 2);
        assert!(table.rows[0][1][0].style.big_o);
    }
}
