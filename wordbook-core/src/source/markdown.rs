//! Markdown → content blocks
//!
//! The document is parsed as GitHub-flavoured Markdown and only its
//! top-level nodes are classified, by plain text content:
//!
//! ```text
//! ## Spread 1 / Setext ---  → Heading
//! [메모: 연습]               → Paragraph (soft breaks kept as '\n')
//! | word | first | later |  → Table (header row dropped)
//! ```
//!
//! Inline markup (emphasis, code spans, links) is reduced to its text.
//! Code, thematic breaks, block quotes, lists and raw HTML become `Other`.

use ::markdown::mdast::Node;
use ::markdown::ParseOptions;

use crate::types::ContentBlock;

/// Classify a document into content blocks
///
/// A document the parser rejects yields no blocks and a warning.
pub fn classify(text: &str) -> Vec<ContentBlock> {
    let root = match ::markdown::to_mdast(text, &ParseOptions::gfm()) {
        Ok(root) => root,
        Err(e) => {
            log::warn!("Failed to parse markdown source: {e}");
            return Vec::new();
        }
    };

    root.children()
        .map(|children| children.iter().map(classify_node).collect())
        .unwrap_or_default()
}

fn classify_node(node: &Node) -> ContentBlock {
    match node {
        Node::Heading(heading) => ContentBlock::heading(heading.depth, plain_text(node)),
        Node::Paragraph(_) => ContentBlock::paragraph(plain_text(node)),
        Node::Table(table) => ContentBlock::Table {
            // GFM 表格的首行总是表头
            rows: table.children.iter().skip(1).map(table_row).collect(),
        },
        _ => ContentBlock::Other,
    }
}

fn table_row(row: &Node) -> Vec<String> {
    row.children()
        .map(|cells| cells.iter().map(plain_text).collect())
        .unwrap_or_default()
}

/// Text content of a node with inline markup stripped
fn plain_text(node: &Node) -> String {
    node.to_string().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_spread_document() {
        let doc = "\
# 표지

첫 줄
둘째 줄

## Spread 1

[메모: 연습]

| 단어 | 첫 발음 | 발전 |
| --- | :---: | --- |
| cat | 캣 | |
| dog | 더그 | 덕 |
";
        let blocks = classify(doc);
        assert_eq!(
            blocks,
            vec![
                ContentBlock::heading(1, "표지"),
                ContentBlock::paragraph("첫 줄\n둘째 줄"),
                ContentBlock::heading(2, "Spread 1"),
                ContentBlock::paragraph("[메모: 연습]"),
                ContentBlock::table([vec!["cat", "캣", ""], vec!["dog", "더그", "덕"]]),
            ]
        );
    }

    #[test]
    fn setext_headings_start_spreads() {
        let blocks = classify("Spread 1\n========\n\nSpread 2\n--------\n");
        assert_eq!(
            blocks,
            vec![
                ContentBlock::heading(1, "Spread 1"),
                ContentBlock::heading(2, "Spread 2"),
            ]
        );
    }

    #[test]
    fn inline_markup_is_reduced_to_text() {
        let doc = "\
## *Spread* 1

| word | first |
| --- | --- |
| **cat** | `캣` |
| [dog](https://example.com) | 더그 |
";
        let blocks = classify(doc);
        assert_eq!(
            blocks,
            vec![
                ContentBlock::heading(2, "Spread 1"),
                ContentBlock::table([["cat", "캣"], ["dog", "더그"]]),
            ]
        );
    }

    #[test]
    fn rows_without_delimiter_are_a_paragraph() {
        let blocks = classify("| cat | 캣 |");
        assert_eq!(blocks, vec![ContentBlock::paragraph("| cat | 캣 |")]);
    }

    #[test]
    fn code_rules_lists_and_quotes_are_other() {
        let blocks = classify("```\n## not a heading\n```\n\n***\n\n- item\n\n> quote");
        assert_eq!(blocks, vec![ContentBlock::Other; 4]);
    }
}
