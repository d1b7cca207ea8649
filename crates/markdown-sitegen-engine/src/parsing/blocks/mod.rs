//! # Block Parsing
//!
//! Two-phase block parsing over a whole document.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** ([`to_blocks`]): the document is split on blank lines;
//!    each chunk is trimmed and empty chunks are dropped.
//!
//! 2. **Classification and construction** (`classify`, `builder`): each chunk
//!    gets a [`BlockType`] and is turned into an HTML subtree, with inline
//!    text handed to the inline tokenizer.
//!
//! ## Modules
//!
//! - **`types`**: `Block` and `BlockType`
//! - **`kinds`**: block-specific types owning their markers (Heading, CodeBlock, Quote, lists, Paragraph)
//! - **`classify`**: first-match-wins classification
//! - **`builder`**: `build_block` producing an `HtmlNode`
//!
//! ## Key Invariants
//!
//! - Blocks come out in document order
//! - Code blocks are raw zones: no inline parsing inside

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::build_block;
pub use classify::classify;
pub use types::{Block, BlockType};

/// Separator between blocks.
pub const BLANK_LINE: &str = "\n\n";

/// Splits a document into trimmed, non-empty blocks in document order.
pub fn to_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split(BLANK_LINE)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Splits and classifies a document in one go.
pub fn parse_blocks(markdown: &str) -> Vec<Block<'_>> {
    to_blocks(markdown).into_iter().map(Block::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn multiple_blank_lines_collapse() {
        assert_eq!(to_blocks("A\n\nB\n\n\nC"), vec!["A", "B", "C"]);
    }

    #[test]
    fn blocks_keep_inner_newlines() {
        let md = "
This is **bolded** paragraph

This is another paragraph with _italic_ text and `code` here
This is the same paragraph on a new line

- This is a list
- with items
";
        assert_eq!(
            to_blocks(md),
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with _italic_ text and `code` here\nThis is the same paragraph on a new line",
                "- This is a list\n- with items",
            ]
        );
    }

    #[test]
    fn whitespace_only_chunks_are_dropped() {
        assert_eq!(
            to_blocks("\n\n   \n\nonly\n\n\t\n\n"),
            vec!["only"]
        );
    }

    #[test]
    fn empty_document_has_no_blocks() {
        assert!(to_blocks("").is_empty());
        assert!(parse_blocks("\n\n\n").is_empty());
    }

    #[test]
    fn parse_blocks_classifies_in_order() {
        let types: Vec<BlockType> = parse_blocks("# H\n\ntext\n\n- a\n- b")
            .iter()
            .map(|b| b.block_type)
            .collect();
        assert_eq!(
            types,
            vec![
                BlockType::Heading { level: 1 },
                BlockType::Paragraph,
                BlockType::UnorderedList,
            ]
        );
    }
}
