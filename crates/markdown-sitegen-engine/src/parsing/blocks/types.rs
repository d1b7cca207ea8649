/// The type of a markdown block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// Default when no other block type matches.
    Paragraph,
    /// `#` to `######`.
    Heading {
        /// 1 to 6, from the number of `#`.
        level: u8,
    },
    /// Fenced with ```` ``` ````; no inline parsing inside.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ...
    OrderedList,
}

/// A trimmed, non-empty chunk of a document together with its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub text: &'a str,
    pub block_type: BlockType,
}
