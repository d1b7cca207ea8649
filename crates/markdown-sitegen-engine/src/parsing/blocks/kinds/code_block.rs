/// Fenced code block type: a block that opens and closes with ```` ``` ````.
pub struct CodeBlock;

impl CodeBlock {
    pub const FENCE: &'static str = "```";

    /// Characters removed from the start of the block: the fence and the
    /// newline after it.
    const LEADING: usize = 4;

    pub fn matches(block: &str) -> bool {
        block.len() >= 2 * Self::FENCE.len()
            && block.starts_with(Self::FENCE)
            && block.ends_with(Self::FENCE)
    }

    /// The code between the fences, kept verbatim including its final newline.
    ///
    /// A block too short to hold any code yields `""`.
    pub fn inner(block: &str) -> &str {
        let start = block
            .char_indices()
            .nth(Self::LEADING)
            .map_or(block.len(), |(i, _)| i);
        let end = block.len().saturating_sub(Self::FENCE.len());
        if start >= end { "" } else { &block[start..end] }
    }
}
