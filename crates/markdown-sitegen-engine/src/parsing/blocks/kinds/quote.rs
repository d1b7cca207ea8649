/// Blockquote block type: every line starts with `>`.
pub struct Quote;

impl Quote {
    pub const PREFIX: char = '>';

    pub fn matches(block: &str) -> bool {
        block.lines().all(|line| line.starts_with(Self::PREFIX))
    }

    /// The quoted text with prefixes removed, lines joined by single spaces.
    pub fn text(block: &str) -> String {
        block
            .lines()
            .map(|line| line.strip_prefix(Self::PREFIX).unwrap_or(line).trim())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
