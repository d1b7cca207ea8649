/// Paragraph block type.
///
/// Paragraphs have no markers - they are the fallback when no other block
/// type matches.
pub struct Paragraph;

impl Paragraph {
    /// The paragraph's lines joined by single spaces.
    pub fn text(block: &str) -> String {
        block.lines().collect::<Vec<_>>().join(" ")
    }
}
