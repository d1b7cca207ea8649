use std::sync::OnceLock;

use regex::Regex;

/// ATX heading block type: `# Title` through `###### Title`.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    fn pattern() -> &'static Regex {
        static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        HEADING_REGEX.get_or_init(|| Regex::new(r"^(#{1,6})\s").expect("Invalid heading regex"))
    }

    /// Returns the heading level and the text after the marker and one
    /// whitespace character, or `None` if `block` is not a heading.
    ///
    /// Seven or more `#` never form a heading.
    pub fn parse(block: &str) -> Option<(u8, &str)> {
        let caps = Self::pattern().captures(block)?;
        let marker = caps.get(1)?;
        let whole = caps.get(0)?;
        let level = u8::try_from(marker.len()).ok()?;
        Some((level, &block[whole.end()..]))
    }
}
