use std::sync::OnceLock;

use regex::Regex;

/// Image inline type: `![alt](url)`.
pub struct Image;

impl Image {
    pub const MARKER: char = '!';

    fn pattern() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| {
            Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid image regex")
        })
    }

    /// Returns every `(alt, url)` pair in `text`, left to right.
    pub fn extract(text: &str) -> Vec<(String, String)> {
        Self::pattern()
            .captures_iter(text)
            .map(|caps| (caps[1].to_string(), caps[2].to_string()))
            .collect()
    }

    /// Rebuilds the markdown source of an image.
    pub fn markup(alt: &str, url: &str) -> String {
        format!("![{alt}]({url})")
    }
}
