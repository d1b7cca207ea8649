use std::sync::OnceLock;

use regex::Regex;

use super::Image;

/// Link inline type: `[text](url)`.
///
/// A bracket directly preceded by [`Image::MARKER`] belongs to an image and is
/// never taken as a link.
pub struct Link;

impl Link {
    fn pattern() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| {
            Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid link regex")
        })
    }

    /// Returns every `(text, url)` pair in `text` that is not an image, left to right.
    pub fn extract(text: &str) -> Vec<(String, String)> {
        Self::pattern()
            .captures_iter(text)
            .filter(|caps| {
                let start = caps.get(0).map_or(0, |m| m.start());
                !text[..start].ends_with(Image::MARKER)
            })
            .map(|caps| (caps[1].to_string(), caps[2].to_string()))
            .collect()
    }

    /// Rebuilds the markdown source of a link.
    pub fn markup(text: &str, url: &str) -> String {
        format!("[{text}]({url})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect()
    }

    #[test]
    fn extracts_links_in_order() {
        let text = "This is text with a link [to google](https://www.google.com) and [to youtube](https://www.youtube.com)";
        assert_eq!(
            Link::extract(text),
            pairs(&[
                ("to google", "https://www.google.com"),
                ("to youtube", "https://www.youtube.com"),
            ])
        );
    }

    #[test]
    fn skips_images_mixed_with_links() {
        let text = "a link [to google](https://www.google.com) and an image ![rick roll](https://i.imgur.com/aKaOqIh.gif) and another link [to youtube](https://www.youtube.com) and another image ![obi wan](https://i.imgur.com/fJRm4Vk.jpeg)";
        assert_eq!(
            Link::extract(text),
            pairs(&[
                ("to google", "https://www.google.com"),
                ("to youtube", "https://www.youtube.com"),
            ])
        );
    }

    #[test]
    fn link_at_start_of_text() {
        assert_eq!(
            Link::extract("[home](/) is here"),
            pairs(&[("home", "/")])
        );
    }
}
