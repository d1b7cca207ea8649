use super::{
    kinds::{Bold, CodeSpan, Image, Italic, Link},
    types::{SpanKind, TextSpan},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InlineError {
    #[error("invalid markdown: unterminated `{delimiter}` in {text:?}")]
    MalformedMarkdown { delimiter: String, text: String },
    #[error("internal error: matched {markup:?} not found in {text:?}")]
    MatchNotFound { markup: String, text: String },
}

/// Tokenizes a line of text into typed spans.
///
/// # Pass order
/// Italic, bold, code, image, link. Each pass only rewrites spans the
/// previous passes left as [`SpanKind::Plain`]; reordering the passes
/// changes the output for adjacent delimiters.
///
/// # Errors
/// [`InlineError::MalformedMarkdown`] if any delimiter is left unpaired.
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>, InlineError> {
    let spans = vec![TextSpan::plain(text)];
    let spans = split_delimiter(spans, Italic::DELIMITER, SpanKind::Italic)?;
    let spans = split_delimiter(spans, Bold::DELIMITER, SpanKind::Bold)?;
    let spans = split_delimiter(spans, CodeSpan::DELIMITER, SpanKind::Code)?;
    let spans = split_images(spans)?;
    split_links(spans)
}

/// Splits every plain span on `delimiter`, typing the enclosed parts as `kind`.
///
/// Parts at even indices stay plain, parts at odd indices become `kind`.
/// Empty parts (adjacent delimiters, or a delimiter at either end) are dropped.
///
/// # Panics
/// Panics if `kind` is [`SpanKind::Link`] or [`SpanKind::Image`]; those spans
/// carry a target and come from [`split_links`] and [`split_images`] instead.
pub fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>, InlineError> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let parts: Vec<&str> = span.content().split(delimiter).collect();
        // A paired delimiter always leaves an odd number of parts.
        if parts.len() % 2 == 0 {
            return Err(InlineError::MalformedMarkdown {
                delimiter: delimiter.to_string(),
                text: span.content().to_string(),
            });
        }

        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            let part_kind = if i % 2 == 0 { span.kind() } else { kind };
            out.push(TextSpan::new(part, part_kind));
        }
    }
    Ok(out)
}

/// Returns the `(alt, url)` pair of every `![alt](url)` in `text`, in order.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    Image::extract(text)
}

/// Returns the `(text, url)` pair of every `[text](url)` in `text` that is not an image.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    Link::extract(text)
}

/// Splits `![alt](url)` images out of every plain span.
pub fn split_images(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>, InlineError> {
    split_matches(spans, Image::extract, Image::markup, TextSpan::image)
}

/// Splits `[text](url)` links out of every plain span, leaving images alone.
pub fn split_links(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>, InlineError> {
    split_matches(spans, Link::extract, Link::markup, TextSpan::link)
}

fn split_matches(
    spans: Vec<TextSpan>,
    extract: fn(&str) -> Vec<(String, String)>,
    markup: fn(&str, &str) -> String,
    make: fn(String, String) -> TextSpan,
) -> Result<Vec<TextSpan>, InlineError> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let matches = extract(span.content());
        if matches.is_empty() {
            out.push(span);
            continue;
        }

        let mut rest = span.content();
        for (text, url) in matches {
            let source = markup(&text, &url);
            let Some((before, after)) = rest.split_once(source.as_str()) else {
                return Err(InlineError::MatchNotFound {
                    markup: source,
                    text: rest.to_string(),
                });
            };
            if !before.is_empty() {
                out.push(TextSpan::plain(before));
            }
            out.push(make(text, url));
            rest = after;
        }
        if !rest.is_empty() {
            out.push(TextSpan::plain(rest));
        }
    }
    Ok(out)
}
