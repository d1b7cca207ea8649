/// The kind of an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Text that isn't part of any special construct.
    Plain,
    /// `**bold**`
    Bold,
    /// `_italic_`
    Italic,
    /// `` `code` `` - rendered verbatim.
    Code,
    /// `[text](url)`
    Link,
    /// `![alt](url)`
    Image,
}

impl SpanKind {
    /// Whether spans of this kind carry a target URL.
    pub fn has_target(self) -> bool {
        matches!(self, SpanKind::Link | SpanKind::Image)
    }
}

/// A typed, immutable fragment of inline text.
///
/// `target` is present exactly when the kind is [`SpanKind::Link`] or
/// [`SpanKind::Image`]; the constructors are the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    content: String,
    kind: SpanKind,
    target: Option<String>,
}

impl TextSpan {
    /// Creates a span without a target.
    ///
    /// # Panics
    /// Panics if `kind` requires a target; use [`TextSpan::link`] or
    /// [`TextSpan::image`] for those.
    pub fn new(content: impl Into<String>, kind: SpanKind) -> Self {
        assert!(
            !kind.has_target(),
            "{kind:?} spans need a target, use TextSpan::link or TextSpan::image"
        );
        Self {
            content: content.into(),
            kind,
            target: None,
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Plain)
    }

    pub fn link(content: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: SpanKind::Link,
            target: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: alt.into(),
            kind: SpanKind::Image,
            target: Some(url.into()),
        }
    }

    /// The visible text (alt text for images).
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    /// The URL of a link or image.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}
