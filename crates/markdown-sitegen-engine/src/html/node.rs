use super::attributes::Attributes;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("leaf node <{}> has no value", tag.as_deref().unwrap_or("text"))]
    EmptyValue { tag: Option<String> },
    #[error("parent node has no tag")]
    MissingTag,
    #[error("parent node <{}> has no children", tag.as_deref().unwrap_or("?"))]
    NoChildren { tag: Option<String> },
}

/// A node of the HTML tree built from a markdown document.
///
/// Each node owns its children; there is no sharing between subtrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Text, optionally wrapped in a single element. Without a tag the value
    /// renders as raw text.
    Leaf {
        tag: Option<String>,
        value: String,
        attributes: Attributes,
    },
    /// An element whose content is the concatenation of its children.
    Parent {
        tag: Option<String>,
        children: Vec<HtmlNode>,
        attributes: Attributes,
    },
    /// A self-contained `<img>` element with no inner text.
    Image { src: String, alt: String },
}

impl HtmlNode {
    /// Untagged text.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn leaf_with(
        tag: impl Into<String>,
        value: impl Into<String>,
        attributes: Attributes,
    ) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attributes,
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: Some(tag.into()),
            children,
            attributes: Attributes::new(),
        }
    }

    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        HtmlNode::Image {
            src: src.into(),
            alt: alt.into(),
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } | HtmlNode::Parent { tag, .. } => tag.as_deref(),
            HtmlNode::Image { .. } => Some("img"),
        }
    }

    /// The node's attributes in the order they are rendered.
    pub fn attributes(&self) -> Attributes {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => {
                attributes.clone()
            }
            HtmlNode::Image { src, alt } => Attributes::new().with("src", src).with("alt", alt),
        }
    }

    /// Renders the attributes as ` key="value"` pairs, or `""` when there are none.
    pub fn attributes_to_html(&self) -> String {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => {
                attributes.to_html()
            }
            HtmlNode::Image { .. } => self.attributes().to_html(),
        }
    }

    /// Renders the subtree to an HTML string.
    ///
    /// Text values are emitted verbatim; only attribute values are escaped.
    ///
    /// # Errors
    /// - [`RenderError::EmptyValue`] for a leaf without text
    /// - [`RenderError::NoChildren`] for a parent without children
    /// - [`RenderError::MissingTag`] for a parent without a tag
    pub fn render(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<(), RenderError> {
        match self {
            HtmlNode::Leaf { tag, value, .. } => {
                if value.is_empty() {
                    return Err(RenderError::EmptyValue { tag: tag.clone() });
                }
                match tag {
                    None => out.push_str(value),
                    Some(tag) => {
                        open_tag(out, tag, &self.attributes_to_html());
                        out.push_str(value);
                        close_tag(out, tag);
                    }
                }
            }
            HtmlNode::Parent { tag, children, .. } => {
                if children.is_empty() {
                    return Err(RenderError::NoChildren { tag: tag.clone() });
                }
                let Some(tag) = tag else {
                    return Err(RenderError::MissingTag);
                };
                open_tag(out, tag, &self.attributes_to_html());
                for child in children {
                    child.render_into(out)?;
                }
                close_tag(out, tag);
            }
            HtmlNode::Image { .. } => {
                open_tag(out, "img", &self.attributes_to_html());
            }
        }
        Ok(())
    }
}

fn open_tag(out: &mut String, tag: &str, attrs: &str) {
    out.push('<');
    out.push_str(tag);
    out.push_str(attrs);
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
