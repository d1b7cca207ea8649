use crate::parsing::inline::{SpanKind, TextSpan};

use super::{Attributes, HtmlNode};

impl From<TextSpan> for HtmlNode {
    fn from(span: TextSpan) -> Self {
        let target = span.target().unwrap_or_default().to_string();
        let content = span.content().to_string();
        match span.kind() {
            SpanKind::Plain => HtmlNode::text(content),
            SpanKind::Bold => HtmlNode::leaf("b", content),
            SpanKind::Italic => HtmlNode::leaf("i", content),
            SpanKind::Code => HtmlNode::leaf("code", content),
            SpanKind::Link => {
                HtmlNode::leaf_with("a", content, Attributes::new().with("href", target))
            }
            SpanKind::Image => HtmlNode::image(target, content),
        }
    }
}

/// Converts a sequence of spans into sibling nodes.
pub fn spans_to_nodes(spans: Vec<TextSpan>) -> Vec<HtmlNode> {
    spans.into_iter().map(HtmlNode::from).collect()
}
