use crate::html::{HtmlNode, spans_to_nodes};
use crate::parsing::inline::{InlineError, TextSpan, tokenize};

use super::{
    kinds::{CodeBlock, Heading, OrderedList, Paragraph, Quote, UnorderedList},
    types::{Block, BlockType},
};

/// Builds the HTML subtree for one block.
///
/// Code blocks keep their contents verbatim; every other block type runs its
/// text through the inline tokenizer.
pub fn build_block(block: &Block<'_>) -> Result<HtmlNode, InlineError> {
    let text = block.text;
    match block.block_type {
        BlockType::Heading { level } => {
            let (_, heading) = Heading::parse(text).unwrap_or((level, text));
            Ok(HtmlNode::parent(format!("h{level}"), inline_nodes(heading)?))
        }
        BlockType::Code => {
            let code = HtmlNode::from(TextSpan::plain(CodeBlock::inner(text)));
            Ok(HtmlNode::parent(
                "pre",
                vec![HtmlNode::parent("code", vec![code])],
            ))
        }
        BlockType::Quote => Ok(HtmlNode::parent(
            "blockquote",
            inline_nodes(&Quote::text(text))?,
        )),
        BlockType::UnorderedList => list("ul", UnorderedList::items(text)),
        BlockType::OrderedList => list("ol", OrderedList::items(text)),
        BlockType::Paragraph => Ok(HtmlNode::parent(
            "p",
            inline_nodes(&Paragraph::text(text))?,
        )),
    }
}

fn inline_nodes(text: &str) -> Result<Vec<HtmlNode>, InlineError> {
    Ok(spans_to_nodes(tokenize(text)?))
}

fn list(tag: &str, items: Vec<&str>) -> Result<HtmlNode, InlineError> {
    let children = items
        .into_iter()
        .map(|item| Ok(HtmlNode::parent("li", inline_nodes(item)?)))
        .collect::<Result<Vec<_>, InlineError>>()?;
    Ok(HtmlNode::parent(tag, children))
}
