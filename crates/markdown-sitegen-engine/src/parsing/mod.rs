pub mod blocks;
pub mod inline;

use crate::html::{HtmlNode, RenderError};

use blocks::{build_block, parse_blocks};
use inline::InlineError;

/// Tag of the element wrapping a whole document.
pub const DOCUMENT_TAG: &str = "div";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Inline(#[from] InlineError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Converts a markdown document into a single `<div>` tree, one child per block.
///
/// Windows line endings are normalized first so blank-line splitting works
/// on either kind of file.
///
/// # Errors
/// - [`ConvertError::Inline`] if any block has an unpaired inline delimiter
/// - [`ConvertError::Render`] with [`RenderError::NoChildren`] if the document has no blocks
pub fn convert(markdown: &str) -> Result<HtmlNode, ConvertError> {
    let markdown = markdown.replace("\r\n", "\n");

    let children = parse_blocks(&markdown)
        .iter()
        .map(build_block)
        .collect::<Result<Vec<_>, _>>()?;

    if children.is_empty() {
        return Err(RenderError::NoChildren {
            tag: Some(DOCUMENT_TAG.to_string()),
        }
        .into());
    }

    Ok(HtmlNode::parent(DOCUMENT_TAG, children))
}

/// Converts and renders a markdown document to an HTML fragment.
pub fn render_document(markdown: &str) -> Result<String, ConvertError> {
    Ok(convert(markdown)?.render()?)
}
