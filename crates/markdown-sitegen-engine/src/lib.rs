pub mod html;
pub mod io;
pub mod page;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use html::{Attributes, HtmlNode, RenderError};
pub use io::{IoError, publish_static};
pub use page::{
    FailurePolicy, GeneratedPage, GenerationReport, PageError, extract_title, fill_template,
    generate_page, generate_pages_recursive, render_page,
};
pub use parsing::{
    ConvertError, convert,
    inline::{InlineError, SpanKind, TextSpan, extract_images, extract_links, tokenize},
    render_document,
};
