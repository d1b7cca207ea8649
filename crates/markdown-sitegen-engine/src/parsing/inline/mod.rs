//! # Inline Tokenizer
//!
//! Splits a line of text into typed [`TextSpan`]s with a fixed sequence of
//! passes. Each pass only looks at spans that are still plain, so a span typed
//! by an earlier pass is never split again.
//!
//! ## Passes
//!
//! 1. italic (`_`)
//! 2. bold (`**`)
//! 3. code (`` ` ``)
//! 4. image (`![alt](url)`)
//! 5. link (`[text](url)`, not preceded by `!`)
//!
//! Emphasis does not nest: `_a **b**_` is one italic span whose text still
//! contains the asterisks.
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan` and `SpanKind`
//! - **`kinds`**: delimiter constants and image/link patterns
//! - **`parser`**: `tokenize()` and the individual passes

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{
    InlineError, extract_images, extract_links, split_delimiter, split_images, split_links,
    tokenize,
};
pub use types::{SpanKind, TextSpan};
