//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Italic`**: `DELIMITER = "_"`
//! - **`Bold`**: `DELIMITER = "**"`
//! - **`CodeSpan`**: `DELIMITER = "`"` - contents are never re-split
//! - **`Image`**: `![alt](url)`
//! - **`Link`**: `[text](url)`, never directly after a `!`
//!
//! All delimiter constants and patterns live here, not in the tokenizer.

pub mod code_span;
pub mod emphasis;
pub mod image;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Bold, Italic};
pub use image::Image;
pub use link::Link;
