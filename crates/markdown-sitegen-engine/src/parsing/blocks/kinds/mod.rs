//! Block-specific types that own their markers and know how to pull the
//! inline text out of a block.

pub mod code_block;
pub mod heading;
pub mod list;
pub mod paragraph;
pub mod quote;

pub use code_block::CodeBlock;
pub use heading::Heading;
pub use list::{OrderedList, UnorderedList};
pub use paragraph::Paragraph;
pub use quote::Quote;
