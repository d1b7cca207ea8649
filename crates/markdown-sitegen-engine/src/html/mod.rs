//! # HTML Node Model
//!
//! A small owned tree ([`HtmlNode`]) that renders itself to a string.
//! Leaves hold text, parents hold an ordered list of children, and images are
//! their own variant so an `<img>` never trips the empty-value check leaves use.

pub mod attributes;
pub mod convert;
pub mod node;

pub use attributes::Attributes;
pub use convert::spans_to_nodes;
pub use node::{HtmlNode, RenderError};
