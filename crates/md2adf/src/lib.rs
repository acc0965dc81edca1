//! # md2adf: Markdown to Atlassian Document Format
//!
//! This crate converts Markdown text into the Atlassian Document Format
//! (ADF), the strict JSON tree Jira and Confluence REST APIs accept as
//! rich-text bodies. It is meant for integration tools that need to post
//! comments or descriptions without hand-building ADF payloads.
//!
//! Parsing is delegated to the [`markdown`] crate; this crate owns the
//! transformation of the resulting AST. The interesting part of that
//! transformation is inline formatting: Markdown nests it structurally
//! (`**bold _italic_**`) while ADF attaches a flat set of *marks* to each
//! leaf text run, so the converter flattens nested wrappers into
//! mark-carrying leaves.
//!
//! ## Quick Start
//!
//! ```rust
//! use md2adf::to_json;
//!
//! let json = to_json("Hello **world**").unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"version":1,"type":"doc","content":[{"type":"paragraph","content":[{"type":"text","text":"Hello "},{"type":"text","text":"world","marks":[{"type":"strong"}]}]}]}"#
//! );
//! ```
//!
//! ### Working with the document value
//!
//! ```rust
//! use md2adf::{convert, Node};
//!
//! let document = convert("# Heading\n\nParagraph with *emphasis*").unwrap();
//! assert_eq!(document.content.len(), 2);
//! assert!(matches!(document.content[0], Node::Heading(_)));
//! ```
//!
//! ## Supported Markdown
//!
//! Headings, emphasis/strong/strikethrough/inline code, links and images
//! (images degrade to links over their alt text), fenced and indented code
//! blocks, nested bullet and ordered lists, blockquotes, thematic breaks,
//! hard breaks, and GFM tables. Anything else degrades gracefully to
//! literal text rather than failing the conversion.

mod converter;
mod document;
mod error;
mod node;

pub use document::Document;
pub use error::ConvertError;
pub use node::{
    Blockquote, BulletList, CodeBlock, CodeBlockAttrs, Heading, HeadingAttrs, LinkAttrs, ListItem,
    Mark, MarkSet, Node, OrderedList, OrderedListAttrs, Paragraph, Table, TableCell, TableRow,
    Text,
};

/// Converts markdown text to an ADF [`Document`].
///
/// Empty or whitespace-only input yields a document with empty content.
/// The only error condition is a parser-level failure; irregularities in
/// the parsed tree degrade gracefully instead of failing.
pub fn convert(markdown: &str) -> Result<Document, ConvertError> {
    markdown.parse()
}

/// Converts markdown text straight to the ADF JSON string.
pub fn to_json(markdown: &str) -> Result<String, ConvertError> {
    convert(markdown)?.to_json()
}
