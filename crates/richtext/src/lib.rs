//! # richtext
//!
//! Convert HTML fragments to Shopify Rich Text metafield JSON.
//!
//! The converter parses a fragment, maps the recognized elements (paragraphs,
//! headings, lists, block quotes, bold/italic marks, links) onto the Rich
//! Text node tree, normalizes the result into schema-legal form, and
//! serializes it deterministically. Conversion is best-effort by contract:
//! unknown tags are transparent, links without an `href` degrade to their
//! children, empty elements are dropped, and no input ever turns into a
//! failure instead of a document.
//!
//! ## Design
//!
//! The converter walks a parser-agnostic [`Node`] tree. The bundled `html`
//! feature (default) parses strings via `scraper`; with it disabled, any
//! parser that can fill a [`Node`] can feed [`RichTextService::convert_tree`].
//!
//! ## Example
//!
//! ```rust
//! use richtext::html_to_richtext;
//!
//! let json = html_to_richtext("<h1>Hello World</h1>").unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"type":"root","children":[{"type":"heading","level":1,"children":[{"type":"text","value":"Hello World"}]}]}"#
//! );
//! ```

mod classify;
mod convert;
#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod service;

pub use classify::{classify, BlockKind, Classification, MarkKind};
#[cfg(feature = "html")]
pub use html::parse_html;
pub use node::{Node, NodeKind};
pub use service::{RichTextOptions, RichTextService};

// Re-export the document types so consumers of `convert` results need only
// this crate.
pub use richtext_core::{Block, Document, Inline, ListItem, ListType, Marks};

/// Error type for Rich Text conversion
#[derive(Debug, thiserror::Error)]
pub enum RichTextError {
    /// The HTML fragment could not be parsed into a tree at all
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The document could not be serialized to JSON
    #[error("failed to serialize document")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RichTextError>;

/// Convert an HTML fragment to Shopify Rich Text JSON with default options.
#[cfg(feature = "html")]
pub fn html_to_richtext(html: &str) -> Result<String> {
    RichTextService::new().convert_to_json(html)
}
