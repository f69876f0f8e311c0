//! richtext-core - Rich Text AST, normalization, and JSON serialization
//!
//! This crate provides the data structures and output layer for Shopify Rich
//! Text documents. It knows nothing about HTML; the `richtext` crate feeds it
//! a transformed tree.
//!
//! # Architecture
//!
//! ```text
//! HTML fragment ──transform──▶ ┌───────────────┐
//!                              │               │ ──normalize──▶ canonical tree
//!                              │ Rich Text AST │
//! hand-built tree ───────────▶ │               │ ──serialize──▶ Rich Text JSON
//!                              └───────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use richtext_core::{to_json, Block, Document, Inline, Marks};
//!
//! let document = Document::new(vec![
//!     Block::Heading {
//!         level: 1,
//!         content: vec![Inline::text("Hello World")],
//!     },
//!     Block::Paragraph(vec![
//!         Inline::text("This is "),
//!         Inline::marked_text("bold", Marks::none().with_bold()),
//!         Inline::text(" text."),
//!     ]),
//! ]);
//!
//! let json = to_json(&document).unwrap();
//! assert!(json.starts_with(r#"{"type":"root""#));
//! ```

mod ast;
mod normalize;
mod serialize;

pub use ast::{Block, Document, Inline, ListItem, ListType, Marks};
pub use normalize::normalize;
pub use serialize::{to_json, to_json_pretty};
