//! RichTextService - the main entry point for HTML to Rich Text conversion.

use richtext_core::{normalize, Document};
#[cfg(feature = "html")]
use richtext_core::{to_json, to_json_pretty};

use crate::convert::convert;
#[cfg(feature = "html")]
use crate::html::parse_html;
use crate::node::Node;
#[cfg(feature = "html")]
use crate::Result;

/// Options for RichTextService
#[derive(Debug, Clone, Default)]
pub struct RichTextOptions {
    /// Emit pretty-printed JSON instead of the compact form
    pub pretty: bool,
}

/// The main service for converting HTML fragments to Rich Text documents
pub struct RichTextService {
    options: RichTextOptions,
}

impl RichTextService {
    /// Create a new RichTextService with default options
    pub fn new() -> Self {
        Self {
            options: RichTextOptions::default(),
        }
    }

    /// Create a RichTextService with custom options
    pub fn with_options(options: RichTextOptions) -> Self {
        Self { options }
    }

    /// Get the current options
    pub fn options(&self) -> &RichTextOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut RichTextOptions {
        &mut self.options
    }

    /// Convert a DOM Node tree to a normalized Rich Text document.
    ///
    /// Useful when a DOM is already available from another parser.
    pub fn convert_tree(&self, node: &Node) -> Document {
        normalize(convert(node))
    }

    /// Convert an HTML fragment to a normalized Rich Text document
    #[cfg(feature = "html")]
    pub fn convert(&self, html: &str) -> Result<Document> {
        Ok(self.convert_tree(&parse_html(html)))
    }

    /// Convert an HTML fragment straight to Rich Text JSON
    #[cfg(feature = "html")]
    pub fn convert_to_json(&self, html: &str) -> Result<String> {
        let document = self.convert(html)?;
        let json = if self.options.pretty {
            to_json_pretty(&document)
        } else {
            to_json(&document)
        }?;
        Ok(json)
    }
}

impl Default for RichTextService {
    fn default() -> Self {
        Self::new()
    }
}
