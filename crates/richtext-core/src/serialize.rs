//! Rich Text JSON serialization
//!
//! Emits the node tree in the shape Shopify's Admin API accepts: every node
//! is an object with `type` first, node-specific fields next, and `children`
//! last. `bold`/`italic` appear only when set and `title`/`target` only when
//! present, so the impls are written by hand rather than derived. Output is
//! deterministic: the same tree always serializes to identical bytes.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::ast::{Block, Document, Inline, ListItem};

/// Serialize a document to compact Rich Text JSON.
pub fn to_json(document: &Document) -> serde_json::Result<String> {
    serde_json::to_string(document)
}

/// Serialize a document to pretty-printed Rich Text JSON.
pub fn to_json_pretty(document: &Document) -> serde_json::Result<String> {
    serde_json::to_string_pretty(document)
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Document", 2)?;
        state.serialize_field("type", "root")?;
        state.serialize_field("children", &self.children)?;
        state.end()
    }
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Block::Paragraph(children) => {
                let mut state = serializer.serialize_struct("Paragraph", 2)?;
                state.serialize_field("type", "paragraph")?;
                state.serialize_field("children", children)?;
                state.end()
            }
            Block::Heading { level, content } => {
                let mut state = serializer.serialize_struct("Heading", 3)?;
                state.serialize_field("type", "heading")?;
                state.serialize_field("level", level)?;
                state.serialize_field("children", content)?;
                state.end()
            }
            Block::Blockquote(children) => {
                let mut state = serializer.serialize_struct("Blockquote", 2)?;
                state.serialize_field("type", "blockquote")?;
                state.serialize_field("children", children)?;
                state.end()
            }
            Block::List { list_type, items } => {
                let mut state = serializer.serialize_struct("List", 3)?;
                state.serialize_field("type", "list")?;
                state.serialize_field("listType", list_type.as_str())?;
                state.serialize_field("children", items)?;
                state.end()
            }
        }
    }
}

impl Serialize for ListItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ListItem", 2)?;
        state.serialize_field("type", "list-item")?;
        state.serialize_field("children", &self.content)?;
        state.end()
    }
}

impl Serialize for Inline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Inline::Text { value, marks } => {
                let fields = 2 + usize::from(marks.bold) + usize::from(marks.italic);
                let mut state = serializer.serialize_struct("Text", fields)?;
                state.serialize_field("type", "text")?;
                state.serialize_field("value", value)?;
                if marks.bold {
                    state.serialize_field("bold", &true)?;
                }
                if marks.italic {
                    state.serialize_field("italic", &true)?;
                }
                state.end()
            }
            Inline::Link {
                url,
                title,
                target,
                children,
            } => {
                let fields =
                    3 + usize::from(title.is_some()) + usize::from(target.is_some());
                let mut state = serializer.serialize_struct("Link", fields)?;
                state.serialize_field("type", "link")?;
                state.serialize_field("url", url)?;
                if let Some(title) = title {
                    state.serialize_field("title", title)?;
                }
                if let Some(target) = target {
                    state.serialize_field("target", target)?;
                }
                state.serialize_field("children", children)?;
                state.end()
            }
        }
    }
}
