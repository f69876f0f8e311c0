//! DOM-lite input tree for HTML to Rich Text conversion.
//!
//! The converter consumes this structure rather than a parser's own types, so
//! any HTML parser can feed it. The bundled `html` feature fills it from
//! `scraper`; tests build it by hand. Tags are stored lowercased and
//! attributes in document order.

/// The two node kinds the converter distinguishes.
///
/// Comments, doctypes, and processing instructions are not represented; the
/// parse layer skips them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Element,
    Text,
}

/// One node of the input tree.
#[derive(Debug, Clone)]
pub struct Node {
    kind: NodeKind,
    tag: String,
    value: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Node {
    /// Create an element node with no attributes
    pub fn element(tag: &str) -> Self {
        Self {
            kind: NodeKind::Element,
            tag: tag.to_lowercase(),
            value: String::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create an element node with attributes
    pub fn element_with_attrs(tag: &str, attrs: Vec<(&str, &str)>) -> Self {
        Self {
            kind: NodeKind::Element,
            tag: tag.to_lowercase(),
            value: String::new(),
            attrs: attrs
                .into_iter()
                .map(|(name, value)| (name.to_lowercase(), value.to_string()))
                .collect(),
            children: Vec::new(),
        }
    }

    /// Create a text node
    pub fn text(content: &str) -> Self {
        Self {
            kind: NodeKind::Text,
            tag: String::new(),
            value: content.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_element(&self) -> bool {
        self.kind == NodeKind::Element
    }

    pub fn is_text(&self) -> bool {
        self.kind == NodeKind::Text
    }

    /// The lowercased tag name; empty for text nodes
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The raw content of a text node; empty for elements
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Look up an attribute value by (case-insensitive) name
    pub fn attr(&self, name: &str) -> Option<&str> {
        let name = name.to_lowercase();
        self.attrs
            .iter()
            .find(|(attr_name, _)| *attr_name == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// All text content of this node and its descendants, concatenated
    pub fn text_content(&self) -> String {
        match self.kind {
            NodeKind::Text => self.value.clone(),
            NodeKind::Element => self
                .children
                .iter()
                .map(Node::text_content)
                .collect::<Vec<_>>()
                .join(""),
        }
    }
}
