//! HTML parsing support.
//!
//! Parses an HTML fragment string into the [`Node`] tree consumed by the
//! converter. The parser recovers from malformed markup, so this layer is
//! total: any string yields a tree.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Parse an HTML fragment into a [`Node`] tree.
///
/// The returned node is the fragment's synthetic `<html>` wrapper, which the
/// converter treats as transparent.
///
/// # Example
///
/// ```rust
/// use richtext::{parse_html, RichTextService};
///
/// let tree = parse_html("<h1>Hello <em>World</em></h1>");
/// let document = RichTextService::new().convert_tree(&tree);
/// assert_eq!(document.children.len(), 1);
/// ```
pub fn parse_html(html: &str) -> Node {
    let fragment = Html::parse_fragment(html);
    element_to_node(fragment.root_element())
}

fn element_to_node(element: ElementRef) -> Node {
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();

    let mut node = if attrs.is_empty() {
        Node::element(element.value().name())
    } else {
        Node::element_with_attrs(element.value().name(), attrs)
    };

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => node.add_child(Node::text(&text.text)),
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(element_to_node(child_element));
                }
            }
            _ => {}
        }
    }

    node
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wraps_fragment() {
        let node = parse_html("<p>Hello World</p>");
        assert!(node.is_element());
        assert_eq!(node.tag(), "html");
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.children()[0].tag(), "p");
    }

    #[test]
    fn test_parse_decodes_entities() {
        let node = parse_html("<p>a &amp; b</p>");
        assert_eq!(node.text_content(), "a & b");
    }

    #[test]
    fn test_parse_keeps_attributes() {
        let node = parse_html(r#"<a href="https://example.com" target="_blank">x</a>"#);
        let anchor = &node.children()[0];
        assert_eq!(anchor.attr("href"), Some("https://example.com"));
        assert_eq!(anchor.attr("target"), Some("_blank"));
    }

    #[test]
    fn test_parse_skips_comments() {
        let node = parse_html("<p><!-- note -->text</p>");
        let paragraph = &node.children()[0];
        assert_eq!(paragraph.children().len(), 1);
        assert!(paragraph.children()[0].is_text());
    }
}
