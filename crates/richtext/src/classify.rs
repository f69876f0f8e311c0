//! Element classification.
//!
//! Maps each lowercased HTML tag onto the closed set of behaviors the
//! converter knows: a block node, an inline mark, a link, or a transparent
//! unknown. Pure lookup. Unknown tags never fail; their children are spliced
//! into the parent as if the wrapper were absent.

use richtext_core::ListType;

/// The block node a tag produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    Heading(u8),
    Blockquote,
    List(ListType),
    ListItem,
}

/// The inline mark a tag toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkKind {
    Bold,
    Italic,
}

/// How the converter treats an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Block(BlockKind),
    Mark(MarkKind),
    Link,
    Unknown,
}

/// Classify a lowercased tag name.
pub fn classify(tag: &str) -> Classification {
    match tag {
        "p" => Classification::Block(BlockKind::Paragraph),
        "h1" => Classification::Block(BlockKind::Heading(1)),
        "h2" => Classification::Block(BlockKind::Heading(2)),
        "h3" => Classification::Block(BlockKind::Heading(3)),
        "h4" => Classification::Block(BlockKind::Heading(4)),
        "h5" => Classification::Block(BlockKind::Heading(5)),
        "h6" => Classification::Block(BlockKind::Heading(6)),
        "blockquote" => Classification::Block(BlockKind::Blockquote),
        "ul" => Classification::Block(BlockKind::List(ListType::Unordered)),
        "ol" => Classification::Block(BlockKind::List(ListType::Ordered)),
        "li" => Classification::Block(BlockKind::ListItem),
        "strong" | "b" => Classification::Mark(MarkKind::Bold),
        "em" | "i" => Classification::Mark(MarkKind::Italic),
        "a" => Classification::Link,
        _ => Classification::Unknown,
    }
}
