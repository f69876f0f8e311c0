//! Convert a DOM tree to the Rich Text AST.
//!
//! This module transforms the parsed [`Node`] tree into the typed tree
//! defined in richtext-core. The walk is single-pass and total: recognized
//! elements map to nodes, marks and links travel down the recursion as an
//! explicit context value, and everything else degrades to transparent. The
//! raw result is finished by `richtext_core::normalize`.

use richtext_core::{Block, Document, Inline, ListItem, Marks};

use crate::classify::{classify, BlockKind, Classification, MarkKind};
use crate::node::{Node, NodeKind};

/// Convert a DOM tree to a raw Rich Text document.
///
/// The result is structurally complete but not yet normalized: whitespace-only
/// leaves are still present and per-leaf link wrappers are not yet coalesced.
pub fn convert(root: &Node) -> Document {
    Document::new(convert_blocks(root))
}

/// Attributes of the innermost `<a>` element currently in effect.
#[derive(Debug, Clone, PartialEq)]
struct LinkAttrs {
    url: String,
    title: Option<String>,
    target: Option<String>,
}

/// Inline conversion context, threaded down the recursion as a value.
#[derive(Debug, Clone, Default)]
struct InlineContext {
    marks: Marks,
    link: Option<LinkAttrs>,
}

impl InlineContext {
    fn with_mark(&self, mark: MarkKind) -> Self {
        let marks = match mark {
            MarkKind::Bold => self.marks.with_bold(),
            MarkKind::Italic => self.marks.with_italic(),
        };
        Self {
            marks,
            link: self.link.clone(),
        }
    }

    fn with_link(&self, link: LinkAttrs) -> Self {
        Self {
            marks: self.marks,
            link: Some(link),
        }
    }
}

/// Convert the children of `parent` at block level.
///
/// Inline content encountered here (stray text, marks, links, transparent
/// wrappers around them) accumulates into a run that is flushed as one
/// implicit paragraph whenever a block element interrupts or the element
/// ends. This is also what gives `<li>` bare content its paragraph wrapper.
fn convert_blocks(parent: &Node) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut run: Vec<Inline> = Vec::new();
    collect_blocks(parent, &mut blocks, &mut run);
    flush_run(&mut blocks, &mut run);
    blocks
}

fn collect_blocks(parent: &Node, blocks: &mut Vec<Block>, run: &mut Vec<Inline>) {
    for child in parent.children() {
        match child.kind() {
            NodeKind::Text => emit_text(child.value(), &InlineContext::default(), run),
            NodeKind::Element => match classify(child.tag()) {
                Classification::Block(kind) => {
                    flush_run(blocks, run);
                    convert_block_element(kind, child, blocks);
                }
                Classification::Mark(_) | Classification::Link => {
                    convert_inline_element(child, &InlineContext::default(), run);
                }
                Classification::Unknown => {
                    // transparent at block level: children spliced in place
                    collect_blocks(child, blocks, run);
                }
            },
        }
    }
}

fn flush_run(blocks: &mut Vec<Block>, run: &mut Vec<Inline>) {
    if run.is_empty() {
        return;
    }
    let inlines = std::mem::take(run);
    // runs of pure structural whitespace between blocks produce nothing
    if inlines.iter().any(|inline| !inline.is_blank()) {
        blocks.push(Block::Paragraph(inlines));
    }
}

fn convert_block_element(kind: BlockKind, element: &Node, blocks: &mut Vec<Block>) {
    match kind {
        BlockKind::Paragraph => {
            blocks.push(Block::Paragraph(convert_inlines(element)));
        }
        BlockKind::Heading(level) => {
            blocks.push(Block::Heading {
                level,
                content: convert_inlines(element),
            });
        }
        BlockKind::Blockquote => {
            blocks.push(Block::Blockquote(convert_blocks(element)));
        }
        BlockKind::List(list_type) => {
            // only direct <li> children are list content; anything else
            // inside a <ul>/<ol> is skipped
            let items: Vec<ListItem> = element
                .children()
                .iter()
                .filter(|child| child.is_element() && child.tag() == "li")
                .map(|item| ListItem::new(convert_blocks(item)))
                .collect();
            blocks.push(Block::List { list_type, items });
        }
        // a stray <li> outside any list keeps its content, transparently
        BlockKind::ListItem => blocks.extend(convert_blocks(element)),
    }
}

/// Convert the children of `parent` as the inline content of a block node.
fn convert_inlines(parent: &Node) -> Vec<Inline> {
    let mut out = Vec::new();
    collect_inlines(parent, &InlineContext::default(), &mut out);
    out
}

fn collect_inlines(parent: &Node, ctx: &InlineContext, out: &mut Vec<Inline>) {
    for child in parent.children() {
        match child.kind() {
            NodeKind::Text => emit_text(child.value(), ctx, out),
            NodeKind::Element => convert_inline_element(child, ctx, out),
        }
    }
}

fn convert_inline_element(element: &Node, ctx: &InlineContext, out: &mut Vec<Inline>) {
    match classify(element.tag()) {
        Classification::Mark(mark) => collect_inlines(element, &ctx.with_mark(mark), out),
        Classification::Link => match link_attrs(element) {
            // nested <a> is invalid HTML; the outer link wins
            Some(link) if ctx.link.is_none() => {
                collect_inlines(element, &ctx.with_link(link), out);
            }
            _ => collect_inlines(element, ctx, out),
        },
        // unknown tags are transparent; block tags nested in an inline run
        // are invalid fragments and degrade the same way
        Classification::Unknown | Classification::Block(_) => {
            collect_inlines(element, ctx, out);
        }
    }
}

/// Emit one text leaf, wrapped in a link node when a link is active.
///
/// Whitespace runs collapse to a single space here; whether a whitespace-only
/// leaf survives is decided positionally by the normalizer.
fn emit_text(raw: &str, ctx: &InlineContext, out: &mut Vec<Inline>) {
    let value = collapse_whitespace(raw);
    if value.is_empty() {
        return;
    }

    let leaf = Inline::marked_text(value, ctx.marks);
    match &ctx.link {
        Some(link) => out.push(Inline::Link {
            url: link.url.clone(),
            title: link.title.clone(),
            target: link.target.clone(),
            children: vec![leaf],
        }),
        None => out.push(leaf),
    }
}

/// An `<a>` element's attributes, if it has a usable `href`.
fn link_attrs(element: &Node) -> Option<LinkAttrs> {
    let href = element.attr("href")?.trim();
    if href.is_empty() {
        return None;
    }
    Some(LinkAttrs {
        url: href.to_string(),
        title: element.attr("title").map(str::to_string),
        target: element.attr("target").map(str::to_string),
    })
}

/// Collapse whitespace runs in text to a single space
fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_was_whitespace = false;

    for c in s.chars() {
        if c.is_whitespace() {
            if !prev_was_whitespace {
                result.push(' ');
                prev_was_whitespace = true;
            }
        } else {
            result.push(c);
            prev_was_whitespace = false;
        }
    }

    result
}
