//! Rich Text tree normalization
//!
//! Turns a freshly transformed tree into its canonical, schema-legal form:
//! adjacent link wrappers with identical attributes are coalesced, structural
//! whitespace is resolved, adjacent text leaves with identical marks are
//! merged, and nodes that end up empty are dropped. The pass is total and
//! idempotent: normalizing a normalized document is a no-op.

use crate::ast::{Block, Document, Inline, ListItem, Marks};

/// Normalize a document in a single bottom-up pass.
pub fn normalize(document: Document) -> Document {
    let children = normalize_blocks(document.children);
    debug_assert!(
        children.iter().all(|block| !block.is_blank()),
        "normalization left a blank block in the tree"
    );
    Document::new(children)
}

fn normalize_blocks(blocks: Vec<Block>) -> Vec<Block> {
    let mut out = Vec::with_capacity(blocks.len());

    for block in blocks {
        match block {
            Block::Paragraph(children) => {
                let children = normalize_inlines(children, true);
                if !children.is_empty() {
                    out.push(Block::Paragraph(children));
                }
            }
            Block::Heading { level, content } => {
                let content = normalize_inlines(content, true);
                if !content.is_empty() {
                    out.push(Block::Heading { level, content });
                }
            }
            Block::Blockquote(children) => {
                let children = normalize_blocks(children);
                if !children.is_empty() {
                    out.push(Block::Blockquote(children));
                }
            }
            Block::List { list_type, items } => {
                let items: Vec<ListItem> = items
                    .into_iter()
                    .filter_map(|item| {
                        let content = normalize_blocks(item.content);
                        (!content.is_empty()).then(|| ListItem::new(content))
                    })
                    .collect();
                if !items.is_empty() {
                    out.push(Block::List { list_type, items });
                }
            }
        }
    }

    out
}

/// Normalize one inline sequence.
///
/// `trim_edges` is set for block content (paragraph, heading), where leading
/// and trailing whitespace is structural. Link children keep their edge
/// spaces: they separate the link text from surrounding content.
fn normalize_inlines(inlines: Vec<Inline>, trim_edges: bool) -> Vec<Inline> {
    let mut resolved = Vec::with_capacity(inlines.len());
    for inline in coalesce_links(inlines) {
        match inline {
            Inline::Link {
                url,
                title,
                target,
                children,
            } => {
                let had_content = !children.is_empty();
                let children = normalize_inlines(children, false);
                if !children.is_empty() {
                    resolved.push(Inline::Link {
                        url,
                        title,
                        target,
                        children,
                    });
                } else if had_content {
                    // the link held only whitespace; keep the gap it occupied
                    // and let the positional pass below decide its fate
                    resolved.push(Inline::text(" "));
                }
            }
            text => resolved.push(text),
        }
    }

    // a dropped or degraded link can leave identical links adjacent, so
    // coalesce once more after whitespace resolution
    let resolved = coalesce_links(resolve_whitespace(resolved, trim_edges));
    let mut merged = merge_adjacent_text(resolved);
    if trim_edges {
        trim_sequence_edges(&mut merged);
    }
    merged
}

/// Merge adjacent link nodes that carry identical attributes.
///
/// The transformer wraps each text leaf under an active link in its own link
/// node; this is where those wrappers become one node with many children.
fn coalesce_links(inlines: Vec<Inline>) -> Vec<Inline> {
    let mut out: Vec<Inline> = Vec::new();

    for inline in inlines {
        if let Inline::Link {
            url,
            title,
            target,
            children,
        } = inline
        {
            if let Some(Inline::Link {
                url: prev_url,
                title: prev_title,
                target: prev_target,
                children: prev_children,
            }) = out.last_mut()
            {
                if *prev_url == url && *prev_title == title && *prev_target == target {
                    prev_children.extend(children);
                    // merging can put same-marked leaves side by side at the seam
                    *prev_children = merge_adjacent_text(std::mem::take(prev_children));
                    continue;
                }
            }
            out.push(Inline::Link {
                url,
                title,
                target,
                children,
            });
        } else {
            out.push(inline);
        }
    }

    out
}

/// Resolve whitespace-only text leaves positionally.
///
/// A whitespace-only leaf between two surviving inlines collapses to a single
/// space; at a trimmed sequence edge it is dropped. A space is never inserted
/// next to a leaf that already carries one.
fn resolve_whitespace(inlines: Vec<Inline>, trim_edges: bool) -> Vec<Inline> {
    let mut out: Vec<Inline> = Vec::new();
    let mut pending: Option<Marks> = None;
    let mut seen_content = false;

    for inline in inlines {
        match inline {
            Inline::Text { ref value, marks } if value.trim().is_empty() => {
                pending = pending.or(Some(marks));
            }
            other => {
                if let Some(marks) = pending.take() {
                    let keep = seen_content || !trim_edges;
                    if keep && !ends_with_space(out.last()) && !starts_with_space(&other) {
                        out.push(Inline::marked_text(" ", marks));
                    }
                }
                seen_content = true;
                out.push(other);
            }
        }
    }

    if let Some(marks) = pending {
        if seen_content && !trim_edges && !ends_with_space(out.last()) {
            out.push(Inline::marked_text(" ", marks));
        }
    }

    out
}

fn ends_with_space(inline: Option<&Inline>) -> bool {
    matches!(inline, Some(Inline::Text { value, .. }) if value.ends_with(' '))
}

fn starts_with_space(inline: &Inline) -> bool {
    matches!(inline, Inline::Text { value, .. } if value.starts_with(' '))
}

/// Merge adjacent text leaves that carry identical mark sets.
///
/// A link node sits between leaves as a hard boundary, so merging never
/// crosses one. Doubled spaces at the seam collapse to one.
fn merge_adjacent_text(inlines: Vec<Inline>) -> Vec<Inline> {
    let mut out: Vec<Inline> = Vec::new();

    for inline in inlines {
        if let Inline::Text { value, marks } = inline {
            if let Some(Inline::Text {
                value: prev,
                marks: prev_marks,
            }) = out.last_mut()
            {
                if *prev_marks == marks {
                    if prev.ends_with(' ') {
                        prev.push_str(value.strip_prefix(' ').unwrap_or(&value));
                    } else {
                        prev.push_str(&value);
                    }
                    continue;
                }
            }
            out.push(Inline::Text { value, marks });
        } else {
            out.push(inline);
        }
    }

    out
}

/// Trim structural whitespace off the edges of a block's inline sequence.
fn trim_sequence_edges(inlines: &mut Vec<Inline>) {
    if let Some(Inline::Text { value, .. }) = inlines.first_mut() {
        let trimmed = value.trim_start();
        if trimmed.len() != value.len() {
            *value = trimmed.to_string();
        }
        if value.is_empty() {
            inlines.remove(0);
        }
    }
    if let Some(Inline::Text { value, .. }) = inlines.last_mut() {
        let trimmed = value.trim_end();
        if trimmed.len() != value.len() {
            *value = trimmed.to_string();
        }
        if value.is_empty() {
            inlines.pop();
        }
    }
}
