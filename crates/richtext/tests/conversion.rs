//! End-to-end conversion tests: HTML fragment in, Rich Text JSON out.

use pretty_assertions::assert_eq;
use richtext::{html_to_richtext, Block, Document, Inline, RichTextService};

fn convert(html: &str) -> Document {
    RichTextService::new().convert(html).unwrap()
}

#[test]
fn heading_levels() {
    assert_eq!(
        html_to_richtext("<h1>Title</h1>").unwrap(),
        r#"{"type":"root","children":[{"type":"heading","level":1,"children":[{"type":"text","value":"Title"}]}]}"#
    );
    assert_eq!(
        html_to_richtext("<h6>Small</h6>").unwrap(),
        r#"{"type":"root","children":[{"type":"heading","level":6,"children":[{"type":"text","value":"Small"}]}]}"#
    );
}

#[test]
fn mark_stacking() {
    assert_eq!(
        html_to_richtext("<p><strong><em>x</em></strong></p>").unwrap(),
        r#"{"type":"root","children":[{"type":"paragraph","children":[{"type":"text","value":"x","bold":true,"italic":true}]}]}"#
    );
}

#[test]
fn list_items_wrap_bare_content_in_paragraphs() {
    assert_eq!(
        html_to_richtext("<ul><li>First item</li><li>Second item</li></ul>").unwrap(),
        concat!(
            r#"{"type":"root","children":[{"type":"list","listType":"unordered","children":["#,
            r#"{"type":"list-item","children":[{"type":"paragraph","children":[{"type":"text","value":"First item"}]}]},"#,
            r#"{"type":"list-item","children":[{"type":"paragraph","children":[{"type":"text","value":"Second item"}]}]}"#,
            r#"]}]}"#
        )
    );
}

#[test]
fn ordered_lists_keep_their_type() {
    let json = html_to_richtext("<ol><li>one</li></ol>").unwrap();
    assert!(json.contains(r#""type":"list","listType":"ordered""#));
}

#[test]
fn link_in_paragraph() {
    assert_eq!(
        html_to_richtext(r#"<p><a href="https://example.com">a link</a></p>"#).unwrap(),
        r#"{"type":"root","children":[{"type":"paragraph","children":[{"type":"link","url":"https://example.com","children":[{"type":"text","value":"a link"}]}]}]}"#
    );
}

#[test]
fn link_keeps_title_and_target() {
    let json = html_to_richtext(
        r#"<p><a href="https://example.com" title="Example" target="_blank">x</a></p>"#,
    )
    .unwrap();
    assert!(json.contains(
        r#"{"type":"link","url":"https://example.com","title":"Example","target":"_blank","children":"#
    ));
}

#[test]
fn link_with_mixed_marks_coalesces_into_one_node() {
    assert_eq!(
        html_to_richtext(r#"<p><a href="https://example.com">plain <b>bold</b></a></p>"#)
            .unwrap(),
        concat!(
            r#"{"type":"root","children":[{"type":"paragraph","children":["#,
            r#"{"type":"link","url":"https://example.com","children":["#,
            r#"{"type":"text","value":"plain "},"#,
            r#"{"type":"text","value":"bold","bold":true}"#,
            r#"]}]}]}"#
        )
    );
}

#[test]
fn link_without_href_degrades_to_children() {
    assert_eq!(
        html_to_richtext("<p><a>just text</a></p>").unwrap(),
        r#"{"type":"root","children":[{"type":"paragraph","children":[{"type":"text","value":"just text"}]}]}"#
    );
}

#[test]
fn nested_links_recover_as_siblings() {
    // the HTML parser itself splits nested <a> into siblings; both survive
    let json = html_to_richtext(
        r#"<p><a href="https://outer.example">out <a href="https://inner.example">in</a></a></p>"#,
    )
    .unwrap();
    assert!(json.contains("https://outer.example"));
    assert!(json.contains("https://inner.example"));
}

#[test]
fn unknown_tags_are_transparent() {
    assert_eq!(
        html_to_richtext("<p><span>hello</span></p>").unwrap(),
        html_to_richtext("<p>hello</p>").unwrap()
    );
    assert_eq!(
        html_to_richtext("<section><p>hello</p></section>").unwrap(),
        html_to_richtext("<p>hello</p>").unwrap()
    );
}

#[test]
fn empty_elements_are_dropped() {
    assert_eq!(
        html_to_richtext("<p></p>").unwrap(),
        r#"{"type":"root","children":[]}"#
    );
    assert_eq!(
        html_to_richtext("<p>   </p><ul><li> </li></ul><blockquote></blockquote>").unwrap(),
        r#"{"type":"root","children":[]}"#
    );
}

#[test]
fn blockquote_contains_paragraphs() {
    assert_eq!(
        html_to_richtext("<blockquote><p>Quote</p></blockquote>").unwrap(),
        r#"{"type":"root","children":[{"type":"blockquote","children":[{"type":"paragraph","children":[{"type":"text","value":"Quote"}]}]}]}"#
    );
    // bare inline content gets the implicit paragraph
    assert_eq!(
        html_to_richtext("<blockquote>Quote</blockquote>").unwrap(),
        html_to_richtext("<blockquote><p>Quote</p></blockquote>").unwrap()
    );
}

#[test]
fn spaces_around_marked_runs_are_preserved() {
    assert_eq!(
        html_to_richtext("<p>a <strong>b</strong> c</p>").unwrap(),
        concat!(
            r#"{"type":"root","children":[{"type":"paragraph","children":["#,
            r#"{"type":"text","value":"a "},"#,
            r#"{"type":"text","value":"b","bold":true},"#,
            r#"{"type":"text","value":" c"}"#,
            r#"]}]}"#
        )
    );
}

#[test]
fn space_between_marked_runs_survives() {
    assert_eq!(
        html_to_richtext("<p><strong>a</strong> <em>b</em></p>").unwrap(),
        concat!(
            r#"{"type":"root","children":[{"type":"paragraph","children":["#,
            r#"{"type":"text","value":"a","bold":true},"#,
            r#"{"type":"text","value":" "},"#,
            r#"{"type":"text","value":"b","italic":true}"#,
            r#"]}]}"#
        )
    );
}

#[test]
fn structural_whitespace_between_blocks_is_dropped() {
    assert_eq!(
        html_to_richtext("<p>one</p>\n   <p>two</p>").unwrap(),
        html_to_richtext("<p>one</p><p>two</p>").unwrap()
    );
}

#[test]
fn stray_top_level_text_is_wrapped_in_a_paragraph() {
    assert_eq!(
        html_to_richtext("loose text").unwrap(),
        r#"{"type":"root","children":[{"type":"paragraph","children":[{"type":"text","value":"loose text"}]}]}"#
    );
}

#[test]
fn conversion_is_deterministic() {
    let html = r#"<h2>T</h2><p>a <b>b</b> <a href="https://example.com">c</a></p><ol><li>x</li></ol>"#;
    assert_eq!(
        html_to_richtext(html).unwrap(),
        html_to_richtext(html).unwrap()
    );
}

// ---------------------------------------------------------------------------
// Generated-fragment sweep: conversion always yields a schema-legal document
// ---------------------------------------------------------------------------

struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

const WORDS: &[&str] = &["alpha", "beta", "gamma", "delta", " ", "epsilon zeta", ""];

fn gen_inlines(rng: &mut XorShift) -> String {
    let mut out = String::new();
    for _ in 0..=rng.below(3) {
        let word = WORDS[rng.below(WORDS.len() as u64) as usize];
        match rng.below(5) {
            0 => out.push_str(&format!("<strong>{word}</strong>")),
            1 => out.push_str(&format!("<em>{word}</em>")),
            2 => out.push_str(&format!(
                "<a href='https://example.com/{}'>{word}</a>",
                rng.below(3)
            )),
            3 => out.push_str(&format!("<span>{word}</span>")),
            _ => out.push_str(word),
        }
    }
    out
}

fn gen_block(rng: &mut XorShift, depth: u64) -> String {
    match rng.below(6) {
        0 => format!("<h{level}>{}</h{level}>", gen_inlines(rng), level = 1 + rng.below(6)),
        1 if depth < 2 => format!("<blockquote>{}</blockquote>", gen_block(rng, depth + 1)),
        2 | 3 => {
            let tag = if rng.below(2) == 0 { "ul" } else { "ol" };
            let mut items = String::new();
            for _ in 0..=rng.below(3) {
                items.push_str(&format!("<li>{}</li>", gen_inlines(rng)));
            }
            format!("<{tag}>{items}</{tag}>")
        }
        _ => format!("<p>{}</p>", gen_inlines(rng)),
    }
}

fn gen_fragment(rng: &mut XorShift) -> String {
    let mut out = String::new();
    for _ in 0..=rng.below(4) {
        out.push_str(&gen_block(rng, 0));
    }
    out
}

fn check_inlines(inlines: &[Inline]) {
    assert!(!inlines.is_empty(), "empty inline sequence survived");
    for pair in inlines.windows(2) {
        if let [Inline::Text { marks: a, .. }, Inline::Text { marks: b, .. }] = pair {
            assert_ne!(a, b, "adjacent text leaves with identical marks");
        }
    }
    for inline in inlines {
        match inline {
            Inline::Text { value, .. } => assert!(!value.is_empty(), "empty text value"),
            Inline::Link { url, children, .. } => {
                assert!(!url.is_empty(), "link without url");
                check_inlines(children);
            }
        }
    }
}

fn check_blocks(blocks: &[Block]) {
    for block in blocks {
        match block {
            Block::Paragraph(children) => check_inlines(children),
            Block::Heading { level, content } => {
                assert!((1..=6).contains(level), "heading level out of range");
                check_inlines(content);
            }
            Block::Blockquote(children) => {
                assert!(!children.is_empty(), "empty blockquote survived");
                check_blocks(children);
            }
            Block::List { items, .. } => {
                assert!(!items.is_empty(), "empty list survived");
                for item in items {
                    assert!(!item.content.is_empty(), "empty list item survived");
                    check_blocks(&item.content);
                }
            }
        }
    }
}

#[test]
fn generated_fragments_convert_to_legal_documents() {
    for seed in 1..=64u64 {
        let mut rng = XorShift(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        let html = gen_fragment(&mut rng);

        let document = convert(&html);
        check_blocks(&document.children);

        // byte-identical on a second run
        assert_eq!(document, convert(&html), "conversion not deterministic: {html}");

        // normalizing a normalized tree is a no-op
        assert_eq!(
            document,
            richtext_core::normalize(document.clone()),
            "normalization not idempotent: {html}"
        );
    }
}
