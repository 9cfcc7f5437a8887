//! Convert an element tree to Markdown AST
//!
//! This module lowers [`Node`] trees into the Markdown AST defined in
//! mdtree-core. Inline content that appears directly at block level is
//! gathered into paragraphs; wrapper elements without a Markdown mapping only
//! contribute their children.

use mdtree_core::{inlines_are_blank, Block, CodeBlockStyle, Inline, ListItem, Options};

use crate::node::{Element, Node};
use crate::utilities::{clean_attribute, escape_markdown, is_block, is_skipped};

/// Block containers: they end the current paragraph but add no syntax
const CONTAINER_ELEMENTS: &[&str] = &[
    "html", "body", "div", "section", "article", "main", "aside", "header", "footer", "nav",
    "figure", "figcaption", "address", "form", "fieldset", "li", "dl", "dt", "dd", "details",
    "summary", "center",
];

/// Conversion settings shared by one render call
pub(crate) struct Context<'a> {
    pub options: &'a Options,
    pub keep: &'a [String],
    pub remove: &'a [String],
}

impl Context<'_> {
    fn is_kept(&self, tag: &str) -> bool {
        self.keep.iter().any(|t| t == tag)
    }

    fn is_removed(&self, tag: &str) -> bool {
        is_skipped(tag) || self.remove.iter().any(|t| t == tag)
    }
}

/// Convert an element tree to a Markdown AST document
pub(crate) fn convert(node: &Node, cx: &Context) -> Block {
    Block::Document(convert_children(std::slice::from_ref(node), cx))
}

/// Accumulates blocks, turning runs of loose inline content into paragraphs
#[derive(Default)]
struct BlockCollector {
    blocks: Vec<Block>,
    pending: Vec<Inline>,
}

impl BlockCollector {
    fn push_inline(&mut self, inline: Inline) {
        self.pending.push(inline);
    }

    fn push_block(&mut self, block: Block) {
        self.flush();
        if !block.is_blank() {
            self.blocks.push(block);
        }
    }

    fn flush(&mut self) {
        let inlines = std::mem::take(&mut self.pending);
        if !inlines_are_blank(&inlines) {
            self.blocks.push(Block::Paragraph(inlines));
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush();
        self.blocks
    }
}

/// Convert a run of sibling nodes to blocks
fn convert_children(nodes: &[Node], cx: &Context) -> Vec<Block> {
    let mut collector = BlockCollector::default();
    collect_blocks(nodes, cx, &mut collector);
    collector.finish()
}

fn collect_blocks(nodes: &[Node], cx: &Context, collector: &mut BlockCollector) {
    for node in nodes {
        match node {
            Node::Text(text) => {
                if let Some(inline) = text_inline(text, cx) {
                    collector.push_inline(inline);
                }
            }
            Node::Element(el) => collect_element(el, cx, collector),
        }
    }
}

fn collect_element(el: &Element, cx: &Context, collector: &mut BlockCollector) {
    let tag = el.tag();

    if cx.is_removed(tag) {
        return;
    }

    if cx.is_kept(tag) {
        if is_block(tag) {
            collector.push_block(Block::HtmlBlock(el.outer_html()));
        } else {
            collector.push_inline(Inline::HtmlInline(el.outer_html()));
        }
        return;
    }

    match tag {
        "p" => collector.push_block(Block::Paragraph(collect_inlines(el.children(), cx))),

        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
            let level = tag[1..].parse().unwrap_or(1);
            collector.push_block(Block::Heading {
                level,
                content: collect_inlines(el.children(), cx),
            });
        }

        "ol" | "ul" => collector.push_block(Block::List {
            ordered: tag == "ol",
            start: 1,
            items: collect_list_items(el, cx),
        }),

        "pre" => collector.push_block(convert_pre(el, cx)),

        "blockquote" => {
            collector.push_block(Block::BlockQuote(convert_children(el.children(), cx)));
        }

        "hr" => collector.push_block(Block::ThematicBreak),

        _ if CONTAINER_ELEMENTS.contains(&tag) => {
            collector.flush();
            collect_blocks(el.children(), cx, collector);
            collector.flush();
        }

        "a" | "img" | "em" | "i" | "strong" | "b" | "code" | "br" => {
            push_inline_element(el, cx, &mut collector.pending);
        }

        // Unknown wrappers (span, custom tags) are transparent
        _ => collect_blocks(el.children(), cx, collector),
    }
}

/// Collect list items from ul/ol; non-`li` children are ignored
fn collect_list_items(list: &Element, cx: &Context) -> Vec<ListItem> {
    list.element_children()
        .filter(|child| child.tag() == "li" && !cx.is_removed(child.tag()))
        .map(|li| ListItem::new(convert_children(li.children(), cx)))
        .collect()
}

fn convert_pre(pre: &Element, cx: &Context) -> Block {
    let language = pre
        .element_children()
        .find(|c| c.tag() == "code")
        .and_then(|code| code.attr("class"))
        .and_then(|class| {
            class
                .split_whitespace()
                .find_map(|c| c.strip_prefix("language-"))
                .map(str::to_string)
        });

    Block::CodeBlock {
        language,
        code: pre.text_content(),
        fenced: cx.options.code_block_style == CodeBlockStyle::Fenced,
    }
}

/// Collect inline content from a run of sibling nodes
fn collect_inlines(nodes: &[Node], cx: &Context) -> Vec<Inline> {
    let mut inlines = Vec::new();
    for node in nodes {
        match node {
            Node::Text(text) => {
                if let Some(inline) = text_inline(text, cx) {
                    inlines.push(inline);
                }
            }
            Node::Element(el) => push_inline_element(el, cx, &mut inlines),
        }
    }
    inlines
}

/// Convert an element in inline context, appending to `out`
fn push_inline_element(el: &Element, cx: &Context, out: &mut Vec<Inline>) {
    let tag = el.tag();

    if cx.is_removed(tag) {
        return;
    }

    if cx.is_kept(tag) {
        out.push(Inline::HtmlInline(el.outer_html()));
        return;
    }

    match tag {
        "strong" | "b" => {
            let inner = collect_inlines(el.children(), cx);
            if !inlines_are_blank(&inner) {
                out.push(Inline::Strong(inner));
            }
        }

        "em" | "i" => {
            let inner = collect_inlines(el.children(), cx);
            if !inlines_are_blank(&inner) {
                out.push(Inline::Emphasis(inner));
            }
        }

        "code" | "pre" => {
            let text = el.text_content();
            if !text.is_empty() {
                out.push(Inline::Code(text));
            }
        }

        "a" => out.push(Inline::Link {
            content: collect_inlines(el.children(), cx),
            url: clean_attribute(el.attr("href")),
            title: el.attr("title").map(str::to_string),
        }),

        "img" => out.push(Inline::Image {
            alt: el.attr("alt").unwrap_or("").to_string(),
            url: clean_attribute(el.attr("src")),
            title: el.attr("title").map(str::to_string),
        }),

        "br" => out.push(Inline::LineBreak),

        // Everything else, block elements included, flattens to its inline content
        _ => out.extend(collect_inlines(el.children(), cx)),
    }
}

fn text_inline(text: &str, cx: &Context) -> Option<Inline> {
    if text.is_empty() {
        return None;
    }
    let text = if cx.options.escape_text {
        escape_markdown(text)
    } else {
        text.to_string()
    };
    Some(Inline::Text(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{a, body, div, em, h2, html, img, li, ol, p, pre, span, strong, ul};
    use mdtree_core::serialize;
    use pretty_assertions::assert_eq;

    fn context(options: &Options) -> Context<'_> {
        Context {
            options,
            keep: &[],
            remove: &[],
        }
    }

    fn convert_and_serialize(node: impl Into<Node>) -> String {
        let options = Options::default();
        let ast = convert(&node.into(), &context(&options));
        serialize(&ast, &options)
    }

    #[test]
    fn test_paragraph() {
        assert_eq!(convert_and_serialize(p().with_text("Hello World")), "Hello World\n");
    }

    #[test]
    fn test_root_text_becomes_paragraph() {
        assert_eq!(convert_and_serialize(Node::text("loose")), "loose\n");
    }

    #[test]
    fn test_heading() {
        assert_eq!(convert_and_serialize(h2().with_text("Example")), "## Example\n");
    }

    #[test]
    fn test_strong_and_em() {
        let node = p()
            .with_child(strong().with_text("bold"))
            .with_text(" ")
            .with_child(em().with_text("it"));
        assert_eq!(convert_and_serialize(node), "**bold** _it_\n");
    }

    #[test]
    fn test_link() {
        let node = a("https://example.com").with_text("Link");
        assert_eq!(convert_and_serialize(node), "[Link](https://example.com)\n");
    }

    #[test]
    fn test_link_without_href() {
        let node = Element::new("a").with_text("anchor");
        assert_eq!(convert_and_serialize(node), "[anchor]()\n");
    }

    #[test]
    fn test_image_without_attributes() {
        assert_eq!(convert_and_serialize(Element::new("img")), "![]()\n");
    }

    #[test]
    fn test_sibling_badges_share_a_paragraph() {
        let node = body()
            .with_child(a("https://ci").with_child(img("ci.svg", "CI")))
            .with_text(" ")
            .with_child(a("https://cov").with_child(img("cov.svg", "Coverage")))
            .with_child(p().with_text("Intro"));

        assert_eq!(
            convert_and_serialize(node),
            "[![CI](ci.svg)](https://ci) [![Coverage](cov.svg)](https://cov)\n\nIntro\n"
        );
    }

    #[test]
    fn test_div_ends_paragraph() {
        let node = body()
            .with_text("one")
            .with_child(div().with_text("two"))
            .with_text("three");
        assert_eq!(convert_and_serialize(node), "one\n\ntwo\n\nthree\n");
    }

    #[test]
    fn test_unknown_wrapper_is_transparent() {
        let node = p()
            .with_text("a ")
            .with_child(Element::new("x-note").with_child(span().with_text("b")))
            .with_text(" c");
        assert_eq!(convert_and_serialize(node), "a b c\n");
    }

    #[test]
    fn test_code_block_language() {
        let node = pre().with_child(
            Element::new("code")
                .with_attr("class", "hljs language-rust")
                .with_text("fn main() {}"),
        );
        assert_eq!(convert_and_serialize(node), "```rust\nfn main() {}\n```\n");
    }

    #[test]
    fn test_pre_collects_all_descendant_text() {
        let node = pre()
            .with_text("let x = ")
            .with_child(span().with_text("*1*"))
            .with_text(";\n");
        assert_eq!(convert_and_serialize(node), "```\nlet x = *1*;\n```\n");
    }

    #[test]
    fn test_list() {
        let node = ul()
            .with_child(li().with_text("One"))
            .with_text("\n")
            .with_child(li().with_text("Two"));
        assert_eq!(convert_and_serialize(node), "* One\n* Two\n");
    }

    #[test]
    fn test_nested_ordered_lists_number_independently() {
        let inner = ol()
            .with_child(li().with_text("a"))
            .with_child(li().with_text("b"));
        let node = ol()
            .with_child(li().with_text("x"))
            .with_child(li().with_text("y").with_child(inner))
            .with_child(li().with_text("z"));

        assert_eq!(
            convert_and_serialize(node),
            "1. x\n2. y\n   1. a\n   2. b\n3. z\n"
        );
    }

    #[test]
    fn test_script_is_dropped() {
        let node = body()
            .with_child(Element::new("script").with_text("alert(1)"))
            .with_child(p().with_text("kept"));
        assert_eq!(convert_and_serialize(node), "kept\n");
    }

    #[test]
    fn test_escape_text_option() {
        let options = Options {
            escape_text: true,
            ..Default::default()
        };
        let node: Node = p().with_text("*not bold*").into();
        let ast = convert(&node, &context(&options));
        assert_eq!(serialize(&ast, &options), "\\*not bold\\*\n");
    }

    #[test]
    fn test_empty_element() {
        assert_eq!(convert_and_serialize(html()), "");
    }
}
