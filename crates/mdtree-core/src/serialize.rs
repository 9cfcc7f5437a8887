//! Markdown AST serialization
//!
//! Converts Markdown AST nodes into Markdown text. Blocks are written without
//! trailing newlines and joined by exactly one blank line, so the content of
//! code blocks never passes through any newline normalization.

use crate::ast::{Block, Inline, ListItem};
use crate::options::{CodeBlockStyle, HeadingStyle, Options};

const BLOCK_SEPARATOR: &str = "\n\n";

/// Ends a list so that a following list of the same kind starts afresh
const LIST_BREAK: &str = "<!-- -->";

/// Serialize a block to Markdown string
///
/// Non-empty output ends with a single newline; a blank tree yields `""`.
pub fn serialize(block: &Block, options: &Options) -> String {
    let mut output = String::with_capacity(4096);
    if !block.is_blank() {
        serialize_block(block, options, &mut output);
    }
    if !output.is_empty() {
        output.push('\n');
    }
    output
}

fn serialize_block(block: &Block, options: &Options, out: &mut String) {
    match block {
        Block::Document(blocks) => serialize_blocks(blocks, options, out),

        Block::Heading { level, content } => serialize_heading(*level, content, options, out),

        Block::Paragraph(inlines) => {
            let text = render_inlines(inlines, options);
            out.push_str(text.trim());
        }

        Block::BlockQuote(blocks) => {
            let mut inner = String::new();
            serialize_blocks(blocks, options, &mut inner);

            for (i, line) in inner.split('\n').enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                out.push('>');
                if !line.is_empty() {
                    out.push(' ');
                    out.push_str(line);
                }
            }
        }

        Block::List {
            ordered,
            start,
            items,
        } => serialize_list(*ordered, *start, items, options, out),

        Block::CodeBlock {
            language,
            code,
            fenced,
        } => serialize_code_block(language.as_deref(), code, *fenced, options, out),

        Block::ThematicBreak => out.push_str(&options.hr),

        Block::HtmlBlock(html) => out.push_str(html.trim_end()),
    }
}

fn serialize_blocks(blocks: &[Block], options: &Options, out: &mut String) {
    let mut previous: Option<&Block> = None;
    for block in blocks.iter().filter(|b| !b.is_blank()) {
        if let Some(previous) = previous {
            out.push_str(BLOCK_SEPARATOR);
            if lists_would_merge(previous, block) {
                out.push_str(LIST_BREAK);
                out.push_str(BLOCK_SEPARATOR);
            }
        }
        serialize_block(block, options, out);
        previous = Some(block);
    }
}

/// CommonMark continues a list across blank lines when the next list uses
/// the same kind of marker
fn lists_would_merge(previous: &Block, next: &Block) -> bool {
    matches!(
        (previous, next),
        (Block::List { ordered: a, .. }, Block::List { ordered: b, .. }) if a == b
    )
}

fn serialize_heading(level: u8, content: &[Inline], options: &Options, out: &mut String) {
    let text = render_inlines(content, options);
    let text = text.trim();
    if text.is_empty() {
        return;
    }

    let level = level.clamp(1, 6);
    match options.heading_style {
        HeadingStyle::Setext if level <= 2 => {
            let underline = if level == 1 { '=' } else { '-' };
            out.push_str(text);
            out.push('\n');
            out.extend(std::iter::repeat(underline).take(text.chars().count()));
        }
        _ => {
            out.extend(std::iter::repeat('#').take(level as usize));
            out.push(' ');
            out.push_str(text);
        }
    }
}

fn serialize_list(ordered: bool, start: u32, items: &[ListItem], options: &Options, out: &mut String) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }

        let marker = if ordered {
            format!("{}. ", start + i as u32)
        } else {
            format!("{} ", options.bullet_list_marker)
        };

        let body = render_list_item(item, options);
        push_with_hanging_indent(&marker, &body, out);
    }
}

/// Render the blocks of one list item; a nested list hugs the line above it
fn render_list_item(item: &ListItem, options: &Options) -> String {
    let mut body = String::new();
    let mut first = true;

    for block in item.content.iter().filter(|b| !b.is_blank()) {
        if !first {
            match block {
                Block::List { .. } => body.push('\n'),
                _ => body.push_str(BLOCK_SEPARATOR),
            }
        }
        serialize_block(block, options, &mut body);
        first = false;
    }

    body
}

/// Write `body` after `marker`, indenting continuation lines to the marker width
fn push_with_hanging_indent(marker: &str, body: &str, out: &mut String) {
    if body.is_empty() {
        out.push_str(marker.trim_end());
        return;
    }

    let indent = " ".repeat(marker.chars().count());
    for (i, line) in body.split('\n').enumerate() {
        if i == 0 {
            out.push_str(marker);
        } else {
            out.push('\n');
            if !line.is_empty() {
                out.push_str(&indent);
            }
        }
        out.push_str(line);
    }
}

fn serialize_code_block(
    language: Option<&str>,
    code: &str,
    fenced: bool,
    options: &Options,
    out: &mut String,
) {
    let use_fenced = fenced || options.code_block_style == CodeBlockStyle::Fenced;

    if use_fenced {
        let fence = fence_for(code, &options.fence);
        out.push_str(&fence);
        out.push_str(language.unwrap_or(""));
        out.push('\n');
        out.push_str(code);
        if !code.is_empty() && !code.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&fence);
    } else {
        let code = code.strip_suffix('\n').unwrap_or(code);
        for (i, line) in code.split('\n').enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str("    ");
            out.push_str(line);
        }
    }
}

/// Pick a fence longer than any run of the fence character inside `code`.
pub fn fence_for(code: &str, preferred: &str) -> String {
    let fence_char = preferred.chars().next().unwrap_or('`');
    let min_len = preferred.chars().count().max(3);
    let needed = longest_run(code, fence_char) + 1;

    std::iter::repeat(fence_char)
        .take(min_len.max(needed))
        .collect()
}

fn longest_run(text: &str, target: char) -> usize {
    text.chars()
        .fold((0, 0), |(max, current), c| {
            if c == target {
                (max.max(current + 1), current + 1)
            } else {
                (max, 0)
            }
        })
        .0
}

fn render_inlines(inlines: &[Inline], options: &Options) -> String {
    let mut out = String::new();
    serialize_inlines(inlines, options, &mut out);
    out
}

fn serialize_inlines(inlines: &[Inline], options: &Options, out: &mut String) {
    for inline in inlines {
        serialize_inline(inline, options, out);
    }
}

fn serialize_inline(inline: &Inline, options: &Options, out: &mut String) {
    match inline {
        Inline::Text(text) => out.push_str(text),

        Inline::Strong(content) => {
            let inner = render_inlines(content, options);
            if !inner.trim().is_empty() {
                out.push_str(&options.strong_delimiter);
                out.push_str(&inner);
                out.push_str(&options.strong_delimiter);
            }
        }

        Inline::Emphasis(content) => {
            let inner = render_inlines(content, options);
            if !inner.trim().is_empty() {
                out.push(options.em_delimiter);
                out.push_str(&inner);
                out.push(options.em_delimiter);
            }
        }

        Inline::Code(code) => {
            if !code.is_empty() {
                let backticks = "`".repeat(longest_run(code, '`') + 1);
                let space = if code.starts_with('`') || code.ends_with('`') {
                    " "
                } else {
                    ""
                };
                out.push_str(&backticks);
                out.push_str(space);
                out.push_str(code);
                out.push_str(space);
                out.push_str(&backticks);
            }
        }

        Inline::Link {
            content,
            url,
            title,
        } => {
            out.push('[');
            serialize_inlines(content, options, out);
            out.push(']');
            push_destination(url, title.as_deref(), out);
        }

        Inline::Image { alt, url, title } => {
            out.push_str("![");
            out.push_str(alt);
            out.push(']');
            push_destination(url, title.as_deref(), out);
        }

        Inline::LineBreak => out.push_str("  \n"),

        Inline::HtmlInline(html) => out.push_str(html),
    }
}

/// Write `(url "title")`, bracketing destinations that contain whitespace
fn push_destination(url: &str, title: Option<&str>, out: &mut String) {
    out.push('(');
    if url.contains(char::is_whitespace) {
        out.push('<');
        out.push_str(url);
        out.push('>');
    } else {
        out.push_str(url);
    }
    if let Some(t) = title {
        out.push_str(" \"");
        out.push_str(&t.replace('"', "\\\""));
        out.push('"');
    }
    out.push(')');
}
