//! # mdtree
//!
//! Render element trees as Markdown.
//!
//! Documents are described as a tree of [`Node`]s (elements with attributes
//! and children, plus text leaves) and rendered in one pass into Markdown:
//! headings, paragraphs, lists, links, images and fenced code blocks.
//!
//! ## Design
//!
//! Rendering happens in two steps, the same way for every caller:
//!
//! - the tree is lowered into the Markdown AST of `mdtree-core`
//! - the AST is serialized and written to a sink in one write
//!
//! Input trees are borrowed and never modified; a [`Renderer`] holds only
//! options, so independent renders never interfere.
//!
//! ## Example
//!
//! ```rust
//! use mdtree::builder::{a, body, h2, html, li, ol, p};
//! use mdtree::{Node, Renderer};
//!
//! let doc: Node = html()
//!     .with_child(body().with_children([
//!         h2().with_text("Example"),
//!         p().with_text("Package ")
//!             .with_child(a("https://godoc.org/pkg/github.com/gregoryv/cmdline").with_text("cmdline")),
//!         ol().with_children([li().with_text("one"), li().with_text("two")]),
//!     ]))
//!     .into();
//!
//! let mut readme = Vec::new();
//! Renderer::new().render(&doc, &mut readme).unwrap();
//!
//! let markdown = String::from_utf8(readme).unwrap();
//! assert!(markdown.contains("## Example"));
//! assert!(markdown.contains("[cmdline](https://godoc.org/pkg/github.com/gregoryv/cmdline)"));
//! assert!(markdown.contains("1. one\n2. two"));
//! ```

pub mod builder;
mod convert;
pub mod node;
mod renderer;
mod utilities;

pub use node::{Element, Node};
pub use renderer::{CodeBlockStyle, HeadingStyle, RenderOptions, Renderer};
pub use utilities::{escape_markdown, is_block, is_void};

/// Error type for rendering operations
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The sink rejected a write or flush
    #[error("failed to write markdown: {0}")]
    Write(#[source] std::io::Error),

    #[error("invalid tag name: {0:?}")]
    InvalidTag(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;

/// Render `node` with default options into a Markdown string
pub fn to_markdown(node: &Node) -> String {
    Renderer::new().to_markdown(node)
}

/// Render `node` with default options into `sink`
pub fn render<W: std::io::Write>(node: &Node, sink: W) -> Result<()> {
    Renderer::new().render(node, sink)
}
