//! Factory functions for building element trees.
//!
//! ```rust
//! use mdtree::builder::{a, body, h2, html, p};
//! use mdtree::Node;
//!
//! let doc = html().with_child(body().with_children([
//!     h2().with_text("Example"),
//!     p().with_text("See ").with_child(a("https://docs.rs").with_text("docs")),
//! ]));
//!
//! assert_eq!(
//!     mdtree::to_markdown(&Node::from(doc)),
//!     "## Example\n\nSee [docs](https://docs.rs)\n"
//! );
//! ```

use crate::node::{Element, Node};

macro_rules! elements {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $name() -> Element {
                Element::new(stringify!($name))
            }
        )*
    };
}

elements!(
    /// Document root
    html,
    body,
    div,
    span,
    p,
    h1,
    h2,
    h3,
    h4,
    h5,
    h6,
    /// Ordered list; its `li` children are numbered from 1
    ol,
    ul,
    li,
    /// Preformatted block; its text is reproduced verbatim
    pre,
    code,
    em,
    strong,
    blockquote,
    hr,
    br,
);

/// Heading of the given level, clamped to 1..=6
pub fn heading(level: u8) -> Element {
    Element::new(&format!("h{}", level.clamp(1, 6)))
}

/// Link to `href`
pub fn a(href: &str) -> Element {
    Element::new("a").with_attr("href", href)
}

/// Image with source and alternative text
pub fn img(src: &str, alt: &str) -> Element {
    Element::new("img").with_attr("src", src).with_attr("alt", alt)
}

pub fn text(content: impl Into<String>) -> Node {
    Node::text(content)
}
