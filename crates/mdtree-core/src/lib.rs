//! mdtree-core - Markdown AST and serialization
//!
//! This crate provides the Markdown data structures and their serialization.
//! `mdtree` lowers element trees into this AST before writing them out.
//!
//! # Architecture
//!
//! ```text
//! Element tree ──convert──▶ ┌──────────────┐
//!                           │ Markdown AST │ ──serialize──▶ Markdown String
//!                           └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use mdtree_core::{Block, Inline, Options, serialize};
//!
//! let ast = Block::Document(vec![
//!     Block::Heading {
//!         level: 2,
//!         content: vec![Inline::Text("Example".to_string())],
//!     },
//!     Block::Paragraph(vec![
//!         Inline::Text("This is ".to_string()),
//!         Inline::Strong(vec![Inline::Text("bold".to_string())]),
//!         Inline::Text(" text.".to_string()),
//!     ]),
//! ]);
//!
//! let markdown = serialize(&ast, &Options::default());
//! assert_eq!(markdown, "## Example\n\nThis is **bold** text.\n");
//! ```

mod ast;
mod options;
mod serialize;

pub use ast::{inlines_are_blank, Block, Inline, ListItem};
pub use options::{CodeBlockStyle, HeadingStyle, Options};
pub use serialize::{fence_for, serialize};
