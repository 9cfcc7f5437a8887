//! Renderer - the main entry point for element tree to Markdown rendering.

use std::io::Write;

use mdtree_core::Block;

use crate::convert::{convert, Context};
use crate::node::Node;
use crate::utilities::escape_markdown;
use crate::{RenderError, Result};

// Re-export options from core
pub use mdtree_core::{CodeBlockStyle, HeadingStyle, Options as RenderOptions};

/// Renders element trees as Markdown.
///
/// A renderer holds only configuration; every call works on its own borrowed
/// tree and sink, so one renderer can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
    keep_filters: Vec<String>,
    remove_filters: Vec<String>,
}

impl Renderer {
    /// Create a Renderer with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Renderer with custom options
    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Render `node` as Markdown and write it to `sink`.
    ///
    /// The whole document is rendered in memory first; only the final write
    /// and flush touch the sink.
    pub fn render<W: Write>(&self, node: &Node, mut sink: W) -> Result<()> {
        let markdown = self.to_markdown(node);
        sink.write_all(markdown.as_bytes())
            .map_err(RenderError::Write)?;
        sink.flush().map_err(RenderError::Write)?;

        tracing::debug!(bytes = markdown.len(), "rendered markdown");
        Ok(())
    }

    /// Render `node` as a Markdown string
    pub fn to_markdown(&self, node: &Node) -> String {
        mdtree_core::serialize(&self.to_ast(node), &self.options)
    }

    /// Lower `node` into the Markdown AST without serializing it
    pub fn to_ast(&self, node: &Node) -> Block {
        let cx = Context {
            options: &self.options,
            keep: &self.keep_filters,
            remove: &self.remove_filters,
        };
        convert(node, &cx)
    }

    /// Get the current options
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut RenderOptions {
        &mut self.options
    }

    /// Keep elements with this tag as raw HTML
    pub fn keep(&mut self, tag: &str) -> &mut Self {
        self.keep_filters.push(tag.to_lowercase());
        self
    }

    /// Drop elements with this tag, subtree included
    pub fn remove(&mut self, tag: &str) -> &mut Self {
        self.remove_filters.push(tag.to_lowercase());
        self
    }

    /// Escape markdown special characters in a string
    pub fn escape(&self, text: &str) -> String {
        escape_markdown(text)
    }
}
