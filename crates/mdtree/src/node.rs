//! Element tree used as renderer input.
//!
//! A [`Node`] is either an [`Element`] (tag, ordered attributes, children) or a
//! text leaf. Trees are built by the caller, typically through the factory
//! functions in [`crate::builder`], and borrowed immutably by the renderer.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::utilities::{escape_html, is_void};
use crate::{RenderError, Result};

static TAG_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9-]*$").expect("tag name pattern compiles"));

/// A node in the element tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element with a lowercase tag name, ordered attributes and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: IndexMap<String, String>,
    children: Vec<Node>,
}

impl Element {
    /// Create an element without validating the tag name.
    ///
    /// Use [`Element::try_new`] for names coming from outside the program.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_lowercase(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Create an element, rejecting names that are not valid HTML tag names
    pub fn try_new(tag: &str) -> Result<Self> {
        if !TAG_NAME.is_match(tag) {
            return Err(RenderError::InvalidTag(tag.to_string()));
        }
        Ok(Self::new(tag))
    }

    /// Get the tag name (lowercase)
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Check if an attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Attributes in insertion order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Set an attribute; an existing key keeps its position
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_lowercase(), value.to_string());
    }

    /// Add a child node
    pub fn add_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.add_child(child);
        self
    }

    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(Node::Text(text.into()))
    }

    /// Get all text content from this element and descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.push_text_content(&mut out);
        out
    }

    fn push_text_content(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(el) => el.push_text_content(out),
            }
        }
    }

    /// Reconstruct outer HTML (for keep filters)
    pub fn outer_html(&self) -> String {
        let mut open = format!("<{}", self.tag);
        for (name, value) in &self.attributes {
            if value.is_empty() {
                open.push(' ');
                open.push_str(name);
            } else {
                open.push_str(&format!(" {}=\"{}\"", name, escape_html(value)));
            }
        }
        open.push('>');

        if is_void(&self.tag) {
            open
        } else {
            format!("{}{}</{}>", open, self.inner_html(), self.tag)
        }
    }

    /// Reconstruct inner HTML
    pub fn inner_html(&self) -> String {
        self.children.iter().map(Node::outer_html).collect()
    }
}

impl Node {
    /// Create a new element node
    pub fn element(tag: &str) -> Self {
        Node::Element(Element::new(tag))
    }

    /// Create a new text node
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    /// Get the tag name of an element node
    pub fn tag_name(&self) -> Option<&str> {
        self.as_element().map(Element::tag)
    }

    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(el) => el.text_content(),
        }
    }

    pub fn outer_html(&self) -> String {
        match self {
            Node::Text(text) => escape_html(text),
            Node::Element(el) => el.outer_html(),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_element() {
        let node = Node::element("DIV");
        assert!(node.is_element());
        assert_eq!(node.tag_name(), Some("div"));
    }

    #[test]
    fn test_create_text() {
        let node = Node::text("Hello World");
        assert!(node.is_text());
        assert_eq!(node.tag_name(), None);
        assert_eq!(node.text_content(), "Hello World");
    }

    #[test]
    fn test_try_new_rejects_bad_names() {
        assert!(Element::try_new("h2").is_ok());
        assert!(Element::try_new("my-widget").is_ok());
        assert!(matches!(
            Element::try_new("2col"),
            Err(RenderError::InvalidTag(name)) if name == "2col"
        ));
        assert!(Element::try_new("").is_err());
        assert!(Element::try_new("a b").is_err());
    }

    #[test]
    fn test_attributes_keep_insertion_order() {
        let el = Element::new("img")
            .with_attr("src", "a.png")
            .with_attr("alt", "A")
            .with_attr("SRC", "b.png");

        assert_eq!(el.attr("src"), Some("b.png"));
        assert_eq!(el.attr("Alt"), Some("A"));
        assert_eq!(el.attr("title"), None);
        let names: Vec<_> = el.attributes().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["src", "alt"]);
    }

    #[test]
    fn test_children() {
        let parent = Element::new("div")
            .with_text("Hello")
            .with_child(Element::new("span"))
            .with_child("World");

        assert_eq!(parent.children().len(), 3);
        assert_eq!(parent.element_children().count(), 1);
    }

    #[test]
    fn test_text_content() {
        let div = Element::new("div")
            .with_text("Hello ")
            .with_child(Element::new("span").with_text("World"));

        assert_eq!(div.text_content(), "Hello World");
    }

    #[test]
    fn test_outer_html() {
        let a = Element::new("a")
            .with_attr("href", "https://example.com?a=1&b=2")
            .with_text("x < y");

        assert_eq!(
            a.outer_html(),
            "<a href=\"https://example.com?a=1&amp;b=2\">x &lt; y</a>"
        );
    }

    #[test]
    fn test_void_element_html() {
        assert_eq!(Element::new("br").outer_html(), "<br>");

        let img = Element::new("img")
            .with_attr("src", "test.png")
            .with_attr("alt", "Test");
        assert_eq!(img.outer_html(), "<img src=\"test.png\" alt=\"Test\">");
    }
}
