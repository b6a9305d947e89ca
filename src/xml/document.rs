//! In-memory XML tree.

use std::fmt;
use std::str::FromStr;

use crate::xml::errors::XmlError;
use crate::xml::{reader, writer};

/// A parsed XML document.
///
/// Owns its whole tree; nothing in the client keeps a reference to a
/// document after returning it.
///
/// # Example
///
/// ```rust
/// use prestashop_webservice::Document;
///
/// let doc: Document = "<prestashop><customer id=\"1\"><firstname>John</firstname></customer></prestashop>"
///     .parse()
///     .unwrap();
///
/// let customer = doc.root().child("customer").unwrap();
/// assert_eq!(customer.attribute("id"), Some("1"));
/// assert_eq!(customer.child("firstname").unwrap().text(), "John");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Wraps `root` as a document.
    #[must_use]
    pub const fn new(root: Element) -> Self {
        Self { root }
    }

    /// Parses a document from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError`] if the input is not a single well-formed element.
    pub fn parse(input: &[u8]) -> Result<Self, XmlError> {
        reader::parse(input)
    }

    /// Returns the root element.
    #[must_use]
    pub const fn root(&self) -> &Element {
        &self.root
    }

    /// Consumes the document, returning its root element.
    #[must_use]
    pub fn into_root(self) -> Element {
        self.root
    }

    /// Renders the document with an XML declaration and 2-space indentation.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError`] if the writer fails.
    pub fn to_pretty_string(&self) -> Result<String, XmlError> {
        writer::to_pretty_string(self)
    }
}

impl From<Element> for Document {
    fn from(root: Element) -> Self {
        Self::new(root)
    }
}

impl FromStr for Document {
    type Err = XmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.as_bytes())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.to_pretty_string().map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

/// A node in an element's content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// A nested element.
    Element(Element),
    /// Unescaped character data.
    Text(String),
    /// A `<![CDATA[...]]>` section, kept verbatim.
    CData(String),
}

/// An XML element with its attributes and content.
///
/// Attributes keep their document order. Whitespace-only text between
/// child elements is not stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    nodes: Vec<Node>,
}

impl Element {
    /// Creates an empty element.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            nodes: Vec::new(),
        }
    }

    /// Adds an attribute, replacing any existing value under the same name.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Appends a child element.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.push_node(Node::Element(child));
        self
    }

    /// Appends a text node.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.push_node(Node::Text(text.into()));
        self
    }

    /// Appends a CDATA section.
    ///
    /// The data may contain `]]>`; the writer splits it across adjacent
    /// sections.
    #[must_use]
    pub fn with_cdata(mut self, data: impl Into<String>) -> Self {
        self.push_node(Node::CData(data.into()));
        self
    }

    /// Sets an attribute, replacing any existing value under the same name.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Appends `node`, merging it into a preceding node of the same text kind.
    pub(crate) fn push_node(&mut self, node: Node) {
        match (self.nodes.last_mut(), node) {
            (Some(Node::Text(last)), Node::Text(text))
            | (Some(Node::CData(last)), Node::CData(text)) => last.push_str(&text),
            (_, node) => self.nodes.push(node),
        }
    }

    /// Returns the element's qualified name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value of the attribute `name`, if present.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns all attributes in document order.
    #[must_use]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Returns the element's content nodes.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Iterates over child elements, skipping text.
    pub fn children(&self) -> impl Iterator<Item = &Self> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            Node::Text(_) | Node::CData(_) => None,
        })
    }

    /// Returns the first child element named `name`.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children().find(|e| e.name == name)
    }

    /// Concatenates the element's direct text and CDATA content.
    #[must_use]
    pub fn text(&self) -> String {
        self.nodes
            .iter()
            .filter_map(|node| match node {
                Node::Text(t) | Node::CData(t) => Some(t.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> Element {
        Element::new("customer")
            .with_attribute("id", "7")
            .with_child(Element::new("firstname").with_text("John"))
            .with_child(Element::new("lastname").with_text("DOE"))
            .with_child(Element::new("note").with_cdata("<b>vip</b>"))
    }

    #[test]
    fn test_navigation_helpers() {
        let element = customer();
        assert_eq!(element.name(), "customer");
        assert_eq!(element.attribute("id"), Some("7"));
        assert_eq!(element.attribute("missing"), None);
        assert_eq!(element.children().count(), 3);
        assert_eq!(element.child("lastname").unwrap().text(), "DOE");
        assert_eq!(element.child("note").unwrap().text(), "<b>vip</b>");
        assert!(element.child("email").is_none());
    }

    #[test]
    fn test_set_attribute_replaces_existing_value() {
        let element = Element::new("order")
            .with_attribute("id", "1")
            .with_attribute("id", "2");
        assert_eq!(element.attributes(), &[("id".to_string(), "2".to_string())]);
    }

    #[test]
    fn test_text_ignores_child_elements() {
        let element = Element::new("p")
            .with_text("a")
            .with_child(Element::new("b").with_text("x"))
            .with_text("c");
        assert_eq!(element.text(), "ac");
    }

    #[test]
    fn test_adjacent_text_of_same_kind_is_merged() {
        let element = Element::new("a")
            .with_text("x")
            .with_text("y")
            .with_cdata("1")
            .with_cdata("2");
        assert_eq!(
            element.nodes(),
            &[Node::Text("xy".to_string()), Node::CData("12".to_string())]
        );
    }

    #[test]
    fn test_document_into_root() {
        let doc = Document::from(customer());
        assert_eq!(doc.root().name(), "customer");
        assert_eq!(doc.into_root(), customer());
    }
}
