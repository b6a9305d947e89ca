//! XML document layer.
//!
//! Request and response bodies of the webservice are XML. This module turns
//! raw bytes into an owned [`Document`] tree and renders a tree back into
//! indented text. Tokenizing and escaping are delegated to `quick-xml`.
//!
//! - Comments, processing instructions and the doctype are skipped.
//! - Whitespace-only text between elements is dropped.
//! - Entities are unescaped on parse and escaped on write; CDATA is kept
//!   verbatim.
//!
//! # Example
//!
//! ```rust
//! use prestashop_webservice::xml::{Document, Element};
//!
//! let doc = Document::new(
//!     Element::new("prestashop").with_child(
//!         Element::new("customer").with_child(Element::new("firstname").with_text("John")),
//!     ),
//! );
//!
//! let text = doc.to_pretty_string().unwrap();
//! let reparsed: Document = text.parse().unwrap();
//! assert_eq!(reparsed, doc);
//! ```

mod document;
mod errors;
mod reader;
mod writer;

pub use document::{Document, Element, Node};
pub use errors::XmlError;
