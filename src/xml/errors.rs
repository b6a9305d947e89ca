//! Errors raised while reading or writing XML documents.

use thiserror::Error;

/// Error returned when a body cannot be parsed as XML, or a document cannot
/// be written back out.
#[derive(Debug, Error)]
pub enum XmlError {
    /// The tokenizer rejected the input (bad syntax, mismatched end tag,
    /// unknown entity, malformed attribute).
    #[error("malformed XML: {0}")]
    Syntax(#[from] quick_xml::Error),

    /// Writing the serialized document failed.
    #[error("failed to write XML: {0}")]
    Io(#[from] std::io::Error),

    /// A name, CDATA section or serialized output was not valid UTF-8.
    #[error("XML is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The input contained no element at all (for example an empty body).
    #[error("XML document has no root element")]
    MissingRoot,

    /// The input ended while an element was still open.
    #[error("XML element <{name}> is never closed")]
    UnclosedElement {
        /// Name of the innermost element left open.
        name: String,
    },

    /// A second top-level element followed the root element.
    #[error("XML document has more than one root element (found <{name}>)")]
    MultipleRoots {
        /// Name of the extra top-level element.
        name: String,
    },
}
