//! Renders a [`Document`] as indented XML text.

use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::xml::document::{Document, Element, Node};
use crate::xml::errors::XmlError;

const INDENT_SIZE: usize = 2;

pub(crate) fn to_pretty_string(doc: &Document) -> Result<String, XmlError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_SIZE);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_element(&mut writer, doc.root())?;
    String::from_utf8(writer.into_inner()).map_err(|e| XmlError::Utf8(e.utf8_error()))
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<(), XmlError> {
    let mut start = BytesStart::new(element.name());
    for (key, value) in element.attributes() {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.nodes().is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for node in element.nodes() {
        match node {
            Node::Element(child) => write_element(writer, child)?,
            Node::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
            Node::CData(data) => {
                // `]]>` cannot appear inside one section
                for section in BytesCData::escaped(data) {
                    writer.write_event(Event::CData(section))?;
                }
            }
        }
    }
    writer.write_event(Event::End(BytesEnd::new(element.name())))?;
    Ok(())
}
