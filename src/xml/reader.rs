//! Builds a [`Document`] from `quick-xml` reader events.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::xml::document::{Document, Element, Node};
use crate::xml::errors::XmlError;

pub(crate) fn parse(input: &[u8]) -> Result<Document, XmlError> {
    let mut reader = Reader::from_reader(input);
    let mut buf = Vec::new();
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(start) => {
                let element = open_element(&start)?;
                if stack.is_empty() && root.is_some() {
                    return Err(XmlError::MultipleRoots {
                        name: element.name().to_string(),
                    });
                }
                stack.push(element);
            }
            Event::Empty(start) => {
                let element = open_element(&start)?;
                attach(element, &mut stack, &mut root)?;
            }
            Event::End(_) => {
                // end names are checked against the open tag by the reader
                if let Some(element) = stack.pop() {
                    attach(element, &mut stack, &mut root)?;
                }
            }
            Event::Text(text) => {
                let text = text.unescape()?;
                if let Some(parent) = stack.last_mut() {
                    if !text.trim().is_empty() {
                        parent.push_node(Node::Text(text.into_owned()));
                    }
                }
            }
            Event::CData(data) => {
                let data = std::str::from_utf8(&data)?;
                if let Some(parent) = stack.last_mut() {
                    parent.push_node(Node::CData(data.to_string()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.pop() {
        return Err(XmlError::UnclosedElement {
            name: open.name().to_string(),
        });
    }
    root.map(Document::new).ok_or(XmlError::MissingRoot)
}

fn open_element(start: &BytesStart<'_>) -> Result<Element, XmlError> {
    let qname = start.name();
    let name = std::str::from_utf8(qname.as_ref())?;
    let mut element = Element::new(name);
    for attribute in start.attributes() {
        let attribute = attribute.map_err(quick_xml::Error::from)?;
        let key = std::str::from_utf8(attribute.key.as_ref())?;
        let value = attribute.unescape_value()?;
        element.set_attribute(key, value.into_owned());
    }
    Ok(element)
}

fn attach(
    element: Element,
    stack: &mut [Element],
    root: &mut Option<Element>,
) -> Result<(), XmlError> {
    if let Some(parent) = stack.last_mut() {
        parent.push_node(Node::Element(element));
        return Ok(());
    }
    if root.is_some() {
        return Err(XmlError::MultipleRoots {
            name: element.name().to_string(),
        });
    }
    *root = Some(element);
    Ok(())
}
