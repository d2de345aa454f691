//! Strict XML parsing into document trees
//!
//! Used for the envelope of every SOAP response, where malformed XML is a
//! backend failure. The lenient payload handling lives with the SOAP
//! client, not here.

use crate::document::{Document, Element};
use crate::error::XmlError;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Parse an XML string into a document tree
///
/// # Errors
///
/// Returns [`XmlError`] on any malformed input: syntax errors, unbalanced
/// tags, a missing root, or content outside the root element.
///
/// # Example
///
/// ```rust
/// use dhpo_xml::parse;
///
/// let doc = parse(r#"<Remittance ID="R-1"><Status>PAID</Status></Remittance>"#).unwrap();
/// assert_eq!(doc.root.name, "Remittance");
/// assert_eq!(doc.root.child("Status").unwrap().text.as_deref(), Some("PAID"));
/// ```
pub fn parse(xml: &str) -> Result<Document, XmlError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut root: Option<Element> = None;
    let mut stack: Vec<Element> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                guard_single_root(&root, &stack)?;
                stack.push(element_from_start(&start)?);
            }
            Event::Empty(start) => {
                guard_single_root(&root, &stack)?;
                let element = element_from_start(&start)?;
                close_element(&mut root, &mut stack, element);
            }
            Event::End(end) => {
                let element = stack.pop().ok_or_else(|| {
                    let name = String::from_utf8_lossy(end.name().as_ref()).into_owned();
                    XmlError::UnmatchedClose(name)
                })?;
                close_element(&mut root, &mut stack, element);
            }
            Event::Text(text) => {
                let raw = std::str::from_utf8(&text).map_err(|_| XmlError::NonUtf8)?;
                let unescaped = unescape(raw)?;
                append_text(&mut stack, &unescaped)?;
            }
            Event::CData(cdata) => {
                let raw = cdata.into_inner();
                let literal = std::str::from_utf8(&raw).map_err(|_| XmlError::NonUtf8)?;
                append_text(&mut stack, literal)?;
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions and doctypes
            // carry no content for the tree
            _ => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(XmlError::UnclosedElement(open.name));
    }
    root.map(|root| Document { root }).ok_or(XmlError::NoRoot)
}

fn guard_single_root(root: &Option<Element>, stack: &[Element]) -> Result<(), XmlError> {
    if root.is_some() && stack.is_empty() {
        return Err(XmlError::ContentOutsideRoot);
    }
    Ok(())
}

fn element_from_start(start: &BytesStart) -> Result<Element, XmlError> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|_| XmlError::NonUtf8)?
        .to_string();

    let mut element = Element::new(name);
    for attribute in start.attributes() {
        let attribute = attribute?;
        let key = std::str::from_utf8(attribute.key.as_ref())
            .map_err(|_| XmlError::NonUtf8)?
            .to_string();
        let raw = std::str::from_utf8(&attribute.value).map_err(|_| XmlError::NonUtf8)?;
        let value = unescape(raw)?.into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

/// Attach a completed element to its parent, or make it the root
fn close_element(root: &mut Option<Element>, stack: &mut [Element], element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}

fn append_text(stack: &mut [Element], text: &str) -> Result<(), XmlError> {
    if text.is_empty() {
        return Ok(());
    }
    let current = stack.last_mut().ok_or(XmlError::ContentOutsideRoot)?;
    match &mut current.text {
        Some(existing) => existing.push_str(text),
        None => current.text = Some(text.to_string()),
    }
    Ok(())
}
