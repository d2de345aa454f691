//! Error types for DHPO XML parsing

use thiserror::Error;

/// Errors that can occur while parsing an XML document
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum XmlError {
    #[error("XML syntax error: {0}")]
    Syntax(String),

    #[error("Document has no root element")]
    NoRoot,

    #[error("Unexpected content outside the document root")]
    ContentOutsideRoot,

    #[error("Closing tag </{0}> without a matching opening tag")]
    UnmatchedClose(String),

    #[error("Element <{0}> is never closed")]
    UnclosedElement(String),

    #[error("Document contains text that is not valid UTF-8")]
    NonUtf8,
}

impl From<quick_xml::Error> for XmlError {
    fn from(err: quick_xml::Error) -> Self {
        XmlError::Syntax(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for XmlError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        XmlError::Syntax(err.to_string())
    }
}

impl From<quick_xml::escape::EscapeError> for XmlError {
    fn from(err: quick_xml::escape::EscapeError) -> Self {
        XmlError::Syntax(err.to_string())
    }
}
