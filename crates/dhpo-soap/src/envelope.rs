//! SOAP 1.1 envelope encoding and decoding.
//!
//! The DHPO service is a classic ASMX endpoint: every operation lives in
//! the `http://www.eClaimLink.ae/` namespace, requests carry a quoted
//! `SOAPAction` header and responses wrap their out-parameters in an
//! `<{Operation}Response>` element. Decoding matches on local names, so
//! the prefix choices of the server do not matter.

use std::fmt::Write;

use dhpo_xml::Element;
use quick_xml::escape::escape;

use crate::error::SoapError;

/// Namespace every DHPO operation belongs to.
pub const DHPO_NAMESPACE: &str = "http://www.eClaimLink.ae/";

const SOAP_ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// `SOAPAction` header value for an operation, quotes included.
pub fn soap_action(operation: &str) -> String {
    format!("\"{}{}\"", DHPO_NAMESPACE, operation)
}

/// Encode a request envelope.
///
/// Parameters are written in slice order, which matches the order the
/// service declares them in its WSDL. Values are entity-escaped.
pub fn build_request(operation: &str, params: &[(&str, &str)]) -> String {
    let mut fields = String::new();
    for (name, value) in params {
        let _ = write!(fields, "<{}>{}</{}>", name, escape(*value), name);
    }
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
         <soap:Envelope xmlns:soap=\"{}\"><soap:Body>\
         <{} xmlns=\"{}\">{}</{}>\
         </soap:Body></soap:Envelope>",
        SOAP_ENVELOPE_NS, operation, DHPO_NAMESPACE, fields, operation
    )
}

/// Out-parameters of a decoded response, keyed by local element name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseFields {
    fields: Vec<(String, String)>,
}

impl ResponseFields {
    /// Text of a field. `None` means the element was absent; an element
    /// that was present but empty comes back as `Some("")`.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    /// Owned text of a field.
    pub fn string(&self, name: &str) -> Option<String> {
        self.text(name).map(str::to_string)
    }

    /// The integer result code an operation always returns.
    pub fn result_code(&self, name: &str) -> Result<i64, SoapError> {
        let raw = self
            .text(name)
            .ok_or_else(|| SoapError::MissingField(name.to_string()))?;
        raw.trim()
            .parse()
            .map_err(|_| SoapError::InvalidResultCode {
                field: name.to_string(),
                value: raw.to_string(),
            })
    }
}

/// Decode the out-parameters of an `<{operation}Response>` element.
///
/// A SOAP fault anywhere in the body surfaces as [`SoapError::Fault`],
/// even when the transport status was a success.
pub fn decode_response(operation: &str, body: &str) -> Result<ResponseFields, SoapError> {
    let document = dhpo_xml::parse(body)?;

    if let Some(fault) = find_fault(&document.root) {
        return Err(fault);
    }

    let wrapper_name = format!("{}Response", operation);
    let wrapper = find_by_local_name(&document.root, &wrapper_name)
        .ok_or(SoapError::MissingField(wrapper_name))?;

    let fields = wrapper
        .children
        .iter()
        .map(|child| {
            (
                local_name(&child.name).to_string(),
                child.text.clone().unwrap_or_default(),
            )
        })
        .collect();

    Ok(ResponseFields { fields })
}

/// Pull a fault out of an error response body, if there is one.
///
/// ASMX reports faults with HTTP 500, so this is tried before giving up
/// on a non-success status.
pub fn decode_fault(body: &str) -> Option<SoapError> {
    let document = dhpo_xml::parse(body).ok()?;
    find_fault(&document.root)
}

fn find_fault(root: &Element) -> Option<SoapError> {
    let fault = find_by_local_name(root, "Fault")?;
    let text_of = |name: &str| {
        fault
            .children
            .iter()
            .find(|child| local_name(&child.name) == name)
            .and_then(|child| child.text.clone())
            .unwrap_or_default()
    };
    Some(SoapError::Fault {
        code: text_of("faultcode"),
        reason: text_of("faultstring"),
    })
}

fn find_by_local_name<'a>(element: &'a Element, name: &str) -> Option<&'a Element> {
    if local_name(&element.name) == name {
        return Some(element);
    }
    element
        .children
        .iter()
        .find_map(|child| find_by_local_name(child, name))
}

fn local_name(name: &str) -> &str {
    match name.rfind(':') {
        Some(index) => &name[index + 1..],
        None => name,
    }
}
