//! Error types for the DHPO SOAP transport.

use thiserror::Error;

/// Errors raised while talking to the DHPO web service.
///
/// `Fault` and `UnexpectedStatus` mean the service itself rejected the
/// call. Business-level failures (negative result codes, populated
/// `errorMessage` fields) are not errors at this layer and come back
/// inside the decoded records.
#[derive(Debug, Error)]
pub enum SoapError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build the HTTP transport: {0}")]
    Connect(#[source] reqwest::Error),

    /// The request never produced an HTTP response.
    #[error("Request to DHPO failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Non-success status with no SOAP fault in the body.
    #[error("DHPO returned HTTP {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    /// The service answered with a SOAP fault envelope.
    #[error("DHPO returned a SOAP fault: {code}: {reason}")]
    Fault { code: String, reason: String },

    /// The response body is not a well-formed SOAP envelope.
    #[error("Malformed SOAP response: {0}")]
    MalformedEnvelope(#[from] dhpo_xml::XmlError),

    /// A field the operation always returns was absent.
    #[error("SOAP response is missing the {0} element")]
    MissingField(String),

    /// The result element did not hold an integer.
    #[error("Field {field} does not hold a result code: {value:?}")]
    InvalidResultCode { field: String, value: String },
}
