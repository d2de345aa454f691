//! # DHPO XML
//!
//! Document trees for the XML payloads carried inside DHPO SOAP responses.
//!
//! This crate provides:
//! - A tagged document tree ([`Document`]/[`Element`]) preserving element
//!   names, attributes, child order and character data exactly as received
//! - A strict parser built on `quick-xml`
//! - A JSON mapping that reproduces the dict shape the HTTP façade has
//!   always returned
//!
//! ## JSON Mapping Rules
//!
//! 1. The root element name becomes the single top-level key
//! 2. Attributes map to `@name` keys
//! 3. Character data maps to `#text` when attributes or children are also
//!    present, otherwise the element maps to its text directly
//! 4. Repeated sibling elements with the same name collapse into an array,
//!    preserving document order
//! 5. Elements with no attributes, children or text map to `null`
//! 6. Every scalar stays a JSON string; nothing is coerced to numbers or
//!    booleans
//!
//! ## Example
//!
//! ```rust
//! use dhpo_xml::parse;
//!
//! let doc = parse("<Header><SenderID>DHA-F-0045446</SenderID></Header>").unwrap();
//! let json = doc.to_json();
//! assert_eq!(json["Header"]["SenderID"], "DHA-F-0045446");
//! ```

mod document;
mod error;
mod parser;

pub use document::*;
pub use error::*;
pub use parser::*;
