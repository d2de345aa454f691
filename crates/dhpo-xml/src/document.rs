//! XML document tree
//!
//! The tree keeps whatever the backend sent: element names with their
//! prefixes, attribute order, child order and character data. Nothing is
//! normalized until the JSON mapping is asked for.

use serde::ser::{Serialize, Serializer};
use serde_json::{map::Entry, Map, Value};

/// A single XML element: name, attributes, ordered children and text
///
/// `text` holds the concatenated character data of the element; interleaved
/// markup positions are not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
    pub text: Option<String>,
}

impl Element {
    /// Create an element with the given name and nothing else
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// First direct child with the given name
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// JSON value for this element's content, without its own name
    fn content_value(&self) -> Value {
        let mut map = Map::new();

        for (name, value) in &self.attributes {
            map.insert(format!("@{}", name), Value::String(value.clone()));
        }

        for child in &self.children {
            let value = child.content_value();
            match map.entry(child.name.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(value);
                }
                // A repeated sibling name collapses into an array
                Entry::Occupied(mut slot) => {
                    let existing = slot.get_mut();
                    if let Value::Array(items) = existing {
                        items.push(value);
                    } else {
                        let first = existing.take();
                        *existing = Value::Array(vec![first, value]);
                    }
                }
            }
        }

        match (&self.text, map.is_empty()) {
            (None, true) => Value::Null,
            (Some(text), true) => Value::String(text.clone()),
            (None, false) => Value::Object(map),
            (Some(text), false) => {
                map.insert("#text".to_string(), Value::String(text.clone()));
                Value::Object(map)
            }
        }
    }
}

/// A parsed XML document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub root: Element,
}

impl Document {
    /// Map the document to the dict-shaped JSON used by the HTTP façade
    ///
    /// See the crate documentation for the mapping rules.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert(self.root.name.clone(), self.root.content_value());
        Value::Object(map)
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
