//! Form Serialization

use serde::ser::{Serialize, SerializeMap, Serializer};
use url::form_urlencoded;
use veneer_dom::{Document, NodeId};

use crate::{get_value, FieldValue};

/// Which submit button makes it into the serialization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Submit {
    /// The first submit button met
    #[default]
    First,
    /// The first submit button with this name
    Named(String),
    /// No submit button
    Exclude,
}

/// Options for [`serialize_elements`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Return the key/value pairs instead of a query string
    pub hash: bool,
    pub submit: Submit,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            hash: true,
            submit: Submit::First,
        }
    }
}

impl SerializeOptions {
    /// Query string output, first submit button included
    pub fn query() -> Self {
        Self {
            hash: false,
            ..Self::default()
        }
    }
}

/// Serialized controls, in the order their names first appeared
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    entries: Vec<(String, FieldValue)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value. A repeated key turns into a list of every value given
    /// for it.
    pub fn append(&mut self, key: &str, value: FieldValue) {
        let Some((_, existing)) = self.entries.iter_mut().find(|(k, _)| k == key) else {
            self.entries.push((key.to_string(), value));
            return;
        };

        let mut values = match std::mem::replace(existing, FieldValue::Many(Vec::new())) {
            FieldValue::Single(v) => vec![v],
            FieldValue::Many(vs) => vs,
        };
        values.extend(value.values().iter().cloned());
        *existing = FieldValue::Many(values);
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// URL-encoded `key=value` pairs; lists repeat their key
    pub fn to_query_string(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.entries {
            for v in value.values() {
                query.append_pair(key, v);
            }
        }
        query.finish()
    }
}

impl Serialize for FormData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Result of a serialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Serialized {
    Hash(FormData),
    Query(String),
}

impl Serialized {
    pub fn as_hash(&self) -> Option<&FormData> {
        match self {
            Self::Hash(data) => Some(data),
            Self::Query(_) => None,
        }
    }

    pub fn as_query(&self) -> Option<&str> {
        match self {
            Self::Query(query) => Some(query),
            Self::Hash(_) => None,
        }
    }
}

/// Serialize a set of controls.
///
/// Disabled and unnamed controls, controls without a value and file
/// inputs are left out, as is every submit button but the one picked by
/// `options.submit`.
pub fn serialize_elements(
    doc: &Document,
    elements: &[NodeId],
    options: &SerializeOptions,
) -> Serialized {
    let mut data = FormData::new();
    let mut submitted = false;

    for &element in elements {
        if doc.is_disabled(element) {
            continue;
        }
        let Some(key) = doc.get_attribute(element, "name").filter(|n| !n.is_empty()) else {
            continue;
        };
        let Ok(Some(value)) = get_value(doc, element) else {
            continue;
        };

        let Ok(control) = doc.element(element) else {
            continue;
        };
        match control.control_type().as_str() {
            "file" => continue,
            "submit" => {
                let wanted = match &options.submit {
                    Submit::First => true,
                    Submit::Named(name) => name == key,
                    Submit::Exclude => false,
                };
                if submitted || !wanted {
                    continue;
                }
                submitted = true;
            }
            _ => {}
        }

        data.append(key, value);
    }

    if options.hash {
        Serialized::Hash(data)
    } else {
        Serialized::Query(data.to_query_string())
    }
}
