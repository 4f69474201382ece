//! Node representation and element attributes

use super::network::{NetworkError, NetworkResult};
use serde::ser::{Serialize, Serializer};
use serde::Deserialize;

/// Unique identifier for a node
///
/// Serializes as a plain string (e.g. "DB00001" or "BE0000048")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create a NodeId from a string
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Typed attribute values
///
/// Variants line up with the XGMML attribute types.
#[derive(Debug, Clone, PartialEq, serde::Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    String(String),
    Integer(i64),
    Real(f64),
    Boolean(bool),
}

impl AttributeValue {
    /// XGMML `type` name for this value
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Boolean(_) => "boolean",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(s) => write!(f, "{}", s),
            Self::Integer(n) => write!(f, "{}", n),
            Self::Real(x) => write!(f, "{}", x),
            // XGMML booleans are 0/1
            Self::Boolean(b) => write!(f, "{}", u8::from(*b)),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for AttributeValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for AttributeValue {
    fn from(x: f64) -> Self {
        Self::Real(x)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

/// Insertion-ordered attribute mapping.
///
/// Each name is written at most once; `append` refuses a second write so
/// attribute values are never silently replaced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    entries: Vec<(String, AttributeValue)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an attribute. Returns `false`, leaving the mapping untouched,
    /// if the name is already present.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.entries.push((name, value.into()));
        true
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Shorthand for string-valued attributes
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttributeValue::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// A node in the network
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Node {
    /// Unique identifier
    pub id: NodeId,
    /// Node attributes in insertion order
    pub attributes: Attributes,
}

impl Node {
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            attributes: Attributes::new(),
        }
    }

    /// Append an attribute; each name may be written once
    pub fn append_attribute(
        &mut self,
        name: &str,
        value: impl Into<AttributeValue>,
    ) -> NetworkResult<()> {
        if self.attributes.append(name, value) {
            Ok(())
        } else {
            Err(NetworkError::DuplicateAttribute {
                element: self.id.to_string(),
                name: name.to_string(),
            })
        }
    }

    /// Display label: the `name` attribute when set, otherwise the id
    pub fn label(&self) -> &str {
        self.attributes
            .get_str("name")
            .unwrap_or_else(|| self.id.as_str())
    }
}
