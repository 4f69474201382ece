//! Edge representation

use super::network::{NetworkError, NetworkResult};
use super::node::{AttributeValue, Attributes, NodeId};
use serde::{Deserialize, Serialize};

/// Unique identifier for an edge
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(String);

impl EdgeId {
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id for a directed pair, `"<source>-<target>"`
    pub fn for_pair(source: &NodeId, target: &NodeId) -> Self {
        Self(format!("{}-{}", source, target))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EdgeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A directed edge between two existing nodes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    /// Unique identifier
    pub id: EdgeId,
    /// Source node
    pub source: NodeId,
    /// Target node
    pub target: NodeId,
    /// Edge attributes in insertion order
    pub attributes: Attributes,
}

impl Edge {
    pub fn new(id: EdgeId, source: NodeId, target: NodeId) -> Self {
        Self {
            id,
            source,
            target,
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
}
