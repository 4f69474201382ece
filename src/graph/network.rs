//! Network: the graph handed from assembly to export

use super::edge::{Edge, EdgeId};
use super::node::{AttributeValue, Attributes, Node, NodeId};
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised when a mutation would break a network invariant
#[derive(Debug, Error, PartialEq)]
pub enum NetworkError {
    #[error("Duplicate node: {0}")]
    DuplicateNode(NodeId),

    #[error("Duplicate edge: {0}")]
    DuplicateEdge(EdgeId),

    #[error("Edge {edge} references missing node {node}")]
    MissingEndpoint { edge: EdgeId, node: NodeId },

    #[error("Attribute '{name}' already set on {element}")]
    DuplicateAttribute { element: String, name: String },
}

/// Result type for network mutations
pub type NetworkResult<T> = Result<T, NetworkError>;

/// A titled collection of nodes and edges with document-level metadata.
///
/// Node and edge ids are unique, and every edge endpoint exists as a node.
/// Elements keep their insertion order for stable output.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Network {
    /// Document title
    pub title: String,
    /// Document-level attributes
    pub metadata: Attributes,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    #[serde(skip)]
    node_index: HashMap<NodeId, usize>,
    #[serde(skip)]
    edge_index: HashMap<EdgeId, usize>,
}

impl Network {
    /// Create an empty network with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Append a document-level attribute
    pub fn append_metadata(
        &mut self,
        name: &str,
        value: impl Into<AttributeValue>,
    ) -> NetworkResult<()> {
        if self.metadata.append(name, value) {
            Ok(())
        } else {
            Err(NetworkError::DuplicateAttribute {
                element: "network".to_string(),
                name: name.to_string(),
            })
        }
    }

    /// Add a node with no attributes, returning it for population
    pub fn add_node(&mut self, id: impl Into<NodeId>) -> NetworkResult<&mut Node> {
        let id = id.into();
        if self.node_index.contains_key(&id) {
            return Err(NetworkError::DuplicateNode(id));
        }
        let idx = self.nodes.len();
        self.node_index.insert(id.clone(), idx);
        self.nodes.push(Node::new(id));
        Ok(&mut self.nodes[idx])
    }

    /// Add an edge between two existing nodes
    pub fn add_edge(
        &mut self,
        id: EdgeId,
        source: &NodeId,
        target: &NodeId,
    ) -> NetworkResult<&mut Edge> {
        if self.edge_index.contains_key(&id) {
            return Err(NetworkError::DuplicateEdge(id));
        }
        for endpoint in [source, target] {
            if !self.contains_node(endpoint) {
                return Err(NetworkError::MissingEndpoint {
                    edge: id,
                    node: endpoint.clone(),
                });
            }
        }
        let idx = self.edges.len();
        self.edge_index.insert(id.clone(), idx);
        self.edges.push(Edge::new(id, source.clone(), target.clone()));
        Ok(&mut self.edges[idx])
    }

    /// Get a node by ID
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.node_index.get(id).map(|&i| &self.nodes[i])
    }

    /// Get a mutable reference to a node
    pub fn node_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        self.node_index.get(id).map(|&i| &mut self.nodes[i])
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.node_index.contains_key(id)
    }

    /// Get an edge by ID
    pub fn edge(&self, id: &EdgeId) -> Option<&Edge> {
        self.edge_index.get(id).map(|&i| &self.edges[i])
    }

    /// Get all nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Get all edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Edges leaving the given node
    pub fn edges_from<'a>(&'a self, id: &'a NodeId) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| &e.source == id)
    }

    /// Edges arriving at the given node
    pub fn edges_to<'a>(&'a self, id: &'a NodeId) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| &e.target == id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
