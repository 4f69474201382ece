//! Core graph data structures

mod edge;
mod network;
mod node;

#[cfg(test)]
mod tests;

pub use edge::{Edge, EdgeId};
pub use network::{Network, NetworkError, NetworkResult};
pub use node::{AttributeValue, Attributes, Node, NodeId};
