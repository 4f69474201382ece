//! Assembly results: counts and per-run diagnostics

use crate::graph::Network;

/// Elements created during one assembly pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssemblyCounts {
    pub drugs: usize,
    pub targets: usize,
    pub edges: usize,
}

/// Kind of record a node was created for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Drug,
    Target,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Drug => write!(f, "drug"),
            Self::Target => write!(f, "target"),
        }
    }
}

/// A recoverable problem noticed during assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A resolution call failed; it contributed no identifiers
    ResolutionFailed {
        target_id: String,
        source_id: String,
        namespace: String,
        reason: String,
    },
    /// A record's id is already used by a node of the other kind; the record
    /// (or, for a target, the edge to it) was skipped
    KindConflict {
        node_id: String,
        existing: NodeKind,
        requested: NodeKind,
    },
    /// Two different (drug, target) pairs produced the same edge id; the
    /// later pair was not linked
    EdgeIdCollision {
        edge_id: String,
        existing: (String, String),
        requested: (String, String),
    },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ResolutionFailed {
                target_id,
                source_id,
                namespace,
                reason,
            } => write!(
                f,
                "mapping {} to {} failed for target {}: {}",
                source_id, namespace, target_id, reason
            ),
            Self::KindConflict {
                node_id,
                existing,
                requested,
            } => write!(
                f,
                "{} id {} is already a {} node, skipped",
                requested, node_id, existing
            ),
            Self::EdgeIdCollision {
                edge_id,
                existing,
                requested,
            } => write!(
                f,
                "edge id {} for {} -> {} is already used by {} -> {}, skipped",
                edge_id, requested.0, requested.1, existing.0, existing.1
            ),
        }
    }
}

/// The populated network with its counts and diagnostics
#[derive(Debug, Clone)]
pub struct Assembly {
    pub network: Network,
    pub counts: AssemblyCounts,
    pub diagnostics: Vec<Diagnostic>,
}
