//! Graph assembly
//!
//! Turns the ingested drug set into a drug-target network, enriching
//! target nodes with identifiers from the mapping backend.

mod builder;
mod profile;
mod report;

pub use builder::{Assembler, INTERACTION_TYPE, RESOLUTION_NAMESPACES};
pub use profile::{InclusionMode, NetworkProfile, DEFAULT_DATASET, DEFAULT_SOURCE_URL};
pub use report::{Assembly, AssemblyCounts, Diagnostic, NodeKind};
