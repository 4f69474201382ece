//! drugnet: DrugBank drug-target network builder
//!
//! Reads a DrugBank XML release, assembles a network of drugs and their
//! protein targets, enriches targets with equivalent gene/protein
//! identifiers, and writes the result as XGMML for Cytoscape.
//!
//! # Stages
//!
//! - **Ingest** ([`ingest`]): stream root-level `<drug>` records into a
//!   de-duplicated [`DrugSet`]
//! - **Assemble** ([`assembly`]): one node per drug and per distinct target,
//!   one edge per drug-target pair
//! - **Resolve** ([`mapping`]): UniProt accessions mapped to Ensembl,
//!   Entrez Gene and HGNC identifiers
//! - **Export** ([`export`]): atomic XGMML or JSON output
//!
//! # Example
//!
//! ```
//! use drugnet::{Assembler, DrugBankParser, InMemoryMapper, NetworkProfile};
//!
//! let xml = r#"<drugbank xmlns="http://www.drugbank.ca">
//!   <drug><drugbank-id primary="true">DB00001</drugbank-id><name>Lepirudin</name>
//!     <cas-number>138068-37-8</cas-number>
//!     <groups><group>approved</group></groups>
//!   </drug>
//! </drugbank>"#;
//!
//! let ingested = DrugBankParser::new().parse_str(xml).unwrap();
//! let profile = NetworkProfile::default();
//! let mapper = InMemoryMapper::new();
//! let assembly = Assembler::new(&profile, &mapper).assemble(&ingested.drugs).unwrap();
//! assert_eq!(assembly.counts.drugs, 1);
//! ```

pub mod assembly;
pub mod config;
pub mod export;
pub mod graph;
pub mod ingest;
pub mod mapping;
pub mod model;
pub mod pipeline;

pub use assembly::{Assembler, Assembly, AssemblyCounts, Diagnostic, InclusionMode, NetworkProfile};
pub use config::{ConfigError, MapperConfig, PipelineConfig};
pub use export::{ExportError, ExportFormat};
pub use graph::{AttributeValue, Attributes, Edge, EdgeId, Network, NetworkError, Node, NodeId};
pub use ingest::{DrugBankParser, IngestError, Ingested, XrefPolicy};
pub use mapping::{DataSource, IdMapper, InMemoryMapper, MappingError, SqliteMapper};
pub use model::{Drug, DrugSet, Target};
pub use pipeline::{run, run_with_mapper, IngestStats, PipelineError, RunReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
