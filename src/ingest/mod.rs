//! DrugBank XML ingestion
//!
//! Streams the source document and normalizes each root-level `<drug>`
//! element (with its embedded targets) into the record model.

mod element;
mod parser;
mod records;

pub use element::{for_each_root_child, XmlElement};
pub use parser::{DrugBankParser, IngestError, IngestResult, Ingested, XrefPolicy, DRUGBANK_NS};
