//! DrugBank document parser

use super::element::for_each_root_child;
use super::records::read_drug;
use crate::model::DrugSet;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::{info, warn};

/// Namespace of the DrugBank XML schema
pub const DRUGBANK_NS: &str = "http://www.drugbank.ca";

/// Errors that abort ingestion. No partial drug set is returned.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Document has no root element")]
    MissingRoot,

    #[error("Document ended with {open_elements} unclosed element(s)")]
    UnexpectedEof { open_elements: usize },

    #[error("Missing required element <{element}> in {owner}")]
    MissingElement { element: String, owner: String },

    #[error("{kind} value '{value}' in {owner} is shorter than its {prefix_len}-character prefix")]
    ShortPropertyValue {
        owner: String,
        kind: String,
        value: String,
        prefix_len: usize,
    },

    #[error("{kind} value '{value}' in {owner} has no character boundary after its {prefix_len}-byte prefix")]
    PrefixSplitsCharacter {
        owner: String,
        kind: String,
        value: String,
        prefix_len: usize,
    },

    #[error("{owner} has {count} {resource} cross-references")]
    AmbiguousCrossReference {
        owner: String,
        resource: String,
        count: usize,
    },
}

/// Result type for ingestion
pub type IngestResult<T> = Result<T, IngestError>;

/// Which UniProtKB cross-reference to keep when a polypeptide lists several.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XrefPolicy {
    /// Keep the first match in document order
    First,
    /// Keep the last match in document order
    #[default]
    Last,
    /// Fail ingestion when more than one entry matches
    Reject,
}

impl XrefPolicy {
    /// Pick one identifier out of all matches, in document order.
    pub(super) fn select(
        self,
        mut matches: Vec<String>,
        owner: &str,
        resource: &str,
    ) -> IngestResult<Option<String>> {
        match self {
            Self::First => Ok(matches.into_iter().next()),
            Self::Last => Ok(matches.pop()),
            Self::Reject if matches.len() > 1 => Err(IngestError::AmbiguousCrossReference {
                owner: owner.to_string(),
                resource: resource.to_string(),
                count: matches.len(),
            }),
            Self::Reject => Ok(matches.pop()),
        }
    }
}

impl FromStr for XrefPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(Self::First),
            "last" => Ok(Self::Last),
            "reject" => Ok(Self::Reject),
            other => Err(format!(
                "unknown cross-reference policy '{}' (expected first, last or reject)",
                other
            )),
        }
    }
}

/// Outcome of a successful ingestion
#[derive(Debug, Clone, Default)]
pub struct Ingested {
    /// Drugs keyed by id
    pub drugs: DrugSet,
    /// Root-level drug elements read
    pub drug_elements: usize,
    /// Drug elements dropped because their id was already taken
    pub duplicate_drugs: usize,
    /// Target entries dropped because the same drug already listed their id
    pub duplicate_targets: usize,
}

/// Reads a DrugBank XML document into a [`DrugSet`].
#[derive(Debug, Clone, Default)]
pub struct DrugBankParser {
    xref_policy: XrefPolicy,
}

impl DrugBankParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_xref_policy(mut self, policy: XrefPolicy) -> Self {
        self.xref_policy = policy;
        self
    }

    /// Parse a DrugBank document from any buffered reader.
    pub fn parse<R: BufRead>(&self, source: R) -> IngestResult<Ingested> {
        let mut ingested = Ingested::default();

        for_each_root_child(source, DRUGBANK_NS, "drug", |element| {
            ingested.drug_elements += 1;
            let (drug, duplicate_targets) =
                read_drug(&element, ingested.drug_elements, self.xref_policy)?;
            ingested.duplicate_targets += duplicate_targets;

            let id = drug.id.clone();
            if !ingested.drugs.insert(drug) {
                warn!(drug = %id, "duplicate drug id, keeping first record");
                ingested.duplicate_drugs += 1;
            }
            Ok(())
        })?;

        info!(
            drug_elements = ingested.drug_elements,
            drugs = ingested.drugs.len(),
            duplicates = ingested.duplicate_drugs,
            "retrieved drug records"
        );
        Ok(ingested)
    }

    /// Parse a DrugBank document from a file
    pub fn parse_file(&self, path: impl AsRef<Path>) -> IngestResult<Ingested> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| IngestError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "reading DrugBank document");
        self.parse(BufReader::new(file))
    }

    /// Parse a DrugBank document held in memory
    pub fn parse_str(&self, xml: &str) -> IngestResult<Ingested> {
        self.parse(xml.as_bytes())
    }
}
