//! Run profile: inclusion mode plus the text stamped on the network

use crate::model::Drug;
use serde::{Deserialize, Serialize};

/// Default dataset label used for titles and edge provenance
pub const DEFAULT_DATASET: &str = "DrugBank v4";
/// Default download location recorded in the network metadata
pub const DEFAULT_SOURCE_URL: &str = "http://www.drugbank.ca/system/downloads/current/drugbank.xml.zip";

/// Which drugs contribute to the network
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InclusionMode {
    /// Every drug
    #[default]
    Complete,
    /// Only drugs in the "approved" group
    ApprovedOnly,
}

impl InclusionMode {
    pub fn from_approved_only(approved_only: bool) -> Self {
        if approved_only {
            Self::ApprovedOnly
        } else {
            Self::Complete
        }
    }

    /// The inclusion predicate
    pub fn includes(&self, drug: &Drug) -> bool {
        match self {
            Self::Complete => true,
            Self::ApprovedOnly => drug.is_approved(),
        }
    }

    /// Suffix used in default output file names
    pub fn file_suffix(&self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::ApprovedOnly => "approved",
        }
    }
}

/// Everything about a run that shapes the network besides the input records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkProfile {
    pub mode: InclusionMode,
    /// Dataset label, e.g. "DrugBank v4"
    pub dataset: String,
    /// Source download URL
    pub source_url: String,
}

impl NetworkProfile {
    pub fn new(mode: InclusionMode) -> Self {
        Self {
            mode,
            dataset: DEFAULT_DATASET.to_string(),
            source_url: DEFAULT_SOURCE_URL.to_string(),
        }
    }

    pub fn with_dataset(mut self, dataset: impl Into<String>) -> Self {
        self.dataset = dataset.into();
        self
    }

    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }

    /// Network title, also recorded as the "Database" metadata attribute
    pub fn title(&self) -> String {
        match self.mode {
            InclusionMode::Complete => self.dataset.clone(),
            InclusionMode::ApprovedOnly => format!("{} approved drugs", self.dataset),
        }
    }

    /// Default output file stem, e.g. "drugbank-v4-complete"
    pub fn file_stem(&self) -> String {
        let slug = self
            .dataset
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|part| !part.is_empty())
            .map(str::to_ascii_lowercase)
            .collect::<Vec<_>>()
            .join("-");
        format!("{}-{}", slug, self.mode.file_suffix())
    }
}

impl Default for NetworkProfile {
    fn default() -> Self {
        Self::new(InclusionMode::default())
    }
}
