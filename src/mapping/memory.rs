//! In-memory identifier mapping table

use super::traits::{DataSource, IdMapper, MappingError, MappingResult};
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// One row of a JSON link table
#[derive(Debug, Deserialize)]
struct LinkRecord {
    id: String,
    /// Source system code
    source: String,
    /// Target system code
    target: String,
    mapped: Vec<String>,
}

/// Identifier mapper backed by an explicit in-memory table.
///
/// An empty table maps every identifier to nothing, which is what a run
/// without a configured backend uses.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMapper {
    /// (source code, id, target code) -> mapped ids
    links: HashMap<(String, String, String), BTreeSet<String>>,
}

impl InMemoryMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `id` in `source` maps to `mapped` in `target`
    pub fn insert(&mut self, id: &str, source: DataSource, target: DataSource, mapped: &str) {
        self.links
            .entry((source.system_code.to_string(), id.to_string(), target.system_code.to_string()))
            .or_default()
            .insert(mapped.to_string());
    }

    pub fn with_link(mut self, id: &str, source: DataSource, target: DataSource, mapped: &str) -> Self {
        self.insert(id, source, target, mapped);
        self
    }

    /// Load a table from JSON: `[{"id", "source", "target", "mapped": [..]}]`
    /// where `source` and `target` are system codes.
    pub fn from_json_str(json: &str) -> MappingResult<Self> {
        let records: Vec<LinkRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Load a JSON table from a file
    pub fn from_json_file(path: impl AsRef<Path>) -> MappingResult<Self> {
        let reader = BufReader::new(File::open(path)?);
        let records: Vec<LinkRecord> = serde_json::from_reader(reader)?;
        Self::from_records(records)
    }

    fn from_records(records: Vec<LinkRecord>) -> MappingResult<Self> {
        let mut mapper = Self::new();
        for record in records {
            let source = DataSource::by_system_code(&record.source)
                .ok_or_else(|| MappingError::UnknownDataSource(record.source.clone()))?;
            let target = DataSource::by_system_code(&record.target)
                .ok_or_else(|| MappingError::UnknownDataSource(record.target.clone()))?;
            for mapped in &record.mapped {
                mapper.insert(&record.id, source, target, mapped);
            }
        }
        Ok(mapper)
    }

    pub fn len(&self) -> usize {
        self.links.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl IdMapper for InMemoryMapper {
    fn map_id(&self, id: &str, source: DataSource, target: DataSource) -> MappingResult<BTreeSet<String>> {
        let key = (source.system_code.to_string(), id.to_string(), target.system_code.to_string());
        Ok(self.links.get(&key).cloned().unwrap_or_default())
    }
}
