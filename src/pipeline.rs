//! End-to-end conversion: ingest, resolve, assemble, export

use crate::assembly::{Assembler, AssemblyCounts, Diagnostic};
use crate::config::{ConfigError, MapperConfig, PipelineConfig};
use crate::export::{self, ExportError, ExportFormat};
use crate::graph::NetworkError;
use crate::ingest::{DrugBankParser, IngestError, Ingested};
use crate::mapping::{IdMapper, InMemoryMapper, MappingError, SqliteMapper};
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

/// Any fatal error a conversion run can hit
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Ingestion failed: {0}")]
    Ingest(#[from] IngestError),

    #[error("Mapping backend unavailable: {0}")]
    Mapping(#[from] MappingError),

    #[error("Network assembly failed: {0}")]
    Network(#[from] NetworkError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

/// Result type for pipeline runs
pub type PipelineResult<T> = Result<T, PipelineError>;

/// What ingestion saw in the source document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Root-level drug elements read
    pub drug_elements: usize,
    /// Drugs kept after de-duplication
    pub drugs: usize,
    pub duplicate_drugs: usize,
    pub duplicate_targets: usize,
    /// Distinct target ids across all drugs
    pub distinct_targets: usize,
    pub approved_drugs: usize,
}

impl IngestStats {
    pub fn from_ingested(ingested: &Ingested) -> Self {
        Self {
            drug_elements: ingested.drug_elements,
            drugs: ingested.drugs.len(),
            duplicate_drugs: ingested.duplicate_drugs,
            duplicate_targets: ingested.duplicate_targets,
            distinct_targets: ingested.drugs.distinct_target_count(),
            approved_drugs: ingested.drugs.iter().filter(|d| d.is_approved()).count(),
        }
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub counts: AssemblyCounts,
    pub diagnostics: Vec<Diagnostic>,
    pub ingest: IngestStats,
    pub output: PathBuf,
    pub format: ExportFormat,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunReport {
    /// The one-line console summary
    pub fn summary(&self) -> String {
        format!(
            "DrugBank network was created with {} drugs, {} targets and {} drug-target interactions.",
            self.counts.drugs, self.counts.targets, self.counts.edges
        )
    }

    pub fn elapsed(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}

/// Build the identifier mapper a config selects
pub fn open_mapper(config: &MapperConfig) -> PipelineResult<Box<dyn IdMapper>> {
    let mapper: Box<dyn IdMapper> = match config {
        MapperConfig::None => Box::new(InMemoryMapper::new()),
        MapperConfig::Sqlite { path } => {
            info!(path = %path.display(), "opening mapping database");
            Box::new(SqliteMapper::open(path)?)
        }
        MapperConfig::Table { path } => {
            info!(path = %path.display(), "loading mapping table");
            Box::new(InMemoryMapper::from_json_file(path)?)
        }
    };
    Ok(mapper)
}

/// Read the configured source document
pub fn ingest(config: &PipelineConfig) -> PipelineResult<Ingested> {
    let source = config.validate()?;
    let parser = DrugBankParser::new().with_xref_policy(config.xref_policy);
    Ok(parser.parse_file(source)?)
}

/// Run a conversion with the mapper the config selects
pub fn run(config: &PipelineConfig) -> PipelineResult<RunReport> {
    config.validate()?;
    let mapper = open_mapper(&config.mapper)?;
    run_with_mapper(config, mapper.as_ref())
}

/// Run a conversion against an explicit mapper.
///
/// Ingestion completes before anything is written, so a malformed source
/// never produces an output file.
pub fn run_with_mapper(config: &PipelineConfig, mapper: &dyn IdMapper) -> PipelineResult<RunReport> {
    let started_at = Utc::now();

    let ingested = ingest(config)?;
    let stats = IngestStats::from_ingested(&ingested);

    let profile = config.profile();
    let assembly = Assembler::new(&profile, mapper).assemble(&ingested.drugs)?;

    let output = config.output_path();
    export::write(&assembly.network, &output, config.format)?;

    let report = RunReport {
        counts: assembly.counts,
        diagnostics: assembly.diagnostics,
        ingest: stats,
        output,
        format: config.format,
        started_at,
        finished_at: Utc::now(),
    };
    info!(
        output = %report.output.display(),
        elapsed_ms = report.elapsed().num_milliseconds(),
        "{}",
        report.summary()
    );
    Ok(report)
}
