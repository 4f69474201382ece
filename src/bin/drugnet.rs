//! drugnet CLI: DrugBank XML to drug-target network.
//!
//! Usage:
//!   drugnet convert [--config FILE] [--source FILE] [--mapper-db FILE] [--output FILE] [--approved-only]
//!   drugnet inspect [--config FILE] [--source FILE] [--xref-policy P]

use clap::{Args, Parser, Subcommand};
use drugnet::{pipeline, ConfigError, ExportFormat, IngestStats, MapperConfig, PipelineConfig, XrefPolicy};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "drugnet",
    version,
    about = "Build drug-target networks from DrugBank XML"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a DrugBank XML document into a network file
    Convert(ConvertArgs),
    /// Read a DrugBank XML document and report what it contains
    Inspect(SourceArgs),
}

/// Options shared by every command that reads the source document
#[derive(Args)]
struct SourceArgs {
    /// YAML config file (defaults to ~/.config/drugnet/config.yaml if present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// DrugBank XML document
    #[arg(long)]
    source: Option<PathBuf>,
    /// Handling of several UniProt cross-references: first, last or reject
    #[arg(long)]
    xref_policy: Option<XrefPolicy>,
}

impl SourceArgs {
    /// Load the config file and apply the source overrides
    fn load(self) -> Result<PipelineConfig, ConfigError> {
        let mut cfg = match self.config {
            Some(path) => PipelineConfig::load(&path)?,
            None => PipelineConfig::load_default()?,
        };
        if self.source.is_some() {
            cfg.source = self.source;
        }
        if let Some(policy) = self.xref_policy {
            cfg.xref_policy = policy;
        }
        Ok(cfg)
    }
}

#[derive(Args)]
struct ConvertArgs {
    #[command(flatten)]
    source: SourceArgs,
    /// BridgeDb-style SQLite mapping database
    #[arg(long, conflicts_with = "mapper_table")]
    mapper_db: Option<PathBuf>,
    /// JSON identifier mapping table
    #[arg(long)]
    mapper_table: Option<PathBuf>,
    /// Output file (default derived from dataset, mode and format)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Only include drugs in the "approved" group
    #[arg(long)]
    approved_only: bool,
    /// Output format: xgmml or json
    #[arg(long)]
    format: Option<ExportFormat>,
}

impl ConvertArgs {
    fn load(self) -> Result<PipelineConfig, ConfigError> {
        let mut cfg = self.source.load()?;
        if let Some(path) = self.mapper_db {
            cfg.mapper = MapperConfig::Sqlite { path };
        } else if let Some(path) = self.mapper_table {
            cfg.mapper = MapperConfig::Table { path };
        }
        if self.output.is_some() {
            cfg.output = self.output;
        }
        if self.approved_only {
            cfg.approved_only = true;
        }
        if let Some(format) = self.format {
            cfg.format = format;
        }
        Ok(cfg)
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_convert(config: &PipelineConfig) -> i32 {
    match pipeline::run(config) {
        Ok(report) => {
            println!("{}", report.summary());
            for diagnostic in &report.diagnostics {
                eprintln!("Warning: {}", diagnostic);
            }
            println!("Wrote {} ({})", report.output.display(), report.format);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_inspect(config: &PipelineConfig) -> i32 {
    let ingested = match pipeline::ingest(config) {
        Ok(ingested) => ingested,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let stats = IngestStats::from_ingested(&ingested);
    println!("{:<24}  {:>8}", "drug elements", stats.drug_elements);
    println!("{:<24}  {:>8}", "drugs", stats.drugs);
    println!("{:<24}  {:>8}", "approved drugs", stats.approved_drugs);
    println!("{:<24}  {:>8}", "distinct targets", stats.distinct_targets);
    println!("{:<24}  {:>8}", "duplicate drugs", stats.duplicate_drugs);
    println!("{:<24}  {:>8}", "duplicate targets", stats.duplicate_targets);
    0
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match cli.command {
        Commands::Convert(args) => match args.load() {
            Ok(cfg) => cmd_convert(&cfg),
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        },
        Commands::Inspect(args) => match args.load() {
            Ok(cfg) => cmd_inspect(&cfg),
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        },
    };
    std::process::exit(code);
}
