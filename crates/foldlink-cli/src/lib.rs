//! foldlink CLI Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Command-line interface that maps human gene symbols to UniProtKB
//! accessions and AlphaFold DB structure links.
//!
//! # Overview
//!
//! - **Report**: resolve genes and write the link table (`foldlink run`)
//! - **Dry run**: print the UniProt search URL without sending it (`foldlink url`)
//! - **Links**: template AlphaFold links for known accessions (`foldlink links`)

pub mod commands;
pub mod config;
pub mod error;
pub mod genes;
pub mod progress;
pub mod report;

// Re-export commonly used types
pub use config::Config;
pub use error::{CliError, Result};

use clap::{ArgAction, Args, Parser, Subcommand};
use foldlink_ingest::alphafold::StructureFormat;
use report::ReportFormat;
use std::path::PathBuf;

/// foldlink - gene symbols to AlphaFold structure links
#[derive(Parser, Debug)]
#[command(name = "foldlink")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// UniProt REST base URL
    #[arg(long, env = "FOLDLINK_UNIPROT_URL", global = true)]
    pub uniprot_url: Option<String>,

    /// AlphaFold DB base URL used in generated links
    #[arg(long, env = "FOLDLINK_ALPHAFOLD_URL", global = true)]
    pub alphafold_url: Option<String>,

    /// AlphaFold DB entry-page host (default: www host, or --alphafold-url when given)
    #[arg(long, env = "FOLDLINK_ALPHAFOLD_ENTRY_URL", global = true)]
    pub alphafold_entry_url: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve genes and write the AlphaFold link report
    Run(RunArgs),

    /// Print the UniProt search URL for the genes without sending it
    Url {
        #[command(flatten)]
        genes: GeneArgs,

        /// Organism constraint
        #[arg(long)]
        organism: Option<String>,

        /// Result page-size cap (1-500)
        #[arg(long)]
        page_size: Option<u32>,
    },

    /// Print AlphaFold links for UniProt accessions
    Links {
        /// Accessions, e.g. P00441
        #[arg(required = true)]
        accessions: Vec<String>,

        /// AlphaFold model version in file names
        #[arg(long)]
        model_version: Option<u32>,

        /// Model file format (cif, pdb)
        #[arg(long)]
        structure_format: Option<StructureFormat>,
    },
}

/// Where the gene list comes from
#[derive(Args, Debug, Clone, Default)]
pub struct GeneArgs {
    /// Gene symbols (default: built-in ALS gene panel)
    #[arg(short, long, num_args = 1..)]
    pub genes: Vec<String>,

    /// File of whitespace- or comma-separated gene symbols
    #[arg(long)]
    pub genes_file: Option<PathBuf>,
}

impl GeneArgs {
    /// Whether the user supplied any gene source
    pub fn is_explicit(&self) -> bool {
        !self.genes.is_empty() || self.genes_file.is_some()
    }
}

/// Options for `foldlink run`
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub genes: GeneArgs,

    /// Write log output to Results/search_log.txt instead of the console
    #[arg(
        short,
        long,
        value_parser = parse_bool,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "true"
    )]
    pub log: bool,

    /// Directory in which the Results folder is created (default: current directory)
    #[arg(short, long, env = "FOLDLINK_TARGET_DIR")]
    pub target: Option<PathBuf>,

    /// Report file name inside Results
    #[arg(short, long)]
    pub output: Option<String>,

    /// Report format (csv, tsv, json)
    #[arg(short, long)]
    pub format: Option<ReportFormat>,

    /// Organism constraint
    #[arg(long)]
    pub organism: Option<String>,

    /// Result page-size cap (1-500)
    #[arg(long)]
    pub page_size: Option<u32>,

    /// AlphaFold model version in file names
    #[arg(long)]
    pub model_version: Option<u32>,

    /// Model file format (cif, pdb)
    #[arg(long)]
    pub structure_format: Option<StructureFormat>,

    /// Fail instead of writing a partial report when UniProt has more matches than one page
    #[arg(long)]
    pub strict: bool,
}

/// Parse yes/no style booleans (`yes`, `true`, `t`, `y`, `1` and their negatives)
pub fn parse_bool(value: &str) -> std::result::Result<bool, String> {
    match value.to_lowercase().as_str() {
        "yes" | "true" | "t" | "y" | "1" => Ok(true),
        "no" | "false" | "f" | "n" | "0" => Ok(false),
        _ => Err(format!("Boolean value expected, got '{}'", value)),
    }
}
