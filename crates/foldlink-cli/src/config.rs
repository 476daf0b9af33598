//! Configuration management for foldlink CLI
//!
//! Defaults, then `FOLDLINK_*` environment variables, then command-line flags.

use crate::error::{CliError, Result};
use crate::report::ReportFormat;
use crate::{Cli, Commands, RunArgs};
use foldlink_common::types::GeneSymbol;
use foldlink_ingest::alphafold::{
    LinkTemplates, StructureFormat, DEFAULT_ALPHAFOLD_ENTRY_URL, DEFAULT_ALPHAFOLD_URL,
    DEFAULT_MODEL_VERSION,
};
use foldlink_ingest::uniprot::{
    SearchQuery, UniProtClient, DEFAULT_ORGANISM, DEFAULT_PAGE_SIZE, DEFAULT_UNIPROT_URL,
};
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// CLI Configuration Constants
// ============================================================================

/// Folder created inside the target directory for all outputs
pub const RESULTS_DIR_NAME: &str = "Results";

/// Default report file name (extension follows the report format)
pub const DEFAULT_REPORT_STEM: &str = "AlphaFold_structures";

/// Log file written inside the results folder when `--log` is set
pub const SEARCH_LOG_FILE: &str = "search_log.txt";

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub uniprot_url: String,

    /// Host serving model files
    pub alphafold_url: String,

    /// Host serving entry pages; follows `alphafold_url` when that is overridden
    pub alphafold_entry_url: String,

    pub organism: String,
    pub page_size: u32,
    pub model_version: u32,
    pub structure_format: StructureFormat,

    /// Directory that receives the Results folder
    pub target_dir: PathBuf,

    /// Report file name; derived from the format when unset
    pub output_file: Option<String>,

    pub report_format: ReportFormat,

    /// Fail on truncated results instead of writing a partial report
    pub strict: bool,

    /// Overall request timeout; reqwest's default when unset
    pub api_timeout: Option<Duration>,
}

impl Config {
    /// Create a new config with default values, targeting the current directory
    pub fn new() -> Result<Self> {
        Ok(Self {
            uniprot_url: DEFAULT_UNIPROT_URL.to_string(),
            alphafold_url: DEFAULT_ALPHAFOLD_URL.to_string(),
            alphafold_entry_url: DEFAULT_ALPHAFOLD_ENTRY_URL.to_string(),
            organism: DEFAULT_ORGANISM.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            model_version: DEFAULT_MODEL_VERSION,
            structure_format: StructureFormat::default(),
            target_dir: std::env::current_dir()?,
            output_file: None,
            report_format: ReportFormat::default(),
            strict: false,
            api_timeout: None,
        })
    }

    /// Load config from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new()?;

        if let Ok(url) = std::env::var("FOLDLINK_UNIPROT_URL") {
            config.uniprot_url = url;
        }

        if let Ok(url) = std::env::var("FOLDLINK_ALPHAFOLD_URL") {
            config.set_alphafold_url(url);
        }

        if let Ok(url) = std::env::var("FOLDLINK_ALPHAFOLD_ENTRY_URL") {
            config.alphafold_entry_url = url;
        }

        if let Ok(dir) = std::env::var("FOLDLINK_TARGET_DIR") {
            config.target_dir = PathBuf::from(dir);
        }

        if let Some(version) = env_number("FOLDLINK_MODEL_VERSION")? {
            config.model_version = version;
        }

        if let Some(size) = env_number("FOLDLINK_PAGE_SIZE")? {
            config.page_size = size;
        }

        if let Some(secs) = env_number::<u64>("FOLDLINK_API_TIMEOUT_SECS")? {
            config.api_timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Environment config with the parsed command line applied on top
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = Self::from_env()?;

        if let Some(ref url) = cli.uniprot_url {
            config.uniprot_url = url.clone();
        }
        if let Some(ref url) = cli.alphafold_url {
            config.set_alphafold_url(url.clone());
        }
        if let Some(ref url) = cli.alphafold_entry_url {
            config.alphafold_entry_url = url.clone();
        }

        match &cli.command {
            Commands::Run(args) => config.apply_run_args(args),
            Commands::Url {
                organism,
                page_size,
                ..
            } => {
                if let Some(organism) = organism {
                    config.organism = organism.clone();
                }
                if let Some(size) = page_size {
                    config.page_size = *size;
                }
            },
            Commands::Links {
                model_version,
                structure_format,
                ..
            } => {
                if let Some(version) = model_version {
                    config.model_version = *version;
                }
                if let Some(format) = structure_format {
                    config.structure_format = *format;
                }
            },
        }

        Ok(config)
    }

    /// Point both model files and entry pages at one AlphaFold deployment
    fn set_alphafold_url(&mut self, url: String) {
        self.alphafold_entry_url = url.clone();
        self.alphafold_url = url;
    }

    fn apply_run_args(&mut self, args: &RunArgs) {
        if let Some(ref target) = args.target {
            self.target_dir = target.clone();
        }
        if let Some(ref output) = args.output {
            self.output_file = Some(output.clone());
        }
        if let Some(format) = args.format {
            self.report_format = format;
        }
        if let Some(ref organism) = args.organism {
            self.organism = organism.clone();
        }
        if let Some(size) = args.page_size {
            self.page_size = size;
        }
        if let Some(version) = args.model_version {
            self.model_version = version;
        }
        if let Some(format) = args.structure_format {
            self.structure_format = format;
        }
        self.strict = args.strict;
    }

    /// `{target_dir}/Results`
    pub fn results_dir(&self) -> PathBuf {
        self.target_dir.join(RESULTS_DIR_NAME)
    }

    /// Full path of the report file
    pub fn output_path(&self) -> PathBuf {
        let name = self.output_file.clone().unwrap_or_else(|| {
            format!("{}.{}", DEFAULT_REPORT_STEM, self.report_format.extension())
        });
        self.results_dir().join(name)
    }

    /// Full path of the search log
    pub fn search_log_path(&self) -> PathBuf {
        self.results_dir().join(SEARCH_LOG_FILE)
    }

    /// The single search for `genes` under this configuration
    pub fn search_query(&self, genes: &[GeneSymbol]) -> Result<SearchQuery> {
        Ok(SearchQuery::new(genes)?
            .with_organism(self.organism.clone())
            .with_page_size(self.page_size)?)
    }

    pub fn uniprot_client(&self) -> Result<UniProtClient> {
        Ok(UniProtClient::with_timeout(
            self.uniprot_url.clone(),
            self.api_timeout,
        )?)
    }

    pub fn link_templates(&self) -> LinkTemplates {
        LinkTemplates::new(self.alphafold_url.clone())
            .with_entry_base_url(self.alphafold_entry_url.clone())
            .with_model_version(self.model_version)
            .with_format(self.structure_format)
    }
}

impl Default for Config {
    fn default() -> Self {
        // If the current directory is unavailable, fall back to a relative one
        Self::new().unwrap_or_else(|_| Self {
            uniprot_url: DEFAULT_UNIPROT_URL.to_string(),
            alphafold_url: DEFAULT_ALPHAFOLD_URL.to_string(),
            alphafold_entry_url: DEFAULT_ALPHAFOLD_ENTRY_URL.to_string(),
            organism: DEFAULT_ORGANISM.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            model_version: DEFAULT_MODEL_VERSION,
            structure_format: StructureFormat::default(),
            target_dir: PathBuf::from("."),
            output_file: None,
            report_format: ReportFormat::default(),
            strict: false,
            api_timeout: None,
        })
    }
}

fn env_number<T: std::str::FromStr>(key: &str) -> Result<Option<T>> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| CliError::config(format!("{} must be a number, got '{}'", key, raw))),
        Err(_) => Ok(None),
    }
}
