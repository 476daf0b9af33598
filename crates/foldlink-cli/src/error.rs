//! Error types for foldlink CLI
//!
//! User-facing errors with clear messages and a hint at what to do next.

use foldlink_common::FoldlinkError;
use foldlink_ingest::ResolveError;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Comprehensive error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Identifier resolution failed; no report can be built
    #[error("{0}. Check the gene list and the UniProt URL (--uniprot-url), then try again.")]
    Resolve(#[from] ResolveError),

    /// A gene symbol or gene file could not be used
    #[error("Invalid gene input: {0}")]
    Genes(#[from] FoldlinkError),

    /// Required file is missing
    #[error("File not found: '{0}'. Verify the file path exists and you have read permissions.")]
    FileNotFound(String),

    /// More matches exist than were returned and --strict was given
    #[error("UniProt result truncated: {received} rows received, {total} matches reported. Split the gene list or rerun without --strict to accept a partial report.")]
    Truncated { received: usize, total: String },

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),

    /// Report writing failed
    #[error("Failed to write report: {0}")]
    Csv(#[from] csv::Error),

    /// JSON report writing failed
    #[error("Failed to write JSON report: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your environment variables and command-line flags.")]
    Config(String),

    /// Generic anyhow error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a truncation error
    pub fn truncated(received: usize, total: Option<u64>) -> Self {
        Self::Truncated {
            received,
            total: total
                .map(|t| t.to_string())
                .unwrap_or_else(|| "more".to_string()),
        }
    }
}
