//! Error types for identifier resolution

use crate::uniprot::MAX_PAGE_SIZE;
use thiserror::Error;

/// Result type alias for resolve operations
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Failures that abort a resolve run.
///
/// Malformed response rows are not errors; they are collected in
/// [`Resolution::malformed_rows`](crate::uniprot::Resolution) instead.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// No gene symbols were supplied, so no gene filter can be built
    #[error("No gene symbols supplied; a search without a gene filter is not sent")]
    EmptyGeneList,

    #[error("Page size {0} is outside the accepted range 1..={max}", max = MAX_PAGE_SIZE)]
    InvalidPageSize(u32),

    /// The search API answered with a non-200 status
    #[error("UniProt search failed with HTTP {status}: {body}")]
    RemoteQuery { status: u16, body: String },

    /// The header row lacks a column the pipeline depends on
    #[error("UniProt response is missing the '{0}' column")]
    MissingColumn(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to read UniProt response: {0}")]
    Csv(#[from] csv::Error),
}

impl ResolveError {
    /// HTTP status of a failed search, if that is what went wrong
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RemoteQuery { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
