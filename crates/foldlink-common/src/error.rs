//! Error types shared across foldlink crates

use thiserror::Error;

/// Result type alias for common operations
pub type Result<T> = std::result::Result<T, FoldlinkError>;

/// Main error type for shared foldlink functionality
#[derive(Error, Debug)]
pub enum FoldlinkError {
    #[error("Invalid gene symbol '{0}': symbols must be non-empty and contain no whitespace")]
    InvalidGeneSymbol(String),
}
