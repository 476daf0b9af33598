//! foldlink Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, logging setup, and error handling for the foldlink workspace.
//!
//! # Overview
//!
//! - **Error Handling**: [`FoldlinkError`] and the crate-wide [`Result`] alias
//! - **Logging**: tracing subscriber setup with console and file sinks
//! - **Types**: [`GeneSymbol`](types::GeneSymbol), the unit of pipeline input
//!
//! # Example
//!
//! ```no_run
//! use foldlink_common::types::parse_gene_list;
//! use foldlink_common::Result;
//!
//! fn genes() -> Result<()> {
//!     let genes = parse_gene_list("SOD1 FUS TARDBP")?;
//!     assert_eq!(genes.len(), 3);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{FoldlinkError, Result};
pub use types::GeneSymbol;
