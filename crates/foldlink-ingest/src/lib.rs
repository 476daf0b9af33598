//! foldlink Ingest Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Resolves gene symbols to UniProtKB accessions and derives AlphaFold
//! Protein Structure Database links for them.
//!
//! # Supported Data Sources
//!
//! - **UniProt**: batched `gene_exact` search returning tab-separated rows
//! - **AlphaFold DB**: entry-page and model-file URL templates (no network)
//!
//! # Example
//!
//! ```no_run
//! use foldlink_common::types::parse_gene_list;
//! use foldlink_ingest::alphafold::{enrich, LinkTemplates};
//! use foldlink_ingest::uniprot::{UniProtClient, DEFAULT_UNIPROT_URL};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let genes = parse_gene_list("SOD1 FUS")?;
//!     let client = UniProtClient::new(DEFAULT_UNIPROT_URL)?;
//!     let resolution = client.resolve_genes(&genes).await?;
//!     let records = enrich(&resolution.entries, &genes, &LinkTemplates::default());
//!     for record in &records {
//!         println!("{}\t{}", record.attributed_gene(), record.structure_link());
//!     }
//!     Ok(())
//! }
//! ```

pub mod alphafold;
pub mod error;
pub mod uniprot;

pub use error::{ResolveError, Result};
