//! UniProtKB search query construction
//!
//! A [`SearchQuery`] turns an ordered gene list into one batched request:
//!
//! ```text
//! organism_name:"Homo sapiens" AND (gene_exact:sod1 OR gene_exact:fus) AND reviewed:true
//! ```
//!
//! The expression is percent-encoded as the `query` parameter of
//! `/uniprotkb/search`, together with the field list, `format=tsv` and the
//! page-size cap.

use crate::error::{ResolveError, Result};
use foldlink_common::types::GeneSymbol;

/// Search endpoint path, relative to the REST base URL
pub const SEARCH_PATH: &str = "/uniprotkb/search";

/// Organism constraint applied to every search
pub const DEFAULT_ORGANISM: &str = "Homo sapiens";

/// Default page-size cap for the single result page
pub const DEFAULT_PAGE_SIZE: u32 = 500;

/// Largest page the search endpoint serves in one response
pub const MAX_PAGE_SIZE: u32 = 500;

/// Columns requested from the search endpoint, in response order.
///
/// The TSV header names these `Entry`, `Entry Name`, `Protein names`,
/// `Gene Names`, `Organism` and `Length`.
pub const RESULT_FIELDS: &[&str] = &[
    "accession",
    "id",
    "protein_name",
    "gene_names",
    "organism_name",
    "length",
];

/// One batched gene-to-accession search. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    genes: Vec<GeneSymbol>,
    organism: String,
    page_size: u32,
}

impl SearchQuery {
    /// Build a query over `genes` with the default organism and page size.
    ///
    /// An empty gene list is rejected: without the disjunction the filter
    /// would match every reviewed human entry.
    pub fn new(genes: &[GeneSymbol]) -> Result<Self> {
        if genes.is_empty() {
            return Err(ResolveError::EmptyGeneList);
        }

        Ok(Self {
            genes: genes.to_vec(),
            organism: DEFAULT_ORGANISM.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    /// Replace the organism constraint
    pub fn with_organism(mut self, organism: impl Into<String>) -> Self {
        self.organism = organism.into();
        self
    }

    /// Replace the page-size cap (1 to [`MAX_PAGE_SIZE`])
    pub fn with_page_size(mut self, page_size: u32) -> Result<Self> {
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(ResolveError::InvalidPageSize(page_size));
        }
        self.page_size = page_size;
        Ok(self)
    }

    pub fn genes(&self) -> &[GeneSymbol] {
        &self.genes
    }

    pub fn organism(&self) -> &str {
        &self.organism
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// The unencoded filter expression
    pub fn filter_expression(&self) -> String {
        let disjunction = self
            .genes
            .iter()
            .map(|gene| format!("gene_exact:{}", gene.query_token()))
            .collect::<Vec<_>>()
            .join(" OR ");

        format!(
            "organism_name:\"{}\" AND ({}) AND reviewed:true",
            self.organism, disjunction
        )
    }

    /// Encoded query string, without the leading `?`
    pub fn query_string(&self) -> String {
        format!(
            "fields={}&format=tsv&query={}&size={}",
            urlencoding::encode(&RESULT_FIELDS.join(",")),
            urlencoding::encode(&self.filter_expression()),
            self.page_size
        )
    }

    /// Full search URL against `base_url` (e.g. `https://rest.uniprot.org`)
    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{}{}?{}",
            base_url.trim_end_matches('/'),
            SEARCH_PATH,
            self.query_string()
        )
    }
}
