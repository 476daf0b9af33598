//! UniProt identifier resolution
//!
//! Sends one batched `gene_exact` search to the UniProtKB REST API and parses
//! the tab-separated answer into [`ResolvedEntry`] rows.

pub mod query;
pub mod tsv;

pub use query::{SearchQuery, DEFAULT_ORGANISM, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, RESULT_FIELDS};
pub use tsv::{parse_tsv, MalformedReason, MalformedRow, ParsedTable, ResolvedEntry};

use crate::error::{ResolveError, Result};
use foldlink_common::types::GeneSymbol;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Public UniProt REST base URL
pub const DEFAULT_UNIPROT_URL: &str = "https://rest.uniprot.org";

/// Response header carrying the total hit count of a search
pub const TOTAL_RESULTS_HEADER: &str = "x-total-results";

/// Outcome of one search
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// Parsed entries in response order
    pub entries: Vec<ResolvedEntry>,

    /// Rows skipped while parsing
    pub malformed_rows: Vec<MalformedRow>,

    /// Total hits reported by the server, if it said
    pub total_results: Option<u64>,

    /// More matches exist than fit on the single page that was fetched
    pub truncated: bool,
}

impl Resolution {
    fn from_table(table: ParsedTable, total_results: Option<u64>, page_size: u32) -> Self {
        let rows = table.row_count() as u64;
        let truncated = match total_results {
            Some(total) => total > rows,
            None => rows >= u64::from(page_size),
        };

        Self {
            entries: table.entries,
            malformed_rows: table.malformed_rows,
            total_results,
            truncated,
        }
    }
}

/// HTTP client for the UniProtKB search endpoint
pub struct UniProtClient {
    client: Client,
    base_url: String,
}

impl UniProtClient {
    /// Create a client using reqwest's default timeout behaviour
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    /// Create a client with an optional overall request timeout
    pub fn with_timeout(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search URL this client would request for `query`
    pub fn search_url(&self, query: &SearchQuery) -> String {
        query.url(&self.base_url)
    }

    /// Resolve `genes` with the default organism and page size
    pub async fn resolve_genes(&self, genes: &[GeneSymbol]) -> Result<Resolution> {
        let query = SearchQuery::new(genes)?;
        self.resolve(&query).await
    }

    /// Issue the search and parse the response.
    ///
    /// Any status other than 200 fails with [`ResolveError::RemoteQuery`].
    /// There is no retry.
    #[instrument(skip_all, fields(genes = query.genes().len(), page_size = query.page_size()))]
    pub async fn resolve(&self, query: &SearchQuery) -> Result<Resolution> {
        let url = self.search_url(query);
        debug!(url = %url, "Querying UniProt");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let total_results = response
            .headers()
            .get(TOTAL_RESULTS_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok());
        let body = response.text().await?;

        if status != StatusCode::OK {
            warn!(status = status.as_u16(), url = %url, "UniProt search returned no data");
            return Err(ResolveError::RemoteQuery {
                status: status.as_u16(),
                body,
            });
        }

        let table = parse_tsv(&body)?;
        let resolution = Resolution::from_table(table, total_results, query.page_size());

        if resolution.truncated {
            warn!(
                received = resolution.entries.len() + resolution.malformed_rows.len(),
                total = ?resolution.total_results,
                page_size = query.page_size(),
                "More UniProt matches exist than fit on one page; the result is truncated"
            );
        }

        info!(
            entries = resolution.entries.len(),
            malformed = resolution.malformed_rows.len(),
            "Resolved UniProt entries"
        );

        Ok(resolution)
    }
}
