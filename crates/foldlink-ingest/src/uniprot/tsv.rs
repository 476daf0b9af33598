//! Parsing of UniProtKB tab-separated search results

use crate::error::{ResolveError, Result};
use thiserror::Error;
use tracing::warn;

/// Header names emitted for [`RESULT_FIELDS`](super::RESULT_FIELDS)
pub mod columns {
    pub const ENTRY: &str = "Entry";
    pub const ENTRY_NAME: &str = "Entry Name";
    pub const PROTEIN_NAMES: &str = "Protein names";
    pub const GENE_NAMES: &str = "Gene Names";
    pub const ORGANISM: &str = "Organism";
    pub const LENGTH: &str = "Length";
}

/// One reviewed UniProtKB entry returned by the search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    /// Accession, e.g. `P00441`
    pub entry_id: String,

    /// Mnemonic, e.g. `SODC_HUMAN` (empty when the column was not returned)
    pub entry_name: String,

    pub protein_name: String,
    pub organism: String,
    pub sequence_length: u32,

    /// Space-separated primary gene name and synonyms; may be empty
    pub gene_names_raw: String,
}

impl ResolvedEntry {
    /// Aliases from the gene-names field
    pub fn gene_aliases(&self) -> impl Iterator<Item = &str> {
        self.gene_names_raw.split_whitespace()
    }
}

/// Why a response row was skipped
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("empty accession")]
    EmptyAccession,

    #[error("length '{0}' is not an integer")]
    InvalidLength(String),
}

/// A response row that could not be turned into a [`ResolvedEntry`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed row at line {line}: {reason}")]
pub struct MalformedRow {
    /// 1-based line number in the response body
    pub line: u64,
    pub reason: MalformedReason,
}

/// Result of parsing one response body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTable {
    pub entries: Vec<ResolvedEntry>,
    pub malformed_rows: Vec<MalformedRow>,
}

impl ParsedTable {
    /// Data rows seen, parsed or not
    pub fn row_count(&self) -> usize {
        self.entries.len() + self.malformed_rows.len()
    }
}

/// Header positions of the columns we read
struct ColumnIndex {
    width: usize,
    entry: usize,
    entry_name: Option<usize>,
    protein_names: usize,
    gene_names: usize,
    organism: usize,
    length: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require =
            |name: &str| find(name).ok_or_else(|| ResolveError::MissingColumn(name.to_string()));

        Ok(Self {
            width: headers.len(),
            entry: require(columns::ENTRY)?,
            entry_name: find(columns::ENTRY_NAME),
            protein_names: require(columns::PROTEIN_NAMES)?,
            gene_names: require(columns::GENE_NAMES)?,
            organism: require(columns::ORGANISM)?,
            length: require(columns::LENGTH)?,
        })
    }

    fn entry(&self, record: &csv::StringRecord) -> std::result::Result<ResolvedEntry, MalformedReason> {
        if record.len() != self.width {
            return Err(MalformedReason::FieldCount {
                expected: self.width,
                found: record.len(),
            });
        }

        let field = |idx: usize| record.get(idx).unwrap_or_default().trim();

        let entry_id = field(self.entry);
        if entry_id.is_empty() {
            return Err(MalformedReason::EmptyAccession);
        }

        let length = field(self.length);
        let sequence_length = length
            .parse()
            .map_err(|_| MalformedReason::InvalidLength(length.to_string()))?;

        Ok(ResolvedEntry {
            entry_id: entry_id.to_string(),
            entry_name: self.entry_name.map(field).unwrap_or_default().to_string(),
            protein_name: field(self.protein_names).to_string(),
            organism: field(self.organism).to_string(),
            sequence_length,
            gene_names_raw: field(self.gene_names).to_string(),
        })
    }
}

/// Parse a TSV search response.
///
/// The first line is the header. Rows that do not fit it are logged and
/// returned in [`ParsedTable::malformed_rows`]; only a missing required
/// column fails the whole parse. An empty body yields an empty table.
pub fn parse_tsv(body: &str) -> Result<ParsedTable> {
    let mut table = ParsedTable::default();

    if body.trim().is_empty() {
        return Ok(table);
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .flexible(true)
        .has_headers(true)
        .from_reader(body.as_bytes());

    let headers = reader.headers()?.clone();
    let columns = ColumnIndex::from_headers(&headers)?;

    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        match columns.entry(&record) {
            Ok(entry) => table.entries.push(entry),
            Err(reason) => {
                warn!(line, reason = %reason, "Skipping malformed UniProt row");
                table.malformed_rows.push(MalformedRow { line, reason });
            },
        }
    }

    Ok(table)
}
