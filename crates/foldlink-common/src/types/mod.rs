//! Common types used across foldlink

use crate::error::{FoldlinkError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A human gene symbol such as `SOD1` or `HNRNPA2B1`.
///
/// Symbols are opaque tokens compared case-insensitively. The input
/// spelling is preserved; duplicates are not collapsed.
///
/// # Examples
///
/// ```
/// use foldlink_common::types::GeneSymbol;
///
/// let gene: GeneSymbol = "Sod1".parse().unwrap();
/// assert_eq!(gene.as_str(), "Sod1");
/// assert_eq!(gene.query_token(), "sod1");
/// assert_eq!(gene.normalized(), GeneSymbol::normalize("SOD1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GeneSymbol(String);

impl GeneSymbol {
    /// Create a gene symbol, trimming surrounding whitespace.
    pub fn new(symbol: impl Into<String>) -> Result<Self> {
        let symbol = symbol.into();
        let trimmed = symbol.trim();

        if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
            return Err(FoldlinkError::InvalidGeneSymbol(symbol));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// The symbol as it was supplied
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased form used inside search expressions
    pub fn query_token(&self) -> String {
        self.0.to_lowercase()
    }

    /// Upper-cased form used for case-insensitive joins
    pub fn normalized(&self) -> String {
        Self::normalize(&self.0)
    }

    /// Join key for any token, such as an alias from a remote record
    pub fn normalize(token: &str) -> String {
        token.to_uppercase()
    }
}

impl fmt::Display for GeneSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for GeneSymbol {
    type Err = FoldlinkError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for GeneSymbol {
    type Error = FoldlinkError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<GeneSymbol> for String {
    fn from(gene: GeneSymbol) -> Self {
        gene.0
    }
}

impl AsRef<str> for GeneSymbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Parse a whitespace- or comma-separated list of gene symbols.
///
/// Empty tokens are skipped, so trailing separators and blank lines are fine.
/// Order and duplicates are kept.
pub fn parse_gene_list(text: &str) -> Result<Vec<GeneSymbol>> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(GeneSymbol::new)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_gene_symbol_trims() {
        let gene = GeneSymbol::new("  FUS\n").unwrap();
        assert_eq!(gene.as_str(), "FUS");
    }

    #[test]
    fn test_gene_symbol_rejects_empty_and_inner_whitespace() {
        assert!(GeneSymbol::new("").is_err());
        assert!(GeneSymbol::new("   ").is_err());
        assert!(matches!(
            GeneSymbol::new("SOD 1"),
            Err(FoldlinkError::InvalidGeneSymbol(_))
        ));
    }

    #[test]
    fn test_gene_symbol_case_handling() {
        let gene = GeneSymbol::new("C9orf72").unwrap();
        assert_eq!(gene.query_token(), "c9orf72");
        assert_eq!(gene.normalized(), "C9ORF72");
        assert_eq!(GeneSymbol::normalize("c9orf72"), gene.normalized());
        assert_ne!(GeneSymbol::normalize("C9orf7"), gene.normalized());
    }

    #[test]
    fn test_parse_gene_list_mixed_separators() {
        let genes = parse_gene_list("SOD1 FUS,TARDBP\n\nSOD1 ").unwrap();
        let names: Vec<&str> = genes.iter().map(GeneSymbol::as_str).collect();
        assert_eq!(names, vec!["SOD1", "FUS", "TARDBP", "SOD1"]);
    }

    #[test]
    fn test_parse_gene_list_empty() {
        assert!(parse_gene_list("  \n ").unwrap().is_empty());
    }

    #[test]
    fn test_gene_symbol_serde() {
        let gene: GeneSymbol = serde_json::from_str("\"TBK1\"").unwrap();
        assert_eq!(gene.as_str(), "TBK1");
        assert_eq!(serde_json::to_string(&gene).unwrap(), "\"TBK1\"");
        assert!(serde_json::from_str::<GeneSymbol>("\"\"").is_err());
    }
}
