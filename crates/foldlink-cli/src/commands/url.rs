//! Url command implementation
//!
//! Dry run: prints the search URL for the gene list without contacting UniProt.

use crate::config::Config;
use crate::error::Result;
use foldlink_common::types::GeneSymbol;
use tracing::debug;

/// Run the url command
pub async fn run(config: &Config, genes: &[GeneSymbol]) -> Result<()> {
    let url = search_url(config, genes)?;
    debug!(genes = genes.len(), "Printing search URL");
    println!("{}", url);
    Ok(())
}

fn search_url(config: &Config, genes: &[GeneSymbol]) -> Result<String> {
    Ok(config.search_query(genes)?.url(&config.uniprot_url))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use foldlink_common::types::parse_gene_list;

    #[test]
    fn test_search_url_uses_configured_base() {
        let config = Config {
            uniprot_url: "http://mock.local".to_string(),
            ..Config::default()
        };
        let genes = parse_gene_list("SOD1").unwrap();

        let url = search_url(&config, &genes).unwrap();
        assert!(url.starts_with("http://mock.local/uniprotkb/search?"));
        assert!(url.contains("gene_exact%3Asod1"));
        assert!(url.contains("size=500"));
    }

    #[test]
    fn test_search_url_rejects_empty_list() {
        assert!(search_url(&Config::default(), &[]).is_err());
    }
}
