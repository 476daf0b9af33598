//! Links command implementation
//!
//! Templates AlphaFold links for accessions that are already known.

use crate::config::Config;
use crate::error::{CliError, Result};
use colored::Colorize;
use foldlink_ingest::alphafold::LinkTemplates;

/// Run the links command
pub async fn run(config: &Config, accessions: &[String]) -> Result<()> {
    let templates = config.link_templates();
    for (accession, entry_link, structure_link) in link_rows(&templates, accessions)? {
        println!("{}", accession.bold());
        println!("  {}", entry_link);
        println!("  {}", structure_link);
    }
    Ok(())
}

fn link_rows(
    templates: &LinkTemplates,
    accessions: &[String],
) -> Result<Vec<(String, String, String)>> {
    accessions
        .iter()
        .map(|raw| {
            let accession = raw.trim();
            if accession.is_empty() {
                return Err(CliError::config("Accession cannot be empty"));
            }
            Ok((
                accession.to_string(),
                templates.entry_link(accession),
                templates.structure_link(accession),
            ))
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use foldlink_ingest::alphafold::StructureFormat;

    #[test]
    fn test_link_rows() {
        let templates = LinkTemplates::default();
        let rows = link_rows(&templates, &[" P12345 ".to_string()]).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0, "P12345");
        assert_eq!(rows[0].1, "https://www.alphafold.ebi.ac.uk/entry/P12345");
        assert_eq!(
            rows[0].2,
            "https://alphafold.ebi.ac.uk/files/AF-P12345-F1-model_v2.cif"
        );
    }

    #[test]
    fn test_link_rows_follow_templates() {
        let templates = LinkTemplates::new("http://af.local")
            .with_model_version(4)
            .with_format(StructureFormat::Pdb);
        let rows = link_rows(&templates, &["Q16637".to_string()]).unwrap();
        assert_eq!(rows[0].2, "http://af.local/files/AF-Q16637-F1-model_v4.pdb");
    }

    #[test]
    fn test_link_rows_reject_blank() {
        let templates = LinkTemplates::default();
        assert!(link_rows(&templates, &["  ".to_string()]).is_err());
    }
}
