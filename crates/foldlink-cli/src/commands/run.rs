//! Run command implementation
//!
//! Resolves the gene list against UniProt, derives AlphaFold links and writes
//! the report into the results directory.

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::genes::display_genes;
use crate::progress::create_spinner;
use crate::report::Report;
use chrono::{DateTime, Local};
use colored::Colorize;
use foldlink_common::types::GeneSymbol;
use foldlink_ingest::alphafold::enrich;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Start a fresh search log with a header naming the genes.
///
/// The tracing file sink appends below this header.
pub fn start_search_log(path: &Path, genes: &[GeneSymbol]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = std::fs::File::create(path)?;
    writeln!(
        file,
        "Search log for foldlink with genes {} (started {})",
        display_genes(genes),
        Local::now().format(TIMESTAMP_FORMAT)
    )?;
    Ok(())
}

/// Run the full pipeline for `genes`
pub async fn run(config: &Config, genes: &[GeneSymbol]) -> Result<()> {
    let started: DateTime<Local> = Local::now();
    info!(
        genes = genes.len(),
        started = %started.format(TIMESTAMP_FORMAT),
        "Starting AlphaFold link search"
    );

    let query = config.search_query(genes)?;
    let client = config.uniprot_client()?;
    debug!(url = %client.search_url(&query), "Built UniProt search");

    let spinner = create_spinner(&format!("Querying UniProt for {} genes...", genes.len()));
    let resolution = client.resolve(&query).await;
    spinner.finish_and_clear();
    let resolution = resolution?;

    let received = resolution.entries.len() + resolution.malformed_rows.len();
    if resolution.truncated && config.strict {
        return Err(CliError::truncated(received, resolution.total_results));
    }

    let records = enrich(&resolution.entries, genes, &config.link_templates());
    let ambiguous = records
        .iter()
        .filter(|record| record.attributed_gene().is_ambiguous())
        .count();

    let output = config.output_path();
    Report::new(&records, config.structure_format).save(&output, config.report_format)?;
    info!(path = %output.display(), rows = records.len(), "Report written");

    // Mirrored into the search log when --log is set
    info!(
        genes = genes.len(),
        entries = records.len(),
        ambiguous,
        malformed = resolution.malformed_rows.len(),
        truncated = resolution.truncated,
        output = %output.display(),
        "Run summary"
    );

    println!("{}", "✓ AlphaFold link search complete".green().bold());
    println!("  {} {}", "Genes:".bold(), genes.len());
    println!("  {} {}", "Entries:".bold(), records.len());
    if ambiguous > 0 {
        println!("  {} {}", "Ambiguous:".bold(), ambiguous.to_string().yellow());
    } else {
        println!("  {} 0", "Ambiguous:".bold());
    }
    if !resolution.malformed_rows.is_empty() {
        println!(
            "  {} {}",
            "Malformed rows skipped:".bold(),
            resolution.malformed_rows.len().to_string().yellow()
        );
    }
    if resolution.truncated {
        let total = resolution
            .total_results
            .map(|t| t.to_string())
            .unwrap_or_else(|| "more".to_string());
        warn!(received, total = %total, "Report is partial");
        println!(
            "  {} {} of {} matches received",
            "Truncated:".yellow().bold(),
            received,
            total
        );
    }
    println!("  {} {}", "Output:".bold(), output.display().to_string().cyan());

    let finished = Local::now();
    info!(
        started = %started.format(TIMESTAMP_FORMAT),
        finished = %finished.format(TIMESTAMP_FORMAT),
        elapsed_ms = (finished - started).num_milliseconds(),
        "Search finished"
    );

    Ok(())
}
