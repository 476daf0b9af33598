//! Report output
//!
//! Writes enriched records with a fixed column projection: gene, accession,
//! protein name, length, entry-page link and model-file link. Delimited
//! formats get a header row and no index column.

use crate::error::{CliError, Result};
use foldlink_ingest::alphafold::{EnrichedRecord, StructureFormat};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

/// Report file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Tsv => "tsv",
            ReportFormat::Json => "json",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ReportFormat::Csv),
            "tsv" | "tab" => Ok(ReportFormat::Tsv),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!("Unknown format: '{}'. Use csv, tsv, or json", s)),
        }
    }
}

/// Column header for the model-file link
fn structure_column(format: StructureFormat) -> &'static str {
    match format {
        StructureFormat::Cif => "Link to AF mmCIF",
        StructureFormat::Pdb => "Link to AF PDB",
    }
}

/// One output row
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    gene: String,
    entry: &'a str,
    protein_names: &'a str,
    length: u32,
    alphafold_entry: &'a str,
    structure_file: &'a str,
}

impl<'a> From<&'a EnrichedRecord> for ReportRow<'a> {
    fn from(record: &'a EnrichedRecord) -> Self {
        Self {
            gene: record.attributed_gene().to_string(),
            entry: record.entry_id(),
            protein_names: &record.entry().protein_name,
            length: record.entry().sequence_length,
            alphafold_entry: record.entry_link(),
            structure_file: record.structure_link(),
        }
    }
}

/// The link table for one run
pub struct Report<'a> {
    records: &'a [EnrichedRecord],
    structure_format: StructureFormat,
}

impl<'a> Report<'a> {
    pub fn new(records: &'a [EnrichedRecord], structure_format: StructureFormat) -> Self {
        Self {
            records,
            structure_format,
        }
    }

    pub fn headers(&self) -> [&'static str; 6] {
        [
            "Gene",
            "Entry",
            "Protein names",
            "Length",
            "Link AlphaFold Database",
            structure_column(self.structure_format),
        ]
    }

    /// Write the report to `writer`
    pub fn write<W: Write>(&self, format: ReportFormat, writer: W) -> Result<()> {
        match format {
            ReportFormat::Csv => self.write_delimited(writer, b','),
            ReportFormat::Tsv => self.write_delimited(writer, b'\t'),
            ReportFormat::Json => self.write_json(writer),
        }
    }

    /// Write the report to a file, creating parent directories
    pub fn save(&self, path: &Path, format: ReportFormat) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write(format, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    fn write_delimited<W: Write>(&self, writer: W, delimiter: u8) -> Result<()> {
        let mut out = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(writer);

        out.write_record(self.headers())?;
        for record in self.records {
            let row = ReportRow::from(record);
            out.write_record([
                row.gene.as_str(),
                row.entry,
                row.protein_names,
                row.length.to_string().as_str(),
                row.alphafold_entry,
                row.structure_file,
            ])?;
        }
        out.flush().map_err(CliError::from)
    }

    fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        let rows: Vec<ReportRow<'_>> = self.records.iter().map(ReportRow::from).collect();
        serde_json::to_writer_pretty(writer, &rows)?;
        Ok(())
    }
}
