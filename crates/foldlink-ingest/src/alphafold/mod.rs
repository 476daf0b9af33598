//! AlphaFold DB link derivation
//!
//! Joins resolved UniProt entries back to the input gene list and templates
//! the AlphaFold entry-page and model-file URLs for each accession. Nothing
//! here touches the network.

use crate::uniprot::ResolvedEntry;
use foldlink_common::types::GeneSymbol;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Public AlphaFold Protein Structure Database base URL
pub const DEFAULT_ALPHAFOLD_URL: &str = "https://alphafold.ebi.ac.uk";

/// Host serving the public entry pages
pub const DEFAULT_ALPHAFOLD_ENTRY_URL: &str = "https://www.alphafold.ebi.ac.uk";

/// Model version used in file names (`-model_v2`)
pub const DEFAULT_MODEL_VERSION: u32 = 2;

/// Model file formats served by AlphaFold DB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StructureFormat {
    /// mmCIF
    #[default]
    Cif,
    Pdb,
}

impl StructureFormat {
    pub fn extension(self) -> &'static str {
        match self {
            StructureFormat::Cif => "cif",
            StructureFormat::Pdb => "pdb",
        }
    }
}

impl FromStr for StructureFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cif" | "mmcif" => Ok(StructureFormat::Cif),
            "pdb" => Ok(StructureFormat::Pdb),
            _ => Err(format!("Unknown structure format '{}'. Use cif or pdb", s)),
        }
    }
}

impl fmt::Display for StructureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// URL templates for one AlphaFold DB deployment
///
/// Entry pages and model files may live on different hosts; the public
/// deployment serves entry pages from `www.`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTemplates {
    base_url: String,
    entry_base_url: String,
    model_version: u32,
    format: StructureFormat,
}

impl Default for LinkTemplates {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHAFOLD_URL).with_entry_base_url(DEFAULT_ALPHAFOLD_ENTRY_URL)
    }
}

impl LinkTemplates {
    /// Templates serving both entry pages and model files from `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            entry_base_url: base_url.clone(),
            base_url,
            model_version: DEFAULT_MODEL_VERSION,
            format: StructureFormat::default(),
        }
    }

    pub fn with_entry_base_url(mut self, entry_base_url: impl Into<String>) -> Self {
        self.entry_base_url = entry_base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model_version(mut self, version: u32) -> Self {
        self.model_version = version;
        self
    }

    pub fn with_format(mut self, format: StructureFormat) -> Self {
        self.format = format;
        self
    }

    pub fn model_version(&self) -> u32 {
        self.model_version
    }

    pub fn format(&self) -> StructureFormat {
        self.format
    }

    /// `{entry_base}/entry/{accession}`
    pub fn entry_link(&self, accession: &str) -> String {
        format!("{}/entry/{}", self.entry_base_url, accession)
    }

    /// `{base}/files/AF-{accession}-F1-model_v{N}.{ext}`
    pub fn structure_link(&self, accession: &str) -> String {
        format!(
            "{}/files/AF-{}-F1-model_v{}.{}",
            self.base_url,
            accession,
            self.model_version,
            self.format.extension()
        )
    }
}

/// Which input gene an entry belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribution {
    /// Exactly one alias matched; spelled as in the response
    Single(String),

    /// Zero or several aliases matched, so the entry cannot be pinned to one
    /// input gene. Holds the matching aliases in response order.
    Ambiguous(Vec<String>),
}

impl Attribution {
    /// Attribute an entry from its gene aliases.
    ///
    /// `wanted` holds the input genes' [`GeneSymbol::normalized`] keys.
    pub fn from_aliases<'a>(
        aliases: impl IntoIterator<Item = &'a str>,
        wanted: &HashSet<String>,
    ) -> Self {
        let mut matched: Vec<String> = aliases
            .into_iter()
            .filter(|alias| wanted.contains(&GeneSymbol::normalize(alias)))
            .map(str::to_string)
            .collect();

        if matched.len() == 1 {
            Attribution::Single(matched.remove(0))
        } else {
            Attribution::Ambiguous(matched)
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Attribution::Ambiguous(_))
    }

    /// The single attributed gene, if there is one
    pub fn gene(&self) -> Option<&str> {
        match self {
            Attribution::Single(gene) => Some(gene),
            Attribution::Ambiguous(_) => None,
        }
    }
}

/// Renders as the alias for a single match and as a list (`[]`,
/// `['SMN1', 'SMN2']`) otherwise. List items are quoted the way a Python
/// list prints them, so an alias holding `'` switches to double quotes.
impl fmt::Display for Attribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attribution::Single(gene) => f.write_str(gene),
            Attribution::Ambiguous(genes) => {
                f.write_str("[")?;
                for (i, gene) in genes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_quoted(f, gene)?;
                }
                f.write_str("]")
            },
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, item: &str) -> fmt::Result {
    let quote = if item.contains('\'') && !item.contains('"') {
        '"'
    } else {
        '\''
    };

    write!(f, "{}", quote)?;
    for c in item.chars() {
        if c == quote || c == '\\' {
            write!(f, "\\")?;
        }
        write!(f, "{}", c)?;
    }
    write!(f, "{}", quote)
}

/// A resolved entry with gene attribution and AlphaFold links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedRecord {
    entry: ResolvedEntry,
    attributed_gene: Attribution,
    entry_link: String,
    structure_link: String,
}

impl EnrichedRecord {
    pub fn entry(&self) -> &ResolvedEntry {
        &self.entry
    }

    pub fn entry_id(&self) -> &str {
        &self.entry.entry_id
    }

    pub fn attributed_gene(&self) -> &Attribution {
        &self.attributed_gene
    }

    pub fn entry_link(&self) -> &str {
        &self.entry_link
    }

    pub fn structure_link(&self) -> &str {
        &self.structure_link
    }
}

/// Attribute every entry to input genes and attach its links.
///
/// Total: one record per entry, in order, whatever the attribution.
pub fn enrich(
    entries: &[ResolvedEntry],
    genes: &[GeneSymbol],
    links: &LinkTemplates,
) -> Vec<EnrichedRecord> {
    let wanted: HashSet<String> = genes.iter().map(GeneSymbol::normalized).collect();

    entries
        .iter()
        .map(|entry| {
            let attributed_gene = Attribution::from_aliases(entry.gene_aliases(), &wanted);
            if attributed_gene.is_ambiguous() {
                debug!(
                    entry_id = %entry.entry_id,
                    gene_names = %entry.gene_names_raw,
                    attribution = %attributed_gene,
                    "Ambiguous gene attribution"
                );
            }

            EnrichedRecord {
                attributed_gene,
                entry_link: links.entry_link(&entry.entry_id),
                structure_link: links.structure_link(&entry.entry_id),
                entry: entry.clone(),
            }
        })
        .collect()
}
