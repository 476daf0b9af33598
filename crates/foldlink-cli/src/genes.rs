//! Gene list sources
//!
//! Genes come from `--genes`, `--genes-file`, or both. With neither, the
//! built-in ALS-associated panel is used.

use crate::error::{CliError, Result};
use crate::GeneArgs;
use foldlink_common::types::{parse_gene_list, GeneSymbol};
use tracing::debug;

/// Built-in ALS gene panel, in curation order. Duplicates and mixed-case
/// spellings (e.g. `C9ORF72` and `C9orf72`) are kept as curated.
pub const DEFAULT_PANEL: &[&str] = &[
    "ACSL5", "AGT", "ALAD", "ALS2", "ALS3", "ALS7", "ANG", "ANXA11", "APEX1", "APOE", "AR",
    "ARHGEF28", "ARPP21", "ATXN1", "ATXN2", "B4GALT6", "BCL11B", "BCL6", "C21ORF2", "C9ORF72",
    "CAMTA1", "CAV1", "CAV2", "CCNF", "CCS", "CDH13", "CDH22", "CFAP410", "CHCHD10", "CHGB",
    "CHMP2B", "CNTF", "CNTN4", "CNTN6", "CRIM1", "CRYM", "CSNK1G3", "CST3", "CX3CR1",
    "CYP27A1", "CYP2D6", "DAO", "DCTN1", "DIAPH3", "DISC1", "DNAJC7", "DNMT3A", "DNMT3B",
    "DOC2B", "DPP6", "DYNC1H1", "EFEMP1", "ELP3", "ENAH", "EPHA3", "EPHA4", "ERBB4", "ERLIN1",
    "EWSR1", "EPHA3", "FEZF2", "FGGY", "FIG4", "FUS", "GARS", "GGNBP2", "GLE1", "GLT8D1",
    "GPX3", "GRB14", "GRN", "HEXA", "HFE", "HNRNPA1", "HNRNPA2B1", "IDE", "ITPR2", "KBTBD3",
    "KDR", "KIAA1600", "KIF5A", "KIFAP3", "LIF", "LIPC", "LMNB1", "LOX", "LUM", "MAOB", "MAPT",
    "MATR3", "MOBP", "MTND2P1", "NAIP", "NEFH", "NEFL", "NEK1", "NETO1", "NIPA1", "NT5C1A",
    "NT5C3L", "ODR4", "OGG1", "OMA1", "OPTN", "PARK7", "PCP4", "PFN1", "PLEKHG5", "PNPLA6",
    "PON1", "PON2", "PON3", "PRPH", "PSEN1", "PVR", "RAMP3", "RBMS1", "RFTN1", "RNASE2",
    "RNF19A", "SARM1", "SCFD1", "SCN7A", "SELL", "SEMA6A", "SETX", "SIGMAR1", "SLC1A2",
    "SLC39A11", "SLC52A3", "SMN1", "SMN2", "SNCG", "SOD1", "SOD2", "SOX5", "SPAST", "SPG11",
    "SPG7", "SQSTM1", "SS18L1", "STMN2", "SUSD1", "SYNE1", "SYT9", "TAF15", "TARDBP", "TBK1",
    "TFIP11", "TIA1", "TMEM225B", "TNIP1", "TRPM7", "TUBA4A", "TUBGCP4", "UBQLN1", "UBQLN2",
    "UNC13A", "VAPB", "VCP", "VDR", "VEGFA", "VPS54", "VRK1", "ZFP64", "ZNF512B", "ZNF746",
    "ZNHIT3", "ADAMTS2", "ANKRD18B", "APTX", "AQP3", "AQP7", "ARHGEF39", "ARID3C", "ATOSB",
    "ATP5PO", "B4GALT1", "BAG1", "BSCL2", "C21orf62", "C22orf15", "C5orf60", "C9orf131",
    "C9orf72", "CA9", "CAMK1D", "CANX", "CBR1", "CBR3", "CBY3", "CCDC107", "CCDC3", "CCIN",
    "CCL19", "CCL21", "CCL27", "CD72", "CFAP298", "CHAF1B", "CHMP5", "CIMIP2B", "CLDN14",
    "CLIC6", "CLTA", "CNTFR", "CREB3", "CRYZL1", "CSNK2A1", "CYLD", "CYLD-AS2", "DCAF12",
    "DCTN3", "DNAI1", "DNAJA1", "DNAJB5", "DNAJC28", "DONSON", "DOP1B", "DYRK1A", "EGILA",
    "ENHO", "EVA1C", "EXOSC3", "FAM166B", "FAM205A", "FAM214B", "FAM219A", "FAM221B", "FANCG",
    "FBXO10", "FRMPD1", "GALT", "GART", "GBA1", "GBA2", "GLIPR2", "GNE", "GRHPR", "GRM6",
    "HINT2", "HLCS", "HNRNPH1", "HNRNPUL2-BSCL2", "HRCT1", "HUNK", "IFNAR1", "IFNAR2",
    "IFNGR2", "IL10RB", "IL11RA", "ITSN1", "KCNE1", "KCNE2", "KCNJ6", "KIF24", "LOC106627981",
    "LOC108903148", "LOC108903149", "LOC109504728", "LOC117038776", "LOC121366042",
    "LOC124629354", "LOC126807526", "LOC126860782", "LOC126860783", "LTC4S", "MAML1", "MASP2",
    "MCM10", "MELK", "MGAT4B", "MIS18A", "MORC3", "MPP4", "MRAP", "MRPS6", "MSMP", "MYORG",
    "NDUFB6", "NFX1", "NOL6", "NPR2", "NUDT2", "OLIG1", "OLIG2", "OR13J1", "OR2S2", "PAX5",
    "PAXBP1", "PHF24", "PIGO", "PIGP", "POLR1C", "POLR1E", "POU1F1", "PRSS3", "RBCK1", "RCAN1",
    "RECK", "RGP1", "RIGI", "RIPPLY3", "RMRP", "RNASE4", "RNF38", "RPP25L", "RUFY1", "RUNX1",
    "RUSC2", "SCAF4", "SCRT2", "SETD4", "SIM2", "SIT1", "SLC5A3", "SMIM11", "SMU1", "SNHG4",
    "SON", "SPAG8", "SPATA31F1", "SPINK4", "SPMIP6", "SRXN1", "STOML2", "SYNJ1", "TAF1L",
    "TBC1D20", "TCF15", "TCP10L", "TESK1", "TIAM1", "TLN1", "TMEM215", "TMEM237", "TMEM50B",
    "TMEM8B", "TOMM5", "TOPORS", "TPM2", "TRMT10B", "TROAP-AS1", "TTC3", "UBAP1", "UBAP2",
    "UBE2R2", "UNC13B", "URB1", "VPS26C", "ZBTB5", "ZCCHC7", "ZFP91-CNTF", "ZNF354C", "ZNF879",
];

/// The built-in panel as gene symbols
pub fn default_panel() -> Vec<GeneSymbol> {
    DEFAULT_PANEL
        .iter()
        .filter_map(|symbol| GeneSymbol::new(*symbol).ok())
        .collect()
}

/// Collect the gene list described by `args`.
///
/// Each `--genes` value may itself hold several symbols (`-g "SOD1 FUS"`).
/// File genes follow command-line genes. An explicit source that turns out
/// empty yields an empty list rather than the default panel.
pub fn collect_genes(args: &GeneArgs) -> Result<Vec<GeneSymbol>> {
    if !args.is_explicit() {
        debug!(count = DEFAULT_PANEL.len(), "Using built-in gene panel");
        return Ok(default_panel());
    }

    let mut genes = Vec::new();
    for value in &args.genes {
        genes.extend(parse_gene_list(value)?);
    }

    if let Some(ref path) = args.genes_file {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }
        let text = std::fs::read_to_string(path)?;
        genes.extend(parse_gene_list(&text)?);
    }

    debug!(count = genes.len(), "Collected input genes");
    Ok(genes)
}

/// Space-separated rendering for log headers
pub fn display_genes(genes: &[GeneSymbol]) -> String {
    genes
        .iter()
        .map(GeneSymbol::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}
