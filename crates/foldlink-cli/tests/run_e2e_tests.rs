//! End-to-end tests for the foldlink binary
//!
//! These tests drive the CLI against a mock UniProt server:
//! - Report contents and location
//! - The search log written with --log
//! - Remote failures, truncation and --strict
//! - The url and links subcommands
//! - Environment overrides for search, link and logging settings

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

const HEADER: &str = "Entry\tEntry Name\tProtein names\tGene Names\tOrganism\tLength";

/// Helper to build a TSV body from data rows
fn tsv(rows: &[&str]) -> String {
    let mut body = format!("{}\n", HEADER);
    for row in rows {
        body.push_str(row);
        body.push('\n');
    }
    body
}

fn sod1_fus_body() -> String {
    tsv(&[
        "P00441\tSODC_HUMAN\tSuperoxide dismutase [Cu-Zn] (EC 1.15.1.1)\tSOD1 SOD\tHomo sapiens (Human)\t154",
        "P35637\tFUS_HUMAN\tRNA-binding protein FUS\tFUS TLS\tHomo sapiens (Human)\t526",
    ])
}

/// Helper to build a foldlink command isolated from the caller's environment
fn foldlink(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("foldlink").unwrap();
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("LOG_LEVEL")
        .env_remove("LOG_OUTPUT")
        .env_remove("LOG_DIR")
        .env_remove("LOG_FORMAT")
        .env_remove("LOG_FILTER")
        .env_remove("FOLDLINK_UNIPROT_URL")
        .env_remove("FOLDLINK_TARGET_DIR")
        .env_remove("FOLDLINK_PAGE_SIZE")
        .env_remove("FOLDLINK_MODEL_VERSION")
        .env_remove("FOLDLINK_API_TIMEOUT_SECS")
        .env_remove("FOLDLINK_ALPHAFOLD_URL")
        .env_remove("FOLDLINK_ALPHAFOLD_ENTRY_URL");
    cmd
}

#[tokio::test]
async fn test_run_writes_csv_report() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/uniprotkb/search"))
        .and(query_param(
            "query",
            r#"organism_name:"Homo sapiens" AND (gene_exact:sod1 OR gene_exact:fus) AND reviewed:true"#,
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Total-Results", "2")
                .set_body_string(sod1_fus_body()),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    foldlink(&dir)
        .arg("--uniprot-url")
        .arg(mock_server.uri())
        .arg("run")
        .arg("-g")
        .arg("SOD1")
        .arg("FUS")
        .arg("-t")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Entries: 2"))
        .stdout(predicate::str::contains("Genes: 2"))
        .stdout(predicate::str::contains("AlphaFold_structures.csv"));

    let report = fs::read_to_string(dir.path().join("Results/AlphaFold_structures.csv")).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(
        lines[0],
        "Gene,Entry,Protein names,Length,Link AlphaFold Database,Link to AF mmCIF"
    );
    assert_eq!(
        lines[1],
        "SOD1,P00441,Superoxide dismutase [Cu-Zn] (EC 1.15.1.1),154,https://www.alphafold.ebi.ac.uk/entry/P00441,https://alphafold.ebi.ac.uk/files/AF-P00441-F1-model_v2.cif"
    );
    assert!(lines[2].starts_with("FUS,P35637,RNA-binding protein FUS,526,"));
    assert_eq!(lines.len(), 3);
}

#[tokio::test]
async fn test_run_with_log_writes_search_log() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/uniprotkb/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sod1_fus_body()))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    foldlink(&dir)
        .arg("--uniprot-url")
        .arg(mock_server.uri())
        .arg("run")
        .arg("-g")
        .arg("SOD1 FUS")
        .arg("--log")
        .arg("yes")
        .arg("-t")
        .arg(dir.path())
        .assert()
        .success();

    let log = fs::read_to_string(dir.path().join("Results/search_log.txt")).unwrap();
    assert!(log.starts_with("Search log for foldlink with genes SOD1 FUS"));
    assert!(log.contains("Run summary"));
    assert!(log.contains("entries=2"));
    assert!(log.contains("ambiguous=0"));
    assert!(log.contains("Search finished"));
    assert!(dir.path().join("Results/AlphaFold_structures.csv").exists());
}

#[tokio::test]
async fn test_run_fails_on_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/uniprotkb/search"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    foldlink(&dir)
        .arg("--uniprot-url")
        .arg(mock_server.uri())
        .arg("run")
        .arg("-g")
        .arg("SOD1")
        .arg("-t")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP 500"));

    assert!(!dir.path().join("Results/AlphaFold_structures.csv").exists());
}

#[tokio::test]
async fn test_truncation_warns_by_default_and_fails_with_strict() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/uniprotkb/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Total-Results", "7")
                .set_body_string(sod1_fus_body()),
        )
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    foldlink(&dir)
        .arg("--uniprot-url")
        .arg(mock_server.uri())
        .arg("run")
        .arg("-g")
        .arg("SOD1")
        .arg("FUS")
        .arg("-t")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Truncated: 2 of 7 matches received"));

    let strict_dir = TempDir::new().unwrap();
    foldlink(&strict_dir)
        .arg("--uniprot-url")
        .arg(mock_server.uri())
        .arg("run")
        .arg("-g")
        .arg("SOD1")
        .arg("FUS")
        .arg("-t")
        .arg(strict_dir.path())
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("2 rows received, 7 matches reported"));

    assert!(!strict_dir
        .path()
        .join("Results/AlphaFold_structures.csv")
        .exists());
}

#[tokio::test]
async fn test_empty_genes_file_sends_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/uniprotkb/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sod1_fus_body()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let genes_file = dir.path().join("genes.txt");
    fs::write(&genes_file, "  \n").unwrap();

    foldlink(&dir)
        .arg("--uniprot-url")
        .arg(mock_server.uri())
        .arg("run")
        .arg("--genes-file")
        .arg(&genes_file)
        .arg("-t")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No gene symbols supplied"));
}

#[test]
fn test_missing_genes_file() {
    let dir = TempDir::new().unwrap();
    foldlink(&dir)
        .arg("run")
        .arg("--genes-file")
        .arg(dir.path().join("absent.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_url_prints_search_url() {
    let dir = TempDir::new().unwrap();
    foldlink(&dir)
        .arg("--uniprot-url")
        .arg("http://mock.local")
        .arg("url")
        .arg("-g")
        .arg("SOD1")
        .arg("FUS")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "http://mock.local/uniprotkb/search?fields=",
        ))
        .stdout(predicate::str::contains("gene_exact%3Asod1%20OR%20gene_exact%3Afus"))
        .stdout(predicate::str::contains("reviewed%3Atrue"));
}

#[test]
fn test_links_prints_templated_links() {
    let dir = TempDir::new().unwrap();
    foldlink(&dir)
        .arg("links")
        .arg("P12345")
        .arg("--model-version")
        .arg("4")
        .assert()
        .success()
        .stdout(predicate::str::contains("https://www.alphafold.ebi.ac.uk/entry/P12345"))
        .stdout(predicate::str::contains(
            "https://alphafold.ebi.ac.uk/files/AF-P12345-F1-model_v4.cif",
        ));
}

#[test]
fn test_page_size_from_env() {
    let dir = TempDir::new().unwrap();
    foldlink(&dir)
        .env("FOLDLINK_PAGE_SIZE", "25")
        .arg("url")
        .arg("-g")
        .arg("SOD1")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("&size=25\n"));
}

#[test]
fn test_non_numeric_env_setting_is_rejected() {
    let dir = TempDir::new().unwrap();
    foldlink(&dir)
        .env("FOLDLINK_PAGE_SIZE", "abc")
        .arg("url")
        .arg("-g")
        .arg("SOD1")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "FOLDLINK_PAGE_SIZE must be a number, got 'abc'",
        ));
}

#[test]
fn test_out_of_range_page_size_from_env() {
    let dir = TempDir::new().unwrap();
    foldlink(&dir)
        .env("FOLDLINK_PAGE_SIZE", "501")
        .arg("url")
        .arg("-g")
        .arg("SOD1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Page size 501"));
}

#[test]
fn test_link_settings_from_env() {
    let dir = TempDir::new().unwrap();
    foldlink(&dir)
        .env("FOLDLINK_MODEL_VERSION", "4")
        .env("FOLDLINK_ALPHAFOLD_URL", "http://af.local")
        .arg("links")
        .arg("P00441")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://af.local/entry/P00441"))
        .stdout(predicate::str::contains(
            "http://af.local/files/AF-P00441-F1-model_v4.cif",
        ));

    foldlink(&dir)
        .env("FOLDLINK_ALPHAFOLD_ENTRY_URL", "http://pages.local")
        .arg("links")
        .arg("P00441")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://pages.local/entry/P00441"))
        .stdout(predicate::str::contains(
            "https://alphafold.ebi.ac.uk/files/AF-P00441-F1-model_v2.cif",
        ));
}

#[tokio::test]
async fn test_api_timeout_from_env() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/uniprotkb/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(sod1_fus_body())
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    foldlink(&dir)
        .env("FOLDLINK_API_TIMEOUT_SECS", "1")
        .arg("--uniprot-url")
        .arg(mock_server.uri())
        .arg("run")
        .arg("-g")
        .arg("SOD1")
        .arg("-t")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP request failed"));
}

#[test]
fn test_log_settings_from_env() {
    let dir = TempDir::new().unwrap();
    let log_dir = dir.path().join("logs");

    foldlink(&dir)
        .env("LOG_LEVEL", "debug")
        .env("LOG_OUTPUT", "file")
        .env("LOG_DIR", &log_dir)
        .arg("url")
        .arg("-g")
        .arg("SOD1")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    let log = fs::read_to_string(log_dir.join("foldlink.log")).unwrap();
    assert!(log.contains("Printing search URL"));
}

#[test]
fn test_invalid_log_setting_warns_and_continues() {
    let dir = TempDir::new().unwrap();
    foldlink(&dir)
        .env("LOG_LEVEL", "loud")
        .arg("links")
        .arg("P00441")
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: Invalid log level: loud"))
        .stdout(predicate::str::contains("AF-P00441-F1-model_v2.cif"));
}
