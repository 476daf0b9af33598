//! foldlink CLI - Main entry point

use clap::Parser;
use foldlink_cli::commands::run::start_search_log;
use foldlink_cli::config::SEARCH_LOG_FILE;
use foldlink_cli::genes::collect_genes;
use foldlink_cli::{Cli, CliError, Commands, Config};
use foldlink_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use foldlink_common::GeneSymbol;
use std::fmt::Display;
use std::process;
use tracing::error;

/// Keep HTTP client internals out of debug output
const QUIET_DEPENDENCIES: &str = "hyper=warn,hyper_util=warn,reqwest=info";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_cli(&cli).unwrap_or_else(|e| fail(e));

    let gene_args = match &cli.command {
        Commands::Run(args) => Some(&args.genes),
        Commands::Url { genes, .. } => Some(genes),
        Commands::Links { .. } => None,
    };
    let genes = gene_args
        .map(collect_genes)
        .transpose()
        .unwrap_or_else(|e| fail(e))
        .unwrap_or_default();

    let log_to_file = matches!(&cli.command, Commands::Run(args) if args.log);
    let log_config = if log_to_file {
        if let Err(e) = start_search_log(&config.search_log_path(), &genes) {
            fail(e);
        }
        LogConfig::builder()
            .level(if cli.verbose {
                LogLevel::Debug
            } else {
                LogLevel::Info
            })
            .output(LogOutput::File)
            .log_dir(config.results_dir())
            .log_file_name(SEARCH_LOG_FILE)
            .filter_directives(QUIET_DEPENDENCIES)
            .build()
    } else {
        LogConfig::builder()
            .level(if cli.verbose {
                LogLevel::Debug
            } else {
                LogLevel::Warn
            })
            .output(LogOutput::Console)
            .filter_directives(QUIET_DEPENDENCIES)
            .build()
    };

    // Environment variables take precedence
    let log_config = match log_config.clone().with_env_overrides() {
        Ok(config) => config,
        Err(e) => {
            warn_unlogged(e);
            log_config
        },
    };

    // The CLI works without logging; the guard flushes the file sink on exit
    let guard = match init_logging(&log_config) {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn_unlogged(e);
            None
        },
    };

    let result = execute_command(&cli, &config, &genes).await;

    if let Err(e) = result {
        error!(error = %e, "Command failed");
        drop(guard);
        fail(e);
    }
}

/// Execute the CLI command
async fn execute_command(
    cli: &Cli,
    config: &Config,
    genes: &[GeneSymbol],
) -> foldlink_cli::Result<()> {
    match &cli.command {
        Commands::Run(_) => foldlink_cli::commands::run::run(config, genes).await,
        Commands::Url { .. } => foldlink_cli::commands::url::run(config, genes).await,
        Commands::Links { accessions, .. } => {
            foldlink_cli::commands::links::run(config, accessions).await
        },
    }
}

/// Report a logging setup problem before any subscriber is installed
fn warn_unlogged(e: anyhow::Error) {
    eprintln!("Warning: {}", CliError::from(e));
}

fn fail(e: impl Display) -> ! {
    eprintln!("Error: {}", e);
    process::exit(1);
}
