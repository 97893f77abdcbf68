//! autoindex CLI entry point

mod cli;

use std::fs;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use autoindex_core::prelude::*;

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(Some(output)) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout carries only the index.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Returns the YAML when it should be printed, `None` once written to a file.
fn run(cli: &Cli) -> Result<Option<String>> {
    let indexer = match &cli.root {
        Some(root) => AutoIndexer::new(root.clone()),
        None => AutoIndexer::from_current_dir()?,
    };

    let boatsrc = match &cli.boatsrc {
        Some(path) => BoatsRc::load(path)?,
        None => BoatsRc::discover(indexer.working_dir())?,
    };

    let base = match &cli.options {
        Some(path) => GetIndexYamlOptions::load(path)?,
        None => GetIndexYamlOptions::default(),
    };
    let options = cli.merge_options(base);

    let yaml = indexer.get_index_yaml(&cli.index_file, &boatsrc, &options)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &yaml)?;
            tracing::info!(path = %path, bytes = yaml.len(), "index written");
            Ok(None)
        }
        None => Ok(Some(yaml)),
    }
}
