//! csr-graph: command-line front end for csr-graph-core.
//!
//! Loads an edge list once, runs a single query, prints the result as text
//! or JSON on stdout. Diagnostics go to stderr through `tracing`.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use csr_graph_core::LoadError;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

mod config;
mod degree;
mod load;
mod neighborhood;
mod output;

use config::{Cli, Command};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("csr-graph: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let loaded = load::load_graph(cli)?;
    tracing::debug!(command = ?cli.command, "running query");
    let graph = &loaded.graph;

    match &cli.command {
        Command::Stats => output::emit(&load::StatsReport::new(&loaded), cli.format),
        Command::Neighbors { node } => {
            output::emit(&neighborhood::neighbors(graph, *node), cli.format)
        }
        Command::MaxDegree => output::emit(&degree::max_degree(graph), cli.format),
        Command::Degree { top } => output::emit(&degree::ranking(graph, *top), cli.format),
        Command::Bfs { start, depth } => {
            output::emit(&neighborhood::bfs(graph, *start, *depth), cli.format)
        }
    }
}
