use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use csr_graph_core::{CsrGraph, LoadOptions};
use serde::Serialize;

use crate::config::Cli;
use crate::output::Report;
use crate::CliError;

/// A built graph plus where and how fast it was loaded.
pub struct LoadedGraph {
    pub graph: CsrGraph,
    pub source: PathBuf,
    pub load_time_ms: f64,
}

pub fn load_graph(cli: &Cli) -> Result<LoadedGraph, CliError> {
    let start = Instant::now();
    let options = LoadOptions {
        max_memory_mb: cli.max_memory_mb,
    };
    let graph = CsrGraph::load_with(&cli.input, &options)?;

    Ok(LoadedGraph {
        graph,
        source: cli.input.clone(),
        load_time_ms: start.elapsed().as_secs_f64() * 1000.0,
    })
}

#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub source: String,
    pub node_count: usize,
    pub edge_count: usize,
    pub memory_bytes: usize,
    pub load_time_ms: f64,
}

impl StatsReport {
    pub fn new(loaded: &LoadedGraph) -> Self {
        Self {
            source: loaded.source.display().to_string(),
            node_count: loaded.graph.node_count(),
            edge_count: loaded.graph.edge_count(),
            memory_bytes: loaded.graph.memory_usage(),
            load_time_ms: loaded.load_time_ms,
        }
    }
}

impl Report for StatsReport {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{:<12} {}", "source", self.source)?;
        writeln!(out, "{:<12} {}", "nodes", self.node_count)?;
        writeln!(out, "{:<12} {}", "edges", self.edge_count)?;
        writeln!(
            out,
            "{:<12} {:.2}MB ({} bytes)",
            "memory",
            self.memory_bytes as f64 / 1_048_576.0,
            self.memory_bytes
        )?;
        writeln!(out, "{:<12} {:.1}ms", "load time", self.load_time_ms)
    }
}
