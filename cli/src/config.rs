use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "csr-graph",
    version,
    about = "Load an edge list into a compressed sparse row graph and query it",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[arg(
        long,
        short,
        env = "CSR_GRAPH_INPUT",
        value_name = "FILE",
        help = "Edge-list file, one `source destination` pair per line"
    )]
    pub input: PathBuf,

    #[arg(
        long,
        env = "CSR_GRAPH_MAX_MEMORY_MB",
        value_name = "MB",
        help = "Refuse to build a graph larger than this"
    )]
    pub max_memory_mb: Option<usize>,

    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Text,
        help = "Output format for results"
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Node and edge counts, memory footprint, load time
    Stats,
    /// Out-neighbors of a node
    Neighbors {
        #[arg(allow_negative_numbers = true)]
        node: i64,
    },
    /// Node with the highest out-degree
    MaxDegree,
    /// Nodes ranked by out-degree
    Degree {
        #[arg(long, default_value_t = 10, help = "Number of nodes to list, 0 for all")]
        top: usize,
    },
    /// Edges reached by a breadth-first traversal bounded by depth
    Bfs {
        #[arg(allow_negative_numbers = true)]
        start: i64,

        #[arg(long, short, default_value_t = 2, allow_negative_numbers = true)]
        depth: i64,
    },
}
