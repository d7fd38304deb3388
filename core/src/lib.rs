//! csr-graph-core: compressed sparse row graph engine.
//!
//! Builds an immutable directed multigraph from a whitespace-separated edge
//! list in three scans (discover, degree histogram + prefix sum, bucket fill)
//! and answers neighbor, max out-degree and bounded BFS queries over the
//! resulting flat arrays. No CLI or output concerns live here; those belong
//! to the `csr-graph` binary.

mod error;
mod graph;
mod load;
mod store;
mod traversal;

pub use error::{LoadError, Result};
pub use graph::{CsrGraph, NodeId, DEFAULT_EDGE_WEIGHT};
pub use load::{parse_edge_line, LoadOptions};
pub use store::{resolve_node, GraphStore};
pub use traversal::{
    bounded_bfs, degree_ranking, max_out_degree_node, neighbors, DegreeResult, TraversalResult,
};
