use std::collections::BTreeSet;
use std::io::{self, Write};

use csr_graph_core::{GraphStore, NodeId};
use serde::Serialize;

use crate::output::Report;

#[derive(Debug, Serialize)]
pub struct NeighborsReport {
    pub node: i64,
    pub neighbors: Vec<NodeId>,
}

pub fn neighbors<G: GraphStore>(graph: &G, node: i64) -> NeighborsReport {
    NeighborsReport {
        node,
        neighbors: graph.neighbors(node),
    }
}

impl Report for NeighborsReport {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "node {}: {} out-neighbors", self.node, self.neighbors.len())?;
        for n in &self.neighbors {
            writeln!(out, "{n}")?;
        }
        Ok(())
    }
}

/// Edges of a bounded BFS, shaped for a visualization front end.
#[derive(Debug, Serialize)]
pub struct BfsReport {
    pub start: i64,
    pub max_depth: i64,
    /// Distinct endpoints across all reported edges.
    pub node_count: usize,
    pub edges: Vec<(NodeId, NodeId)>,
}

pub fn bfs<G: GraphStore>(graph: &G, start: i64, max_depth: i64) -> BfsReport {
    let edges = graph.bfs(start, max_depth);
    let node_count = edges
        .iter()
        .flat_map(|&(u, v)| [u, v])
        .collect::<BTreeSet<_>>()
        .len();

    BfsReport {
        start,
        max_depth,
        node_count,
        edges,
    }
}

impl Report for BfsReport {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "bfs from {} (depth {}): {} edges, {} nodes",
            self.start,
            self.max_depth,
            self.edges.len(),
            self.node_count
        )?;
        for (u, v) in &self.edges {
            writeln!(out, "{u} -> {v}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csr_graph_core::{CsrGraph, LoadOptions};
    use std::io::Cursor;

    fn triangle() -> CsrGraph {
        CsrGraph::from_reader(
            &mut Cursor::new("0 1\n1 2\n0 2\n".as_bytes()),
            &LoadOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_bfs_report() {
        let report = bfs(&triangle(), 0, 1);
        assert_eq!(report.edges, vec![(0, 1), (0, 2)]);
        assert_eq!(report.node_count, 3);
    }

    #[test]
    fn test_bfs_report_out_of_range() {
        let report = bfs(&triangle(), -1, 3);
        assert!(report.edges.is_empty());
        assert_eq!(report.node_count, 0);
    }

    #[test]
    fn test_bfs_text() {
        let mut buf = Vec::new();
        bfs(&triangle(), 0, 1).write_text(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("bfs from 0 (depth 1): 2 edges, 3 nodes\n"));
        assert!(text.contains("0 -> 2\n"));
    }

    #[test]
    fn test_neighbors_report() {
        let report = neighbors(&triangle(), 0);
        assert_eq!(report.neighbors, vec![1, 2]);
        assert!(neighbors(&triangle(), 9).neighbors.is_empty());
    }
}
