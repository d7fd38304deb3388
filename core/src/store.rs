use std::path::Path;

use tracing::warn;

use crate::error::Result;
use crate::graph::{CsrGraph, NodeId};
use crate::traversal::{self, DegreeResult};

/// Capability contract for a loadable, queryable graph representation.
///
/// Node and depth arguments are signed, as collaborators pass them: negative
/// and out-of-range node IDs yield empty results, never errors, and a negative
/// depth expands nothing.
pub trait GraphStore {
    /// Replace the current contents with the edge list at `path`.
    /// On failure the store is left empty.
    fn load_data(&mut self, path: &Path) -> Result<()>;

    /// Edges traversed by a bounded BFS, in visitation order.
    fn bfs(&self, start: i64, max_depth: i64) -> Vec<(NodeId, NodeId)>;

    /// Node with the highest out-degree, or None if the graph is empty.
    fn max_degree_node(&self) -> Option<NodeId>;

    fn neighbors(&self, node: i64) -> Vec<NodeId>;

    /// Out-degree of `node`, 0 if it is not in the graph.
    fn out_degree(&self, node: i64) -> usize;

    /// Nodes ranked by out-degree, descending, ties by ascending ID.
    /// `top_n == 0` returns every node.
    fn degree_ranking(&self, top_n: usize) -> Vec<DegreeResult>;

    fn node_count(&self) -> usize;

    fn edge_count(&self) -> usize;
}

/// Map a caller-supplied ID to a node of `graph`, if it is one.
pub fn resolve_node(graph: &CsrGraph, node: i64) -> Option<NodeId> {
    NodeId::try_from(node).ok().filter(|&id| graph.contains(id))
}

impl GraphStore for CsrGraph {
    fn load_data(&mut self, path: &Path) -> Result<()> {
        match CsrGraph::load(path) {
            Ok(graph) => {
                *self = graph;
                Ok(())
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "load failed, graph left empty");
                *self = CsrGraph::new();
                Err(e)
            }
        }
    }

    fn bfs(&self, start: i64, max_depth: i64) -> Vec<(NodeId, NodeId)> {
        let Some(start) = resolve_node(self, start) else {
            return Vec::new();
        };
        let max_depth = u32::try_from(max_depth.max(0)).unwrap_or(u32::MAX);
        traversal::bounded_bfs(self, start, max_depth).edges
    }

    fn max_degree_node(&self) -> Option<NodeId> {
        traversal::max_out_degree_node(self)
    }

    fn neighbors(&self, node: i64) -> Vec<NodeId> {
        resolve_node(self, node)
            .map(|id| traversal::neighbors(self, id))
            .unwrap_or_default()
    }

    fn out_degree(&self, node: i64) -> usize {
        resolve_node(self, node).map_or(0, |id| CsrGraph::out_degree(self, id))
    }

    fn degree_ranking(&self, top_n: usize) -> Vec<DegreeResult> {
        traversal::degree_ranking(self, top_n)
    }

    fn node_count(&self) -> usize {
        CsrGraph::node_count(self)
    }

    fn edge_count(&self) -> usize {
        CsrGraph::edge_count(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn store_from(text: &str) -> (tempfile::NamedTempFile, CsrGraph) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        let mut graph = CsrGraph::new();
        graph.load_data(file.path()).unwrap();
        (file, graph)
    }

    #[test]
    fn test_resolve_node() {
        let (_f, g) = store_from("0 1\n1 2\n");
        assert_eq!(resolve_node(&g, 0), Some(0));
        assert_eq!(resolve_node(&g, 2), Some(2));
        assert_eq!(resolve_node(&g, 3), None);
        assert_eq!(resolve_node(&g, -1), None);
        assert_eq!(resolve_node(&g, i64::MAX), None);
    }

    #[test]
    fn test_contract_queries() {
        let (_f, g) = store_from("0 1\n1 2\n0 2\n");
        let store: &dyn GraphStore = &g;
        assert_eq!(store.node_count(), 3);
        assert_eq!(store.edge_count(), 3);
        assert_eq!(store.neighbors(0), vec![1, 2]);
        assert_eq!(store.max_degree_node(), Some(0));
        assert_eq!(store.bfs(0, 1), vec![(0, 1), (0, 2)]);
    }

    #[test]
    fn test_contract_degrees() {
        let (_f, g) = store_from("2 0\n2 1\n0 1\n");
        let store: &dyn GraphStore = &g;
        assert_eq!(store.out_degree(2), 2);
        assert_eq!(store.out_degree(1), 0);
        assert_eq!(store.out_degree(-1), 0);
        assert_eq!(store.out_degree(3), 0);

        let ranked: Vec<_> = store
            .degree_ranking(2)
            .iter()
            .map(|r| (r.node_id, r.out_degree))
            .collect();
        assert_eq!(ranked, vec![(2, 2), (0, 1)]);
        assert_eq!(store.degree_ranking(0).len(), 3);
    }

    #[test]
    fn test_contract_out_of_range() {
        let (_f, g) = store_from("0 1\n1 2\n0 2\n");
        assert!(g.neighbors(-1).is_empty());
        assert!(g.neighbors(3).is_empty());
        assert!(g.bfs(-1, 3).is_empty());
        assert!(g.bfs(3, 3).is_empty());
    }

    #[test]
    fn test_contract_negative_depth() {
        let (_f, g) = store_from("0 1\n");
        assert!(g.bfs(0, -5).is_empty());
        assert!(g.bfs(0, 0).is_empty());
        assert_eq!(g.bfs(0, i64::MAX), vec![(0, 1)]);
    }

    #[test]
    fn test_load_failure_leaves_graph_empty() {
        let (_f, mut g) = store_from("0 1\n1 2\n");
        assert_eq!(GraphStore::node_count(&g), 3);

        let dir = tempfile::tempdir().unwrap();
        let result = g.load_data(&dir.path().join("nope.txt"));
        assert!(result.is_err());
        assert_eq!(GraphStore::node_count(&g), 0);
        assert_eq!(GraphStore::edge_count(&g), 0);
        assert_eq!(g.max_degree_node(), None);
    }

    #[test]
    fn test_reload_replaces_contents() {
        let (_f, mut g) = store_from("0 1\n");
        let mut other = tempfile::NamedTempFile::new().unwrap();
        other.write_all(b"4 0\n4 1\n").unwrap();
        g.load_data(other.path()).unwrap();
        assert_eq!(GraphStore::node_count(&g), 5);
        assert_eq!(g.max_degree_node(), Some(4));
    }
}
