use std::collections::VecDeque;

use tracing::debug;

use crate::graph::{CsrGraph, NodeId};

/// Result of a bounded BFS.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraversalResult {
    /// Every edge scanned out of an expanded node, in visitation order.
    /// Edges into already-visited nodes are included, so this is the full
    /// edge set for rendering, not a spanning tree.
    pub edges: Vec<(NodeId, NodeId)>,
    /// Nodes first reached during the traversal. The start node is not counted.
    pub nodes_discovered: usize,
}

/// Out-degree of a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegreeResult {
    pub node_id: NodeId,
    pub out_degree: usize,
}

/// Out-neighbors of `node` as an owned copy, in stored order.
/// Empty if `node` is outside the graph.
pub fn neighbors(graph: &CsrGraph, node: NodeId) -> Vec<NodeId> {
    graph.out_neighbors(node).to_vec()
}

/// Node with the highest out-degree. Ties go to the lowest ID.
/// None for an empty graph.
pub fn max_out_degree_node(graph: &CsrGraph) -> Option<NodeId> {
    let mut best: Option<NodeId> = None;
    let mut max_degree = 0usize;

    for (i, bounds) in graph.row_offsets().windows(2).enumerate() {
        let degree = bounds[1] - bounds[0];
        if best.is_none() || degree > max_degree {
            best = Some(i as NodeId);
            max_degree = degree;
        }
    }

    best
}

/// Breadth-first traversal from `start`, expanding only nodes closer than
/// `max_depth` hops.
///
/// Nodes at exactly `max_depth` are reached through their incoming edge but
/// never expanded. Each node is enqueued at most once, so cycles, self-loops
/// and parallel edges terminate naturally.
pub fn bounded_bfs(graph: &CsrGraph, start: NodeId, max_depth: u32) -> TraversalResult {
    let mut result = TraversalResult::default();
    if !graph.contains(start) {
        return result;
    }

    // None = not yet reached. Every depth up to u32::MAX is a real distance.
    let mut distance: Vec<Option<u32>> = vec![None; graph.node_count()];
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    distance[start as usize] = Some(0);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let Some(depth) = distance[current as usize] else {
            continue;
        };
        if depth >= max_depth {
            continue;
        }

        for &next in graph.out_neighbors(current) {
            result.edges.push((current, next));

            if distance[next as usize].is_none() {
                distance[next as usize] = Some(depth + 1);
                result.nodes_discovered += 1;
                if depth + 1 < max_depth {
                    queue.push_back(next);
                }
            }
        }
    }

    debug!(
        start,
        max_depth,
        nodes_discovered = result.nodes_discovered,
        edges = result.edges.len(),
        "bounded BFS complete"
    );
    result
}

/// Nodes ranked by out-degree.
///
/// If `top_n` is 0, returns all nodes. Otherwise returns the top N by
/// out-degree (descending). Ties are broken by node ID (ascending).
pub fn degree_ranking(graph: &CsrGraph, top_n: usize) -> Vec<DegreeResult> {
    let mut results: Vec<DegreeResult> = graph
        .row_offsets()
        .windows(2)
        .enumerate()
        .map(|(i, bounds)| DegreeResult {
            node_id: i as NodeId,
            out_degree: bounds[1] - bounds[0],
        })
        .collect();

    results.sort_by(|a, b| {
        b.out_degree
            .cmp(&a.out_degree)
            .then(a.node_id.cmp(&b.node_id))
    });

    if top_n > 0 && top_n < results.len() {
        results.truncate(top_n);
    }

    results
}
