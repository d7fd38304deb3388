use std::mem::size_of;

/// Dense node identifier. Every ID in `[0, node_count)` is a valid node,
/// including IDs that never appear in the edge list.
pub type NodeId = u32;

/// Weight assigned to every stored edge. The edge-list format carries no weights.
pub const DEFAULT_EDGE_WEIGHT: u32 = 1;

/// Directed multigraph in compressed sparse row (CSR) form.
///
/// Three flat arrays, no per-node allocation:
/// - `row_offsets` has `node_count + 1` entries, non-decreasing, starting at 0
///   and ending at `edge_count`.
/// - `column_indices[row_offsets[i]..row_offsets[i + 1]]` are the out-neighbors
///   of node `i`, in the order their edges appeared in the input.
/// - `edge_weights` runs parallel to `column_indices`.
///
/// Built once by the loader and immutable afterwards, so shared references can
/// be queried from any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrGraph {
    row_offsets: Vec<usize>,
    column_indices: Vec<NodeId>,
    edge_weights: Vec<u32>,
}

impl CsrGraph {
    /// The degenerate graph: no nodes, no edges.
    pub fn new() -> Self {
        Self {
            row_offsets: vec![0],
            column_indices: Vec::new(),
            edge_weights: Vec::new(),
        }
    }

    /// Assemble a graph from arrays produced by the builder.
    pub(crate) fn from_parts(
        row_offsets: Vec<usize>,
        column_indices: Vec<NodeId>,
        edge_weights: Vec<u32>,
    ) -> Self {
        debug_assert!(!row_offsets.is_empty());
        debug_assert_eq!(row_offsets[0], 0);
        debug_assert_eq!(row_offsets[row_offsets.len() - 1], column_indices.len());
        debug_assert!(row_offsets.windows(2).all(|w| w[0] <= w[1]));
        debug_assert_eq!(column_indices.len(), edge_weights.len());
        Self {
            row_offsets,
            column_indices,
            edge_weights,
        }
    }

    pub fn node_count(&self) -> usize {
        self.row_offsets.len() - 1
    }

    pub fn edge_count(&self) -> usize {
        self.column_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// True if `node` lies in `[0, node_count)`.
    pub fn contains(&self, node: NodeId) -> bool {
        (node as usize) < self.node_count()
    }

    pub fn row_offsets(&self) -> &[usize] {
        &self.row_offsets
    }

    pub fn column_indices(&self) -> &[NodeId] {
        &self.column_indices
    }

    pub fn edge_weights(&self) -> &[u32] {
        &self.edge_weights
    }

    /// Out-neighbors of `node` as a view into `column_indices`.
    /// Empty for nodes outside the graph.
    pub fn out_neighbors(&self, node: NodeId) -> &[NodeId] {
        if !self.contains(node) {
            return &[];
        }
        let i = node as usize;
        &self.column_indices[self.row_offsets[i]..self.row_offsets[i + 1]]
    }

    /// Number of stored out-edges of `node`, duplicates and self-loops included.
    pub fn out_degree(&self, node: NodeId) -> usize {
        if !self.contains(node) {
            return 0;
        }
        let i = node as usize;
        self.row_offsets[i + 1] - self.row_offsets[i]
    }

    /// Bytes held by the three arrays (allocated capacity, not length).
    pub fn memory_usage(&self) -> usize {
        self.row_offsets.capacity() * size_of::<usize>()
            + self.column_indices.capacity() * size_of::<NodeId>()
            + self.edge_weights.capacity() * size_of::<u32>()
    }

    /// Projected size in bytes of a graph with the given counts.
    pub fn estimate_memory(node_count: usize, edge_count: usize) -> usize {
        (node_count + 1) * size_of::<usize>()
            + edge_count * (size_of::<NodeId>() + size_of::<u32>())
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self::new()
    }
}
