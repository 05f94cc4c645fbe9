//! Shared utilities for graph algorithms
//!
//! Provides a read-only, optimized view of the graph topology for algorithm execution.

use std::collections::HashMap;

/// Node Identifier type (u64)
pub type NodeId = u64;

/// A dense, integer-indexed view of the graph topology using Compressed Sparse Row (CSR) format.
///
/// Indices follow the order of `index_to_node`; callers that want reproducible
/// component numbering must hand nodes over in a fixed order (ascending id).
#[derive(Debug, Clone)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Mapping from dense index (0..N) back to NodeId
    pub index_to_node: Vec<NodeId>,
    /// Mapping from NodeId to dense index
    pub node_to_index: HashMap<NodeId, usize>,

    /// Outgoing edges CSR structure
    /// Offsets into `out_targets`. Size = node_count + 1
    pub out_offsets: Vec<usize>,
    /// Contiguous array of target node indices
    pub out_targets: Vec<usize>,

    /// Incoming edges CSR structure (Compressed Sparse Column effectively)
    /// Offsets into `in_sources`. Size = node_count + 1
    pub in_offsets: Vec<usize>,
    /// Contiguous array of source node indices
    pub in_sources: Vec<usize>,

    /// Canonical degree of each node, aligned with `index_to_node`.
    ///
    /// For undirected graphs stored with mirrored edges this counts each
    /// logical edge once per endpoint, not once per stored direction.
    pub degrees: Vec<usize>,
}

impl GraphView {
    /// Canonical degree of a node (by index)
    pub fn degree(&self, idx: usize) -> usize {
        self.degrees[idx]
    }

    /// Get outgoing neighbors (successors) of a node
    pub fn successors(&self, idx: usize) -> &[usize] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.out_targets[start..end]
    }

    /// Get incoming neighbors (predecessors) of a node
    pub fn predecessors(&self, idx: usize) -> &[usize] {
        let start = self.in_offsets[idx];
        let end = self.in_offsets[idx + 1];
        &self.in_sources[start..end]
    }

    /// Total number of stored (directed) edges
    pub fn edge_count(&self) -> usize {
        self.out_targets.len()
    }

    /// Whether at least one stored edge goes from `u` to `v` (by index)
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.successors(u).contains(&v)
    }

    /// Build a view from per-node successor lists.
    ///
    /// `outgoing[i]` lists target indices of node `i` in edge order. The
    /// incoming lists are derived by scanning sources in index order, so the
    /// predecessors of a node appear in the same order a transposed adjacency
    /// built by walking every source's edge list would produce.
    ///
    /// When `degrees` is `None` the out-degree is used.
    pub fn from_adjacency_list(
        index_to_node: Vec<NodeId>,
        outgoing: Vec<Vec<usize>>,
        degrees: Option<Vec<usize>>,
    ) -> Self {
        let node_count = index_to_node.len();
        let node_to_index: HashMap<NodeId, usize> = index_to_node
            .iter()
            .enumerate()
            .map(|(idx, &id)| (id, idx))
            .collect();

        let mut incoming: Vec<Vec<usize>> = vec![Vec::new(); node_count];
        for (u, targets) in outgoing.iter().enumerate() {
            for &v in targets {
                incoming[v].push(u);
            }
        }

        let mut out_offsets = Vec::with_capacity(node_count + 1);
        let mut out_targets = Vec::new();
        let mut in_offsets = Vec::with_capacity(node_count + 1);
        let mut in_sources = Vec::new();

        out_offsets.push(0);
        for neighbors in &outgoing {
            out_targets.extend(neighbors.iter().copied());
            out_offsets.push(out_targets.len());
        }

        in_offsets.push(0);
        for sources in incoming {
            in_sources.extend(sources);
            in_offsets.push(in_sources.len());
        }

        let degrees = degrees.unwrap_or_else(|| outgoing.iter().map(Vec::len).collect());

        GraphView {
            node_count,
            index_to_node,
            node_to_index,
            out_offsets,
            out_targets,
            in_offsets,
            in_sources,
            degrees,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;

    #[test]
    fn test_csr_layout() {
        // 10 -> 20, 10 -> 30, 30 -> 20
        let view = directed(&[10, 20, 30], &[(10, 20), (10, 30), (30, 20)]);

        assert_eq!(view.node_count, 3);
        assert_eq!(view.successors(0), &[1, 2]);
        assert_eq!(view.successors(1), &[] as &[usize]);
        assert_eq!(view.predecessors(1), &[0, 2]);
        assert_eq!(view.successors(0).len(), 2);
        assert_eq!(view.predecessors(1).len(), 2);
        assert_eq!(view.edge_count(), 3);
        assert_eq!(view.node_to_index[&30], 2);
        assert!(view.has_edge(2, 1));
        assert!(!view.has_edge(1, 2));
    }

    #[test]
    fn test_undirected_degrees_not_doubled() {
        let view = undirected(&[1, 2, 3], &[(1, 2), (2, 3)]);

        assert_eq!(view.edge_count(), 4);
        assert_eq!(view.degrees, vec![1, 2, 1]);
        assert_eq!(view.successors(1).len(), 2);
    }
}
