//! Eulerian cycle test for undirected graphs
//!
//! Degree-parity plus connectivity: a connected undirected graph has an
//! Eulerian cycle iff every vertex has even degree.

use super::common::{GraphView, NodeId};
use super::connectivity::is_connected;

/// Outcome of the Eulerian cycle test
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EulerResult {
    /// Connected and every degree is even
    HasCycle,
    /// The graph is not connected
    Disconnected,
    /// Vertices with odd degree, ascending
    OddDegree(Vec<NodeId>),
}

impl EulerResult {
    pub fn has_cycle(&self) -> bool {
        matches!(self, EulerResult::HasCycle)
    }
}

/// Vertices whose canonical degree is odd, ascending
pub fn odd_degree_nodes(view: &GraphView) -> Vec<NodeId> {
    let mut odd: Vec<NodeId> = (0..view.node_count)
        .filter(|&idx| view.degree(idx) % 2 == 1)
        .map(|idx| view.index_to_node[idx])
        .collect();
    odd.sort_unstable();
    odd
}

/// Eulerian cycle check.
///
/// Connectivity is tested first, then degree parity. The view must hold
/// mirrored undirected edges with canonical degrees. An empty graph
/// satisfies both conditions vacuously.
pub fn eulerian_cycle(view: &GraphView) -> EulerResult {
    if !is_connected(view) {
        return EulerResult::Disconnected;
    }
    let odd = odd_degree_nodes(view);
    if !odd.is_empty() {
        return EulerResult::OddDegree(odd);
    }
    EulerResult::HasCycle
}
