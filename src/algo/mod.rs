//! Graph analyses
//!
//! Algorithms are implemented in the `grafo-algorithms` crate over a dense
//! CSR view. This module provides the integration/adapter layer: it projects
//! a [`Graph`] into a `GraphView` and gates each analysis on the graph's
//! orientation and size. No analysis mutates the graph it inspects.

use crate::graph::{Graph, Orientation};
use grafo_algorithms::GraphView;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

// Re-export algorithm results
pub use grafo_algorithms::{
    Condensation, EulerResult, HamiltonResult, SccResult, TopologyCategory, MIN_HAMILTONIAN_ORDER,
};

/// Why an analysis does not apply to a graph. Distinct from a negative answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotApplicable {
    /// The analysis is only defined for undirected graphs
    DirectedGraph,
    /// The graph has fewer vertices than the analysis needs
    TooFewVertices { found: usize, required: usize },
}

impl fmt::Display for NotApplicable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotApplicable::DirectedGraph => write!(f, "only defined for undirected graphs"),
            NotApplicable::TooFewVertices { found, required } => {
                write!(f, "graph too small ({} vertices, needs {})", found, required)
            }
        }
    }
}

/// Result of an analysis that only applies to some graphs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Analysis<T> {
    Applicable(T),
    NotApplicable(NotApplicable),
}

impl<T> Analysis<T> {
    pub fn is_applicable(&self) -> bool {
        matches!(self, Analysis::Applicable(_))
    }

    /// The result, if the analysis applied
    pub fn applicable(self) -> Option<T> {
        match self {
            Analysis::Applicable(value) => Some(value),
            Analysis::NotApplicable(_) => None,
        }
    }
}

/// Build a GraphView from the graph for algorithm execution.
///
/// Dense indices follow ascending vertex id; successor lists keep each
/// vertex's edge insertion order (including both halves of undirected pairs);
/// degrees come from [`Graph::degree_sequence`].
pub fn build_view(graph: &Graph) -> GraphView {
    let index_to_node: Vec<u64> = graph.vertex_ids().map(|id| id.as_u64()).collect();
    let node_to_index: HashMap<u64, usize> = index_to_node
        .iter()
        .enumerate()
        .map(|(idx, &id)| (id, idx))
        .collect();

    let outgoing: Vec<Vec<usize>> = graph
        .vertex_ids()
        .map(|id| {
            graph
                .outgoing(id)
                .iter()
                .filter_map(|edge| node_to_index.get(&edge.destination.as_u64()).copied())
                .collect()
        })
        .collect();

    let degrees: Vec<usize> = graph.degree_sequence().into_values().collect();

    GraphView::from_adjacency_list(index_to_node, outgoing, Some(degrees))
}

fn require_undirected(graph: &Graph) -> Result<(), NotApplicable> {
    match graph.orientation() {
        Orientation::Undirected => Ok(()),
        Orientation::Directed => Err(NotApplicable::DirectedGraph),
    }
}

/// Connectedness of an undirected graph. An empty graph is connected.
pub fn connectivity(graph: &Graph) -> Analysis<bool> {
    if let Err(reason) = require_undirected(graph) {
        return Analysis::NotApplicable(reason);
    }
    let connected = grafo_algorithms::is_connected(&build_view(graph));
    debug!(connected, vertices = graph.vertex_count(), "connectivity analysed");
    Analysis::Applicable(connected)
}

/// Strongly connected components (Kosaraju), numbered deterministically
pub fn strongly_connected_components(graph: &Graph) -> SccResult {
    let result = grafo_algorithms::strongly_connected_components(&build_view(graph));
    debug!(components = result.len(), "strongly connected components computed");
    result
}

/// Component DAG of the graph
pub fn condensation(graph: &Graph) -> Condensation {
    let view = build_view(graph);
    let scc = grafo_algorithms::strongly_connected_components(&view);
    grafo_algorithms::condense(&view, &scc)
}

/// Topology category (C0..C3)
pub fn classify(graph: &Graph) -> TopologyCategory {
    let view = build_view(graph);
    let scc = grafo_algorithms::strongly_connected_components(&view);
    grafo_algorithms::classify(&view, &scc)
}

/// Eulerian cycle test, undirected graphs only
pub fn eulerian_cycle(graph: &Graph) -> Analysis<EulerResult> {
    if let Err(reason) = require_undirected(graph) {
        return Analysis::NotApplicable(reason);
    }
    let result = grafo_algorithms::eulerian_cycle(&build_view(graph));
    debug!(?result, "eulerian cycle analysed");
    Analysis::Applicable(result)
}

/// Dirac/Ore heuristic, undirected graphs with at least three vertices.
///
/// `HamiltonResult::Indeterminate` means neither sufficient condition holds;
/// it never means that no Hamiltonian cycle exists.
pub fn hamiltonian_cycle(graph: &Graph) -> Analysis<HamiltonResult> {
    let found = graph.vertex_count();
    if found < MIN_HAMILTONIAN_ORDER {
        return Analysis::NotApplicable(NotApplicable::TooFewVertices {
            found,
            required: MIN_HAMILTONIAN_ORDER,
        });
    }
    if let Err(reason) = require_undirected(graph) {
        return Analysis::NotApplicable(reason);
    }

    match grafo_algorithms::hamiltonian_cycle(&build_view(graph)) {
        Some(result) => {
            debug!(?result, "hamiltonian heuristic evaluated");
            Analysis::Applicable(result)
        }
        None => Analysis::NotApplicable(NotApplicable::TooFewVertices {
            found,
            required: MIN_HAMILTONIAN_ORDER,
        }),
    }
}

/// Connectivity overview: the connected flag for undirected graphs, or the
/// components, category and reduced graph for directed ones
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "orientation", rename_all = "snake_case")]
pub enum StructureReport {
    Undirected {
        connected: bool,
    },
    Directed {
        components: Vec<Vec<u64>>,
        category: TopologyCategory,
        condensation: Condensation,
    },
}

/// Build the connectivity overview, sharing one view and one SCC pass
pub fn structure_report(graph: &Graph) -> StructureReport {
    let view = build_view(graph);
    match graph.orientation() {
        Orientation::Undirected => StructureReport::Undirected {
            connected: grafo_algorithms::is_connected(&view),
        },
        Orientation::Directed => {
            let scc = grafo_algorithms::strongly_connected_components(&view);
            let category = grafo_algorithms::classify(&view, &scc);
            let condensation = grafo_algorithms::condense(&view, &scc);
            debug!(components = scc.len(), %category, "structure report built");
            StructureReport::Directed {
                components: scc.components,
                category,
                condensation,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphKind, VertexId};

    fn graph(kind: impl Into<GraphKind>, ids: &[u64], edges: &[(u64, u64)]) -> Graph {
        let mut graph = Graph::new(kind);
        for &id in ids {
            graph
                .add_vertex(VertexId::new(id), format!("V{}", id), Vec::new())
                .unwrap();
        }
        for &(u, v) in edges {
            graph
                .add_edge(VertexId::new(u), VertexId::new(v), None)
                .unwrap();
        }
        graph
    }

    #[test]
    fn test_build_view_uses_ascending_ids() {
        let g = graph(1, &[30, 10, 20], &[(30, 10), (10, 20)]);
        let view = build_view(&g);

        assert_eq!(view.index_to_node, vec![10, 20, 30]);
        assert_eq!(view.successors(2), &[0]);
        assert_eq!(view.degrees, vec![1, 0, 1]);
    }

    #[test]
    fn test_build_view_undirected_mirrors() {
        let g = graph(3, &[1, 2], &[(1, 2)]);
        let view = build_view(&g);

        assert_eq!(view.edge_count(), 2);
        assert_eq!(view.degrees, vec![1, 1]);
    }

    #[test]
    fn test_connectivity_requires_undirected() {
        let directed = graph(0, &[1, 2], &[(1, 2)]);
        assert_eq!(
            connectivity(&directed),
            Analysis::NotApplicable(NotApplicable::DirectedGraph)
        );

        let undirected = graph(3, &[1, 2], &[(2, 1)]);
        assert_eq!(connectivity(&undirected), Analysis::Applicable(true));
    }

    #[test]
    fn test_euler_not_applicable_on_directed() {
        let g = graph(2, &[1, 2, 3], &[(1, 2), (2, 3), (3, 1)]);
        let result = eulerian_cycle(&g);

        assert!(!result.is_applicable());
        assert_eq!(result, Analysis::NotApplicable(NotApplicable::DirectedGraph));
    }

    #[test]
    fn test_hamilton_too_small() {
        let g = graph(3, &[1, 2], &[(1, 2)]);
        assert_eq!(
            hamiltonian_cycle(&g),
            Analysis::NotApplicable(NotApplicable::TooFewVertices { found: 2, required: 3 })
        );
    }

    #[test]
    fn test_structure_report_directed() {
        let g = graph(1, &[1, 2, 3, 4], &[(1, 2), (2, 1), (2, 3), (3, 4), (4, 3)]);

        match structure_report(&g) {
            StructureReport::Directed {
                components,
                category,
                condensation,
            } => {
                assert_eq!(components.len(), 2);
                assert_eq!(category, TopologyCategory::C2);
                assert_eq!(condensation.edges.len(), 1);
            }
            other => panic!("unexpected report: {:?}", other),
        }
    }

    #[test]
    fn test_caller_designated_undirected() {
        let g = graph(
            GraphKind::with_orientation(7, Orientation::Undirected),
            &[1, 2, 3],
            &[(1, 2), (2, 3)],
        );
        assert_eq!(structure_report(&g), StructureReport::Undirected { connected: true });
    }

    #[test]
    fn test_not_applicable_display() {
        let reason = NotApplicable::TooFewVertices { found: 1, required: 3 };
        assert_eq!(reason.to_string(), "graph too small (1 vertices, needs 3)");
    }
}
