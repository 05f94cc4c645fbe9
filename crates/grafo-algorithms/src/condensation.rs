//! Condensation (reduced graph) and topology classification

use super::common::GraphView;
use super::scc::SccResult;
use std::collections::BTreeSet;
use std::fmt;

/// The component DAG: one node per SCC, edges only between distinct components
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Condensation {
    /// Number of components (component indices are 0..component_count)
    pub component_count: usize,
    /// Directed component edges, deduplicated
    pub edges: BTreeSet<(usize, usize)>,
}

impl Condensation {
    /// Components directly reachable from `component`, ascending
    pub fn successors(&self, component: usize) -> impl Iterator<Item = usize> + '_ {
        self.edges
            .range((component, 0)..=(component, usize::MAX))
            .map(|&(_, to)| to)
    }

    /// True when some edge loops back onto its own component
    pub fn has_self_loop(&self) -> bool {
        self.edges.iter().any(|&(from, to)| from == to)
    }

    /// Acyclicity check by Kahn's algorithm
    pub fn is_acyclic(&self) -> bool {
        let n = self.component_count;
        let mut indegree = vec![0usize; n];
        for &(_, to) in &self.edges {
            indegree[to] += 1;
        }
        let mut ready: Vec<usize> = (0..n).filter(|&c| indegree[c] == 0).collect();
        let mut removed = 0;
        while let Some(c) = ready.pop() {
            removed += 1;
            for to in self.successors(c) {
                indegree[to] -= 1;
                if indegree[to] == 0 {
                    ready.push(to);
                }
            }
        }
        removed == n
    }
}

/// Collapse every SCC into a single node, keeping edges between distinct components
pub fn condense(view: &GraphView, scc: &SccResult) -> Condensation {
    let mut edges = BTreeSet::new();

    for u in 0..view.node_count {
        let cu = scc.node_component[&view.index_to_node[u]];
        for &v in view.successors(u) {
            let cv = scc.node_component[&view.index_to_node[v]];
            if cu != cv {
                edges.insert((cu, cv));
            }
        }
    }

    Condensation {
        component_count: scc.len(),
        edges,
    }
}

/// Topology category of a directed graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TopologyCategory {
    /// No vertices, or no edges at all
    C0,
    /// At least one singleton component among several
    C1,
    /// Several components, none of the other buckets
    C2,
    /// A single component holding every vertex
    C3,
}

impl fmt::Display for TopologyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            TopologyCategory::C0 => "C0",
            TopologyCategory::C1 => "C1",
            TopologyCategory::C2 => "C2",
            TopologyCategory::C3 => "C3",
        };
        write!(f, "{}", code)
    }
}

/// Assign a topology category. Rules are checked in order C0, C3, C1, C2;
/// the first match wins.
pub fn classify(view: &GraphView, scc: &SccResult) -> TopologyCategory {
    if view.node_count == 0 || view.edge_count() == 0 {
        return TopologyCategory::C0;
    }
    if scc.len() == 1 && scc.components[0].len() == view.node_count {
        return TopologyCategory::C3;
    }
    let has_singleton = scc.components.iter().any(|c| c.len() == 1);
    if has_singleton && scc.len() > 1 {
        return TopologyCategory::C1;
    }
    TopologyCategory::C2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::test_support::directed;
    use crate::scc::strongly_connected_components;

    fn category(ids: &[u64], edges: &[(u64, u64)]) -> TopologyCategory {
        let view = directed(ids, edges);
        let scc = strongly_connected_components(&view);
        classify(&view, &scc)
    }

    #[test]
    fn test_condensation_drops_internal_edges() {
        // {1,2,3} cycle with a chord, plus 3 -> 4 twice
        let view = directed(&[1, 2, 3, 4], &[(1, 2), (2, 3), (3, 1), (1, 3), (3, 4), (3, 4)]);
        let scc = strongly_connected_components(&view);
        let dag = condense(&view, &scc);

        assert_eq!(dag.component_count, 2);
        assert_eq!(dag.edges.len(), 1);
        let (from, to) = *dag.edges.iter().next().unwrap();
        assert_eq!(from, scc.component_of(1).unwrap());
        assert_eq!(to, scc.component_of(4).unwrap());
        assert!(!dag.has_self_loop());
        assert!(dag.is_acyclic());
    }

    #[test]
    fn test_condensation_is_acyclic() {
        let view = directed(
            &[1, 2, 3, 4, 5, 6],
            &[(1, 2), (2, 1), (2, 3), (3, 4), (4, 3), (4, 5), (5, 6), (6, 5), (1, 6)],
        );
        let scc = strongly_connected_components(&view);
        let dag = condense(&view, &scc);

        assert_eq!(dag.component_count, 3);
        assert!(dag.is_acyclic());
        let from_first: Vec<usize> = dag.successors(scc.component_of(1).unwrap()).collect();
        assert_eq!(from_first.len(), 2);
    }

    #[test]
    fn test_classify_empty_and_edgeless() {
        assert_eq!(category(&[], &[]), TopologyCategory::C0);
        assert_eq!(category(&[1, 2], &[]), TopologyCategory::C0);
    }

    #[test]
    fn test_classify_single_block() {
        assert_eq!(category(&[1, 2, 3], &[(1, 2), (2, 3), (3, 1)]), TopologyCategory::C3);
    }

    #[test]
    fn test_classify_singleton_alongside_block() {
        assert_eq!(
            category(&[1, 2, 3, 4], &[(1, 2), (2, 3), (3, 1)]),
            TopologyCategory::C1
        );
        assert_eq!(category(&[1, 2], &[(1, 2)]), TopologyCategory::C1);
    }

    #[test]
    fn test_classify_fallback() {
        // Two 2-cycles joined one way
        assert_eq!(
            category(&[1, 2, 3, 4], &[(1, 2), (2, 1), (3, 4), (4, 3), (2, 3)]),
            TopologyCategory::C2
        );
    }

    #[test]
    fn test_category_display() {
        assert_eq!(TopologyCategory::C2.to_string(), "C2");
    }
}
