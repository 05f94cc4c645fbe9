//! Strongly connected components
//!
//! Kosaraju's two-pass algorithm, driven by explicit work stacks so deep
//! graphs cannot exhaust the call stack.

use super::common::{GraphView, NodeId};
use std::collections::HashMap;

/// Result of the SCC computation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SccResult {
    /// Components in discovery order; members sorted ascending
    pub components: Vec<Vec<NodeId>>,
    /// Map of NodeId -> index into `components`
    pub node_component: HashMap<NodeId, usize>,
}

impl SccResult {
    /// Number of components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Component index of a node
    pub fn component_of(&self, node: NodeId) -> Option<usize> {
        self.node_component.get(&node).copied()
    }
}

/// Post-order finishing sequence of a forward depth-first search that is
/// restarted from every unvisited node in index order.
fn finishing_order(view: &GraphView) -> Vec<usize> {
    let n = view.node_count;
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    // (node, position of the next successor to inspect)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..n {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (u, pos) = *frame;
            let succ = view.successors(u);
            if pos < succ.len() {
                frame.1 += 1;
                let v = succ[pos];
                if !visited[v] {
                    visited[v] = true;
                    stack.push((v, 0));
                }
            } else {
                order.push(u);
                stack.pop();
            }
        }
    }

    order
}

/// Strongly Connected Components (Kosaraju)
///
/// 1. Forward DFS records every node when its exploration finishes.
/// 2. Nodes are taken in reverse finishing order; each unvisited seed
///    collects everything it reaches over the transposed edges
///    (the view's predecessor lists) into one component.
///
/// Component contents do not depend on node order; component numbering
/// follows the view's index order.
pub fn strongly_connected_components(view: &GraphView) -> SccResult {
    let n = view.node_count;
    let order = finishing_order(view);

    let mut visited = vec![false; n];
    let mut components = Vec::new();
    let mut node_component = HashMap::with_capacity(n);
    let mut stack = Vec::new();

    for &seed in order.iter().rev() {
        if visited[seed] {
            continue;
        }

        let comp_id = components.len();
        let mut members = Vec::new();
        visited[seed] = true;
        stack.push(seed);

        while let Some(u) = stack.pop() {
            members.push(view.index_to_node[u]);
            for &w in view.predecessors(u) {
                if !visited[w] {
                    visited[w] = true;
                    stack.push(w);
                }
            }
        }

        members.sort_unstable();
        for &id in &members {
            node_component.insert(id, comp_id);
        }
        components.push(members);
    }

    SccResult {
        components,
        node_component,
    }
}
