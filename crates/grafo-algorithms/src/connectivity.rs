//! Reachability-based connectedness for undirected graphs

use super::common::GraphView;

/// Stack-based depth-first search from `start`, following outgoing edges only.
///
/// Returns the visited flags indexed by dense node index.
pub(crate) fn reachable_from(view: &GraphView, start: usize) -> Vec<bool> {
    let mut visited = vec![false; view.node_count];
    let mut stack = vec![start];

    while let Some(u) = stack.pop() {
        if visited[u] {
            continue;
        }
        visited[u] = true;
        for &v in view.successors(u) {
            if !visited[v] {
                stack.push(v);
            }
        }
    }

    visited
}

/// Connectedness check for an undirected graph.
///
/// The view must store both directions of every edge, which the mirrored
/// undirected representation guarantees, so no reverse-edge scan is needed.
/// An empty graph is connected.
pub fn is_connected(view: &GraphView) -> bool {
    if view.node_count == 0 {
        return true;
    }
    reachable_from(view, 0).into_iter().all(|seen| seen)
}
