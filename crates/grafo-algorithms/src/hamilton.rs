//! Hamiltonian cycle heuristic
//!
//! Evaluates Dirac's and Ore's sufficient conditions. Neither is necessary,
//! so failing both never proves that no Hamiltonian cycle exists.

use super::common::{GraphView, NodeId};

/// Smallest vertex count for which the conditions are meaningful
pub const MIN_HAMILTONIAN_ORDER: usize = 3;

/// Outcome of the Hamiltonian heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HamiltonResult {
    /// Every degree is at least floor(n/2)
    Dirac,
    /// Every non-adjacent pair has degree sum at least n
    Ore,
    /// Neither condition holds; `u` and `v` are the first non-adjacent
    /// pair (in node order) whose degree sum falls short of n
    Indeterminate { u: NodeId, v: NodeId },
}

impl HamiltonResult {
    /// Whether a Hamiltonian cycle is guaranteed
    pub fn is_confirmed(&self) -> bool {
        !matches!(self, HamiltonResult::Indeterminate { .. })
    }
}

/// First non-adjacent pair violating Ore's condition, if any
fn ore_violation(view: &GraphView) -> Option<(usize, usize)> {
    let n = view.node_count;
    for u in 0..n {
        for v in (u + 1)..n {
            if view.has_edge(u, v) || view.has_edge(v, u) {
                continue;
            }
            if view.degree(u) + view.degree(v) < n {
                return Some((u, v));
            }
        }
    }
    None
}

/// Hamiltonian cycle heuristic for undirected views.
///
/// Returns `None` when the graph has fewer than [`MIN_HAMILTONIAN_ORDER`]
/// vertices. Ore's condition is only evaluated when Dirac's fails.
pub fn hamiltonian_cycle(view: &GraphView) -> Option<HamiltonResult> {
    let n = view.node_count;
    if n < MIN_HAMILTONIAN_ORDER {
        return None;
    }

    let threshold = n / 2;
    if (0..n).all(|idx| view.degree(idx) >= threshold) {
        return Some(HamiltonResult::Dirac);
    }

    match ore_violation(view) {
        None => Some(HamiltonResult::Ore),
        Some((u, v)) => Some(HamiltonResult::Indeterminate {
            u: view.index_to_node[u],
            v: view.index_to_node[v],
        }),
    }
}
