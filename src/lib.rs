//! Grafo
//!
//! A labeled graph model (directed or undirected, optionally weighted) and the
//! structural analyses that run over it.
//!
//! # Architecture
//!
//! - [`graph`]: vertex/edge storage, adjacency index, mutation operations.
//!   Undirected graphs keep every edge mirrored in both adjacency lists.
//! - [`algo`]: adapter from the model to the `grafo-algorithms` crate
//!   (connectivity, Kosaraju SCC, condensation and classification, Eulerian
//!   test, Dirac/Ore Hamiltonian heuristic).
//! - [`persistence`]: the flat-file loader/saver and raw dump used by the CLI.
//!
//! Everything runs synchronously on a single owned [`Graph`]; analyses borrow
//! it immutably and never modify it.
//!
//! ## Example Usage
//!
//! ```rust
//! use grafo::algo::{self, Analysis, EulerResult};
//! use grafo::graph::{Graph, VertexId};
//!
//! // Kind code 3 designates an undirected graph
//! let mut graph = Graph::new(3);
//! for id in 1..=4 {
//!     graph.add_vertex(VertexId::new(id), format!("Stop {}", id), Vec::new()).unwrap();
//! }
//! for (u, v) in [(1, 2), (2, 3), (3, 4), (4, 1)] {
//!     graph.add_edge(VertexId::new(u), VertexId::new(v), None).unwrap();
//! }
//!
//! assert_eq!(algo::connectivity(&graph), Analysis::Applicable(true));
//! assert_eq!(algo::eulerian_cycle(&graph), Analysis::Applicable(EulerResult::HasCycle));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod graph;
pub mod persistence;

// Re-export main types for convenience
pub use graph::{
    Edge, Graph, GraphError, GraphKind, GraphResult, GraphSnapshot, Label, Orientation, Vertex,
    VertexId,
};

pub use algo::{
    Analysis, Condensation, EulerResult, HamiltonResult, NotApplicable, SccResult,
    StructureReport, TopologyCategory,
};

pub use persistence::{LoaderConfig, PersistenceError, PersistenceResult};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
