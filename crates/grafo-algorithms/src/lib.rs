//! Structural graph analyses over a dense CSR view
//!
//! Connectivity, strongly connected components, condensation and
//! classification, plus the Eulerian and Hamiltonian cycle checks.

pub mod common;
pub mod connectivity;
pub mod scc;
pub mod condensation;
pub mod euler;
pub mod hamilton;

pub use common::{GraphView, NodeId};
pub use connectivity::is_connected;
pub use scc::{strongly_connected_components, SccResult};
pub use condensation::{classify, condense, Condensation, TopologyCategory};
pub use euler::{eulerian_cycle, odd_degree_nodes, EulerResult};
pub use hamilton::{hamiltonian_cycle, HamiltonResult, MIN_HAMILTONIAN_ORDER};
