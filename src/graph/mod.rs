//! Graph model
//!
//! This module implements the labeled graph that every analysis reads:
//! - Vertices with a label and ordered metadata fields
//! - Edges with an optional free-form weight
//! - Directed or undirected orientation, decided once from the kind code
//! - Mirrored storage for undirected edges, kept consistent on every mutation

pub mod edge;
pub mod store;
pub mod types;
pub mod vertex;

// Re-export main types
pub use edge::Edge;
pub use store::{Graph, GraphError, GraphResult, GraphSnapshot};
pub use types::{GraphKind, Label, Orientation, VertexId, UNDIRECTED_KIND_CODE};
pub use vertex::Vertex;
