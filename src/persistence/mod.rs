//! Persistence layer for Grafo
//!
//! Loads and saves graphs in the line-oriented flat-file format and dumps a
//! file's raw content for inspection. The analyses never see this layer; they
//! only receive a fully validated [`Graph`](crate::graph::Graph).

pub mod flat_file;

pub use flat_file::{load, parse_graph, raw_dump, render_graph, save, FIELD_SEPARATOR};

use crate::graph::{GraphError, Orientation, VertexId};
use serde::{Deserialize, Serialize};

/// Default graph file, relative to the working directory
pub const DEFAULT_GRAPH_FILE: &str = "grafo.txt";

/// Loader configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Create vertices for edge endpoints the file never declared
    pub auto_create_endpoints: bool,
    /// Label prefix for auto-created vertices and id-only vertex lines
    pub placeholder_prefix: String,
    /// Force an orientation instead of deriving it from the kind code
    pub orientation: Option<Orientation>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            auto_create_endpoints: true,
            placeholder_prefix: "V".to_string(),
            orientation: None,
        }
    }
}

impl LoaderConfig {
    /// Label given to a vertex that has none
    pub fn placeholder_label(&self, id: VertexId) -> String {
        format!("{}{}", self.placeholder_prefix, id)
    }
}

/// Persistence errors
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Unexpected end of file: expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;
