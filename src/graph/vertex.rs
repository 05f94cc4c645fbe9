//! Vertex implementation
//!
//! A vertex carries an id, a label, and an ordered list of free-form metadata
//! fields. It is immutable once created; the only change it supports is
//! deletion of the whole vertex through the graph.

use super::types::{Label, VertexId};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    /// Unique identifier for this vertex
    pub id: VertexId,

    /// Display label
    pub label: Label,

    /// Extra fields (rating, category, address, ...) in their original order
    pub metadata: Vec<String>,
}

impl Vertex {
    pub fn new(id: VertexId, label: impl Into<Label>, metadata: Vec<String>) -> Self {
        Vertex {
            id,
            label: label.into(),
            metadata,
        }
    }

    pub fn has_metadata(&self) -> bool {
        !self.metadata.is_empty()
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.metadata.is_empty() {
            write!(f, "{}: {}", self.id, self.label)
        } else {
            write!(f, "{}: {} ({})", self.id, self.label, self.metadata.join(", "))
        }
    }
}
