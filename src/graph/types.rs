//! Core type definitions for the graph model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct VertexId(pub u64);

impl VertexId {
    pub fn new(id: u64) -> Self {
        VertexId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        VertexId(id)
    }
}

/// Vertex label (e.g., "Cafe Central", "V12")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    pub fn new(label: impl Into<String>) -> Self {
        Label(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Label(s)
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label(s.to_string())
    }
}

/// Kind code that designates an undirected graph
pub const UNDIRECTED_KIND_CODE: i64 = 3;

/// Whether edges are one-way or mirrored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Directed,
    Undirected,
}

impl Orientation {
    /// Orientation implied by a raw kind code
    pub fn from_code(code: i64) -> Self {
        if code == UNDIRECTED_KIND_CODE {
            Orientation::Undirected
        } else {
            Orientation::Directed
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Directed => write!(f, "directed"),
            Orientation::Undirected => write!(f, "undirected"),
        }
    }
}

/// Graph kind: the raw integer code as it was supplied, plus the orientation
/// decided once at construction.
///
/// Only code 3 carries a meaning here (undirected); every other code is kept
/// as opaque pass-through data and treated as directed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphKind {
    code: i64,
    orientation: Orientation,
}

impl GraphKind {
    /// Kind with the orientation implied by `code`
    pub fn new(code: i64) -> Self {
        GraphKind {
            code,
            orientation: Orientation::from_code(code),
        }
    }

    /// Kind whose orientation is designated by the caller, regardless of code
    pub fn with_orientation(code: i64, orientation: Orientation) -> Self {
        GraphKind { code, orientation }
    }

    pub fn code(&self) -> i64 {
        self.code
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_undirected(&self) -> bool {
        self.orientation == Orientation::Undirected
    }
}

impl Default for GraphKind {
    fn default() -> Self {
        GraphKind::new(0)
    }
}

impl From<i64> for GraphKind {
    fn from(code: i64) -> Self {
        GraphKind::new(code)
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.orientation)
    }
}
