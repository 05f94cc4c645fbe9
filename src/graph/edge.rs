//! Edge implementation
//!
//! An edge is identified by its endpoints and optional weight; there is no
//! separate edge id. Two edges between the same ordered pair may coexist only
//! when their weights differ.

use super::types::VertexId;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Source vertex (edge goes FROM this vertex)
    pub origin: VertexId,

    /// Target vertex (edge goes TO this vertex)
    pub destination: VertexId,

    /// Free-form weight such as "1.2 km"; never `Some("")`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
}

impl Edge {
    /// Create an edge. An empty or blank weight is stored as no weight.
    pub fn new(origin: VertexId, destination: VertexId, weight: Option<String>) -> Self {
        Edge {
            origin,
            destination,
            weight: normalize_weight(weight),
        }
    }

    /// Same edge with its endpoints swapped
    pub fn mirrored(&self) -> Self {
        Edge {
            origin: self.destination,
            destination: self.origin,
            weight: self.weight.clone(),
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.origin == self.destination
    }

    /// Check if this edge goes TO `destination` carrying `weight`
    pub fn matches(&self, destination: VertexId, weight: Option<&str>) -> bool {
        self.destination == destination && self.weight.as_deref() == weight
    }

    /// Check if this edge touches `vertex` at either end
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.origin == vertex || self.destination == vertex
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)?;
        if let Some(weight) = &self.weight {
            write!(f, " [{}]", weight)?;
        }
        Ok(())
    }
}

/// Trim a weight and drop it entirely when nothing is left
pub fn normalize_weight(weight: Option<String>) -> Option<String> {
    weight
        .map(|w| w.trim().to_string())
        .filter(|w| !w.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_edge() {
        let edge = Edge::new(VertexId::new(1), VertexId::new(2), Some("1.2 km".into()));

        assert_eq!(edge.origin, VertexId::new(1));
        assert_eq!(edge.destination, VertexId::new(2));
        assert_eq!(edge.weight.as_deref(), Some("1.2 km"));
        assert_eq!(edge.to_string(), "1 -> 2 [1.2 km]");
    }

    #[test]
    fn test_empty_weight_is_no_weight() {
        let blank = Edge::new(VertexId::new(1), VertexId::new(2), Some(String::new()));
        let spaces = Edge::new(VertexId::new(1), VertexId::new(2), Some("   ".into()));
        let none = Edge::new(VertexId::new(1), VertexId::new(2), None);

        assert_eq!(blank, none);
        assert_eq!(spaces, none);
        assert_eq!(none.to_string(), "1 -> 2");
    }

    #[test]
    fn test_mirrored() {
        let edge = Edge::new(VertexId::new(10), VertexId::new(20), Some("5".into()));
        let mirror = edge.mirrored();

        assert_eq!(mirror.origin, VertexId::new(20));
        assert_eq!(mirror.destination, VertexId::new(10));
        assert_eq!(mirror.weight, edge.weight);
        assert_eq!(mirror.mirrored(), edge);
    }

    #[test]
    fn test_matches_uses_weight() {
        let edge = Edge::new(VertexId::new(1), VertexId::new(2), Some("a".into()));

        assert!(edge.matches(VertexId::new(2), Some("a")));
        assert!(!edge.matches(VertexId::new(2), Some("b")));
        assert!(!edge.matches(VertexId::new(2), None));
        assert!(!edge.matches(VertexId::new(1), Some("a")));
    }

    #[test]
    fn test_touches_and_self_loop() {
        let edge = Edge::new(VertexId::new(3), VertexId::new(3), None);
        assert!(edge.is_self_loop());
        assert!(edge.touches(VertexId::new(3)));
        assert!(!edge.touches(VertexId::new(4)));
    }
}
