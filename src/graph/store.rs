//! In-memory graph storage
//!
//! The `Graph` exclusively owns every vertex and edge. Vertices live in an
//! ordered map so enumeration is always ascending by id; each vertex owns the
//! list of its outgoing edges in insertion order. Undirected graphs store
//! every edge in both adjacency lists and keep the pair in sync on every
//! mutation.

use super::edge::{normalize_weight, Edge};
use super::types::{GraphKind, Label, Orientation, VertexId};
use super::vertex::Vertex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during graph mutations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Vertex {0} already exists")]
    DuplicateVertex(VertexId),

    #[error("Edge {origin} -> {destination} with the same weight already exists")]
    DuplicateEdge {
        origin: VertexId,
        destination: VertexId,
        weight: Option<String>,
    },

    #[error("Vertex {0} does not exist")]
    UnknownVertex(VertexId),

    #[error("No edge from {origin} to {destination}")]
    EdgeNotFound {
        origin: VertexId,
        destination: VertexId,
    },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Labeled graph, directed or undirected
///
/// - vertices: VertexId -> Vertex
/// - adjacency: VertexId -> Vec<Edge> (outgoing edges, insertion order)
///
/// Invariant: every edge endpoint is a stored vertex, and every vertex has an
/// adjacency entry (possibly empty).
#[derive(Debug, Clone, Default)]
pub struct Graph {
    kind: GraphKind,
    vertices: BTreeMap<VertexId, Vertex>,
    adjacency: BTreeMap<VertexId, Vec<Edge>>,
}

/// Serializable copy of a graph: vertices ascending, edges as reported by
/// [`Graph::all_edges`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub kind: GraphKind,
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Create a new empty graph
    pub fn new(kind: impl Into<GraphKind>) -> Self {
        Graph {
            kind: kind.into(),
            vertices: BTreeMap::new(),
            adjacency: BTreeMap::new(),
        }
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn orientation(&self) -> Orientation {
        self.kind.orientation()
    }

    pub fn is_undirected(&self) -> bool {
        self.kind.is_undirected()
    }

    /// Insert a vertex. Fails without changes if the id is taken.
    pub fn add_vertex(
        &mut self,
        id: VertexId,
        label: impl Into<Label>,
        metadata: Vec<String>,
    ) -> GraphResult<()> {
        if self.vertices.contains_key(&id) {
            return Err(GraphError::DuplicateVertex(id));
        }
        let vertex = Vertex::new(id, label, metadata);
        debug!(vertex = %vertex, "adding vertex");
        self.vertices.insert(id, vertex);
        self.adjacency.insert(id, Vec::new());
        Ok(())
    }

    /// Delete a vertex and every edge that references it, in either role.
    ///
    /// Re-adding the same id later starts with no edges.
    pub fn remove_vertex(&mut self, id: VertexId) -> GraphResult<Vertex> {
        let vertex = self
            .vertices
            .remove(&id)
            .ok_or(GraphError::UnknownVertex(id))?;
        self.adjacency.remove(&id);
        for edges in self.adjacency.values_mut() {
            edges.retain(|e| !e.touches(id));
        }
        debug!(vertex = %id, "removed vertex and incident edges");
        Ok(vertex)
    }

    /// Insert an edge.
    ///
    /// Fails if either endpoint is missing or an edge with the same origin,
    /// destination and weight exists. For undirected graphs the mirror edge is
    /// inserted in the same step.
    pub fn add_edge(
        &mut self,
        origin: VertexId,
        destination: VertexId,
        weight: Option<String>,
    ) -> GraphResult<()> {
        self.require_vertex(origin)?;
        self.require_vertex(destination)?;

        let weight = normalize_weight(weight);
        if self.contains_edge(origin, destination, weight.as_deref()) {
            return Err(GraphError::DuplicateEdge {
                origin,
                destination,
                weight,
            });
        }

        let edge = Edge::new(origin, destination, weight);
        debug!(edge = %edge, orientation = %self.orientation(), "adding edge");

        let mirror = (self.is_undirected()
            && !edge.is_self_loop()
            && !self.contains_edge(destination, origin, edge.weight.as_deref()))
        .then(|| edge.mirrored());

        self.adjacency.entry(origin).or_default().push(edge);
        if let Some(mirror) = mirror {
            self.adjacency.entry(destination).or_default().push(mirror);
        }
        Ok(())
    }

    /// Remove every edge from `origin` to `destination`, whatever its weight.
    ///
    /// For undirected graphs the mirrored copies go too. Returns how many
    /// edges left the origin's list.
    pub fn remove_edge(&mut self, origin: VertexId, destination: VertexId) -> GraphResult<usize> {
        self.require_vertex(origin)?;
        self.require_vertex(destination)?;

        let removed = match self.adjacency.get_mut(&origin) {
            Some(edges) => {
                let before = edges.len();
                edges.retain(|e| e.destination != destination);
                before - edges.len()
            }
            None => 0,
        };
        if removed == 0 {
            return Err(GraphError::EdgeNotFound {
                origin,
                destination,
            });
        }

        if self.is_undirected() {
            if let Some(edges) = self.adjacency.get_mut(&destination) {
                edges.retain(|e| e.destination != origin);
            }
        }
        debug!(%origin, %destination, removed, "removed edges");
        Ok(removed)
    }

    /// Every logical edge, lazily, origin ascending then insertion order.
    ///
    /// For undirected graphs each mirrored pair is reported once, from its
    /// lower endpoint. Call again to restart.
    pub fn all_edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        let undirected = self.is_undirected();
        self.stored_edges()
            .filter(move |e| !undirected || e.origin <= e.destination)
    }

    /// Every stored adjacency entry, including both halves of undirected pairs
    pub fn stored_edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.adjacency.values().flatten()
    }

    /// Degree of every vertex.
    ///
    /// Undirected: one per logical edge at each endpoint, never doubled by
    /// the mirrored storage. Self-loops add nothing.
    /// Directed: out-degree.
    pub fn degree_sequence(&self) -> BTreeMap<VertexId, usize> {
        let mut degrees: BTreeMap<VertexId, usize> =
            self.vertices.keys().map(|&id| (id, 0)).collect();

        let undirected = self.is_undirected();
        for edge in self.all_edges() {
            if undirected {
                if edge.is_self_loop() {
                    continue;
                }
                *degrees.entry(edge.destination).or_insert(0) += 1;
            }
            *degrees.entry(edge.origin).or_insert(0) += 1;
        }
        degrees
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    pub fn has_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// All vertices, ascending by id
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.values()
    }

    /// Vertex ids, ascending
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    /// Outgoing edges of a vertex in insertion order
    pub fn outgoing(&self, id: VertexId) -> &[Edge] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether any edge leads from `u` to `v`
    pub fn is_adjacent(&self, u: VertexId, v: VertexId) -> bool {
        self.outgoing(u).iter().any(|e| e.destination == v)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of logical edges (undirected pairs counted once)
    pub fn edge_count(&self) -> usize {
        self.all_edges().count()
    }

    /// Number of stored adjacency entries
    pub fn stored_edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            kind: self.kind,
            vertices: self.vertices().cloned().collect(),
            edges: self.all_edges().cloned().collect(),
        }
    }

    fn require_vertex(&self, id: VertexId) -> GraphResult<()> {
        if self.vertices.contains_key(&id) {
            Ok(())
        } else {
            Err(GraphError::UnknownVertex(id))
        }
    }

    fn contains_edge(&self, origin: VertexId, destination: VertexId, weight: Option<&str>) -> bool {
        self.outgoing(origin)
            .iter()
            .any(|e| e.matches(destination, weight))
    }
}
