use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::error::{GraphError, Result};

/// Vertex identifier, unique within a graph.
pub type VertexId = u32;

/// Edge weight. Non-negative by construction.
pub type Weight = u32;

/// Accumulated path length. Wide enough that summing `Weight`s along any
/// simple path cannot overflow.
pub type Distance = u64;

/// A stored edge, seen from the lower-indexed endpoint that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub target: VertexId,
    pub weight: Weight,
}

/// A vertex and the edges it owns: targets strictly greater than its own
/// index, keyed (and therefore ordered) by target.
#[derive(Debug, Clone, Default)]
struct Vertex {
    edges: BTreeMap<VertexId, Weight>,
}

/// Sparse undirected weighted graph.
///
/// Each undirected edge `{u, v}` is stored exactly once, in the adjacency of
/// `min(u, v)` with target `max(u, v)`. Nothing is mirrored at the higher
/// endpoint, so walking a vertex's declared neighbors only sees the edges it
/// owns. Queries that need the full undirected neighborhood go through
/// [`crate::UndirectedView`].
#[derive(Debug, Clone, Default)]
pub struct Graph {
    name: String,
    vertices: BTreeMap<VertexId, Vertex>,
}

/// Order a pair of endpoints as (low, high), rejecting self-loops.
fn normalize(u: VertexId, v: VertexId) -> Result<(VertexId, VertexId)> {
    match u.cmp(&v) {
        std::cmp::Ordering::Less => Ok((u, v)),
        std::cmp::Ordering::Greater => Ok((v, u)),
        std::cmp::Ordering::Equal => Err(GraphError::SelfLoop(u)),
    }
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph with the dense vertex range `0..count` and no edges.
    pub fn with_vertices(count: VertexId) -> Self {
        Self::named("", count)
    }

    /// Like [`Graph::with_vertices`], carrying a display name.
    pub fn named(name: impl Into<String>, count: VertexId) -> Self {
        Self {
            name: name.into(),
            vertices: (0..count).map(|i| (i, Vertex::default())).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(|v| v.edges.len()).sum()
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Vertex indices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    /// Declared neighbors of `id`: only the edges stored at `id`, all with
    /// higher targets, in ascending target order. Empty for unknown vertices.
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = Edge> + '_ {
        self.vertices
            .get(&id)
            .into_iter()
            .flat_map(|v| v.edges.iter())
            .map(|(&target, &weight)| Edge { target, weight })
    }

    /// Every stored edge as `(low, high, weight)`, ordered by `low` then `high`.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId, Weight)> + '_ {
        self.vertices.iter().flat_map(|(&low, v)| {
            v.edges.iter().map(move |(&high, &weight)| (low, high, weight))
        })
    }

    /// Weight of the edge between `u` and `v`, in either argument order.
    pub fn edge_weight(&self, u: VertexId, v: VertexId) -> Option<Weight> {
        let (low, high) = normalize(u, v).ok()?;
        self.vertices.get(&low)?.edges.get(&high).copied()
    }

    /// Number of edges incident to `id`, counting both storage directions.
    pub fn degree(&self, id: VertexId) -> Result<usize> {
        let own = self
            .vertices
            .get(&id)
            .ok_or(GraphError::VertexNotFound(id))?
            .edges
            .len();
        let incoming = self
            .vertices
            .range(..id)
            .filter(|(_, v)| v.edges.contains_key(&id))
            .count();
        Ok(own + incoming)
    }

    pub fn insert_vertex(&mut self, id: VertexId) -> Result<()> {
        if self.vertices.contains_key(&id) {
            return Err(GraphError::DuplicateVertex(id));
        }
        self.vertices.insert(id, Vertex::default());
        debug!(vertex = id, "inserted vertex");
        Ok(())
    }

    /// Remove a vertex together with every edge that names it.
    ///
    /// Returns the number of edges dropped.
    pub fn remove_vertex(&mut self, id: VertexId) -> Result<usize> {
        let removed = self
            .vertices
            .remove(&id)
            .ok_or(GraphError::VertexNotFound(id))?;
        let mut dropped = removed.edges.len();

        // Only lower-indexed vertices can hold an edge targeting `id`.
        for vertex in self.vertices.range_mut(..id).map(|(_, v)| v) {
            if vertex.edges.remove(&id).is_some() {
                dropped += 1;
            }
        }

        debug!(vertex = id, edges_dropped = dropped, "removed vertex");
        Ok(dropped)
    }

    /// Insert the undirected edge `{u, v}`, or overwrite its weight if it
    /// already exists.
    ///
    /// Returns the previous weight on update, `None` on a fresh insert.
    pub fn insert_edge(&mut self, u: VertexId, v: VertexId, weight: Weight) -> Result<Option<Weight>> {
        let (low, high) = normalize(u, v)?;
        if !self.vertices.contains_key(&high) {
            return Err(GraphError::VertexNotFound(high));
        }
        let owner = self
            .vertices
            .get_mut(&low)
            .ok_or(GraphError::VertexNotFound(low))?;

        let previous = owner.edges.insert(high, weight);
        trace!(low, high, weight, updated = previous.is_some(), "upserted edge");
        Ok(previous)
    }

    /// Remove the undirected edge `{u, v}`, returning its weight.
    pub fn remove_edge(&mut self, u: VertexId, v: VertexId) -> Result<Weight> {
        let (low, high) = normalize(u, v)?;
        if !self.vertices.contains_key(&high) {
            return Err(GraphError::VertexNotFound(high));
        }
        let owner = self
            .vertices
            .get_mut(&low)
            .ok_or(GraphError::VertexNotFound(low))?;

        let weight = owner
            .edges
            .remove(&high)
            .ok_or(GraphError::EdgeNotFound(low, high))?;
        trace!(low, high, "removed edge");
        Ok(weight)
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        // BTreeMap nodes carry some bookkeeping per entry; 16 bytes is a
        // rough allowance.
        let vertex_mem = self.vertices.len() * (size_of::<VertexId>() + size_of::<Vertex>() + 16);
        let edge_mem = self.edge_count() * (size_of::<VertexId>() + size_of::<Weight>() + 16);

        self.name.capacity() + vertex_mem + edge_mem
    }
}
