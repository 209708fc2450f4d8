use std::collections::HashMap;

use crate::graph::{Graph, VertexId, Weight};

/// Query-time undirected view over a [`Graph`].
///
/// The store keeps each edge only at its lower endpoint, so finding the
/// lower neighbors of a vertex would mean scanning every vertex below it.
/// The view pays that once per query: it assigns each vertex a dense
/// position (ascending index order) and builds an incoming index alongside
/// the owned edges. It borrows the graph and never outlives the query.
pub struct UndirectedView<'a> {
    graph: &'a Graph,
    ids: Vec<VertexId>,
    positions: HashMap<VertexId, usize>,
    /// incoming[pos] = (lower position, weight) for every edge stored at a
    /// lower vertex that targets `ids[pos]`.
    incoming: Vec<Vec<(usize, Weight)>>,
}

impl<'a> UndirectedView<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        let ids: Vec<VertexId> = graph.vertices().collect();
        let positions: HashMap<VertexId, usize> =
            ids.iter().enumerate().map(|(pos, &id)| (id, pos)).collect();

        let mut incoming = vec![Vec::new(); ids.len()];
        for (low, high, weight) in graph.edges() {
            incoming[positions[&high]].push((positions[&low], weight));
        }

        Self {
            graph,
            ids,
            positions,
            incoming,
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn position(&self, id: VertexId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    pub fn id(&self, pos: usize) -> VertexId {
        self.ids[pos]
    }

    /// Every neighbor of the vertex at `pos`, in either storage direction,
    /// as (position, weight). Lower neighbors come first, in ascending order,
    /// followed by the vertex's own edges.
    pub fn neighbors(&self, pos: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        let lower = self.incoming[pos].iter().copied();
        let higher = self
            .graph
            .neighbors(self.ids[pos])
            .map(move |e| (self.positions[&e.target], e.weight));
        lower.chain(higher)
    }
}
