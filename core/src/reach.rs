use std::collections::BTreeMap;

use tracing::trace;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId};
use crate::view::UndirectedView;

/// Whether a vertex is connected to the query's base vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reach {
    Reached,
    Unreached,
}

/// Reachability of every vertex in the graph from one base vertex.
#[derive(Debug, Clone)]
pub struct Reachability {
    base: VertexId,
    marks: BTreeMap<VertexId, Reach>,
}

impl Reachability {
    pub fn base(&self) -> VertexId {
        self.base
    }

    /// `None` if `id` was not a vertex when the query ran.
    pub fn get(&self, id: VertexId) -> Option<Reach> {
        self.marks.get(&id).copied()
    }

    pub fn is_reached(&self, id: VertexId) -> bool {
        self.get(id) == Some(Reach::Reached)
    }

    /// Reached vertices in ascending order (always includes the base).
    pub fn reached(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.filter(Reach::Reached)
    }

    /// Vertices with no path to the base, in ascending order.
    pub fn unreached(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.filter(Reach::Unreached)
    }

    fn filter(&self, want: Reach) -> impl Iterator<Item = VertexId> + '_ {
        self.marks
            .iter()
            .filter(move |(_, r)| **r == want)
            .map(|(&id, _)| id)
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (VertexId, Reach)> + '_ {
        self.marks.iter().map(|(&id, &r)| (id, r))
    }
}

/// Mark every vertex connected to `base`, regardless of weight.
///
/// Depth-first mark-and-expand over an explicit stack, so call depth stays
/// constant however long the paths are. Edges are followed in both storage
/// directions.
pub fn reachable_from(graph: &Graph, base: VertexId) -> Result<Reachability> {
    let view = UndirectedView::new(graph);
    let start = view.position(base).ok_or(GraphError::VertexNotFound(base))?;

    let mut reached = vec![false; view.len()];
    let mut stack = vec![start];
    reached[start] = true;

    while let Some(pos) = stack.pop() {
        for (next, _) in view.neighbors(pos) {
            if !reached[next] {
                reached[next] = true;
                stack.push(next);
            }
        }
    }

    let marks: BTreeMap<VertexId, Reach> = reached
        .iter()
        .enumerate()
        .map(|(pos, &hit)| {
            let mark = if hit { Reach::Reached } else { Reach::Unreached };
            (view.id(pos), mark)
        })
        .collect();

    trace!(
        base,
        reached = reached.iter().filter(|&&r| r).count(),
        total = marks.len(),
        "reachability complete"
    );

    Ok(Reachability { base, marks })
}

impl Graph {
    /// Vertices with no path to `base`, in ascending order.
    pub fn unreachable_from(&self, base: VertexId) -> Result<Vec<VertexId>> {
        Ok(reachable_from(self, base)?.unreached().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_chain(n: VertexId) -> Graph {
        let mut g = Graph::with_vertices(n);
        for i in 0..n - 1 {
            g.insert_edge(i, i + 1, 1).unwrap();
        }
        g
    }

    #[test]
    fn test_base_always_reached() {
        let g = Graph::with_vertices(4);
        let r = reachable_from(&g, 2).unwrap();
        assert_eq!(r.get(2), Some(Reach::Reached));
        assert_eq!(r.reached().collect::<Vec<_>>(), vec![2]);
        assert_eq!(r.unreached().collect::<Vec<_>>(), vec![0, 1, 3]);
    }

    #[test]
    fn test_chain_from_top_reaches_down() {
        // Every edge is stored at the lower endpoint; starting from the
        // highest vertex exercises the backward direction only.
        let g = make_chain(50);
        let r = reachable_from(&g, 49).unwrap();
        assert_eq!(r.reached().count(), 50);
        assert_eq!(r.unreached().count(), 0);
    }

    #[test]
    fn test_zigzag_needs_both_directions() {
        // 0 -- 3, 1 -- 3, 1 -- 2: from 0, reaching 2 goes up to 3, down to 1,
        // then up to 2.
        let mut g = Graph::with_vertices(5);
        g.insert_edge(0, 3, 1).unwrap();
        g.insert_edge(1, 3, 1).unwrap();
        g.insert_edge(1, 2, 1).unwrap();

        let r = reachable_from(&g, 0).unwrap();
        assert_eq!(r.reached().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(r.get(4), Some(Reach::Unreached));
    }

    #[test]
    fn test_two_components() {
        let mut g = Graph::with_vertices(6);
        g.insert_edge(0, 1, 1).unwrap();
        g.insert_edge(1, 2, 1).unwrap();
        g.insert_edge(3, 5, 1).unwrap();

        assert_eq!(g.unreachable_from(5).unwrap(), vec![0, 1, 2, 4]);
        assert_eq!(g.unreachable_from(2).unwrap(), vec![3, 4, 5]);
    }

    #[test]
    fn test_sparse_ids() {
        let mut g = Graph::new();
        for id in [4, 40, 400] {
            g.insert_vertex(id).unwrap();
        }
        g.insert_edge(400, 4, 2).unwrap();
        let r = reachable_from(&g, 400).unwrap();
        assert!(r.is_reached(4));
        assert!(!r.is_reached(40));
        assert_eq!(r.get(41), None);
    }

    #[test]
    fn test_unknown_base() {
        let g = make_chain(3);
        assert_eq!(
            reachable_from(&g, 9).unwrap_err(),
            GraphError::VertexNotFound(9)
        );
    }

    #[test]
    fn test_long_chain_no_stack_overflow() {
        let g = make_chain(200_000);
        let r = reachable_from(&g, 0).unwrap();
        assert!(r.is_reached(199_999));
    }
}
