use std::collections::BTreeMap;

use tracing::trace;

use crate::error::{GraphError, Result};
use crate::graph::{Distance, Graph, VertexId};
use crate::view::UndirectedView;

/// Outcome of a shortest-path query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `path` runs from base to goal inclusive.
    Found { distance: Distance, path: Vec<VertexId> },
    Unreachable,
}

impl Route {
    pub fn distance(&self) -> Option<Distance> {
        match self {
            Route::Found { distance, .. } => Some(*distance),
            Route::Unreachable => None,
        }
    }

    pub fn path(&self) -> Option<&[VertexId]> {
        match self {
            Route::Found { path, .. } => Some(path),
            Route::Unreachable => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Route::Found { .. })
    }
}

/// Per-query Dijkstra state, indexed by view position.
struct Search<'v, 'g> {
    view: &'v UndirectedView<'g>,
    /// `None` = not reached yet.
    distance: Vec<Option<Distance>>,
    predecessor: Vec<Option<usize>>,
    visited: Vec<bool>,
}

impl<'v, 'g> Search<'v, 'g> {
    fn new(view: &'v UndirectedView<'g>, base: usize) -> Self {
        let mut distance = vec![None; view.len()];
        distance[base] = Some(0);
        Self {
            view,
            distance,
            predecessor: vec![None; view.len()],
            visited: vec![false; view.len()],
        }
    }

    /// Run from `base` until `goal` is settled, or until every reachable
    /// vertex is settled when `goal` is `None`.
    fn run(&mut self, base: usize, goal: Option<usize>) {
        let mut frontier = base;
        loop {
            self.relax(frontier);
            self.visited[frontier] = true;

            if Some(frontier) == goal {
                break;
            }
            match self.next_frontier() {
                Some(next) => frontier = next,
                None => break,
            }
        }
    }

    /// Relax every edge touching `frontier`, in both storage directions.
    /// The predecessor is only ever written for the neighbor, and only on a
    /// strict improvement.
    fn relax(&mut self, frontier: usize) {
        let Some(base_dist) = self.distance[frontier] else {
            return;
        };
        let view = self.view;
        for (neighbor, weight) in view.neighbors(frontier) {
            if self.visited[neighbor] {
                continue;
            }
            let candidate = base_dist + Distance::from(weight);
            let improves = match self.distance[neighbor] {
                None => true,
                Some(current) => candidate < current,
            };
            if improves {
                self.distance[neighbor] = Some(candidate);
                self.predecessor[neighbor] = Some(frontier);
                trace!(
                    from = view.id(frontier),
                    to = view.id(neighbor),
                    distance = candidate,
                    "relaxed"
                );
            }
        }
    }

    /// Unvisited vertex with the smallest known distance. Positions follow
    /// ascending vertex index, so the strict `<` breaks ties toward the
    /// lowest index.
    fn next_frontier(&self) -> Option<usize> {
        let mut best: Option<(usize, Distance)> = None;
        for (pos, dist) in self.distance.iter().enumerate() {
            if self.visited[pos] {
                continue;
            }
            if let Some(d) = *dist {
                if best.map_or(true, |(_, b)| d < b) {
                    best = Some((pos, d));
                }
            }
        }
        best.map(|(pos, _)| pos)
    }

    /// Walk predecessors from `goal` back to `base`.
    fn reconstruct(&self, base: usize, goal: usize) -> Vec<VertexId> {
        let mut path = vec![self.view.id(goal)];
        let mut current = goal;
        while current != base {
            match self.predecessor[current] {
                Some(prev) => {
                    path.push(self.view.id(prev));
                    current = prev;
                }
                None => break,
            }
        }
        path.reverse();
        path
    }
}

/// Shortest weighted path from `base` to `goal` (Dijkstra).
///
/// Returns [`Route::Unreachable`] when no path exists; errors only when an
/// endpoint is not a vertex. The graph is not modified.
pub fn shortest_distance(graph: &Graph, base: VertexId, goal: VertexId) -> Result<Route> {
    let view = UndirectedView::new(graph);
    let start = view.position(base).ok_or(GraphError::VertexNotFound(base))?;
    let target = view.position(goal).ok_or(GraphError::VertexNotFound(goal))?;

    let mut search = Search::new(&view, start);
    search.run(start, Some(target));

    let route = match search.distance[target] {
        Some(distance) => Route::Found {
            distance,
            path: search.reconstruct(start, target),
        },
        None => Route::Unreachable,
    };
    trace!(base, goal, distance = ?route.distance(), "shortest path complete");
    Ok(route)
}

/// Shortest distance from `base` to every vertex it can reach, the base
/// included at distance 0.
pub fn shortest_distances(graph: &Graph, base: VertexId) -> Result<BTreeMap<VertexId, Distance>> {
    let view = UndirectedView::new(graph);
    let start = view.position(base).ok_or(GraphError::VertexNotFound(base))?;

    let mut search = Search::new(&view, start);
    search.run(start, None);

    Ok(search
        .distance
        .iter()
        .enumerate()
        .filter_map(|(pos, d)| d.map(|d| (view.id(pos), d)))
        .collect())
}
