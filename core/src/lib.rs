//! wgraph-core: sparse undirected weighted graph engine.
//!
//! Each undirected edge is stored once, at its lower-indexed endpoint. On
//! top of that store the crate provides random edge generation,
//! reachability from a base vertex, and Dijkstra shortest paths with path
//! reconstruction. Queries see both storage directions through a per-query
//! [`UndirectedView`]; the store itself never mirrors an edge.

mod error;
mod generate;
mod graph;
mod path;
mod reach;
mod view;

pub use error::{GraphError, Result};
pub use generate::{generate, GeneratorConfig};
pub use graph::{Distance, Edge, Graph, VertexId, Weight};
pub use path::{shortest_distance, shortest_distances, Route};
pub use reach::{reachable_from, Reach, Reachability};
pub use view::UndirectedView;
