//! Dense, capacity-bounded graphs backed by an adjacency matrix, with the
//! classic traversal, shortest-path, spanning-tree, Eulerian, Hamiltonian and
//! topological-sort algorithms.
//!
//! [`Graph`] is generic over its [`Directedness`]; use [`DirectedGraph`] or
//! [`UndirectedGraph`].

pub mod adjacency_list;
pub mod adjacency_matrix;
pub mod directedness;
pub mod error;
pub mod graph;
pub mod path;
pub mod prelude;
pub mod search;
pub mod shortest_path;
pub mod tracing_support;
pub mod vertex;

mod directed;
mod euler;
mod hamilton;
mod undirected;

#[cfg(test)]
mod test_support;

/// Position of a vertex in its graph.
pub type VertexIndex = usize;

/// Edge weight.
pub type Weight = f64;

pub use directedness::{Directed, Directedness, Undirected};
pub use error::{GraphError, Result};
pub use graph::{DirectedGraph, Graph, UndirectedGraph};
pub use path::Path;
pub use shortest_path::DistanceMatrix;
pub use vertex::Vertex;
