use crate::VertexIndex;

/// Errors reported by graph construction, mutation and the algorithms.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// The graph already holds `capacity` vertices.
    #[error("graph is full: capacity is {capacity} vertices")]
    CapacityExceeded { capacity: usize },
    /// A vertex index is not below the active vertex count.
    #[error("vertex {index} is out of range for a graph with {count} vertices")]
    VertexOutOfRange { index: VertexIndex, count: usize },
    /// Caller-supplied vertices or weights do not cover the declared vertex count.
    #[error("invalid graph data: {0}")]
    InvalidMatrix(String),
    /// The algorithm needs at least one vertex.
    #[error("graph has no vertices")]
    EmptyGraph,
    #[error("graph has no Hamiltonian path starting at vertex 0")]
    NoHamiltonianPath,
    #[error("graph has no Hamiltonian cycle")]
    NoHamiltonianCycle,
    #[error("graph has cycles")]
    CyclicGraph,
    #[error("no path from vertex {from} to vertex {to}")]
    NoPath { from: VertexIndex, to: VertexIndex },
    #[error("graph has no Eulerian path")]
    NotSemiEulerian,
    /// Dijkstra only accepts non-negative weights.
    #[error("edge {start} -> {end} has negative weight {weight}")]
    NegativeWeight {
        start: VertexIndex,
        end: VertexIndex,
        weight: f64,
    },
    /// Product spanning trees take logarithms, so every weight must be positive.
    #[error("edge {start} -> {end} has non-positive weight {weight}")]
    NonPositiveWeight {
        start: VertexIndex,
        end: VertexIndex,
        weight: f64,
    },
    #[error("graph contains a negative cycle through vertex {vertex}")]
    NegativeCycle { vertex: VertexIndex },
    /// Vertex `vertex` cannot be reached from vertex 0.
    #[error("graph is disconnected: vertex {vertex} is unreachable")]
    Disconnected { vertex: VertexIndex },
}

pub type Result<T> = std::result::Result<T, GraphError>;
