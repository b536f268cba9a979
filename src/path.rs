use std::fmt::Debug;

use crate::{VertexIndex, Weight};

/// A walk through a graph, represented as the sequence of vertices it visits
/// and the total weight of the edges between them.
#[derive(Clone, PartialEq)]
pub struct Path {
    vertices: Vec<VertexIndex>,
    weight: Weight,
}

impl Path {
    /// Creates a new path starting at the given vertex.
    pub fn new(start: VertexIndex) -> Self {
        Self {
            vertices: vec![start],
            weight: 0.0,
        }
    }

    pub(crate) fn from_parts(vertices: Vec<VertexIndex>, weight: Weight) -> Self {
        debug_assert!(!vertices.is_empty());
        Self { vertices, weight }
    }

    /// Returns the first vertex in the path.
    pub fn first_vertex(&self) -> VertexIndex {
        self.vertices[0]
    }

    /// Returns the last vertex in the path.
    pub fn last_vertex(&self) -> VertexIndex {
        self.vertices[self.vertices.len() - 1]
    }

    /// Returns the vertices in the order they are visited.
    pub fn vertices(&self) -> &[VertexIndex] {
        &self.vertices
    }

    /// Consumes the path, returning its vertices.
    pub fn into_vertices(self) -> Vec<VertexIndex> {
        self.vertices
    }

    /// Returns the sum of the weights of the traversed edges.
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Returns the number of vertices in the path, counting repeats.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// A path always holds at least its starting vertex.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the number of edges traversed.
    pub fn edge_count(&self) -> usize {
        self.vertices.len() - 1
    }

    /// Iterates over consecutive vertex pairs, i.e. the traversed edges.
    pub fn steps(&self) -> impl Iterator<Item = (VertexIndex, VertexIndex)> + '_ {
        self.vertices.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Extends the path to `vertex` over an edge of weight `weight`.
    pub fn push(&mut self, vertex: VertexIndex, weight: Weight) {
        self.vertices.push(vertex);
        self.weight += weight;
    }
}

impl Debug for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Path")
            .field("vertices", &self.vertices)
            .field("weight", &self.weight)
            .finish()
    }
}
