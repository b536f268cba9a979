use std::{marker::PhantomData, ops::Range};

use derivative::Derivative;

use crate::{
    Directed, Directedness, GraphError, Result, Undirected, Vertex, VertexIndex, Weight,
    adjacency_list::AdjacencyList, adjacency_matrix::AdjacencyMatrix,
};

/// A dense graph with a fixed vertex capacity.
///
/// Edges are stored in a `capacity × capacity` adjacency matrix of optional
/// weights; only the leading block covering the active vertices is ever
/// populated. The type parameter selects directed or undirected edge
/// semantics.
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""), PartialEq(bound = ""))]
pub struct Graph<D: Directedness> {
    vertices: Vec<Vertex>,
    matrix: AdjacencyMatrix,
    capacity: usize,
    #[derivative(Debug = "ignore", PartialEq = "ignore")]
    directedness: PhantomData<D>,
}

pub type DirectedGraph = Graph<Directed>;
pub type UndirectedGraph = Graph<Undirected>;

impl<D: Directedness> Graph<D> {
    /// Creates an empty graph that can hold up to `capacity` vertices.
    pub fn new(capacity: usize) -> Self {
        Graph {
            vertices: Vec::with_capacity(capacity),
            matrix: AdjacencyMatrix::with_size(capacity),
            capacity,
            directedness: PhantomData,
        }
    }

    /// Creates a graph with one vertex per label and no edges. The capacity
    /// is the number of labels.
    pub fn with_labels(labels: &str) -> Self {
        let vertices: Vec<Vertex> = labels.chars().map(Vertex::new).collect();
        let mut graph = Self::new(vertices.len());
        graph.vertices = vertices;
        graph
    }

    /// Creates a graph by copying the first `count` vertices and the leading
    /// `count × count` block of `weights`. An undirected graph requires the
    /// block to be symmetric.
    pub fn from_parts(
        capacity: usize,
        vertices: &[Vertex],
        weights: &[Vec<Option<Weight>>],
        count: usize,
    ) -> Result<Self> {
        if count > capacity {
            return Err(GraphError::CapacityExceeded { capacity });
        }
        if vertices.len() < count {
            return Err(GraphError::InvalidMatrix(format!(
                "{} vertices supplied for a vertex count of {}",
                vertices.len(),
                count
            )));
        }
        if weights.len() < count || weights[..count].iter().any(|row| row.len() < count) {
            return Err(GraphError::InvalidMatrix(format!(
                "weight matrix does not cover {count} × {count} cells"
            )));
        }
        if !D::is_directed() {
            for row in 0..count {
                for col in row + 1..count {
                    if weights[row][col] != weights[col][row] {
                        return Err(GraphError::InvalidMatrix(format!(
                            "undirected weights differ at ({row}, {col}) and ({col}, {row})"
                        )));
                    }
                }
            }
        }
        let mut graph = Self::new(capacity);
        graph.vertices.extend_from_slice(&vertices[..count]);
        for (row, cells) in weights[..count].iter().enumerate() {
            for (col, cell) in cells[..count].iter().enumerate() {
                if let Some(weight) = *cell {
                    graph.matrix.insert(row, col, weight);
                }
            }
        }
        Ok(graph)
    }

    /// Returns true if the graph is directed.
    pub fn is_directed(&self) -> bool {
        D::is_directed()
    }

    /// Returns the number of active vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the maximum number of vertices.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex(&self, index: VertexIndex) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    pub fn label(&self, index: VertexIndex) -> Option<char> {
        self.vertex(index).map(Vertex::label)
    }

    pub(crate) fn vertex_indices(&self) -> Range<VertexIndex> {
        0..self.vertex_count()
    }

    pub(crate) fn check_vertex(&self, index: VertexIndex) -> Result<()> {
        if index < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                index,
                count: self.vertex_count(),
            })
        }
    }

    /// Appends a vertex, returning its index.
    pub fn add_vertex(&mut self, label: char) -> Result<VertexIndex> {
        if self.vertex_count() >= self.capacity {
            return Err(GraphError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.vertices.push(Vertex::new(label));
        Ok(self.vertex_count() - 1)
    }

    /// Removes the vertex at `index` together with all of its edges. Every
    /// later vertex moves down one index.
    pub fn delete_vertex(&mut self, index: VertexIndex) -> Result<Vertex> {
        self.check_vertex(index)?;
        let count = self.vertex_count();
        if index == count - 1 {
            self.matrix.clear_row_and_column(index, index);
        } else {
            self.matrix.remove_row_and_column(index, count);
        }
        Ok(self.vertices.remove(index))
    }

    /// Adds an edge from `start` to `end`, replacing any existing weight.
    pub fn add_edge(&mut self, start: VertexIndex, end: VertexIndex, weight: Weight) -> Result<()> {
        self.check_vertex(start)?;
        self.check_vertex(end)?;
        D::store_edge(&mut self.matrix, start, end, weight);
        Ok(())
    }

    /// Removes the edge from `start` to `end`, returning its weight.
    pub fn remove_edge(&mut self, start: VertexIndex, end: VertexIndex) -> Result<Option<Weight>> {
        self.check_vertex(start)?;
        self.check_vertex(end)?;
        Ok(D::erase_edge(&mut self.matrix, start, end))
    }

    /// Returns the weight of the edge from `start` to `end`, if any.
    pub fn weight(&self, start: VertexIndex, end: VertexIndex) -> Option<Weight> {
        if start < self.vertex_count() && end < self.vertex_count() {
            self.matrix.get(start, end)
        } else {
            None
        }
    }

    pub fn has_edge(&self, start: VertexIndex, end: VertexIndex) -> bool {
        self.weight(start, end).is_some()
    }

    /// Iterates over all edges as `(start, end, weight)`. Undirected edges
    /// are reported once, with `start <= end`.
    pub fn edges(&self) -> impl Iterator<Item = (VertexIndex, VertexIndex, Weight)> + '_ {
        self.vertex_indices().flat_map(move |row| {
            self.matrix
                .entries_in_row(row, self.vertex_count())
                .filter(move |&(col, _)| D::is_directed() || row <= col)
                .map(move |(col, weight)| (row, col, weight))
        })
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Sum of all edge weights.
    pub fn total_weight(&self) -> Weight {
        self.edges().map(|(_, _, weight)| weight).sum()
    }

    /// Returns the degree of `vertex`. For undirected graphs this is the
    /// number of incident edges with self-loops counted twice; for directed
    /// graphs it is the in-degree plus the out-degree.
    pub fn deg(&self, vertex: VertexIndex) -> Result<usize> {
        self.check_vertex(vertex)?;
        Ok(self.deg_of(vertex))
    }

    pub(crate) fn deg_of(&self, vertex: VertexIndex) -> usize {
        D::degree(self, vertex)
    }

    /// Returns true if any vertex has an edge to itself.
    pub fn contains_loop(&self) -> bool {
        self.matrix.has_diagonal_entry(self.vertex_count())
    }

    pub fn is_eulerian(&self) -> bool {
        D::is_eulerian(self)
    }

    pub fn is_semi_eulerian(&self) -> bool {
        D::is_semi_eulerian(self)
    }

    /// Iterates over the targets of edges leaving `vertex`, in ascending
    /// order.
    pub(crate) fn successors(
        &self,
        vertex: VertexIndex,
    ) -> impl DoubleEndedIterator<Item = VertexIndex> + '_ {
        self.matrix
            .entries_in_row(vertex, self.vertex_count())
            .map(|(col, _)| col)
    }

    /// Iterates over the sources of edges entering `vertex`, in ascending
    /// order.
    pub(crate) fn predecessors(
        &self,
        vertex: VertexIndex,
    ) -> impl DoubleEndedIterator<Item = VertexIndex> + '_ {
        self.matrix
            .entries_in_col(vertex, self.vertex_count())
            .map(|(row, _)| row)
    }

    /// Returns the vertices adjacent to `index` (the targets of its outgoing
    /// edges) in ascending order.
    pub fn adjacent_vertices(&self, index: VertexIndex) -> Result<Vec<VertexIndex>> {
        self.check_vertex(index)?;
        Ok(self.successors(index).collect())
    }

    /// Returns the first vertex with no outgoing edges.
    pub(crate) fn no_successors(&self) -> Option<VertexIndex> {
        self.vertex_indices()
            .find(|&v| self.successors(v).next().is_none())
    }

    /// Builds a fresh adjacency list from the matrix. Each vertex's list is
    /// in ascending order.
    pub fn adjacency_list(&self) -> AdjacencyList {
        let mut list =
            AdjacencyList::from_lists(self.vertex_indices().map(|_| Vec::new()).collect());
        for (start, end, _) in self.edges() {
            D::add_list_edge(&mut list, start, end);
        }
        list
    }

    /// Returns a copy of the graph with every edge weight mapped through `f`.
    pub(crate) fn map_weights(&self, mut f: impl FnMut(Weight) -> Weight) -> Self {
        let mut copy = self.clone();
        for (start, end, weight) in self.edges() {
            D::store_edge(&mut copy.matrix, start, end, f(weight));
        }
        copy
    }

    /// Returns a graph with the same vertices and capacity but no edges.
    pub(crate) fn without_edges(&self) -> Self {
        let mut copy = Self::new(self.capacity);
        copy.vertices = self.vertices.clone();
        copy
    }
}
