use crate::{
    Graph, VertexIndex, Weight, adjacency_list::AdjacencyList, adjacency_matrix::AdjacencyMatrix,
};

/// Marker type representing directed graph edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Directed;

/// Marker type representing undirected graph edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Undirected;

/// Trait defining the directedness behavior of graph edges.
///
/// This trait is implemented by [`Directed`] and [`Undirected`] and carries
/// every operation whose meaning depends on whether edges have a direction:
/// how an edge is written to the matrix and to an adjacency list, how degree
/// is counted, and the Eulerian predicates.
pub trait Directedness: Sized {
    fn is_directed() -> bool;

    /// Writes an edge into the matrix, returning the previous weight.
    fn store_edge(
        matrix: &mut AdjacencyMatrix,
        start: VertexIndex,
        end: VertexIndex,
        weight: Weight,
    ) -> Option<Weight>;

    /// Removes an edge from the matrix, returning its weight.
    fn erase_edge(matrix: &mut AdjacencyMatrix, start: VertexIndex, end: VertexIndex)
    -> Option<Weight>;

    /// Adds an edge to an adjacency list.
    fn add_list_edge(list: &mut AdjacencyList, start: VertexIndex, end: VertexIndex);

    /// Removes an edge from an adjacency list.
    fn remove_list_edge(list: &mut AdjacencyList, start: VertexIndex, end: VertexIndex);

    /// Number of edge ends at `vertex`.
    fn degree(graph: &Graph<Self>, vertex: VertexIndex) -> usize;

    /// True if the graph has a closed walk using every edge exactly once.
    fn is_eulerian(graph: &Graph<Self>) -> bool;

    /// True if the graph has a walk, open or closed, using every edge
    /// exactly once.
    fn is_semi_eulerian(graph: &Graph<Self>) -> bool;

    /// The vertex an Eulerian walk must start from.
    fn eulerian_start(graph: &Graph<Self>) -> VertexIndex;
}

impl Directedness for Directed {
    fn is_directed() -> bool {
        true
    }

    fn store_edge(
        matrix: &mut AdjacencyMatrix,
        start: VertexIndex,
        end: VertexIndex,
        weight: Weight,
    ) -> Option<Weight> {
        matrix.insert(start, end, weight)
    }

    fn erase_edge(
        matrix: &mut AdjacencyMatrix,
        start: VertexIndex,
        end: VertexIndex,
    ) -> Option<Weight> {
        matrix.remove(start, end)
    }

    fn add_list_edge(list: &mut AdjacencyList, start: VertexIndex, end: VertexIndex) {
        list.push(start, end);
    }

    fn remove_list_edge(list: &mut AdjacencyList, start: VertexIndex, end: VertexIndex) {
        list.remove(start, end);
    }

    fn degree(graph: &Graph<Self>, vertex: VertexIndex) -> usize {
        graph.in_degree(vertex) + graph.out_degree(vertex)
    }

    fn is_eulerian(graph: &Graph<Self>) -> bool {
        graph.is_strongly_connected()
            && graph
                .vertex_indices()
                .all(|v| graph.in_degree(v) == graph.out_degree(v))
    }

    fn is_semi_eulerian(graph: &Graph<Self>) -> bool {
        if Self::is_eulerian(graph) {
            return true;
        }
        if !graph.is_weakly_connected() {
            return false;
        }
        let mut starts = 0;
        let mut ends = 0;
        for v in graph.vertex_indices() {
            let indeg = graph.in_degree(v);
            let outdeg = graph.out_degree(v);
            if outdeg == indeg + 1 {
                starts += 1;
            } else if indeg == outdeg + 1 {
                ends += 1;
            } else if indeg != outdeg {
                return false;
            }
        }
        starts == 1 && ends == 1
    }

    fn eulerian_start(graph: &Graph<Self>) -> VertexIndex {
        graph
            .vertex_indices()
            .find(|&v| graph.out_degree(v) == graph.in_degree(v) + 1)
            .unwrap_or(0)
    }
}

impl Directedness for Undirected {
    fn is_directed() -> bool {
        false
    }

    fn store_edge(
        matrix: &mut AdjacencyMatrix,
        start: VertexIndex,
        end: VertexIndex,
        weight: Weight,
    ) -> Option<Weight> {
        matrix.insert(end, start, weight);
        matrix.insert(start, end, weight)
    }

    fn erase_edge(
        matrix: &mut AdjacencyMatrix,
        start: VertexIndex,
        end: VertexIndex,
    ) -> Option<Weight> {
        matrix.remove(end, start);
        matrix.remove(start, end)
    }

    fn add_list_edge(list: &mut AdjacencyList, start: VertexIndex, end: VertexIndex) {
        list.push(start, end);
        if start != end {
            list.push(end, start);
        }
    }

    fn remove_list_edge(list: &mut AdjacencyList, start: VertexIndex, end: VertexIndex) {
        list.remove(start, end);
        if start != end {
            list.remove(end, start);
        }
    }

    /// Self-loops count twice.
    fn degree(graph: &Graph<Self>, vertex: VertexIndex) -> usize {
        graph
            .successors(vertex)
            .map(|v| if v == vertex { 2 } else { 1 })
            .sum()
    }

    fn is_eulerian(graph: &Graph<Self>) -> bool {
        graph.is_connected() && graph.vertex_indices().all(|v| graph.deg_of(v) % 2 == 0)
    }

    fn is_semi_eulerian(graph: &Graph<Self>) -> bool {
        if !graph.is_connected() {
            return false;
        }
        let odd = graph
            .vertex_indices()
            .filter(|&v| graph.deg_of(v) % 2 == 1)
            .count();
        odd == 0 || odd == 2
    }

    fn eulerian_start(graph: &Graph<Self>) -> VertexIndex {
        graph
            .vertex_indices()
            .find(|&v| graph.deg_of(v) % 2 == 1)
            .unwrap_or(0)
    }
}
