use crate::{
    DirectedGraph, GraphError, Result, UndirectedGraph, VertexIndex,
    search::DfsIterator,
    tracing_support::{debug, info_span},
};

impl DirectedGraph {
    /// Returns the number of edges entering `vertex`.
    pub fn indeg(&self, vertex: VertexIndex) -> Result<usize> {
        self.check_vertex(vertex)?;
        Ok(self.in_degree(vertex))
    }

    /// Returns the number of edges leaving `vertex`.
    pub fn outdeg(&self, vertex: VertexIndex) -> Result<usize> {
        self.check_vertex(vertex)?;
        Ok(self.out_degree(vertex))
    }

    pub(crate) fn in_degree(&self, vertex: VertexIndex) -> usize {
        self.predecessors(vertex).count()
    }

    pub(crate) fn out_degree(&self, vertex: VertexIndex) -> usize {
        self.successors(vertex).count()
    }

    /// Returns true if the graph is connected once edge directions are
    /// ignored.
    pub fn is_weakly_connected(&self) -> bool {
        let mut symmetric = UndirectedGraph::new(self.capacity());
        for vertex in self.vertices() {
            if symmetric.add_vertex(vertex.label()).is_err() {
                return false;
            }
        }
        for (start, end, weight) in self.edges() {
            if symmetric.add_edge(start, end, weight).is_err() {
                return false;
            }
        }
        symmetric.is_connected()
    }

    /// Returns true if every vertex can reach every other vertex.
    pub fn is_strongly_connected(&self) -> bool {
        self.vertex_indices().all(|start| {
            DfsIterator::new(self, start).is_ok_and(|reached| reached.count() == self.vertex_count())
        })
    }

    /// Orders the vertices so that every edge points from an earlier vertex
    /// to a later one.
    ///
    /// Works on a private copy of the graph: a vertex without successors is
    /// repeatedly placed in the last free slot and deleted from the copy.
    pub fn topological_sort(&self) -> Result<Vec<VertexIndex>> {
        let _span = info_span!("topological_sort", vertices = self.vertex_count()).entered();
        let mut remaining = self.clone();
        let mut original: Vec<VertexIndex> = self.vertex_indices().collect();
        let mut sorted = vec![0; self.vertex_count()];
        while !remaining.is_empty() {
            let Some(sink) = remaining.no_successors() else {
                debug!(remaining = remaining.vertex_count(), "every vertex has a successor");
                return Err(GraphError::CyclicGraph);
            };
            sorted[remaining.vertex_count() - 1] = original.remove(sink);
            remaining.delete_vertex(sink)?;
        }
        Ok(sorted)
    }

    /// Partitions the vertices into strongly connected components. Each
    /// component is sorted, and components are ordered by their smallest
    /// vertex.
    #[cfg(feature = "pathfinding")]
    pub fn strongly_connected_components(&self) -> Vec<Vec<VertexIndex>> {
        let vertices: Vec<VertexIndex> = self.vertex_indices().collect();
        let mut components =
            pathfinding::prelude::strongly_connected_components(&vertices, |&v| {
                self.successors(v)
            });
        for component in &mut components {
            component.sort_unstable();
        }
        components.sort_unstable_by_key(|component| component[0]);
        components
    }
}
