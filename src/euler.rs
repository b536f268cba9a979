use crate::{
    Directedness, Graph, GraphError, Path, Result,
    tracing_support::{debug, info_span},
};

impl<D: Directedness> Graph<D> {
    /// Finds a walk that uses every edge exactly once, using Hierholzer's
    /// algorithm. The graph must satisfy [`Graph::is_semi_eulerian`].
    ///
    /// The walk starts at the vertex chosen by the directedness (an odd
    /// vertex for undirected graphs, the vertex with one surplus outgoing
    /// edge for directed graphs, vertex 0 otherwise) and follows edge
    /// direction. Its length is always `edge_count() + 1`.
    pub fn eulerian_path(&self) -> Result<Path> {
        let _span = info_span!("eulerian_path", edges = self.edge_count()).entered();
        if self.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        if !self.is_semi_eulerian() {
            return Err(GraphError::NotSemiEulerian);
        }

        let mut list = self.adjacency_list();
        let start = D::eulerian_start(self);
        let mut stack = vec![start];
        let mut circuit = Vec::with_capacity(self.edge_count() + 1);
        while let Some(&current) = stack.last() {
            match list.last_neighbor(current) {
                Some(next) => {
                    D::remove_list_edge(&mut list, current, next);
                    stack.push(next);
                }
                None => {
                    circuit.push(current);
                    stack.pop();
                }
            }
        }
        circuit.reverse();

        if list.entry_count() != 0 {
            debug!(start, remaining = list.entry_count(), "edges left unvisited");
            return Err(GraphError::NotSemiEulerian);
        }
        let weight = circuit
            .windows(2)
            .filter_map(|step| self.weight(step[0], step[1]))
            .sum();
        Ok(Path::from_parts(circuit, weight))
    }
}
