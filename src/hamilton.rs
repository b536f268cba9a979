use bitvec::vec::BitVec;

use crate::{
    Directedness, Graph, GraphError, Path, Result, VertexIndex,
    search::visited_set,
    tracing_support::{debug, info_span},
};

impl<D: Directedness> Graph<D> {
    /// Finds a path starting at vertex 0 that visits every vertex exactly
    /// once, by backtracking over candidates in ascending index order.
    pub fn hamiltonian_path(&self) -> Result<Path> {
        let _span = info_span!("hamiltonian_path", vertices = self.vertex_count()).entered();
        let vertices = self
            .search_hamiltonian(false)?
            .ok_or(GraphError::NoHamiltonianPath)?;
        Ok(self.weighted_path(vertices))
    }

    /// Finds a cycle through every vertex. The returned path starts and ends
    /// at vertex 0.
    pub fn hamiltonian_cycle(&self) -> Result<Path> {
        let _span = info_span!("hamiltonian_cycle", vertices = self.vertex_count()).entered();
        let mut vertices = self
            .search_hamiltonian(true)?
            .ok_or(GraphError::NoHamiltonianCycle)?;
        vertices.push(0);
        Ok(self.weighted_path(vertices))
    }

    fn weighted_path(&self, vertices: Vec<VertexIndex>) -> Path {
        let weight = vertices
            .windows(2)
            .filter_map(|step| self.weight(step[0], step[1]))
            .sum();
        Path::from_parts(vertices, weight)
    }

    /// Returns `Ok(None)` when the search space is exhausted.
    ///
    /// `cursors[i]` is the next candidate to try at position `i + 1`, so
    /// `cursors.len() == path.len()` at the top of every iteration.
    fn search_hamiltonian(&self, closed: bool) -> Result<Option<Vec<VertexIndex>>> {
        let n = self.vertex_count();
        if n == 0 {
            return Err(GraphError::EmptyGraph);
        }
        let mut path = vec![0];
        let mut on_path = visited_set(self);
        on_path.set(0, true);
        let mut cursors = vec![1];

        // Two undirected vertices would close the cycle over the edge that
        // opened it.
        let closable = D::is_directed() || n != 2;
        loop {
            if path.len() == n && (!closed || (closable && self.has_edge(path[n - 1], 0))) {
                return Ok(Some(path));
            }
            let next = if path.len() < n {
                self.next_safe_candidate(&path, &on_path, cursors[cursors.len() - 1])
            } else {
                None
            };
            match next {
                Some(v) => {
                    let last = cursors.len() - 1;
                    cursors[last] = v + 1;
                    path.push(v);
                    on_path.set(v, true);
                    cursors.push(1);
                }
                None => {
                    if path.len() == 1 {
                        debug!("search exhausted");
                        return Ok(None);
                    }
                    cursors.pop();
                    if let Some(v) = path.pop() {
                        on_path.set(v, false);
                    }
                }
            }
        }
    }

    /// A candidate is safe if it is joined to the end of the path by an edge
    /// and is not already on the path.
    fn next_safe_candidate(
        &self,
        path: &[VertexIndex],
        on_path: &BitVec,
        from: VertexIndex,
    ) -> Option<VertexIndex> {
        let last = path[path.len() - 1];
        (from..self.vertex_count()).find(|&v| !on_path[v] && self.has_edge(last, v))
    }
}
