use crate::{
    GraphError, Result, UndirectedGraph, VertexIndex, Weight,
    search::{BfsIterator, visited_set},
    tracing_support::{debug, info_span},
};

impl UndirectedGraph {
    /// Returns true if every vertex is reachable from every other vertex.
    /// A graph with no vertices is connected.
    pub fn is_connected(&self) -> bool {
        match BfsIterator::new(self, 0) {
            Ok(reached) => reached.count() == self.vertex_count(),
            Err(_) => true,
        }
    }

    /// Builds a spanning tree of minimum total weight with Prim's algorithm,
    /// grown from vertex 0.
    ///
    /// Each step joins the unvisited vertex closest to the tree. Ties are
    /// broken towards the tree vertex with the lowest index, then towards the
    /// lowest index outside the tree. The result has the same vertices and
    /// capacity as `self` and exactly `vertex_count() - 1` edges.
    pub fn minimum_spanning_tree(&self) -> Result<UndirectedGraph> {
        let _span = info_span!("minimum_spanning_tree", vertices = self.vertex_count()).entered();
        let mut tree = self.without_edges();
        if self.is_empty() {
            return Ok(tree);
        }

        let mut visited = visited_set(self);
        visited.set(0, true);

        for _ in 1..self.vertex_count() {
            let lightest = visited
                .iter_ones()
                .filter_map(|t| {
                    self.nearest_unvisited_neighbor(t, &visited)
                        .map(|(v, w)| (t, v, w))
                })
                .fold(None, |best: Option<(VertexIndex, VertexIndex, Weight)>, edge| {
                    match best {
                        Some(b) if b.2 <= edge.2 => Some(b),
                        _ => Some(edge),
                    }
                });
            let Some((start, end, weight)) = lightest else {
                let vertex = visited.first_zero().unwrap_or(0);
                debug!(vertex, "spanning tree cannot reach vertex");
                return Err(GraphError::Disconnected { vertex });
            };
            tree.add_edge(start, end, weight)?;
            visited.set(end, true);
        }
        Ok(tree)
    }

    /// Builds a spanning tree whose product of edge weights is minimal.
    ///
    /// Every weight is replaced by its natural logarithm and a minimum-sum
    /// tree is built; since `ln` is monotonic and turns products into sums,
    /// that tree also minimises the product. The returned tree carries the
    /// original weights. Every weight must be strictly positive.
    pub fn minimum_product_spanning_tree(&self) -> Result<UndirectedGraph> {
        let _span =
            info_span!("minimum_product_spanning_tree", vertices = self.vertex_count()).entered();
        if let Some((start, end, weight)) = self.edges().find(|&(_, _, w)| w <= 0.0 || w.is_nan()) {
            return Err(GraphError::NonPositiveWeight { start, end, weight });
        }
        let logarithmic = self.map_weights(Weight::ln);
        let log_tree = logarithmic.minimum_spanning_tree()?;

        let mut tree = self.without_edges();
        for (start, end, _) in log_tree.edges() {
            if let Some(weight) = self.weight(start, end) {
                tree.add_edge(start, end, weight)?;
            }
        }
        Ok(tree)
    }

    /// Partitions the vertices into connected components. Each component is
    /// sorted, and components are ordered by their smallest vertex.
    #[cfg(feature = "pathfinding")]
    pub fn connected_components(&self) -> Vec<Vec<VertexIndex>> {
        let vertices: Vec<VertexIndex> = self.vertex_indices().collect();
        let mut components: Vec<Vec<VertexIndex>> =
            pathfinding::prelude::connected_components(&vertices, |&v| self.successors(v))
                .into_iter()
                .map(|component| {
                    let mut component: Vec<_> = component.into_iter().collect();
                    component.sort_unstable();
                    component
                })
                .collect();
        components.sort_unstable_by_key(|component| component[0]);
        components
    }
}
