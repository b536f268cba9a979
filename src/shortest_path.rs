use crate::{
    Directedness, Graph, GraphError, Path, Result, VertexIndex, Weight,
    search::visited_set,
    tracing_support::{debug, info_span},
};

/// All-pairs shortest distances: `distances[i][j]` is the length of the
/// shortest walk from `i` to `j`, or `f64::INFINITY` if there is none.
pub type DistanceMatrix = Vec<Vec<Weight>>;

impl<D: Directedness> Graph<D> {
    /// Computes shortest distances between every pair of vertices with the
    /// Floyd-Warshall algorithm. Negative edges are allowed, but a negative
    /// cycle is reported as an error.
    pub fn floyd_warshall(&self) -> Result<DistanceMatrix> {
        let _span = info_span!("floyd_warshall", vertices = self.vertex_count()).entered();
        let n = self.vertex_count();
        let mut w: DistanceMatrix = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| match self.weight(i, j) {
                        Some(weight) if i != j => weight,
                        Some(weight) => weight.min(0.0),
                        None if i == j => 0.0,
                        None => Weight::INFINITY,
                    })
                    .collect()
            })
            .collect();
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    let through_k = w[i][k] + w[k][j];
                    if through_k < w[i][j] {
                        w[i][j] = through_k;
                    }
                }
            }
        }
        if let Some(vertex) = (0..n).find(|&i| w[i][i] < 0.0) {
            debug!(vertex, "negative cycle");
            return Err(GraphError::NegativeCycle { vertex });
        }
        Ok(w)
    }

    /// Finds a shortest path from `source` to `target` with Dijkstra's
    /// algorithm. Every edge weight must be non-negative.
    pub fn dijkstra(&self, source: VertexIndex, target: VertexIndex) -> Result<Path> {
        let _span = info_span!("dijkstra", source, target).entered();
        self.check_vertex(source)?;
        self.check_vertex(target)?;
        if let Some((start, end, weight)) = self.edges().find(|&(_, _, w)| w < 0.0) {
            return Err(GraphError::NegativeWeight { start, end, weight });
        }

        let n = self.vertex_count();
        let mut distance = vec![Weight::INFINITY; n];
        let mut previous: Vec<Option<VertexIndex>> = vec![None; n];
        let mut finalized = visited_set(self);
        distance[source] = 0.0;

        loop {
            let nearest = (0..n)
                .filter(|&v| !finalized[v] && distance[v].is_finite())
                .fold(None, |best: Option<VertexIndex>, v| match best {
                    Some(b) if distance[b] <= distance[v] => Some(b),
                    _ => Some(v),
                });
            let Some(u) = nearest else {
                break;
            };
            finalized.set(u, true);
            if u == target {
                break;
            }
            for v in self.successors(u) {
                if finalized[v] {
                    continue;
                }
                let Some(weight) = self.weight(u, v) else {
                    continue;
                };
                let candidate = distance[u] + weight;
                if candidate < distance[v] {
                    distance[v] = candidate;
                    previous[v] = Some(u);
                }
            }
        }

        if !distance[target].is_finite() {
            debug!(source, target, "target unreachable");
            return Err(GraphError::NoPath {
                from: source,
                to: target,
            });
        }

        let mut vertices = vec![target];
        let mut current = target;
        while let Some(prev) = previous[current] {
            vertices.push(prev);
            current = prev;
        }
        vertices.reverse();
        Ok(Path::from_parts(vertices, distance[target]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DirectedGraph, UndirectedGraph};

    fn weighted_graph() -> DirectedGraph {
        let mut graph = DirectedGraph::with_labels("ABCDE");
        graph.add_edge(0, 1, 4.0).unwrap();
        graph.add_edge(0, 2, 1.0).unwrap();
        graph.add_edge(2, 1, 2.0).unwrap();
        graph.add_edge(1, 3, 1.0).unwrap();
        graph.add_edge(2, 3, 5.0).unwrap();
        graph.add_edge(3, 4, 3.0).unwrap();
        graph
    }

    #[test]
    fn test_floyd_warshall_distances() {
        let graph = weighted_graph();
        let w = graph.floyd_warshall().unwrap();
        assert_eq!(w[0][1], 3.0);
        assert_eq!(w[0][3], 4.0);
        assert_eq!(w[0][4], 7.0);
        assert_eq!(w[2][4], 6.0);
        assert_eq!(w[4][0], f64::INFINITY);
        assert!((0..5).all(|i| w[i][i] == 0.0));
    }

    #[test]
    fn test_floyd_warshall_negative_edge() {
        let mut graph = DirectedGraph::with_labels("ABC");
        graph.add_edge(0, 1, 2.0).unwrap();
        graph.add_edge(1, 2, -1.0).unwrap();
        graph.add_edge(0, 2, 4.0).unwrap();
        let w = graph.floyd_warshall().unwrap();
        assert_eq!(w[0][2], 1.0);
    }

    #[test]
    fn test_floyd_warshall_negative_cycle() {
        let mut graph = DirectedGraph::with_labels("AB");
        graph.add_edge(0, 1, 1.0).unwrap();
        graph.add_edge(1, 0, -2.0).unwrap();
        assert_eq!(
            graph.floyd_warshall(),
            Err(GraphError::NegativeCycle { vertex: 0 })
        );
    }

    #[test]
    fn test_floyd_warshall_empty_graph() {
        let graph = UndirectedGraph::new(3);
        assert_eq!(graph.floyd_warshall(), Ok(vec![]));
    }

    #[test]
    fn test_dijkstra_shortest_path() {
        let graph = weighted_graph();
        let path = graph.dijkstra(0, 4).unwrap();
        assert_eq!(path.vertices(), &[0, 2, 1, 3, 4]);
        assert_eq!(path.weight(), 7.0);
    }

    #[test]
    fn test_dijkstra_source_is_target() {
        let graph = weighted_graph();
        let path = graph.dijkstra(2, 2).unwrap();
        assert_eq!(path.vertices(), &[2]);
        assert_eq!(path.weight(), 0.0);
    }

    #[test]
    fn test_dijkstra_no_path() {
        let graph = weighted_graph();
        assert_eq!(
            graph.dijkstra(4, 0),
            Err(GraphError::NoPath { from: 4, to: 0 })
        );
    }

    #[test]
    fn test_dijkstra_rejects_negative_weights() {
        let mut graph = UndirectedGraph::with_labels("AB");
        graph.add_edge(0, 1, -1.0).unwrap();
        assert_eq!(
            graph.dijkstra(0, 1),
            Err(GraphError::NegativeWeight {
                start: 0,
                end: 1,
                weight: -1.0
            })
        );
    }

    #[test]
    fn test_dijkstra_zero_weight_edge() {
        let mut graph = UndirectedGraph::with_labels("ABC");
        graph.add_edge(0, 1, 0.0).unwrap();
        graph.add_edge(1, 2, 2.0).unwrap();
        graph.add_edge(0, 2, 3.0).unwrap();
        let path = graph.dijkstra(0, 2).unwrap();
        assert_eq!(path.vertices(), &[0, 1, 2]);
        assert_eq!(path.weight(), 2.0);
    }

    #[test]
    fn test_dijkstra_agrees_with_floyd_warshall() {
        let graph = weighted_graph();
        let w = graph.floyd_warshall().unwrap();
        for source in 0..5 {
            for target in 0..5 {
                match graph.dijkstra(source, target) {
                    Ok(path) => assert_eq!(path.weight(), w[source][target]),
                    Err(_) => assert!(w[source][target].is_infinite()),
                }
            }
        }
    }
}
