use std::fmt::Debug;

use quickcheck::{Arbitrary, Gen};

use crate::prelude::*;

/// Largest graph generated for property tests; brute-force oracles below are
/// exponential in this.
pub const MAX_TEST_VERTICES: usize = 6;

#[derive(Clone, Debug)]
pub struct ArbGraph<D: Directedness> {
    pub graph: Graph<D>,
}

impl<D> Arbitrary for ArbGraph<D>
where
    D: Directedness + Clone + Debug + 'static,
{
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % MAX_TEST_VERTICES + 1;
        let mut graph = Graph::<D>::new(num_vertices);
        for i in 0..num_vertices {
            graph.add_vertex((b'A' + i as u8) as char).ok();
        }
        for start in 0..num_vertices {
            for end in 0..num_vertices {
                if !D::is_directed() && end < start {
                    continue;
                }
                let present = if start == end {
                    u8::arbitrary(g) % 6 == 0
                } else {
                    bool::arbitrary(g)
                };
                if present {
                    // Zero in about one edge out of ten.
                    let weight = f64::from(u8::arbitrary(g) % 10);
                    graph.add_edge(start, end, weight).ok();
                }
            }
        }
        ArbGraph { graph }
    }
}

/// Builds an undirected graph from `(start, end, weight)` triples.
pub fn undirected(labels: &str, edges: &[(VertexIndex, VertexIndex, Weight)]) -> UndirectedGraph {
    let mut graph = UndirectedGraph::with_labels(labels);
    for &(start, end, weight) in edges {
        graph.add_edge(start, end, weight).unwrap();
    }
    graph
}

/// Builds a directed graph from `(start, end, weight)` triples.
pub fn directed(labels: &str, edges: &[(VertexIndex, VertexIndex, Weight)]) -> DirectedGraph {
    let mut graph = DirectedGraph::with_labels(labels);
    for &(start, end, weight) in edges {
        graph.add_edge(start, end, weight).unwrap();
    }
    graph
}

/// Shortest distances found by enumerating every simple path. Only valid for
/// non-negative weights.
pub fn brute_force_distances<D: Directedness>(graph: &Graph<D>) -> Vec<Vec<Weight>> {
    fn extend<D: Directedness>(
        graph: &Graph<D>,
        path: &mut Vec<VertexIndex>,
        length: Weight,
        best: &mut [Weight],
    ) {
        let last = path[path.len() - 1];
        if length < best[last] {
            best[last] = length;
        }
        for next in 0..graph.vertex_count() {
            if path.contains(&next) {
                continue;
            }
            if let Some(weight) = graph.weight(last, next) {
                path.push(next);
                extend(graph, path, length + weight, best);
                path.pop();
            }
        }
    }

    let n = graph.vertex_count();
    (0..n)
        .map(|source| {
            let mut best = vec![Weight::INFINITY; n];
            extend(graph, &mut vec![source], 0.0, &mut best);
            best
        })
        .collect()
}

/// Returns the set of vertices reachable from `start`, including itself.
pub fn reachable<D: Directedness>(graph: &Graph<D>, start: VertexIndex) -> Vec<bool> {
    let mut seen = vec![false; graph.vertex_count()];
    seen[start] = true;
    let mut changed = true;
    while changed {
        changed = false;
        for (from, to, _) in graph.edges() {
            let pairs = if graph.is_directed() {
                vec![(from, to)]
            } else {
                vec![(from, to), (to, from)]
            };
            for (a, b) in pairs {
                if seen[a] && !seen[b] {
                    seen[b] = true;
                    changed = true;
                }
            }
        }
    }
    seen
}

fn find(parent: &mut [usize], v: usize) -> usize {
    let mut root = v;
    while parent[root] != root {
        root = parent[root];
    }
    root
}

/// True if `edges` connects all `n` vertices without a cycle.
pub fn is_spanning_tree(n: usize, edges: &[(VertexIndex, VertexIndex, Weight)]) -> bool {
    if edges.len() + 1 != n {
        return false;
    }
    let mut parent: Vec<usize> = (0..n).collect();
    for &(a, b, _) in edges {
        let (ra, rb) = (find(&mut parent, a), find(&mut parent, b));
        if ra == rb {
            return false;
        }
        parent[ra] = rb;
    }
    true
}

/// Minimum of `score` over every spanning tree of `graph`, or `None` if the
/// graph has none.
pub fn brute_force_best_tree(
    graph: &UndirectedGraph,
    score: impl Fn(&[(VertexIndex, VertexIndex, Weight)]) -> Weight,
) -> Option<Weight> {
    let n = graph.vertex_count();
    let edges: Vec<_> = graph.edges().filter(|&(a, b, _)| a != b).collect();
    let mut best: Option<Weight> = None;
    for mask in 0u32..(1 << edges.len()) {
        if mask.count_ones() as usize + 1 != n {
            continue;
        }
        let chosen: Vec<_> = (0..edges.len())
            .filter(|&i| mask & (1 << i) != 0)
            .map(|i| edges[i])
            .collect();
        if is_spanning_tree(n, &chosen) {
            let value = score(&chosen);
            best = Some(best.map_or(value, |b| b.min(value)));
        }
    }
    best
}

/// True if some ordering of the vertices starting at 0 follows edges
/// between consecutive vertices.
pub fn brute_force_has_hamiltonian_path<D: Directedness>(graph: &Graph<D>) -> bool {
    fn extend<D: Directedness>(graph: &Graph<D>, path: &mut Vec<VertexIndex>) -> bool {
        if path.len() == graph.vertex_count() {
            return true;
        }
        let last = path[path.len() - 1];
        for next in 0..graph.vertex_count() {
            if !path.contains(&next) && graph.has_edge(last, next) {
                path.push(next);
                if extend(graph, path) {
                    return true;
                }
                path.pop();
            }
        }
        false
    }

    graph.vertex_count() > 0 && extend(graph, &mut vec![0])
}

/// True if the directed graph contains a cycle (self-loops included).
pub fn has_directed_cycle(graph: &DirectedGraph) -> bool {
    graph
        .edges()
        .any(|(start, end, _)| reachable(graph, end)[start])
}
