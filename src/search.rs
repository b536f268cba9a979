use std::collections::VecDeque;

use bitvec::vec::BitVec;

use crate::{
    Directedness, Graph, Result, VertexIndex, Weight, tracing_support::info_span,
};

/// Creates a visited set with one cleared bit per active vertex.
pub(crate) fn visited_set<D: Directedness>(graph: &Graph<D>) -> BitVec {
    BitVec::repeat(false, graph.vertex_count())
}

/// Breadth-first traversal. Neighbours are visited in ascending index order,
/// and a vertex is marked when it is enqueued so it is reported only once.
pub struct BfsIterator<'g, D: Directedness> {
    graph: &'g Graph<D>,
    visited: BitVec,
    queue: VecDeque<VertexIndex>,
}

impl<'g, D: Directedness> BfsIterator<'g, D> {
    pub fn new(graph: &'g Graph<D>, start: VertexIndex) -> Result<Self> {
        graph.check_vertex(start)?;
        let mut visited = visited_set(graph);
        visited.set(start, true);
        Ok(Self {
            graph,
            visited,
            queue: VecDeque::from([start]),
        })
    }
}

impl<D: Directedness> Iterator for BfsIterator<'_, D> {
    type Item = VertexIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.queue.pop_front()?;
        for neighbor in self.graph.successors(vertex) {
            if !self.visited[neighbor] {
                self.visited.set(neighbor, true);
                self.queue.push_back(neighbor);
            }
        }
        Some(vertex)
    }
}

/// Depth-first pre-order traversal. Neighbours are explored in descending
/// index order.
///
/// The stack holds the open vertices from the start down to the current one;
/// each step either descends into the top's next unvisited neighbour or
/// retires the top.
pub struct DfsIterator<'g, D: Directedness> {
    graph: &'g Graph<D>,
    visited: BitVec,
    stack: Vec<VertexIndex>,
    start: Option<VertexIndex>,
}

impl<'g, D: Directedness> DfsIterator<'g, D> {
    pub fn new(graph: &'g Graph<D>, start: VertexIndex) -> Result<Self> {
        graph.check_vertex(start)?;
        let mut visited = visited_set(graph);
        visited.set(start, true);
        Ok(Self {
            graph,
            visited,
            stack: vec![start],
            start: Some(start),
        })
    }
}

impl<D: Directedness> Iterator for DfsIterator<'_, D> {
    type Item = VertexIndex;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            return Some(start);
        }
        while let Some(&top) = self.stack.last() {
            if let Some(next) = self.graph.unvisited_neighbor(top, &self.visited) {
                self.visited.set(next, true);
                self.stack.push(next);
                return Some(next);
            }
            self.stack.pop();
        }
        None
    }
}

impl<D: Directedness> Graph<D> {
    /// Returns the vertices reachable from `start` in depth-first pre-order.
    pub fn dfs(&self, start: VertexIndex) -> Result<Vec<VertexIndex>> {
        let _span = info_span!("dfs", start).entered();
        Ok(DfsIterator::new(self, start)?.collect())
    }

    /// Returns the vertices reachable from `start` in breadth-first order.
    pub fn bfs(&self, start: VertexIndex) -> Result<Vec<VertexIndex>> {
        let _span = info_span!("bfs", start).entered();
        Ok(BfsIterator::new(self, start)?.collect())
    }

    /// Returns the unvisited neighbour of `index` that a depth-first search
    /// explores first, i.e. the one with the highest index.
    pub(crate) fn unvisited_neighbor(
        &self,
        index: VertexIndex,
        visited: &BitVec,
    ) -> Option<VertexIndex> {
        self.successors(index).rev().find(|&v| !visited[v])
    }

    /// Returns the unvisited neighbour of `index` joined by the lightest
    /// edge, with that edge's weight. Ties go to the lowest index.
    pub(crate) fn nearest_unvisited_neighbor(
        &self,
        index: VertexIndex,
        visited: &BitVec,
    ) -> Option<(VertexIndex, Weight)> {
        self.successors(index)
            .filter(|&v| !visited[v])
            .filter_map(|v| self.weight(index, v).map(|w| (v, w)))
            .fold(None, |best, (v, w)| match best {
                Some((_, best_w)) if best_w <= w => best,
                _ => Some((v, w)),
            })
    }
}
