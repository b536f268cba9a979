use crate::VertexIndex;

/// Per-vertex neighbour lists derived from an adjacency matrix.
///
/// A list is a plain owned value: algorithms that consume edges build their
/// own copy with [`crate::Graph::adjacency_list`] and mutate it freely.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    lists: Vec<Vec<VertexIndex>>,
}

impl AdjacencyList {
    pub(crate) fn from_lists(lists: Vec<Vec<VertexIndex>>) -> Self {
        AdjacencyList { lists }
    }

    /// Returns the number of vertices covered by the list.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Returns the remaining neighbours of `vertex`, in insertion order.
    pub fn neighbors(&self, vertex: VertexIndex) -> &[VertexIndex] {
        self.lists.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the most recently added neighbour of `vertex`.
    pub fn last_neighbor(&self, vertex: VertexIndex) -> Option<VertexIndex> {
        self.neighbors(vertex).last().copied()
    }

    /// Appends `end` to the list of `start`.
    pub fn push(&mut self, start: VertexIndex, end: VertexIndex) {
        if let Some(list) = self.lists.get_mut(start) {
            list.push(end);
        }
    }

    /// Removes the last occurrence of `end` from the list of `start`.
    /// Returns false if it was not present.
    pub fn remove(&mut self, start: VertexIndex, end: VertexIndex) -> bool {
        let Some(list) = self.lists.get_mut(start) else {
            return false;
        };
        match list.iter().rposition(|&v| v == end) {
            Some(pos) => {
                list.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Total number of entries across all lists.
    pub fn entry_count(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }
}
