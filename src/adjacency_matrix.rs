use crate::Weight;

/// A dense square matrix of optional edge weights.
///
/// Entry `(row, col)` holds the weight of the edge from `row` to `col`, or
/// `None` if there is no such edge. The matrix knows nothing about
/// directedness; symmetric storage is the caller's job.
#[derive(Clone, Debug, PartialEq)]
pub struct AdjacencyMatrix {
    cells: Vec<Option<Weight>>,
    size: usize,
}

impl AdjacencyMatrix {
    /// Creates an empty `size × size` matrix.
    pub fn with_size(size: usize) -> Self {
        AdjacencyMatrix {
            cells: vec![None; size * size],
            size,
        }
    }

    /// Returns the number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| self.unchecked_index(row, col))
    }

    fn unchecked_index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Gets the weight stored at `row` and `col`, if any.
    pub fn get(&self, row: usize, col: usize) -> Option<Weight> {
        self.index(row, col).and_then(|idx| self.cells[idx])
    }

    /// Stores `weight` at `row` and `col`, returning the previous weight.
    /// Out-of-range coordinates are ignored.
    pub fn insert(&mut self, row: usize, col: usize, weight: Weight) -> Option<Weight> {
        let idx = self.index(row, col)?;
        self.cells[idx].replace(weight)
    }

    /// Removes the entry at `row` and `col`, returning its weight.
    pub fn remove(&mut self, row: usize, col: usize) -> Option<Weight> {
        let idx = self.index(row, col)?;
        self.cells[idx].take()
    }

    /// Iterates over the set entries of `row` among the first `limit`
    /// columns, in ascending column order.
    pub fn entries_in_row(
        &self,
        row: usize,
        limit: usize,
    ) -> impl DoubleEndedIterator<Item = (usize, Weight)> + '_ {
        let limit = limit.min(self.size);
        (0..limit).filter_map(move |col| self.get(row, col).map(|w| (col, w)))
    }

    /// Iterates over the set entries of `col` among the first `limit` rows,
    /// in ascending row order.
    pub fn entries_in_col(
        &self,
        col: usize,
        limit: usize,
    ) -> impl DoubleEndedIterator<Item = (usize, Weight)> + '_ {
        let limit = limit.min(self.size);
        (0..limit).filter_map(move |row| self.get(row, col).map(|w| (row, w)))
    }

    /// Clears every entry in the given row and the given column.
    pub fn clear_row_and_column(&mut self, row: usize, col: usize) {
        for i in 0..self.size {
            self.remove(row, i);
            self.remove(i, col);
        }
    }

    /// Deletes row and column `index` from the leading `active × active`
    /// block, shifting every later row up and every later column left. The
    /// vacated last row and column are cleared.
    pub fn remove_row_and_column(&mut self, index: usize, active: usize) {
        let active = active.min(self.size);
        if index >= active {
            return;
        }
        for row in 0..active {
            for col in 0..active {
                let src_row = if row >= index { row + 1 } else { row };
                let src_col = if col >= index { col + 1 } else { col };
                let value = if src_row < active && src_col < active {
                    self.get(src_row, src_col)
                } else {
                    None
                };
                let idx = self.unchecked_index(row, col);
                self.cells[idx] = value;
            }
        }
    }

    /// Returns true if any diagonal entry among the first `limit` is set.
    pub fn has_diagonal_entry(&self, limit: usize) -> bool {
        (0..limit.min(self.size)).any(|i| self.get(i, i).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut matrix = AdjacencyMatrix::with_size(3);
        assert_eq!(matrix.insert(0, 1, 2.5), None);
        assert_eq!(matrix.get(0, 1), Some(2.5));
        assert_eq!(matrix.get(1, 0), None);
    }

    #[test]
    fn test_insert_overwrites() {
        let mut matrix = AdjacencyMatrix::with_size(2);
        assert_eq!(matrix.insert(0, 1, 1.0), None);
        assert_eq!(matrix.insert(0, 1, 2.0), Some(1.0));
        assert_eq!(matrix.get(0, 1), Some(2.0));
    }

    #[test]
    fn test_zero_weight_is_an_edge() {
        let mut matrix = AdjacencyMatrix::with_size(2);
        matrix.insert(1, 0, 0.0);
        assert_eq!(matrix.get(1, 0), Some(0.0));
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut matrix = AdjacencyMatrix::with_size(2);
        assert_eq!(matrix.insert(2, 0, 1.0), None);
        assert_eq!(matrix.get(2, 0), None);
        assert_eq!(matrix.remove(0, 5), None);
    }

    #[test]
    fn test_entries_in_row_and_col() {
        let mut matrix = AdjacencyMatrix::with_size(4);
        matrix.insert(1, 0, 1.0);
        matrix.insert(1, 3, 3.0);
        matrix.insert(2, 3, 4.0);
        assert_eq!(
            matrix.entries_in_row(1, 4).collect::<Vec<_>>(),
            vec![(0, 1.0), (3, 3.0)]
        );
        assert_eq!(matrix.entries_in_row(1, 3).collect::<Vec<_>>(), vec![(0, 1.0)]);
        assert_eq!(
            matrix.entries_in_col(3, 4).rev().collect::<Vec<_>>(),
            vec![(2, 4.0), (1, 3.0)]
        );
    }

    #[test]
    fn test_remove_row_and_column_shifts() {
        let mut matrix = AdjacencyMatrix::with_size(4);
        matrix.insert(0, 2, 1.0);
        matrix.insert(2, 0, 2.0);
        matrix.insert(1, 2, 3.0);
        matrix.insert(2, 1, 4.0);
        matrix.insert(0, 1, 5.0);
        matrix.remove_row_and_column(1, 3);
        assert_eq!(matrix.get(0, 1), Some(1.0));
        assert_eq!(matrix.get(1, 0), Some(2.0));
        assert_eq!(matrix.get(1, 1), None);
        assert_eq!(matrix.entries_in_row(2, 4).count(), 0);
        assert_eq!(matrix.entries_in_col(2, 4).count(), 0);
    }

    #[test]
    fn test_remove_last_row_and_column_clears() {
        let mut matrix = AdjacencyMatrix::with_size(3);
        matrix.insert(0, 2, 1.0);
        matrix.insert(2, 2, 1.0);
        matrix.insert(0, 1, 7.0);
        matrix.remove_row_and_column(2, 3);
        assert_eq!(matrix.get(0, 2), None);
        assert_eq!(matrix.get(2, 2), None);
        assert_eq!(matrix.get(0, 1), Some(7.0));
    }

    #[test]
    fn test_clear_row_and_column() {
        let mut matrix = AdjacencyMatrix::with_size(3);
        matrix.insert(0, 1, 1.0);
        matrix.insert(1, 2, 1.0);
        matrix.insert(2, 0, 1.0);
        matrix.clear_row_and_column(1, 1);
        assert_eq!(matrix.get(0, 1), None);
        assert_eq!(matrix.get(1, 2), None);
        assert_eq!(matrix.get(2, 0), Some(1.0));
    }

    #[test]
    fn test_has_diagonal_entry() {
        let mut matrix = AdjacencyMatrix::with_size(3);
        assert!(!matrix.has_diagonal_entry(3));
        matrix.insert(2, 2, 1.0);
        assert!(!matrix.has_diagonal_entry(2));
        assert!(matrix.has_diagonal_entry(3));
    }
}
