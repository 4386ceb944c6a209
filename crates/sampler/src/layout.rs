//! Grid layout for poster galleries.
//!
//! Items are dealt into a fixed number of columns by their position in the
//! sample: item `i` lands in column `i % columns`. A skipped item still
//! consumes its position, so its column simply ends up one image shorter.

/// Columns used by every gallery unless configured otherwise
pub const DEFAULT_GRID_COLUMNS: usize = 3;

/// Items dealt into columns
#[derive(Debug, Clone, PartialEq)]
pub struct PosterGrid<T> {
    columns: Vec<Vec<T>>,
}

impl<T> PosterGrid<T> {
    /// Deal `items` into `columns` columns (at least one).
    ///
    /// `None` marks a skipped position.
    pub fn arrange<I>(columns: usize, items: I) -> Self
    where
        I: IntoIterator<Item = Option<T>>,
    {
        let columns = columns.max(1);
        let mut grid: Vec<Vec<T>> = (0..columns).map(|_| Vec::new()).collect();
        for (position, item) in items.into_iter().enumerate() {
            if let Some(item) = item {
                grid[position % columns].push(item);
            }
        }
        Self { columns: grid }
    }

    pub fn columns(&self) -> &[Vec<T>] {
        &self.columns
    }

    pub fn into_columns(self) -> Vec<Vec<T>> {
        self.columns
    }

    /// Number of placed items
    pub fn len(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_robin_columns() {
        let grid = PosterGrid::arrange(3, (0..6).map(Some));

        assert_eq!(grid.columns(), &[vec![0, 3], vec![1, 4], vec![2, 5]]);
        assert_eq!(grid.len(), 6);
    }

    #[test]
    fn test_skipped_positions_leave_gaps() {
        let grid = PosterGrid::arrange(3, vec![Some('a'), None, Some('c'), Some('d'), None]);

        assert_eq!(grid.columns(), &[vec!['a', 'd'], vec![], vec!['c']]);
    }

    #[test]
    fn test_all_skipped() {
        let grid: PosterGrid<u8> = PosterGrid::arrange(3, vec![None, None]);

        assert!(grid.is_empty());
        assert_eq!(grid.columns().len(), 3);
    }
}
