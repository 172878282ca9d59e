use tracing::debug;

use crate::adjacency::AdjacencyStructure;

/// Symmetric n×n relation indexed by 1-based position, independent of any
/// node labels.
///
/// Cells hold free-form strings; a cell marks an edge when its trimmed
/// value is non-empty and not `"0"`. Interactive writes through
/// [`MatrixModel::set_cell`] mirror the value to the transposed cell, so
/// a matrix built only through edits is symmetric unconditionally.
/// Externally loaded tables are trusted as-is (see [`MatrixModel::load`]).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatrixModel {
    size: usize,
    cells: Vec<Vec<String>>,
}

impl MatrixModel {
    /// Creates an empty 0×0 matrix.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty n×n matrix.
    #[must_use]
    pub fn with_size(n: usize) -> Self {
        let mut matrix = Self::new();
        matrix.resize(n);
        matrix
    }

    /// Current dimension.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Sets the dimension to `n`. Growing adds empty rows and columns;
    /// shrinking discards rows and columns beyond the new bound. Values
    /// within the retained bound are preserved.
    pub fn resize(&mut self, n: usize) {
        self.cells.resize_with(n, Vec::new);
        for row in &mut self.cells {
            row.resize_with(n, String::new);
        }
        self.size = n;
    }

    /// Writes `value` at the 1-based `(row, col)` and mirrors it to
    /// `(col, row)`. Rejected (returning false) on the diagonal and out of
    /// range.
    pub fn set_cell(&mut self, row: usize, col: usize, value: impl Into<String>) -> bool {
        if row == col || !self.in_range(row) || !self.in_range(col) {
            return false;
        }
        let value = value.into();
        self.cells[row - 1][col - 1] = value.clone();
        self.cells[col - 1][row - 1] = value;
        true
    }

    /// Reads the 1-based `(row, col)` cell; out-of-range reads yield "".
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> &str {
        if self.in_range(row) && self.in_range(col) {
            &self.cells[row - 1][col - 1]
        } else {
            ""
        }
    }

    const fn in_range(&self, index: usize) -> bool {
        index >= 1 && index <= self.size
    }

    /// Replaces the full matrix content from an externally supplied table,
    /// resizing to the declared row count. Rows are truncated or padded to
    /// square, but symmetry is NOT re-derived: the input is trusted as-is,
    /// and an asymmetric table produces an asymmetric adjacency structure.
    pub fn load(&mut self, rows: Vec<Vec<String>>) {
        let n = rows.len();
        debug!("MatrixModel::load {}x{}", n, n);
        self.size = n;
        self.cells = rows
            .into_iter()
            .map(|mut row| {
                row.resize_with(n, String::new);
                row
            })
            .collect();
    }

    /// Full table snapshot, row-major, for the persistence layer.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.cells.clone()
    }

    /// Flattens the matrix into its adjacency structure: position labels
    /// are "1".."n", and position i is adjacent to j (i≠j) iff the
    /// `(i, j)` cell marks an edge. Pure and repeatable.
    #[must_use]
    pub fn adjacency_structure(&self) -> AdjacencyStructure {
        let mut structure = AdjacencyStructure::new();
        for row in 1..=self.size {
            let label = row.to_string();
            structure.insert_entity(&label);
            for col in 1..=self.size {
                if row != col && is_edge_token(&self.cells[row - 1][col - 1]) {
                    structure.add_neighbor(&label, &col.to_string());
                }
            }
        }
        structure
    }

    /// True when every pair of transposed cells agrees on edge-present
    /// status. Always true for matrices built only through `set_cell`;
    /// a false result means external data was loaded asymmetric.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        (1..=self.size).all(|row| {
            (row + 1..=self.size).all(|col| {
                is_edge_token(self.cell(row, col)) == is_edge_token(self.cell(col, row))
            })
        })
    }
}

/// A cell marks an edge when its trimmed value is non-empty and not "0".
fn is_edge_token(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed != "0"
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use quickcheck::quickcheck;

    quickcheck! {
        fn prop_interactive_writes_stay_symmetric(ops: Vec<(u8, u8, bool)>) -> bool {
            let mut matrix = MatrixModel::with_size(6);
            for (row, col, present) in ops {
                let row = usize::from(row % 6) + 1;
                let col = usize::from(col % 6) + 1;
                matrix.set_cell(row, col, if present { "1" } else { "" });
            }
            matrix.is_symmetric() && matrix.adjacency_structure().is_symmetric()
        }
    }
}
