use std::fmt::Debug;

use crate::element::MatrixElement;
use crate::error::Result;
use crate::shape::Shape;

/// Storage strategy of a matrix implementation.
///
/// Addition never branches on this; it exists so callers (and tests) can
/// observe which strategy produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    /// Heap-allocated buffer, shape chosen at runtime.
    Dense,
    /// Inline storage, shape fixed by the type.
    Static,
}

/// Owned, strategy-erased matrix, as returned by [`Matrix::add`].
pub type BoxedMatrix<T> = Box<dyn Matrix<Value = T>>;

/// Generic trait representing a matrix value.
/// Implementations choose their own storage strategy; callers program
/// against this interface alone.
pub trait Matrix: Debug {
    /// The underlying numeric type of the matrix elements (e.g., f64, i32).
    type Value: MatrixElement;

    /// Returns the dimensions of the matrix as (rows, columns).
    fn dims(&self) -> (usize, usize);

    /// Returns the number of rows.
    fn rows(&self) -> usize {
        self.dims().0
    }

    /// Returns the number of columns.
    fn cols(&self) -> usize {
        self.dims().1
    }

    /// Checks if the matrix is square.
    fn is_square(&self) -> bool {
        let (rows, cols) = self.dims();
        rows == cols
    }

    /// Returns the dimensions as a [`Shape`].
    fn shape(&self) -> Shape {
        let (rows, cols) = self.dims();
        Shape::new(rows, cols)
    }

    /// Returns the storage strategy of this implementation.
    fn storage(&self) -> StorageKind;

    /// Returns the element at (row, col).
    ///
    /// # Panics
    /// Panics if (row, col) lies outside the matrix shape.
    fn get(&self, row: usize, col: usize) -> Self::Value;

    /// Stores `value` at (row, col).
    ///
    /// # Panics
    /// Panics if (row, col) lies outside the matrix shape.
    fn set(&mut self, row: usize, col: usize, value: Self::Value);

    /// Element-wise addition against any equally shaped matrix.
    ///
    /// The result uses the storage strategy of `self`, regardless of the
    /// strategy of `other`. Shape mismatch is the only failure and yields
    /// no result.
    fn add(&self, other: &dyn Matrix<Value = Self::Value>) -> Result<BoxedMatrix<Self::Value>>;

    /// Renders the matrix as one `| a | b |` line per row.
    ///
    /// Built entirely on `get` and `dims`, so every implementation
    /// inherits it.
    fn render(&self) -> Vec<String> {
        let (rows, cols) = self.dims();
        let mut lines = Vec::with_capacity(rows);
        for row in 0..rows {
            let mut line = String::from("|");
            for col in 0..cols {
                line.push(' ');
                line.push_str(&self.get(row, col).render_cell());
                line.push_str(" |");
            }
            lines.push(line);
        }
        lines
    }
}
