use crate::element::MatrixElement;
use crate::error::Result;
use crate::traits::{BoxedMatrix, Matrix, StorageKind};

/// Fixed-shape matrix with inline storage.
///
/// The shape is part of the type, so two `StaticMatrix` values of the same
/// type cannot disagree on it. Copy and move are structural; there is no
/// separate buffer to manage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticMatrix<T: MatrixElement, const R: usize, const C: usize> {
    data: [[T; C]; R],
}

impl<T: MatrixElement, const R: usize, const C: usize> StaticMatrix<T, R, C> {
    /// Creates a new StaticMatrix filled with zeros.
    pub fn zeros() -> Self {
        Self {
            data: [[T::zero(); C]; R],
        }
    }

    /// Creates a new StaticMatrix from rows of values.
    pub const fn from_rows(data: [[T; C]; R]) -> Self {
        Self { data }
    }

    /// Returns the number of rows fixed by the type.
    pub const fn rows(&self) -> usize {
        R
    }

    /// Returns the number of columns fixed by the type.
    pub const fn cols(&self) -> usize {
        C
    }

    /// Element-wise sum against any equally shaped matrix, keeping the
    /// inline representation for the result.
    ///
    /// The shape check still runs: `other` may use any storage strategy,
    /// so only its runtime shape is known here.
    pub fn checked_add(&self, other: &dyn Matrix<Value = T>) -> Result<StaticMatrix<T, R, C>> {
        self.shape().ensure_matches(other.shape())?;
        let mut result = StaticMatrix::zeros();
        for row in 0..R {
            for col in 0..C {
                result.data[row][col] = self.data[row][col] + other.get(row, col);
            }
        }
        Ok(result)
    }
}

impl<T: MatrixElement, const R: usize, const C: usize> Default for StaticMatrix<T, R, C> {
    fn default() -> Self {
        Self::zeros()
    }
}

// Implement the generic Matrix trait
impl<T: MatrixElement, const R: usize, const C: usize> Matrix for StaticMatrix<T, R, C> {
    type Value = T;

    fn dims(&self) -> (usize, usize) {
        (R, C)
    }

    fn storage(&self) -> StorageKind {
        StorageKind::Static
    }

    fn get(&self, row: usize, col: usize) -> T {
        assert!(
            row < R && col < C,
            "Index ({}, {}) out of range for {}x{} matrix",
            row,
            col,
            R,
            C
        );
        self.data[row][col]
    }

    fn set(&mut self, row: usize, col: usize, value: T) {
        assert!(
            row < R && col < C,
            "Index ({}, {}) out of range for {}x{} matrix",
            row,
            col,
            R,
            C
        );
        self.data[row][col] = value;
    }

    fn add(&self, other: &dyn Matrix<Value = T>) -> Result<BoxedMatrix<T>> {
        Ok(Box::new(self.checked_add(other)?))
    }
}
