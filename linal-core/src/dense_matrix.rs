use serde::{Deserialize, Serialize};

use crate::element::MatrixElement;
use crate::error::{LinalCoreError, Result};
use crate::shape::Shape;
use crate::traits::{BoxedMatrix, Matrix, StorageKind};

/// Heap-backed matrix stored in row-major order.
///
/// The shape is chosen at construction and never changes for the lifetime
/// of the value. Moving transfers the buffer in O(1); a slot emptied with
/// [`std::mem::take`] is left as the default `0x0` matrix, which drops
/// safely and reports an empty shape.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDenseMatrix<T>")]
pub struct DenseMatrix<T: MatrixElement> {
    shape: Shape,
    data: Vec<T>, // Data stored row-major: data[row * cols + col]
}

/// Unvalidated wire form of [`DenseMatrix`]; conversion runs the same
/// length check as [`DenseMatrix::new`].
#[derive(Deserialize)]
struct RawDenseMatrix<T> {
    shape: Shape,
    data: Vec<T>,
}

impl<T: MatrixElement> TryFrom<RawDenseMatrix<T>> for DenseMatrix<T> {
    type Error = LinalCoreError;

    fn try_from(raw: RawDenseMatrix<T>) -> Result<Self> {
        DenseMatrix::new(raw.shape.rows, raw.shape.cols, raw.data)
    }
}

impl<T: MatrixElement> DenseMatrix<T> {
    /// Creates a new DenseMatrix from raw data and dimensions, assuming
    /// row-major order.
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(LinalCoreError::InvalidDimensions(format!(
                "Data length ({}) does not match dimensions ({}x{})",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(Self {
            shape: Shape::new(rows, cols),
            data,
        })
    }

    /// Creates a new DenseMatrix filled with zeros.
    ///
    /// Degenerate shapes are valid and allocate zero-length storage.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            shape: Shape::new(rows, cols),
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Creates a new DenseMatrix from row vectors.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, |row| row.len());
        let mut data = Vec::with_capacity(row_count * col_count);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != col_count {
                return Err(LinalCoreError::InvalidDimensions(format!(
                    "Row {} has {} columns but expected {}",
                    index,
                    row.len(),
                    col_count
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            shape: Shape::new(row_count, col_count),
            data,
        })
    }

    /// Returns a slice view of the underlying data vector.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Returns a mutable slice view of the underlying data vector.
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Element-wise sum against any equally shaped matrix, keeping the
    /// heap-backed representation for the result.
    pub fn checked_add(&self, other: &dyn Matrix<Value = T>) -> Result<DenseMatrix<T>> {
        let shape = self.shape.ensure_matches(other.shape())?;
        let mut result = DenseMatrix::zeros(shape.rows, shape.cols);
        for row in 0..shape.rows {
            for col in 0..shape.cols {
                let index = shape.index_of(row, col);
                result.data[index] = self.data[index] + other.get(row, col);
            }
        }
        Ok(result)
    }
}

impl<T: MatrixElement> Clone for DenseMatrix<T> {
    fn clone(&self) -> Self {
        Self {
            shape: self.shape,
            data: self.data.clone(),
        }
    }

    /// Deep-copies `source` into `self`, reusing the existing buffer when
    /// its capacity already fits the source shape.
    fn clone_from(&mut self, source: &Self) {
        self.shape = source.shape;
        self.data.clone_from(&source.data);
    }
}

impl<T: MatrixElement> Default for DenseMatrix<T> {
    /// The empty 0x0 matrix, also the state a moved-from slot is left in
    /// by [`std::mem::take`].
    fn default() -> Self {
        Self {
            shape: Shape::new(0, 0),
            data: Vec::new(),
        }
    }
}

// Implement the generic Matrix trait
impl<T: MatrixElement> Matrix for DenseMatrix<T> {
    type Value = T;

    fn dims(&self) -> (usize, usize) {
        (self.shape.rows, self.shape.cols)
    }

    fn storage(&self) -> StorageKind {
        StorageKind::Dense
    }

    fn get(&self, row: usize, col: usize) -> T {
        assert!(
            self.shape.contains(row, col),
            "Index ({}, {}) out of range for {} matrix",
            row,
            col,
            self.shape
        );
        self.data[self.shape.index_of(row, col)]
    }

    fn set(&mut self, row: usize, col: usize, value: T) {
        assert!(
            self.shape.contains(row, col),
            "Index ({}, {}) out of range for {} matrix",
            row,
            col,
            self.shape
        );
        let index = self.shape.index_of(row, col);
        self.data[index] = value;
    }

    fn add(&self, other: &dyn Matrix<Value = T>) -> Result<BoxedMatrix<T>> {
        Ok(Box::new(self.checked_add(other)?))
    }
}
