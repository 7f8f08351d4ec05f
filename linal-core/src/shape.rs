use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LinalCoreError, Result};

/// Row and column extent of a matrix.
///
/// Fixed when the owning matrix is constructed; there is no reshape
/// operation. Degenerate shapes (0x0, 0xN, Nx0) are valid and address
/// zero elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Shape { rows, cols }
    }

    /// Returns the number of addressable elements.
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks whether (row, col) addresses an element of this shape.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Returns the row-major offset of (row, col).
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Validates that `other` equals this shape.
    ///
    /// Addition is defined only between equally shaped operands. The check
    /// compares shapes alone, never the operands' storage strategies.
    pub fn ensure_matches(&self, other: Shape) -> Result<Shape> {
        if *self == other {
            Ok(*self)
        } else {
            log::warn!("Incompatible shapes for addition: {} vs {}", self, other);
            Err(LinalCoreError::ShapeMismatch {
                left: *self,
                right: other,
            })
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
