//! # Linal Core Library
//!
//! Provides shape-checked matrix value types with two storage strategies
//! (heap-backed and fixed-shape) and the polymorphic element-wise addition
//! protocol that works across any combination of them.

// Declare modules
pub mod dense_matrix;
pub mod element;
pub mod error;
pub mod shape;
pub mod static_matrix;
pub mod traits;

// Re-export public types
pub use dense_matrix::DenseMatrix;
pub use element::MatrixElement;
pub use error::{LinalCoreError, Result};
pub use shape::Shape;
pub use static_matrix::StaticMatrix;
pub use traits::{BoxedMatrix, Matrix, StorageKind};
