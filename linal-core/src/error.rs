use thiserror::Error;

use crate::shape::Shape;

pub type Result<T> = core::result::Result<T, LinalCoreError>;

#[derive(Error, Debug)]
pub enum LinalCoreError {
    #[error("Invalid matrix dimensions: {0}")]
    InvalidDimensions(String),

    #[error("Incompatible shapes for addition: {left} vs {right}")]
    ShapeMismatch { left: Shape, right: Shape },
}
