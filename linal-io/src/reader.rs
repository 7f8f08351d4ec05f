use std::io::BufRead;
use std::str::FromStr;

use linal_core::{DenseMatrix, Matrix, MatrixElement};

use crate::error::{LinalIoError, Result};

/// Fills `matrix` from whitespace-separated tokens in row-major order.
///
/// Exactly `rows * cols` tokens are consumed; input past that point is
/// ignored. Values are stored through the capability interface, so any
/// matrix implementation can be loaded this way.
pub fn fill_from_tokens<T, R>(matrix: &mut dyn Matrix<Value = T>, reader: R) -> Result<()>
where
    T: MatrixElement + FromStr,
    R: BufRead,
{
    let (rows, cols) = matrix.dims();
    let expected = rows * cols;
    let mut filled = 0;

    for line in reader.lines() {
        let line = line?;
        for token in line.split_whitespace() {
            if filled == expected {
                log::debug!("Ignoring input past the first {} tokens", expected);
                return Ok(());
            }
            let row = filled / cols;
            let col = filled % cols;
            let value = token.parse::<T>().map_err(|_| LinalIoError::Parse {
                row,
                col,
                token: token.to_string(),
            })?;
            matrix.set(row, col, value);
            filled += 1;
        }
    }

    if filled != expected {
        return Err(LinalIoError::UnexpectedEof {
            expected,
            found: filled,
        });
    }
    log::debug!("Loaded {} values into a {}x{} matrix", filled, rows, cols);
    Ok(())
}

/// Reads a freshly allocated `rows x cols` heap-backed matrix from
/// whitespace-separated tokens.
pub fn read_dense<T, R>(rows: usize, cols: usize, reader: R) -> Result<DenseMatrix<T>>
where
    T: MatrixElement + FromStr,
    R: BufRead,
{
    let mut matrix = DenseMatrix::zeros(rows, cols);
    fill_from_tokens(&mut matrix, reader)?;
    Ok(matrix)
}
