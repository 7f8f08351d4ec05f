use std::io::{self, Write};

use linal_core::{Matrix, MatrixElement};

/// Writes the matrix as a pipe-delimited grid, one line per row.
pub fn write_table<T, W>(matrix: &dyn Matrix<Value = T>, out: &mut W) -> io::Result<()>
where
    T: MatrixElement,
    W: Write,
{
    for line in matrix.render() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Renders the matrix as one owned string, one line per row.
pub fn table_to_string<T: MatrixElement>(matrix: &dyn Matrix<Value = T>) -> String {
    let mut out = String::new();
    for line in matrix.render() {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use linal_core::{DenseMatrix, StaticMatrix};

    use crate::writer::{table_to_string, write_table};

    #[test]
    fn test_write_table_floats() {
        let matrix = DenseMatrix::new(3, 2, vec![2.0, 3.0, 2.0, 4.0, 5.5, 4.0]).unwrap();
        let mut out = Vec::new();
        write_table(&matrix, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "| 2.0 | 3.0 |\n| 2.0 | 4.0 |\n| 5.5 | 4.0 |\n");
    }

    #[test]
    fn test_table_to_string_ints() {
        let matrix = StaticMatrix::from_rows([[7, 7, 7], [7, 7, 7]]);
        assert_eq!(
            table_to_string(&matrix),
            "| 7 | 7 | 7 |\n| 7 | 7 | 7 |\n"
        );
    }

    #[test]
    fn test_table_to_string_empty() {
        let matrix = DenseMatrix::<f32>::default();
        assert_eq!(table_to_string(&matrix), "");
    }
}
