use linal_core::{
    BoxedMatrix, DenseMatrix, LinalCoreError, Matrix, Shape, StaticMatrix, StorageKind,
};

// Helper for comparing a matrix against expected row values
fn assert_cells_eq<T: linal_core::MatrixElement>(
    matrix: &dyn Matrix<Value = T>,
    expected: &[Vec<T>],
) {
    assert_eq!(matrix.rows(), expected.len(), "Row counts differ");
    for (row, expected_row) in expected.iter().enumerate() {
        assert_eq!(matrix.cols(), expected_row.len(), "Column counts differ");
        for (col, expected_value) in expected_row.iter().enumerate() {
            assert_eq!(
                matrix.get(row, col),
                *expected_value,
                "Mismatch at ({}, {})",
                row,
                col
            );
        }
    }
}

#[test]
fn test_dense_add_dense_floats() -> Result<(), LinalCoreError> {
    // 1. Setup operands
    let a = DenseMatrix::new(3, 2, vec![1.5, 2.0, 0.0, 1.0, 4.5, 3.0])?;
    let b = DenseMatrix::new(3, 2, vec![0.5, 1.0, 2.0, 3.0, 1.0, 1.0])?;

    // 2. Add
    let sum = a.checked_add(&b)?;

    // 3. Verify shape, strategy, and every element
    assert_eq!(sum.dims(), (3, 2));
    assert_eq!(sum.storage(), StorageKind::Dense);
    assert_cells_eq(
        &sum,
        &[vec![2.0, 3.0], vec![2.0, 4.0], vec![5.5, 4.0]],
    );
    Ok(())
}

#[test]
fn test_dense_add_dense_ints() -> Result<(), LinalCoreError> {
    let x = DenseMatrix::new(2, 3, vec![1, 2, 3, 4, 5, 6])?;
    let y = DenseMatrix::new(2, 3, vec![6, 5, 4, 3, 2, 1])?;

    let z = x.checked_add(&y)?;

    assert_cells_eq(&z, &[vec![7, 7, 7], vec![7, 7, 7]]);
    Ok(())
}

#[test]
fn test_add_never_mutates_operands() -> Result<(), LinalCoreError> {
    let a = DenseMatrix::new(2, 2, vec![1, 2, 3, 4])?;
    let b = StaticMatrix::from_rows([[10, 20], [30, 40]]);

    let _ = a.add(&b)?;

    assert_cells_eq(&a, &[vec![1, 2], vec![3, 4]]);
    assert_cells_eq(&b, &[vec![10, 20], vec![30, 40]]);
    Ok(())
}

#[test]
fn test_mixed_add_result_follows_left_operand() -> Result<(), LinalCoreError> {
    let s = StaticMatrix::from_rows([[1, 2], [3, 4]]);
    let d = DenseMatrix::new(2, 2, vec![4, 3, 2, 1])?;

    let static_first = s.add(&d)?;
    let dense_first = d.add(&s)?;

    assert_eq!(static_first.storage(), StorageKind::Static);
    assert_eq!(dense_first.storage(), StorageKind::Dense);
    assert_cells_eq(static_first.as_ref(), &[vec![5, 5], vec![5, 5]]);
    assert_cells_eq(dense_first.as_ref(), &[vec![5, 5], vec![5, 5]]);
    Ok(())
}

#[test]
fn test_add_commutes_in_value() -> Result<(), LinalCoreError> {
    // Seeded so the case is reproducible
    let mut rng = fastrand::Rng::with_seed(42);
    let rows = 8;
    let cols = 5;
    let mut a = DenseMatrix::<i64>::zeros(rows, cols);
    let mut b = DenseMatrix::<i64>::zeros(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            a.set(row, col, rng.i64(-1_000..1_000));
            b.set(row, col, rng.i64(-1_000..1_000));
        }
    }

    let ab = a.checked_add(&b)?;
    let ba = b.checked_add(&a)?;

    for row in 0..rows {
        for col in 0..cols {
            assert_eq!(ab.get(row, col), a.get(row, col) + b.get(row, col));
            assert_eq!(ab.get(row, col), ba.get(row, col));
        }
    }
    Ok(())
}

#[test]
fn test_add_shape_mismatch_yields_no_result() {
    let tall = DenseMatrix::<i32>::zeros(3, 2);
    let wide = DenseMatrix::<i32>::zeros(2, 3);

    let result = tall.add(&wide);

    assert!(result.is_err());
    match result.err().unwrap() {
        LinalCoreError::ShapeMismatch { left, right } => {
            assert_eq!(left, Shape::new(3, 2));
            assert_eq!(right, Shape::new(2, 3));
        }
        _ => panic!("Expected ShapeMismatch error"),
    }
}

#[test]
fn test_add_empty_matrices() -> Result<(), LinalCoreError> {
    let a = DenseMatrix::<f32>::zeros(0, 0);
    let b = DenseMatrix::<f32>::default();

    let sum = a.checked_add(&b)?;

    assert_eq!(sum.dims(), (0, 0));
    assert!(sum.render().is_empty());
    Ok(())
}

#[test]
fn test_boxed_result_outlives_operands() -> Result<(), LinalCoreError> {
    let sum: BoxedMatrix<i32> = {
        let a = DenseMatrix::new(2, 2, vec![1, 1, 1, 1])?;
        let b = StaticMatrix::from_rows([[2, 2], [2, 2]]);
        a.add(&b)?
    };

    // Operands are gone; the result is independently owned
    assert_cells_eq(sum.as_ref(), &[vec![3, 3], vec![3, 3]]);
    Ok(())
}

#[test]
fn test_moved_default_matrix_reports_empty() {
    let mut source = DenseMatrix::<f64>::default();
    let moved = std::mem::take(&mut source);

    assert_eq!(source.dims(), (0, 0));
    assert_eq!(moved.dims(), (0, 0));
    // Both drop cleanly at the end of the test
}
