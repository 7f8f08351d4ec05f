use std::error::Error;
use std::io::Cursor;
use std::mem;

use linal_core::{BoxedMatrix, DenseMatrix, Matrix, StaticMatrix};
use linal_io::{read_dense, table_to_string};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    section("Heap-backed matrices (float)");
    let a = DenseMatrix::new(3, 2, vec![1.5, 2.0, 0.0, 1.0, 4.5, 3.0])?;
    // The second operand arrives through the stream reader
    let b = read_dense::<f64, _>(3, 2, Cursor::new(&b"0.5 1.0\n2.0 3.0\n1.0 1.0"[..]))?;
    println!("A =");
    print!("{}", table_to_string(&a));
    println!("B =");
    print!("{}", table_to_string(&b));
    let sum = a.checked_add(&b)?;
    println!("A + B =");
    print!("{}", table_to_string(&sum));

    section("Heap-backed matrices (integer)");
    let x = DenseMatrix::new(2, 3, vec![1, 2, 3, 4, 5, 6])?;
    let y = DenseMatrix::new(2, 3, vec![6, 5, 4, 3, 2, 1])?;
    let z = x.checked_add(&y)?;
    println!("X + Y =");
    print!("{}", table_to_string(&z));

    section("Mixed storage strategies");
    let s = StaticMatrix::from_rows([[1, 2], [3, 4]]);
    let d = DenseMatrix::new(2, 2, vec![4, 3, 2, 1])?;
    let static_first: BoxedMatrix<i32> = s.add(&d)?;
    let dense_first: BoxedMatrix<i32> = d.add(&s)?;
    println!("S + D is a {:?} result:", static_first.storage());
    print!("{}", table_to_string(static_first.as_ref()));
    println!("D + S is a {:?} result with the same values:", dense_first.storage());
    print!("{}", table_to_string(dense_first.as_ref()));

    section("Shape mismatch");
    let tall = DenseMatrix::<i32>::zeros(3, 2);
    let wide = DenseMatrix::<i32>::zeros(2, 3);
    match tall.add(&wide) {
        Ok(_) => println!("Unexpected result"),
        Err(err) => println!("Rejected: {err}"),
    }

    section("Ownership transfer");
    let mut source = DenseMatrix::new(2, 2, vec![9, 8, 7, 6])?;
    let moved = mem::take(&mut source);
    println!("Moved-from matrix reports {:?}", source.dims());
    println!("Moved-to matrix keeps the values:");
    print!("{}", table_to_string(&moved));
    drop(moved);
    drop(source);
    log::info!("All matrices released");

    Ok(())
}

fn section(title: &str) {
    println!("\n>> {title} <<\n");
}
