//! Walks the container types end to end: builds a matrix, aliases rows and
//! columns through views, and runs the free reductions.
//!
//! Run with `cargo run --example views`.

use anyhow::Result;

use lamina::config::CheckProfile;
use lamina::vector::{dot, ColVector, RowVector, Vector};
use lamina::Matrix;

fn main() -> Result<()> {
    env_logger::init();

    println!("check profile: {}", CheckProfile::active());

    let m = Matrix::from_shape_vec((3, 3), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0])?;
    println!("matrix:\n{}", m);

    let diag_sum: f64 = (0..3).map(|i| m.at(i, i).unwrap_or(0.0)).sum();
    println!("trace: {}", diag_sum);

    let row = m.row(0)?;
    let col = m.col(2)?;
    println!("row 0 sum: {}", row.sum());
    println!("col 2 prod: {}", col.prod());
    println!("row 0 . col 2 = {}", dot(&row, &col)?);

    // Writes through a view land in the parent.
    row.set(0, 10.0)?;
    println!("after view write, m[0,0] = {}", m.at(0, 0)?);

    // Casting snapshots a view into an owned vector of another element type.
    let ints = RowVector::from_vec(vec![1i32, 2, 3]);
    let floats: ColVector<f64> = ColVector::cast(&ints);
    println!("cast {:?} -> {}", ints, floats);

    Ok(())
}
