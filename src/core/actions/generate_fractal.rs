use rayon::prelude::*;

use crate::core::actions::ports::FractalAlgorithm;
use crate::core::data::point::Point;

/// Runs the algorithm over every pixel on the calling thread, row-major.
///
/// Kept as the reference implementation the parallel generator is checked
/// against.
pub fn generate_fractal_serial<Alg>(algorithm: &Alg) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm,
{
    let mut results =
        Vec::with_capacity(algorithm.width() as usize * algorithm.height() as usize);

    for y in 0..algorithm.height() {
        for x in 0..algorithm.width() {
            results.push(algorithm.compute(Point { x, y })?);
        }
    }

    Ok(results)
}

/// Runs the algorithm with one rayon task per row, returning results in
/// row-major order. The first failure aborts the remaining work.
pub fn generate_fractal_parallel<Alg>(algorithm: &Alg) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let width = algorithm.width() as usize;

    let rows: Result<Vec<Vec<Alg::Success>>, Alg::Failure> = (0..algorithm.height())
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(width);

            for x in 0..algorithm.width() {
                row.push(algorithm.compute(Point { x, y })?);
            }

            Ok(row)
        })
        .collect();

    rows.map(|rows| rows.into_iter().flatten().collect())
}
