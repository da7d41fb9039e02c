//! Matrix operations.
//!
//! Matrices are sequences of rows: the first index selects the row, the second one the column.
//! Any slice of rows that can be viewed as `&[T]` is accepted, so `Vec<Vec<T>>`, `[[T; C]; R]` and
//! `&[&[T]]` all work as inputs. Results are always freshly allocated `Vec<Vec<T>>`s.

use crate::{
    error::{Error, Result},
    traits::{Number, One, Zero},
    vector::{dot, mult},
};

/// Multiplies every element of `m` by the constant `c`.
pub fn matrix_constant_mult<T, R>(m: &[R], c: T) -> Vec<Vec<T>>
where
    T: Number,
    R: AsRef<[T]>,
{
    m.iter().map(|row| mult(row.as_ref(), c)).collect()
}

/// Post-multiplies the matrix `m` by the column vector `v` (`m * v`).
///
/// Element `i` of the result is the dot product of row `i` of `m` with `v`.
///
/// # Examples
///
/// ```
/// # use vectorops::*;
/// let m = [
///     [0, 1],
///     [2, 3],
/// ];
/// assert_eq!(matrix_vector_mult(&m, &[4, 5]), [5, 23]);
/// ```
///
/// # Panics
///
/// Panics if `v` has fewer elements than a row of `m`.
#[track_caller]
pub fn matrix_vector_mult<T, R>(m: &[R], v: &[T]) -> Vec<T>
where
    T: Number,
    R: AsRef<[T]>,
{
    m.iter().map(|row| dot(row.as_ref(), v)).collect()
}

/// Pre-multiplies the matrix `m` by the row vector `v` (`v * m`).
///
/// The number of columns is taken from the first row of `m`. An empty `v` times an empty `m` has
/// no columns and results in `Ok` with an empty vector.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if the length of `v` differs from the number of rows of
/// `m`. This is the only operation in the crate that validates its input dimensions.
///
/// # Examples
///
/// ```
/// # use vectorops::*;
/// let m = [
///     [1, 2, 3],
///     [4, 5, 6],
/// ];
/// assert_eq!(vector_matrix_mult(&[1, 10], &m)?, [41, 52, 63]);
/// assert!(vector_matrix_mult(&[1, 10, 100], &m).is_err());
/// # Ok::<_, vectorops::Error>(())
/// ```
///
/// # Panics
///
/// Panics if a row of `m` is shorter than the first row.
#[track_caller]
pub fn vector_matrix_mult<T, R>(v: &[T], m: &[R]) -> Result<Vec<T>>
where
    T: Number,
    R: AsRef<[T]>,
{
    let rows = m.len();
    if v.len() != rows {
        log::trace!(
            "vector_matrix_mult: vector of length {} does not match {} matrix rows",
            v.len(),
            rows
        );
        return Err(Error::DimensionMismatch {
            vector_len: v.len(),
            rows,
        });
    }

    let columns = m.first().map_or(0, |row| row.as_ref().len());
    let result = (0..columns)
        .map(|col| {
            v.iter()
                .zip(m)
                .fold(T::ZERO, |acc, (&elem, row)| acc + elem * row.as_ref()[col])
        })
        .collect();
    Ok(result)
}

/// Multiplies the matrices `a` and `b` (`a * b`).
///
/// Each row of `a` is passed through [`vector_matrix_mult`] against `b`.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if the number of columns of `a` does not match the number
/// of rows of `b`.
///
/// # Examples
///
/// ```
/// # use vectorops::*;
/// let a = [
///     [1, 2],
///     [3, 4],
/// ];
/// let b = [
///     [5, 6],
///     [7, 8],
/// ];
/// assert_eq!(matrix_mult(&a, &b)?, [[19, 22], [43, 50]]);
/// # Ok::<_, vectorops::Error>(())
/// ```
pub fn matrix_mult<T, A, B>(a: &[A], b: &[B]) -> Result<Vec<Vec<T>>>
where
    T: Number,
    A: AsRef<[T]>,
    B: AsRef<[T]>,
{
    a.iter()
        .map(|row| vector_matrix_mult(row.as_ref(), b))
        .collect()
}

/// Swaps the rows and columns of `a`.
///
/// `a` does not have to be square. If the rows have different lengths, the result is cut off at
/// the length of the shortest row.
///
/// # Examples
///
/// ```
/// # use vectorops::*;
/// let m = [
///     [0, 1, 2],
///     [3, 4, 5],
/// ];
/// let t: Vec<Vec<i32>> = transpose(&m);
/// assert_eq!(t, [
///     [0, 3],
///     [1, 4],
///     [2, 5],
/// ]);
/// ```
pub fn transpose<T, R>(a: &[R]) -> Vec<Vec<T>>
where
    T: Copy,
    R: AsRef<[T]>,
{
    let columns = a.iter().map(|row| row.as_ref().len()).min().unwrap_or(0);
    (0..columns)
        .map(|col| a.iter().map(|row| row.as_ref()[col]).collect())
        .collect()
}

/// Creates an `n`x`n` identity matrix.
///
/// The matrix has the value 1 on its diagonal and 0 everywhere else.
pub fn identity<T: Zero + One + Copy>(n: usize) -> Vec<Vec<T>> {
    (0..n)
        .map(|row| {
            (0..n)
                .map(|col| if row == col { T::ONE } else { T::ZERO })
                .collect()
        })
        .collect()
}
