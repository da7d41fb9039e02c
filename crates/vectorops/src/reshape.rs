//! Conversions between flat sequences and matrices.

/// Builds a `rows`x`cols` matrix from the row-major elements in `flat`.
///
/// Elements beyond the first `rows * cols` are ignored.
///
/// # Examples
///
/// ```
/// # use vectorops::*;
/// assert_eq!(unflatten(&[1, 2, 3, 4, 5, 6], 2, 3), [[1, 2, 3], [4, 5, 6]]);
/// ```
///
/// # Panics
///
/// Panics if `flat` has fewer than `rows * cols` elements.
#[track_caller]
pub fn unflatten<T: Copy>(flat: &[T], rows: usize, cols: usize) -> Vec<Vec<T>> {
    (0..rows)
        .map(|row| (0..cols).map(|col| flat[row * cols + col]).collect())
        .collect()
}

/// Concatenates the rows of `a` into a single sequence.
pub fn flatten<T, R>(a: &[R]) -> Vec<T>
where
    T: Copy,
    R: AsRef<[T]>,
{
    a.iter()
        .flat_map(|row| row.as_ref().iter().copied())
        .collect()
}

/// Flattens `a` and keeps at most its first `limit` elements.
///
/// If `limit` is at least the total number of elements, the whole flattened sequence is returned.
///
/// # Examples
///
/// ```
/// # use vectorops::*;
/// let m = [[1, 2], [3, 4]];
/// assert_eq!(flatten_and_truncate(&m, 3), [1, 2, 3]);
/// assert_eq!(flatten_and_truncate(&m, 10), [1, 2, 3, 4]);
/// ```
pub fn flatten_and_truncate<T, R>(a: &[R], limit: usize) -> Vec<T>
where
    T: Copy,
    R: AsRef<[T]>,
{
    let mut flat = flatten(a);
    flat.truncate(limit);
    flat
}
