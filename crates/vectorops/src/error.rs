use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the checked matrix products.
///
/// Most operations in this crate do not validate their inputs: mismatched lengths cause a panic
/// from out-of-bounds indexing, and degenerate values propagate as `NaN` or infinities. The only
/// explicitly checked condition is the row count in [`vector_matrix_mult`][crate::vector_matrix_mult]
/// (and [`matrix_mult`][crate::matrix_mult], which is built on it).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("vector_matrix_mult mismatched rows: vector has {vector_len} elements, matrix has {rows} rows")]
    DimensionMismatch { vector_len: usize, rows: usize },
}
