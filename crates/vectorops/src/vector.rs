//! Vector arithmetic on slices.
//!
//! Binary operations iterate over the elements of their *first* operand and index into the second
//! one. Passing a second operand that is shorter than the first will panic, extra trailing elements
//! of the second operand are ignored.

use crate::traits::{Number, Sqrt};

/// Combines `u` and `v` element by element, driven by the length of `u`.
#[track_caller]
fn elementwise<T, F>(u: &[T], v: &[T], mut f: F) -> Vec<T>
where
    T: Copy,
    F: FnMut(T, T) -> T,
{
    u.iter().enumerate().map(|(i, &a)| f(a, v[i])).collect()
}

/// Returns the Euclidean length of `v`.
///
/// # Examples
///
/// ```
/// # use vectorops::*;
/// assert_eq!(magnitude(&[3.0, 4.0]), 5.0);
/// ```
pub fn magnitude<T: Number + Sqrt>(v: &[T]) -> T {
    dot(v, v).sqrt()
}

/// Element-wise sum of `u` and `v`.
///
/// # Panics
///
/// Panics if `v` has fewer elements than `u`.
#[track_caller]
pub fn add<T: Number>(u: &[T], v: &[T]) -> Vec<T> {
    elementwise(u, v, |a, b| a + b)
}

/// Element-wise difference of `u` and `v`.
///
/// # Panics
///
/// Panics if `v` has fewer elements than `u`.
#[track_caller]
pub fn sub<T: Number>(u: &[T], v: &[T]) -> Vec<T> {
    elementwise(u, v, |a, b| a - b)
}

/// Computes the dot product of `u` and `v`.
///
/// # Examples
///
/// ```
/// # use vectorops::*;
/// assert_eq!(dot(&[1, 3, -5], &[4, -2, -1]), 3);
/// ```
///
/// # Panics
///
/// Panics if `v` has fewer elements than `u`.
#[track_caller]
pub fn dot<T: Number>(u: &[T], v: &[T]) -> T {
    u.iter()
        .enumerate()
        .fold(T::ZERO, |acc, (i, &a)| acc + a * v[i])
}

/// Element-wise division of `u` by `v`.
///
/// Zero elements in `v` are not checked for: floating-point elements yield an infinity or `NaN`,
/// integer elements panic.
///
/// # Panics
///
/// Panics if `v` has fewer elements than `u`.
#[track_caller]
pub fn eldiv<T: Number>(u: &[T], v: &[T]) -> Vec<T> {
    elementwise(u, v, |a, b| a / b)
}

/// Element-wise product of `u` and `v`.
///
/// # Panics
///
/// Panics if `v` has fewer elements than `u`.
#[track_caller]
pub fn elmult<T: Number>(u: &[T], v: &[T]) -> Vec<T> {
    elementwise(u, v, |a, b| a * b)
}

/// Divides `v` by its length, resulting in a unit vector.
///
/// The zero vector is not special-cased and normalizes to all-`NaN`.
///
/// # Examples
///
/// ```
/// # use vectorops::*;
/// assert_eq!(normalize(&[0.0, 0.0, 4.0]), [0.0, 0.0, 1.0]);
/// ```
pub fn normalize<T: Number + Sqrt>(v: &[T]) -> Vec<T> {
    div(v, magnitude(v))
}

/// Computes the cross product of two 3-dimensional vectors.
///
/// Only the first 3 elements of each operand are read.
///
/// # Examples
///
/// ```
/// # use vectorops::*;
/// assert_eq!(cross(&[1, 0, 0], &[0, 1, 0]), [0, 0, 1]);
/// ```
///
/// # Panics
///
/// Panics if either operand has fewer than 3 elements.
#[track_caller]
pub fn cross<T: Number>(u: &[T], v: &[T]) -> [T; 3] {
    let (a1, a2, a3) = (u[0], u[1], u[2]);
    let (b1, b2, b3) = (v[0], v[1], v[2]);

    #[rustfmt::skip]
    let cross = [
        a2 * b3 - a3 * b2,
        a3 * b1 - a1 * b3,
        a1 * b2 - a2 * b1,
    ];
    cross
}

/// Multiplies every element of `u` by `c`.
pub fn mult<T: Number>(u: &[T], c: T) -> Vec<T> {
    u.iter().map(|&a| a * c).collect()
}

/// Divides every element of `u` by `c`.
pub fn div<T: Number>(u: &[T], c: T) -> Vec<T> {
    u.iter().map(|&a| a / c).collect()
}
