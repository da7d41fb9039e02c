//! Conversions between rotation representations.
//!
//! All rotation matrices are row-major 3x3 matrices that rotate a column vector by
//! pre-multiplying it: `v' = M * v`. Positive angles rotate according to the right-hand rule.
//!
//! Supported representations:
//!
//! - Quaternions `[w, x, y, z]`, which don't have to be normalized.
//! - Axis-angle pairs, consisting of a unit axis and an angle in radians.
//! - Euler angles `[azimuth, elevation, roll]` in radians. The corresponding rotation matrix is the
//!   product `Rz(azimuth) * Ry(elevation) * Rx(roll)`, so a vector is rotated about X first, then
//!   about Y, then about Z.

use crate::{
    traits::Float,
    vector::{div, magnitude},
};

/// Degeneracy threshold used by [`rotation_matrix_to_euler`].
///
/// Matrix entries whose magnitude does not exceed this value are treated as zero when picking
/// the decomposition branch.
pub const MATRIX_TO_EULER_TOLERANCE: f64 = 1.0e-12;

fn two<T: Float>() -> T {
    T::ONE + T::ONE
}

/// Converts a quaternion `[w, x, y, z]` into a 3x3 rotation matrix.
///
/// The quaternion is normalized first, so any non-zero scaling of a unit quaternion results in
/// the same matrix. The zero quaternion yields a matrix full of `NaN`s.
///
/// # Examples
///
/// ```
/// # use vectorops::*;
/// let m = quaternion_to_rotation_matrix(&[2.0, 0.0, 0.0, 0.0]);
/// assert_eq!(m, [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
/// ```
///
/// # Panics
///
/// Panics if `quaternion` does not have exactly 4 elements.
#[track_caller]
pub fn quaternion_to_rotation_matrix<T: Float>(quaternion: &[T]) -> [[T; 3]; 3] {
    assert_eq!(
        quaternion.len(),
        4,
        "quaternion must have exactly 4 elements"
    );
    let norm_q = div(quaternion, magnitude(quaternion));
    let [qw, qx, qy, qz] = [norm_q[0], norm_q[1], norm_q[2], norm_q[3]];
    let two = two::<T>();

    #[rustfmt::skip]
    let mx = [
        [
            qw * qw + qx * qx - qy * qy - qz * qz,
            two * qx * qy - two * qw * qz,
            two * qx * qz + two * qw * qy,
        ],
        [
            two * qx * qy + two * qw * qz,
            qw * qw - qx * qx + qy * qy - qz * qz,
            two * qy * qz - two * qw * qx,
        ],
        [
            two * qx * qz - two * qw * qy,
            two * qy * qz + two * qw * qx,
            qw * qw - qx * qx - qy * qy + qz * qz,
        ],
    ];
    mx
}

/// Converts Euler angles `[azimuth, elevation, roll]` into a 3x3 rotation matrix.
///
/// The result is `Rz(azimuth) * Ry(elevation) * Rx(roll)`, computed in closed form.
///
/// # Examples
///
/// ```
/// # use vectorops::*;
/// let m = euler_to_rotation_matrix(&[0.0, 0.0, 0.0]);
/// assert_eq!(m, [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
/// ```
///
/// # Panics
///
/// Panics if `euler_angles` has fewer than 3 elements.
#[track_caller]
pub fn euler_to_rotation_matrix<T: Float>(euler_angles: &[T]) -> [[T; 3]; 3] {
    let (sin_azimuth, cos_azimuth) = euler_angles[0].sin_cos();
    let (sin_elevation, cos_elevation) = euler_angles[1].sin_cos();
    let (sin_roll, cos_roll) = euler_angles[2].sin_cos();

    [
        [
            cos_azimuth * cos_elevation,
            cos_azimuth * sin_elevation * sin_roll - sin_azimuth * cos_roll,
            cos_azimuth * sin_elevation * cos_roll + sin_azimuth * sin_roll,
        ],
        [
            sin_azimuth * cos_elevation,
            sin_azimuth * sin_elevation * sin_roll + cos_azimuth * cos_roll,
            sin_azimuth * sin_elevation * cos_roll - cos_azimuth * sin_roll,
        ],
        [
            -sin_elevation,
            cos_elevation * sin_roll,
            cos_elevation * cos_roll,
        ],
    ]
}

/// Decomposes a rotation matrix into Euler angles `[azimuth, elevation, roll]`.
///
/// This is the inverse of [`euler_to_rotation_matrix`], using [`MATRIX_TO_EULER_TOLERANCE`] to
/// detect degenerate matrices. See [`rotation_matrix_to_euler_with_tolerance`] for details.
///
/// # Panics
///
/// Panics if `matrix` is smaller than 3x3.
#[track_caller]
pub fn rotation_matrix_to_euler<T, R>(matrix: &[R]) -> [T; 3]
where
    T: Float,
    R: AsRef<[T]>,
{
    rotation_matrix_to_euler_with_tolerance(matrix, T::from_f64(MATRIX_TO_EULER_TOLERANCE))
}

/// Decomposes a rotation matrix into Euler angles `[azimuth, elevation, roll]`, treating entries
/// with a magnitude of at most `tolerance` as zero.
///
/// If `m[0][0]` is non-zero, the azimuth and roll are read off the first column and the last row,
/// and the elevation is recovered from `m[0][0]`. If it is zero but `m[0][1]` is not, the
/// elevation is recovered from `m[1][0]` instead. If both are zero, the matrix is in gimbal lock:
/// the azimuth is fixed at 0, the elevation becomes ±π/2 and the whole remaining rotation is
/// expressed as roll.
///
/// The matrix is assumed to be a proper rotation matrix; other matrices produce meaningless
/// angles.
///
/// # Panics
///
/// Panics if `matrix` is smaller than 3x3.
#[track_caller]
pub fn rotation_matrix_to_euler_with_tolerance<T, R>(matrix: &[R], tolerance: T) -> [T; 3]
where
    T: Float,
    R: AsRef<[T]>,
{
    let m = |row: usize, col: usize| matrix[row].as_ref()[col];

    if m(0, 0).abs() > tolerance {
        let azimuth = m(1, 0).atan2(m(0, 0));
        let roll = m(2, 1).atan2(m(2, 2));
        let elevation = (-m(2, 0)).atan2(m(0, 0) / azimuth.cos());
        [azimuth, elevation, roll]
    } else if m(0, 1).abs() > tolerance {
        let azimuth = m(1, 0).atan2(m(0, 0));
        let roll = m(2, 1).atan2(m(2, 2));
        let elevation = (-m(2, 0)).atan2(m(1, 0) / azimuth.sin());
        [azimuth, elevation, roll]
    } else {
        log::trace!("rotation matrix is in gimbal lock, fixing azimuth at 0");
        let elevation = (-m(2, 0)).atan2(T::ZERO);
        let azimuth = T::ZERO;
        let roll = (-m(1, 2)).atan2(-m(0, 2) * m(2, 0));
        [azimuth, elevation, roll]
    }
}

/// Converts a rotation of `angle` radians about the unit vector `axis` into a quaternion
/// `[w, x, y, z]`.
///
/// `axis` is used as-is: passing a non-unit axis results in a non-unit quaternion.
///
/// # Examples
///
/// ```
/// # use vectorops::*;
/// use std::f64::consts::PI;
///
/// let q = axis_angle_to_quaternion(&[0.0, 0.0, 1.0], PI);
/// assert!(q[0].abs() < 1e-15);
/// assert_eq!(q[1..], [0.0, 0.0, 1.0]);
/// ```
///
/// # Panics
///
/// Panics if `axis` has fewer than 3 elements.
#[track_caller]
pub fn axis_angle_to_quaternion<T: Float>(axis: &[T], angle: T) -> [T; 4] {
    let (sin_half_angle, cos_half_angle) = (angle / two()).sin_cos();
    [
        cos_half_angle,
        axis[0] * sin_half_angle,
        axis[1] * sin_half_angle,
        axis[2] * sin_half_angle,
    ]
}

/// Converts a rotation of `angle` radians about the unit vector `axis` into a 3x3 rotation matrix.
///
/// # Panics
///
/// Panics if `axis` has fewer than 3 elements.
#[track_caller]
pub fn axis_angle_to_rotation_matrix<T: Float>(axis: &[T], angle: T) -> [[T; 3]; 3] {
    quaternion_to_rotation_matrix(&axis_angle_to_quaternion(axis, angle))
}
