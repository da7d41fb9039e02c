//! Older names of some operations, kept so existing callers continue to work.
//!
//! Every item in this module is a plain re-export of the function it names, so they behave
//! identically.
//!
//! ```
//! use vectorops::legacy::*;
//!
//! let m = eulerToRotationMatrix3(&[0.0, 0.0, 0.0]);
//! assert_eq!(rotationMatrix3ToEuler(&m), [0.0, 0.0, 0.0]);
//! assert_eq!(mxmult(&m, &m)?, m);
//! # Ok::<_, vectorops::Error>(())
//! ```

pub use crate::matrix::{
    matrix_constant_mult as mxconstantmult, matrix_mult as matrixmult, matrix_mult as mxmult,
    matrix_vector_mult as mxvectormult, vector_matrix_mult as vectormatrixmult,
    vector_matrix_mult as vectormxmult,
};
pub use crate::rotation::{
    axis_angle_to_quaternion as axisAngleToQuaternion,
    axis_angle_to_rotation_matrix as axisAngleToRotationMatrix,
    euler_to_rotation_matrix as eulerToRotationMatrix3, quaternion_to_rotation_matrix as rotmx,
    rotation_matrix_to_euler as rotationMatrix3ToEuler,
};
