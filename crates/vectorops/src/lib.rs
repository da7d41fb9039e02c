//! Vector, matrix and rotation math on plain slices.
//!
//! This library does not define its own vector or matrix types. Vectors are slices of numbers,
//! matrices are slices of rows, and every operation returns a freshly allocated result. That makes
//! it easy to use with data coming from anywhere (arrays, `Vec`s, deserialized sequences), at the
//! cost of checking very little: most operations assume well-formed inputs and panic on
//! out-of-bounds accesses otherwise.
//!
//! Operations are generic over the element type via the traits in [`traits`]. Arithmetic works with
//! any built-in integer or floating-point type, while [`magnitude`], [`normalize`] and the rotation
//! conversions require `f32` or `f64`.
//!
//! # Coordinates
//!
//! Rotation matrices rotate column vectors (`v' = M * v`) in a right-handed coordinate system.
//! Quaternions are stored as `[w, x, y, z]`, Euler angles as `[azimuth, elevation, roll]` in
//! radians (see the [`rotation_matrix_to_euler`] docs for the exact convention).
//!
//! # Logging
//!
//! The crate emits `trace`-level [`log`] records for notable inputs, such as rejected matrix
//! products and matrices in gimbal lock. Applications can use [`init_logger!`] to get them printed.

mod error;
pub mod legacy;
mod matrix;
mod reshape;
mod rotation;
pub mod traits;
mod vector;

use log::LevelFilter;

pub use error::{Error, Result};
pub use matrix::*;
pub use reshape::*;
pub use rotation::*;
pub use traits::*;
pub use vector::*;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and this library will log at *debug* level. The `RUST_LOG` environment
/// variable is parsed afterwards and can override this, for example `RUST_LOG=vectorops=trace`.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
