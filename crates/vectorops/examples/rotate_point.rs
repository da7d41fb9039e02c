//! Rotates a point given on the command line by a set of Euler angles.
//!
//! Usage: `rotate_point <x> <y> <z> <azimuth> <elevation> <roll>` (angles in degrees).

use anyhow::{bail, Context};
use vectorops::*;

fn main() -> anyhow::Result<()> {
    vectorops::init_logger!();

    let args = std::env::args()
        .skip(1)
        .map(|arg| {
            arg.parse::<f64>()
                .with_context(|| format!("invalid number '{arg}'"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    if args.len() != 6 {
        eprintln!("usage: rotate_point <x> <y> <z> <azimuth> <elevation> <roll>");
        std::process::exit(1);
    }

    let (point, angles) = args.split_at(3);
    let angles = angles.iter().map(|deg| deg.to_radians()).collect::<Vec<_>>();

    let m = euler_to_rotation_matrix(&angles);
    let rotated = matrix_vector_mult(&m, point);
    println!("rotation matrix: {m:?}");
    println!("rotated point: {rotated:?}");

    // Rotating back with the transpose has to restore the original point.
    let restored = vector_matrix_mult(&rotated, &m)?;
    if magnitude(&sub(&restored, point)) > 1e-9 * magnitude(point).max(1.0) {
        bail!("inverse rotation did not restore the point: {restored:?}");
    }

    let recovered = rotation_matrix_to_euler(&m);
    let degrees = recovered.map(f64::to_degrees);
    println!("recovered angles (deg): {degrees:?}");

    Ok(())
}
