//! Randomized checks of algebraic identities, plus comparisons against `nalgebra`.

use std::f64::consts::PI;

use approx::assert_abs_diff_eq;
use fastrand::Rng;
use nalgebra::{DMatrix, Rotation3, Unit, UnitQuaternion, Vector3};
use vectorops::*;

const ITERATIONS: usize = 500;
const EPSILON: f64 = 1e-9;

fn random_vector(rng: &mut Rng, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.f64() * 20.0 - 10.0).collect()
}

fn random_matrix(rng: &mut Rng, rows: usize, cols: usize) -> Vec<Vec<f64>> {
    (0..rows).map(|_| random_vector(rng, cols)).collect()
}

fn random_angle(rng: &mut Rng, max: f64) -> f64 {
    (rng.f64() * 2.0 - 1.0) * max
}

#[track_caller]
fn assert_slice_eq(a: &[f64], b: &[f64]) {
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(b) {
        assert_abs_diff_eq!(x, y, epsilon = EPSILON);
    }
}

#[track_caller]
fn assert_matrix_eq<A: AsRef<[f64]>, B: AsRef<[f64]>>(a: &[A], b: &[B]) {
    assert_eq!(a.len(), b.len());
    for (row_a, row_b) in a.iter().zip(b) {
        assert_slice_eq(row_a.as_ref(), row_b.as_ref());
    }
}

#[test]
fn vector_identities() {
    let mut rng = Rng::with_seed(0x6a09e667f3bcc908);
    for _ in 0..ITERATIONS {
        let len = rng.usize(1..8);
        let u = random_vector(&mut rng, len);
        let v = random_vector(&mut rng, len);

        assert_slice_eq(&add(&sub(&u, &v), &v), &u);
        assert_eq!(dot(&u, &v), dot(&v, &u));
        assert_abs_diff_eq!(magnitude(&normalize(&u)), 1.0, epsilon = EPSILON);
        assert_slice_eq(&mult(&u, 2.0), &add(&u, &u));
        assert_slice_eq(&elmult(&eldiv(&u, &v), &v), &u);
    }
}

#[test]
fn cross_product_identities() {
    let mut rng = Rng::with_seed(0xbb67ae8584caa73b);
    for _ in 0..ITERATIONS {
        let u = random_vector(&mut rng, 3);
        let v = random_vector(&mut rng, 3);

        let uv = cross(&u, &v);
        assert_slice_eq(&uv, &mult(&cross(&v, &u), -1.0));
        assert_abs_diff_eq!(dot(&u, &uv), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(dot(&v, &uv), 0.0, epsilon = 1e-6);

        let expected = Vector3::from_column_slice(&u).cross(&Vector3::from_column_slice(&v));
        assert_slice_eq(&uv, expected.as_slice());
    }
}

#[test]
fn matrix_identities() {
    let mut rng = Rng::with_seed(0x3c6ef372fe94f82b);
    for _ in 0..ITERATIONS / 10 {
        let rows = rng.usize(1..6);
        let cols = rng.usize(1..6);
        let a = random_matrix(&mut rng, rows, cols);

        let t: Vec<Vec<f64>> = transpose(&a);
        assert_eq!(transpose::<f64, _>(&t), a);
        assert_matrix_eq(&matrix_mult(&a, &identity::<f64>(cols)).unwrap(), &a);
        assert_matrix_eq(&matrix_mult(&identity::<f64>(rows), &a).unwrap(), &a);
        assert_eq!(unflatten(&flatten::<f64, _>(&a), rows, cols), a);

        let v = random_vector(&mut rng, rows);
        assert_slice_eq(
            &vector_matrix_mult(&v, &a).unwrap(),
            &matrix_vector_mult(&t, &v),
        );
    }
}

#[test]
fn matrix_products_match_nalgebra() {
    fn to_dmatrix(m: &[Vec<f64>]) -> DMatrix<f64> {
        DMatrix::from_fn(m.len(), m[0].len(), |row, col| m[row][col])
    }

    let mut rng = Rng::with_seed(0xa54ff53a5f1d36f1);
    for _ in 0..ITERATIONS / 10 {
        let (n, k, m) = (rng.usize(1..6), rng.usize(1..6), rng.usize(1..6));
        let a = random_matrix(&mut rng, n, k);
        let b = random_matrix(&mut rng, k, m);
        let v = random_vector(&mut rng, k);

        let product: Vec<Vec<f64>> = matrix_mult(&a, &b).unwrap();
        let expected = to_dmatrix(&a) * to_dmatrix(&b);
        for (row, values) in product.iter().enumerate() {
            for (col, value) in values.iter().enumerate() {
                assert_abs_diff_eq!(*value, expected[(row, col)], epsilon = EPSILON);
            }
        }

        let expected = to_dmatrix(&a) * DMatrix::from_column_slice(k, 1, &v);
        assert_slice_eq(&matrix_vector_mult(&a, &v), expected.as_slice());

        let reversed: Result<Vec<Vec<f64>>> = matrix_mult(&b, &a);
        if m == n {
            assert!(reversed.is_ok());
        } else {
            assert_eq!(
                reversed,
                Err(Error::DimensionMismatch {
                    vector_len: m,
                    rows: n
                })
            );
        }
    }
}

#[test]
fn euler_matches_nalgebra() {
    let mut rng = Rng::with_seed(0x510e527fade682d1);
    for _ in 0..ITERATIONS {
        let azimuth = random_angle(&mut rng, PI);
        let elevation = random_angle(&mut rng, PI / 2.0);
        let roll = random_angle(&mut rng, PI);

        let m = euler_to_rotation_matrix(&[azimuth, elevation, roll]);
        let expected = Rotation3::from_euler_angles(roll, elevation, azimuth);
        for row in 0..3 {
            for col in 0..3 {
                assert_abs_diff_eq!(m[row][col], expected[(row, col)], epsilon = EPSILON);
            }
        }
    }
}

#[test]
fn euler_round_trip() {
    let mut rng = Rng::with_seed(0x9b05688c2b3e6c1f);
    for _ in 0..ITERATIONS {
        let angles = [
            random_angle(&mut rng, PI),
            random_angle(&mut rng, PI / 2.0),
            random_angle(&mut rng, PI),
        ];

        let m = euler_to_rotation_matrix(&angles);
        let recovered = rotation_matrix_to_euler(&m);
        if angles[1].abs() < PI / 2.0 - 1e-3 {
            assert_slice_eq(&recovered, &angles);
        }
        // Angles near the gimbal lock can't be recovered exactly, but they must describe the same
        // rotation.
        assert_matrix_eq(&euler_to_rotation_matrix(&recovered), &m);
        assert_matrix_eq(
            &euler_to_rotation_matrix(&rotation_matrix_to_euler(&euler_to_rotation_matrix(
                &recovered,
            ))),
            &m,
        );
    }
}

#[test]
fn axis_angle_matches_rodrigues() {
    let mut rng = Rng::with_seed(0x1f83d9abfb41bd6b);
    for _ in 0..ITERATIONS {
        let axis = normalize(&random_vector(&mut rng, 3));
        let angle = random_angle(&mut rng, 2.0 * PI);
        let point = random_vector(&mut rng, 3);

        let m = axis_angle_to_rotation_matrix(&axis, angle);
        let rotated = matrix_vector_mult(&m, &point);

        let (sin, cos) = angle.sin_cos();
        let rodrigues = add(
            &add(&mult(&point, cos), &mult(&cross(&axis, &point), sin)),
            &mult(&axis, dot(&axis, &point) * (1.0 - cos)),
        );
        assert_slice_eq(&rotated, &rodrigues);

        let q = axis_angle_to_quaternion(&axis, angle);
        assert_matrix_eq(&quaternion_to_rotation_matrix(&q), &m);
        assert_abs_diff_eq!(magnitude(&q), 1.0, epsilon = EPSILON);
    }
}

#[test]
fn quaternion_matches_nalgebra() {
    let mut rng = Rng::with_seed(0x5be0cd19137e2179);
    for _ in 0..ITERATIONS {
        let axis = Unit::new_normalize(Vector3::from_column_slice(&random_vector(&mut rng, 3)));
        let angle = random_angle(&mut rng, PI);

        let expected = UnitQuaternion::from_axis_angle(&axis, angle);
        let q = axis_angle_to_quaternion(axis.as_slice(), angle);
        assert_slice_eq(&q, &[expected.w, expected.i, expected.j, expected.k]);

        let expected = expected.to_rotation_matrix();
        let m = quaternion_to_rotation_matrix(&mult(&q, 3.5));
        for row in 0..3 {
            for col in 0..3 {
                assert_abs_diff_eq!(m[row][col], expected[(row, col)], epsilon = EPSILON);
            }
        }
    }
}

#[test]
fn logging_does_not_interfere() {
    init_logger!();

    let m = euler_to_rotation_matrix(&[0.0, PI / 2.0, 0.0]);
    let angles = rotation_matrix_to_euler(&m);
    assert_eq!(angles[0], 0.0);
    assert_abs_diff_eq!(angles[1], PI / 2.0, epsilon = EPSILON);
    assert!(vector_matrix_mult(&[1.0], &m).is_err());
}
