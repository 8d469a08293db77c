/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use cgla::transform::{rotate_z, scale, translate};
use cgla::*;

const TINY: f64 = 1e-9;

fn samples3() -> Vec<Vector3d> {
    vec![
        Vector::new([1.0, 0.0, 0.0]),
        Vector::new([0.5, -2.0, 3.25]),
        Vector::new([-7.0, 1.5, 0.125]),
        Vector::new([3.0, 4.0, 12.0]),
    ]
}

fn samples_square() -> Vec<Matrix3d> {
    vec![
        Matrix::identity(),
        Matrix::from_rows([[2.0, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 4.0]]),
        Matrix::from_rows([[0.0, 1.0, 2.0], [1.0, 0.0, 3.0], [4.0, -3.0, 8.0]]),
        Matrix::from_scalar(-0.5),
    ]
}

fn mat_close<const M: usize, const N: usize>(a: &Matrix<f64, M, N>, b: &Matrix<f64, M, N>) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < TINY)
}

#[test]
fn equality_and_order_are_reflexive() {
    for v in samples3() {
        assert!(v == v);
        assert!(!(v < v));
        assert_eq!(v + (-v), Vector::zeros());
    }
    let w = Vector4i::new([1, -2, 3, -4]);
    assert!(w == w);
    assert!(!(w < w));
    assert_eq!(w + (-w), Vector4i::default());
}

#[test]
fn dot_and_cross_identities() {
    for u in samples3() {
        for v in samples3() {
            assert_eq!(dot(u, v), dot(v, u));
            assert_eq!(cross(u, v), -cross(v, u));
            assert!(dot(u, cross(u, v)).abs() < 1e-9 * (1.0 + u.length_squared() * v.length()));
        }
    }
}

#[test]
fn normalize_gives_unit_length() {
    let n = normalize(Vector2d::new([3.0, 4.0]));
    assert!((n.x() - 0.6).abs() < TINY);
    assert!((n.y() - 0.8).abs() < TINY);
    assert!((length(n) - 1.0).abs() < TINY);

    for v in samples3() {
        assert!((normalize(v).length() - 1.0).abs() < TINY);
    }
}

#[test]
fn lengths_and_distances() {
    for u in samples3() {
        assert_eq!(length_squared(u), dot(u, u));
        for v in samples3() {
            assert_eq!(distance(u, v), length(u - v));
            assert_eq!(distance_squared(u, v), length_squared(u - v));
        }
    }
}

#[test]
fn inverse_properties() {
    let eye = Matrix3d::identity();
    for a in samples_square() {
        assert!(mat_close(&(a * inverse(a)), &eye));
        assert!(mat_close(&inverse(inverse(a)), &a));
    }
}

#[test]
fn transpose_is_an_involution() {
    let a = Matrix2x3i::from_rows([[1, 2, 3], [4, 5, 6]]);
    assert_eq!(transpose(transpose(a)), a);
    for m in samples_square() {
        assert_eq!(transpose(transpose(m)), m);
    }
}

#[test]
fn identity_keeps_vectors() {
    assert_eq!(
        Matrix3f::from_scalar(1.0) * Vector3f::new([1.0, 2.0, 3.0]),
        Vector3f::new([1.0, 2.0, 3.0])
    );
    for v in samples3() {
        assert_eq!(Matrix3d::identity() * v, v);
    }
}

#[test]
fn transforms_on_points() {
    assert_eq!(
        translate(Vector3f::new([1.0, 2.0, 3.0])) * Vector4f::new([0.0, 0.0, 0.0, 1.0]),
        Vector4f::new([1.0, 2.0, 3.0, 1.0])
    );
    assert_eq!(
        scale(Vector3f::new([2.0, 3.0, 4.0])) * Vector4f::new([1.0, 1.0, 1.0, 1.0]),
        Vector4f::new([2.0, 3.0, 4.0, 1.0])
    );

    let r = rotate_z(std::f32::consts::FRAC_PI_2) * Vector4f::new([1.0, 0.0, 0.0, 1.0]);
    let exp = Vector4f::new([0.0, 1.0, 0.0, 1.0]);
    assert!(r.distance(&exp) < 1e-6);
}

#[test]
fn outer_product_shape_and_values() {
    let u = Vector3i::new([1, 2, 3]);
    let v = Vector2i::new([-1, 5]);
    let m: Matrix3x2i = outer_product(u, v);
    assert_eq!((m.nrows(), m.ncols()), (3, 2));
    for i in 0..3 {
        for j in 0..2 {
            assert_eq!(m[(i, j)], u[i] * v[j]);
        }
    }
}

#[test]
fn product_is_associative() {
    let a = Matrix2x3d::from_rows([[1.0, -2.0, 0.5], [3.0, 0.25, -1.0]]);
    let b = Matrix3x4d::from_rows([
        [0.5, 1.0, -1.0, 2.0],
        [1.5, 0.0, 3.0, -0.5],
        [-2.0, 1.0, 0.75, 1.0],
    ]);
    let c = Matrix4x2d::from_rows([[1.0, 0.0], [0.5, -1.0], [2.0, 3.0], [-1.5, 0.25]]);
    assert!(mat_close(&((a * b) * c), &(a * (b * c))));

    for x in samples_square() {
        for y in samples_square() {
            for z in samples_square() {
                assert!(mat_close(&((x * y) * z), &(x * (y * z))));
            }
        }
    }
}

#[test]
fn macros_through_the_facade() {
    let v = vector![1, 2, 3];
    assert_eq!(v, Vector3i::new([1, 2, 3]));
    assert_eq!(swizzle!(v, 2, 0), Vector2i::new([3, 1]));
}

#[test]
fn serde_through_the_facade() -> Result<(), String> {
    let m = Matrix2d::from_rows([[1.0, 2.0], [3.0, 4.0]]);
    let json = serde_json::to_string(&m).map_err(|e| e.to_string())?;
    let back: Matrix2d = serde_json::from_str(&json).map_err(|e| e.to_string())?;
    assert_eq!(m, back);
    Ok(())
}
