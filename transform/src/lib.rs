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

#![deny(missing_docs)]

//! Builders for the 4x4 homogeneous transformation matrices used in
//! 3D graphics: translations, scalings, rotations, cameras and
//! projections.
//!
//! Every transform acts on column vectors, so a point `p` (with `w = 1`)
//! is transformed as `m * p`, and `a * b` applies `b` first. Angles are
//! in radians.
//!
//! ```
//! use matrix::Matrix;
//! use transform::{rotate_z, translate};
//! use vector::Vector;
//!
//! let m = translate(Vector::new([1.0_f64, 0.0, 0.0])) * rotate_z(std::f64::consts::FRAC_PI_2);
//! let p = m * Vector::new([1.0, 0.0, 0.0, 1.0]);
//! assert!((p - Vector::new([1.0, 1.0, 0.0, 1.0])).length() < 1e-12);
//! ```

use matrix::Matrix;
use vector::{Numberish, RealNumber, Vector};

fn two<T: RealNumber>() -> T {
    T::one() + T::one()
}

/// Translates by `v`
pub fn translate<T: Numberish>(v: Vector<T, 3>) -> Matrix<T, 4, 4> {
    let mut ret = Matrix::identity();
    ret[12] = v.x();
    ret[13] = v.y();
    ret[14] = v.z();
    ret
}

/// Scales each axis by the matching component of `v`
pub fn scale<T: Numberish>(v: Vector<T, 3>) -> Matrix<T, 4, 4> {
    let mut ret = Matrix::identity();
    ret[0] = v.x();
    ret[5] = v.y();
    ret[10] = v.z();
    ret
}

/// Scales all three axes by `s`
pub fn scale_uniform<T: Numberish>(s: T) -> Matrix<T, 4, 4> {
    scale(Vector::splat(s))
}

/// Rotates `angle` radians around the X axis
pub fn rotate_x<T: RealNumber>(angle: T) -> Matrix<T, 4, 4> {
    let (s, c) = angle.sin_cos();
    let mut ret = Matrix::identity();
    ret[5] = c;
    ret[6] = s;
    ret[9] = -s;
    ret[10] = c;
    ret
}

/// Rotates `angle` radians around the Y axis
pub fn rotate_y<T: RealNumber>(angle: T) -> Matrix<T, 4, 4> {
    let (s, c) = angle.sin_cos();
    let mut ret = Matrix::identity();
    ret[0] = c;
    ret[2] = -s;
    ret[8] = s;
    ret[10] = c;
    ret
}

/// Rotates `angle` radians around the Z axis
pub fn rotate_z<T: RealNumber>(angle: T) -> Matrix<T, 4, 4> {
    let (s, c) = angle.sin_cos();
    let mut ret = Matrix::identity();
    ret[0] = c;
    ret[1] = s;
    ret[4] = -s;
    ret[5] = c;
    ret
}

/// Rotates `angle` radians around `axis`, following the right-hand rule.
///
/// The axis does not need to be normalized, but it cannot be zero
/// (that produces `NaN`s).
pub fn rotate<T: RealNumber>(angle: T, axis: Vector<T, 3>) -> Matrix<T, 4, 4> {
    let (s, c) = angle.sin_cos();
    let omc = T::one() - c;
    let a = axis.normalize();
    let (x, y, z) = (a.x(), a.y(), a.z());

    let mut ret = Matrix::zeros();
    ret[0] = c + x * x * omc;
    ret[1] = y * x * omc + z * s;
    ret[2] = z * x * omc - y * s;

    ret[4] = x * y * omc - z * s;
    ret[5] = c + y * y * omc;
    ret[6] = z * y * omc + x * s;

    ret[8] = x * z * omc + y * s;
    ret[9] = y * z * omc - x * s;
    ret[10] = c + z * z * omc;

    ret[15] = T::one();
    ret
}

/// Builds a view matrix for a camera placed at `eye` and looking at
/// `target`, with `up` pointing roughly upwards.
///
/// The camera looks down its own negative Z axis. `eye` and `target`
/// cannot be the same point, and `up` cannot be parallel to the
/// viewing direction.
pub fn look_at<T: RealNumber>(
    eye: Vector<T, 3>,
    target: Vector<T, 3>,
    up: Vector<T, 3>,
) -> Matrix<T, 4, 4> {
    let f = (eye - target).normalize();
    let s = up.cross(&f).normalize();
    let u = f.cross(&s);

    let mut ret = Matrix::zeros();
    ret[0] = s.x();
    ret[4] = s.y();
    ret[8] = s.z();

    ret[1] = u.x();
    ret[5] = u.y();
    ret[9] = u.z();

    ret[2] = f.x();
    ret[6] = f.y();
    ret[10] = f.z();

    ret[12] = -s.dot(&eye);
    ret[13] = -u.dot(&eye);
    ret[14] = -f.dot(&eye);
    ret[15] = T::one();
    ret
}

/// Orthographic projection of the box bounded by `left`, `right`,
/// `bottom`, `top`, `near` and `far` into the `[-1, 1]` cube
pub fn orthographic<T: RealNumber>(
    left: T,
    right: T,
    bottom: T,
    top: T,
    near: T,
    far: T,
) -> Matrix<T, 4, 4> {
    let two = two::<T>();
    let mut ret = Matrix::zeros();
    ret[0] = two / (right - left);
    ret[5] = two / (top - bottom);
    ret[10] = -two / (far - near);
    ret[12] = -(right + left) / (right - left);
    ret[13] = -(top + bottom) / (top - bottom);
    ret[14] = -(far + near) / (far - near);
    ret[15] = T::one();
    ret
}

/// Perspective projection of the frustum whose near plane is bounded
/// by `left`, `right`, `bottom` and `top`
pub fn frustum<T: RealNumber>(
    left: T,
    right: T,
    bottom: T,
    top: T,
    near: T,
    far: T,
) -> Matrix<T, 4, 4> {
    let two = two::<T>();
    let mut ret = Matrix::zeros();
    ret[0] = two * near / (right - left);
    ret[5] = two * near / (top - bottom);
    ret[8] = (right + left) / (right - left);
    ret[9] = (top + bottom) / (top - bottom);
    ret[10] = -(far + near) / (far - near);
    ret[11] = -T::one();
    ret[14] = -two * far * near / (far - near);
    ret
}

/// Perspective projection with a vertical field of view of `fovy`
/// radians and a width over height ratio of `aspect`
pub fn perspective<T: RealNumber>(fovy: T, aspect: T, near: T, far: T) -> Matrix<T, 4, 4> {
    let two = two::<T>();
    let inv_tan = T::one() / (fovy / two).tan();
    let mut ret = Matrix::zeros();
    ret[0] = inv_tan / aspect;
    ret[5] = inv_tan;
    ret[10] = -(far + near) / (far - near);
    ret[11] = -T::one();
    ret[14] = -two * far * near / (far - near);
    ret
}
