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

//! Compile-time sized linear algebra for graphics and geometry code.
//!
//! This crate puts together the [`vector`], [`matrix`] and [`transform`]
//! crates:
//!
//! * [`Vector<T, N>`] holds `N` components of the numeric type `T`
//! * [`Matrix<T, M, N>`] holds `M` rows and `N` columns, stored column-major
//! * the functions in [`transform`] build 4x4 homogeneous transforms
//!
//! Sizes are part of the types, so mismatched shapes are compile errors.
//! Everything is `Copy` and lives on the stack.
//!
//! ```
//! use cgla::{inverse, transform, Matrix4d, Vector3d, Vector4d};
//!
//! let m: Matrix4d = transform::translate(Vector3d::new([1.0, 2.0, 3.0]));
//! let p = Vector4d::new([0.0, 0.0, 0.0, 1.0]);
//! assert_eq!(m * p, Vector4d::new([1.0, 2.0, 3.0, 1.0]));
//! assert_eq!(inverse(m) * (m * p), p);
//! ```
//!
//! ## Features
//!
//! * `display` (default): `Display` for vectors and matrices
//! * `aliases` (default): short names such as [`Vector3f`] or [`Matrix2x3i`]
//! * `rgba` and `stpq`: colour and texture coordinate accessors
//! * `float`: use `f32` instead of `f64` as [`Float`]

pub use matrix::{inverse, matrix_comp_mult, outer_product, transpose, Matrix};
pub use transform;
pub use vector::{
    cross, distance, distance_squared, dot, length, length_squared, normalize, swizzle,
    traits, vector, ComponentList, Components, Float, Numberish, RealNumber, Vector,
};

#[cfg(feature = "aliases")]
mod aliases;
#[cfg(feature = "aliases")]
pub use aliases::*;
