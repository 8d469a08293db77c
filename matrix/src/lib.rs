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

//! A Library for fixed-size Matrix operations.
//!
//! A [`Matrix<T, M, N>`] has `M` rows and `N` columns of a numeric type
//! `T` (see [`Numberish`]), all of them known when compiling. It is
//! stored column-major, as `N` column [`Vector`]s of `M` components, so
//! the linear index of the element at row `i` and column `j` is
//! `j * M + i`.
//!
//! Shapes are part of the type: multiplying a `2x3` matrix by a `2x3`
//! matrix, or inverting a non-square one, does not compile.
//!
//! ```
//! use matrix::{inverse, Matrix};
//! use vector::Vector;
//!
//! let a = Matrix::from_rows([
//!     [2.0, 0.0, 0.0],
//!     [0.0, 4.0, 0.0],
//!     [0.0, 0.0, 8.0],
//! ]);
//! let v = Vector::new([1.0, 1.0, 1.0]);
//! assert_eq!(a * v, Vector::new([2.0, 4.0, 8.0]));
//! assert_eq!(inverse(a) * (a * v), v);
//! ```
//!
//! # Runtime errors are not reported
//!
//! There is no error channel in the arithmetic. Inverting a singular
//! matrix divides by zero and returns a matrix full of `inf` and `NaN`,
//! in the same way that dividing by a zero scalar does. Check the result
//! (e.g., with `iter().all(|x| x.is_finite())`) when singular input is
//! possible.

mod generic_matrix;
mod linalg;
mod ops;
mod serialization;


pub use generic_matrix::Matrix;
pub use linalg::{inverse, matrix_comp_mult, outer_product, transpose};
pub use vector::{Float, Numberish, RealNumber, Vector};
