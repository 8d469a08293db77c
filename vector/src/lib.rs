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

//! Fixed-size vectors for graphics and geometry code.
//!
//! A [`Vector<T, N>`] owns exactly `N` components of the numeric type `T`,
//! inline and on the stack. The size is part of the type, so adding a
//! 3-vector to a 4-vector, asking for the `z` of a 2-vector or building a
//! 4-vector out of five numbers does not compile.
//!
//! ## Quickstart
//!
//! ```
//! use vector::{cross, dot, normalize, Vector};
//!
//! let a = Vector::new([1.0, 0.0, 0.0]);
//! let b = Vector::new([0.0, 1.0, 0.0]);
//! assert_eq!(cross(a, b), Vector::new([0.0, 0.0, 1.0]));
//! assert_eq!(dot(a, b), 0.0);
//!
//! // Compose a 4-vector from a 3-vector and a scalar
//! let h: Vector<f64, 4> = Vector::compose((a, 1.0));
//! assert_eq!(h.w(), 1.0);
//!
//! let n = normalize(Vector::new([3.0_f64, 4.0]));
//! assert!((n.x() - 0.6).abs() < 1e-12);
//! ```
//!
//! ## What is not checked
//!
//! Operations that can only fail at runtime are not checked: dividing by
//! zero, normalizing a zero-length vector and similar follow the native
//! semantics of `T` (i.e., `inf` and `NaN` for floating point numbers).
//!
//! ## `f32` or `f64`?
//!
//! Lengths and distances of integer vectors are returned as [`Float`], which
//! is `f64` by default. Use the feature `float` to use `f32` instead.

/// The floating point type used for the lengths of integer vectors.
/// Defaults to `f64`... enable `f32` by using the `float` feature
#[cfg(not(feature = "float"))]
pub type Float = f64;

/// The floating point type used for the lengths of integer vectors.
/// Defaults to `f64`... enable `f32` by using the `float` feature
#[cfg(feature = "float")]
pub type Float = f32;

mod compose;
mod generic_vector;
mod geometric;
mod ops;
mod serialization;
mod swizzle;
/// Traits for the elements of vectors and matrices
pub mod traits;

#[cfg(test)]
mod test;

pub use compose::{ComponentList, Components};
pub use generic_vector::Vector;
pub use geometric::{cross, distance, distance_squared, dot, length, length_squared, normalize};
pub use traits::{Numberish, RealNumber};

/// A convenient way of defining a [`Vector`] from a list of components.
///
/// # Examples
///
/// ```
/// use vector::{vector, Vector};
/// let v = vector![1, 2, 3];
/// assert_eq!(v, Vector::new([1, 2, 3]));
/// ```
#[macro_export]
macro_rules! vector {
    ( $($e : expr),+ $(,)? ) => {
        $crate::Vector::new([$($e),+])
    };
}
