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

use crate::generic_vector::Vector;
use crate::traits::Numberish;

impl<T: Numberish, const N: usize> Vector<T, N> {
    /// Gets the component at index `I`, which is checked against `N`
    /// when compiling. This is the building block of [`swizzle!`](crate::swizzle).
    ///
    /// ```compile_fail
    /// use vector::Vector;
    /// let v = Vector::new([1, 2, 3]);
    /// let _ = v.at::<3>();
    /// ```
    #[inline]
    pub fn at<const I: usize>(&self) -> T {
        const { assert!(I < N, "swizzle: index out of range") };
        self.data[I]
    }

    /// Gets the first two components
    #[inline]
    pub fn xy(&self) -> Vector<T, 2> {
        Vector::new([self.at::<0>(), self.at::<1>()])
    }

    /// Gets the first three components
    #[inline]
    pub fn xyz(&self) -> Vector<T, 3> {
        Vector::new([self.at::<0>(), self.at::<1>(), self.at::<2>()])
    }

    /// Gets the first three components, as a colour
    #[cfg(feature = "rgba")]
    #[inline]
    pub fn rgb(&self) -> Vector<T, 3> {
        self.xyz()
    }

    /// Gets the first three components in reverse order
    #[cfg(feature = "rgba")]
    #[inline]
    pub fn bgr(&self) -> Vector<T, 3> {
        Vector::new([self.at::<2>(), self.at::<1>(), self.at::<0>()])
    }

    /// Gets the first three components in reverse order, followed by
    /// the fourth one
    #[cfg(feature = "rgba")]
    #[inline]
    pub fn bgra(&self) -> Vector<T, 4> {
        Vector::new([self.at::<2>(), self.at::<1>(), self.at::<0>(), self.at::<3>()])
    }

    /// Gets the first two texture coordinates
    #[cfg(feature = "stpq")]
    #[inline]
    pub fn st(&self) -> Vector<T, 2> {
        self.xy()
    }

    /// Gets the last two texture coordinates
    #[cfg(feature = "stpq")]
    #[inline]
    pub fn pq(&self) -> Vector<T, 2> {
        Vector::new([self.at::<2>(), self.at::<3>()])
    }
}

/// Gathers the components of a [`Vector`] at a list of indices,
/// producing a new `Vector` of as many components as indices are given.
///
/// Indices can be repeated and come in any order, but every one of
/// them must be smaller than the size of the source, which is checked
/// when compiling.
///
/// # Examples
///
/// ```
/// use vector::{swizzle, Vector};
///
/// let v = Vector::new([1, 2, 3, 4]);
/// assert_eq!(swizzle!(v, 3, 0), Vector::new([4, 1]));
/// assert_eq!(swizzle!(v, 2, 2, 2), Vector::new([3, 3, 3]));
/// ```
///
/// ```compile_fail
/// use vector::{swizzle, Vector};
/// let v = Vector::new([1, 2]);
/// let _ = swizzle!(v, 0, 2);
/// ```
#[macro_export]
macro_rules! swizzle {
    ( $v : expr, $($i : expr),+ $(,)? ) => {{
        let source = &$v;
        $crate::Vector::new([$(source.at::<{ $i }>()),+])
    }};
}
