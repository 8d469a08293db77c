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

use core::ops::{Index, IndexMut};

use num_traits::AsPrimitive;

use crate::traits::Numberish;

/// An ordered, fixed-length group of `N` numbers of type `T`.
///
/// Components are stored inline, so a `Vector` is a plain `Copy`
/// value: no heap, no sharing. Equality is exact and ordering is
/// lexicographic, the first differing component deciding.
///
/// # Example
///
/// ```
/// use vector::Vector;
///
/// let mut v = Vector::new([1, 2, 3]);
/// v[0] = 7;
/// assert_eq!(v.x(), 7);
/// assert!(Vector::new([1, 9, 9]) < Vector::new([2, 0, 0]));
/// ```
///
/// Vectors need at least one component
///
/// ```compile_fail
/// use vector::Vector;
/// let v: Vector<f32, 0> = Vector::zeros();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vector<T, const N: usize> {
    // The components, from `x` onwards.
    pub(crate) data: [T; N],
}

impl<T: Numberish, const N: usize> Vector<T, N> {
    /// Creates a `Vector` from its components
    #[inline]
    #[must_use]
    pub fn new(data: [T; N]) -> Self {
        const { assert!(N > 0, "a Vector needs at least one component") };
        Self { data }
    }

    /// Creates a `Vector` full of zeroes
    #[inline]
    #[must_use]
    pub fn zeros() -> Self {
        Self::new([T::zero(); N])
    }

    /// Creates a `Vector` with all of its components equal to `v`.
    ///
    /// Only available for more than one component; a single-component
    /// `Vector` is built with [`Vector::new`].
    ///
    /// ```compile_fail
    /// use vector::Vector;
    /// let v: Vector<f32, 1> = Vector::splat(2.0);
    /// ```
    #[inline]
    #[must_use]
    pub fn splat(v: T) -> Self {
        const { assert!(N > 1, "use Vector::new for single-component vectors") };
        Self::new([v; N])
    }

    /// Creates a `Vector` by copying the elements of a slice.
    ///
    /// Returns an error if the slice does not contain exactly `N` elements.
    pub fn from_slice(data: &[T]) -> Result<Self, String> {
        if data.len() != N {
            return Err(format!(
                "When creating Vector: expected {} components, found {}",
                N,
                data.len()
            ));
        }
        let mut ret = Self::zeros();
        ret.data.copy_from_slice(data);
        Ok(ret)
    }

    /// Converts every component into another numeric type, as the
    /// `as` keyword would.
    ///
    /// ```
    /// use vector::Vector;
    /// let v = Vector::new([1.7_f32, -2.2]);
    /// assert_eq!(v.cast::<i32>(), Vector::new([1, -2]));
    /// ```
    #[must_use]
    pub fn cast<U>(&self) -> Vector<U, N>
    where
        T: AsPrimitive<U>,
        U: Numberish,
    {
        Vector::new(self.data.map(|c| c.as_()))
    }

    /// Applies `f` to every component
    #[must_use]
    pub fn map<U: Numberish, F: FnMut(T) -> U>(self, f: F) -> Vector<U, N> {
        Vector::new(self.data.map(f))
    }

    /// The number of components, `N`
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        N
    }

    /// Gets a component, or `None` if `i` is out of range.
    #[inline]
    pub fn get(&self, i: usize) -> Option<T> {
        self.data.get(i).copied()
    }

    /// Borrows the components as an array
    #[inline]
    pub fn as_array(&self) -> &[T; N] {
        &self.data
    }

    /// Borrows the components as a mutable array
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.data
    }

    /// Borrows the components as a slice
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Borrows the components as a mutable slice
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterates over the components
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterates mutably over the components
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }
}

/// Writes a pair of accessors for the component at `$i`. Asking for a
/// component beyond `N` fails when the method is instantiated.
macro_rules! accessors {
    ($get : ident, $get_mut : ident, $set : ident, $i : literal, $name : literal) => {
        #[doc = concat!("Gets the ", $name, " component (index ", stringify!($i), ")")]
        #[inline]
        pub fn $get(&self) -> T {
            const { assert!($i < N, "this component does not exist in a Vector of this size") };
            self.data[$i]
        }

        #[doc = concat!("Borrows the ", $name, " component (index ", stringify!($i), ") mutably")]
        #[inline]
        pub fn $get_mut(&mut self) -> &mut T {
            const { assert!($i < N, "this component does not exist in a Vector of this size") };
            &mut self.data[$i]
        }

        #[doc = concat!("Sets the ", $name, " component (index ", stringify!($i), ")")]
        #[inline]
        pub fn $set(&mut self, v: T) {
            *self.$get_mut() = v;
        }
    };
}

/// Positional accessors.
///
/// `y` needs at least two components, `z` three and `w` four:
///
/// ```compile_fail
/// use vector::Vector;
/// let v = Vector::new([1.0, 2.0]);
/// let z = v.z();
/// ```
impl<T: Numberish, const N: usize> Vector<T, N> {
    accessors!(x, x_mut, set_x, 0, "first");
    accessors!(y, y_mut, set_y, 1, "second");
    accessors!(z, z_mut, set_z, 2, "third");
    accessors!(w, w_mut, set_w, 3, "fourth");
}

/// Colour accessors, aliases of `x`, `y`, `z` and `w`
#[cfg(feature = "rgba")]
impl<T: Numberish, const N: usize> Vector<T, N> {
    accessors!(r, r_mut, set_r, 0, "red");
    accessors!(g, g_mut, set_g, 1, "green");
    accessors!(b, b_mut, set_b, 2, "blue");
    accessors!(a, a_mut, set_a, 3, "alpha");
}

/// Texture coordinate accessors, aliases of `x`, `y`, `z` and `w`
#[cfg(feature = "stpq")]
impl<T: Numberish, const N: usize> Vector<T, N> {
    accessors!(s, s_mut, set_s, 0, "s");
    accessors!(t, t_mut, set_t, 1, "t");
    accessors!(p, p_mut, set_p, 2, "p");
    accessors!(q, q_mut, set_q, 3, "q");
}

impl<T: Numberish, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T: Numberish, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(data: [T; N]) -> Self {
        Self::new(data)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self {
        v.data
    }
}

impl<T: Numberish, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = String;

    fn try_from(data: &[T]) -> Result<Self, Self::Error> {
        Self::from_slice(data)
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(feature = "display")]
impl<T: core::fmt::Display, const N: usize> core::fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}
