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

/// Something that contributes a fixed number of components when
/// composing a [`Vector`]: a scalar contributes one, an array or a
/// `Vector` contributes all of its elements.
pub trait Components<T> {
    /// The number of components contributed
    const COUNT: usize;

    /// Writes the components at the beginning of `out`, which
    /// is exactly `COUNT` elements long.
    fn write_components(&self, out: &mut [T]);
}

macro_rules! impl_scalar_components {
    ($($t : ty),+) => {
        $(
            impl Components<$t> for $t {
                const COUNT: usize = 1;

                #[inline]
                fn write_components(&self, out: &mut [$t]) {
                    out[0] = *self;
                }
            }
        )+
    };
}

impl_scalar_components!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<T: Numberish, const M: usize> Components<T> for Vector<T, M> {
    const COUNT: usize = M;

    #[inline]
    fn write_components(&self, out: &mut [T]) {
        out.copy_from_slice(&self.data);
    }
}

impl<T: Numberish, const M: usize> Components<T> for [T; M] {
    const COUNT: usize = M;

    #[inline]
    fn write_components(&self, out: &mut [T]) {
        out.copy_from_slice(self);
    }
}

/// A tuple of [`Components`] to be laid one after the other
/// when composing a [`Vector`].
pub trait ComponentList<T> {
    /// The total number of components in the tuple
    const COUNT: usize;

    /// Writes all the components into `out`, which is exactly
    /// `COUNT` elements long.
    fn write_components(&self, out: &mut [T]);
}

macro_rules! impl_component_list {
    ($($part : ident . $idx : tt),+) => {
        impl<T, $($part: Components<T>),+> ComponentList<T> for ($($part,)+) {
            const COUNT: usize = 0 $(+ <$part as Components<T>>::COUNT)+;

            fn write_components(&self, out: &mut [T]) {
                let mut start = 0;
                $(
                    let end = start + <$part as Components<T>>::COUNT;
                    self.$idx.write_components(&mut out[start..end]);
                    start = end;
                )+
                debug_assert_eq!(start, out.len());
            }
        }
    };
}

impl_component_list!(A.0);
impl_component_list!(A.0, B.1);
impl_component_list!(A.0, B.1, C.2);
impl_component_list!(A.0, B.1, C.2, D.3);
impl_component_list!(A.0, B.1, C.2, D.3, E.4);
impl_component_list!(A.0, B.1, C.2, D.3, E.4, F.5);
impl_component_list!(A.0, B.1, C.2, D.3, E.4, F.5, G.6);
impl_component_list!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7);

impl<T: Numberish, const N: usize> Vector<T, N> {
    /// Builds a `Vector` by laying out a tuple of scalars, arrays and
    /// smaller vectors one after the other.
    ///
    /// Tuples of up to eight parts are accepted. Longer lists of
    /// scalars can be written with [`vector!`](crate::vector) or
    /// [`Vector::new`].
    ///
    /// The number of components must add up to `N`, which is
    /// checked when compiling.
    ///
    /// ```
    /// use vector::Vector;
    ///
    /// let xyz = Vector::new([1.0, 2.0, 3.0]);
    /// let p: Vector<f64, 4> = Vector::compose((xyz, 1.0));
    /// assert_eq!(p, Vector::new([1.0, 2.0, 3.0, 1.0]));
    ///
    /// let q: Vector<i32, 5> = Vector::compose((0, Vector::new([1, 2]), [3, 4]));
    /// assert_eq!(q, Vector::new([0, 1, 2, 3, 4]));
    /// ```
    ///
    /// Too many (or too few) components do not compile:
    ///
    /// ```compile_fail
    /// use vector::Vector;
    /// let xyz = Vector::new([1.0, 2.0, 3.0]);
    /// let p: Vector<f64, 4> = Vector::compose((xyz, 1.0, 2.0));
    /// ```
    #[must_use]
    pub fn compose<L: ComponentList<T>>(parts: L) -> Self {
        const {
            assert!(
                L::COUNT == N,
                "the number of components given does not match the size of the Vector"
            )
        };
        let mut ret = Self::zeros();
        parts.write_components(&mut ret.data);
        ret
    }
}
