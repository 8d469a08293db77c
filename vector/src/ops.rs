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

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::generic_vector::Vector;
use crate::traits::Numberish;

impl<T: Numberish + Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl<T: Numberish + Neg<Output = T>, const N: usize> Neg for &Vector<T, N> {
    type Output = Vector<T, N>;

    fn neg(self) -> Vector<T, N> {
        -*self
    }
}

/// Component-wise operations between two vectors of the same size,
/// in their compound and binary forms (by value and by reference).
macro_rules! componentwise {
    ($Op : ident, $op : ident, $OpAssign : ident, $op_assign : ident) => {
        impl<T: Numberish, const N: usize> $OpAssign for Vector<T, N> {
            #[inline]
            fn $op_assign(&mut self, other: Self) {
                self.data
                    .iter_mut()
                    .zip(other.data.iter())
                    .for_each(|(a, b)| a.$op_assign(*b));
            }
        }

        impl<T: Numberish, const N: usize> $OpAssign<&Vector<T, N>> for Vector<T, N> {
            #[inline]
            fn $op_assign(&mut self, other: &Vector<T, N>) {
                self.$op_assign(*other);
            }
        }

        impl<T: Numberish, const N: usize> $Op for Vector<T, N> {
            type Output = Self;

            #[inline]
            fn $op(mut self, other: Self) -> Self {
                self.$op_assign(other);
                self
            }
        }

        impl<T: Numberish, const N: usize> $Op<&Vector<T, N>> for Vector<T, N> {
            type Output = Self;

            #[inline]
            fn $op(self, other: &Vector<T, N>) -> Self {
                self.$op(*other)
            }
        }

        impl<T: Numberish, const N: usize> $Op<Vector<T, N>> for &Vector<T, N> {
            type Output = Vector<T, N>;

            #[inline]
            fn $op(self, other: Vector<T, N>) -> Vector<T, N> {
                (*self).$op(other)
            }
        }

        impl<T: Numberish, const N: usize> $Op<&Vector<T, N>> for &Vector<T, N> {
            type Output = Vector<T, N>;

            #[inline]
            fn $op(self, other: &Vector<T, N>) -> Vector<T, N> {
                (*self).$op(*other)
            }
        }
    };
}

componentwise!(Add, add, AddAssign, add_assign);
componentwise!(Sub, sub, SubAssign, sub_assign);
componentwise!(Mul, mul, MulAssign, mul_assign);
componentwise!(Div, div, DivAssign, div_assign);

/// Operations between a vector and a scalar (the scalar on the right)
macro_rules! scalar_rhs {
    ($Op : ident, $op : ident, $OpAssign : ident, $op_assign : ident) => {
        impl<T: Numberish, const N: usize> $OpAssign<T> for Vector<T, N> {
            #[inline]
            fn $op_assign(&mut self, s: T) {
                self.data.iter_mut().for_each(|a| a.$op_assign(s));
            }
        }

        impl<T: Numberish, const N: usize> $Op<T> for Vector<T, N> {
            type Output = Self;

            #[inline]
            fn $op(mut self, s: T) -> Self {
                self.$op_assign(s);
                self
            }
        }

        impl<T: Numberish, const N: usize> $Op<T> for &Vector<T, N> {
            type Output = Vector<T, N>;

            #[inline]
            fn $op(self, s: T) -> Vector<T, N> {
                (*self).$op(s)
            }
        }
    };
}

scalar_rhs!(Mul, mul, MulAssign, mul_assign);
scalar_rhs!(Div, div, DivAssign, div_assign);

/// Operations with the scalar on the left. These cannot be written
/// generically, so they are written for every primitive.
macro_rules! scalar_lhs {
    ($($t : ty),+) => {
        $(
            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn mul(self, v: Vector<$t, N>) -> Vector<$t, N> {
                    v * self
                }
            }

            impl<const N: usize> Mul<&Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn mul(self, v: &Vector<$t, N>) -> Vector<$t, N> {
                    *v * self
                }
            }

            impl<const N: usize> Div<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                /// Divides `self` by every component of `v`
                #[inline]
                fn div(self, v: Vector<$t, N>) -> Vector<$t, N> {
                    v.map(|c| self / c)
                }
            }

            impl<const N: usize> Div<&Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn div(self, v: &Vector<$t, N>) -> Vector<$t, N> {
                    self / *v
                }
            }
        )+
    };
}

scalar_lhs!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
