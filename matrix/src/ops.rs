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

use vector::{Numberish, Vector};

use crate::generic_matrix::Matrix;

impl<T: Numberish + Neg<Output = T>, const M: usize, const N: usize> Neg for Matrix<T, M, N> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_column_vectors(self.cols.map(|c| -c))
    }
}

impl<T: Numberish + Neg<Output = T>, const M: usize, const N: usize> Neg for &Matrix<T, M, N> {
    type Output = Matrix<T, M, N>;

    fn neg(self) -> Matrix<T, M, N> {
        -*self
    }
}

/// Element-wise operations between matrices of the same shape
macro_rules! elementwise {
    ($Op : ident, $op : ident, $OpAssign : ident, $op_assign : ident) => {
        impl<T: Numberish, const M: usize, const N: usize> $OpAssign for Matrix<T, M, N> {
            fn $op_assign(&mut self, other: Self) {
                self.cols
                    .iter_mut()
                    .zip(other.cols.iter())
                    .for_each(|(a, b)| a.$op_assign(b));
            }
        }

        impl<T: Numberish, const M: usize, const N: usize> $OpAssign<&Matrix<T, M, N>>
            for Matrix<T, M, N>
        {
            fn $op_assign(&mut self, other: &Matrix<T, M, N>) {
                self.$op_assign(*other);
            }
        }

        impl<T: Numberish, const M: usize, const N: usize> $Op for Matrix<T, M, N> {
            type Output = Self;

            fn $op(mut self, other: Self) -> Self {
                self.$op_assign(other);
                self
            }
        }

        impl<T: Numberish, const M: usize, const N: usize> $Op<&Matrix<T, M, N>>
            for Matrix<T, M, N>
        {
            type Output = Self;

            fn $op(self, other: &Matrix<T, M, N>) -> Self {
                self.$op(*other)
            }
        }

        impl<T: Numberish, const M: usize, const N: usize> $Op<&Matrix<T, M, N>>
            for &Matrix<T, M, N>
        {
            type Output = Matrix<T, M, N>;

            fn $op(self, other: &Matrix<T, M, N>) -> Matrix<T, M, N> {
                (*self).$op(*other)
            }
        }
    };
}

elementwise!(Add, add, AddAssign, add_assign);
elementwise!(Sub, sub, SubAssign, sub_assign);

/// Operations between a matrix and a scalar on the right
macro_rules! scalar_rhs {
    ($Op : ident, $op : ident, $OpAssign : ident, $op_assign : ident) => {
        impl<T: Numberish, const M: usize, const N: usize> $OpAssign<T> for Matrix<T, M, N> {
            fn $op_assign(&mut self, s: T) {
                self.cols.iter_mut().for_each(|c| c.$op_assign(s));
            }
        }

        impl<T: Numberish, const M: usize, const N: usize> $Op<T> for Matrix<T, M, N> {
            type Output = Self;

            fn $op(mut self, s: T) -> Self {
                self.$op_assign(s);
                self
            }
        }

        impl<T: Numberish, const M: usize, const N: usize> $Op<T> for &Matrix<T, M, N> {
            type Output = Matrix<T, M, N>;

            fn $op(self, s: T) -> Matrix<T, M, N> {
                (*self).$op(s)
            }
        }
    };
}

scalar_rhs!(Mul, mul, MulAssign, mul_assign);
scalar_rhs!(Div, div, DivAssign, div_assign);

macro_rules! scalar_lhs {
    ($($t : ty),+) => {
        $(
            impl<const M: usize, const N: usize> Mul<Matrix<$t, M, N>> for $t {
                type Output = Matrix<$t, M, N>;

                fn mul(self, m: Matrix<$t, M, N>) -> Matrix<$t, M, N> {
                    m * self
                }
            }
        )+
    };
}

scalar_lhs!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Matrix product: `(L x M) * (M x N) = (L x N)`
impl<T: Numberish, const L: usize, const M: usize, const N: usize> Mul<Matrix<T, M, N>>
    for Matrix<T, L, M>
{
    type Output = Matrix<T, L, N>;

    fn mul(self, other: Matrix<T, M, N>) -> Matrix<T, L, N> {
        let mut ret = Matrix::zeros();
        for j in 0..N {
            for i in 0..L {
                let mut acc = T::zero();
                for k in 0..M {
                    acc += self.cols[k][i] * other.cols[j][k];
                }
                ret.cols[j][i] = acc;
            }
        }
        ret
    }
}

impl<T: Numberish, const L: usize, const M: usize, const N: usize> Mul<&Matrix<T, M, N>>
    for &Matrix<T, L, M>
{
    type Output = Matrix<T, L, N>;

    fn mul(self, other: &Matrix<T, M, N>) -> Matrix<T, L, N> {
        (*self) * (*other)
    }
}

/// The vector as a column, on the right: `(M x N) * N = M`
impl<T: Numberish, const M: usize, const N: usize> Mul<Vector<T, N>> for Matrix<T, M, N> {
    type Output = Vector<T, M>;

    fn mul(self, v: Vector<T, N>) -> Vector<T, M> {
        let mut ret = Vector::zeros();
        for (j, col) in self.cols.iter().enumerate() {
            ret += *col * v[j];
        }
        ret
    }
}

impl<T: Numberish, const M: usize, const N: usize> Mul<&Vector<T, N>> for &Matrix<T, M, N> {
    type Output = Vector<T, M>;

    fn mul(self, v: &Vector<T, N>) -> Vector<T, M> {
        (*self) * (*v)
    }
}

/// The vector as a row, on the left: `M * (M x N) = N`
impl<T: Numberish, const M: usize, const N: usize> Mul<Matrix<T, M, N>> for Vector<T, M> {
    type Output = Vector<T, N>;

    fn mul(self, m: Matrix<T, M, N>) -> Vector<T, N> {
        Vector::new(m.cols.map(|col| col.dot(&self)))
    }
}

impl<T: Numberish, const M: usize, const N: usize> Mul<&Matrix<T, M, N>> for &Vector<T, M> {
    type Output = Vector<T, N>;

    fn mul(self, m: &Matrix<T, M, N>) -> Vector<T, N> {
        (*self) * (*m)
    }
}
