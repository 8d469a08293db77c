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

use vector::{Numberish, RealNumber, Vector};

use crate::generic_matrix::Matrix;

impl<T: Numberish, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Returns the transpose of the matrix
    #[must_use]
    pub fn transpose(&self) -> Matrix<T, N, M> {
        let mut ret = Matrix::zeros();
        for (j, col) in self.cols.iter().enumerate() {
            ret.cols.iter_mut().zip(col.iter()).for_each(|(r, v)| r[j] = *v);
        }
        ret
    }

    /// Multiplies two matrices element by element.
    ///
    /// ```
    /// use matrix::Matrix;
    ///
    /// let a = Matrix::from_rows([[1, 2], [3, 4]]);
    /// let b = Matrix::from_rows([[5, 6], [7, 8]]);
    /// assert_eq!(a.matrix_comp_mult(&b), Matrix::from_rows([[5, 12], [21, 32]]));
    /// ```
    #[must_use]
    pub fn matrix_comp_mult(&self, other: &Self) -> Self {
        let mut ret = *self;
        ret.cols
            .iter_mut()
            .zip(other.cols.iter())
            .for_each(|(a, b)| *a *= b);
        ret
    }
}

impl<T: RealNumber, const M: usize> Matrix<T, M, M> {
    /// Inverts the matrix through Gauss-Jordan elimination with
    /// partial pivoting.
    ///
    /// Singular matrices are not reported as an error: the elimination
    /// goes through and the result holds non-finite values.
    ///
    /// ```
    /// use matrix::Matrix;
    ///
    /// let a = Matrix::from_rows([[0.0, 1.0], [2.0, 0.0]]);
    /// assert_eq!(a.inverse(), Matrix::from_rows([[0.0, 0.5], [1.0, 0.0]]));
    /// ```
    #[must_use]
    pub fn inverse(&self) -> Self {
        let mut mat = *self;
        let mut inv = Self::identity();

        for j in 0..M {
            // Largest absolute value in this column, on or below the diagonal
            let mut pivot_row = j;
            for k in (j + 1)..M {
                if mat.cols[j][k].abs() > mat.cols[j][pivot_row].abs() {
                    pivot_row = k;
                }
            }
            if pivot_row != j {
                mat.swap_rows(j, pivot_row);
                inv.swap_rows(j, pivot_row);
            }

            let pivot = mat.cols[j][j];
            if pivot == T::zero() {
                log::debug!("Inverting a singular matrix (zero pivot on column {})", j);
            }

            for c in 0..M {
                mat.cols[c][j] /= pivot;
                inv.cols[c][j] /= pivot;
            }

            for i in 0..M {
                if i == j {
                    continue;
                }
                let factor = mat.cols[j][i];
                for c in 0..M {
                    let m = mat.cols[c][j];
                    let v = inv.cols[c][j];
                    mat.cols[c][i] -= factor * m;
                    inv.cols[c][i] -= factor * v;
                }
            }
        }

        inv
    }
}

/// Returns the transpose of `m`
pub fn transpose<T: Numberish, const M: usize, const N: usize>(
    m: Matrix<T, M, N>,
) -> Matrix<T, N, M> {
    m.transpose()
}

/// Returns the inverse of `m`. See [`Matrix::inverse`]
pub fn inverse<T: RealNumber, const M: usize>(m: Matrix<T, M, M>) -> Matrix<T, M, M> {
    m.inverse()
}

/// Multiplies two matrices element by element
pub fn matrix_comp_mult<T: Numberish, const M: usize, const N: usize>(
    a: Matrix<T, M, N>,
    b: Matrix<T, M, N>,
) -> Matrix<T, M, N> {
    a.matrix_comp_mult(&b)
}

/// Builds the `M x N` matrix `c * r^T`, treating `c` as a column
/// and `r` as a row.
///
/// ```
/// use matrix::{outer_product, Matrix, Vector};
///
/// let m = outer_product(Vector::new([1, 2, 3]), Vector::new([4, 5]));
/// assert_eq!(m, Matrix::from_rows([[4, 5], [8, 10], [12, 15]]));
/// ```
pub fn outer_product<T: Numberish, const M: usize, const N: usize>(
    c: Vector<T, M>,
    r: Vector<T, N>,
) -> Matrix<T, M, N> {
    Matrix::from_column_vectors(<[T; N]>::from(r).map(|s| c * s))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn assert_close<const M: usize>(a: &Matrix<f64, M, M>, b: &Matrix<f64, M, M>) {
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < 1e-9, "{} vs {}\n{:?}\n{:?}", x, y, a, b);
        }
    }

    #[test]
    fn test_transpose() {
        let a = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
        let t = a.transpose();
        assert_eq!(t, Matrix::from_rows([[1, 4], [2, 5], [3, 6]]));
        assert_eq!(transpose(t), a);

        let sq = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(sq.transpose().transpose(), sq);
    }

    #[test]
    fn test_inverse_2x2() {
        init();
        let a: Matrix<f64, 2, 2> = Matrix::from_rows([[4.0, 7.0], [2.0, 6.0]]);
        let exp = Matrix::from_rows([[0.6, -0.7], [-0.2, 0.4]]);
        assert_close(&a.inverse(), &exp);
        assert_close(&(a * a.inverse()), &Matrix::identity());
    }

    #[test]
    fn test_inverse_needs_pivoting() {
        init();
        let a: Matrix<f64, 3, 3> =
            Matrix::from_rows([[0.0, 2.0, 1.0], [1.0, 0.0, 0.0], [3.0, 0.0, 1.0]]);
        let inv = a.inverse();
        assert_close(&(a * inv), &Matrix::identity());
        assert_close(&(inv * a), &Matrix::identity());
        assert_close(&inverse(inv), &a);
    }

    #[test]
    fn test_inverse_4x4() {
        init();
        let a: Matrix<f64, 4, 4> = Matrix::from_rows([
            [2.0, -1.0, 0.0, 3.0],
            [1.0, 5.0, -2.0, 0.0],
            [0.0, 1.0, 4.0, -1.0],
            [3.0, 0.0, 1.0, 6.0],
        ]);
        assert_close(&(a * a.inverse()), &Matrix::identity());
    }

    #[test]
    fn test_inverse_identity_and_1x1() {
        let eye = Matrix::<f64, 5, 5>::identity();
        assert_eq!(eye.inverse(), eye);

        let one = Matrix::<f32, 1, 1>::from_linear([4.0]);
        assert_eq!(one.inverse()[0], 0.25);
    }

    #[test]
    fn test_inverse_singular() {
        init();
        let a = Matrix::<f64, 2, 2>::from_rows([[1.0, 2.0], [2.0, 4.0]]);
        let inv = a.inverse();
        assert!(inv.iter().any(|x| !x.is_finite()));
    }

    #[test]
    fn test_matrix_comp_mult() {
        let a = Matrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let b = Matrix::from_scalar(2.0);
        assert_eq!(
            matrix_comp_mult(a, b),
            Matrix::from_rows([[2.0, 0.0, 0.0], [0.0, 10.0, 0.0]])
        );
    }

    #[test]
    fn test_outer_product() {
        let c = Vector::new([1.0, 2.0]);
        let r = Vector::new([3.0, 4.0, 5.0]);
        let m = outer_product(c, r);
        assert_eq!(m.size(), (2, 3));
        assert_eq!(m.row(1), Vector::new([6.0, 8.0, 10.0]));
        assert_eq!(m.column(2), &Vector::new([5.0, 10.0]));
        assert_eq!(outer_product(r, c), m.transpose());
    }
}
