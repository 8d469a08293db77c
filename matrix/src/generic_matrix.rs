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
use vector::{Numberish, Vector};

/// The main Structure in this library: a matrix of `M` rows
/// and `N` columns.
///
/// It is a plain `Copy` value, stored column-major on the stack.
/// Equality is exact, and ordering is lexicographic over the
/// column-major linear order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Matrix<T, const M: usize, const N: usize> {
    // Contains the data ordered by column,
    // going up and down, and then left to right.
    pub(crate) cols: [Vector<T, M>; N],
}

impl<T: Numberish, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Creates a `Matrix` full of zeroes
    #[must_use]
    pub fn zeros() -> Self {
        const { assert!(M > 0 && N > 0, "a Matrix needs at least one row and one column") };
        Self {
            cols: [Vector::zeros(); N],
        }
    }

    /// Puts `v` in the diagonal (i.e., where row == column) and zero
    /// everywhere else. When `M != N`, only the first `min(M, N)`
    /// diagonal elements exist.
    fn diagonal(v: T) -> Self {
        let mut ret = Self::zeros();
        for i in 0..M.min(N) {
            ret.cols[i][i] = v;
        }
        ret
    }

    /// Creates a `Matrix` with `v` in the diagonal and zeroes elsewhere;
    /// i.e., the identity scaled by `v` when the matrix is square.
    ///
    /// A matrix of a single element is built with [`Matrix::from_linear`]:
    ///
    /// ```compile_fail
    /// use matrix::Matrix;
    /// let m: Matrix<f64, 1, 1> = Matrix::from_scalar(1.0);
    /// ```
    #[must_use]
    pub fn from_scalar(v: T) -> Self {
        const { assert!(M * N > 1, "use Matrix::from_linear for single-element matrices") };
        Self::diagonal(v)
    }

    /// Creates a `Matrix` from all of its `M * N` elements, given
    /// in column-major order. The number of elements is checked when
    /// compiling.
    ///
    /// ```
    /// use matrix::Matrix;
    /// let m: Matrix<i32, 2, 3> = Matrix::from_linear([1, 2, 3, 4, 5, 6]);
    /// assert_eq!(m[(1, 0)], 2);
    /// assert_eq!(m[(0, 2)], 5);
    /// ```
    ///
    /// ```compile_fail
    /// use matrix::Matrix;
    /// let m: Matrix<i32, 2, 2> = Matrix::from_linear([1, 2, 3]);
    /// ```
    #[must_use]
    pub fn from_linear<const K: usize>(data: [T; K]) -> Self {
        const { assert!(K == M * N, "the number of elements does not match the size of the Matrix") };
        let mut ret = Self::zeros();
        for (i, v) in data.into_iter().enumerate() {
            ret[i] = v;
        }
        ret
    }

    /// Creates a `Matrix` from a 2D array holding one array per column
    #[must_use]
    pub fn from_columns(cols: [[T; M]; N]) -> Self {
        Self::from_column_vectors(cols.map(Vector::new))
    }

    /// Creates a `Matrix` from a 2D array holding one array per row,
    /// which reads as the matrix does on paper.
    #[must_use]
    pub fn from_rows(rows: [[T; N]; M]) -> Self {
        let mut ret = Self::zeros();
        for (i, row) in rows.iter().enumerate() {
            for (j, v) in row.iter().enumerate() {
                ret.cols[j][i] = *v;
            }
        }
        ret
    }

    /// Creates a `Matrix` from its column [`Vector`]s
    #[must_use]
    pub fn from_column_vectors(cols: [Vector<T, M>; N]) -> Self {
        const { assert!(M > 0 && N > 0, "a Matrix needs at least one row and one column") };
        Self { cols }
    }

    /// Creates a `Matrix` from a slice containing its elements in
    /// column-major order.
    ///
    /// Returns an error if the slice does not contain exactly `M * N`
    /// elements.
    pub fn from_slice(data: &[T]) -> Result<Self, String> {
        if data.len() != M * N {
            return Err(format!("When creating Matrix: Number of rows (nrows = {}) and cols (ncols = {}) does not match length of data (data.len() = {})... (nrows * ncols = {})", M, N, data.len(), M * N));
        }
        let mut ret = Self::zeros();
        for (col, chunk) in ret.cols.iter_mut().zip(data.chunks_exact(M)) {
            col.as_mut_slice().copy_from_slice(chunk);
        }
        Ok(ret)
    }

    /// Converts every element into another numeric type, as the
    /// `as` keyword would.
    #[must_use]
    pub fn cast<U>(&self) -> Matrix<U, M, N>
    where
        T: AsPrimitive<U>,
        U: Numberish,
    {
        Matrix::from_column_vectors(self.cols.map(|c| c.cast()))
    }

    /// Applies `f` to every element
    #[must_use]
    pub fn map<U: Numberish, F: FnMut(T) -> U>(self, mut f: F) -> Matrix<U, M, N> {
        Matrix::from_column_vectors(self.cols.map(|c| c.map(&mut f)))
    }

    /// Returns the number of rows
    pub const fn nrows(&self) -> usize {
        M
    }

    /// Returns the number of columns
    pub const fn ncols(&self) -> usize {
        N
    }

    /// Returns a tuple with number of rows and columns
    pub const fn size(&self) -> (usize, usize) {
        (M, N)
    }

    /// Gets the element in row `i` and column `j`, or `None`
    /// if it is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<T> {
        if i < M {
            self.cols.get(j).map(|c| c[i])
        } else {
            None
        }
    }

    /// Borrows the column `j`
    pub fn column(&self, j: usize) -> &Vector<T, M> {
        &self.cols[j]
    }

    /// Borrows the column `j` mutably
    pub fn column_mut(&mut self, j: usize) -> &mut Vector<T, M> {
        &mut self.cols[j]
    }

    /// Copies the row `i` into a [`Vector`]
    pub fn row(&self, i: usize) -> Vector<T, N> {
        Vector::new(self.cols.map(|c| c[i]))
    }

    /// Borrows all the columns
    pub fn columns(&self) -> &[Vector<T, M>; N] {
        &self.cols
    }

    /// Iterates over all the elements in column-major order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.cols.iter().flat_map(|c| c.iter())
    }

    /// Iterates mutably over all the elements in column-major order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.cols.iter_mut().flat_map(|c| c.iter_mut())
    }

    /// Swaps two rows
    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        for col in self.cols.iter_mut() {
            col.as_mut_slice().swap(a, b);
        }
    }
}

impl<T: Numberish, const M: usize> Matrix<T, M, M> {
    /// Creates an Identity matrix of size MxM
    #[must_use]
    pub fn identity() -> Self {
        Self::diagonal(T::one())
    }
}

impl<T: Numberish, const M: usize, const N: usize> Default for Matrix<T, M, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Numberish, const M: usize, const N: usize> From<[[T; M]; N]> for Matrix<T, M, N> {
    fn from(cols: [[T; M]; N]) -> Self {
        Self::from_columns(cols)
    }
}

impl<T: Numberish, const M: usize, const N: usize> From<[Vector<T, M>; N]> for Matrix<T, M, N> {
    fn from(cols: [Vector<T, M>; N]) -> Self {
        Self::from_column_vectors(cols)
    }
}

impl<T: Numberish, const M: usize, const N: usize> TryFrom<&[T]> for Matrix<T, M, N> {
    type Error = String;

    fn try_from(data: &[T]) -> Result<Self, Self::Error> {
        Self::from_slice(data)
    }
}

/// Linear (column-major) indexing
impl<T, const M: usize, const N: usize> Index<usize> for Matrix<T, M, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.cols[i / M][i % M]
    }
}

impl<T, const M: usize, const N: usize> IndexMut<usize> for Matrix<T, M, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.cols[i / M][i % M]
    }
}

/// Indexing by `(row, column)`
impl<T, const M: usize, const N: usize> Index<(usize, usize)> for Matrix<T, M, N> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.cols[j][i]
    }
}

impl<T, const M: usize, const N: usize> IndexMut<(usize, usize)> for Matrix<T, M, N> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.cols[j][i]
    }
}

/// Writes the columns one after the other; e.g., `((1, 3), (2, 4))`
/// for a matrix whose first row is `1, 2`.
#[cfg(feature = "display")]
impl<T: core::fmt::Display, const M: usize, const N: usize> core::fmt::Display
    for Matrix<T, M, N>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "(")?;
        for (j, col) in self.cols.iter().enumerate() {
            if j > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", col)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let m = Matrix::<f64, 2, 3>::default();
        assert_eq!(m.size(), (2, 3));
        assert!(m.iter().all(|x| *x == 0.0));
    }

    #[test]
    fn test_from_scalar() {
        let eye = Matrix::<f32, 3, 3>::from_scalar(1.0);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(eye[(i, j)], if i == j { 1.0 } else { 0.0 });
            }
        }
        assert_eq!(eye, Matrix::identity());

        // Not square: only the leading diagonal band
        let m = Matrix::<i32, 2, 4>::from_scalar(5);
        assert_eq!(m, Matrix::from_linear([5, 0, 0, 5, 0, 0, 0, 0]));
        let m = Matrix::<i32, 3, 2>::from_scalar(5);
        assert_eq!(m, Matrix::from_rows([[5, 0], [0, 5], [0, 0]]));
    }

    #[test]
    fn test_identity_1x1() {
        assert_eq!(Matrix::<u8, 1, 1>::identity()[0], 1);
    }

    #[test]
    fn test_constructors_agree() {
        let linear: Matrix<i32, 2, 3> = Matrix::from_linear([1, 2, 3, 4, 5, 6]);
        let cols = Matrix::from_columns([[1, 2], [3, 4], [5, 6]]);
        let rows = Matrix::from_rows([[1, 3, 5], [2, 4, 6]]);
        let vecs = Matrix::from_column_vectors([
            Vector::new([1, 2]),
            Vector::new([3, 4]),
            Vector::new([5, 6]),
        ]);
        assert_eq!(linear, cols);
        assert_eq!(linear, rows);
        assert_eq!(linear, vecs);
        assert_eq!(linear, Matrix::from([[1, 2], [3, 4], [5, 6]]));
    }

    #[test]
    fn test_from_slice() -> Result<(), String> {
        let m = Matrix::<f64, 2, 2>::from_slice(&[1., 2., 3., 4.])?;
        assert_eq!(m[(0, 1)], 3.);

        assert!(Matrix::<f64, 2, 2>::from_slice(&[1., 2., 3.]).is_err());
        let data = [0.0; 7];
        let res: Result<Matrix<f64, 2, 3>, String> = data.as_slice().try_into();
        assert!(res.is_err());
        Ok(())
    }

    #[test]
    fn test_indexing() {
        let mut m: Matrix<i32, 3, 2> = Matrix::zeros();
        for i in 0..6 {
            m[i] = i as i32;
        }
        // linear index = column * M + row
        for j in 0..2 {
            for i in 0..3 {
                assert_eq!(m[(i, j)], (j * 3 + i) as i32);
                assert_eq!(m.get(i, j), Some((j * 3 + i) as i32));
            }
        }
        assert_eq!(m.get(3, 0), None);
        assert_eq!(m.get(0, 2), None);

        m[(2, 1)] = 50;
        assert_eq!(m[5], 50);
        assert_eq!(m.row(2), Vector::new([2, 50]));
        assert_eq!(m.column(1), &Vector::new([3, 4, 50]));

        *m.column_mut(0) = Vector::splat(-1);
        assert_eq!(m.iter().copied().collect::<Vec<_>>(), vec![-1, -1, -1, 3, 4, 50]);
    }

    #[test]
    fn test_cast() {
        let m = Matrix::from_rows([[1.5, -2.5], [3.0, 0.1]]);
        let i: Matrix<i32, 2, 2> = m.cast();
        assert_eq!(i, Matrix::from_rows([[1, -2], [3, 0]]));
        assert_eq!(i.map(|x| x * 2), Matrix::from_rows([[2, -4], [6, 0]]));
    }

    #[test]
    fn test_ordering() {
        let a: Matrix<i32, 2, 2> = Matrix::from_linear([1, 2, 3, 4]);
        let b = Matrix::from_linear([1, 2, 3, 5]);
        let c = Matrix::from_linear([2, 0, 0, 0]);
        assert!(a < b);
        assert!(b < c);
        assert!(!(a < a));
        assert_ne!(a, b);
        assert_eq!(a, a);
    }

    #[cfg(feature = "display")]
    #[test]
    fn test_display() {
        let m = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(format!("{}", m), "((1, 3), (2, 4))");

        let m: Matrix<i32, 1, 3> = Matrix::from_linear([7, 8, 9]);
        assert_eq!(format!("{}", m), "((7), (8), (9))");
    }
}
