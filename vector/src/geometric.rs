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

use num_traits::Float as _;

use crate::generic_vector::Vector;
use crate::traits::Numberish;

impl<T: Numberish, const N: usize> Vector<T, N> {
    /// The sum of the products of the components of `self` and `other`
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.data
            .iter()
            .zip(other.data.iter())
            .fold(T::zero(), |acc, (a, b)| acc + *a * *b)
    }

    /// The squared length of the vector (i.e., `self.dot(self)`)
    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// The length of the vector. It is always a floating point number,
    /// even for vectors of integers.
    #[inline]
    pub fn length(&self) -> T::Real {
        self.length_squared().to_real().sqrt()
    }

    /// The squared distance between the points `self` and `other`
    #[inline]
    pub fn distance_squared(&self, other: &Self) -> T {
        (*self - *other).length_squared()
    }

    /// The distance between the points `self` and `other`
    #[inline]
    pub fn distance(&self, other: &Self) -> T::Real {
        (*self - *other).length()
    }

    /// Returns a vector with the same direction and a length of one,
    /// i.e., `self / length(self)`.
    ///
    /// The length is converted into `T` before dividing, so integer
    /// vectors are divided by their truncated length (e.g., `(1, 1)`
    /// stays `(1, 1)`). The length is not checked: normalizing a zero
    /// vector produces `NaN` components for floating point numbers and
    /// panics for integers.
    #[must_use]
    pub fn normalize(&self) -> Self {
        *self / T::from_real(self.length())
    }
}

impl<T: Numberish> Vector<T, 3> {
    /// The right-handed cross product of `self` and `other`
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        let (a, b) = (&self.data, &other.data);
        Self::new([
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ])
    }
}

/// The sum of the products of the components of `u` and `v`
pub fn dot<T: Numberish, const N: usize>(u: Vector<T, N>, v: Vector<T, N>) -> T {
    u.dot(&v)
}

/// The right-handed cross product of two 3-vectors
pub fn cross<T: Numberish>(u: Vector<T, 3>, v: Vector<T, 3>) -> Vector<T, 3> {
    u.cross(&v)
}

/// The squared length of `v`, which equals `dot(v, v)`
pub fn length_squared<T: Numberish, const N: usize>(v: Vector<T, N>) -> T {
    v.length_squared()
}

/// The length of `v`, as a floating point number
pub fn length<T: Numberish, const N: usize>(v: Vector<T, N>) -> T::Real {
    v.length()
}

/// The squared distance between the points `u` and `v`
pub fn distance_squared<T: Numberish, const N: usize>(u: Vector<T, N>, v: Vector<T, N>) -> T {
    u.distance_squared(&v)
}

/// The distance between the points `u` and `v`
pub fn distance<T: Numberish, const N: usize>(u: Vector<T, N>, v: Vector<T, N>) -> T::Real {
    u.distance(&v)
}

/// `v` divided by its length. See [`Vector::normalize`].
pub fn normalize<T: Numberish, const N: usize>(v: Vector<T, N>) -> Vector<T, N> {
    v.normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Float;

    const TINY: f64 = 1e-12;

    #[test]
    fn test_dot() {
        let u = Vector::new([1.0f64, 2.0, 3.0]);
        let v = Vector::new([4.0f64, -5.0, 6.0]);
        assert_eq!(dot(u, v), 12.0);
        assert_eq!(dot(u, v), dot(v, u));
        assert_eq!(dot(Vector::new([2, 3]), Vector::new([4, 5])), 23);
    }

    #[test]
    fn test_cross() {
        let x = Vector::new([1.0f64, 0.0, 0.0]);
        let y = Vector::new([0.0f64, 1.0, 0.0]);
        let z = Vector::new([0.0f64, 0.0, 1.0]);
        assert_eq!(cross(x, y), z);
        assert_eq!(cross(y, z), x);
        assert_eq!(cross(z, x), y);
        assert_eq!(cross(y, x), -z);

        let u = Vector::new([1.5f64, -2.0, 0.25]);
        let v = Vector::new([3.0f64, 0.5, -7.0]);
        let c = cross(u, v);
        assert_eq!(c, -cross(v, u));
        assert!(dot(u, c).abs() < TINY);
        assert!(dot(v, c).abs() < TINY);
    }

    #[test]
    fn test_lengths() {
        let v = Vector::new([3.0f64, 4.0]);
        assert_eq!(length_squared(v), 25.0);
        assert_eq!(length_squared(v), dot(v, v));
        assert_eq!(length(v), 5.0);

        let i = Vector::new([3, 4]);
        let l: Float = length(i);
        assert!((l - 5.0).abs() < 1e-6);

        let f = Vector::new([0.0f32, 2.0]);
        let l: f32 = f.length();
        assert_eq!(l, 2.0);
    }

    #[test]
    fn test_distances() {
        let u = Vector::new([1.0f64, 1.0, 1.0]);
        let v = Vector::new([2.0f64, 3.0, -1.0]);
        assert_eq!(distance_squared(u, v), 9.0);
        assert_eq!(distance(u, v), 3.0);
        assert_eq!(distance(u, v), length(u - v));
        assert_eq!(distance(u, u), 0.0);
    }

    #[test]
    fn test_normalize() {
        let n = normalize(Vector::new([3.0f64, 4.0]));
        assert!((n.x() - 0.6).abs() < TINY);
        assert!((n.y() - 0.8).abs() < TINY);
        assert!((length(n) - 1.0).abs() < TINY);

        let n = normalize(Vector::new([-2.0f64, 7.0, 0.1, 12.0]));
        assert!((length(n) - 1.0).abs() < TINY);

        // Integers are divided by their truncated length
        let n = normalize(Vector::new([0, 5]));
        assert_eq!(n, Vector::new([0, 1]));
        let n = normalize(Vector::new([1, 1]));
        assert_eq!(n, Vector::new([1, 1]));
        let n = normalize(Vector::new([3, 4, 12]));
        assert_eq!(n, Vector::new([0, 0, 0]));
        let n = normalize(Vector::new([-6i64, 8]));
        assert_eq!(n, Vector::new([0, 0]));
    }

    #[test]
    fn test_normalize_zero() {
        let n = normalize(Vector::new([0.0f64, 0.0, 0.0]));
        assert!(n.iter().all(|c| c.is_nan()));
    }
}
