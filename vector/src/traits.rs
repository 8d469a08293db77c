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

use core::fmt::{Debug, Display};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use num_traits::{One, Zero};

use crate::Float;

/// Define the basic algebraic requirements for the components
/// of a [`Vector`](crate::Vector) or a `Matrix`.
///
/// It is implemented for all the primitive integer and floating
/// point types.
pub trait Numberish:
    Copy
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + 'static
{
    /// The floating point type in which lengths and distances
    /// are expressed. `f32` and `f64` are their own `Real`; integers
    /// use [`Float`].
    type Real: Numberish + num_traits::Float;

    /// Converts into `Real`, as the `as` keyword would.
    fn to_real(self) -> Self::Real;

    /// Converts from `Real`, as the `as` keyword would (i.e., integers
    /// are truncated towards zero and saturate).
    fn from_real(r: Self::Real) -> Self;
}

macro_rules! impl_numberish {
    ($real : ty => $($t : ty),+) => {
        $(
            impl Numberish for $t {
                type Real = $real;

                #[inline]
                #[allow(clippy::unnecessary_cast)]
                fn to_real(self) -> $real {
                    self as $real
                }

                #[inline]
                #[allow(clippy::unnecessary_cast)]
                fn from_real(r: $real) -> Self {
                    r as $t
                }
            }
        )+
    };
}

/// A [`Numberish`] that is also a floating point number, as required
/// by matrix inversion and the rotation and projection transforms.
pub trait RealNumber: Numberish + num_traits::Float {}

impl<T: Numberish + num_traits::Float> RealNumber for T {}

impl_numberish!(f32 => f32);
impl_numberish!(f64 => f64);
impl_numberish!(Float => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_conversion() {
        assert_eq!(3i32.to_real(), 3.0);
        assert_eq!(i32::from_real(2.9), 2);
        assert_eq!(i32::from_real(-2.9), -2);
        assert_eq!(u8::from_real(-1.0), 0);
        assert_eq!(2.5f32.to_real(), 2.5f32);
        assert_eq!(f64::from_real(0.25), 0.25);
    }

    #[test]
    fn test_zero_one() {
        fn sum<T: Numberish>(a: &[T]) -> T {
            a.iter().fold(T::zero(), |acc, v| acc + *v)
        }
        assert_eq!(sum(&[1u16, 2, 3]), 6);
        assert_eq!(sum(&[0.5, 0.25]), 0.75);
        assert_eq!(u64::one(), 1);
    }
}
