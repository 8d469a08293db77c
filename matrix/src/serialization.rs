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

use core::fmt;
use core::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeTuple, Serializer};

use vector::{Numberish, Vector};

use crate::generic_matrix::Matrix;

// A Matrix is written as its N columns, each one being a Vector
// (i.e., `[[1, 2], [3, 4]]` has columns `(1, 2)` and `(3, 4)`).

impl<T: Numberish + Serialize, const M: usize, const N: usize> Serialize for Matrix<T, M, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(N)?;
        for col in self.cols.iter() {
            tuple.serialize_element(col)?;
        }
        tuple.end()
    }
}

struct MatrixVisitor<T, const M: usize, const N: usize>(PhantomData<T>);

impl<'de, T: Numberish + Deserialize<'de>, const M: usize, const N: usize> Visitor<'de>
    for MatrixVisitor<T, M, N>
{
    type Value = Matrix<T, M, N>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a sequence of {} columns with {} elements each", N, M)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut ret = Matrix::zeros();
        for j in 0..N {
            ret.cols[j] = seq
                .next_element::<Vector<T, M>>()?
                .ok_or_else(|| de::Error::invalid_length(j, &self))?;
        }
        if seq.next_element::<Vector<T, M>>()?.is_some() {
            return Err(de::Error::invalid_length(N + 1, &self));
        }
        Ok(ret)
    }
}

impl<'de, T: Numberish + Deserialize<'de>, const M: usize, const N: usize> Deserialize<'de>
    for Matrix<T, M, N>
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(N, MatrixVisitor(PhantomData))
    }
}
