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

//! Short names for the usual 2, 3 and 4 dimensional instances.
//!
//! The suffix names the element type: `i` is `i32`, `ui` is `u32`,
//! `f` is `f32` and `d` is `f64`. Square matrices have both a long
//! (`Matrix3x3f`) and a short (`Matrix3f`) name.

use crate::{Matrix, Vector};

macro_rules! vector_aliases {
    ($t : ty, $v2 : ident, $v3 : ident, $v4 : ident) => {
        #[doc = concat!("A 2D `", stringify!($t), "` vector")]
        pub type $v2 = Vector<$t, 2>;
        #[doc = concat!("A 3D `", stringify!($t), "` vector")]
        pub type $v3 = Vector<$t, 3>;
        #[doc = concat!("A 4D `", stringify!($t), "` vector")]
        pub type $v4 = Vector<$t, 4>;
    };
}

vector_aliases!(i32, Vector2i, Vector3i, Vector4i);
vector_aliases!(u32, Vector2ui, Vector3ui, Vector4ui);
vector_aliases!(f32, Vector2f, Vector3f, Vector4f);
vector_aliases!(f64, Vector2d, Vector3d, Vector4d);

macro_rules! matrix_aliases {
    ($t : ty, $( $name : ident = $m : literal x $n : literal ),+ $(,)?) => {
        $(
            #[doc = concat!("A ", $m, "x", $n, " `", stringify!($t), "` matrix")]
            pub type $name = Matrix<$t, $m, $n>;
        )+
    };
}

matrix_aliases!(
    i32,
    Matrix2x2i = 2 x 2,
    Matrix2x3i = 2 x 3,
    Matrix2x4i = 2 x 4,
    Matrix3x2i = 3 x 2,
    Matrix3x3i = 3 x 3,
    Matrix3x4i = 3 x 4,
    Matrix4x2i = 4 x 2,
    Matrix4x3i = 4 x 3,
    Matrix4x4i = 4 x 4,
    Matrix2i = 2 x 2,
    Matrix3i = 3 x 3,
    Matrix4i = 4 x 4,
);

matrix_aliases!(
    f32,
    Matrix2x2f = 2 x 2,
    Matrix2x3f = 2 x 3,
    Matrix2x4f = 2 x 4,
    Matrix3x2f = 3 x 2,
    Matrix3x3f = 3 x 3,
    Matrix3x4f = 3 x 4,
    Matrix4x2f = 4 x 2,
    Matrix4x3f = 4 x 3,
    Matrix4x4f = 4 x 4,
    Matrix2f = 2 x 2,
    Matrix3f = 3 x 3,
    Matrix4f = 4 x 4,
);

matrix_aliases!(
    f64,
    Matrix2x2d = 2 x 2,
    Matrix2x3d = 2 x 3,
    Matrix2x4d = 2 x 4,
    Matrix3x2d = 3 x 2,
    Matrix3x3d = 3 x 3,
    Matrix3x4d = 3 x 4,
    Matrix4x2d = 4 x 2,
    Matrix4x3d = 4 x 3,
    Matrix4x4d = 4 x 4,
    Matrix2d = 2 x 2,
    Matrix3d = 3 x 3,
    Matrix4d = 4 x 4,
);
