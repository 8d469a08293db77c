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

use crate::*;

const TINY: f64 = 1e-10;

/// A few vectors of every size, for checking properties that
/// should hold regardless of `N`
fn samples<const N: usize>() -> Vec<Vector<f64, N>> {
    let mut ret = Vec::new();
    for seed in 1..6 {
        let mut v = Vector::zeros();
        for (i, c) in v.iter_mut().enumerate() {
            *c = ((seed * 7 + i * 3) % 11) as f64 - 5.0 + 0.25 * seed as f64;
        }
        ret.push(v);
    }
    ret
}

fn check_identities<const N: usize>() {
    let vs = samples::<N>();
    for u in vs.iter() {
        assert_eq!(u, u);
        assert!(!(u < u));
        assert_eq!(*u + (-*u), Vector::zeros());
        assert_eq!(length_squared(*u), dot(*u, *u));

        for v in vs.iter() {
            assert_eq!(dot(*u, *v), dot(*v, *u));
            assert_eq!(distance(*u, *v), length(*u - *v));
            assert_eq!(distance_squared(*u, *v), length_squared(*u - *v));
        }

        if length(*u) > 0.0 {
            assert!((length(normalize(*u)) - 1.0).abs() < TINY);
        }
    }
}

#[test]
fn test_identities_all_sizes() {
    check_identities::<1>();
    check_identities::<2>();
    check_identities::<3>();
    check_identities::<4>();
    check_identities::<7>();
}

#[test]
fn test_cross_identities() {
    let vs = samples::<3>();
    for u in vs.iter() {
        for v in vs.iter() {
            let c = cross(*u, *v);
            assert_eq!(c, -cross(*v, *u));
            assert!(dot(*u, c).abs() < TINY * (1.0 + length(c)));
        }
    }
}

#[test]
fn test_lexicographic_order() {
    let mut vs = vec![
        vector![2, 0, 0],
        vector![1, 9, 9],
        vector![1, 2, 3],
        vector![1, 2, 2],
    ];
    vs.sort();
    assert_eq!(
        vs,
        vec![
            vector![1, 2, 2],
            vector![1, 2, 3],
            vector![1, 9, 9],
            vector![2, 0, 0]
        ]
    );
}

#[test]
fn test_homogeneous_coordinates() {
    let p = vector![1.0, 2.0, 3.0];
    let h: Vector<f64, 4> = Vector::compose((p, 1.0));
    assert_eq!(h.xyz(), p);
    assert_eq!(swizzle!(h, 3, 2, 1, 0), vector![1.0, 3.0, 2.0, 1.0]);
}

#[test]
fn test_integer_vectors() {
    let a: Vector<u32, 3> = Vector::splat(4);
    let b = vector![1u32, 2, 4];
    assert_eq!(a / b, vector![4, 2, 1]);
    assert_eq!(a * b, vector![4, 8, 16]);
    assert_eq!(dot(a, b), 28);

    let c: Vector<i64, 3> = a.cast();
    assert_eq!(-c, vector![-4, -4, -4]);
}
