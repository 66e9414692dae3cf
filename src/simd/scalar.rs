//! Portable array-backed backend.
//!
//! Holds an `N`-lane vector as `[T; N]` and implements every capability for
//! every element type and lane count, so it doubles as the reference oracle
//! for the conformance harness. Lane semantics come straight from the
//! element traits ([`LaneArith`], [`LaneOrd`], [`LaneFma`], [`ConvertLane`]).

use core::array;
use core::ptr;

use crate::traits::{
    Arithmetic, Backend, Concat, Convert, ConvertLane, ConvertPair, Element, Extract,
    FusedMultiplyAdd, LaneArith, LaneFma, LaneOrd, MinMax, Multiply, Register,
};

/// Scalar reference backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Scalar;

impl Backend for Scalar {
    const NAME: &'static str = "scalar";
}

impl<T: Element, const N: usize> Register<T, N> for Scalar {
    type Repr = [T; N];

    #[inline]
    fn splat(value: T) -> [T; N] {
        [value; N]
    }

    #[inline]
    unsafe fn load(ptr: *const T) -> [T; N] {
        unsafe { ptr::read_unaligned(ptr.cast::<[T; N]>()) }
    }

    #[inline]
    unsafe fn load_aligned(ptr: *const T) -> [T; N] {
        // Register alignment is at least the array's alignment.
        unsafe { ptr::read(ptr.cast::<[T; N]>()) }
    }

    #[inline]
    unsafe fn load_partial(ptr: *const T, count: usize) -> [T; N] {
        let mut out = [T::default(); N];
        unsafe { ptr::copy_nonoverlapping(ptr, out.as_mut_ptr(), count) };
        out
    }

    #[inline]
    unsafe fn store(ptr: *mut T, v: [T; N]) {
        unsafe { ptr::write_unaligned(ptr.cast::<[T; N]>(), v) }
    }

    #[inline]
    unsafe fn store_aligned(ptr: *mut T, v: [T; N]) {
        unsafe { ptr::write(ptr.cast::<[T; N]>(), v) }
    }

    #[inline]
    unsafe fn store_partial(ptr: *mut T, v: [T; N], count: usize) {
        unsafe { ptr::copy_nonoverlapping(v.as_ptr(), ptr, count) }
    }
}

impl<T: LaneArith, const N: usize> Arithmetic<T, N> for Scalar {
    #[inline]
    fn add(a: [T; N], b: [T; N]) -> [T; N] {
        array::from_fn(|i| a[i].lane_add(b[i]))
    }

    #[inline]
    fn sub(a: [T; N], b: [T; N]) -> [T; N] {
        array::from_fn(|i| a[i].lane_sub(b[i]))
    }
}

impl<T: LaneArith, const N: usize> Multiply<T, N> for Scalar {
    #[inline]
    fn mul(a: [T; N], b: [T; N]) -> [T; N] {
        array::from_fn(|i| a[i].lane_mul(b[i]))
    }
}

impl<T: LaneFma, const N: usize> FusedMultiplyAdd<T, N> for Scalar {
    #[inline]
    fn mul_add(a: [T; N], b: [T; N], c: [T; N]) -> [T; N] {
        array::from_fn(|i| a[i].lane_mul_add(b[i], c[i]))
    }
}

impl<T: LaneOrd, const N: usize> MinMax<T, N> for Scalar {
    #[inline]
    fn min(a: [T; N], b: [T; N]) -> [T; N] {
        array::from_fn(|i| a[i].lane_min(b[i]))
    }

    #[inline]
    fn max(a: [T; N], b: [T; N]) -> [T; N] {
        array::from_fn(|i| a[i].lane_max(b[i]))
    }

    #[inline]
    fn horizontal_min(v: [T; N]) -> T {
        let mut acc = v[0];
        for &x in &v[1..] {
            acc = acc.lane_min(x);
        }
        acc
    }

    #[inline]
    fn horizontal_max(v: [T; N]) -> T {
        let mut acc = v[0];
        for &x in &v[1..] {
            acc = acc.lane_max(x);
        }
        acc
    }
}

impl<T: Element, const N: usize, const W: usize> Extract<T, N, W> for Scalar {
    #[inline]
    fn extract(v: [T; N], offset: usize) -> [T; W] {
        array::from_fn(|i| v[offset + i])
    }
}

impl<T: Element, const W: usize, const N: usize> Concat<T, W, N> for Scalar {
    #[inline]
    fn concat(lo: [T; W], hi: [T; W]) -> [T; N] {
        array::from_fn(|i| if i < W { lo[i] } else { hi[i - W] })
    }
}

impl<S: ConvertLane<D>, D: Element, const N: usize> Convert<S, D, N> for Scalar {
    #[inline]
    fn convert(v: [S; N]) -> [D; N] {
        array::from_fn(|i| v[i].convert_lane())
    }
}

impl<S: ConvertLane<D>, D: Element, const N: usize, const M: usize> ConvertPair<S, D, N, M>
    for Scalar
{
    #[inline]
    fn convert_pair(a: [S; N], b: [S; N]) -> [D; M] {
        array::from_fn(|i| if i < N { a[i].convert_lane() } else { b[i - N].convert_lane() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_load_zero_fills() {
        let src = [1_i32, 2, 3, 4];
        for count in 0..=4 {
            let v: [i32; 4] = unsafe { <Scalar as Register<i32, 4>>::load_partial(src.as_ptr(), count) };
            for i in 0..4 {
                let expected = if i < count { src[i] } else { 0 };
                assert_eq!(v[i], expected, "count={count} lane={i}");
            }
        }
    }

    #[test]
    fn partial_store_leaves_tail() {
        let v = [9_u8; 8];
        for count in 0..=8 {
            let mut dst = [1_u8; 8];
            unsafe { <Scalar as Register<u8, 8>>::store_partial(dst.as_mut_ptr(), v, count) };
            for i in 0..8 {
                let expected = if i < count { 9 } else { 1 };
                assert_eq!(dst[i], expected, "count={count} lane={i}");
            }
        }
    }

    #[test]
    fn unaligned_load_store() {
        let src: [i16; 9] = [0, 1, 2, 3, 4, 5, 6, 7, 8];
        let v: [i16; 8] = unsafe { <Scalar as Register<i16, 8>>::load(src.as_ptr().add(1)) };
        assert_eq!(v, [1, 2, 3, 4, 5, 6, 7, 8]);
        let mut dst = [0_i16; 9];
        unsafe { <Scalar as Register<i16, 8>>::store(dst.as_mut_ptr().add(1), v) };
        assert_eq!(dst, [0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn horizontal_reductions() {
        let v = [5_i32, 3, 9, -2, 7, 0, 11, 4];
        assert_eq!(<Scalar as MinMax<i32, 8>>::horizontal_min(v), -2);
        assert_eq!(<Scalar as MinMax<i32, 8>>::horizontal_max(v), 11);

        let f = [f32::NAN, 2.0, f32::NAN, -1.0];
        assert_eq!(<Scalar as MinMax<f32, 4>>::horizontal_min(f), -1.0);
        assert_eq!(<Scalar as MinMax<f32, 4>>::horizontal_max(f), 2.0);
    }

    #[test]
    fn extract_concat() {
        let v: [u8; 8] = [0, 1, 2, 3, 4, 5, 6, 7];
        let hi: [u8; 4] = <Scalar as Extract<u8, 8, 4>>::extract(v, 4);
        assert_eq!(hi, [4, 5, 6, 7]);
        let joined: [u8; 8] = <Scalar as Concat<u8, 4, 8>>::concat([0, 1, 2, 3], hi);
        assert_eq!(joined, v);
    }

    #[test]
    fn convert_pair_keeps_argument_order() {
        let a = [300_i32, -5, 200, 0];
        let b = [1_i32, 2, 3, 256];
        let out: [u8; 8] = <Scalar as ConvertPair<i32, u8, 4, 8>>::convert_pair(a, b);
        assert_eq!(out, [255, 0, 200, 0, 1, 2, 3, 255]);
    }
}
