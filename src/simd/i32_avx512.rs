//! AVX-512 i32 lanes: s32x16 (`__m512i`) and the s32x4 (`__m128i`) companion.

use core::arch::x86_64::*;

use super::avx512::X86Avx512;
use super::prefix_mask;
use crate::traits::{Arithmetic, Extract, MinMax, Multiply, Register};

impl Register<i32, 16> for X86Avx512 {
    type Repr = __m512i;

    #[inline]
    fn splat(value: i32) -> __m512i {
        unsafe { _mm512_set1_epi32(value) }
    }

    #[inline]
    unsafe fn load(ptr: *const i32) -> __m512i {
        unsafe { _mm512_loadu_epi32(ptr) }
    }

    #[inline]
    unsafe fn load_aligned(ptr: *const i32) -> __m512i {
        unsafe { _mm512_load_epi32(ptr) }
    }

    #[inline]
    unsafe fn load_partial(ptr: *const i32, count: usize) -> __m512i {
        unsafe { _mm512_maskz_loadu_epi32(prefix_mask(count) as __mmask16, ptr) }
    }

    #[inline]
    unsafe fn store(ptr: *mut i32, v: __m512i) {
        unsafe { _mm512_storeu_epi32(ptr, v) }
    }

    #[inline]
    unsafe fn store_aligned(ptr: *mut i32, v: __m512i) {
        unsafe { _mm512_store_epi32(ptr, v) }
    }

    #[inline]
    unsafe fn store_partial(ptr: *mut i32, v: __m512i, count: usize) {
        unsafe { _mm512_mask_storeu_epi32(ptr, prefix_mask(count) as __mmask16, v) }
    }
}

impl Register<i32, 4> for X86Avx512 {
    type Repr = __m128i;

    #[inline]
    fn splat(value: i32) -> __m128i {
        unsafe { _mm_set1_epi32(value) }
    }

    #[inline]
    unsafe fn load(ptr: *const i32) -> __m128i {
        unsafe { _mm_loadu_si128(ptr.cast()) }
    }

    #[inline]
    unsafe fn load_aligned(ptr: *const i32) -> __m128i {
        unsafe { _mm_load_si128(ptr.cast()) }
    }

    #[inline]
    unsafe fn load_partial(ptr: *const i32, count: usize) -> __m128i {
        unsafe { _mm_maskz_loadu_epi32(prefix_mask(count) as __mmask8, ptr) }
    }

    #[inline]
    unsafe fn store(ptr: *mut i32, v: __m128i) {
        unsafe { _mm_storeu_si128(ptr.cast(), v) }
    }

    #[inline]
    unsafe fn store_aligned(ptr: *mut i32, v: __m128i) {
        unsafe { _mm_store_si128(ptr.cast(), v) }
    }

    #[inline]
    unsafe fn store_partial(ptr: *mut i32, v: __m128i, count: usize) {
        unsafe { _mm_mask_storeu_epi32(ptr, prefix_mask(count) as __mmask8, v) }
    }
}

impl Arithmetic<i32, 16> for X86Avx512 {
    #[inline]
    fn add(a: __m512i, b: __m512i) -> __m512i {
        unsafe { _mm512_add_epi32(a, b) }
    }

    #[inline]
    fn sub(a: __m512i, b: __m512i) -> __m512i {
        unsafe { _mm512_sub_epi32(a, b) }
    }
}

impl Multiply<i32, 16> for X86Avx512 {
    #[inline]
    fn mul(a: __m512i, b: __m512i) -> __m512i {
        unsafe { _mm512_mullo_epi32(a, b) }
    }
}

impl MinMax<i32, 16> for X86Avx512 {
    #[inline]
    fn min(a: __m512i, b: __m512i) -> __m512i {
        unsafe { _mm512_min_epi32(a, b) }
    }

    #[inline]
    fn max(a: __m512i, b: __m512i) -> __m512i {
        unsafe { _mm512_max_epi32(a, b) }
    }

    #[inline]
    fn horizontal_min(v: __m512i) -> i32 {
        unsafe { _mm512_reduce_min_epi32(v) }
    }

    #[inline]
    fn horizontal_max(v: __m512i) -> i32 {
        unsafe { _mm512_reduce_max_epi32(v) }
    }
}

impl Extract<i32, 16, 4> for X86Avx512 {
    #[inline]
    fn extract(v: __m512i, offset: usize) -> __m128i {
        unsafe {
            match offset / 4 {
                0 => _mm512_castsi512_si128(v),
                1 => _mm512_extracti32x4_epi32::<1>(v),
                2 => _mm512_extracti32x4_epi32::<2>(v),
                _ => _mm512_extracti32x4_epi32::<3>(v),
            }
        }
    }
}
