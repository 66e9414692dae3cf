//! AVX-512BW i16 lanes: s16x32 in one `__m512i`.

use core::arch::x86_64::*;

use super::avx512::X86Avx512;
use super::prefix_mask;
use crate::traits::{Arithmetic, MinMax, Multiply, Register};

impl Register<i16, 32> for X86Avx512 {
    type Repr = __m512i;

    #[inline]
    fn splat(value: i16) -> __m512i {
        unsafe { _mm512_set1_epi16(value) }
    }

    #[inline]
    unsafe fn load(ptr: *const i16) -> __m512i {
        unsafe { _mm512_loadu_epi16(ptr) }
    }

    #[inline]
    unsafe fn load_aligned(ptr: *const i16) -> __m512i {
        unsafe { _mm512_load_epi32(ptr.cast()) }
    }

    #[inline]
    unsafe fn load_partial(ptr: *const i16, count: usize) -> __m512i {
        unsafe { _mm512_maskz_loadu_epi16(prefix_mask(count) as __mmask32, ptr) }
    }

    #[inline]
    unsafe fn store(ptr: *mut i16, v: __m512i) {
        unsafe { _mm512_storeu_epi16(ptr, v) }
    }

    #[inline]
    unsafe fn store_aligned(ptr: *mut i16, v: __m512i) {
        unsafe { _mm512_store_epi32(ptr.cast(), v) }
    }

    #[inline]
    unsafe fn store_partial(ptr: *mut i16, v: __m512i, count: usize) {
        unsafe { _mm512_mask_storeu_epi16(ptr, prefix_mask(count) as __mmask32, v) }
    }
}

impl Arithmetic<i16, 32> for X86Avx512 {
    #[inline]
    fn add(a: __m512i, b: __m512i) -> __m512i {
        unsafe { _mm512_add_epi16(a, b) }
    }

    #[inline]
    fn sub(a: __m512i, b: __m512i) -> __m512i {
        unsafe { _mm512_sub_epi16(a, b) }
    }
}

impl Multiply<i16, 32> for X86Avx512 {
    #[inline]
    fn mul(a: __m512i, b: __m512i) -> __m512i {
        unsafe { _mm512_mullo_epi16(a, b) }
    }
}

// No `_mm512_reduce_*_epi16` exists: fold 512 → 256 → 128 bits, then shift
// within the low 128 bits until lane 0 holds the result.
macro_rules! reduce_epi16 {
    ($name:ident, $op256:ident, $op128:ident) => {
        #[inline(always)]
        fn $name(v: __m512i) -> i16 {
            unsafe {
                let v = $op256(_mm512_castsi512_si256(v), _mm512_extracti64x4_epi64::<1>(v));
                let v = $op128(_mm256_castsi256_si128(v), _mm256_extracti128_si256::<1>(v));
                let v = $op128(v, _mm_srli_si128::<8>(v));
                let v = $op128(v, _mm_srli_si128::<4>(v));
                let v = $op128(v, _mm_srli_si128::<2>(v));
                _mm_cvtsi128_si32(v) as i16
            }
        }
    };
}

reduce_epi16!(reduce_min, _mm256_min_epi16, _mm_min_epi16);
reduce_epi16!(reduce_max, _mm256_max_epi16, _mm_max_epi16);

impl MinMax<i16, 32> for X86Avx512 {
    #[inline]
    fn min(a: __m512i, b: __m512i) -> __m512i {
        unsafe { _mm512_min_epi16(a, b) }
    }

    #[inline]
    fn max(a: __m512i, b: __m512i) -> __m512i {
        unsafe { _mm512_max_epi16(a, b) }
    }

    #[inline]
    fn horizontal_min(v: __m512i) -> i16 {
        reduce_min(v)
    }

    #[inline]
    fn horizontal_max(v: __m512i) -> i16 {
        reduce_max(v)
    }
}
