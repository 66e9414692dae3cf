//! AVX-512BW byte lanes, signed and unsigned.
//!
//! | Lanes | Register  | Masked forms          |
//! |-------|-----------|-----------------------|
//! | 64    | `__m512i` | AVX-512BW             |
//! | 32    | `__m256i` | AVX-512BW + VL        |
//! | 16    | `__m128i` | AVX-512BW + VL        |
//!
//! `u8` and `i8` share every data-movement instruction; only min/max and
//! their reductions differ (`epu8` vs `epi8`).

use core::arch::x86_64::*;

use super::avx512::X86Avx512;
use super::prefix_mask;
use crate::traits::{Arithmetic, Concat, Extract, MinMax, Register};

macro_rules! impl_byte_registers {
    ($($t:ty),*) => {$(
        impl Register<$t, 64> for X86Avx512 {
            type Repr = __m512i;

            #[inline]
            fn splat(value: $t) -> __m512i {
                unsafe { _mm512_set1_epi8(value as i8) }
            }

            #[inline]
            unsafe fn load(ptr: *const $t) -> __m512i {
                unsafe { _mm512_loadu_epi8(ptr.cast()) }
            }

            #[inline]
            unsafe fn load_aligned(ptr: *const $t) -> __m512i {
                unsafe { _mm512_load_epi32(ptr.cast()) }
            }

            #[inline]
            unsafe fn load_partial(ptr: *const $t, count: usize) -> __m512i {
                unsafe { _mm512_maskz_loadu_epi8(prefix_mask(count), ptr.cast()) }
            }

            #[inline]
            unsafe fn store(ptr: *mut $t, v: __m512i) {
                unsafe { _mm512_storeu_epi8(ptr.cast(), v) }
            }

            #[inline]
            unsafe fn store_aligned(ptr: *mut $t, v: __m512i) {
                unsafe { _mm512_store_epi32(ptr.cast(), v) }
            }

            #[inline]
            unsafe fn store_partial(ptr: *mut $t, v: __m512i, count: usize) {
                unsafe { _mm512_mask_storeu_epi8(ptr.cast(), prefix_mask(count), v) }
            }
        }

        impl Register<$t, 32> for X86Avx512 {
            type Repr = __m256i;

            #[inline]
            fn splat(value: $t) -> __m256i {
                unsafe { _mm256_set1_epi8(value as i8) }
            }

            #[inline]
            unsafe fn load(ptr: *const $t) -> __m256i {
                unsafe { _mm256_loadu_si256(ptr.cast()) }
            }

            #[inline]
            unsafe fn load_aligned(ptr: *const $t) -> __m256i {
                unsafe { _mm256_load_si256(ptr.cast()) }
            }

            #[inline]
            unsafe fn load_partial(ptr: *const $t, count: usize) -> __m256i {
                unsafe { _mm256_maskz_loadu_epi8(prefix_mask(count) as __mmask32, ptr.cast()) }
            }

            #[inline]
            unsafe fn store(ptr: *mut $t, v: __m256i) {
                unsafe { _mm256_storeu_si256(ptr.cast(), v) }
            }

            #[inline]
            unsafe fn store_aligned(ptr: *mut $t, v: __m256i) {
                unsafe { _mm256_store_si256(ptr.cast(), v) }
            }

            #[inline]
            unsafe fn store_partial(ptr: *mut $t, v: __m256i, count: usize) {
                unsafe { _mm256_mask_storeu_epi8(ptr.cast(), prefix_mask(count) as __mmask32, v) }
            }
        }

        impl Register<$t, 16> for X86Avx512 {
            type Repr = __m128i;

            #[inline]
            fn splat(value: $t) -> __m128i {
                unsafe { _mm_set1_epi8(value as i8) }
            }

            #[inline]
            unsafe fn load(ptr: *const $t) -> __m128i {
                unsafe { _mm_loadu_si128(ptr.cast()) }
            }

            #[inline]
            unsafe fn load_aligned(ptr: *const $t) -> __m128i {
                unsafe { _mm_load_si128(ptr.cast()) }
            }

            #[inline]
            unsafe fn load_partial(ptr: *const $t, count: usize) -> __m128i {
                unsafe { _mm_maskz_loadu_epi8(prefix_mask(count) as __mmask16, ptr.cast()) }
            }

            #[inline]
            unsafe fn store(ptr: *mut $t, v: __m128i) {
                unsafe { _mm_storeu_si128(ptr.cast(), v) }
            }

            #[inline]
            unsafe fn store_aligned(ptr: *mut $t, v: __m128i) {
                unsafe { _mm_store_si128(ptr.cast(), v) }
            }

            #[inline]
            unsafe fn store_partial(ptr: *mut $t, v: __m128i, count: usize) {
                unsafe { _mm_mask_storeu_epi8(ptr.cast(), prefix_mask(count) as __mmask16, v) }
            }
        }

        impl Arithmetic<$t, 64> for X86Avx512 {
            #[inline]
            fn add(a: __m512i, b: __m512i) -> __m512i {
                unsafe { _mm512_add_epi8(a, b) }
            }

            #[inline]
            fn sub(a: __m512i, b: __m512i) -> __m512i {
                unsafe { _mm512_sub_epi8(a, b) }
            }
        }

        impl Extract<$t, 64, 16> for X86Avx512 {
            #[inline]
            fn extract(v: __m512i, offset: usize) -> __m128i {
                unsafe {
                    match offset / 16 {
                        0 => _mm512_castsi512_si128(v),
                        1 => _mm512_extracti32x4_epi32::<1>(v),
                        2 => _mm512_extracti32x4_epi32::<2>(v),
                        _ => _mm512_extracti32x4_epi32::<3>(v),
                    }
                }
            }
        }

        impl Extract<$t, 64, 32> for X86Avx512 {
            #[inline]
            fn extract(v: __m512i, offset: usize) -> __m256i {
                unsafe {
                    match offset / 32 {
                        0 => _mm512_castsi512_si256(v),
                        _ => _mm512_extracti64x4_epi64::<1>(v),
                    }
                }
            }
        }

        impl Concat<$t, 32, 64> for X86Avx512 {
            #[inline]
            fn concat(lo: __m256i, hi: __m256i) -> __m512i {
                unsafe { _mm512_inserti64x4::<1>(_mm512_castsi256_si512(lo), hi) }
            }
        }

        impl Concat<$t, 16, 32> for X86Avx512 {
            #[inline]
            fn concat(lo: __m128i, hi: __m128i) -> __m256i {
                unsafe { _mm256_set_m128i(hi, lo) }
            }
        }
    )*};
}

impl_byte_registers!(u8, i8);

// Fold 512 → 256 → 128 bits, then byte shifts down to lane 0.
macro_rules! reduce_bytes {
    ($name:ident, $t:ty, $op256:ident, $op128:ident) => {
        #[inline(always)]
        fn $name(v: __m512i) -> $t {
            unsafe {
                let v = $op256(_mm512_castsi512_si256(v), _mm512_extracti64x4_epi64::<1>(v));
                let v = $op128(_mm256_castsi256_si128(v), _mm256_extracti128_si256::<1>(v));
                let v = $op128(v, _mm_srli_si128::<8>(v));
                let v = $op128(v, _mm_srli_si128::<4>(v));
                let v = $op128(v, _mm_srli_si128::<2>(v));
                let v = $op128(v, _mm_srli_si128::<1>(v));
                _mm_cvtsi128_si32(v) as $t
            }
        }
    };
}

reduce_bytes!(reduce_min_u8, u8, _mm256_min_epu8, _mm_min_epu8);
reduce_bytes!(reduce_max_u8, u8, _mm256_max_epu8, _mm_max_epu8);
reduce_bytes!(reduce_min_i8, i8, _mm256_min_epi8, _mm_min_epi8);
reduce_bytes!(reduce_max_i8, i8, _mm256_max_epi8, _mm_max_epi8);

impl MinMax<u8, 64> for X86Avx512 {
    #[inline]
    fn min(a: __m512i, b: __m512i) -> __m512i {
        unsafe { _mm512_min_epu8(a, b) }
    }

    #[inline]
    fn max(a: __m512i, b: __m512i) -> __m512i {
        unsafe { _mm512_max_epu8(a, b) }
    }

    #[inline]
    fn horizontal_min(v: __m512i) -> u8 {
        reduce_min_u8(v)
    }

    #[inline]
    fn horizontal_max(v: __m512i) -> u8 {
        reduce_max_u8(v)
    }
}

impl MinMax<i8, 64> for X86Avx512 {
    #[inline]
    fn min(a: __m512i, b: __m512i) -> __m512i {
        unsafe { _mm512_min_epi8(a, b) }
    }

    #[inline]
    fn max(a: __m512i, b: __m512i) -> __m512i {
        unsafe { _mm512_max_epi8(a, b) }
    }

    #[inline]
    fn horizontal_min(v: __m512i) -> i8 {
        reduce_min_i8(v)
    }

    #[inline]
    fn horizontal_max(v: __m512i) -> i8 {
        reduce_max_i8(v)
    }
}
