//! 16-bit float lanes (`f16`, `bf16`) on AVX-512.
//!
//! Neither format has arithmetic here; they are storage types that move
//! through the integer registers as raw 16-bit patterns.

use core::arch::x86_64::*;

use half::{bf16, f16};

use super::avx512::X86Avx512;
use super::prefix_mask;
use crate::traits::{Concat, Extract, Register};

macro_rules! impl_half_registers {
    ($($t:ty),*) => {$(
        impl Register<$t, 32> for X86Avx512 {
            type Repr = __m512i;

            #[inline]
            fn splat(value: $t) -> __m512i {
                unsafe { _mm512_set1_epi16(value.to_bits() as i16) }
            }

            #[inline]
            unsafe fn load(ptr: *const $t) -> __m512i {
                unsafe { _mm512_loadu_epi16(ptr.cast()) }
            }

            #[inline]
            unsafe fn load_aligned(ptr: *const $t) -> __m512i {
                unsafe { _mm512_load_epi32(ptr.cast()) }
            }

            #[inline]
            unsafe fn load_partial(ptr: *const $t, count: usize) -> __m512i {
                unsafe { _mm512_maskz_loadu_epi16(prefix_mask(count) as __mmask32, ptr.cast()) }
            }

            #[inline]
            unsafe fn store(ptr: *mut $t, v: __m512i) {
                unsafe { _mm512_storeu_epi16(ptr.cast(), v) }
            }

            #[inline]
            unsafe fn store_aligned(ptr: *mut $t, v: __m512i) {
                unsafe { _mm512_store_epi32(ptr.cast(), v) }
            }

            #[inline]
            unsafe fn store_partial(ptr: *mut $t, v: __m512i, count: usize) {
                unsafe { _mm512_mask_storeu_epi16(ptr.cast(), prefix_mask(count) as __mmask32, v) }
            }
        }

        impl Register<$t, 16> for X86Avx512 {
            type Repr = __m256i;

            #[inline]
            fn splat(value: $t) -> __m256i {
                unsafe { _mm256_set1_epi16(value.to_bits() as i16) }
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
                unsafe { _mm256_maskz_loadu_epi16(prefix_mask(count) as __mmask16, ptr.cast()) }
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
                unsafe { _mm256_mask_storeu_epi16(ptr.cast(), prefix_mask(count) as __mmask16, v) }
            }
        }

        impl Extract<$t, 32, 16> for X86Avx512 {
            #[inline]
            fn extract(v: __m512i, offset: usize) -> __m256i {
                unsafe {
                    match offset / 16 {
                        0 => _mm512_castsi512_si256(v),
                        _ => _mm512_extracti64x4_epi64::<1>(v),
                    }
                }
            }
        }

        impl Concat<$t, 16, 32> for X86Avx512 {
            #[inline]
            fn concat(lo: __m256i, hi: __m256i) -> __m512i {
                unsafe { _mm512_inserti64x4::<1>(_mm512_castsi256_si512(lo), hi) }
            }
        }
    )*};
}

impl_half_registers!(f16, bf16);
