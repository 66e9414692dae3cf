//! AVX-512 f32 lanes: f32x16 (`__m512`) and the f32x4 (`__m128`) companion.

use core::arch::x86_64::*;

use super::avx512::X86Avx512;
use super::prefix_mask;
use crate::traits::{Arithmetic, Extract, FusedMultiplyAdd, MinMax, Multiply, Register};

impl Register<f32, 16> for X86Avx512 {
    type Repr = __m512;

    #[inline]
    fn splat(value: f32) -> __m512 {
        unsafe { _mm512_set1_ps(value) }
    }

    #[inline]
    unsafe fn load(ptr: *const f32) -> __m512 {
        unsafe { _mm512_loadu_ps(ptr) }
    }

    #[inline]
    unsafe fn load_aligned(ptr: *const f32) -> __m512 {
        unsafe { _mm512_load_ps(ptr) }
    }

    #[inline]
    unsafe fn load_partial(ptr: *const f32, count: usize) -> __m512 {
        unsafe { _mm512_maskz_loadu_ps(prefix_mask(count) as __mmask16, ptr) }
    }

    #[inline]
    unsafe fn store(ptr: *mut f32, v: __m512) {
        unsafe { _mm512_storeu_ps(ptr, v) }
    }

    #[inline]
    unsafe fn store_aligned(ptr: *mut f32, v: __m512) {
        unsafe { _mm512_store_ps(ptr, v) }
    }

    #[inline]
    unsafe fn store_partial(ptr: *mut f32, v: __m512, count: usize) {
        unsafe { _mm512_mask_storeu_ps(ptr, prefix_mask(count) as __mmask16, v) }
    }
}

impl Register<f32, 4> for X86Avx512 {
    type Repr = __m128;

    #[inline]
    fn splat(value: f32) -> __m128 {
        unsafe { _mm_set1_ps(value) }
    }

    #[inline]
    unsafe fn load(ptr: *const f32) -> __m128 {
        unsafe { _mm_loadu_ps(ptr) }
    }

    #[inline]
    unsafe fn load_aligned(ptr: *const f32) -> __m128 {
        unsafe { _mm_load_ps(ptr) }
    }

    #[inline]
    unsafe fn load_partial(ptr: *const f32, count: usize) -> __m128 {
        unsafe { _mm_maskz_loadu_ps(prefix_mask(count) as __mmask8, ptr) }
    }

    #[inline]
    unsafe fn store(ptr: *mut f32, v: __m128) {
        unsafe { _mm_storeu_ps(ptr, v) }
    }

    #[inline]
    unsafe fn store_aligned(ptr: *mut f32, v: __m128) {
        unsafe { _mm_store_ps(ptr, v) }
    }

    #[inline]
    unsafe fn store_partial(ptr: *mut f32, v: __m128, count: usize) {
        unsafe { _mm_mask_storeu_ps(ptr, prefix_mask(count) as __mmask8, v) }
    }
}

impl Arithmetic<f32, 16> for X86Avx512 {
    #[inline]
    fn add(a: __m512, b: __m512) -> __m512 {
        unsafe { _mm512_add_ps(a, b) }
    }

    #[inline]
    fn sub(a: __m512, b: __m512) -> __m512 {
        unsafe { _mm512_sub_ps(a, b) }
    }
}

impl Multiply<f32, 16> for X86Avx512 {
    #[inline]
    fn mul(a: __m512, b: __m512) -> __m512 {
        unsafe { _mm512_mul_ps(a, b) }
    }
}

impl FusedMultiplyAdd<f32, 16> for X86Avx512 {
    #[inline]
    fn mul_add(a: __m512, b: __m512, c: __m512) -> __m512 {
        unsafe { _mm512_fmadd_ps(a, b, c) }
    }
}

/// `vminps` returns its second operand whenever either input is NaN; the
/// lanes where `b` is NaN are patched back to `a` so a NaN never wins.
#[inline(always)]
fn min_ps(a: __m512, b: __m512) -> __m512 {
    unsafe {
        let r = _mm512_min_ps(a, b);
        let b_nan = _mm512_cmp_ps_mask::<_CMP_UNORD_Q>(b, b);
        _mm512_mask_mov_ps(r, b_nan, a)
    }
}

#[inline(always)]
fn max_ps(a: __m512, b: __m512) -> __m512 {
    unsafe {
        let r = _mm512_max_ps(a, b);
        let b_nan = _mm512_cmp_ps_mask::<_CMP_UNORD_Q>(b, b);
        _mm512_mask_mov_ps(r, b_nan, a)
    }
}

/// Log-step reduction: swap 256-bit halves, then 128-bit blocks, then
/// 64-bit pairs, then neighbours; lane 0 ends up holding the result.
#[inline(always)]
fn reduce_ps(v: __m512, op: fn(__m512, __m512) -> __m512) -> f32 {
    unsafe {
        let v = op(v, _mm512_shuffle_f32x4::<0b01_00_11_10>(v, v));
        let v = op(v, _mm512_shuffle_f32x4::<0b10_11_00_01>(v, v));
        let v = op(v, _mm512_permute_ps::<0b01_00_11_10>(v));
        let v = op(v, _mm512_permute_ps::<0b10_11_00_01>(v));
        _mm512_cvtss_f32(v)
    }
}

impl MinMax<f32, 16> for X86Avx512 {
    #[inline]
    fn min(a: __m512, b: __m512) -> __m512 {
        min_ps(a, b)
    }

    #[inline]
    fn max(a: __m512, b: __m512) -> __m512 {
        max_ps(a, b)
    }

    #[inline]
    fn horizontal_min(v: __m512) -> f32 {
        reduce_ps(v, min_ps)
    }

    #[inline]
    fn horizontal_max(v: __m512) -> f32 {
        reduce_ps(v, max_ps)
    }
}

impl Extract<f32, 16, 4> for X86Avx512 {
    #[inline]
    fn extract(v: __m512, offset: usize) -> __m128 {
        unsafe {
            match offset / 4 {
                0 => _mm512_castps512_ps128(v),
                1 => _mm512_extractf32x4_ps::<1>(v),
                2 => _mm512_extractf32x4_ps::<2>(v),
                _ => _mm512_extractf32x4_ps::<3>(v),
            }
        }
    }
}
