//! Lane-type conversions on AVX-512.
//!
//! | From → To          | Instruction(s)                                   |
//! |--------------------|--------------------------------------------------|
//! | s32x16 → s8x16     | `vpmovsdb` (signed saturate)                     |
//! | s32x16 → u8x16     | `vpmaxsd` with 0, then `vpmovusdb`               |
//! | f32x16 → f16x16    | `vcvtps2ph`, round to nearest even               |
//! | f32x16 → bf16x16   | integer round-to-nearest-even, then `vpmovdw`    |
//! | f16x16 → f32x16    | `vcvtph2ps`                                      |
//! | bf16x16 → f32x16   | zero-extend and shift left 16                    |
//! | s8x16/u8x16 → s32  | `vpmovsxbd` / `vpmovzxbd`                        |
//!
//! `vpmovusdb` treats its input as unsigned, so negative lanes would become
//! 255 without the clamp at zero. The bf16 path needs no `avx512bf16`.

use core::arch::x86_64::*;

use half::{bf16, f16};

use super::avx512::X86Avx512;
use crate::traits::{Convert, ConvertPair};

#[inline(always)]
fn s32_to_s8(v: __m512i) -> __m128i {
    unsafe { _mm512_cvtsepi32_epi8(v) }
}

#[inline(always)]
fn s32_to_u8(v: __m512i) -> __m128i {
    unsafe { _mm512_cvtusepi32_epi8(_mm512_max_epi32(v, _mm512_setzero_si512())) }
}

/// Round-to-nearest-even on the raw f32 bits: add `0x7FFF` plus the lowest
/// kept bit, then keep the upper half. NaN lanes only get the quiet bit set
/// so the rounding carry cannot turn them into infinity.
#[inline(always)]
fn f32_to_bf16(v: __m512) -> __m256i {
    unsafe {
        let bits = _mm512_castps_si512(v);
        let lsb = _mm512_and_si512(_mm512_srli_epi32::<16>(bits), _mm512_set1_epi32(1));
        let bias = _mm512_add_epi32(lsb, _mm512_set1_epi32(0x7FFF));
        let rounded = _mm512_add_epi32(bits, bias);
        let nan = _mm512_cmp_ps_mask::<_CMP_UNORD_Q>(v, v);
        let quiet = _mm512_or_si512(bits, _mm512_set1_epi32(0x0040_0000));
        let rounded = _mm512_mask_mov_epi32(rounded, nan, quiet);
        _mm512_cvtepi32_epi16(_mm512_srli_epi32::<16>(rounded))
    }
}

impl Convert<i32, i8, 16> for X86Avx512 {
    #[inline]
    fn convert(v: __m512i) -> __m128i {
        s32_to_s8(v)
    }
}

impl Convert<i32, u8, 16> for X86Avx512 {
    #[inline]
    fn convert(v: __m512i) -> __m128i {
        s32_to_u8(v)
    }
}

impl ConvertPair<i32, i8, 16, 32> for X86Avx512 {
    #[inline]
    fn convert_pair(a: __m512i, b: __m512i) -> __m256i {
        unsafe { _mm256_set_m128i(s32_to_s8(b), s32_to_s8(a)) }
    }
}

impl ConvertPair<i32, u8, 16, 32> for X86Avx512 {
    #[inline]
    fn convert_pair(a: __m512i, b: __m512i) -> __m256i {
        unsafe { _mm256_set_m128i(s32_to_u8(b), s32_to_u8(a)) }
    }
}

impl Convert<f32, f16, 16> for X86Avx512 {
    #[inline]
    fn convert(v: __m512) -> __m256i {
        unsafe { _mm512_cvtps_ph::<{ _MM_FROUND_TO_NEAREST_INT | _MM_FROUND_NO_EXC }>(v) }
    }
}

impl Convert<f32, bf16, 16> for X86Avx512 {
    #[inline]
    fn convert(v: __m512) -> __m256i {
        f32_to_bf16(v)
    }
}

// ── Widening ────────────────────────────────────────────────────────

impl Convert<f16, f32, 16> for X86Avx512 {
    #[inline]
    fn convert(v: __m256i) -> __m512 {
        unsafe { _mm512_cvtph_ps(v) }
    }
}

impl Convert<bf16, f32, 16> for X86Avx512 {
    #[inline]
    fn convert(v: __m256i) -> __m512 {
        unsafe { _mm512_castsi512_ps(_mm512_slli_epi32::<16>(_mm512_cvtepu16_epi32(v))) }
    }
}

impl Convert<i8, i32, 16> for X86Avx512 {
    #[inline]
    fn convert(v: __m128i) -> __m512i {
        unsafe { _mm512_cvtepi8_epi32(v) }
    }
}

impl Convert<u8, i32, 16> for X86Avx512 {
    #[inline]
    fn convert(v: __m128i) -> __m512i {
        unsafe { _mm512_cvtepu8_epi32(v) }
    }
}

#[cfg(test)]
mod tests {
    use half::{bf16, f16};

    use crate::simd::{Scalar, X86Avx512};
    use crate::vector::Vector;

    #[test]
    fn unsigned_narrowing_clamps_negatives() {
        let lanes: [i32; 16] = core::array::from_fn(|i| [200, 300, -5, -1, 0, 255, 256, i32::MIN][i % 8]);
        let got = Vector::<X86Avx512, i32, 16>::from_array(lanes).convert::<u8>().to_array();
        assert_eq!(&got[..8], &[200, 255, 0, 0, 0, 255, 255, 0]);
    }

    #[test]
    fn pair_order() {
        let a = Vector::<X86Avx512, i32, 16>::splat(-1000);
        let b = Vector::<X86Avx512, i32, 16>::splat(1000);
        let v = Vector::<X86Avx512, i8, 32>::convert_pair(a, b).to_array();
        assert!(v[..16].iter().all(|&x| x == -128));
        assert!(v[16..].iter().all(|&x| x == 127));
    }

    #[test]
    fn bf16_matches_software_rounding() {
        let lanes: [f32; 16] = [
            1.0,
            f32::from_bits(0x3F80_8000),
            f32::from_bits(0x3F81_8000),
            f32::from_bits(0x3F80_8001),
            -2.5,
            f32::MAX,
            f32::MIN_POSITIVE,
            f32::from_bits(1),
            f32::INFINITY,
            f32::NEG_INFINITY,
            0.0,
            -0.0,
            f32::from_bits(0x7F80_0001),
            f32::NAN,
            3.0e38,
            -1.0e-40,
        ];
        let got = Vector::<X86Avx512, f32, 16>::from_array(lanes).convert::<bf16>().to_array();
        for (i, (&g, &x)) in got.iter().zip(&lanes).enumerate() {
            let want = bf16::from_f32(x);
            if x.is_nan() {
                assert!(g.is_nan(), "lane {i}");
            } else {
                assert_eq!(g.to_bits(), want.to_bits(), "lane {i}: {x}");
            }
        }
    }

    #[test]
    fn f16_matches_reference_and_widens_back() {
        let lanes: [f32; 16] = core::array::from_fn(|i| (i as f32 - 8.0) * 1234.567);
        let v = Vector::<X86Avx512, f32, 16>::from_array(lanes);
        let got = v.convert::<f16>();
        let want = Vector::<Scalar, f32, 16>::from_array(lanes).convert::<f16>();
        assert_eq!(got.to_array(), want.to_array());

        let back = got.convert::<f32>().to_array();
        for (i, &b) in back.iter().enumerate() {
            assert_eq!(b, want.lane(i).to_f32());
        }
    }

    #[test]
    fn byte_widening_extends() {
        let v = Vector::<X86Avx512, i8, 16>::splat(-3).convert::<i32>();
        assert_eq!(v.lane(15), -3);
        let v = Vector::<X86Avx512, u8, 16>::splat(253).convert::<i32>();
        assert_eq!(v.lane(0), 253);
    }
}
