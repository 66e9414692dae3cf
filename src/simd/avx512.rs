//! AVX-512 backend for x86_64.
//!
//! AVX-512F/BW/VL provide 512-bit registers: 64×8-bit, 32×16-bit or
//! 16×32-bit lanes, plus opmask registers that make partial loads and stores
//! single masked instructions (no scalar tail loops, no over-read). VL adds
//! the masked 128/256-bit forms used by the narrow companion shapes.
//!
//! Only compiled when `avx512f`, `avx512bw` and `avx512vl` are all enabled
//! (e.g. via `-C target-cpu=native` on Skylake-X+ / Zen 4+).
//!
//! The element-specific mappings live in `f32_avx512`, `i32_avx512`,
//! `i16_avx512`, `i8_avx512` (both byte types), `f16_avx512` (both 16-bit
//! float formats) and `convert_avx512`.

use crate::traits::Backend;

/// x86 AVX-512 backend tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct X86Avx512;

impl Backend for X86Avx512 {
    const NAME: &'static str = "x86_avx512";
}
