//! Backend implementations of the vector contract.
//!
//! ## Selection strategy
//!
//! Backends are chosen at compile time from the enabled target features;
//! there is no runtime detection and no dynamic dispatch. [`Native`] names the
//! widest backend the build supports:
//!
//! | Arch      | Required target features              | `Native`      |
//! |-----------|----------------------------------------|---------------|
//! | `x86_64`  | `avx512f` + `avx512bw` + `avx512vl`    | `X86Avx512`   |
//! | other     | —                                      | `Scalar`      |
//!
//! Enable via `-C target-cpu=native` on Skylake-X / Ice Lake / Zen 4 or newer,
//! or explicitly with `-C target-feature=+avx512f,+avx512bw,+avx512vl`.
//!
//! [`Scalar`] is always compiled. It implements every capability for every
//! element type and lane count with plain arrays, and is the reference the
//! conformance harness checks every other backend against.
//!
//! ## Register map for `X86Avx512`
//!
//! | Shape                                   | Register  |
//! |-----------------------------------------|-----------|
//! | u8x64, s8x64, s16x32, f16x32, bf16x32, s32x16 | `__m512i` |
//! | f32x16                                  | `__m512`  |
//! | u8x32, s8x32, f16x16, bf16x16           | `__m256i` |
//! | u8x16, s8x16, s32x4                     | `__m128i` |
//! | f32x4                                   | `__m128`  |

pub(crate) mod scalar;

#[cfg(all(
    target_arch = "x86_64",
    target_feature = "avx512f",
    target_feature = "avx512bw",
    target_feature = "avx512vl"
))]
pub(crate) mod avx512;
#[cfg(all(
    target_arch = "x86_64",
    target_feature = "avx512f",
    target_feature = "avx512bw",
    target_feature = "avx512vl"
))]
mod convert_avx512;
#[cfg(all(
    target_arch = "x86_64",
    target_feature = "avx512f",
    target_feature = "avx512bw",
    target_feature = "avx512vl"
))]
mod f16_avx512;
#[cfg(all(
    target_arch = "x86_64",
    target_feature = "avx512f",
    target_feature = "avx512bw",
    target_feature = "avx512vl"
))]
mod f32_avx512;
#[cfg(all(
    target_arch = "x86_64",
    target_feature = "avx512f",
    target_feature = "avx512bw",
    target_feature = "avx512vl"
))]
mod i16_avx512;
#[cfg(all(
    target_arch = "x86_64",
    target_feature = "avx512f",
    target_feature = "avx512bw",
    target_feature = "avx512vl"
))]
mod i32_avx512;
#[cfg(all(
    target_arch = "x86_64",
    target_feature = "avx512f",
    target_feature = "avx512bw",
    target_feature = "avx512vl"
))]
mod i8_avx512;

pub use scalar::Scalar;

#[cfg(all(
    target_arch = "x86_64",
    target_feature = "avx512f",
    target_feature = "avx512bw",
    target_feature = "avx512vl"
))]
pub use avx512::X86Avx512;

/// The widest backend available to this build.
#[cfg(all(
    target_arch = "x86_64",
    target_feature = "avx512f",
    target_feature = "avx512bw",
    target_feature = "avx512vl"
))]
pub type Native = X86Avx512;

/// The widest backend available to this build.
#[cfg(not(all(
    target_arch = "x86_64",
    target_feature = "avx512f",
    target_feature = "avx512bw",
    target_feature = "avx512vl"
)))]
pub type Native = Scalar;

/// Bit mask with the low `count` bits set, for masked partial access.
///
/// `count` is at most the lane count of the register being masked, so at
/// most 64.
#[cfg(any(
    test,
    all(
        target_arch = "x86_64",
        target_feature = "avx512f",
        target_feature = "avx512bw",
        target_feature = "avx512vl"
    )
))]
#[inline(always)]
pub(crate) const fn prefix_mask(count: usize) -> u64 {
    if count >= 64 { u64::MAX } else { (1_u64 << count) - 1 }
}
