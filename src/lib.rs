//! # lanewise
//!
//! Fixed-width SIMD vectors behind one portable contract, no-std compatible.
//! Kernels are written once against [`Vector<B, T, N>`]; the backend `B` is a
//! zero-sized tag chosen at compile time, so every operation inlines to the
//! backend's instructions with no dispatch.
//!
//! ## Quick start
//!
//! ```
//! use lanewise::{F32x16, S32x16, U8x16};
//!
//! let a = F32x16::splat(1.5);
//! let b = F32x16::from_array(core::array::from_fn(|i| i as f32));
//! assert_eq!((a * b).horizontal_max(), 22.5);
//!
//! // Saturating narrow: 300 clamps to 255, -5 to 0.
//! let wide = S32x16::from_array(core::array::from_fn(|i| [200, 300, -5, 7][i % 4]));
//! let narrow: U8x16 = wide.convert();
//! assert_eq!(&narrow.to_array()[..4], &[200, 255, 0, 7]);
//! ```
//!
//! ## Modules
//!
//! - [`vector`] — The [`Vector`] value type: broadcast, unaligned / aligned /
//!   partial loads and stores, lane-wise arithmetic, min/max, fused
//!   multiply-add, horizontal reductions, extract, concat and conversions.
//!   [`Aligned`] provides register-aligned storage. Shape aliases such as
//!   [`S8x64`] or [`Bf16x32`] are fixed to the [`Native`] backend;
//!   [`S8x64In<B>`](S8x64In) and friends name the same shapes on any backend.
//!
//! - [`simd`] — Backends. [`Scalar`] is a plain-array reference available on
//!   every target; [`X86Avx512`] maps the contract onto AVX-512F/BW/VL and is
//!   only compiled when those target features are enabled. [`Native`] names
//!   the widest backend of the build.
//!
//! - [`traits`] — Lane element traits ([`Element`], [`LaneArith`],
//!   [`LaneOrd`], [`LaneFma`], [`ConvertLane`]) that define the per-lane
//!   reference semantics, and the backend capability traits ([`Register`],
//!   [`Arithmetic`], [`Multiply`], [`MinMax`], [`FusedMultiplyAdd`],
//!   [`Extract`], [`Concat`], [`Convert`], [`ConvertPair`]).
//!
//! - `conformance` — Generic checks that compare a backend against the lane
//!   reference, per-backend instantiation tables and a runner. Requires the
//!   `conformance` feature.
//!
//! ## Float min/max
//!
//! A NaN operand never wins: `min(a, b)` is `a` when `a < b` or `b` is NaN,
//! otherwise `b` (so ties, including `-0.0` vs `+0.0`, give `b`). Every
//! backend follows this rule, so results are bit-identical across backends.
//!
//! ## Cargo features
//!
//! | Feature       | Default | Description |
//! |---------------|---------|-------------|
//! | `std`         | yes     | `std::error::Error` for conformance mismatches; hardware `mul_add` via std |
//! | `conformance` | yes     | Conformance harness (`rand` small RNG, `tracing` events) |
//! | `all`         | no      | All features |
//!
//! Backend selection is not a feature: build with `-C target-cpu=native` (or
//! `-C target-feature=+avx512f,+avx512bw,+avx512vl`) to get [`X86Avx512`].

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "conformance")]
pub mod conformance;
pub mod simd;
pub mod traits;
pub mod vector;

pub use simd::{Native, Scalar};
#[cfg(all(
    target_arch = "x86_64",
    target_feature = "avx512f",
    target_feature = "avx512bw",
    target_feature = "avx512vl"
))]
pub use simd::X86Avx512;
pub use traits::{
    Arithmetic, Backend, Concat, Convert, ConvertLane, ConvertPair, Element, Extract, FusedMultiplyAdd, LaneArith,
    LaneFma, LaneOrd, MinMax, Multiply, Register,
};
pub use vector::aliases::{
    Bf16x16, Bf16x16In, Bf16x32, Bf16x32In, F16x16, F16x16In, F16x32, F16x32In, F32x4, F32x4In, F32x16, F32x16In,
    S8x16, S8x16In, S8x32, S8x32In, S8x64, S8x64In, S16x32, S16x32In, S32x4, S32x4In, S32x16, S32x16In, U8x16, U8x16In,
    U8x32, U8x32In, U8x64, U8x64In,
};
pub use vector::{Aligned, Vector};

pub use half::{bf16, f16};
