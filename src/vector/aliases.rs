//! Shape aliases, named `<element><bits>x<lanes>` like the conformance
//! reports. The plain names are fixed to [`Native`]; the `*In<B>` forms take
//! the backend explicitly.
//!
//! ```
//! use lanewise::{F32x16, F32x16In, Scalar};
//!
//! let native = F32x16::splat(2.0);
//! let scalar = F32x16In::<Scalar>::splat(2.0);
//! assert_eq!(native.to_array(), scalar.to_array());
//! ```

use half::{bf16, f16};

use crate::simd::Native;
use crate::vector::Vector;

// ── Full 512-bit shapes ─────────────────────────────────────────────

/// 64 × `u8`.
pub type U8x64 = Vector<Native, u8, 64>;
/// 64 × `i8`.
pub type S8x64 = Vector<Native, i8, 64>;
/// 32 × `i16`.
pub type S16x32 = Vector<Native, i16, 32>;
/// 32 × `f16`.
pub type F16x32 = Vector<Native, f16, 32>;
/// 32 × `bf16`.
pub type Bf16x32 = Vector<Native, bf16, 32>;
/// 16 × `f32`.
pub type F32x16 = Vector<Native, f32, 16>;
/// 16 × `i32`.
pub type S32x16 = Vector<Native, i32, 16>;

// ── Narrow companions ───────────────────────────────────────────────

/// 32 × `u8` (256-bit).
pub type U8x32 = Vector<Native, u8, 32>;
/// 32 × `i8` (256-bit).
pub type S8x32 = Vector<Native, i8, 32>;
/// 16 × `f16` (256-bit).
pub type F16x16 = Vector<Native, f16, 16>;
/// 16 × `bf16` (256-bit).
pub type Bf16x16 = Vector<Native, bf16, 16>;
/// 16 × `u8` (128-bit).
pub type U8x16 = Vector<Native, u8, 16>;
/// 16 × `i8` (128-bit).
pub type S8x16 = Vector<Native, i8, 16>;
/// 4 × `f32` (128-bit).
pub type F32x4 = Vector<Native, f32, 4>;
/// 4 × `i32` (128-bit).
pub type S32x4 = Vector<Native, i32, 4>;

// ── Backend-generic forms ───────────────────────────────────────────

/// [`U8x64`] on backend `B`; the other `*In` aliases follow the same pattern.
pub type U8x64In<B> = Vector<B, u8, 64>;
pub type S8x64In<B> = Vector<B, i8, 64>;
pub type S16x32In<B> = Vector<B, i16, 32>;
pub type F16x32In<B> = Vector<B, f16, 32>;
pub type Bf16x32In<B> = Vector<B, bf16, 32>;
pub type F32x16In<B> = Vector<B, f32, 16>;
pub type S32x16In<B> = Vector<B, i32, 16>;
pub type U8x32In<B> = Vector<B, u8, 32>;
pub type S8x32In<B> = Vector<B, i8, 32>;
pub type F16x16In<B> = Vector<B, f16, 16>;
pub type Bf16x16In<B> = Vector<B, bf16, 16>;
pub type U8x16In<B> = Vector<B, u8, 16>;
pub type S8x16In<B> = Vector<B, i8, 16>;
pub type F32x4In<B> = Vector<B, f32, 4>;
pub type S32x4In<B> = Vector<B, i32, 4>;
