use core::fmt::Debug;

use half::{bf16, f16};
use num_traits::Float;

// ── Element traits ──────────────────────────────────────────────────

/// Trait for types that can occupy one lane of a vector register.
///
/// Implemented for `u8`, `i8`, `i16`, `i32`, `f32`, [`f16`] and [`bf16`].
/// The short [`NAME`](Element::NAME) follows the `s8x64` / `bf16x32` shape
/// naming used throughout the crate.
pub trait Element: Copy + PartialEq + Debug + Default + Send + Sync + 'static {
    /// Width of one lane in bits.
    const BITS: u32;
    /// Short type name (`u8`, `s8`, `s16`, `s32`, `f32`, `f16`, `bf16`).
    const NAME: &'static str;

    /// Raw bit pattern, zero-extended to 32 bits.
    fn lane_bits(self) -> u32;

    /// `true` only for floating NaN values.
    #[inline]
    fn lane_is_nan(self) -> bool {
        false
    }

    /// Lossless widening, used for diagnostics.
    fn to_f64(self) -> f64;
}

/// Wrapping (integer) or IEEE single-rounding (float) lane arithmetic.
pub trait LaneArith: Element {
    fn lane_add(self, rhs: Self) -> Self;
    fn lane_sub(self, rhs: Self) -> Self;
    fn lane_mul(self, rhs: Self) -> Self;
}

/// Lane ordering used by `min`, `max` and the horizontal reductions.
///
/// Integers compare by their declared signedness. For `f32` a NaN never
/// wins: `min(a, b)` is `a` when `a < b` or when `b` is NaN, otherwise `b`.
/// Ties (including `-0.0` against `+0.0`) return the second operand.
pub trait LaneOrd: Element {
    fn lane_min(self, rhs: Self) -> Self;
    fn lane_max(self, rhs: Self) -> Self;
}

/// Fused multiply-add with a single rounding step.
pub trait LaneFma: LaneArith {
    /// `self * b + c`, rounded once.
    fn lane_mul_add(self, b: Self, c: Self) -> Self;
}

/// Per-lane element conversion.
///
/// Integer narrowing saturates to the destination range; float narrowing
/// rounds to nearest even; widening is exact.
pub trait ConvertLane<D: Element>: Element {
    fn convert_lane(self) -> D;
}

macro_rules! impl_int_element {
    ($($t:ty => $name:literal, $bits:literal, $unsigned:ty);* $(;)?) => {
        $(
            impl Element for $t {
                const BITS: u32 = $bits;
                const NAME: &'static str = $name;

                #[inline] fn lane_bits(self) -> u32 { self as $unsigned as u32 }
                #[inline] fn to_f64(self) -> f64 { self as f64 }
            }

            impl LaneArith for $t {
                #[inline] fn lane_add(self, rhs: Self) -> Self { self.wrapping_add(rhs) }
                #[inline] fn lane_sub(self, rhs: Self) -> Self { self.wrapping_sub(rhs) }
                #[inline] fn lane_mul(self, rhs: Self) -> Self { self.wrapping_mul(rhs) }
            }

            impl LaneOrd for $t {
                #[inline] fn lane_min(self, rhs: Self) -> Self { Ord::min(self, rhs) }
                #[inline] fn lane_max(self, rhs: Self) -> Self { Ord::max(self, rhs) }
            }
        )*
    };
}

impl_int_element! {
    u8 => "u8", 8, u8;
    i8 => "s8", 8, u8;
    i16 => "s16", 16, u16;
    i32 => "s32", 32, u32;
}

impl Element for f32 {
    const BITS: u32 = 32;
    const NAME: &'static str = "f32";

    #[inline]
    fn lane_bits(self) -> u32 {
        self.to_bits()
    }

    #[inline]
    fn lane_is_nan(self) -> bool {
        self.is_nan()
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl LaneArith for f32 {
    #[inline]
    fn lane_add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline]
    fn lane_sub(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline]
    fn lane_mul(self, rhs: Self) -> Self {
        self * rhs
    }
}

impl LaneOrd for f32 {
    #[inline]
    fn lane_min(self, rhs: Self) -> Self {
        if self < rhs || rhs.is_nan() { self } else { rhs }
    }

    #[inline]
    fn lane_max(self, rhs: Self) -> Self {
        if self > rhs || rhs.is_nan() { self } else { rhs }
    }
}

impl LaneFma for f32 {
    #[inline]
    fn lane_mul_add(self, b: Self, c: Self) -> Self {
        Float::mul_add(self, b, c)
    }
}

/// 16-bit floats are storage-only lanes: they travel through registers
/// and conversions but have no arithmetic in this crate.
macro_rules! impl_half_element {
    ($($t:ty => $name:literal),* $(,)?) => {
        $(
            impl Element for $t {
                const BITS: u32 = 16;
                const NAME: &'static str = $name;

                #[inline] fn lane_bits(self) -> u32 { self.to_bits() as u32 }
                #[inline] fn lane_is_nan(self) -> bool { self.is_nan() }
                #[inline] fn to_f64(self) -> f64 { self.to_f32() as f64 }
            }
        )*
    };
}

impl_half_element!(f16 => "f16", bf16 => "bf16");

// ── Conversion table ────────────────────────────────────────────────

impl ConvertLane<i8> for i32 {
    #[inline]
    fn convert_lane(self) -> i8 {
        self.clamp(i8::MIN as i32, i8::MAX as i32) as i8
    }
}

impl ConvertLane<u8> for i32 {
    #[inline]
    fn convert_lane(self) -> u8 {
        self.clamp(0, u8::MAX as i32) as u8
    }
}

impl ConvertLane<f16> for f32 {
    #[inline]
    fn convert_lane(self) -> f16 {
        f16::from_f32(self)
    }
}

impl ConvertLane<bf16> for f32 {
    #[inline]
    fn convert_lane(self) -> bf16 {
        bf16::from_f32(self)
    }
}

impl ConvertLane<f32> for f16 {
    #[inline]
    fn convert_lane(self) -> f32 {
        self.to_f32()
    }
}

impl ConvertLane<f32> for bf16 {
    #[inline]
    fn convert_lane(self) -> f32 {
        self.to_f32()
    }
}

impl ConvertLane<i32> for i8 {
    #[inline]
    fn convert_lane(self) -> i32 {
        self as i32
    }
}

impl ConvertLane<i32> for u8 {
    #[inline]
    fn convert_lane(self) -> i32 {
        self as i32
    }
}

// ── Backend capability traits ───────────────────────────────────────

/// A compile-time backend tag.
///
/// Backends are zero-sized types; every operation is an associated function
/// of one of the capability traits below, so calls resolve statically and
/// inline into the caller.
pub trait Backend: Copy + Clone + Debug + Default + PartialEq + Send + Sync + 'static {
    /// Name used in conformance reports (`scalar`, `x86_avx512`).
    const NAME: &'static str;
}

/// An `N`-lane vector of `T` that the backend holds in one register.
///
/// # Safety contract of the raw-pointer functions
///
/// Callers guarantee that `ptr` is valid for `N` reads/writes of `T` (for
/// the partial variants: `count` elements with `count <= N`), and for the
/// aligned variants that `ptr` is aligned to `N * size_of::<T>()` bytes.
/// [`Vector`](crate::Vector) checks these in debug builds.
pub trait Register<T: Element, const N: usize>: Backend {
    /// Hardware representation.
    type Repr: Copy;

    fn splat(value: T) -> Self::Repr;

    unsafe fn load(ptr: *const T) -> Self::Repr;
    unsafe fn load_aligned(ptr: *const T) -> Self::Repr;
    /// Reads `count` elements; lanes `count..N` are zero. Never touches
    /// memory past `ptr + count`.
    unsafe fn load_partial(ptr: *const T, count: usize) -> Self::Repr;

    unsafe fn store(ptr: *mut T, v: Self::Repr);
    unsafe fn store_aligned(ptr: *mut T, v: Self::Repr);
    /// Writes lanes `0..count` and nothing else.
    unsafe fn store_partial(ptr: *mut T, v: Self::Repr, count: usize);
}

/// Lane-wise add and subtract (wrapping for integers).
pub trait Arithmetic<T: Element, const N: usize>: Register<T, N> {
    fn add(a: Self::Repr, b: Self::Repr) -> Self::Repr;
    fn sub(a: Self::Repr, b: Self::Repr) -> Self::Repr;
}

/// Lane-wise multiply (low half for integers).
pub trait Multiply<T: Element, const N: usize>: Register<T, N> {
    fn mul(a: Self::Repr, b: Self::Repr) -> Self::Repr;
}

/// Lane-wise and horizontal min/max with [`LaneOrd`] semantics.
pub trait MinMax<T: Element, const N: usize>: Register<T, N> {
    fn min(a: Self::Repr, b: Self::Repr) -> Self::Repr;
    fn max(a: Self::Repr, b: Self::Repr) -> Self::Repr;
    fn horizontal_min(v: Self::Repr) -> T;
    fn horizontal_max(v: Self::Repr) -> T;
}

/// `a * b + c` with one rounding.
pub trait FusedMultiplyAdd<T: Element, const N: usize>: Multiply<T, N> {
    fn mul_add(a: Self::Repr, b: Self::Repr, c: Self::Repr) -> Self::Repr;
}

/// `W` contiguous lanes starting at `offset` (a multiple of `W`).
pub trait Extract<T: Element, const N: usize, const W: usize>:
    Register<T, N> + Register<T, W>
{
    fn extract(v: <Self as Register<T, N>>::Repr, offset: usize) -> <Self as Register<T, W>>::Repr;
}

/// Joins two `W`-lane halves into one `N = 2W`-lane vector, `lo` first.
pub trait Concat<T: Element, const W: usize, const N: usize>:
    Register<T, W> + Register<T, N>
{
    fn concat(
        lo: <Self as Register<T, W>>::Repr,
        hi: <Self as Register<T, W>>::Repr,
    ) -> <Self as Register<T, N>>::Repr;
}

/// Same lane count, different element type.
pub trait Convert<S: Element, D: Element, const N: usize>: Register<S, N> + Register<D, N> {
    fn convert(v: <Self as Register<S, N>>::Repr) -> <Self as Register<D, N>>::Repr;
}

/// Two `N`-lane sources into one `M = 2N`-lane destination: lanes `0..N`
/// come from `a`, lanes `N..M` from `b`.
pub trait ConvertPair<S: Element, D: Element, const N: usize, const M: usize>:
    Register<S, N> + Register<D, M>
{
    fn convert_pair(
        a: <Self as Register<S, N>>::Repr,
        b: <Self as Register<S, N>>::Repr,
    ) -> <Self as Register<D, M>>::Repr;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturating_narrow_to_u8() {
        assert_eq!(ConvertLane::<u8>::convert_lane(200_i32), 200);
        assert_eq!(ConvertLane::<u8>::convert_lane(300_i32), 255);
        assert_eq!(ConvertLane::<u8>::convert_lane(-5_i32), 0);
        assert_eq!(ConvertLane::<u8>::convert_lane(i32::MIN), 0);
    }

    #[test]
    fn saturating_narrow_to_i8() {
        assert_eq!(ConvertLane::<i8>::convert_lane(-129_i32), -128);
        assert_eq!(ConvertLane::<i8>::convert_lane(128_i32), 127);
        assert_eq!(ConvertLane::<i8>::convert_lane(-5_i32), -5);
        assert_eq!(ConvertLane::<i8>::convert_lane(i32::MAX), 127);
    }

    #[test]
    fn integer_arith_wraps() {
        assert_eq!(250_u8.lane_add(10), 4);
        assert_eq!((-128_i8).lane_sub(1), 127);
        assert_eq!(i32::MAX.lane_mul(2), -2);
        assert_eq!(i16::MIN.lane_mul(-1), i16::MIN);
    }

    #[test]
    fn integer_order_follows_signedness() {
        assert_eq!(200_u8.lane_min(100), 100);
        assert_eq!((-56_i8).lane_min(100), -56);
        assert_eq!((-56_i8).lane_max(100), 100);
    }

    #[test]
    fn float_min_max_nan_never_wins() {
        assert_eq!(f32::NAN.lane_min(1.0), 1.0);
        assert_eq!(1.0_f32.lane_min(f32::NAN), 1.0);
        assert_eq!(f32::NAN.lane_max(-1.0), -1.0);
        assert_eq!((-1.0_f32).lane_max(f32::NAN), -1.0);
        assert!(f32::NAN.lane_min(f32::NAN).is_nan());
    }

    #[test]
    fn float_min_max_ties_return_second() {
        assert_eq!(0.0_f32.lane_min(-0.0).to_bits(), (-0.0_f32).to_bits());
        assert_eq!((-0.0_f32).lane_min(0.0).to_bits(), 0.0_f32.to_bits());
        assert_eq!(0.0_f32.lane_max(-0.0).to_bits(), (-0.0_f32).to_bits());
    }

    #[test]
    fn fma_rounds_once() {
        // (1 + 2^-23)^2 - (1 + 2^-22) = 2^-46 exactly; the unfused form loses it.
        let a = 1.0_f32 + f32::EPSILON;
        let c = -(1.0_f32 + 2.0 * f32::EPSILON);
        assert_eq!(a.lane_mul_add(a, c), f32::EPSILON * f32::EPSILON);
        assert_eq!(a.lane_mul(a).lane_add(c), 0.0);
    }

    #[test]
    fn half_conversions_round_to_nearest_even() {
        // 1 + 2^-11 is halfway between f16 1.0 and the next value; ties to even.
        let halfway = f32::from_bits(0x3F80_1000);
        assert_eq!(ConvertLane::<f16>::convert_lane(halfway).to_bits(), 0x3C00);
        let above = f32::from_bits(0x3F80_1008);
        assert_eq!(ConvertLane::<f16>::convert_lane(above).to_bits(), 0x3C01);
        let bf = ConvertLane::<bf16>::convert_lane(f32::from_bits(0x3F80_8000));
        assert_eq!(bf.to_bits(), 0x3F80);
        let bf = ConvertLane::<bf16>::convert_lane(f32::from_bits(0x3F81_8000));
        assert_eq!(bf.to_bits(), 0x3F82);
    }

    #[test]
    fn lane_bits_zero_extend() {
        assert_eq!((-1_i8).lane_bits(), 0xFF);
        assert_eq!((-1_i16).lane_bits(), 0xFFFF);
        assert_eq!(f16::ONE.lane_bits(), 0x3C00);
        assert!(bf16::NAN.lane_is_nan());
        assert!(!7_u8.lane_is_nan());
    }
}
