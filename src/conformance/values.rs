//! Input generation for the conformance checks.
//!
//! Every element type carries a fixed boundary set plus a seeded random
//! sampler. Inputs are deterministic: the seed depends only on the element
//! type, the lane count and the input-set index, so a failing case reruns
//! with identical lanes.

use core::array;

use half::{bf16, f16};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::Input;
use crate::traits::Element;

/// Random input sets generated per check, in addition to the boundary sweep.
pub const INPUT_SETS: u32 = 8;

/// Values the harness feeds through every operation.
pub trait TestValues: Element {
    /// `true` for the floating formats.
    const IS_FLOAT: bool;

    /// Extremes and special values that every operation must handle.
    const BOUNDARY: &'static [Self];

    /// One random value.
    fn sample(rng: &mut SmallRng) -> Self;
}

impl TestValues for u8 {
    const IS_FLOAT: bool = false;
    const BOUNDARY: &'static [Self] = &[0, 1, 2, 127, 128, 200, 254, 255];

    fn sample(rng: &mut SmallRng) -> Self {
        rng.random()
    }
}

impl TestValues for i8 {
    const IS_FLOAT: bool = false;
    const BOUNDARY: &'static [Self] = &[i8::MIN, -127, -5, -1, 0, 1, 5, 126, i8::MAX];

    fn sample(rng: &mut SmallRng) -> Self {
        rng.random()
    }
}

impl TestValues for i16 {
    const IS_FLOAT: bool = false;
    const BOUNDARY: &'static [Self] = &[i16::MIN, -256, -129, -1, 0, 1, 255, 256, 300, i16::MAX];

    fn sample(rng: &mut SmallRng) -> Self {
        rng.random()
    }
}

impl TestValues for i32 {
    const IS_FLOAT: bool = false;
    const BOUNDARY: &'static [Self] = &[
        i32::MIN,
        -129,
        -128,
        -5,
        -1,
        0,
        1,
        127,
        128,
        200,
        255,
        256,
        300,
        65_536,
        i32::MAX,
    ];

    fn sample(rng: &mut SmallRng) -> Self {
        // Mostly near the narrowing boundaries, sometimes anywhere.
        if rng.random_bool(0.5) { rng.random_range(-400..400) } else { rng.random() }
    }
}

impl TestValues for f32 {
    const IS_FLOAT: bool = true;
    const BOUNDARY: &'static [Self] = &[
        0.0,
        -0.0,
        1.0,
        -1.0,
        0.5,
        f32::INFINITY,
        f32::NEG_INFINITY,
        f32::NAN,
        f32::MAX,
        f32::MIN,
        f32::MIN_POSITIVE,
        f32::from_bits(1),
        f32::from_bits(0x3F80_8000),
        f32::from_bits(0x3F80_1000),
        65504.0,
        65520.0,
        f32::EPSILON,
    ];

    fn sample(rng: &mut SmallRng) -> Self {
        if rng.random_bool(0.25) {
            f32::from_bits(rng.random())
        } else {
            rng.random_range(-1.0e4..1.0e4)
        }
    }
}

impl TestValues for f16 {
    const IS_FLOAT: bool = true;
    const BOUNDARY: &'static [Self] = &[
        f16::ZERO,
        f16::NEG_ZERO,
        f16::ONE,
        f16::NEG_ONE,
        f16::INFINITY,
        f16::NEG_INFINITY,
        f16::NAN,
        f16::MAX,
        f16::MIN,
        f16::MIN_POSITIVE,
        f16::MIN_POSITIVE_SUBNORMAL,
    ];

    fn sample(rng: &mut SmallRng) -> Self {
        f16::from_bits(rng.random())
    }
}

impl TestValues for bf16 {
    const IS_FLOAT: bool = true;
    const BOUNDARY: &'static [Self] = &[
        bf16::ZERO,
        bf16::NEG_ZERO,
        bf16::ONE,
        bf16::NEG_ONE,
        bf16::INFINITY,
        bf16::NEG_INFINITY,
        bf16::NAN,
        bf16::MAX,
        bf16::MIN,
        bf16::MIN_POSITIVE,
        bf16::MIN_POSITIVE_SUBNORMAL,
    ];

    fn sample(rng: &mut SmallRng) -> Self {
        bf16::from_bits(rng.random())
    }
}

#[inline]
fn seed<T: Element, const N: usize>(set: u32) -> u64 {
    0x6C61_6E65_0000_0000 ^ ((set as u64) << 24) ^ ((N as u64) << 8) ^ T::BITS as u64
}

/// Input set `set`: every third lane is a boundary value (rotating with the
/// set), the rest are random samples.
pub fn lanes<T: TestValues, const N: usize>(set: u32) -> [T; N] {
    let mut rng = SmallRng::seed_from_u64(seed::<T, N>(set));
    let boundary = T::BOUNDARY;
    array::from_fn(|i| {
        if i % 3 == 0 {
            boundary[(i / 3 + set as usize) % boundary.len()]
        } else {
            T::sample(&mut rng)
        }
    })
}

/// Feeds `f` the boundary values in lane-sized chunks, then every random set.
pub fn for_each_single<T: TestValues, const N: usize, E>(
    mut f: impl FnMut(Input, [T; N]) -> Result<(), E>,
) -> Result<(), E> {
    let boundary = T::BOUNDARY;
    for chunk in 0..boundary.len().div_ceil(N) {
        f(Input::Boundary(chunk), array::from_fn(|i| boundary[(chunk * N + i) % boundary.len()]))?;
    }
    for set in 0..INPUT_SETS {
        f(Input::Set(set), lanes(set))?;
    }
    Ok(())
}

/// Feeds `f` every ordered pair of boundary values, lane by lane, then pairs
/// of random sets.
pub fn for_each_pair<T: TestValues, const N: usize, E>(
    mut f: impl FnMut(Input, [T; N], [T; N]) -> Result<(), E>,
) -> Result<(), E> {
    let boundary = T::BOUNDARY;
    let len = boundary.len();
    let pairs = len * len;
    for chunk in 0..pairs.div_ceil(N) {
        let a = array::from_fn(|i| boundary[((chunk * N + i) % pairs) / len]);
        let b = array::from_fn(|i| boundary[((chunk * N + i) % pairs) % len]);
        f(Input::Boundary(chunk), a, b)?;
    }
    for set in 0..INPUT_SETS {
        f(Input::Set(set), lanes(2 * set), lanes(2 * set + 1))?;
    }
    Ok(())
}

/// Like [`for_each_pair`], with a third operand: the boundary set rotated
/// by the chunk index, or a third random set.
pub fn for_each_triple<T: TestValues, const N: usize, E>(
    mut f: impl FnMut(Input, [T; N], [T; N], [T; N]) -> Result<(), E>,
) -> Result<(), E> {
    let boundary = T::BOUNDARY;
    let len = boundary.len();
    let mut chunk = 0;
    for_each_pair::<T, N, E>(|input, a, b| {
        let c = match input {
            Input::Set(set) => lanes(INPUT_SETS * 2 + set),
            _ => {
                chunk += 1;
                array::from_fn(|i| boundary[(i + chunk) % len])
            }
        };
        f(input, a, b, c)
    })
}
