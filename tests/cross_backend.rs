//! Randomised agreement between the AVX-512 backend and the scalar reference,
//! using plain random bit patterns rather than the conformance input sets.

#![cfg(all(
    target_arch = "x86_64",
    target_feature = "avx512f",
    target_feature = "avx512bw",
    target_feature = "avx512vl"
))]

use lanewise::{Element, Scalar, Vector, X86Avx512, bf16, f16};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ROUNDS: usize = 2000;

fn same<T: Element>(a: T, b: T) -> bool {
    a.lane_bits() == b.lane_bits() || (a.lane_is_nan() && b.lane_is_nan())
}

fn assert_lanes<T: Element, const N: usize>(hw: [T; N], reference: [T; N], what: &str) {
    for i in 0..N {
        assert!(same(hw[i], reference[i]), "{what} lane {i}: {:?} vs {:?}", hw[i], reference[i]);
    }
}

fn random_f32(rng: &mut StdRng) -> f32 {
    if rng.random_bool(0.2) { f32::from_bits(rng.random()) } else { rng.random_range(-1.0e3..1.0e3) }
}

// ── Integer lanes ───────────────────────────────────────────────────

#[test]
fn bytes_agree() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..ROUNDS {
        let a: [u8; 64] = core::array::from_fn(|_| rng.random());
        let b: [u8; 64] = core::array::from_fn(|_| rng.random());
        let (ha, hb) = (Vector::<X86Avx512, u8, 64>::from_array(a), Vector::<X86Avx512, u8, 64>::from_array(b));
        let (ra, rb) = (Vector::<Scalar, u8, 64>::from_array(a), Vector::<Scalar, u8, 64>::from_array(b));
        assert_lanes((ha + hb).to_array(), (ra + rb).to_array(), "u8 add");
        assert_lanes((ha - hb).to_array(), (ra - rb).to_array(), "u8 sub");
        assert_lanes(ha.min(hb).to_array(), ra.min(rb).to_array(), "u8 min");
        assert_eq!(ha.horizontal_max(), ra.horizontal_max());

        let sa = a.map(|x| x as i8);
        let sb = b.map(|x| x as i8);
        let (ha, hb) = (Vector::<X86Avx512, i8, 64>::from_array(sa), Vector::<X86Avx512, i8, 64>::from_array(sb));
        let (ra, rb) = (Vector::<Scalar, i8, 64>::from_array(sa), Vector::<Scalar, i8, 64>::from_array(sb));
        assert_lanes(ha.max(hb).to_array(), ra.max(rb).to_array(), "s8 max");
        assert_eq!(ha.horizontal_min(), ra.horizontal_min());
    }
}

#[test]
fn words_agree() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..ROUNDS {
        let a: [i16; 32] = core::array::from_fn(|_| rng.random());
        let b: [i16; 32] = core::array::from_fn(|_| rng.random());
        let (ha, hb) = (Vector::<X86Avx512, i16, 32>::from_array(a), Vector::<X86Avx512, i16, 32>::from_array(b));
        let (ra, rb) = (Vector::<Scalar, i16, 32>::from_array(a), Vector::<Scalar, i16, 32>::from_array(b));
        assert_lanes((ha * hb).to_array(), (ra * rb).to_array(), "s16 mul");
        assert_lanes(ha.min(hb).to_array(), ra.min(rb).to_array(), "s16 min");
        assert_eq!(ha.horizontal_min(), ra.horizontal_min());
        assert_eq!(hb.horizontal_max(), rb.horizontal_max());
    }
}

#[test]
fn dwords_agree() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..ROUNDS {
        let a: [i32; 16] = core::array::from_fn(|_| rng.random_range(-100_000..100_000));
        let b: [i32; 16] = core::array::from_fn(|_| rng.random());
        let (ha, hb) = (Vector::<X86Avx512, i32, 16>::from_array(a), Vector::<X86Avx512, i32, 16>::from_array(b));
        let (ra, rb) = (Vector::<Scalar, i32, 16>::from_array(a), Vector::<Scalar, i32, 16>::from_array(b));
        assert_lanes((ha * hb).to_array(), (ra * rb).to_array(), "s32 mul");
        assert_lanes(ha.convert::<u8>().to_array(), ra.convert::<u8>().to_array(), "s32 -> u8");
        assert_lanes(
            Vector::<X86Avx512, i8, 32>::convert_pair(ha, hb).to_array(),
            Vector::<Scalar, i8, 32>::convert_pair(ra, rb).to_array(),
            "(s32, s32) -> s8",
        );
    }
}

// ── Float lanes ─────────────────────────────────────────────────────

#[test]
fn floats_agree() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..ROUNDS {
        let a: [f32; 16] = core::array::from_fn(|_| random_f32(&mut rng));
        let b: [f32; 16] = core::array::from_fn(|_| random_f32(&mut rng));
        let c: [f32; 16] = core::array::from_fn(|_| random_f32(&mut rng));
        let h = |x| Vector::<X86Avx512, f32, 16>::from_array(x);
        let r = |x| Vector::<Scalar, f32, 16>::from_array(x);
        assert_lanes((h(a) * h(b)).to_array(), (r(a) * r(b)).to_array(), "f32 mul");
        assert_lanes(h(a).mul_add(h(b), h(c)).to_array(), r(a).mul_add(r(b), r(c)).to_array(), "f32 fma");
        assert_lanes(h(a).min(h(b)).to_array(), r(a).min(r(b)).to_array(), "f32 min");
        assert_lanes(h(a).max(h(b)).to_array(), r(a).max(r(b)).to_array(), "f32 max");

        let (hmax, rmax) = (h(a).horizontal_max(), r(a).horizontal_max());
        assert!(hmax == rmax || (hmax.is_nan() && rmax.is_nan()), "f32 hmax {hmax} vs {rmax}");

        assert_lanes(h(a).convert::<f16>().to_array(), r(a).convert::<f16>().to_array(), "f32 -> f16");
        assert_lanes(h(a).convert::<bf16>().to_array(), r(a).convert::<bf16>().to_array(), "f32 -> bf16");
    }
}

#[test]
fn partial_counts_agree() {
    let mut rng = StdRng::seed_from_u64(5);
    let src: [u8; 64] = core::array::from_fn(|_| rng.random());
    for _ in 0..ROUNDS {
        let count = rng.random_range(0..=64);
        let hw = Vector::<X86Avx512, u8, 64>::load_prefix(&src[..count]);
        let reference = Vector::<Scalar, u8, 64>::load_prefix(&src[..count]);
        assert_lanes(hw.to_array(), reference.to_array(), "u8 partial load");
    }
}
