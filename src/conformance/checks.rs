//! One generic check per operation category.
//!
//! Each check drives a backend through the public [`Vector`] API and compares
//! every lane with the element-level reference. Comparison classes:
//!
//! | Operations                                     | Accepts                          |
//! |------------------------------------------------|----------------------------------|
//! | loads, stores, integer ops, float add/sub/mul/min/max/fma | identical bits, or both NaN |
//! | narrowing to `f16` / `bf16`                    | one unit in the last place       |
//! | horizontal min/max                             | equal value (`-0.0 == 0.0`), or both NaN |

use core::array;

use super::values::{TestValues, for_each_pair, for_each_single, for_each_triple};
use super::{Input, LaneValue, Mismatch, Operation, Shape};
use crate::traits::{
    Arithmetic, Concat, Convert, ConvertLane, ConvertPair, Element, Extract, FusedMultiplyAdd, LaneArith, LaneFma,
    LaneOrd, MinMax, Multiply, Register,
};
use crate::vector::{Aligned, Vector};

type Outcome = Result<(), Mismatch>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tolerance {
    Exact,
    OneUlp,
    Value,
}

impl Tolerance {
    fn accepts<T: Element>(self, expected: T, actual: T) -> bool {
        if expected.lane_is_nan() || actual.lane_is_nan() {
            return expected.lane_is_nan() && actual.lane_is_nan();
        }
        match self {
            Tolerance::Exact => expected.lane_bits() == actual.lane_bits(),
            Tolerance::OneUlp => (expected.lane_bits() as i64 - actual.lane_bits() as i64).abs() <= 1,
            Tolerance::Value => expected.to_f64() == actual.to_f64(),
        }
    }
}

/// Identifies the case while comparing lanes.
struct Probe {
    backend: &'static str,
    operation: Operation,
    shape: Shape,
    target: Option<Shape>,
}

impl Probe {
    fn new<B: Register<T, N>, T: Element, const N: usize>(operation: Operation) -> Self {
        Probe { backend: B::NAME, operation, shape: Shape::of::<T, N>(), target: None }
    }

    fn to<D: Element, const M: usize>(self) -> Self {
        Probe { target: Some(Shape::of::<D, M>()), ..self }
    }

    fn compare<T: Element>(&self, input: Input, tolerance: Tolerance, expected: &[T], actual: &[T]) -> Outcome {
        debug_assert_eq!(expected.len(), actual.len());
        for (lane, (&e, &a)) in expected.iter().zip(actual).enumerate() {
            if !tolerance.accepts(e, a) {
                return Err(self.mismatch(input, lane, e, a));
            }
        }
        Ok(())
    }

    fn mismatch<T: Element>(&self, input: Input, lane: usize, expected: T, actual: T) -> Mismatch {
        Mismatch {
            backend: self.backend,
            operation: self.operation,
            shape: self.shape,
            target: self.target,
            input,
            lane,
            expected: LaneValue::of(expected),
            actual: LaneValue::of(actual),
        }
    }
}

/// Lanes with one guard element in front, so `lanes` is never
/// register-aligned, and a full register of guards behind.
#[repr(C, align(64))]
struct Guarded<T, const N: usize> {
    lead: T,
    lanes: [T; N],
    tail: [T; N],
}

impl<T: Element, const N: usize> Guarded<T, N> {
    fn filled(value: T) -> Self {
        Guarded { lead: value, lanes: [value; N], tail: [value; N] }
    }

    /// Checks that nothing outside `lanes[..written]` moved away from
    /// `guard`.
    fn untouched(&self, probe: &Probe, input: Input, guard: T, written: usize) -> Outcome {
        // Lane `usize::MAX` reports the element in front of the vector.
        if self.lead.lane_bits() != guard.lane_bits() {
            return Err(probe.mismatch(input, usize::MAX, guard, self.lead));
        }
        for (lane, &x) in self.lanes.iter().enumerate().skip(written) {
            if x.lane_bits() != guard.lane_bits() {
                return Err(probe.mismatch(input, lane, guard, x));
            }
        }
        for (i, &x) in self.tail.iter().enumerate() {
            if x.lane_bits() != guard.lane_bits() {
                return Err(probe.mismatch(input, N + i, guard, x));
            }
        }
        Ok(())
    }
}

/// A boundary value for guard cells; not zero, so partial loads that read a
/// guard instead of zero-filling show up.
fn guard_value<T: TestValues>() -> T {
    T::BOUNDARY.iter().copied().find(|x| x.lane_bits() != 0 && !x.lane_is_nan()).unwrap_or_default()
}

// ── Broadcast, load and store ───────────────────────────────────────

pub fn broadcast<B: Register<T, N>, T: TestValues, const N: usize>() -> Outcome {
    let probe = Probe::new::<B, T, N>(Operation::Broadcast);
    for_each_single::<T, N, _>(|input, values| {
        for &x in values.iter() {
            let v = Vector::<B, T, N>::splat(x);
            probe.compare(input, Tolerance::Exact, &[x; N], &v.to_array())?;
        }
        Ok(())
    })
}

pub fn load_store<B: Register<T, N>, T: TestValues, const N: usize>() -> Outcome {
    let probe = Probe::new::<B, T, N>(Operation::LoadStore);
    let guard = guard_value::<T>();
    for_each_single::<T, N, _>(|input, values| {
        let mut src = Guarded::<T, N>::filled(guard);
        src.lanes = values;
        // Safety: `lanes` holds N elements.
        let v = unsafe { Vector::<B, T, N>::load(src.lanes.as_ptr()) };

        let mut dst = Guarded::<T, N>::filled(guard);
        // Safety: as above.
        unsafe { v.store(dst.lanes.as_mut_ptr()) };
        probe.compare(input, Tolerance::Exact, &values, &dst.lanes)?;
        dst.untouched(&probe, input, guard, N)
    })
}

pub fn aligned_load_store<B: Register<T, N>, T: TestValues, const N: usize>() -> Outcome {
    let probe = Probe::new::<B, T, N>(Operation::AlignedLoadStore);
    for_each_single::<T, N, _>(|input, values| {
        let src = Aligned(values);
        let v = Vector::<B, T, N>::load_aligned_from(&src);
        let mut dst = Aligned([T::default(); N]);
        v.store_aligned_to(&mut dst);
        probe.compare(input, Tolerance::Exact, &values, &dst.0)
    })
}

/// Sweeps every count in `0..=N`: loads zero-fill lanes at and above the
/// count, stores leave everything at and above the count alone.
pub fn partial_load_store<B: Register<T, N>, T: TestValues, const N: usize>() -> Outcome {
    let probe = Probe::new::<B, T, N>(Operation::PartialLoadStore);
    let guard = guard_value::<T>();
    for_each_single::<T, N, _>(|_, values| {
        let full = Vector::<B, T, N>::from_array(values);
        for count in 0..=N {
            let input = Input::Count(count);
            let mut src = Guarded::<T, N>::filled(guard);
            src.lanes[..count].copy_from_slice(&values[..count]);
            // Safety: `lanes` holds N >= count elements.
            let loaded = unsafe { Vector::<B, T, N>::load_partial(src.lanes.as_ptr(), count) };
            let expected: [T; N] = array::from_fn(|i| if i < count { values[i] } else { T::default() });
            probe.compare(input, Tolerance::Exact, &expected, &loaded.to_array())?;

            let mut dst = Guarded::<T, N>::filled(guard);
            // Safety: as above.
            unsafe { full.store_partial(dst.lanes.as_mut_ptr(), count) };
            probe.compare(input, Tolerance::Exact, &values[..count], &dst.lanes[..count])?;
            dst.untouched(&probe, input, guard, count)?;
        }
        Ok(())
    })
}

// ── Lane-wise arithmetic ────────────────────────────────────────────

fn binary<B: Register<T, N>, T: TestValues, const N: usize>(
    operation: Operation,
    vector_op: impl Fn(Vector<B, T, N>, Vector<B, T, N>) -> Vector<B, T, N>,
    lane_op: impl Fn(T, T) -> T,
) -> Outcome {
    let probe = Probe::new::<B, T, N>(operation);
    for_each_pair::<T, N, _>(|input, a, b| {
        let expected: [T; N] = array::from_fn(|i| lane_op(a[i], b[i]));
        let actual = vector_op(Vector::from_array(a), Vector::from_array(b)).to_array();
        probe.compare(input, Tolerance::Exact, &expected, &actual)
    })
}

pub fn add<B: Arithmetic<T, N>, T: TestValues + LaneArith, const N: usize>() -> Outcome {
    binary::<B, T, N>(Operation::Add, |a, b| a + b, T::lane_add)
}

pub fn subtract<B: Arithmetic<T, N>, T: TestValues + LaneArith, const N: usize>() -> Outcome {
    binary::<B, T, N>(Operation::Subtract, |a, b| a - b, T::lane_sub)
}

pub fn multiply<B: Multiply<T, N>, T: TestValues + LaneArith, const N: usize>() -> Outcome {
    binary::<B, T, N>(Operation::Multiply, |a, b| a * b, T::lane_mul)
}

pub fn min<B: MinMax<T, N>, T: TestValues + LaneOrd, const N: usize>() -> Outcome {
    binary::<B, T, N>(Operation::Min, Vector::min, T::lane_min)
}

pub fn max<B: MinMax<T, N>, T: TestValues + LaneOrd, const N: usize>() -> Outcome {
    binary::<B, T, N>(Operation::Max, Vector::max, T::lane_max)
}

pub fn fma<B: FusedMultiplyAdd<T, N>, T: TestValues + LaneFma, const N: usize>() -> Outcome {
    let probe = Probe::new::<B, T, N>(Operation::FusedMultiplyAdd);
    for_each_triple::<T, N, _>(|input, a, b, c| {
        let expected: [T; N] = array::from_fn(|i| a[i].lane_mul_add(b[i], c[i]));
        let actual = Vector::<B, T, N>::from_array(a)
            .mul_add(Vector::from_array(b), Vector::from_array(c))
            .to_array();
        probe.compare(input, Tolerance::Exact, &expected, &actual)
    })
}

// ── Reductions ──────────────────────────────────────────────────────

fn reduction<B: MinMax<T, N>, T: TestValues + LaneOrd, const N: usize>(
    operation: Operation,
    vector_op: impl Fn(Vector<B, T, N>) -> T,
    lane_op: impl Fn(T, T) -> T,
) -> Outcome {
    let probe = Probe::new::<B, T, N>(operation);
    let scan = |values: &[T; N]| values[1..].iter().fold(values[0], |acc, &x| lane_op(acc, x));
    for_each_single::<T, N, _>(|input, values| {
        let actual = vector_op(Vector::from_array(values));
        probe.compare(input, Tolerance::Value, &[scan(&values)], &[actual])?;

        // The extreme must be found whichever lane holds it.
        for lane in 0..N {
            let mut rotated = values;
            rotated.rotate_left(lane);
            let actual = vector_op(Vector::from_array(rotated));
            probe.compare(Input::Offset(lane), Tolerance::Value, &[scan(&rotated)], &[actual])?;
        }
        Ok(())
    })
}

pub fn horizontal_min<B: MinMax<T, N>, T: TestValues + LaneOrd, const N: usize>() -> Outcome {
    reduction::<B, T, N>(Operation::HorizontalMin, Vector::horizontal_min, T::lane_min)
}

pub fn horizontal_max<B: MinMax<T, N>, T: TestValues + LaneOrd, const N: usize>() -> Outcome {
    reduction::<B, T, N>(Operation::HorizontalMax, Vector::horizontal_max, T::lane_max)
}

// ── Extract and concat ──────────────────────────────────────────────

/// Every valid offset: `0, W, 2W, ..., N - W`.
pub fn extract<B: Extract<T, N, W>, T: TestValues, const N: usize, const W: usize>() -> Outcome {
    let probe = Probe::new::<B, T, N>(Operation::Extract).to::<T, W>();
    for_each_single::<T, N, _>(|_, values| {
        let v = Vector::<B, T, N>::from_array(values);
        for offset in (0..N).step_by(W) {
            let part = v.extract::<W>(offset).to_array();
            probe.compare(Input::Offset(offset), Tolerance::Exact, &values[offset..offset + W], &part)?;
        }
        Ok(())
    })
}

/// `W`-lane halves into `N = 2W` lanes, `lo` first.
pub fn concat<B: Concat<T, W, N>, T: TestValues, const W: usize, const N: usize>() -> Outcome {
    let probe = Probe::new::<B, T, W>(Operation::Concat).to::<T, N>();
    for_each_pair::<T, W, _>(|input, lo, hi| {
        let joined = Vector::<B, T, N>::concat(Vector::from_array(lo), Vector::from_array(hi)).to_array();
        let expected: [T; N] = array::from_fn(|i| if i < W { lo[i] } else { hi[i - W] });
        probe.compare(input, Tolerance::Exact, &expected, &joined)
    })
}

/// [`concat`], then extracting at offsets `0` and `W` must give `lo` and
/// `hi` back. For shapes where the backend can also split the joined
/// register.
pub fn concat_extract<B, T, const W: usize, const N: usize>() -> Outcome
where
    B: Concat<T, W, N> + Extract<T, N, W>,
    T: TestValues,
{
    concat::<B, T, W, N>()?;
    let probe = Probe::new::<B, T, W>(Operation::Concat).to::<T, N>();
    for_each_pair::<T, W, _>(|_, lo, hi| {
        let joined = Vector::<B, T, N>::concat(Vector::from_array(lo), Vector::from_array(hi));
        probe.compare(Input::Offset(0), Tolerance::Exact, &lo, &joined.extract::<W>(0).to_array())?;
        probe.compare(Input::Offset(W), Tolerance::Exact, &hi, &joined.extract::<W>(W).to_array())
    })
}

// ── Conversion ──────────────────────────────────────────────────────

fn conversion_tolerance<S: Element, D: TestValues>() -> Tolerance {
    if D::IS_FLOAT && D::BITS < S::BITS { Tolerance::OneUlp } else { Tolerance::Exact }
}

pub fn convert<B, S, D, const N: usize>() -> Outcome
where
    B: Convert<S, D, N>,
    S: TestValues + ConvertLane<D>,
    D: TestValues,
{
    let probe = Probe::new::<B, S, N>(Operation::Convert).to::<D, N>();
    let tolerance = conversion_tolerance::<S, D>();
    for_each_single::<S, N, _>(|input, values| {
        let expected: [D; N] = array::from_fn(|i| values[i].convert_lane());
        let actual = Vector::<B, S, N>::from_array(values).convert::<D>().to_array();
        probe.compare(input, tolerance, &expected, &actual)
    })
}

/// Lanes `0..N` of the result come from the first source, `N..M` from the
/// second.
pub fn convert_pair<B, S, D, const N: usize, const M: usize>() -> Outcome
where
    B: ConvertPair<S, D, N, M>,
    S: TestValues + ConvertLane<D>,
    D: TestValues,
{
    let probe = Probe::new::<B, S, N>(Operation::ConvertPair).to::<D, M>();
    let tolerance = conversion_tolerance::<S, D>();
    for_each_pair::<S, N, _>(|input, a, b| {
        let expected: [D; M] = array::from_fn(|i| if i < N { a[i].convert_lane() } else { b[i - N].convert_lane() });
        let actual = Vector::<B, D, M>::convert_pair(Vector::<B, S, N>::from_array(a), Vector::from_array(b)).to_array();
        probe.compare(input, tolerance, &expected, &actual)
    })
}
