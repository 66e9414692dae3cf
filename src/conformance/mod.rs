//! Conformance harness: checks a backend against the lane reference.
//!
//! The harness is a small set of generic check functions ([`checks`]), each
//! parameterised by `(backend, element, lanes)` and, for extract, concat and
//! conversion, by the companion shape. [`registry`] lists the instantiations
//! each backend must pass, and [`run`] executes a list of them.
//!
//! Expected values never come from a backend: they are computed lane by lane
//! with the element traits ([`LaneArith`](crate::traits::LaneArith),
//! [`LaneOrd`](crate::traits::LaneOrd), [`ConvertLane`](crate::traits::ConvertLane)).
//!
//! # Example
//!
//! ```
//! use lanewise::conformance::{registry, run};
//!
//! let report = run(registry::SCALAR);
//! assert!(report.is_success(), "{:?}", report.first_failure);
//! ```

pub mod checks;
pub mod registry;
pub mod values;

use core::fmt;

use crate::traits::{Backend, Element};

/// Operation category a case exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Broadcast,
    LoadStore,
    AlignedLoadStore,
    PartialLoadStore,
    Add,
    Subtract,
    Multiply,
    Min,
    Max,
    FusedMultiplyAdd,
    Extract,
    Concat,
    Convert,
    ConvertPair,
    HorizontalMin,
    HorizontalMax,
}

impl Operation {
    /// Snake-case name, as used in test names.
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Broadcast => "broadcast",
            Operation::LoadStore => "load_store",
            Operation::AlignedLoadStore => "aligned_load_store",
            Operation::PartialLoadStore => "partial_load_store",
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Min => "min",
            Operation::Max => "max",
            Operation::FusedMultiplyAdd => "fma",
            Operation::Extract => "extract",
            Operation::Concat => "concat",
            Operation::Convert => "convert",
            Operation::ConvertPair => "convert_pair",
            Operation::HorizontalMin => "horizontal_min",
            Operation::HorizontalMax => "horizontal_max",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Element type and lane count, displayed as `s8x64`, `bf16x32`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub element: &'static str,
    pub lanes: usize,
}

impl Shape {
    pub const fn of<T: Element, const N: usize>() -> Self {
        Shape { element: T::NAME, lanes: N }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.element, self.lanes)
    }
}

/// Which input produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    /// Chunk of the boundary-value sweep.
    Boundary(usize),
    /// Seeded random input set.
    Set(u32),
    /// Element count of a partial load/store.
    Count(usize),
    /// Lane offset of an extract.
    Offset(usize),
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Boundary(chunk) => write!(f, "boundary chunk {chunk}"),
            Input::Set(set) => write!(f, "input set {set}"),
            Input::Count(count) => write!(f, "count {count}"),
            Input::Offset(offset) => write!(f, "offset {offset}"),
        }
    }
}

/// One lane value with its raw bits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneValue {
    pub bits: u32,
    pub width: u32,
    pub value: f64,
}

impl LaneValue {
    pub fn of<T: Element>(x: T) -> Self {
        LaneValue { bits: x.lane_bits(), width: T::BITS, value: x.to_f64() }
    }
}

impl fmt::Display for LaneValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = (self.width / 4) as usize;
        write!(f, "{} (0x{:0digits$x})", self.value, self.bits)
    }
}

/// A lane where a backend disagreed with the reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mismatch {
    pub backend: &'static str,
    pub operation: Operation,
    pub shape: Shape,
    /// Destination shape for extract, concat and conversions.
    pub target: Option<Shape>,
    pub input: Input,
    pub lane: usize,
    pub expected: LaneValue,
    pub actual: LaneValue,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.backend, self.operation, self.shape)?;
        if let Some(target) = self.target {
            write!(f, " -> {target}")?;
        }
        write!(
            f,
            " ({}) lane {}: expected {}, got {}",
            self.input, self.lane, self.expected, self.actual
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Mismatch {}

/// One registered instantiation.
#[derive(Clone, Copy)]
pub struct Case {
    pub backend: &'static str,
    pub operation: Operation,
    pub shape: Shape,
    pub target: Option<Shape>,
    pub run: fn() -> Result<(), Mismatch>,
}

impl Case {
    pub const fn new<B: Backend, T: Element, const N: usize>(
        operation: Operation,
        run: fn() -> Result<(), Mismatch>,
    ) -> Self {
        Case { backend: B::NAME, operation, shape: Shape::of::<T, N>(), target: None, run }
    }

    pub const fn to<D: Element, const M: usize>(self) -> Self {
        Case { target: Some(Shape::of::<D, M>()), ..self }
    }
}

impl fmt::Debug for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Case")
            .field("backend", &self.backend)
            .field("operation", &self.operation)
            .field("shape", &self.shape)
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.backend, self.operation, self.shape)?;
        if let Some(target) = self.target {
            write!(f, " -> {target}")?;
        }
        Ok(())
    }
}

/// Outcome of a conformance run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Report {
    pub passed: usize,
    pub failed: usize,
    pub first_failure: Option<Mismatch>,
}

impl Report {
    /// `true` only when every case passed. There is no partial success.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Runs every case and reports the totals.
pub fn run(cases: &[Case]) -> Report {
    let mut report = Report::default();
    for case in cases {
        match (case.run)() {
            Ok(()) => {
                tracing::debug!(case = %case, "passed");
                report.passed += 1;
            }
            Err(mismatch) => {
                tracing::warn!(
                    backend = mismatch.backend,
                    operation = %mismatch.operation,
                    shape = %mismatch.shape,
                    input = %mismatch.input,
                    lane = mismatch.lane,
                    expected = %mismatch.expected,
                    actual = %mismatch.actual,
                    "conformance mismatch"
                );
                report.failed += 1;
                if report.first_failure.is_none() {
                    report.first_failure = Some(mismatch);
                }
            }
        }
    }
    tracing::info!(passed = report.passed, failed = report.failed, "conformance run finished");
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failing() -> Result<(), Mismatch> {
        Err(Mismatch {
            backend: "scalar",
            operation: Operation::Convert,
            shape: Shape { element: "s32", lanes: 16 },
            target: Some(Shape { element: "u8", lanes: 16 }),
            input: Input::Set(2),
            lane: 5,
            expected: LaneValue { bits: 0xff, width: 8, value: 255.0 },
            actual: LaneValue { bits: 0x2c, width: 8, value: 44.0 },
        })
    }

    #[test]
    #[cfg(feature = "std")]
    fn mismatch_display_names_everything() {
        let m = failing().unwrap_err();
        assert_eq!(
            m.to_string(),
            "scalar convert s32x16 -> u8x16 (input set 2) lane 5: expected 255 (0xff), got 44 (0x2c)"
        );
    }

    #[test]
    fn one_failure_fails_the_run() {
        let ok = Case::new::<crate::Scalar, u8, 4>(Operation::Add, || Ok(()));
        let bad = Case { run: failing, ..ok };
        let report = run(&[ok, bad, ok]);
        assert_eq!(report.passed, 2);
        assert_eq!(report.failed, 1);
        assert!(!report.is_success());
        assert_eq!(report.first_failure.map(|m| m.lane), Some(5));
    }

    #[test]
    #[cfg(feature = "std")]
    fn case_display() {
        let case = Case::new::<crate::Scalar, i32, 16>(Operation::Convert, || Ok(())).to::<i8, 16>();
        assert_eq!(case.to_string(), "scalar convert s32x16 -> s8x16");
    }
}
