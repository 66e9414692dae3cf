#![cfg(feature = "conformance")]

#[macro_use]
mod common;

use lanewise::Scalar;
use lanewise::conformance::{registry, run};

conformance_tests!(Scalar);

#[test]
fn registry_passes_as_a_whole() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let report = run(registry::SCALAR);
    assert!(report.is_success(), "first failure: {}", report.first_failure.map_or(String::new(), |m| m.to_string()));
    assert_eq!(report.passed, registry::SCALAR.len());
    assert_eq!(report.failed, 0);
}
