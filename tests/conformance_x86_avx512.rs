#![cfg(all(
    feature = "conformance",
    target_arch = "x86_64",
    target_feature = "avx512f",
    target_feature = "avx512bw",
    target_feature = "avx512vl"
))]

#[macro_use]
mod common;

use lanewise::X86Avx512;
use lanewise::conformance::{registry, run};

conformance_tests!(X86Avx512);

#[test]
fn registry_passes_as_a_whole() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let report = run(registry::X86_AVX512);
    assert!(report.is_success(), "first failure: {}", report.first_failure.map_or(String::new(), |m| m.to_string()));
    assert_eq!(report.passed, registry::X86_AVX512.len());
}

#[test]
fn native_is_the_hardware_backend() {
    assert_eq!(<lanewise::Native as lanewise::Backend>::NAME, "x86_avx512");
    assert_eq!(registry::NATIVE.len(), registry::X86_AVX512.len());
}
