//! Cross-variant tests for the divisor-sum algorithms.

use super::*;

/// Brute-force oracle, written differently from both production variants.
fn oracle(n: u64) -> u64 {
    (1..=n).filter(|i| n % i == 0).filter(|i| i % 2 == 0).sum()
}

#[test]
fn test_variants_agree_on_small_inputs() {
    for n in 1..=300 {
        let iterative = even_divisor_sum_iterative(n).unwrap();
        let recursive = even_divisor_sum_recursive(n).unwrap();
        assert_eq!(iterative, recursive, "variants disagree at n = {}", n);
        assert_eq!(iterative, oracle(n), "iterative wrong at n = {}", n);
    }
}

#[test]
fn test_variants_agree_on_larger_spot_checks() {
    for n in [720, 1000, 1024, 1500, 2000, 2310] {
        assert_eq!(
            even_divisor_sum_iterative(n).unwrap(),
            even_divisor_sum_recursive(n).unwrap(),
            "variants disagree at n = {}",
            n
        );
    }
}

#[test]
fn test_both_variants_reject_zero() {
    assert!(even_divisor_sum_iterative(0).is_err());
    assert!(even_divisor_sum_recursive(0).is_err());
}

#[test]
fn test_strategy_names() {
    assert_eq!(IterativeDivisorSum.name(), "iterative");
    assert_eq!(RecursiveDivisorSum::new().name(), "recursive");
}
