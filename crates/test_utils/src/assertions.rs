//! Custom Test Assertions
//!
//! Provides specialized assertion helpers that give more meaningful error
//! messages than standard assertions.

use rust_decimal::Decimal;

/// Asserts that two amounts are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the amounts differ by more than tolerance
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that some validation message contains `fragment`
pub fn assert_has_error(messages: &[String], fragment: &str) {
    assert!(
        messages.iter().any(|message| message.contains(fragment)),
        "Expected an error containing {:?}, got {:?}",
        fragment,
        messages
    );
}

/// Asserts that `values` never increase from one element to the next
pub fn assert_non_increasing<T: PartialOrd + std::fmt::Debug>(values: &[T]) {
    for pair in values.windows(2) {
        assert!(
            pair[0] >= pair[1],
            "Expected non-increasing order, found {:?} before {:?}",
            pair[0],
            pair[1]
        );
    }
}
