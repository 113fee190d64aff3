//! Claim validation rules

use rust_decimal::Decimal;

use core_kernel::ValidationResult;
use crate::claim::NewClaim;

pub const MIN_REASON_LEN: usize = 10;
pub const MAX_REASON_LEN: usize = 500;

/// Validator for claim submissions
pub struct ClaimValidator;

impl ClaimValidator {
    /// Validates a submission and returns every failed rule
    pub fn validate(input: &NewClaim) -> ValidationResult {
        let mut result = ValidationResult::ok();

        result.require(
            input.amount > Decimal::ZERO,
            "Claim amount must be greater than 0",
        );

        // Length limits apply to the trimmed text
        let reason = input.reason.trim();
        if reason.is_empty() {
            result.add_error("Reason cannot be empty");
        } else {
            let len = reason.chars().count();
            result.require(
                (MIN_REASON_LEN..=MAX_REASON_LEN).contains(&len),
                format!(
                    "Reason must be between {} and {} characters, got {}",
                    MIN_REASON_LEN, MAX_REASON_LEN, len
                ),
            );
        }

        result
    }
}
