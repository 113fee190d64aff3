//! Policyholder validation rules
//!
//! # Validation Rules
//!
//! - Name is required, 2-100 characters after trimming, letters and spaces only
//! - Age must be between 18 and 100 inclusive
//! - Sum insured must be greater than zero
//!
//! The policy type needs no check here: it is a closed enum, so an unknown
//! value fails earlier, when the submitted string is parsed.

use rust_decimal::Decimal;

use core_kernel::ValidationResult;
use crate::policyholder::NewPolicyholder;

pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 100;
pub const MIN_NAME_LEN: usize = 2;
pub const MAX_NAME_LEN: usize = 100;

/// Validator for policyholder registrations
pub struct PolicyholderValidator;

impl PolicyholderValidator {
    /// Validates a registration and returns every failed rule
    pub fn validate(input: &NewPolicyholder) -> ValidationResult {
        let mut result = ValidationResult::ok();

        Self::validate_name(&input.name, &mut result);

        result.require(
            (MIN_AGE..=MAX_AGE).contains(&input.age),
            format!("Age must be between {} and {}, got {}", MIN_AGE, MAX_AGE, input.age),
        );

        result.require(
            input.sum_insured > Decimal::ZERO,
            "Sum insured must be greater than 0",
        );

        result
    }

    fn validate_name(name: &str, result: &mut ValidationResult) {
        let name = name.trim();
        if name.is_empty() {
            result.add_error("Name cannot be empty");
            return;
        }

        if !name.chars().all(|c| c.is_alphabetic() || c.is_whitespace()) {
            result.add_error("Name must contain only letters and spaces");
        }

        let len = name.chars().count();
        result.require(
            (MIN_NAME_LEN..=MAX_NAME_LEN).contains(&len),
            format!("Name must be between {} and {} characters", MIN_NAME_LEN, MAX_NAME_LEN),
        );
    }
}
