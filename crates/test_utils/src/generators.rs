//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::PolicyholderId;
use domain_claims::{ClaimStatus, NewClaim};
use domain_policyholder::{NewPolicyholder, PolicyType};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating valid policy types
pub fn policy_type_strategy() -> impl Strategy<Value = PolicyType> {
    prop_oneof![
        Just(PolicyType::Health),
        Just(PolicyType::Vehicle),
        Just(PolicyType::Life),
    ]
}

/// Strategy for generating claim statuses
pub fn claim_status_strategy() -> impl Strategy<Value = ClaimStatus> {
    prop_oneof![
        Just(ClaimStatus::Pending),
        Just(ClaimStatus::Approved),
        Just(ClaimStatus::Rejected),
    ]
}

/// Strategy for generating names that pass validation
pub fn valid_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,15}( [A-Z][a-z]{1,15})?"
}

/// Strategy for generating ages that pass validation (18 to 100)
pub fn valid_age_strategy() -> impl Strategy<Value = u32> {
    18u32..=100u32
}

/// Strategy for generating positive amounts with cent precision
pub fn positive_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating claim reasons that pass validation
pub fn valid_reason_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{8,60}[a-z]"
}

/// Strategy for generating valid registration inputs
pub fn new_policyholder_strategy() -> impl Strategy<Value = NewPolicyholder> {
    (
        valid_name_strategy(),
        valid_age_strategy(),
        policy_type_strategy(),
        positive_amount_strategy(),
    )
        .prop_map(|(name, age, policy_type, sum_insured)| NewPolicyholder {
            name,
            age,
            policy_type,
            sum_insured,
        })
}

/// Strategy for generating valid claim inputs against `policyholder_id`
pub fn new_claim_strategy(policyholder_id: PolicyholderId) -> impl Strategy<Value = NewClaim> {
    (positive_amount_strategy(), valid_reason_strategy()).prop_map(move |(amount, reason)| {
        NewClaim {
            policyholder_id,
            amount,
            reason,
        }
    })
}
