//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::{DateTime, Utc};
use core_kernel::{ClaimId, PolicyholderId};
use domain_claims::{Claim, ClaimStatus, NewClaim};
use domain_policyholder::{NewPolicyholder, PolicyType, Policyholder};
use rust_decimal::Decimal;

use crate::fixtures::{IdFixtures, MoneyFixtures, StringFixtures, TemporalFixtures};

/// Builder for constructing test policyholders
pub struct TestPolicyholderBuilder {
    id: PolicyholderId,
    name: String,
    age: u32,
    policy_type: PolicyType,
    sum_insured: Decimal,
    registered_at: DateTime<Utc>,
}

impl Default for TestPolicyholderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPolicyholderBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: IdFixtures::policyholder_id(),
            name: StringFixtures::name().to_string(),
            age: 35,
            policy_type: PolicyType::Health,
            sum_insured: MoneyFixtures::sum_insured(),
            registered_at: TemporalFixtures::new_year_2024(),
        }
    }

    /// Sets the id by sequence number
    pub fn with_sequence(mut self, sequence: u32) -> Self {
        self.id = PolicyholderId::from_sequence(sequence);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    pub fn with_policy_type(mut self, policy_type: PolicyType) -> Self {
        self.policy_type = policy_type;
        self
    }

    pub fn with_sum_insured(mut self, sum_insured: Decimal) -> Self {
        self.sum_insured = sum_insured;
        self
    }

    pub fn with_registered_at(mut self, registered_at: DateTime<Utc>) -> Self {
        self.registered_at = registered_at;
        self
    }

    /// Returns the registration input without building the record
    pub fn input(&self) -> NewPolicyholder {
        NewPolicyholder {
            name: self.name.clone(),
            age: self.age,
            policy_type: self.policy_type,
            sum_insured: self.sum_insured,
        }
    }

    /// Builds the policyholder
    ///
    /// # Panics
    ///
    /// Panics if the configured values fail validation
    pub fn build(self) -> Policyholder {
        let input = self.input();
        Policyholder::new(self.id, input, self.registered_at)
            .expect("test policyholder should be valid")
    }
}

/// Builder for constructing test claims
pub struct TestClaimBuilder {
    id: ClaimId,
    policyholder_id: PolicyholderId,
    amount: Decimal,
    reason: String,
    status: ClaimStatus,
    filed_at: DateTime<Utc>,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: ClaimId::first(),
            policyholder_id: IdFixtures::policyholder_id(),
            amount: MoneyFixtures::small_claim(),
            reason: StringFixtures::reason().to_string(),
            status: ClaimStatus::Pending,
            filed_at: TemporalFixtures::days_ago(30),
        }
    }

    /// Sets the id by sequence number
    pub fn with_sequence(mut self, sequence: u32) -> Self {
        self.id = ClaimId::from_sequence(sequence);
        self
    }

    pub fn with_policyholder(mut self, policyholder_id: PolicyholderId) -> Self {
        self.policyholder_id = policyholder_id;
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_filed_at(mut self, filed_at: DateTime<Utc>) -> Self {
        self.filed_at = filed_at;
        self
    }

    /// Returns the submission input without building the record
    pub fn input(&self) -> NewClaim {
        NewClaim {
            policyholder_id: self.policyholder_id,
            amount: self.amount,
            reason: self.reason.clone(),
        }
    }

    /// Builds the claim, applying the configured status
    ///
    /// # Panics
    ///
    /// Panics if the configured values fail validation
    pub fn build(self) -> Claim {
        let input = self.input();
        let mut claim = Claim::new(self.id, input, self.filed_at)
            .expect("test claim should be valid");
        claim.update_status(self.status);
        claim
    }
}
