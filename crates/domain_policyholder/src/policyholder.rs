//! Policyholder entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{record_precision, PolicyholderId};
use crate::error::PolicyholderError;
use crate::validation::PolicyholderValidator;

/// Line of business a policyholder is covered under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum PolicyType {
    Health,
    Vehicle,
    Life,
}

/// On-disk spelling of each policy type
const POLICY_TYPE_NAMES: [(PolicyType, &str); 3] = [
    (PolicyType::Health, "Health"),
    (PolicyType::Vehicle, "Vehicle"),
    (PolicyType::Life, "Life"),
];

impl PolicyType {
    /// Every policy type, in declaration order
    pub const ALL: [PolicyType; 3] = [PolicyType::Health, PolicyType::Vehicle, PolicyType::Life];

    /// Returns the serialized name
    pub fn as_str(&self) -> &'static str {
        POLICY_TYPE_NAMES
            .iter()
            .find(|(policy_type, _)| policy_type == self)
            .map(|(_, name)| *name)
            .unwrap_or("Unknown")
    }
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyType {
    type Err = PolicyholderError;

    /// Parses a policy type, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        POLICY_TYPE_NAMES
            .iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(wanted))
            .map(|(policy_type, _)| *policy_type)
            .ok_or_else(|| PolicyholderError::UnknownPolicyType(s.to_string()))
    }
}

impl TryFrom<String> for PolicyType {
    type Error = PolicyholderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PolicyType> for &'static str {
    fn from(policy_type: PolicyType) -> Self {
        policy_type.as_str()
    }
}

/// Input for registering a policyholder, as captured by the entry form
#[derive(Debug, Clone, PartialEq)]
pub struct NewPolicyholder {
    pub name: String,
    pub age: u32,
    pub policy_type: PolicyType,
    pub sum_insured: Decimal,
}

/// A registered policyholder
///
/// Field names on the serialized form are part of the storage contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policyholder {
    #[serde(rename = "policyholder_id")]
    id: PolicyholderId,
    name: String,
    age: u32,
    policy_type: PolicyType,
    #[serde(with = "rust_decimal::serde::float")]
    sum_insured: Decimal,
    #[serde(rename = "registration_date", with = "core_kernel::temporal::timestamp")]
    registered_at: DateTime<Utc>,
}

impl Policyholder {
    /// Validates `input` and creates the policyholder
    ///
    /// The name is stored trimmed and the timestamp at stored precision.
    /// Every failing field is reported in the returned
    /// `PolicyholderError::ValidationFailed`.
    pub fn new(
        id: PolicyholderId,
        input: NewPolicyholder,
        registered_at: DateTime<Utc>,
    ) -> Result<Self, PolicyholderError> {
        PolicyholderValidator::validate(&input)
            .into_result()
            .map_err(PolicyholderError::validation_failed)?;

        Ok(Self {
            id,
            name: input.name.trim().to_string(),
            age: input.age,
            policy_type: input.policy_type,
            sum_insured: input.sum_insured,
            registered_at: record_precision(registered_at),
        })
    }

    pub fn id(&self) -> PolicyholderId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn policy_type(&self) -> PolicyType {
        self.policy_type
    }

    pub fn sum_insured(&self) -> Decimal {
        self.sum_insured
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}
