//! Claim entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{record_precision, ClaimId, PolicyholderId};
use crate::error::ClaimError;
use crate::validation::ClaimValidator;

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ClaimStatus {
    /// Submitted and awaiting a decision
    #[default]
    Pending,
    /// Accepted for payment
    Approved,
    /// Declined
    Rejected,
}

/// On-disk spelling of each status
const CLAIM_STATUS_NAMES: [(ClaimStatus, &str); 3] = [
    (ClaimStatus::Pending, "Pending"),
    (ClaimStatus::Approved, "Approved"),
    (ClaimStatus::Rejected, "Rejected"),
];

impl ClaimStatus {
    pub const ALL: [ClaimStatus; 3] = [ClaimStatus::Pending, ClaimStatus::Approved, ClaimStatus::Rejected];

    /// Returns the serialized name
    pub fn as_str(&self) -> &'static str {
        CLAIM_STATUS_NAMES
            .iter()
            .find(|(status, _)| status == self)
            .map(|(_, name)| *name)
            .unwrap_or("Unknown")
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ClaimStatus::Pending)
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CLAIM_STATUS_NAMES
            .iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(wanted))
            .map(|(status, _)| *status)
            .ok_or_else(|| ClaimError::UnknownStatus(s.to_string()))
    }
}

impl TryFrom<String> for ClaimStatus {
    type Error = ClaimError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClaimStatus> for &'static str {
    fn from(status: ClaimStatus) -> Self {
        status.as_str()
    }
}

/// Input for submitting a claim
#[derive(Debug, Clone, PartialEq)]
pub struct NewClaim {
    pub policyholder_id: PolicyholderId,
    pub amount: Decimal,
    pub reason: String,
}

/// A claim against a policyholder's coverage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    #[serde(rename = "claim_id")]
    id: ClaimId,
    policyholder_id: PolicyholderId,
    #[serde(rename = "claim_amount", with = "rust_decimal::serde::float")]
    amount: Decimal,
    reason: String,
    #[serde(default)]
    status: ClaimStatus,
    #[serde(rename = "date_of_claim", with = "core_kernel::temporal::timestamp")]
    filed_at: DateTime<Utc>,
}

impl Claim {
    /// Validates `input` and creates a Pending claim filed at `filed_at`
    ///
    /// The reason is stored trimmed. The policyholder reference is not
    /// checked here.
    pub fn new(id: ClaimId, input: NewClaim, filed_at: DateTime<Utc>) -> Result<Self, ClaimError> {
        ClaimValidator::validate(&input)
            .into_result()
            .map_err(ClaimError::ValidationFailed)?;

        Ok(Self {
            id,
            policyholder_id: input.policyholder_id,
            amount: input.amount,
            reason: input.reason.trim().to_string(),
            status: ClaimStatus::Pending,
            filed_at: record_precision(filed_at),
        })
    }

    /// Sets the status, returning the previous one
    pub fn update_status(&mut self, status: ClaimStatus) -> ClaimStatus {
        std::mem::replace(&mut self.status, status)
    }

    pub fn id(&self) -> ClaimId {
        self.id
    }

    pub fn policyholder_id(&self) -> PolicyholderId {
        self.policyholder_id
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn status(&self) -> ClaimStatus {
        self.status
    }

    pub fn filed_at(&self) -> DateTime<Utc> {
        self.filed_at
    }

    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }
}
