//! Claims DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{format_currency, ClaimId, PolicyholderId};
use domain_claims::{Claim, ClaimStatus};

#[derive(Debug, Deserialize)]
pub struct CreateClaimRequest {
    pub policyholder_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub claim_amount: Decimal,
    pub reason: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct ClaimResponse {
    pub claim_id: ClaimId,
    pub policyholder_id: PolicyholderId,
    #[serde(with = "rust_decimal::serde::float")]
    pub claim_amount: Decimal,
    pub claim_amount_display: String,
    pub reason: String,
    pub status: ClaimStatus,
    #[serde(with = "core_kernel::temporal::timestamp")]
    pub date_of_claim: DateTime<Utc>,
}

impl From<&Claim> for ClaimResponse {
    fn from(claim: &Claim) -> Self {
        Self {
            claim_id: claim.id(),
            policyholder_id: claim.policyholder_id(),
            claim_amount: claim.amount(),
            claim_amount_display: format_currency(claim.amount()),
            reason: claim.reason().to_string(),
            status: claim.status(),
            date_of_claim: claim.filed_at(),
        }
    }
}
