//! Risk and report DTOs
//!
//! Each response carries the raw figures from the analytics services plus
//! `*_display` strings formatted for the dashboard tables.

use serde::Serialize;
use std::collections::BTreeMap;

use core_kernel::{format_currency, format_percent};
use domain_analytics::{
    HighRiskPolicyholder, HighestClaim, MonthlyClaims, PendingClaim, PolicyAverage,
    PolicyTypeClaimStats,
};
use domain_policyholder::PolicyType;

#[derive(Debug, Serialize)]
pub struct HighRiskResponse {
    #[serde(flatten)]
    pub policyholder: HighRiskPolicyholder,
    pub claim_ratio_display: String,
    pub total_claim_amount_display: String,
}

impl From<HighRiskPolicyholder> for HighRiskResponse {
    fn from(policyholder: HighRiskPolicyholder) -> Self {
        Self {
            claim_ratio_display: format_percent(policyholder.claim_ratio),
            total_claim_amount_display: format_currency(policyholder.total_claim_amount),
            policyholder,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PolicyTypeStatsResponse {
    #[serde(flatten)]
    pub stats: PolicyTypeClaimStats,
    pub total_amount_display: String,
    pub average_amount_display: String,
}

impl From<PolicyTypeClaimStats> for PolicyTypeStatsResponse {
    fn from(stats: PolicyTypeClaimStats) -> Self {
        Self {
            total_amount_display: format_currency(stats.total_amount),
            average_amount_display: format_currency(stats.average_amount),
            stats,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MonthlyClaimsResponse {
    #[serde(flatten)]
    pub month: MonthlyClaims,
    pub total_amount_display: String,
    pub average_amount_display: String,
}

impl From<MonthlyClaims> for MonthlyClaimsResponse {
    fn from(month: MonthlyClaims) -> Self {
        Self {
            total_amount_display: format_currency(month.total_amount),
            average_amount_display: format_currency(month.average_amount),
            month,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PolicyAverageResponse {
    #[serde(flatten)]
    pub average: PolicyAverage,
    pub average_amount_display: String,
    pub total_amount_display: String,
}

impl From<PolicyAverage> for PolicyAverageResponse {
    fn from(average: PolicyAverage) -> Self {
        Self {
            average_amount_display: format_currency(average.average_amount),
            total_amount_display: format_currency(average.total_amount),
            average,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HighestClaimResponse {
    #[serde(flatten)]
    pub claim: HighestClaim,
    pub claim_amount_display: String,
}

impl From<HighestClaim> for HighestClaimResponse {
    fn from(claim: HighestClaim) -> Self {
        Self {
            claim_amount_display: format_currency(claim.claim_amount),
            claim,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PendingClaimResponse {
    #[serde(flatten)]
    pub claim: PendingClaim,
    pub claim_amount_display: String,
}

impl From<PendingClaim> for PendingClaimResponse {
    fn from(claim: PendingClaim) -> Self {
        Self {
            claim_amount_display: format_currency(claim.claim_amount),
            claim,
        }
    }
}

/// Converts every value of a per-policy-type map
pub fn by_policy_type<V, R: From<V>>(map: BTreeMap<PolicyType, V>) -> BTreeMap<PolicyType, R> {
    map.into_iter()
        .map(|(policy_type, value)| (policy_type, R::from(value)))
        .collect()
}
