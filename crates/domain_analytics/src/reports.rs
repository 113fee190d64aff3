//! Claim reports
//!
//! Read-only aggregations over the current records. Nothing here is cached:
//! each call scans the source again.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use core_kernel::{mean, round_amount, ClaimId, PolicyholderId, Timezone};
use domain_claims::{Claim, ClaimStatus};
use domain_policyholder::{PolicyType, Policyholder};

use crate::ports::RecordSource;
use crate::risk::RiskAnalyzer;

/// Claims filed in one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyClaims {
    /// `YYYY-MM` in the reporting timezone
    pub month: String,
    pub total_claims: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub average_amount: Decimal,
}

/// Claim amounts for one policy type, rounded to cents
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyAverage {
    #[serde(with = "rust_decimal::serde::float")]
    pub average_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub claim_count: usize,
}

/// The largest claim on file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighestClaim {
    pub claim_id: ClaimId,
    pub policyholder_id: PolicyholderId,
    pub policyholder_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub claim_amount: Decimal,
    #[serde(with = "core_kernel::temporal::timestamp")]
    pub date_of_claim: DateTime<Utc>,
    pub policy_type: PolicyType,
    pub status: ClaimStatus,
}

/// A claim awaiting a decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingClaim {
    pub claim_id: ClaimId,
    pub policyholder_id: PolicyholderId,
    pub policyholder_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub claim_amount: Decimal,
    #[serde(with = "core_kernel::temporal::timestamp")]
    pub date_of_claim: DateTime<Utc>,
    pub policy_type: PolicyType,
    pub reason: String,
}

/// Headline figures shown at the top of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total_policyholders: usize,
    pub total_claims: usize,
    pub pending_claims: usize,
    pub high_risk_policyholders: usize,
}

impl DashboardSummary {
    /// Computes the summary, counting high-risk policyholders with `analyzer`
    pub fn build(source: &dyn RecordSource, analyzer: &RiskAnalyzer<'_>) -> Self {
        let claims = source.claims();

        Self {
            total_policyholders: source.policyholders().len(),
            total_claims: claims.len(),
            pending_claims: claims.iter().filter(|claim| claim.is_pending()).count(),
            high_risk_policyholders: analyzer.high_risk_policyholders().len(),
        }
    }
}

/// Service producing the claim reports
pub struct ReportGenerator<'a> {
    source: &'a dyn RecordSource,
    timezone: Timezone,
}

impl<'a> ReportGenerator<'a> {
    /// Creates a generator reporting months in UTC
    pub fn new(source: &'a dyn RecordSource) -> Self {
        Self {
            source,
            timezone: Timezone::default(),
        }
    }

    /// Buckets months in `timezone` instead of UTC
    pub fn with_timezone(mut self, timezone: Timezone) -> Self {
        self.timezone = timezone;
        self
    }

    /// Claim count, total and mean per calendar month, oldest month first
    pub fn monthly_claims_report(&self) -> Vec<MonthlyClaims> {
        let mut months: BTreeMap<String, (usize, Decimal)> = BTreeMap::new();
        for claim in self.source.claims() {
            let entry = months
                .entry(self.timezone.month_key(claim.filed_at()))
                .or_insert((0, Decimal::ZERO));
            entry.0 += 1;
            entry.1 += claim.amount();
        }

        months
            .into_iter()
            .map(|(month, (total_claims, total_amount))| MonthlyClaims {
                month,
                total_claims,
                total_amount,
                average_amount: mean(total_amount, total_claims),
            })
            .collect()
    }

    /// Mean, total and count of claim amounts per policy type
    pub fn average_claim_by_policy(&self) -> BTreeMap<PolicyType, PolicyAverage> {
        let mut groups: BTreeMap<PolicyType, (usize, Decimal)> = BTreeMap::new();
        for (claim, holder) in self.source.claims_with_policyholders() {
            let entry = groups.entry(holder.policy_type()).or_insert((0, Decimal::ZERO));
            entry.0 += 1;
            entry.1 += claim.amount();
        }

        groups
            .into_iter()
            .map(|(policy_type, (claim_count, total))| {
                let average = PolicyAverage {
                    average_amount: round_amount(mean(total, claim_count)),
                    total_amount: round_amount(total),
                    claim_count,
                };
                (policy_type, average)
            })
            .collect()
    }

    /// The claim with the largest amount
    ///
    /// On a tie the claim seen first wins. Claims whose policyholder is
    /// unknown are not considered.
    pub fn highest_claim(&self) -> Option<HighestClaim> {
        self.source
            .claims_with_policyholders()
            .into_iter()
            .reduce(|best, candidate| {
                if candidate.0.amount() > best.0.amount() {
                    candidate
                } else {
                    best
                }
            })
            .map(|(claim, holder)| HighestClaim {
                claim_id: claim.id(),
                policyholder_id: holder.id(),
                policyholder_name: holder.name().to_string(),
                claim_amount: claim.amount(),
                date_of_claim: claim.filed_at(),
                policy_type: holder.policy_type(),
                status: claim.status(),
            })
    }

    /// Pending claims, most recently filed first
    pub fn pending_claims_report(&self) -> Vec<PendingClaim> {
        let mut pending: Vec<PendingClaim> = self
            .source
            .claims_with_policyholders()
            .into_iter()
            .filter(|(claim, _)| claim.is_pending())
            .map(|(claim, holder)| pending_row(claim, holder))
            .collect();

        pending.sort_by(|a, b| b.date_of_claim.cmp(&a.date_of_claim));
        pending
    }
}

fn pending_row(claim: &Claim, holder: &Policyholder) -> PendingClaim {
    PendingClaim {
        claim_id: claim.id(),
        policyholder_id: holder.id(),
        policyholder_name: holder.name().to_string(),
        claim_amount: claim.amount(),
        date_of_claim: claim.filed_at(),
        policy_type: holder.policy_type(),
        reason: claim.reason().to_string(),
    }
}
