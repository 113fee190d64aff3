//! Risk indicators
//!
//! The `RiskAnalyzer` answers three questions about the book of business:
//! how often a policyholder claims, which policyholders look risky, and how
//! claims break down by policy type.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use core_kernel::temporal::{within_trailing_days, TRAILING_WINDOW_DAYS};
use core_kernel::{mean, ratio, Clock, PolicyholderId};
use domain_claims::Claim;
use domain_policyholder::PolicyType;

use crate::ports::RecordSource;

/// Months in the trailing window, used for the per-month claim frequency
const MONTHS_PER_YEAR: u32 = 12;

/// Thresholds above which a policyholder is flagged as high risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    /// Flag when more claims than this were filed in the trailing year
    pub max_recent_claims: usize,
    /// Flag when total claimed / sum insured exceeds this ratio
    #[serde(with = "rust_decimal::serde::float")]
    pub max_claim_ratio: Decimal,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            max_recent_claims: 3,
            max_claim_ratio: dec!(0.8),
        }
    }
}

/// How often a policyholder has claimed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimFrequency {
    pub policyholder_id: PolicyholderId,
    pub total_claims: usize,
    pub claims_last_year: usize,
    /// Average claims per month over the trailing year
    #[serde(with = "rust_decimal::serde::float")]
    pub claim_frequency: Decimal,
}

/// A policyholder flagged by the risk thresholds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighRiskPolicyholder {
    pub policyholder_id: PolicyholderId,
    pub name: String,
    pub recent_claims: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub claim_ratio: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_claim_amount: Decimal,
}

/// Claim statistics for one policy type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyTypeClaimStats {
    pub total_claims: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub average_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub max_amount: Decimal,
    pub pending_claims: usize,
}

/// Service computing risk indicators over a record source
///
/// "Now" is read from the clock once, when the analyzer is created; every
/// trailing-year count made through the same analyzer uses that instant.
pub struct RiskAnalyzer<'a> {
    source: &'a dyn RecordSource,
    thresholds: RiskThresholds,
    now: DateTime<Utc>,
}

impl<'a> RiskAnalyzer<'a> {
    /// Creates an analyzer with the default thresholds
    pub fn new(source: &'a dyn RecordSource, clock: &dyn Clock) -> Self {
        Self {
            source,
            thresholds: RiskThresholds::default(),
            now: clock.now(),
        }
    }

    /// Overrides the high-risk thresholds
    pub fn with_thresholds(mut self, thresholds: RiskThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn thresholds(&self) -> RiskThresholds {
        self.thresholds
    }

    /// Claim counts for a policyholder
    ///
    /// A policyholder with no claims, including an unknown id, gets zeros.
    pub fn claim_frequency(&self, policyholder_id: PolicyholderId) -> ClaimFrequency {
        let claims = self.source.claims_for_policyholder(policyholder_id);
        let claims_last_year = self.count_recent(&claims);

        ClaimFrequency {
            policyholder_id,
            total_claims: claims.len(),
            claims_last_year,
            claim_frequency: Decimal::from(claims_last_year) / Decimal::from(MONTHS_PER_YEAR),
        }
    }

    /// Policyholders whose recent claim count or claim ratio exceeds the thresholds
    ///
    /// Policyholders without claims are never flagged. Results follow the
    /// source's policyholder order.
    pub fn high_risk_policyholders(&self) -> Vec<HighRiskPolicyholder> {
        let mut flagged = Vec::new();

        for holder in self.source.policyholders() {
            let claims = self.source.claims_for_policyholder(holder.id());
            if claims.is_empty() {
                continue;
            }

            let total_claim_amount: Decimal = claims.iter().map(|claim| claim.amount()).sum();
            let claim_ratio = match ratio(total_claim_amount, holder.sum_insured()) {
                Ok(value) => value,
                Err(e) => {
                    warn!(policyholder_id = %holder.id(), error = %e, "Cannot compute claim ratio");
                    continue;
                }
            };
            let recent_claims = self.count_recent(&claims);

            if recent_claims > self.thresholds.max_recent_claims
                || claim_ratio > self.thresholds.max_claim_ratio
            {
                flagged.push(HighRiskPolicyholder {
                    policyholder_id: holder.id(),
                    name: holder.name().to_string(),
                    recent_claims,
                    claim_ratio,
                    total_claim_amount,
                });
            }
        }

        flagged
    }

    /// Claim statistics grouped by the claimant's policy type
    ///
    /// Claims whose policyholder cannot be resolved are left out.
    pub fn claims_by_policy_type(&self) -> BTreeMap<PolicyType, PolicyTypeClaimStats> {
        let mut groups: BTreeMap<PolicyType, Vec<&Claim>> = BTreeMap::new();
        for (claim, holder) in self.source.claims_with_policyholders() {
            groups.entry(holder.policy_type()).or_default().push(claim);
        }

        groups
            .into_iter()
            .map(|(policy_type, claims)| {
                let total_amount: Decimal = claims.iter().map(|claim| claim.amount()).sum();
                let max_amount = claims
                    .iter()
                    .map(|claim| claim.amount())
                    .max()
                    .unwrap_or(Decimal::ZERO);

                let stats = PolicyTypeClaimStats {
                    total_claims: claims.len(),
                    total_amount,
                    average_amount: mean(total_amount, claims.len()),
                    max_amount,
                    pending_claims: claims.iter().filter(|claim| claim.is_pending()).count(),
                };
                (policy_type, stats)
            })
            .collect()
    }

    fn count_recent(&self, claims: &[&Claim]) -> usize {
        claims
            .iter()
            .filter(|claim| within_trailing_days(claim.filed_at(), self.now, TRAILING_WINDOW_DAYS))
            .count()
    }
}
