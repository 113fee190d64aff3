//! Analytics Domain
//!
//! Risk indicators and claim reports computed over the policyholder and
//! claim records. Both services read through the [`RecordSource`] port and
//! never mutate anything.
//!
//! - [`RiskAnalyzer`]: claim frequency, high-risk flags, per-policy-type stats
//! - [`ReportGenerator`]: monthly trend, averages, highest claim, pending list
//! - [`DashboardSummary`]: headline counts for the dashboard page

pub mod ports;
pub mod risk;
pub mod reports;

pub use ports::{RecordSnapshot, RecordSource};
pub use risk::{
    ClaimFrequency, HighRiskPolicyholder, PolicyTypeClaimStats, RiskAnalyzer, RiskThresholds,
};
pub use reports::{
    DashboardSummary, HighestClaim, MonthlyClaims, PendingClaim, PolicyAverage, ReportGenerator,
};
