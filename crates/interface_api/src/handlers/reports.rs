//! Report handlers

use axum::{extract::State, Json};
use std::collections::BTreeMap;

use domain_analytics::{DashboardSummary, ReportGenerator, RiskAnalyzer};
use domain_policyholder::PolicyType;

use crate::dto::analytics::*;
use crate::AppState;

/// Claims per calendar month
pub async fn monthly(State(state): State<AppState>) -> Json<Vec<MonthlyClaimsResponse>> {
    let store = state.store.read().await;
    let generator = ReportGenerator::new(&*store).with_timezone(state.config.timezone);

    Json(
        generator
            .monthly_claims_report()
            .into_iter()
            .map(MonthlyClaimsResponse::from)
            .collect(),
    )
}

/// Average claim amount per policy type
pub async fn average_by_policy(
    State(state): State<AppState>,
) -> Json<BTreeMap<PolicyType, PolicyAverageResponse>> {
    let store = state.store.read().await;
    Json(by_policy_type(ReportGenerator::new(&*store).average_claim_by_policy()))
}

/// The largest claim on file, `null` when there are none
pub async fn highest_claim(State(state): State<AppState>) -> Json<Option<HighestClaimResponse>> {
    let store = state.store.read().await;

    Json(
        ReportGenerator::new(&*store)
            .highest_claim()
            .map(HighestClaimResponse::from),
    )
}

/// Pending claims, most recent first
pub async fn pending(State(state): State<AppState>) -> Json<Vec<PendingClaimResponse>> {
    let store = state.store.read().await;

    Json(
        ReportGenerator::new(&*store)
            .pending_claims_report()
            .into_iter()
            .map(PendingClaimResponse::from)
            .collect(),
    )
}

/// Headline dashboard figures
pub async fn dashboard(State(state): State<AppState>) -> Json<DashboardSummary> {
    let store = state.store.read().await;
    let analyzer = RiskAnalyzer::new(&*store, state.clock.as_ref())
        .with_thresholds(state.config.risk);

    Json(DashboardSummary::build(&*store, &analyzer))
}
