//! Risk analysis handlers

use axum::{extract::State, Json};
use std::collections::BTreeMap;

use domain_analytics::RiskAnalyzer;
use domain_policyholder::PolicyType;

use crate::dto::analytics::{by_policy_type, HighRiskResponse, PolicyTypeStatsResponse};
use crate::AppState;

/// Lists high-risk policyholders
pub async fn high_risk(State(state): State<AppState>) -> Json<Vec<HighRiskResponse>> {
    let store = state.store.read().await;
    let analyzer = RiskAnalyzer::new(&*store, state.clock.as_ref())
        .with_thresholds(state.config.risk);

    Json(
        analyzer
            .high_risk_policyholders()
            .into_iter()
            .map(HighRiskResponse::from)
            .collect(),
    )
}

/// Claim statistics per policy type
pub async fn by_policy_type_stats(
    State(state): State<AppState>,
) -> Json<BTreeMap<PolicyType, PolicyTypeStatsResponse>> {
    let store = state.store.read().await;
    let analyzer = RiskAnalyzer::new(&*store, state.clock.as_ref())
        .with_thresholds(state.config.risk);

    Json(by_policy_type(analyzer.claims_by_policy_type()))
}
