//! Policyholder handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use core_kernel::{Clock, PolicyholderId};
use domain_analytics::{ClaimFrequency, RiskAnalyzer};
use domain_policyholder::NewPolicyholder;

use crate::dto::claims::ClaimResponse;
use crate::dto::policyholders::*;
use crate::{error::ApiError, AppState};

/// Registers a policyholder
pub async fn create_policyholder(
    State(state): State<AppState>,
    Json(request): Json<CreatePolicyholderRequest>,
) -> Result<(StatusCode, Json<PolicyholderResponse>), ApiError> {
    let input = NewPolicyholder::try_from(request)?;
    let now = state.clock.now();

    let mut store = state.store.write().await;
    let holder = store.register_policyholder(input, now)?;

    Ok((StatusCode::CREATED, Json(PolicyholderResponse::from(&holder))))
}

/// Lists policyholders
pub async fn list_policyholders(State(state): State<AppState>) -> Json<Vec<PolicyholderResponse>> {
    let store = state.store.read().await;
    Json(
        store
            .list_policyholders()
            .into_iter()
            .map(PolicyholderResponse::from)
            .collect(),
    )
}

/// Gets a policyholder by ID
pub async fn get_policyholder(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PolicyholderResponse>, ApiError> {
    let id: PolicyholderId = id.parse()?;
    let store = state.store.read().await;

    store
        .get_policyholder(id)
        .map(|holder| Json(PolicyholderResponse::from(holder)))
        .ok_or_else(|| ApiError::not_found("Policyholder", id))
}

/// Lists the claims filed by a policyholder
pub async fn list_policyholder_claims(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let id: PolicyholderId = id.parse()?;
    let store = state.store.read().await;

    if store.get_policyholder(id).is_none() {
        return Err(ApiError::not_found("Policyholder", id));
    }

    Ok(Json(
        store
            .claims_for_policyholder(id)
            .into_iter()
            .map(ClaimResponse::from)
            .collect(),
    ))
}

/// Claim frequency for a policyholder
pub async fn claim_frequency(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ClaimFrequency>, ApiError> {
    let id: PolicyholderId = id.parse()?;
    let store = state.store.read().await;

    if store.get_policyholder(id).is_none() {
        return Err(ApiError::not_found("Policyholder", id));
    }

    let analyzer = RiskAnalyzer::new(&*store, state.clock.as_ref())
        .with_thresholds(state.config.risk);
    Ok(Json(analyzer.claim_frequency(id)))
}
